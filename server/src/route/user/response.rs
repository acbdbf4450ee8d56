use axum::http::StatusCode;

use crate::controller::Exhaust;

pub struct Presenter;

impl Exhaust<()> for Presenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}
