use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::CurrentUser;
use crate::handler::AppModule;
use application::service::SaveUserService;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use self::request::{SaveRequest, Transformer};
use self::response::Presenter;

mod request;
mod response;

pub trait UserRouter {
    fn route_user(self) -> Self;
}

impl UserRouter for Router<AppModule> {
    fn route_user(self) -> Self {
        self.route(
            "/users",
            post(
                |State(module): State<AppModule>,
                 user: CurrentUser,
                 Json(req): Json<SaveRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((user, req))
                        .handle(|dto| async move { module.api().save_user(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
