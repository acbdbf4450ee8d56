use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::CurrentUser;
use crate::handler::AppModule;
use application::service::{
    BookingService, CancelBookingService, GetBookingService, QuoteBookingService,
};
use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};

use self::request::{CancelQuery, CancelRequest, CreateRequest, QuoteRequest, Transformer};
use self::response::Presenter;

mod request;
mod response;

pub trait BookingRouter {
    fn route_booking(self) -> Self;
}

impl BookingRouter for Router<AppModule> {
    fn route_booking(self) -> Self {
        self.route(
            "/cars/:id/quote",
            post(
                |State(module): State<AppModule>,
                 Path(id): Path<String>,
                 Json(req): Json<QuoteRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((id, req))
                        .handle(|dto| async move { module.api().quote_booking(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/bookings",
            get(
                |State(module): State<AppModule>, user: CurrentUser| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(user)
                        .handle(|dto| async move { module.api().get_renter_bookings(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>,
                 user: CurrentUser,
                 Json(req): Json<CreateRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((user, req))
                        .handle(|dto| async move { module.api().confirm_booking(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/bookings/:id",
            delete(
                |State(module): State<AppModule>,
                 user: CurrentUser,
                 Path(id): Path<String>,
                 Query(query): Query<CancelQuery>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(CancelRequest::new(user, id, query))
                        .handle(|dto| async move { module.api().cancel_booking(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
