use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::CurrentUser;
use crate::handler::AppModule;
use application::service::{GetCarService, HandleCarService};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use self::request::{CreateRequest, DeleteRequest, GetRequest, Transformer, UpdateRequest};
use self::response::{CarResponse, Presenter};

mod request;
pub(super) mod response;

pub trait CarRouter {
    fn route_car(self) -> Self;
}

impl CarRouter for Router<AppModule> {
    fn route_car(self) -> Self {
        self.route(
            "/cars",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), Presenter)
                    .bypass(|| async move { module.api().get_all_cars().await })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>,
                 user: CurrentUser,
                 Json(req): Json<CreateRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((user, req))
                        .handle(|dto| async move { module.api().add_car(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/cars/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(GetRequest::new(id))
                        .handle(|dto| async move { module.api().get_car(&dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(CarResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            )
            .put(
                |State(module): State<AppModule>,
                 user: CurrentUser,
                 Path(id): Path<String>,
                 Json(req): Json<UpdateRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((user, id, req))
                        .handle(|dto| async move { module.api().update_car(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>,
                 user: CurrentUser,
                 Path(id): Path<String>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(DeleteRequest::new(user, id))
                        .handle(|dto| async move { module.api().delete_car(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/my-cars",
            get(
                |State(module): State<AppModule>, user: CurrentUser| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(user)
                        .handle(|dto| async move { module.api().get_provider_cars(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
