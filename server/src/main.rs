use crate::error::StackTrace;
use crate::handler::AppModule;
use crate::route::{BookingRouter, CarRouter, UserRouter};
use error_stack::{Report, ResultExt};
use kernel::KernelError;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod controller;
mod error;
mod extract;
mod handler;
mod route;

static SERVER_PORT: &str = "SERVER_PORT";

fn port() -> error_stack::Result<u16, KernelError> {
    match dotenvy::var(SERVER_PORT) {
        Ok(port) => port
            .parse::<u16>()
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| format!("{SERVER_PORT} must be a port number, got {port}")),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(8080),
        Err(e) => Err(Report::new(e).change_context(KernelError::Internal)),
    }
}

pub fn router(app: AppModule) -> axum::Router {
    axum::Router::new()
        .route_car()
        .route_booking()
        .route_user()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app)
}

#[tokio::main]
async fn main() -> Result<(), StackTrace> {
    let appender = tracing_appender::rolling::daily(std::path::Path::new("./logs/"), "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_filter(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| {
                        "driver=debug,application=info,server=debug,tower_http=debug".into()
                    }),
                ))
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let app = AppModule::new()?;

    let bind = SocketAddr::from(([0, 0, 0, 0], port()?));
    let tcp = TcpListener::bind(bind)
        .await
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| "Failed to listen tcp")?;
    tracing::info!(%bind, "booking gateway listening");

    axum::serve(tcp, router(app).into_make_service())
        .await
        .change_context_lazy(|| KernelError::Internal)?;

    Ok(())
}
