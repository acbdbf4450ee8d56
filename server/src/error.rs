use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use kernel::{BookingRejection, KernelError};
use serde::Serialize;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl ErrorStatus {
    fn status(&self) -> StatusCode {
        match self.0.current_context() {
            KernelError::Rejected(BookingRejection::CarUnavailable) => StatusCode::CONFLICT,
            KernelError::Rejected(_) => StatusCode::BAD_REQUEST,
            KernelError::NotFound => StatusCode::NOT_FOUND,
            KernelError::Network => StatusCode::BAD_GATEWAY,
            KernelError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self.0.current_context() {
            KernelError::Rejected(rejection) => rejection.to_string(),
            KernelError::NotFound => "Not found".to_string(),
            KernelError::Network | KernelError::Timeout => {
                "Something went wrong. Please try again.".to_string()
            }
            KernelError::Internal => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{:?}", self.0);
        } else {
            tracing::debug!("{:?}", self.0);
        }
        (status, Json(ErrorMessage::new(self.message()))).into_response()
    }
}
