use error_stack::Report;
use kernel::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Reqwest(reqwest::Error),
    #[error(transparent)]
    Env(dotenvy::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for DriverError {
    fn from(value: reqwest::Error) -> Self {
        Self::Reqwest(value)
    }
}

impl From<dotenvy::Error> for DriverError {
    fn from(value: dotenvy::Error) -> Self {
        Self::Env(value)
    }
}

pub(crate) trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

fn reqwest_report(error: reqwest::Error) -> Report<KernelError> {
    let context = if error.is_timeout() {
        KernelError::Timeout
    } else if error.is_decode() || error.is_builder() {
        KernelError::Internal
    } else {
        KernelError::Network
    };
    Report::from(error).change_context(context)
}

impl<T> ConvertError for Result<T, reqwest::Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(reqwest_report)
    }
}

impl<T> ConvertError for Result<T, DriverError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match error {
            DriverError::Reqwest(error) => reqwest_report(error),
            other => Report::from(other).change_context(KernelError::Internal),
        })
    }
}
