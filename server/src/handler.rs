use driver::database::RestApi;
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;
use vodca::References;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init()?)))
    }

    #[cfg(test)]
    pub fn with_api(api: RestApi) -> Self {
        Self(Arc::new(Handler { api }))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    api: RestApi,
}

impl Handler {
    pub fn init() -> error_stack::Result<Self, KernelError> {
        let api = RestApi::new()?;
        tracing::debug!("rental api client ready");

        Ok(Self { api })
    }
}
