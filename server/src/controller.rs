use std::future::IntoFuture;
use std::marker::PhantomData;

// Original: https://github.com/HalsekiRaika/architectured/blob/e5caa5c7ae801d1aaac6e275b3ea0ef26d6ff26b/server/src/controller.rs
/// Turns a request into the dto a service expects.
pub trait Intake<I>: 'static + Sync + Send {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

/// Turns a service result into a response.
pub trait Exhaust<I>: 'static + Sync + Send {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

pub struct Controller<T, P, I, D, O> {
    transformer: T,
    presenter: P,
    _i: PhantomData<I>,
    _d: PhantomData<D>,
    _o: PhantomData<O>,
}

impl<T, P, I, D, O> Controller<T, P, I, D, O> {
    pub fn new(transformer: T, presenter: P) -> Self {
        Self {
            transformer,
            presenter,
            _i: PhantomData,
            _d: PhantomData,
            _o: PhantomData,
        }
    }
}

impl<T, P, I, D, O> Controller<T, P, I, D, O>
where
    T: Intake<I, To = D>,
{
    pub fn intake(self, input: I) -> Transformed<P, D, O> {
        Transformed {
            transformed: self.transformer.emit(input),
            presenter: self.presenter,
            _o: PhantomData,
        }
    }
}

impl<P, O> Controller<(), P, (), (), O>
where
    P: Exhaust<O>,
{
    /// Runs a service call that takes no request input.
    pub async fn bypass<F, Fut, E>(self, f: F) -> Result<P::To, E>
    where
        F: FnOnce() -> Fut,
        Fut: IntoFuture<Output = Result<O, E>>,
    {
        Ok(self.presenter.emit(f().await?))
    }
}

pub struct Transformed<P, D, O> {
    transformed: D,
    presenter: P,
    _o: PhantomData<O>,
}

impl<P, D, O> Transformed<P, D, O>
where
    P: Exhaust<O>,
{
    pub async fn handle<F, Fut, E>(self, f: F) -> Result<P::To, E>
    where
        F: FnOnce(D) -> Fut,
        Fut: IntoFuture<Output = Result<O, E>>,
    {
        Ok(self.presenter.emit(f(self.transformed).await?))
    }
}

#[cfg(test)]
mod test {
    use super::{Controller, Exhaust, Intake};

    struct Doubler;

    impl Intake<i64> for Doubler {
        type To = i64;
        fn emit(&self, input: i64) -> Self::To {
            input * 2
        }
    }

    struct Shown;

    impl Exhaust<i64> for Shown {
        type To = String;
        fn emit(&self, input: i64) -> Self::To {
            input.to_string()
        }
    }

    #[tokio::test]
    async fn intake_then_present() {
        let shown = Controller::new(Doubler, Shown)
            .intake(21)
            .handle(|value| async move { Ok::<_, ()>(value) })
            .await;
        assert_eq!(shown, Ok("42".to_string()));
    }

    #[tokio::test]
    async fn bypass_skips_intake() {
        let shown = Controller::new((), Shown)
            .bypass(|| async { Err::<i64, _>("remote down") })
            .await;
        assert_eq!(shown, Err("remote down"));
    }
}
