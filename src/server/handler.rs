use crate::context::Context;
use crate::encoding::Body;

/// Request handler invoked once per request with that request's [`Context`].
///
/// Returning `Some(body)` hands the value to
/// [`Context::write_any`]; `None` means the handler already wrote its
/// response through the context.
pub trait Handler: Send + Sync + 'static {
    fn call(&self, ctx: &mut Context<'_>) -> anyhow::Result<Option<Body>>;
}

impl<F> Handler for F
where
    F: Fn(&mut Context<'_>) -> anyhow::Result<Option<Body>> + Send + Sync + 'static,
{
    fn call(&self, ctx: &mut Context<'_>) -> anyhow::Result<Option<Body>> {
        self(ctx)
    }
}
