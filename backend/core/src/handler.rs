//! Interaction handler trait.
//!
//! A handler is the unit of deferred work bound to a command name or a
//! component custom id. It runs when the gateway delivers a matching
//! interaction and receives the live serenity context plus the interaction.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{Context, Interaction};

#[async_trait]
pub trait InteractionHandler: Send + Sync {
    async fn handle(&self, ctx: Context, interaction: Interaction) -> anyhow::Result<()>;
}

/// Handler shape stored in the registry.
pub type SharedHandler = Arc<dyn InteractionHandler>;

/// Adapter turning an async closure into an [`InteractionHandler`].
pub struct FnHandler<F> {
    f: F,
}

#[async_trait]
impl<F, Fut> InteractionHandler for FnHandler<F>
where
    F: Fn(Context, Interaction) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    async fn handle(&self, ctx: Context, interaction: Interaction) -> anyhow::Result<()> {
        (self.f)(ctx, interaction).await
    }
}

/// Wrap an async closure as a [`SharedHandler`].
///
/// ```ignore
/// let ping = handler_fn(|ctx, interaction| async move {
///     if let Interaction::Command(cmd) = interaction {
///         cmd.create_response(&ctx.http, pong_response()).await?;
///     }
///     Ok(())
/// });
/// ```
pub fn handler_fn<F, Fut>(f: F) -> SharedHandler
where
    F: Fn(Context, Interaction) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    Arc::new(FnHandler { f })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn noop(_ctx: Context, _interaction: Interaction) -> anyhow::Result<()> {
        Ok(())
    }

    fn _assert_object_safe(_: &dyn InteractionHandler) {}

    #[test]
    fn closures_become_shared_handlers() {
        let a = handler_fn(noop);
        let b = a.clone();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(Arc::strong_count(&a), 2);
    }
}
