//! Command handlers and the dispatch engine.
//!
//! Each handler module registers the sub-commands it can service; the
//! dispatch engine checks `can_handle`, resolves the invocation and routes
//! it. See [`dispatch::Dispatcher`] for the state machine.

mod bot;
mod ctf;
mod dispatch;
mod registry;
mod traits;

pub use bot::BotHandler;
pub use ctf::CtfHandler;
pub use dispatch::Dispatcher;
pub use registry::Registry;
pub use traits::{Handler, HandlerContext};

use std::sync::Arc;

/// Build the registry with every built-in handler registered, in the order
/// broadcast resolution should consult them.
pub fn default_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register("ctf", Arc::new(CtfHandler));
    registry.register("bot", Arc::new(BotHandler));
    registry
}
