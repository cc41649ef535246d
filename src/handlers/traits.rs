//! Handler capability contract.
//!
//! Every command family implements [`Handler`]: it renders its own usage
//! text, answers whether it can service a sub-command for the resolved
//! permission level, and executes the sub-command. Handlers must be safe
//! under concurrent `process` calls; the engine holds no locks for them.

use crate::error::HandlerResult;
use crate::storage::Storage;
use crate::transport::ChatTransport;
use async_trait::async_trait;
use std::sync::Arc;

/// Per-invocation context passed to each handler.
///
/// Carries the shared collaborators plus the identity of the triggering
/// message. Built fresh for every dispatch; never persisted.
pub struct HandlerContext<'a> {
    /// Outbound response channel.
    pub transport: &'a Arc<dyn ChatTransport>,
    /// CTF record store.
    pub storage: &'a Arc<dyn Storage>,
    /// Platform timestamp of the triggering message.
    pub timestamp: &'a str,
    /// Channel the message arrived in.
    pub channel_id: &'a str,
    /// User who sent the message.
    pub user_id: &'a str,
    /// Resolved admin status for this invocation.
    pub is_admin: bool,
}

/// A pluggable command-family implementation.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Render usage text for this handler, filtered by permission level so
    /// admin-only sub-commands appear only for admins.
    fn usage(&self, is_admin: bool) -> String;

    /// Whether this handler can service `subcommand` at the given permission
    /// level. Sub-commands arrive lower-cased.
    fn can_handle(&self, subcommand: &str, is_admin: bool) -> bool;

    /// Execute a sub-command. Only called after `can_handle` returned true.
    async fn process(
        &self,
        ctx: &HandlerContext<'_>,
        subcommand: &str,
        args: &[String],
    ) -> HandlerResult;

    /// One-time startup hook supplying shared collaborators. Called by
    /// [`Registry::initialize`](super::Registry::initialize) before any
    /// dispatch; most handlers take their collaborators from the context
    /// instead and keep the default no-op.
    fn init(&self, _transport: &Arc<dyn ChatTransport>, _storage: &Arc<dyn Storage>) {}
}
