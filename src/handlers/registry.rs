//! Command handler registry.
//!
//! Built once at startup, then shared read-only behind an `Arc`. Broadcast
//! resolution iterates handlers in registration order, so the registry keeps
//! entries as an insertion-ordered list rather than a plain map.

use super::traits::Handler;
use crate::storage::Storage;
use crate::transport::ChatTransport;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};

/// Ordered name-to-handler registry.
#[derive(Default)]
pub struct Registry {
    entries: Vec<(String, Arc<dyn Handler>)>,
    initialized: AtomicBool,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under `name`.
    ///
    /// Re-registering an existing name silently replaces the prior handler
    /// while keeping its original position in the iteration order.
    pub fn register(&mut self, name: impl Into<String>, handler: Arc<dyn Handler>) {
        let name = name.into();
        info!(handler = %name, "Registering new handler");

        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = handler;
        } else {
            self.entries.push((name, handler));
        }
    }

    /// Exact-match lookup. The dispatch engine lower-cases keys before
    /// querying, which is what makes lookups case-insensitive in practice.
    pub fn lookup(&self, name: &str) -> Option<&Arc<dyn Handler>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, h)| h)
    }

    /// All handlers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Handler>)> {
        self.entries.iter().map(|(n, h)| (n.as_str(), h))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One-time fan-out supplying every handler with shared collaborators.
    /// Must run after all `register` calls and before the first dispatch.
    pub fn initialize(&self, transport: &Arc<dyn ChatTransport>, storage: &Arc<dyn Storage>) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            warn!("Registry::initialize called more than once; ignoring");
            return;
        }

        for (name, handler) in &self.entries {
            info!(handler = %name, "Initializing handler");
            handler.init(transport, storage);
        }
    }
}
