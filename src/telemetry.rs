//! Standardized span constructors for dispatch observability.

use tracing::{Span, info_span};

/// Create a span for one inbound message dispatch.
pub fn dispatch_span(command: &str, user_id: &str, channel_id: &str) -> Span {
    info_span!("dispatch", command = %command, user_id = %user_id, channel_id = %channel_id)
}
