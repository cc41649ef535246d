//! Response channel abstraction.
//!
//! The dispatcher never talks to the chat platform directly; it posts text
//! through this trait. Sends are fire-and-forget from the engine's
//! perspective: implementations handle (and log) their own delivery failures.

use async_trait::async_trait;

/// Outbound text channel back to the originating conversation.
///
/// `target_id` is either a channel id or a user id (for direct messages).
/// `in_reply_to` carries the platform timestamp of the triggering message
/// when the reply should thread under it. Must be safely callable multiple
/// times per invocation.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn post_message(&self, target_id: &str, text: &str, in_reply_to: Option<&str>);
}

/// Transport that prints to stdout. Used by the local console gateway.
pub struct ConsoleTransport;

#[async_trait]
impl ChatTransport for ConsoleTransport {
    async fn post_message(&self, target_id: &str, text: &str, _in_reply_to: Option<&str>) {
        println!("[{}] {}", target_id, text);
    }
}
