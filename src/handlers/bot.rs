//! Basic bot housekeeping commands.
//!
//! Handles:
//! - `ping` - Liveness check
//! - `version` - Show the running bot version
//! - `intro` - Short introduction and pointer to help

use super::traits::{Handler, HandlerContext};
use crate::error::{HandlerError, HandlerResult};
use async_trait::async_trait;

/// Handler for the `bot` command family.
pub struct BotHandler;

#[async_trait]
impl Handler for BotHandler {
    fn usage(&self, _is_admin: bool) -> String {
        String::from(
            "*bot* - Bot housekeeping\n\
             `bot ping` - Liveness check\n\
             `bot version` - Show the running bot version\n\
             `bot intro` - What this bot does\n",
        )
    }

    fn can_handle(&self, subcommand: &str, _is_admin: bool) -> bool {
        matches!(subcommand, "ping" | "version" | "intro")
    }

    async fn process(
        &self,
        ctx: &HandlerContext<'_>,
        subcommand: &str,
        _args: &[String],
    ) -> HandlerResult {
        let text = match subcommand {
            "ping" => "Pong!".to_string(),
            "version" => format!("ctfbot {}", env!("CARGO_PKG_VERSION")),
            "intro" => {
                "Hi! I keep track of CTFs and their challenges. Try `help` for a list of commands."
                    .to_string()
            }
            other => {
                return Err(HandlerError::invalid(format!(
                    "Unknown command : `{}`",
                    other
                )));
            }
        };

        ctx.transport
            .post_message(ctx.channel_id, &text, Some(ctx.timestamp))
            .await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_its_subcommands_regardless_of_permissions() {
        let handler = BotHandler;
        assert!(handler.can_handle("ping", false));
        assert!(handler.can_handle("version", true));
        assert!(!handler.can_handle("create", true));
    }

    #[test]
    fn test_usage_is_permission_independent() {
        let handler = BotHandler;
        assert_eq!(handler.usage(false), handler.usage(true));
    }
}
