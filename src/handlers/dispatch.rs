//! The dispatch engine.
//!
//! One pass per inbound message: tokenize, resolve permissions, then either
//! route to the handler addressed by the first token or broadcast the first
//! token as a sub-command to every registered handler. Usage text accumulates
//! during the pass and is delivered at the end, to the user directly or to
//! the channel depending on the `send_help_as_dm` switch.

use super::registry::Registry;
use super::traits::HandlerContext;
use crate::config::BotConfig;
use crate::error::{HandlerError, Outcome};
use crate::storage::Storage;
use crate::transport::ChatTransport;
use crate::{lexer, permissions, telemetry};
use anyhow::anyhow;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{Instrument, debug, error};

const MALFORMED_INPUT: &str = "Command failed : Malformed input.";

/// Result of one pass through the engine's state machine, before any
/// responses are delivered.
#[derive(Default)]
struct Pass {
    /// Whether any handler claimed the invocation (usage or dispatch).
    processed: bool,
    /// Usage text accumulated during the pass, in registry order for the
    /// broadcast case.
    usage: String,
}

/// The command dispatcher: owns the registry reference and the shared
/// collaborators, and threads them through every invocation.
pub struct Dispatcher {
    registry: Arc<Registry>,
    config: Arc<RwLock<BotConfig>>,
    transport: Arc<dyn ChatTransport>,
    storage: Arc<dyn Storage>,
}

impl Dispatcher {
    /// Create a dispatcher and initialize every registered handler with the
    /// shared collaborators. Call once at startup, after all registrations.
    pub fn new(
        registry: Arc<Registry>,
        config: Arc<RwLock<BotConfig>>,
        transport: Arc<dyn ChatTransport>,
        storage: Arc<dyn Storage>,
    ) -> Self {
        registry.initialize(&transport, &storage);
        Self {
            registry,
            config,
            transport,
            storage,
        }
    }

    /// Sole entry point from the messaging transport.
    ///
    /// Tokenizes the invocation; a malformed input gets the fixed failure
    /// reply and terminates the invocation without consulting any handler.
    pub async fn process(
        &self,
        command: &str,
        message: &str,
        timestamp: &str,
        channel_id: &str,
        user_id: &str,
    ) -> Outcome {
        debug!(command = %command, message = %message, user_id = %user_id, channel_id = %channel_id, "Processing message");

        let args = match lexer::tokenize(command, message) {
            Ok(args) => args,
            Err(_) => {
                self.transport
                    .post_message(channel_id, MALFORMED_INPUT, Some(timestamp))
                    .await;
                return Outcome::Malformed;
            }
        };

        self.process_command(command, message, &args, timestamp, channel_id, user_id, false)
            .await
    }

    /// Privileged replay entry point: the caller already holds a token list
    /// and may force admin rights for system-triggered re-dispatch.
    #[allow(clippy::too_many_arguments)]
    pub async fn process_command(
        &self,
        command: &str,
        message: &str,
        args: &[String],
        timestamp: &str,
        channel_id: &str,
        user_id: &str,
        admin_override: bool,
    ) -> Outcome {
        let span = telemetry::dispatch_span(command, user_id, channel_id);
        let pass = self
            .run_pass(args, timestamp, channel_id, user_id, admin_override)
            .instrument(span)
            .await;

        match pass {
            Ok(pass) => {
                let mut outcome = if pass.processed {
                    Outcome::Dispatched
                } else {
                    Outcome::Unknown
                };

                if !pass.processed {
                    let echoed = combine_input(command, message);
                    self.transport
                        .post_message(
                            channel_id,
                            &format!("Unknown handler or command : `{}`", echoed),
                            Some(timestamp),
                        )
                        .await;
                }

                if !pass.usage.is_empty() {
                    let target = if self.config.read().help_as_dm() {
                        user_id
                    } else {
                        channel_id
                    };
                    self.transport.post_message(target, &pass.usage, None).await;
                    outcome = Outcome::UsageRendered;
                }

                outcome
            }
            Err(HandlerError::InvalidCommand(msg)) => {
                self.transport
                    .post_message(channel_id, &msg, Some(timestamp))
                    .await;
                Outcome::UserError(msg)
            }
            Err(err) => {
                // Unexpected faults are isolated per invocation and never
                // reach the chat surface.
                error!(error = %err, error_code = err.error_code(), "An error has occurred while processing a command");
                Outcome::InternalFault
            }
        }
    }

    /// One walk through the state machine. Produces the processed flag and
    /// the usage accumulator; delivery happens in `process_command`.
    async fn run_pass(
        &self,
        args: &[String],
        timestamp: &str,
        channel_id: &str,
        user_id: &str,
        admin_override: bool,
    ) -> Result<Pass, HandlerError> {
        let first = args
            .first()
            .ok_or_else(|| HandlerError::Internal(anyhow!("empty token sequence")))?;
        let handler_name = first.to_lowercase();

        let is_admin = {
            let config = self.config.read();
            permissions::resolve(user_id, admin_override, &config.admin_users)
        };
        debug!(is_admin, "Resolved permissions");

        let ctx = HandlerContext {
            transport: &self.transport,
            storage: &self.storage,
            timestamp,
            channel_id,
            user_id,
            is_admin,
        };

        let mut pass = Pass::default();

        if let Some(handler) = self.registry.lookup(&handler_name) {
            // Named-handler path: the first token addressed a handler.
            if args.len() < 2 || args[1] == "help" {
                debug!(handler = %handler_name, "Sending usage info");
                pass.usage.push_str(&handler.usage(is_admin));
                pass.processed = true;
            } else {
                let subcommand = args[1].to_lowercase();
                if handler.can_handle(&subcommand, is_admin) {
                    debug!(handler = %handler_name, subcommand = %subcommand, "Handler claimed subcommand");
                    handler.process(&ctx, &subcommand, &args[2..]).await?;
                    pass.processed = true;
                } else {
                    // Falls through unprocessed; only the final
                    // unknown-command check fires.
                    debug!(handler = %handler_name, subcommand = %subcommand, "Handler cannot handle subcommand");
                }
            }
        } else {
            // Broadcast path: the first token is itself the sub-command
            // candidate, offered to every handler in registration order.
            let subcommand = handler_name;
            for (name, handler) in self.registry.iter() {
                if subcommand == "help" {
                    pass.usage.push_str(&handler.usage(is_admin));
                    pass.usage.push('\n');
                    pass.processed = true;
                } else if handler.can_handle(&subcommand, is_admin) {
                    debug!(handler = %name, subcommand = %subcommand, "Broadcast handler claimed subcommand");
                    handler.process(&ctx, &subcommand, &args[1..]).await?;
                    pass.processed = true;
                }
            }
        }

        Ok(pass)
    }
}

/// Echo text for the unknown-command reply: the original combined input.
fn combine_input(command: &str, message: &str) -> String {
    if message.is_empty() {
        command.to_string()
    } else {
        format!("{} {}", command, message)
    }
}
