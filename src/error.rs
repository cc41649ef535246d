//! Error taxonomy for command dispatch.
//!
//! Handlers communicate expected, user-correctable problems with
//! [`HandlerError::InvalidCommand`]; the dispatcher relays that text verbatim
//! to the originating channel. Everything else is an internal fault: logged
//! with full detail, never surfaced over the chat channel.

use thiserror::Error;

/// Errors that can occur while a handler executes a sub-command.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Expected failure with a human-readable explanation for the user.
    #[error("{0}")]
    InvalidCommand(String),

    /// Unexpected fault. Logged, swallowed, never shown to the user.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl HandlerError {
    /// Build an [`HandlerError::InvalidCommand`] from any displayable message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidCommand(msg.into())
    }

    /// Static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCommand(_) => "invalid_command",
            Self::Internal(_) => "internal_error",
        }
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;

/// Terminal outcome of one dispatch pass.
///
/// Exactly one outcome is produced per invocation. `UsageRendered` and
/// `Unknown` are mutually exclusive: accumulated usage text implies the
/// invocation was processed, which suppresses the unknown-command branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A handler's `process` ran to completion.
    Dispatched,
    /// Usage text was rendered and sent (help request or bare handler name).
    UsageRendered,
    /// No handler claimed the input; the unknown-command reply was sent.
    Unknown,
    /// A handler rejected the input; its explanation was relayed to the user.
    UserError(String),
    /// An unexpected fault was logged and swallowed. No reply was sent.
    InternalFault,
    /// Tokenization failed; the fixed malformed-input reply was sent.
    Malformed,
}
