//! ctfbot - chat-integrated CTF assistant bot.
//!
//! The crate is organized around the command-dispatch core: inbound chat
//! messages are tokenized, matched against a registry of command handlers,
//! permission-checked, and routed to the handler that claims them. The chat
//! transport and the storage backend are trait collaborators so the core can
//! be driven by any platform (or by tests).

pub mod config;
pub mod error;
pub mod handlers;
pub mod lexer;
pub mod models;
pub mod permissions;
pub mod storage;
pub mod telemetry;
pub mod transport;

pub use config::Config;
pub use error::{HandlerError, Outcome};
pub use handlers::{Dispatcher, Handler, HandlerContext, Registry};
