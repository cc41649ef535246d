//! Domain records manipulated by the command handlers.

use serde::{Deserialize, Serialize};

/// An ongoing CTF event, anchored to the chat channel it was created in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ctf {
    /// Channel the CTF lives in.
    pub channel_id: String,
    /// Short name, used as the lookup key.
    pub name: String,
    /// Human-readable event name.
    pub long_name: String,
    /// Challenges tracked under this CTF.
    #[serde(default)]
    pub challenges: Vec<Challenge>,
    /// Shared scoreboard credentials, if any.
    #[serde(default)]
    pub cred_user: String,
    #[serde(default)]
    pub cred_pw: String,
    /// Whether the event has been marked finished.
    #[serde(default)]
    pub finished: bool,
    /// Unix timestamp of when the event was finished (0 if running).
    #[serde(default)]
    pub finished_on: i64,
}

impl Ctf {
    /// Create a new, running CTF.
    pub fn new(channel_id: impl Into<String>, name: impl Into<String>, long_name: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            name: name.into(),
            long_name: long_name.into(),
            challenges: Vec::new(),
            cred_user: String::new(),
            cred_pw: String::new(),
            finished: false,
            finished_on: 0,
        }
    }

    /// Track a challenge under this CTF.
    pub fn add_challenge(&mut self, challenge: Challenge) {
        self.challenges.push(challenge);
    }
}

/// A single challenge inside a CTF.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    /// Channel the challenge is discussed in.
    pub channel_id: String,
    /// Challenge name.
    pub name: String,
    /// Category (pwn, web, crypto, ...), if known.
    #[serde(default)]
    pub category: Option<String>,
    /// Whether the challenge has been solved.
    #[serde(default)]
    pub solved: bool,
}
