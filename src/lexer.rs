//! Command-line tokenization.
//!
//! Turns the command word plus the trailing message text into shell-like
//! tokens. Double-quoted spans are preserved as single tokens (quotes
//! stripped) so arguments may contain spaces. Non-ASCII input is
//! transliterated to its closest ASCII form first, keeping handler and
//! sub-command matching locale-independent.

use deunicode::deunicode;
use thiserror::Error;

/// Tokenization failures. Terminal for the invocation: no partial token
/// list is usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unterminated quoted span")]
    UnterminatedQuote,
}

/// Tokenize a command word and its trailing message text.
///
/// The two parts are joined with a single space before lexing, mirroring how
/// the chat platform splits the slash-command word from the free text.
pub fn tokenize(command: &str, message: &str) -> Result<Vec<String>, ParseError> {
    split_line(&deunicode(&format!("{} {}", command, message)))
}

/// Split a line into whitespace-delimited tokens with `"`-quoting.
fn split_line(line: &str) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    // Tracks whether `current` holds a token at all; a quoted empty span
    // ("" in the input) is a valid, empty token.
    let mut has_token = false;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        return Err(ParseError::UnterminatedQuote);
    }
    if has_token {
        tokens.push(current);
    }

    Ok(tokens)
}
