//! Command parsing
//!
//! Validates a raw request payload and extracts the command.

use crate::error::{GeoQueryError, Result};

/// The one command verb, including its trailing space
pub const VERB: &[u8] = b"geoip ";

/// A validated command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Resolve an IP address to a location record
    Lookup { addr: Vec<u8> },
}

/// Parse a raw request payload into a command
///
/// Validation order matters: the size bound is checked before anything is
/// parsed, so an oversized payload is rejected without being inspected.
/// The argument after the verb is taken verbatim up to the payload's actual
/// length; its syntax is the lookup provider's concern, not the parser's.
pub fn parse_command(raw: &[u8], max_message: usize) -> Result<Command> {
    // Room must remain for a terminating byte under the cap.
    if raw.len() + 1 >= max_message {
        return Err(GeoQueryError::Protocol(format!(
            "Request too large: {} bytes (cap {})",
            raw.len(),
            max_message
        )));
    }

    if !raw.starts_with(VERB) {
        return Err(GeoQueryError::Protocol(
            "Unknown command verb".to_string(),
        ));
    }

    Ok(Command::Lookup {
        addr: raw[VERB.len()..].to_vec(),
    })
}
