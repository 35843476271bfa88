//! Message framing
//!
//! Length-prefixed framing that carries request and reply payloads as
//! opaque byte messages over a stream transport.
//!
//! ## Wire Format
//! ```text
//! ┌──────────┬─────────────────────────────┐
//! │ Len (4)  │         Payload             │
//! └──────────┴─────────────────────────────┘
//! ```
//!
//! The declared length is always derived from the payload actually written,
//! so a frame can never claim more bytes than it carries.

use std::io::{Read, Write};

use crate::error::{GeoQueryError, Result};

/// Frame header size: 4-byte big-endian payload length
pub const LEN_PREFIX_SIZE: usize = 4;

/// Transport-level bound on a single frame (64 KiB)
///
/// Far above the protocol's own payload cap; a frame declaring more than
/// this is a broken peer, not an oversized command.
pub const MAX_FRAME_SIZE: u32 = 64 * 1024;

/// Read one complete message from a stream
///
/// Blocks until the full frame arrives or an error occurs.
pub fn read_message<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
    let mut header = [0u8; LEN_PREFIX_SIZE];
    reader.read_exact(&mut header)?;

    let payload_len = u32::from_be_bytes(header);
    if payload_len > MAX_FRAME_SIZE {
        return Err(GeoQueryError::Protocol(format!(
            "Frame too large: {} bytes (max {})",
            payload_len, MAX_FRAME_SIZE
        )));
    }

    let mut payload = vec![0u8; payload_len as usize];
    if payload_len > 0 {
        reader.read_exact(&mut payload)?;
    }

    Ok(payload)
}

/// Write one message to a stream
pub fn write_message<W: Write>(writer: &mut W, payload: &[u8]) -> Result<()> {
    writer.write_all(&(payload.len() as u32).to_be_bytes())?;
    writer.write_all(payload)?;
    writer.flush()?;
    Ok(())
}
