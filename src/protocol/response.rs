//! Reply formatting
//!
//! Turns a lookup outcome into the bounded reply payload.

use crate::geo::GeoRecord;

/// Reply token for an address not present in the database (9 bytes)
pub const NOT_FOUND_TOKEN: &[u8] = b"NOT_FOUND";

/// Reply token for a malformed request (5 bytes)
pub const ERROR_TOKEN: &[u8] = b"ERROR";

/// Outcome of one request, ready to serialize
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// The address resolved to a location record
    Found(GeoRecord),

    /// The address is not in the database
    NotFound,

    /// The request failed size or verb validation
    Error,
}

impl Reply {
    /// Serialize the reply, bounded to `max_message` bytes
    ///
    /// A resolved record becomes its eight fields tab-separated, with
    /// latitude and longitude pinned to six fractional digits so the bytes
    /// are reproducible across platforms. A serialization that would exceed
    /// the cap is truncated to exactly `max_message` bytes; the tokens are
    /// emitted whole, always under any sane cap.
    pub fn encode(&self, max_message: usize) -> Vec<u8> {
        let mut payload = match self {
            Reply::Found(record) => format!(
                "{}\t{}\t{}\t{}\t{:.6}\t{:.6}\t{}\t{}",
                record.country_code,
                record.region,
                record.city,
                record.postal_code,
                record.latitude,
                record.longitude,
                record.metro_code,
                record.area_code
            )
            .into_bytes(),
            Reply::NotFound => NOT_FOUND_TOKEN.to_vec(),
            Reply::Error => ERROR_TOKEN.to_vec(),
        };

        payload.truncate(max_message);
        payload
    }
}
