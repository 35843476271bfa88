//! Protocol Module
//!
//! Defines the text protocol and its message framing.
//!
//! ## Protocol Format (Text, One Command Family)
//!
//! ### Request
//! ```text
//! geoip <ip-address>
//! ```
//! Exactly one verb, `geoip` plus a single space (6 bytes, case-sensitive),
//! followed by the address to resolve. No trailing newline.
//!
//! ### Reply
//! - resolved:   `CC\tREGION\tCITY\tZIP\tLAT\tLON\tMETRO\tAREA`
//! - no match:   `NOT_FOUND`
//! - bad request: `ERROR`
//!
//! Both directions are bounded by the configured `max_message` cap.
//!
//! ### Framing
//! Payloads travel as length-prefixed frames:
//! ```text
//! ┌──────────┬─────────────────────────────┐
//! │ Len (4)  │         Payload             │
//! └──────────┴─────────────────────────────┘
//! ```

mod command;
mod response;
mod codec;

pub use command::{parse_command, Command, VERB};
pub use response::{Reply, ERROR_TOKEN, NOT_FOUND_TOKEN};
pub use codec::{read_message, write_message, LEN_PREFIX_SIZE, MAX_FRAME_SIZE};
