//! Service Module
//!
//! The dispatcher at the center of the request/reply loop.
//!
//! ## Responsibilities
//! - Validate and parse each raw request payload
//! - Route the argument to the geo-lookup provider
//! - Format the outcome into a bounded reply
//!
//! Every request yields exactly one reply; the service holds no state
//! across calls, so identical requests always produce identical replies.

use std::str;
use std::sync::Arc;

use crate::config::Config;
use crate::geo::GeoProvider;
use crate::protocol::{parse_command, Command, Reply};

/// Resolves raw request payloads into reply payloads
pub struct LookupService {
    /// Service configuration (payload cap)
    config: Config,

    /// The injected geo-lookup provider
    provider: Arc<dyn GeoProvider>,
}

impl LookupService {
    /// Create a service over the given provider
    pub fn new(config: Config, provider: Arc<dyn GeoProvider>) -> Self {
        Self { config, provider }
    }

    /// The configured payload cap
    pub fn max_message(&self) -> usize {
        self.config.max_message
    }

    /// Resolve one raw request into one reply payload
    ///
    /// Malformed input (oversized payload, wrong verb) never reaches the
    /// provider; it short-circuits to the `ERROR` token.
    pub fn dispatch(&self, raw: &[u8]) -> Vec<u8> {
        let reply = match parse_command(raw, self.config.max_message) {
            Ok(Command::Lookup { addr }) => self.resolve(&addr),
            Err(e) => {
                tracing::debug!("Rejected request: {}", e);
                Reply::Error
            }
        };

        reply.encode(self.config.max_message)
    }

    /// Run the lookup for an extracted argument
    ///
    /// The argument is whatever followed the verb, verbatim. The provider
    /// takes an address string, so bytes that are not UTF-8 cannot resolve.
    fn resolve(&self, addr: &[u8]) -> Reply {
        let addr = match str::from_utf8(addr) {
            Ok(addr) => addr,
            Err(_) => return Reply::NotFound,
        };

        match self.provider.lookup(addr) {
            Some(record) => Reply::Found(record),
            None => Reply::NotFound,
        }
    }
}
