//! MaxMind-backed provider
//!
//! Reads a GeoIP2/GeoLite2 City database (.mmdb) into memory once at
//! startup and serves lookups from it for the life of the process.

use std::net::IpAddr;
use std::path::Path;

use maxminddb::{geoip2, MaxMindDBError, Reader};

use crate::error::{GeoQueryError, Result};
use crate::geo::{GeoProvider, GeoRecord};

/// Provider over a MaxMind City database
pub struct MaxMindProvider {
    reader: Reader<Vec<u8>>,
}

impl MaxMindProvider {
    /// Open a City database file
    ///
    /// Reads the whole file into memory. Any failure here (missing file,
    /// corrupt metadata) should be treated as fatal by the caller; there is
    /// no late binding of the database.
    pub fn open(path: &Path) -> Result<Self> {
        let reader = Reader::open_readfile(path).map_err(|e| {
            GeoQueryError::Database(format!("cannot open {}: {}", path.display(), e))
        })?;

        tracing::info!("Loaded geo database from {}", path.display());
        Ok(Self { reader })
    }
}

impl GeoProvider for MaxMindProvider {
    fn lookup(&self, addr: &str) -> Option<GeoRecord> {
        // The argument arrives verbatim from the wire; anything that is not
        // an IP address simply does not resolve.
        let ip: IpAddr = addr.parse().ok()?;

        let city: geoip2::City = match self.reader.lookup(ip) {
            Ok(city) => city,
            Err(MaxMindDBError::AddressNotFoundError(_)) => return None,
            Err(e) => {
                tracing::warn!("Lookup failed for {}: {}", addr, e);
                return None;
            }
        };

        let location = city.location.as_ref();

        Some(GeoRecord {
            country_code: city
                .country
                .as_ref()
                .and_then(|c| c.iso_code)
                .unwrap_or("")
                .to_string(),
            region: city
                .subdivisions
                .as_ref()
                .and_then(|s| s.first())
                .and_then(|s| s.iso_code)
                .unwrap_or("")
                .to_string(),
            city: city
                .city
                .as_ref()
                .and_then(|c| c.names.as_ref())
                .and_then(|names| names.get("en").copied())
                .unwrap_or("")
                .to_string(),
            postal_code: city
                .postal
                .as_ref()
                .and_then(|p| p.code)
                .unwrap_or("")
                .to_string(),
            latitude: location.and_then(|l| l.latitude).unwrap_or(0.0),
            longitude: location.and_then(|l| l.longitude).unwrap_or(0.0),
            metro_code: location.and_then(|l| l.metro_code).unwrap_or(0) as u32,
            // GeoIP2 databases carry no telephone area codes; the field
            // stays in the wire format with a fixed zero value.
            area_code: 0,
        })
    }
}
