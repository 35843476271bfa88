//! Location record definition

/// Geographic metadata for a resolved IP address.
///
/// Fields that the database has no value for are carried as empty strings
/// (text fields) or zero (numeric fields) so that the wire serialization
/// always has the same shape.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoRecord {
    /// Two-letter ISO country code
    pub country_code: String,

    /// Region / subdivision code
    pub region: String,

    /// City name
    pub city: String,

    /// Postal code
    pub postal_code: String,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,

    /// US metro code (0 when not applicable)
    pub metro_code: u32,

    /// Telephone area code (0 when not applicable)
    pub area_code: u32,
}
