//! Service Tests
//!
//! Tests for the dispatcher, using a substitute lookup provider.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use geoquery::{Config, GeoProvider, GeoRecord, LookupService};

/// Provider double that records how often it was invoked
struct StubProvider {
    record: Option<GeoRecord>,
    calls: AtomicUsize,
}

impl StubProvider {
    fn returning(record: Option<GeoRecord>) -> Arc<Self> {
        Arc::new(Self {
            record,
            calls: AtomicUsize::new(0),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl GeoProvider for StubProvider {
    fn lookup(&self, _addr: &str) -> Option<GeoRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.record.clone()
    }
}

fn mountain_view() -> GeoRecord {
    GeoRecord {
        country_code: "US".to_string(),
        region: "CA".to_string(),
        city: "Mountain View".to_string(),
        postal_code: "94043".to_string(),
        latitude: 37.4,
        longitude: -122.1,
        metro_code: 0,
        area_code: 650,
    }
}

fn service_over(provider: Arc<StubProvider>) -> LookupService {
    LookupService::new(Config::default(), provider)
}

// =============================================================================
// Dispatch Outcome Tests
// =============================================================================

#[test]
fn test_dispatch_resolved_lookup() {
    let provider = StubProvider::returning(Some(mountain_view()));
    let service = service_over(Arc::clone(&provider));

    let reply = service.dispatch(b"geoip 8.8.8.8");

    assert_eq!(
        reply,
        b"US\tCA\tMountain View\t94043\t37.400000\t-122.100000\t0\t650"
    );
    assert_eq!(provider.call_count(), 1);
}

#[test]
fn test_dispatch_unresolved_lookup() {
    let provider = StubProvider::returning(None);
    let service = service_over(Arc::clone(&provider));

    let reply = service.dispatch(b"geoip 0.0.0.0");

    assert_eq!(reply, b"NOT_FOUND");
    assert_eq!(provider.call_count(), 1);
}

#[test]
fn test_dispatch_rejects_unknown_verb() {
    let provider = StubProvider::returning(Some(mountain_view()));
    let service = service_over(Arc::clone(&provider));

    let reply = service.dispatch(b"ping");

    assert_eq!(reply, b"ERROR");
    assert_eq!(provider.call_count(), 0);
}

#[test]
fn test_dispatch_rejects_oversized_request_without_lookup() {
    let provider = StubProvider::returning(Some(mountain_view()));
    let service = service_over(Arc::clone(&provider));

    // Valid verb, but 245 filler bytes push the total past the cap
    let mut request = b"geoip ".to_vec();
    request.extend_from_slice(&[b'a'; 245]);

    let reply = service.dispatch(&request);

    assert_eq!(reply, b"ERROR");
    assert_eq!(provider.call_count(), 0);
}

#[test]
fn test_dispatch_boundary_request_reaches_provider() {
    let provider = StubProvider::returning(None);
    let service = service_over(Arc::clone(&provider));

    // Largest payload that still leaves room for a terminator (cap 250)
    let mut request = b"geoip ".to_vec();
    request.resize(248, b'a');

    let reply = service.dispatch(&request);

    assert_eq!(reply, b"NOT_FOUND");
    assert_eq!(provider.call_count(), 1);
}

#[test]
fn test_dispatch_non_utf8_argument_is_not_found() {
    let provider = StubProvider::returning(Some(mountain_view()));
    let service = service_over(Arc::clone(&provider));

    let mut request = b"geoip ".to_vec();
    request.extend_from_slice(&[0xFF, 0xFE, 0x80]);

    let reply = service.dispatch(&request);

    // The provider takes an address string; bytes that are not UTF-8
    // cannot resolve, and never reach it.
    assert_eq!(reply, b"NOT_FOUND");
    assert_eq!(provider.call_count(), 0);
}

#[test]
fn test_dispatch_empty_argument_goes_to_provider() {
    let provider = StubProvider::returning(None);
    let service = service_over(Arc::clone(&provider));

    let reply = service.dispatch(b"geoip ");

    assert_eq!(reply, b"NOT_FOUND");
    assert_eq!(provider.call_count(), 1);
}

// =============================================================================
// Invariant Tests
// =============================================================================

#[test]
fn test_dispatch_is_idempotent() {
    let provider = StubProvider::returning(Some(mountain_view()));
    let service = service_over(Arc::clone(&provider));

    let first = service.dispatch(b"geoip 8.8.8.8");
    let second = service.dispatch(b"geoip 8.8.8.8");

    assert_eq!(first, second);
    assert_eq!(provider.call_count(), 2);
}

#[test]
fn test_dispatch_reply_never_exceeds_cap() {
    let mut record = mountain_view();
    record.city = "x".repeat(1000);

    let provider = StubProvider::returning(Some(record));
    let service = service_over(provider);

    let reply = service.dispatch(b"geoip 8.8.8.8");

    assert_eq!(reply.len(), 250);
}

#[test]
fn test_dispatch_honors_configured_cap() {
    let provider = StubProvider::returning(None);
    let config = Config::builder().max_message(16).build();
    let service = LookupService::new(config, Arc::clone(&provider) as Arc<dyn GeoProvider>);

    // 15 bytes + terminator hits a 16-byte cap
    let reply = service.dispatch(b"geoip 8.8.8.8.8");

    assert_eq!(reply, b"ERROR");
    assert_eq!(provider.call_count(), 0);
}
