//! Benchmarks for the geoquery dispatch hot path

use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};

use geoquery::{Config, GeoProvider, GeoRecord, LookupService};

struct FixedProvider {
    record: GeoRecord,
}

impl GeoProvider for FixedProvider {
    fn lookup(&self, _addr: &str) -> Option<GeoRecord> {
        Some(self.record.clone())
    }
}

fn dispatch_benchmarks(c: &mut Criterion) {
    let provider = Arc::new(FixedProvider {
        record: GeoRecord {
            country_code: "US".to_string(),
            region: "CA".to_string(),
            city: "Mountain View".to_string(),
            postal_code: "94043".to_string(),
            latitude: 37.4,
            longitude: -122.1,
            metro_code: 0,
            area_code: 650,
        },
    });
    let service = LookupService::new(Config::default(), provider);

    c.bench_function("dispatch_resolved", |b| {
        b.iter(|| service.dispatch(std::hint::black_box(b"geoip 8.8.8.8")))
    });

    c.bench_function("dispatch_rejected", |b| {
        b.iter(|| service.dispatch(std::hint::black_box(b"ping")))
    });
}

criterion_group!(benches, dispatch_benchmarks);
criterion_main!(benches);
