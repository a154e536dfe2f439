//! Catalog metrics: index builds and lookup outcomes.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global catalog metrics singleton.
pub struct CatalogMetrics {
    /// Family indices built (typed registries and token cache together)
    index_builds: AtomicUsize,

    /// Lookups that found an entry
    lookup_hits: AtomicUsize,

    /// Lookups that found nothing
    lookup_misses: AtomicUsize,
}

static METRICS: OnceLock<CatalogMetrics> = OnceLock::new();

impl CatalogMetrics {
    fn new() -> Self {
        Self {
            index_builds: AtomicUsize::new(0),
            lookup_hits: AtomicUsize::new(0),
            lookup_misses: AtomicUsize::new(0),
        }
    }

    /// Get the global catalog metrics instance.
    pub fn global() -> &'static CatalogMetrics {
        METRICS.get_or_init(CatalogMetrics::new)
    }

    pub fn record_index_build(&self) {
        self.index_builds.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one lookup and whether it found an entry.
    pub fn record_lookup(&self, found: bool) {
        if found {
            self.lookup_hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.lookup_misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn index_builds(&self) -> usize {
        self.index_builds.load(Ordering::Relaxed)
    }

    pub fn lookup_hits(&self) -> usize {
        self.lookup_hits.load(Ordering::Relaxed)
    }

    pub fn lookup_misses(&self) -> usize {
        self.lookup_misses.load(Ordering::Relaxed)
    }

    /// Total lookups, hits plus misses.
    pub fn lookups(&self) -> usize {
        self.lookup_hits() + self.lookup_misses()
    }

    pub fn report(&self) -> MetricsReport {
        let hits = self.lookup_hits();
        let misses = self.lookup_misses();
        let lookups = hits + misses;
        let hit_rate = if lookups > 0 {
            (hits as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            index_builds: self.index_builds(),
            lookups,
            lookup_hits: hits,
            lookup_misses: misses,
            hit_rate,
        }
    }
}

/// Snapshot of catalog counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub index_builds: usize,
    pub lookups: usize,
    pub lookup_hits: usize,
    pub lookup_misses: usize,

    /// Lookup hit rate as a percentage (0-100)
    pub hit_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Local instances keep these tests independent of lookups made elsewhere.

    #[test]
    fn test_record_lookup_hit_and_miss() {
        let metrics = CatalogMetrics::new();

        metrics.record_lookup(true);
        metrics.record_lookup(false);
        metrics.record_lookup(true);

        assert_eq!(metrics.lookups(), 3);
        assert_eq!(metrics.lookup_hits(), 2);
        assert_eq!(metrics.lookup_misses(), 1);
    }

    #[test]
    fn test_report_empty() {
        let report = CatalogMetrics::new().report();

        assert_eq!(report.index_builds, 0);
        assert_eq!(report.lookups, 0);
        assert_eq!(report.hit_rate, 0.0);
    }

    #[test]
    fn test_report_hit_rate() {
        let metrics = CatalogMetrics::new();

        // 3 hits, 1 miss = 75% hit rate
        metrics.record_lookup(true);
        metrics.record_lookup(true);
        metrics.record_lookup(true);
        metrics.record_lookup(false);
        metrics.record_index_build();

        let report = metrics.report();
        assert_eq!(report.index_builds, 1);
        assert_eq!(report.hit_rate, 75.0);
    }

    #[test]
    fn test_report_consistent_under_concurrent_misses() {
        let metrics = std::sync::Arc::new(CatalogMetrics::new());
        metrics.record_lookup(true);

        let writers: Vec<_> = (0..4)
            .map(|_| {
                let metrics = std::sync::Arc::clone(&metrics);
                std::thread::spawn(move || {
                    for _ in 0..50_000 {
                        metrics.record_lookup(false);
                    }
                })
            })
            .collect();

        while writers.iter().any(|w| !w.is_finished()) {
            let report = metrics.report();
            assert_eq!(report.lookups, report.lookup_hits + report.lookup_misses);
            assert!((0.0..=100.0).contains(&report.hit_rate));
        }
        for writer in writers {
            writer.join().expect("Writer should not panic");
        }

        let report = metrics.report();
        assert_eq!(report.lookup_misses, 200_000);
        assert_eq!(report.lookups, 200_001);
    }

    #[test]
    fn test_global_returns_same_instance() {
        let metrics1 = CatalogMetrics::global();
        let metrics2 = CatalogMetrics::global();

        assert!(std::ptr::eq(metrics1, metrics2));
    }

    #[test]
    fn test_global_counters_are_monotonic() {
        let metrics = CatalogMetrics::global();
        let before = metrics.lookups();
        metrics.record_lookup(false);

        assert!(metrics.lookups() > before);
    }
}
