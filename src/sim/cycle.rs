use std::collections::HashMap;

use metrohash::MetroBuildHasher;

/// generations remembered before the history is dropped.
const HISTORY_LIMIT: usize = 1 << 14;

/// A repetition of the board state: generation `start + period` equals `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    pub start: u64,
    pub period: u64,
}

impl Cycle {
    pub fn is_still(&self) -> bool {
        self.period == 1
    }
}

#[derive(Debug, Default)]
pub struct CycleDetector {
    seen: HashMap<u64, u64, MetroBuildHasher>,
    cycle: Option<Cycle>,
}

impl CycleDetector {
    /// records a generation's fingerprint, returns the cycle when first found.
    pub fn observe(&mut self, generation: u64, fingerprint: u64) -> Option<Cycle> {
        if self.cycle.is_some() {
            return None;
        }
        if let Some(&start) = self.seen.get(&fingerprint) {
            let cycle = Cycle {
                start,
                period: generation - start,
            };
            self.cycle = Some(cycle);
            return Some(cycle);
        }
        if self.seen.len() >= HISTORY_LIMIT {
            self.seen.clear();
        }
        self.seen.insert(fingerprint, generation);
        None
    }

    pub fn cycle(&self) -> Option<Cycle> {
        self.cycle
    }

    pub fn forget(&mut self) {
        self.seen.clear();
        self.cycle = None;
    }
}

#[test]
fn test_detects_period() {
    let mut detector = CycleDetector::default();
    assert_eq!(detector.observe(0, 10), None);
    assert_eq!(detector.observe(1, 20), None);
    assert_eq!(detector.observe(2, 30), None);
    let cycle = detector.observe(3, 20).unwrap();
    assert_eq!(cycle, Cycle { start: 1, period: 2 });
    assert!(!cycle.is_still());
    assert_eq!(detector.observe(4, 30), None);
    assert_eq!(detector.cycle(), Some(cycle));

    detector.forget();
    assert_eq!(detector.cycle(), None);
    assert_eq!(detector.observe(5, 20), None);
}
