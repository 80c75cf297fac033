// tests/support/mocks/util.rs
use altum_legal::application::ports::{time::Clock, util::IdGenerator};
use altum_legal::domain::shared::DocumentId;
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU64, Ordering};

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0)
        .single()
        .expect("valid fixed timestamp")
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

#[derive(Default, Clone)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Hex ids counting up from `…01`, shaped like MongoDB object ids.
#[derive(Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn starting_at(n: u64) -> Self {
        Self {
            next: AtomicU64::new(n),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> DocumentId {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        DocumentId::new(format!("{n:024x}")).expect("hex id")
    }
}
