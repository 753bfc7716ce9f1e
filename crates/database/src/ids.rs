use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Numeric record ids based on wall-clock milliseconds.
///
/// Ids keep the millisecond-timestamp shape of existing data but never
/// repeat: when two ids are requested within the same millisecond (or the
/// clock steps back) the next id is `last + 1`.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last.load(Ordering::Acquire);
        loop {
            let next = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return next,
                Err(current) => last = current,
            }
        }
    }

    /// Opaque string id for append-only records.
    pub fn next_uuid(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
