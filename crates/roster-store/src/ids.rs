//! Employee identifier generation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};
use roster_model::EmployeeId;
use sha2::{Digest, Sha256};

/// Bytes of digest appended after the timestamp.
const SUFFIX_BYTES: usize = 6;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Generate a fresh identifier: base-36 milliseconds of `now` plus a hex suffix.
///
/// The suffix is the head of a SHA-256 digest over the wall-clock nanoseconds,
/// the process id and a process-wide sequence number, so two calls within the
/// same process never hash the same input.
pub fn generate_id(now: DateTime<Utc>) -> EmployeeId {
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);

    let mut hasher = Sha256::new();
    hasher.update(nanos.to_le_bytes());
    hasher.update(std::process::id().to_le_bytes());
    hasher.update(sequence.to_le_bytes());
    let digest = hasher.finalize();

    EmployeeId::from_parts(millis, &digest[..SUFFIX_BYTES])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_for_identical_timestamps() {
        let now = Utc.with_ymd_and_hms(2024, 6, 20, 12, 0, 0).unwrap();
        let ids: HashSet<EmployeeId> = (0..1000).map(|_| generate_id(now)).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn id_starts_with_base36_timestamp() {
        let now = Utc.timestamp_millis_opt(36).unwrap();
        let id = generate_id(now);
        assert!(id.as_str().starts_with("10"));
        assert_eq!(id.as_str().len(), 2 + SUFFIX_BYTES * 2);
    }
}
