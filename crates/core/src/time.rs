#![forbid(unsafe_code)]

use time::OffsetDateTime;

/// Current UTC time as milliseconds since the Unix epoch, clamped to
/// the i64 range the storage schema uses.
pub fn now_ms() -> i64 {
    let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
    let ms = nanos / 1_000_000i128;
    if ms <= 0 {
        0
    } else if ms >= i64::MAX as i128 {
        i64::MAX
    } else {
        ms as i64
    }
}
