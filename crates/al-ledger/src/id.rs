// id.rs — Record identifiers.
//
// Format: `<YYYYMMDD>T<HHMMSS>Z-<4 hex>`, e.g. `20260131T034656Z-9f0c`.
// The timestamp prefix sorts lexically in creation order to the second; the
// suffix only separates records written within the same second. It is not a
// security token and collisions, while unlikely, are tolerated.

use chrono::{DateTime, Utc};

/// Timestamp layout of the id prefix.
pub const ID_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Build an id for a record created at `now`.
pub fn generate_id(now: DateTime<Utc>) -> String {
    format!(
        "{}-{:04x}",
        now.format(ID_TIMESTAMP_FORMAT),
        rand::random::<u16>()
    )
}
