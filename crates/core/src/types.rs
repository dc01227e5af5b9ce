/// Report and institution IDs are `uint256` on-chain but small in practice;
/// snapshots carry them as `u64`.
pub type RecordId = u64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
