/// All to-do identifiers are random UUIDs (v4), assigned at creation.
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
