/// Database primary keys are PostgreSQL BIGSERIAL, except submission ids
/// which are client-generated opaque strings.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
