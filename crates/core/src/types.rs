/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar date without a time zone (meeting days, dues dates).
pub type Date = chrono::NaiveDate;

/// Wall-clock time without a date (meeting start times).
pub type Time = chrono::NaiveTime;
