/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Calendar dates carry no time or zone component.
pub type Date = chrono::NaiveDate;
