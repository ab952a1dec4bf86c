/// All database primary keys are PostgreSQL UUIDs, assigned by the
/// database on first insert and opaque to clients.
pub type DbId = uuid::Uuid;
