use rusqlite::Connection;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CreateClassError {
    #[error("class name already in use")]
    DuplicateName,
    #[error(transparent)]
    Db(#[from] rusqlite::Error),
}

/// Creates a class and returns its generated id. Class names are unique
/// across the store; everything else about the name is up to the caller.
pub fn create_class(conn: &Connection, name: &str) -> Result<String, CreateClassError> {
    let class_id = Uuid::new_v4().to_string();
    match conn.execute(
        "INSERT INTO classes(id, name) VALUES(?, ?)",
        (&class_id, name),
    ) {
        Ok(_) => Ok(class_id),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Err(CreateClassError::DuplicateName)
        }
        Err(e) => Err(e.into()),
    }
}
