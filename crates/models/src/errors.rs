use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("service order {0} not found")]
    NotFound(i64),
    #[error("database error: {0}")]
    Db(String),
}

impl From<sea_orm::DbErr> for ModelError {
    fn from(e: sea_orm::DbErr) -> Self {
        ModelError::Db(e.to_string())
    }
}
