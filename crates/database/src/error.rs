use models::EntityId;
use sea_orm::DbErr;
use thiserror::Error;

pub type DaoResult<T> = Result<T, DaoError>;

#[derive(Debug, Error)]
pub enum DaoError {
    /// A lookup by primary key matched no row
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: EntityId },

    /// Connectivity or transaction failure from the backing store
    #[error("storage error: {0}")]
    Storage(#[from] DbErr),

    /// The entity is in the wrong state for the operation, e.g. re-saving a persisted instructor
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DaoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
