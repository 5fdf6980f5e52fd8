use super::super::traits::OrderError;
use crate::seed::SeedError;
use shared::store::{CommandError, CommandErrorCode};
use thiserror::Error;

/// Manager errors
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),
}

impl From<ManagerError> for CommandError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::Order(e) => e.into(),
            ManagerError::Seed(e) => {
                tracing::error!(error = %e, "Seed error surfaced to a command");
                CommandError::new(CommandErrorCode::InternalError, e.to_string())
            }
        }
    }
}

pub type ManagerResult<T> = Result<T, ManagerError>;
