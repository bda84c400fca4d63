use crate::domain::access::errors::AccessError;

#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("list.name_empty")]
    NameEmpty,
    #[error("list.not_found")]
    NotFound,
    #[error("list.access_denied")]
    AccessDenied,
    #[error("list.invalid_share_email")]
    InvalidShareEmail,
    #[error("list.already_shared")]
    AlreadyShared,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl From<AccessError> for ListError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::NotFound => ListError::NotFound,
            AccessError::Denied => ListError::AccessDenied,
            AccessError::Repository(e) => ListError::Repository(e),
        }
    }
}
