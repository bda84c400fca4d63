#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    /// The target list does not exist. Kept distinct from `Denied` so
    /// callers can answer "not found" instead of "denied" when they
    /// need to.
    #[error("list.not_found")]
    NotFound,
    #[error("list.access_denied")]
    Denied,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
