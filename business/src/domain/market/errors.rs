#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    #[error("market.name_empty")]
    NameEmpty,
    #[error("market.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
