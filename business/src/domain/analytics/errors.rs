/// Analytics reads have no inputs to validate; the only failure mode is
/// the store, fatal to the request and never retried here.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
