#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("profile.display_name_empty")]
    DisplayNameEmpty,
    #[error("profile.invalid_photo_url")]
    InvalidPhotoUrl,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
