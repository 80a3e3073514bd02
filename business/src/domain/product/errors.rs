use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.invalid_page")]
    InvalidPage,
    #[error("product.invalid_sort")]
    InvalidSort,
    #[error("product.populate_failed")]
    Populate(#[source] RepositoryError),
    #[error("product.fetch_failed")]
    Fetch(#[source] RepositoryError),
    #[error("product.count_failed")]
    Count(#[source] RepositoryError),
}
