use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product};
use super::value_objects::SortDirection;

/// Catalog store port.
///
/// `search` and `count_matching` share one filter: a product matches when its
/// title or its description contains the search term. An empty term matches
/// every product.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn search(
        &self,
        search: &str,
        sort: SortDirection,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Product>, RepositoryError>;
    async fn count_matching(&self, search: &str) -> Result<i64, RepositoryError>;
}
