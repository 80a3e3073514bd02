use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

#[async_trait]
pub trait PopulateProductsUseCase: Send + Sync {
    /// Writes the synthetic seed catalog and returns how many products were created.
    async fn execute(&self) -> Result<usize, ProductError>;
}
