use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, SEED_COUNT};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::populate::PopulateProductsUseCase;

/// Seeds the catalog one product at a time, in index order.
///
/// Creation stops at the first failure. Products written before the failure
/// are kept, and running it again appends another full set.
pub struct PopulateProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PopulateProductsUseCase for PopulateProductsUseCaseImpl {
    async fn execute(&self) -> Result<usize, ProductError> {
        self.logger
            .info(&format!("Populating catalog with {} products", SEED_COUNT));

        for index in 0..SEED_COUNT {
            let product = NewProduct::seed(index);
            if let Err(err) = self.repository.create(&product).await {
                self.logger.error(&format!(
                    "Populate stopped at product {}: {}",
                    index, err
                ));
                return Err(ProductError::Populate(err));
            }
        }

        self.logger
            .info(&format!("Catalog populated with {} products", SEED_COUNT));
        Ok(SEED_COUNT as usize)
    }
}
