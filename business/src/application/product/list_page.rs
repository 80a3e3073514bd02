use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list_page::{
    ListProductsPageParams, ListProductsPageUseCase,
};
use crate::domain::product::value_objects::{ListingQuery, PAGE_SIZE, ProductPage};

pub struct ListProductsPageUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsPageUseCase for ListProductsPageUseCaseImpl {
    async fn execute(&self, params: ListProductsPageParams) -> Result<ProductPage, ProductError> {
        let query = ListingQuery::try_from(params).inspect_err(|err| {
            self.logger
                .warn(&format!("Rejected product listing request: {}", err));
        })?;

        self.logger.debug(&format!(
            "Listing products: search={:?} sort={} page={}",
            query.search,
            query.sort,
            query.page.value()
        ));

        let products = self
            .repository
            .search(&query.search, query.sort, PAGE_SIZE, query.page.offset())
            .await
            .map_err(|err| {
                self.logger
                    .error(&format!("Failed to fetch products page: {}", err));
                ProductError::Fetch(err)
            })?;

        let total = self
            .repository
            .count_matching(&query.search)
            .await
            .map_err(|err| {
                self.logger
                    .error(&format!("Failed to count matching products: {}", err));
                ProductError::Count(err)
            })?;

        Ok(ProductPage::new(products, total, query.page))
    }
}
