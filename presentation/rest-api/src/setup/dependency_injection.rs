use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::list_page::ListProductsPageUseCaseImpl;
use business::application::product::populate::PopulateProductsUseCaseImpl;

use crate::api::product::routes::ProductApi;

pub struct DependencyContainer {
    pub product_api: ProductApi,
}

impl DependencyContainer {
    /// Wires the use cases around the single pool opened at startup.
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));

        // Product use cases
        let populate_use_case = Arc::new(PopulateProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let list_page_use_case = Arc::new(ListProductsPageUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_api = ProductApi::new(populate_use_case, get_all_use_case, list_page_use_case);

        Self { product_api }
    }
}
