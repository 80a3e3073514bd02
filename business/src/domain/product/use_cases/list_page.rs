use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::{ListingQuery, ProductPage};

#[derive(Debug)]
pub struct ListProductsPageParams {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
}

impl TryFrom<ListProductsPageParams> for ListingQuery {
    type Error = ProductError;

    fn try_from(params: ListProductsPageParams) -> Result<Self, Self::Error> {
        ListingQuery::parse(params.search, params.sort, params.page)
    }
}

#[async_trait]
pub trait ListProductsPageUseCase: Send + Sync {
    async fn execute(&self, params: ListProductsPageParams) -> Result<ProductPage, ProductError>;
}
