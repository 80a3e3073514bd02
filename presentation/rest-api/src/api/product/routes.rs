use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::list_page::{
    ListProductsPageParams, ListProductsPageUseCase,
};
use business::domain::product::use_cases::populate::PopulateProductsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{MessageResponse, ProductPageResponse, ProductResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    populate_use_case: Arc<dyn PopulateProductsUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    list_page_use_case: Arc<dyn ListProductsPageUseCase>,
}

impl ProductApi {
    pub fn new(
        populate_use_case: Arc<dyn PopulateProductsUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        list_page_use_case: Arc<dyn ListProductsPageUseCase>,
    ) -> Self {
        Self {
            populate_use_case,
            get_all_use_case,
            list_page_use_case,
        }
    }
}

/// Product catalog API
#[OpenApi]
impl ProductApi {
    /// Populate the catalog
    ///
    /// Creates 50 synthetic products, one after another. Not idempotent: every
    /// call appends another 50. If a create fails the remaining ones are skipped
    /// and the products already written are kept.
    #[oai(
        path = "/api/products/populate",
        method = "post",
        tag = "ApiTags::Products"
    )]
    async fn populate_products(&self) -> PopulateProductsResponse {
        match self.populate_use_case.execute().await {
            Ok(_) => PopulateProductsResponse::Ok(Json(MessageResponse {
                message: "Products populated successfully".to_string(),
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                PopulateProductsResponse::InternalError(json)
            }
        }
    }

    /// List every product
    ///
    /// Returns the whole catalog in storage order, unfiltered.
    #[oai(
        path = "/api/products/frontend",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Search and paginate products
    ///
    /// Returns 9 products per page, ordered by price. A product matches when
    /// its title or description contains `s` (empty matches everything).
    /// `sort` is `asc` (default) or `desc`; `page` starts at 1 (default 1).
    #[oai(
        path = "/api/products/backend",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn list_products_page(
        &self,
        #[oai(name = "s")] search: Query<Option<String>>,
        sort: Query<Option<String>>,
        page: Query<Option<String>>,
    ) -> ListProductsPageResponse {
        let params = ListProductsPageParams {
            search: search.0,
            sort: sort.0,
            page: page.0,
        };

        match self.list_page_use_case.execute(params).await {
            Ok(page) => ListProductsPageResponse::Ok(Json(page.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ListProductsPageResponse::BadRequest(json),
                    _ => ListProductsPageResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum PopulateProductsResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsPageResponse {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
