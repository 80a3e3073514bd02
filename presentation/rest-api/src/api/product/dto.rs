use poem_openapi::Object;

use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductPage;

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Identifier assigned by the database
    pub id: i32,
    /// Product title
    pub title: String,
    /// Product description
    pub description: String,
    /// Image URL
    pub image: String,
    /// Price
    pub price: i32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            description: product.description,
            image: product.image,
            price: product.price,
        }
    }
}

/// One page of the filtered catalog.
#[derive(Debug, Clone, Object)]
pub struct ProductPageResponse {
    /// Products on the requested page
    pub data: Vec<ProductResponse>,
    /// Number of products matching the search
    pub total: i64,
    /// Requested page number
    pub page: i64,
    /// Number of the last page, 0 when nothing matches
    pub last_page: i64,
}

impl From<ProductPage> for ProductPageResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            data: page.data.into_iter().map(|p| p.into()).collect(),
            total: page.total,
            page: page.page,
            last_page: page.last_page,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MessageResponse {
    pub message: String,
}
