use sqlx::FromRow;

use business::domain::product::model::Product;

/// Row of the `"Product"` table, the default name Prisma gives the `Product`
/// model, so databases created by the Prisma migrations are read as-is.
///
/// The table itself (`id serial primary key, title text, description text,
/// image text, price integer`) is owned by external migration tooling.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: i32,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(self.id, self.title, self.description, self.image, self.price)
    }
}
