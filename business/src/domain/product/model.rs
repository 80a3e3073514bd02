/// Number of synthetic products written by a single populate run.
pub const SEED_COUNT: i32 = 50;

const SEED_DESCRIPTION: &str = "This is a dummy product description.";
const SEED_BASE_PRICE: i32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: i32,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i32,
        title: String,
        description: String,
        image: String,
        price: i32,
    ) -> Self {
        Self {
            id,
            title,
            description,
            image,
            price,
        }
    }

    /// Returns true if the title or the description contains `term`.
    #[cfg(test)]
    pub fn matches(&self, term: &str) -> bool {
        self.title.contains(term) || self.description.contains(term)
    }
}

/// Product data before the repository assigns it an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: i32,
}

impl NewProduct {
    /// Synthetic catalog item for seed index `index`.
    pub fn seed(index: i32) -> Self {
        Self {
            title: format!("Product {index}"),
            description: SEED_DESCRIPTION.to_string(),
            image: format!("http://lorempixel.com/200/200?{index}"),
            price: SEED_BASE_PRICE + index,
        }
    }
}
