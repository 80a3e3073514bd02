use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::SortDirection;

use super::entity::ProductEntity;

// Same table as the Prisma `Product` model, hence the quoted name.
// strpos keeps the search literal: `%` and `_` in the term are not wildcards.
const SEARCH_ASC: &str = "SELECT id, title, description, image, price FROM \"Product\" \
     WHERE strpos(title, $1) > 0 OR strpos(description, $1) > 0 \
     ORDER BY price ASC, id ASC LIMIT $2 OFFSET $3";
const SEARCH_DESC: &str = "SELECT id, title, description, image, price FROM \"Product\" \
     WHERE strpos(title, $1) > 0 OR strpos(description, $1) > 0 \
     ORDER BY price DESC, id ASC LIMIT $2 OFFSET $3";
const COUNT_MATCHING: &str = "SELECT COUNT(*) FROM \"Product\" \
     WHERE strpos(title, $1) > 0 OR strpos(description, $1) > 0";
const SELECT_ALL: &str = "SELECT id, title, description, image, price FROM \"Product\"";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn search_sql(sort: SortDirection) -> &'static str {
    match sort {
        SortDirection::Asc => SEARCH_ASC,
        SortDirection::Desc => SEARCH_DESC,
    }
}

fn map_sqlx_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> RepositoryError {
    move |err| {
        tracing::error!(operation, error = %err, "Product query failed");
        match err {
            sqlx::Error::RowNotFound | sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                RepositoryError::persistence()
            }
            _ => RepositoryError::database_error(),
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"INSERT INTO "Product" (title, description, image, price)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, image, price"#,
        )
        .bind(&product.title)
        .bind(&product.description)
        .bind(&product.image)
        .bind(product.price)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error("create"))?;

        Ok(entity.into_domain())
    }

    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error("get_all"))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn search(
        &self,
        search: &str,
        sort: SortDirection,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(search_sql(sort))
            .bind(search)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error("search"))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn count_matching(&self, search: &str) -> Result<i64, RepositoryError> {
        sqlx::query_scalar::<_, i64>(COUNT_MATCHING)
            .bind(search)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error("count_matching"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_order_by_price_in_requested_direction() {
        assert!(search_sql(SortDirection::Asc).contains("ORDER BY price ASC, id ASC"));
        assert!(search_sql(SortDirection::Desc).contains("ORDER BY price DESC, id ASC"));
    }

    #[test]
    fn should_read_the_prisma_product_table() {
        for sql in [SEARCH_ASC, SEARCH_DESC, COUNT_MATCHING, SELECT_ALL] {
            assert!(sql.contains("FROM \"Product\""), "{sql}");
        }
    }

    #[test]
    fn should_share_filter_between_page_and_count_queries() {
        let filter = "WHERE strpos(title, $1) > 0 OR strpos(description, $1) > 0";

        assert!(SEARCH_ASC.contains(filter));
        assert!(SEARCH_DESC.contains(filter));
        assert!(COUNT_MATCHING.contains(filter));
    }

    #[test]
    fn should_map_decode_failures_to_persistence_error() {
        let err = map_sqlx_error("test")(sqlx::Error::RowNotFound);

        assert_eq!(err, RepositoryError::Persistence);
    }

    #[test]
    fn should_map_driver_failures_to_database_error() {
        let err = map_sqlx_error("test")(sqlx::Error::PoolTimedOut);

        assert_eq!(err, RepositoryError::DatabaseError);
    }

    /// Queries against a real PostgreSQL, one fresh database per test.
    /// Run with `DATABASE_URL` set: `cargo test -p persistence -- --ignored`.
    mod postgres {
        use super::*;
        use std::collections::HashSet;

        const CREATE_TABLE: &str = "CREATE TABLE \"Product\" (
            id SERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            image TEXT NOT NULL,
            price INTEGER NOT NULL
        )";

        /// The 50 seed products plus one product whose text holds `%` and `_`.
        async fn seeded_repository(pool: PgPool) -> ProductRepositoryPostgres {
            sqlx::query(CREATE_TABLE).execute(&pool).await.unwrap();
            let repository = ProductRepositoryPostgres::new(pool);
            for index in 0..50 {
                repository.create(&NewProduct::seed(index)).await.unwrap();
            }
            repository
                .create(&NewProduct {
                    title: "Sale 100%".to_string(),
                    description: "wool_blend scarf".to_string(),
                    image: String::new(),
                    price: 60,
                })
                .await
                .unwrap();
            repository
        }

        #[sqlx::test(migrations = false)]
        #[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
        async fn should_return_created_product_with_assigned_id(pool: PgPool) {
            sqlx::query(CREATE_TABLE).execute(&pool).await.unwrap();
            let repository = ProductRepositoryPostgres::new(pool);

            let created = repository.create(&NewProduct::seed(3)).await.unwrap();
            let all = repository.get_all().await.unwrap();

            assert_eq!(created.title, "Product 3");
            assert_eq!(created.price, 13);
            assert_eq!(all, vec![created]);
        }

        #[sqlx::test(migrations = false)]
        #[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
        async fn should_match_every_row_with_empty_term(pool: PgPool) {
            let repository = seeded_repository(pool).await;

            let total = repository.count_matching("").await.unwrap();
            let page = repository
                .search("", SortDirection::Asc, 9, 0)
                .await
                .unwrap();

            assert_eq!(total, 51);
            let prices: Vec<i32> = page.iter().map(|p| p.price).collect();
            assert_eq!(prices, (10..19).collect::<Vec<i32>>());
        }

        #[sqlx::test(migrations = false)]
        #[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
        async fn should_treat_like_wildcards_literally(pool: PgPool) {
            let repository = seeded_repository(pool).await;

            assert_eq!(repository.count_matching("%").await.unwrap(), 1);
            assert_eq!(repository.count_matching("_").await.unwrap(), 1);
            let found = repository
                .search("%", SortDirection::Asc, 9, 0)
                .await
                .unwrap();
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].title, "Sale 100%");
        }

        #[sqlx::test(migrations = false)]
        #[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
        async fn should_match_case_sensitively_on_title_or_description(pool: PgPool) {
            let repository = seeded_repository(pool).await;

            // "Product" hits the seed titles, "product" their description.
            assert_eq!(repository.count_matching("Product").await.unwrap(), 50);
            assert_eq!(repository.count_matching("product").await.unwrap(), 50);
            assert_eq!(repository.count_matching("PRODUCT").await.unwrap(), 0);
            assert_eq!(repository.count_matching("scarf").await.unwrap(), 1);
        }

        #[sqlx::test(migrations = false)]
        #[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
        async fn should_order_by_price_descending(pool: PgPool) {
            let repository = seeded_repository(pool).await;

            let page = repository
                .search("", SortDirection::Desc, 9, 0)
                .await
                .unwrap();

            let prices: Vec<i32> = page.iter().map(|p| p.price).collect();
            assert_eq!(prices, vec![60, 59, 58, 57, 56, 55, 54, 53, 52]);
        }

        #[sqlx::test(migrations = false)]
        #[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
        async fn should_cover_every_row_once_across_pages(pool: PgPool) {
            let repository = seeded_repository(pool).await;

            let mut ids = Vec::new();
            for page in 0..6 {
                let rows = repository
                    .search("", SortDirection::Asc, 9, page * 9)
                    .await
                    .unwrap();
                ids.extend(rows.into_iter().map(|p| p.id));
            }

            let unique: HashSet<i32> = ids.iter().copied().collect();
            let all: HashSet<i32> = repository
                .get_all()
                .await
                .unwrap()
                .into_iter()
                .map(|p| p.id)
                .collect();
            assert_eq!(ids.len(), 51);
            assert_eq!(unique, all);
        }
    }
}
