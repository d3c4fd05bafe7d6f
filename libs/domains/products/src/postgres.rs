use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{NewProduct, Product, ProductFilter},
    repository::ProductRepository,
};

/// PostgreSQL implementation of ProductRepository
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn update(&self, id: i32, input: NewProduct) -> ProductResult<Product> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        // The row can vanish between the lookup and the write
        let model = entity::replacement(id, input)
            .update(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => ProductError::NotFound(id),
                other => ProductError::Database(other),
            })?;

        tracing::info!(product_id = id, "Updated product");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let mut query = entity::Entity::find();

        query = match filter {
            ProductFilter::All => query,
            ProductFilter::Name(name) => query.filter(entity::Column::Name.eq(name)),
            ProductFilter::Category(category) => {
                query.filter(entity::Column::Category.eq(category))
            }
            ProductFilter::Available(available) => {
                query.filter(entity::Column::Available.eq(available))
            }
        };

        let models = query
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: i32, name: &str, category: Category) -> entity::Model {
        entity::Model {
            id,
            name: name.to_string(),
            description: None,
            price: Decimal::new(999, 2),
            available: true,
            category,
        }
    }

    fn input(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: None,
            price: Decimal::new(999, 2),
            available: true,
            category: Category::Tools,
        }
    }

    #[tokio::test]
    async fn test_create_returns_inserted_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Hammer", Category::Tools)]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let product = repo.create(input("Hammer")).await.unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.price, Decimal::new(999, 2));
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.get_by_id(4).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let result = repo.update(4, input("Hammer")).await;
        assert!(matches!(result, Err(ProductError::NotFound(4))));
    }

    #[tokio::test]
    async fn test_update_returns_new_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![model(2, "Hammer", Category::Tools)],
                vec![model(2, "Mallet", Category::Tools)],
            ])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let product = repo.update(2, input("Mallet")).await.unwrap();
        assert_eq!(product.id, 2);
        assert_eq!(product.name, "Mallet");
    }

    #[tokio::test]
    async fn test_delete_uses_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.delete(3).await.unwrap());
        assert!(!repo.delete(3).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                model(1, "Hammer", Category::Tools),
                model(2, "Wrench", Category::Tools),
            ]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let products = repo
            .list(ProductFilter::Category(Category::Tools))
            .await
            .unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].name, "Wrench");
    }

    #[tokio::test]
    async fn test_database_errors_propagate() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".into())])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let result = repo.list(ProductFilter::All).await;
        assert!(matches!(result, Err(ProductError::Database(_))));
    }
}
