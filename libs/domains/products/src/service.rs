use std::sync::Arc;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{Category, NewProduct, Product, ProductFilter, ProductQuery};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product after validating it
    pub async fn create_product(&self, input: NewProduct) -> ProductResult<Product> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// Get a product by id
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Replace a product's fields
    pub async fn update_product(&self, id: i32, input: NewProduct) -> ProductResult<Product> {
        input.validate()?;
        self.repository.update(id, input).await
    }

    /// Delete a product.
    ///
    /// Deleting a missing product is not an error; the return value says
    /// whether a row was removed.
    pub async fn delete_product(&self, id: i32) -> ProductResult<bool> {
        let existed = self.repository.delete(id).await?;
        tracing::debug!(product_id = id, existed, "Delete requested");
        Ok(existed)
    }

    /// List products for a raw query string
    pub async fn list_products(&self, query: ProductQuery) -> ProductResult<Vec<Product>> {
        let filter = ProductFilter::try_from(query)?;
        self.repository.list(filter).await
    }

    pub async fn list_all(&self) -> ProductResult<Vec<Product>> {
        self.repository.list(ProductFilter::All).await
    }

    pub async fn find_by_name(&self, name: &str) -> ProductResult<Vec<Product>> {
        self.repository
            .list(ProductFilter::Name(name.to_string()))
            .await
    }

    pub async fn find_by_category(&self, category: Category) -> ProductResult<Vec<Product>> {
        self.repository.list(ProductFilter::Category(category)).await
    }

    pub async fn find_by_availability(&self, available: bool) -> ProductResult<Vec<Product>> {
        self.repository.list(ProductFilter::Available(available)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;
    use rust_decimal::Decimal;

    fn input(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: None,
            price: Decimal::new(500, 2),
            available: true,
            category: Category::Food,
        }
    }

    fn product(id: i32, name: &str) -> Product {
        Product::from_new(id, input(name))
    }

    #[tokio::test]
    async fn test_create_product_delegates_when_valid() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|input| Ok(Product::from_new(1, input)));

        let service = ProductService::new(mock_repo);
        let created = service.create_product(input("Bread")).await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.name, "Bread");
    }

    #[tokio::test]
    async fn test_create_product_rejects_invalid_input() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().never();

        let service = ProductService::new(mock_repo);
        let result = service.create_product(input("")).await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_product_missing_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(7))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.get_product(7).await;

        assert!(matches!(result, Err(ProductError::NotFound(7))));
    }

    #[tokio::test]
    async fn test_update_product_validates_before_writing() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo);
        let mut bad = input("Bread");
        bad.price = Decimal::new(-1, 0);

        let result = service.update_product(1, bad).await;
        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_product_passes_through_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_update()
            .with(eq(3), mockall::predicate::always())
            .returning(|id, _| Err(ProductError::NotFound(id)));

        let service = ProductService::new(mock_repo);
        let result = service.update_product(3, input("Bread")).await;

        assert!(matches!(result, Err(ProductError::NotFound(3))));
    }

    #[tokio::test]
    async fn test_delete_product_is_idempotent() {
        let mut mock_repo = MockProductRepository::new();
        let mut seq = mockall::Sequence::new();
        mock_repo
            .expect_delete()
            .with(eq(2))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        mock_repo
            .expect_delete()
            .with(eq(2))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);
        assert!(service.delete_product(2).await.unwrap());
        assert!(!service.delete_product(2).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_products_translates_query() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .with(eq(ProductFilter::Category(Category::Food)))
            .returning(|_| Ok(vec![product(1, "Bread")]));

        let service = ProductService::new(mock_repo);
        let query = ProductQuery {
            category: Some("FOOD".into()),
            available: Some("not-a-bool".into()),
            ..Default::default()
        };

        let products = service.list_products(query).await.unwrap();
        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn test_list_products_rejects_bad_filter() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_list().never();

        let service = ProductService::new(mock_repo);
        let query = ProductQuery {
            available: Some("maybe".into()),
            ..Default::default()
        };

        let result = service.list_products(query).await;
        assert!(matches!(result, Err(ProductError::InvalidFilter(_))));
    }

    #[tokio::test]
    async fn test_finders_build_single_filters() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .with(eq(ProductFilter::All))
            .returning(|_| Ok(vec![product(1, "Bread"), product(2, "Milk")]));
        mock_repo
            .expect_list()
            .with(eq(ProductFilter::Name("Milk".into())))
            .returning(|_| Ok(vec![product(2, "Milk")]));
        mock_repo
            .expect_list()
            .with(eq(ProductFilter::Category(Category::Tools)))
            .returning(|_| Ok(vec![]));
        mock_repo
            .expect_list()
            .with(eq(ProductFilter::Available(true)))
            .returning(|_| Ok(vec![product(1, "Bread")]));

        let service = ProductService::new(mock_repo);

        assert_eq!(service.list_all().await.unwrap().len(), 2);
        assert_eq!(service.find_by_name("Milk").await.unwrap()[0].id, 2);
        assert!(service.find_by_category(Category::Tools).await.unwrap().is_empty());
        assert_eq!(service.find_by_availability(true).await.unwrap().len(), 1);
    }
}
