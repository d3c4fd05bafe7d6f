use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, Product, ProductFilter};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product and return it with its assigned id
    async fn create(&self, input: NewProduct) -> ProductResult<Product>;

    /// Get a product by id
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Replace every field of an existing product
    async fn update(&self, id: i32, input: NewProduct) -> ProductResult<Product>;

    /// Delete a product; `false` when there was nothing to delete
    async fn delete(&self, id: i32) -> ProductResult<bool>;

    /// Products matching `filter`, ordered by id
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;
}

#[derive(Debug)]
struct Store {
    products: BTreeMap<i32, Product>,
    next_id: i32,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            products: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Ids start at 1 and are never reused, like a database sequence.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(product: &Product, filter: &ProductFilter) -> bool {
    match filter {
        ProductFilter::All => true,
        ProductFilter::Name(name) => product.name == *name,
        ProductFilter::Category(category) => product.category == *category,
        ProductFilter::Available(available) => product.available == *available,
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let id = store.next_id;
        store.next_id += 1;

        let product = Product::from_new(id, input);
        store.products.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn update(&self, id: i32, input: NewProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let product = store
            .products
            .get_mut(&id)
            .ok_or(ProductError::NotFound(id))?;
        product.apply(input);

        tracing::info!(product_id = id, "Updated product");
        Ok(product.clone())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        if store.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;

        // BTreeMap iteration is already ordered by id
        Ok(store
            .products
            .values()
            .filter(|p| matches(p, &filter))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use rust_decimal::Decimal;

    fn input(name: &str, category: Category, available: bool) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: None,
            price: Decimal::new(1250, 2),
            available,
            category,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_product() {
        let repo = InMemoryProductRepository::new();

        let product = repo.create(input("Hammer", Category::Tools, true)).await.unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Hammer");

        let fetched = repo.get_by_id(product.id).await.unwrap();
        assert_eq!(fetched, Some(product));
        assert!(repo.get_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(input("A", Category::Food, true)).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());

        let second = repo.create(input("B", Category::Food, true)).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(input("Hammer", Category::Tools, true)).await.unwrap();

        let mut replacement = input("Mallet", Category::Housewares, false);
        replacement.description = Some("Rubber".into());

        let updated = repo.update(created.id, replacement).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Mallet");
        assert_eq!(updated.description.as_deref(), Some("Rubber"));
        assert!(!updated.available);
        assert_eq!(updated.category, Category::Housewares);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let result = repo.update(5, input("X", Category::Unknown, true)).await;
        assert!(matches!(result, Err(ProductError::NotFound(5))));
    }

    #[tokio::test]
    async fn test_delete_reports_existence() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(input("Hammer", Category::Tools, true)).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_filters_in_id_order() {
        let repo = InMemoryProductRepository::new();
        repo.create(input("Hammer", Category::Tools, true)).await.unwrap();
        repo.create(input("Shirt", Category::Cloths, false)).await.unwrap();
        repo.create(input("Wrench", Category::Tools, false)).await.unwrap();

        let all = repo.list(ProductFilter::All).await.unwrap();
        let ids: Vec<i32> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let tools = repo.list(ProductFilter::Category(Category::Tools)).await.unwrap();
        assert_eq!(tools.len(), 2);

        let named = repo.list(ProductFilter::Name("Shirt".into())).await.unwrap();
        assert_eq!(named.len(), 1);
        assert_eq!(named[0].id, 2);

        let unavailable = repo.list(ProductFilter::Available(false)).await.unwrap();
        assert_eq!(unavailable.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 3]);

        assert!(repo.list(ProductFilter::Name("hammer".into())).await.unwrap().is_empty());
    }
}
