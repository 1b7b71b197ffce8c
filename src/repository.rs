use async_trait::async_trait;
use crate::domain::{NewProduct, Product, ProductUpdate};
use crate::error::StorageError;

/// The four storage operations the console needs.
///
/// Implementations must pass every value as a bound parameter.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, product: NewProduct) -> Result<(), StorageError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, StorageError>;

    /// Rewrites name, price and quantity. Returns the number of affected rows.
    async fn update(&self, id: i64, update: ProductUpdate) -> Result<u64, StorageError>;

    /// Returns the number of affected rows.
    async fn delete(&self, id: i64) -> Result<u64, StorageError>;
}
