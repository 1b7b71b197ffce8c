use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};
use crate::domain::{NewProduct, Product, ProductUpdate};
use crate::error::StorageError;
use crate::repository::ProductRepository;
use super::actor::StoreRequest;

// =============================================================================
// CLIENT METHOD MACRO
// =============================================================================

/// Generates a client method that sends one request to the store actor and
/// waits for its oneshot reply.
macro_rules! store_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, StorageError> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| StorageError::ActorCommunication("Store closed".to_string()))?;

                response.await.map_err(|_| StorageError::ActorCommunication("Store dropped".to_string()))?
            }
        }
    };
}

// =============================================================================
// STORE CLIENT
// =============================================================================

/// Handle for the store actor.
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }
}

store_method!(StoreClient => fn insert_product(product: NewProduct) -> () as StoreRequest::Insert);
store_method!(StoreClient => fn get_product(id: i64) -> Option<Product> as StoreRequest::FindById);
store_method!(StoreClient => fn update_product(id: i64, update: ProductUpdate) -> u64 as StoreRequest::Update);
store_method!(StoreClient => fn delete_product(id: i64) -> u64 as StoreRequest::Delete);

#[async_trait]
impl ProductRepository for StoreClient {
    async fn insert(&self, product: NewProduct) -> Result<(), StorageError> {
        self.insert_product(product).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, StorageError> {
        self.get_product(id).await
    }

    async fn update(&self, id: i64, update: ProductUpdate) -> Result<u64, StorageError> {
        self.update_product(id, update).await
    }

    async fn delete(&self, id: i64) -> Result<u64, StorageError> {
        self.delete_product(id).await
    }
}
