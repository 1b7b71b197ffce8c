use sqlx::{Connection, Row, SqliteConnection};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, instrument};
use crate::domain::{NewProduct, Product, ProductUpdate};
use crate::error::StorageError;
use super::client::StoreClient;

// =============================================================================
// 1. SQL
// =============================================================================

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS shoppinglist (\
    id INTEGER PRIMARY KEY AUTOINCREMENT, \
    nameProduct TEXT NOT NULL, \
    quantity TEXT, \
    price TEXT)";
const INSERT_PRODUCT: &str =
    "INSERT INTO shoppinglist (nameProduct, quantity, price) VALUES (?, ?, ?)";
// Numeric columns are read back as their text form.
const SELECT_PRODUCT: &str = "SELECT id, nameProduct, \
    CAST(quantity AS TEXT) AS quantity, CAST(price AS TEXT) AS price \
    FROM shoppinglist WHERE id = ?";
const UPDATE_PRODUCT: &str =
    "UPDATE shoppinglist SET nameProduct = ?, price = ?, quantity = ? WHERE id = ?";
const DELETE_PRODUCT: &str = "DELETE FROM shoppinglist WHERE id = ?";

// =============================================================================
// 2. MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, StorageError>>;

#[derive(Debug)]
pub enum StoreRequest {
    Insert {
        product: NewProduct,
        respond_to: Response<()>,
    },
    FindById {
        id: i64,
        respond_to: Response<Option<Product>>,
    },
    Update {
        id: i64,
        update: ProductUpdate,
        respond_to: Response<u64>,
    },
    Delete {
        id: i64,
        respond_to: Response<u64>,
    },
}

// =============================================================================
// 3. THE ACTOR
// =============================================================================

/// Owns the database connection for the lifetime of a run.
///
/// The actor stops once every [`StoreClient`] has been dropped, and closes
/// the connection on the way out.
pub struct StoreActor {
    receiver: mpsc::Receiver<StoreRequest>,
    conn: SqliteConnection,
}

impl StoreActor {
    pub fn new(buffer_size: usize, conn: SqliteConnection) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, conn };
        (actor, StoreClient::new(sender))
    }

    /// Opens a connection and makes sure the product table exists.
    #[instrument(skip(url))]
    pub async fn connect(url: &str) -> Result<SqliteConnection, StorageError> {
        let mut conn = SqliteConnection::connect(url).await?;
        sqlx::query(CREATE_TABLE).execute(&mut conn).await?;
        debug!("Product table ready");
        Ok(conn)
    }

    #[instrument(name = "store_actor", skip(self))]
    pub async fn run(mut self) {
        info!("StoreActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Insert { product, respond_to } => {
                    let _ = respond_to.send(self.handle_insert(product).await);
                }
                StoreRequest::FindById { id, respond_to } => {
                    let _ = respond_to.send(self.handle_find(id).await);
                }
                StoreRequest::Update { id, update, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, update).await);
                }
                StoreRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id).await);
                }
            }
        }

        let Self { conn, .. } = self;
        if let Err(e) = conn.close().await {
            error!(error = %e, "Failed to close connection");
        }
        info!("StoreActor stopped");
    }

    #[instrument(fields(product_name = %product.name), skip(self, product))]
    async fn handle_insert(&mut self, product: NewProduct) -> Result<(), StorageError> {
        debug!("Processing insert request");
        sqlx::query(INSERT_PRODUCT)
            .bind(product.name)
            .bind(product.quantity)
            .bind(product.price)
            .execute(&mut self.conn)
            .await?;
        info!("Product inserted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn handle_find(&mut self, id: i64) -> Result<Option<Product>, StorageError> {
        debug!("Processing find request");
        let row = sqlx::query(SELECT_PRODUCT)
            .bind(id)
            .fetch_optional(&mut self.conn)
            .await?;

        let Some(row) = row else {
            debug!("Product not found");
            return Ok(None);
        };

        let quantity: Option<String> = row.try_get("quantity")?;
        let price: Option<String> = row.try_get("price")?;
        Ok(Some(Product {
            id: row.try_get("id")?,
            name: row.try_get("nameProduct")?,
            quantity: quantity.unwrap_or_default(),
            price: price.unwrap_or_default(),
        }))
    }

    #[instrument(skip(self, update))]
    async fn handle_update(&mut self, id: i64, update: ProductUpdate) -> Result<u64, StorageError> {
        debug!("Processing update request");
        let result = sqlx::query(UPDATE_PRODUCT)
            .bind(update.name)
            .bind(update.price)
            .bind(update.quantity)
            .bind(id)
            .execute(&mut self.conn)
            .await?;
        info!(rows = result.rows_affected(), "Update finished");
        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn handle_delete(&mut self, id: i64) -> Result<u64, StorageError> {
        debug!("Processing delete request");
        let result = sqlx::query(DELETE_PRODUCT)
            .bind(id)
            .execute(&mut self.conn)
            .await?;
        info!(rows = result.rows_affected(), "Delete finished");
        Ok(result.rows_affected())
    }
}
