//! # Mock Framework
//!
//! Utilities for testing the console layers without a database.
//!
//! Use [`create_mock_client`] to get a [`StoreClient`] and the receiver its
//! requests arrive on. Then use helpers like [`expect_find`] or
//! [`expect_update`] to assert what was asked and reply to it. An empty
//! receiver proves storage was never touched.

use tokio::io::BufReader;
use tokio::sync::mpsc;
use crate::console::Console;
use crate::domain::{NewProduct, Product, ProductUpdate};
use crate::store::{Response as Reply, StoreClient, StoreRequest};

/// Creates a mock client and a receiver for asserting requests.
pub fn create_mock_client(buffer_size: usize) -> (StoreClient, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// A console fed from `input`, printing into a buffer.
pub fn scripted_console(input: &'static str) -> Console<BufReader<&'static [u8]>, Vec<u8>> {
    Console::new(BufReader::new(input.as_bytes()), Vec::new())
}

/// Everything the console printed so far.
pub fn printed(console: Console<BufReader<&'static [u8]>, Vec<u8>>) -> String {
    let (_, out) = console.into_parts();
    String::from_utf8(out).expect("console output is UTF-8")
}

/// Helper to verify that the next message is an Insert request
pub async fn expect_insert(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(NewProduct, Reply<()>)> {
    match receiver.recv().await {
        Some(StoreRequest::Insert { product, respond_to }) => Some((product, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a FindById request
pub async fn expect_find(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(i64, Reply<Option<Product>>)> {
    match receiver.recv().await {
        Some(StoreRequest::FindById { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(i64, ProductUpdate, Reply<u64>)> {
    match receiver.recv().await {
        Some(StoreRequest::Update { id, update, respond_to }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(i64, Reply<u64>)> {
    match receiver.recv().await {
        Some(StoreRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let find_task = tokio::spawn(async move { client.get_product(3).await });

        let (id, responder) = expect_find(&mut receiver).await.expect("Expected FindById request");
        assert_eq!(id, 3);
        responder.send(Ok(Some(Product::new(3, "Test", "1", "2")))).unwrap();

        let result = find_task.await.unwrap();
        assert_eq!(result, Ok(Some(Product::new(3, "Test", "1", "2"))));
    }

    #[tokio::test]
    async fn test_storage_error_reaches_caller() {
        let (client, mut receiver) = create_mock_client(10);

        let insert_task = tokio::spawn(async move {
            client.insert_product(NewProduct::new("Test", "1", "2")).await
        });

        let (_, responder) = expect_insert(&mut receiver).await.expect("Expected Insert request");
        responder.send(Err(StorageError::Database("disk full".to_string()))).unwrap();

        assert_eq!(
            insert_task.await.unwrap(),
            Err(StorageError::Database("disk full".to_string()))
        );
    }
}
