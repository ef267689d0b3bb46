//! # Mock Framework
//!
//! Utilities for testing code that holds a [`MarketClient`] without running
//! the real service.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! mailbox, then the `expect_*` helpers to pull the next request off it, check
//! its parameters and answer through the returned responder.

use tokio::sync::mpsc;
use crate::client::MarketClient;
use crate::domain::{OrderLine, Product, ProductCreate, User};
use crate::messages::{MarketRequest, ServiceResponse};

/// Creates a client wired to a receiver the test controls.
pub fn create_mock_client(buffer_size: usize) -> (MarketClient, mpsc::Receiver<MarketRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (MarketClient::new(sender), receiver)
}

/// Helper to verify that the next message is an AddProduct request
pub async fn expect_add_product(
    receiver: &mut mpsc::Receiver<MarketRequest>,
) -> Option<(ProductCreate, ServiceResponse<Product>)> {
    match receiver.recv().await {
        Some(MarketRequest::AddProduct { product, respond_to }) => Some((product, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a ListProducts request
pub async fn expect_list_products(
    receiver: &mut mpsc::Receiver<MarketRequest>,
) -> Option<ServiceResponse<Vec<Product>>> {
    match receiver.recv().await {
        Some(MarketRequest::ListProducts { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a FindUser request
pub async fn expect_find_user(
    receiver: &mut mpsc::Receiver<MarketRequest>,
) -> Option<(String, ServiceResponse<Option<User>>)> {
    match receiver.recv().await {
        Some(MarketRequest::FindUser { username, respond_to }) => Some((username, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a PlaceOrder request
pub async fn expect_place_order(
    receiver: &mut mpsc::Receiver<MarketRequest>,
) -> Option<(String, String, u32, ServiceResponse<OrderLine>)> {
    match receiver.recv().await {
        Some(MarketRequest::PlaceOrder {
            username,
            product_name,
            quantity,
            respond_to,
        }) => Some((username, product_name, quantity, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a ListOrders request
pub async fn expect_list_orders(
    receiver: &mut mpsc::Receiver<MarketRequest>,
) -> Option<ServiceResponse<Vec<OrderLine>>> {
    match receiver.recv().await {
        Some(MarketRequest::ListOrders { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarketError;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move {
            let product = ProductCreate::new("Rice", "Grain", 20.0, 80);
            client.add_product(product).await
        });

        let (payload, responder) = expect_add_product(&mut receiver).await.expect("Expected AddProduct request");
        assert_eq!(payload.name, "Rice");
        responder.send(Ok(Product::from_create(4, payload))).unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result.map(|p| p.id), Ok(4));
    }

    #[tokio::test]
    async fn dropped_responder_reports_unavailable() {
        let (client, mut receiver) = create_mock_client(10);

        let list_task = tokio::spawn(async move { client.list_orders().await });

        let responder = expect_list_orders(&mut receiver).await.expect("Expected ListOrders request");
        drop(responder);

        let result = list_task.await.unwrap();
        assert!(matches!(result, Err(MarketError::ServiceUnavailable(_))));
    }
}
