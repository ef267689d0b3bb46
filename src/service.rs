//! The marketplace actor.
//!
//! `MarketService` owns the catalog, the user directory and the order ledger
//! together with their id counters. It handles one request at a time from its
//! mailbox, so every operation runs to completion before the next one starts
//! and no lock is needed around the three collections.

use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};
use crate::catalog::Catalog;
use crate::client::MarketClient;
use crate::directory::UserDirectory;
use crate::domain::{OrderLine, Product, ProductCreate, User};
use crate::error::MarketError;
use crate::ledger::OrderLedger;
use crate::messages::{MarketRequest, ServiceResponse};
use crate::seed;

pub struct MarketService {
    receiver: mpsc::Receiver<MarketRequest>,
    catalog: Catalog,
    directory: UserDirectory,
    ledger: OrderLedger,
}

impl MarketService {
    pub fn new(buffer_size: usize) -> (Self, MarketClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            catalog: Catalog::new(),
            directory: UserDirectory::new(),
            ledger: OrderLedger::new(),
        };
        let client = MarketClient::new(sender);
        (service, client)
    }

    /// Loads the seed users and products. Call before `run`.
    pub fn seed(&mut self) {
        seed::seed_users(&mut self.directory);
        seed::seed_catalog(&mut self.catalog);
        info!(
            products = self.catalog.len(),
            "Seed data loaded"
        );
    }

    #[instrument(name = "market_service", skip(self))]
    pub async fn run(mut self) {
        info!("MarketService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                MarketRequest::AddProduct { product, respond_to } => {
                    self.handle_add_product(product, respond_to);
                }
                MarketRequest::ListProducts { respond_to } => {
                    self.handle_list_products(respond_to);
                }
                MarketRequest::FindProduct { name, respond_to } => {
                    self.handle_find_product(name, respond_to);
                }
                MarketRequest::FindUser { username, respond_to } => {
                    self.handle_find_user(username, respond_to);
                }
                MarketRequest::ListUsers { respond_to } => {
                    self.handle_list_users(respond_to);
                }
                MarketRequest::PlaceOrder {
                    username,
                    product_name,
                    quantity,
                    respond_to,
                } => {
                    self.handle_place_order(username, product_name, quantity, respond_to);
                }
                MarketRequest::ListOrders { respond_to } => {
                    self.handle_list_orders(respond_to);
                }
                MarketRequest::Shutdown => {
                    info!("MarketService shutting down");
                    break;
                }
                #[cfg(test)]
                MarketRequest::GetOrderCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.ledger.len()));
                }
            }
        }

        info!("MarketService stopped");
    }

    #[instrument(
        fields(product_name = %product.name, category = %product.category, price = product.price, quantity = product.quantity),
        skip(self, product, respond_to)
    )]
    fn handle_add_product(&mut self, product: ProductCreate, respond_to: ServiceResponse<Product>) {
        debug!("Processing add_product request");

        let product = self.catalog.add(product);
        info!(product_id = product.id, "Product added");

        let _ = respond_to.send(Ok(product));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_products(&self, respond_to: ServiceResponse<Vec<Product>>) {
        let products = self.catalog.list();
        debug!(product_count = products.len(), "Listed products");
        let _ = respond_to.send(Ok(products));
    }

    #[instrument(fields(product_name = %name), skip(self, name, respond_to))]
    fn handle_find_product(&self, name: String, respond_to: ServiceResponse<Option<Product>>) {
        let product = self.catalog.find_by_name(&name).cloned();
        match &product {
            Some(product) => debug!(product_id = product.id, "Product found"),
            None => debug!("Product not found"),
        }
        let _ = respond_to.send(Ok(product));
    }

    #[instrument(fields(username = %username), skip(self, username, respond_to))]
    fn handle_find_user(&self, username: String, respond_to: ServiceResponse<Option<User>>) {
        let user = self.directory.find_by_username(&username).cloned();
        match &user {
            Some(user) => debug!(user_id = user.id, role = %user.role, "User found"),
            None => debug!("User not found"),
        }
        let _ = respond_to.send(Ok(user));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_users(&self, respond_to: ServiceResponse<Vec<User>>) {
        let users = self.directory.list();
        debug!(user_count = users.len(), "Listed users");
        let _ = respond_to.send(Ok(users));
    }

    /// Resolves the user, then the product, then takes stock and records the
    /// order. Any failure leaves the catalog and the ledger untouched.
    #[instrument(
        fields(username = %username, product_name = %product_name, quantity = quantity),
        skip(self, username, product_name, respond_to)
    )]
    fn handle_place_order(
        &mut self,
        username: String,
        product_name: String,
        quantity: u32,
        respond_to: ServiceResponse<OrderLine>,
    ) {
        info!("Processing place_order request");

        let user = match self.directory.find_by_username(&username) {
            Some(user) => user.clone(),
            None => {
                warn!("User not found");
                let _ = respond_to.send(Err(MarketError::UserNotFound(username)));
                return;
            }
        };

        let Some(product) = self.catalog.find_by_name_mut(&product_name) else {
            warn!("Product not found");
            let _ = respond_to.send(Err(MarketError::ProductUnavailable(product_name)));
            return;
        };

        if let Err(available) = product.take_stock(quantity) {
            warn!(available, requested = quantity, "Insufficient stock");
            let _ = respond_to.send(Err(MarketError::ProductUnavailable(product_name)));
            return;
        }
        let product = product.clone();

        let order = self.ledger.append(user.id, product.id, quantity);
        info!(
            order_id = order.id,
            remaining_stock = product.quantity,
            "Order placed"
        );

        let _ = respond_to.send(Ok(OrderLine { order, user, product }));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_orders(&self, respond_to: ServiceResponse<Vec<OrderLine>>) {
        let lines: Vec<OrderLine> = self
            .ledger
            .orders()
            .iter()
            .filter_map(|order| {
                let user = self.directory.get(order.user_id);
                let product = self.catalog.get(order.product_id);
                match (user, product) {
                    (Some(user), Some(product)) => Some(OrderLine {
                        order: order.clone(),
                        user: user.clone(),
                        product: product.clone(),
                    }),
                    _ => {
                        error!(order_id = order.id, "Order references a missing user or product");
                        None
                    }
                }
            })
            .collect();
        debug!(order_count = lines.len(), "Listed orders");
        let _ = respond_to.send(Ok(lines));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> MarketClient {
        let (mut service, client) = MarketService::new(10);
        service.seed();
        tokio::spawn(service.run());
        client
    }

    #[tokio::test]
    async fn unseeded_service_starts_empty() -> Result<(), Box<dyn std::error::Error>> {
        let (service, client) = MarketService::new(10);
        let _handle = tokio::spawn(service.run());

        assert!(client.list_products().await?.is_empty());
        assert!(client.list_users().await?.is_empty());
        assert_eq!(client.get_order_count().await?, 0);

        client.shutdown().await?;
        Ok(())
    }

    #[tokio::test]
    async fn list_users_returns_seed_users_in_order() -> Result<(), Box<dyn std::error::Error>> {
        let client = seeded().await;

        let names: Vec<String> = client.list_users().await?.into_iter().map(|u| u.username).collect();
        assert_eq!(names, vec!["admin", "seller", "buyer"]);
        Ok(())
    }

    #[tokio::test]
    async fn place_order_takes_stock_and_records_pending_order() -> Result<(), Box<dyn std::error::Error>> {
        let client = seeded().await;

        let line = client.place_order("buyer".into(), "Wheat".into(), 40).await?;
        assert_eq!(line.order.id, 1);
        assert_eq!(line.order.status.to_string(), "Pending");
        assert_eq!(line.product.quantity, 60);
        assert_eq!(line.user.username, "buyer");

        let wheat = client.find_product("wheat".into()).await?.unwrap();
        assert_eq!(wheat.quantity, 60);
        assert_eq!(client.get_order_count().await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_user_mutates_nothing() -> Result<(), Box<dyn std::error::Error>> {
        let client = seeded().await;

        let err = client.place_order("ghost".into(), "Wheat".into(), 1).await.unwrap_err();
        assert_eq!(err, MarketError::UserNotFound("ghost".into()));

        assert_eq!(client.find_product("Wheat".into()).await?.unwrap().quantity, 100);
        assert_eq!(client.get_order_count().await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn missing_product_and_short_stock_look_the_same() -> Result<(), Box<dyn std::error::Error>> {
        let client = seeded().await;

        let short = client.place_order("buyer".into(), "Corn".into(), 151).await.unwrap_err();
        let missing = client.place_order("buyer".into(), "Barley".into(), 1).await.unwrap_err();
        assert_eq!(short.to_string(), missing.to_string());
        assert!(matches!(short, MarketError::ProductUnavailable(_)));

        assert_eq!(client.find_product("Corn".into()).await?.unwrap().quantity, 150);
        assert_eq!(client.get_order_count().await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn exact_stock_can_be_bought() -> Result<(), Box<dyn std::error::Error>> {
        let client = seeded().await;

        client.place_order("BUYER".into(), "tomato".into(), 200).await?;
        assert_eq!(client.find_product("Tomato".into()).await?.unwrap().quantity, 0);

        let err = client.place_order("buyer".into(), "Tomato".into(), 1).await.unwrap_err();
        assert!(matches!(err, MarketError::ProductUnavailable(_)));
        Ok(())
    }
}
