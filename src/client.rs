use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};
use crate::domain::{OrderLine, Product, ProductCreate, User};
use crate::error::MarketError;
use crate::messages::MarketRequest;

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
/// A closed mailbox or a dropped reply becomes `MarketError::ServiceUnavailable`.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, MarketError> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|_| MarketError::ServiceUnavailable("service closed".to_string()))?;

                response
                    .await
                    .map_err(|_| MarketError::ServiceUnavailable("service dropped the request".to_string()))?
            }
        }
    };
}

/// Cloneable handle to the marketplace service.
#[derive(Clone)]
pub struct MarketClient {
    sender: mpsc::Sender<MarketRequest>,
}

impl MarketClient {
    pub fn new(sender: mpsc::Sender<MarketRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), MarketError> {
        debug!("Sending shutdown request");
        self.sender
            .send(MarketRequest::Shutdown)
            .await
            .map_err(|_| MarketError::ServiceUnavailable("service closed".to_string()))
    }
}

client_method!(MarketClient => fn add_product(product: ProductCreate) -> Product as MarketRequest::AddProduct);
client_method!(MarketClient => fn list_products() -> Vec<Product> as MarketRequest::ListProducts);
client_method!(MarketClient => fn find_product(name: String) -> Option<Product> as MarketRequest::FindProduct);
client_method!(MarketClient => fn find_user(username: String) -> Option<User> as MarketRequest::FindUser);
client_method!(MarketClient => fn list_users() -> Vec<User> as MarketRequest::ListUsers);
client_method!(MarketClient => fn place_order(username: String, product_name: String, quantity: u32) -> OrderLine as MarketRequest::PlaceOrder);
client_method!(MarketClient => fn list_orders() -> Vec<OrderLine> as MarketRequest::ListOrders);

// Test-only inspection of the ledger size
#[cfg(test)]
client_method!(MarketClient => fn get_order_count() -> usize as MarketRequest::GetOrderCount);
