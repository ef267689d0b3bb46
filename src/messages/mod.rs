use tokio::sync::oneshot;
use crate::domain::{OrderLine, Product, ProductCreate, User};
use crate::error::MarketError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T> = oneshot::Sender<ServiceResult<T, MarketError>>;

/// Requests handled by the marketplace service. Each variant carries its
/// parameters and a oneshot channel for the response.
#[derive(Debug)]
pub enum MarketRequest {
    AddProduct {
        product: ProductCreate,
        respond_to: ServiceResponse<Product>,
    },
    ListProducts {
        respond_to: ServiceResponse<Vec<Product>>,
    },
    FindProduct {
        name: String,
        respond_to: ServiceResponse<Option<Product>>,
    },
    FindUser {
        username: String,
        respond_to: ServiceResponse<Option<User>>,
    },
    ListUsers {
        respond_to: ServiceResponse<Vec<User>>,
    },
    PlaceOrder {
        username: String,
        product_name: String,
        quantity: u32,
        respond_to: ServiceResponse<OrderLine>,
    },
    ListOrders {
        respond_to: ServiceResponse<Vec<OrderLine>>,
    },
    Shutdown,
    #[cfg(test)]
    GetOrderCount {
        respond_to: ServiceResponse<usize>,
    },
}
