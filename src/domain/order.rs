use std::fmt;
use super::{Product, User};

/// Fulfilment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
    Delivered,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pending"),
            OrderStatus::Shipped => write!(f, "Shipped"),
            OrderStatus::Delivered => write!(f, "Delivered"),
        }
    }
}

/// Represents a placed order.
///
/// The buyer and product are held by id and resolved through the stores when
/// the order is shown, so the listing always reflects the current product.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: u32,
    pub user_id: u32,
    pub product_id: u32,
    pub quantity: u32,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(id: u32, user_id: u32, product_id: u32, quantity: u32) -> Self {
        Self {
            id,
            user_id,
            product_id,
            quantity,
            status: OrderStatus::Pending,
        }
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }
}

/// An order joined with its user and the product as it is right now.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub order: Order,
    pub user: User,
    pub product: Product,
}

impl fmt::Display for OrderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order ID: {}, User: {}, Product: {}, Quantity: {}, Status: {}",
            self.order.id, self.user.username, self.product.name, self.order.quantity, self.order.status
        )
    }
}
