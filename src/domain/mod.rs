//! Marketplace records: products, role-tagged users, and orders.

mod order;
mod product;
mod user;

pub use order::{Order, OrderLine, OrderStatus};
pub use product::{Product, ProductCreate};
pub use user::{Role, User};
