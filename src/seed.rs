//! Fixed users and products loaded before any user interaction.

use tracing::debug;
use crate::catalog::Catalog;
use crate::directory::UserDirectory;
use crate::domain::{ProductCreate, Role};

pub const SEED_USERS: [(&str, &str, Role); 3] = [
    ("admin", "password", Role::Admin),
    ("seller", "password", Role::Seller),
    ("buyer", "password", Role::Buyer),
];

pub fn seed_products() -> Vec<ProductCreate> {
    vec![
        ProductCreate::new("Wheat", "Grain", 50.0, 100),
        ProductCreate::new("Corn", "Grain", 30.0, 150),
        ProductCreate::new("Tomato", "Vegetable", 10.0, 200),
    ]
}

pub fn seed_users(directory: &mut UserDirectory) {
    for (username, password, role) in SEED_USERS {
        let user = directory.register(username, password, role);
        debug!(user_id = user.id, username = %user.username, "Seeded user");
    }
}

pub fn seed_catalog(catalog: &mut Catalog) {
    for payload in seed_products() {
        let product = catalog.add(payload);
        debug!(product_id = product.id, product_name = %product.name, "Seeded product");
    }
}
