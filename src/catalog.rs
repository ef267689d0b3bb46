//! Ordered product catalog.

use crate::domain::{Product, ProductCreate};

/// Products in insertion order plus the sequential id counter.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
    next_id: u32,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a product under the next sequential id and returns it.
    pub fn add(&mut self, payload: ProductCreate) -> Product {
        let product = Product::from_create(self.next_id, payload);
        self.next_id += 1;
        self.products.push(product.clone());
        product
    }

    /// First product whose name matches ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.has_name(name))
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|product| product.has_name(name))
    }

    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn list(&self) -> Vec<Product> {
        self.products.clone()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
