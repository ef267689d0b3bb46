use std::fmt;
use crate::error::MarketError;

/// Represents a product in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

/// Payload for adding a product. The catalog assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreate {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
            quantity,
        }
    }

    pub fn from_create(id: u32, payload: ProductCreate) -> Self {
        Self {
            id,
            name: payload.name,
            category: payload.category,
            price: payload.price,
            quantity: payload.quantity,
        }
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Removes `amount` units from stock.
    ///
    /// # Errors
    /// Returns the available quantity if it is smaller than `amount`; stock is
    /// left untouched in that case.
    pub fn take_stock(&mut self, amount: u32) -> Result<u32, u32> {
        match self.quantity.checked_sub(amount) {
            Some(remaining) => {
                self.quantity = remaining;
                Ok(remaining)
            }
            None => Err(self.quantity),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Category: {}, Price: {:.2}, Quantity: {}",
            self.id, self.name, self.category, self.price, self.quantity
        )
    }
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            quantity,
        }
    }

    /// Builds a payload from raw form input.
    ///
    /// Both numeric fields are parsed before anything is returned, so a bad
    /// quantity never leaves a half-built product behind.
    ///
    /// # Errors
    /// `MarketError::Format` when the price is not a finite, non-negative
    /// decimal or the quantity is not a non-negative whole number.
    pub fn parse(
        name: impl Into<String>,
        category: impl Into<String>,
        price: &str,
        quantity: &str,
    ) -> Result<Self, MarketError> {
        let price = parse_price(price)?;
        let quantity = quantity
            .trim()
            .parse::<u32>()
            .map_err(|_| MarketError::format("quantity", quantity))?;
        Ok(Self::new(name, category, price, quantity))
    }
}

fn parse_price(text: &str) -> Result<f64, MarketError> {
    match text.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(MarketError::format("price", text)),
    }
}
