//! Presentation adapter.
//!
//! `MarketForm` is the controller behind the four form triggers. It talks to
//! the service only through `MarketClient`, asks for free-text input through a
//! [`Prompter`], and writes results into an [`OutputSurface`]. Listing views
//! replace the surface; add and order confirmations append to it.

use tracing::{info, instrument, warn};
use crate::client::MarketClient;
use crate::domain::{OrderLine, Product, ProductCreate, User};
use crate::error::MarketError;

pub const PRODUCT_NAME_PROMPT: &str = "Enter Product Name:";
pub const PRODUCT_CATEGORY_PROMPT: &str = "Enter Product Category:";
pub const PRODUCT_PRICE_PROMPT: &str = "Enter Product Price:";
pub const PRODUCT_QUANTITY_PROMPT: &str = "Enter Product Quantity:";

/// Source of free-text answers, e.g. a dialog or a terminal line.
#[allow(async_fn_in_trait)]
pub trait Prompter {
    /// Returns `None` when the user dismissed the prompt.
    async fn prompt_text(&mut self, label: &str) -> Option<String>;
}

/// Read-only text area the form writes into.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OutputSurface {
    text: String,
}

impl OutputSurface {
    pub fn replace(&mut self, line: &str) {
        self.text.clear();
        self.append(line);
    }

    pub fn append(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

pub struct MarketForm {
    client: MarketClient,
    output: OutputSurface,
    product_choices: Vec<String>,
}

impl MarketForm {
    /// Builds the form and fills the product selection from the catalog.
    pub async fn load(client: MarketClient) -> Result<Self, MarketError> {
        let product_choices = client
            .list_products()
            .await?
            .into_iter()
            .map(|product| product.name)
            .collect();
        Ok(Self {
            client,
            output: OutputSurface::default(),
            product_choices,
        })
    }

    pub fn output(&self) -> &OutputSurface {
        &self.output
    }

    /// Product names offered by the selection input, in catalog order.
    pub fn product_choices(&self) -> &[String] {
        &self.product_choices
    }

    /// Asks for the four product fields, then adds the product.
    ///
    /// Nothing reaches the catalog unless every prompt was answered and both
    /// numbers parsed.
    #[instrument(skip_all)]
    pub async fn add_product<P: Prompter>(&mut self, prompter: &mut P) -> Result<Product, MarketError> {
        let result = self.try_add_product(prompter).await;
        match &result {
            Ok(product) => {
                self.product_choices.push(product.name.clone());
                self.output.append(&format!("Product added: {}", product));
            }
            Err(e) => self.show_error(e),
        }
        result
    }

    async fn try_add_product<P: Prompter>(&self, prompter: &mut P) -> Result<Product, MarketError> {
        let name = ask(prompter, PRODUCT_NAME_PROMPT, "name").await?;
        let category = ask(prompter, PRODUCT_CATEGORY_PROMPT, "category").await?;
        let price = ask(prompter, PRODUCT_PRICE_PROMPT, "price").await?;
        let quantity = ask(prompter, PRODUCT_QUANTITY_PROMPT, "quantity").await?;

        let payload = ProductCreate::parse(name, category, &price, &quantity)?;
        self.client.add_product(payload).await
    }

    #[instrument(skip(self))]
    pub async fn view_products(&mut self) -> Result<Vec<Product>, MarketError> {
        let result = self.client.list_products().await;
        match &result {
            Ok(products) => {
                self.output.replace("--- Product Catalog ---");
                for product in products {
                    self.output.append(&product.to_string());
                }
            }
            Err(e) => self.show_error(e),
        }
        result
    }

    /// Places an order from the form inputs. `quantity` is the raw text of the
    /// quantity field and must be a positive whole number.
    ///
    /// An unknown user is reported ahead of a malformed quantity.
    #[instrument(skip(self))]
    pub async fn place_order(
        &mut self,
        username: &str,
        product_name: &str,
        quantity: &str,
    ) -> Result<OrderLine, MarketError> {
        let result = match parse_order_quantity(quantity) {
            Ok(quantity) => {
                self.client
                    .place_order(username.to_string(), product_name.to_string(), quantity)
                    .await
            }
            Err(format_error) => match self.client.find_user(username.to_string()).await {
                Ok(Some(_)) => Err(format_error),
                Ok(None) => Err(MarketError::UserNotFound(username.to_string())),
                Err(e) => Err(e),
            },
        };
        match &result {
            Ok(line) => {
                info!(order_id = line.order.id, "Order confirmed");
                self.output.append(&format!("Order placed: {}", line));
            }
            Err(e) => self.show_error(e),
        }
        result
    }

    #[instrument(skip(self))]
    pub async fn view_orders(&mut self) -> Result<Vec<OrderLine>, MarketError> {
        let result = self.client.list_orders().await;
        match &result {
            Ok(lines) => {
                self.output.replace("--- Order List ---");
                for line in lines {
                    self.output.append(&line.to_string());
                }
            }
            Err(e) => self.show_error(e),
        }
        result
    }

    #[instrument(skip(self))]
    pub async fn view_users(&mut self) -> Result<Vec<User>, MarketError> {
        let result = self.client.list_users().await;
        match &result {
            Ok(users) => {
                self.output.replace("--- User Directory ---");
                for user in users {
                    self.output.append(&user.to_string());
                }
            }
            Err(e) => self.show_error(e),
        }
        result
    }

    fn show_error(&mut self, error: &MarketError) {
        warn!(error = %error, "Operation aborted");
        if error.replaces_output() {
            self.output.replace(&error.to_string());
        } else {
            self.output.append(&error.to_string());
        }
    }
}

async fn ask<P: Prompter>(prompter: &mut P, label: &str, field: &'static str) -> Result<String, MarketError> {
    prompter
        .prompt_text(label)
        .await
        .ok_or(MarketError::InputCancelled(field))
}

fn parse_order_quantity(text: &str) -> Result<u32, MarketError> {
    match text.trim().parse::<u32>() {
        Ok(quantity) if quantity > 0 => Ok(quantity),
        _ => Err(MarketError::format("quantity", text)),
    }
}
