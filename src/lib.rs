//! # Agricultural marketplace
//!
//! An in-memory catalog of farm products, a fixed directory of role-tagged
//! users, and an order ledger that takes stock as orders are placed.
//!
//! ## Layout
//!
//! - **Domain types** → [`domain::Product`], [`domain::User`], [`domain::Order`]
//! - **Stores** → [`catalog::Catalog`], [`directory::UserDirectory`], [`ledger::OrderLedger`]
//! - **Service** → [`service::MarketService`], a single actor that owns all
//!   three stores and handles one request at a time
//! - **Client** → [`client::MarketClient`], a cloneable handle with one async
//!   method per operation
//! - **System** → [`app_system::MarketSystem`] for startup and shutdown,
//!   [`app_system::setup_tracing`] for logging
//! - **Presentation** → [`presentation::MarketForm`] with its
//!   [`presentation::Prompter`] input and [`presentation::OutputSurface`]
//!   output, driven by [`terminal::run_session`] in the binary
//!
//! ## Expected Tracing Output
//!
//! ```text
//! INFO market_system{buffer_size=100 seed=true}: Starting marketplace system
//! INFO market_system{buffer_size=100 seed=true}: Seed data loaded products=3
//! INFO market_service: MarketService starting
//! INFO market_service:handle_place_order{username=buyer product_name=Wheat quantity=40}: Processing place_order request
//! INFO market_service:handle_place_order{username=buyer product_name=Wheat quantity=40}: Order placed order_id=1 remaining_stock=60
//! ```

pub mod app_system;
pub mod catalog;
pub mod client;
pub mod directory;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod messages;
pub mod presentation;
pub mod seed;
pub mod service;
pub mod terminal;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, MarketConfig, MarketSystem};
pub use client::MarketClient;
pub use error::MarketError;
