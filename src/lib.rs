//! # Product Inventory
//!
//! Validation, list querying and edit diffing for a product inventory, with
//! an in-process actor standing in for the CRUD backend.
//!
//! - **Domain types** - [`Product`](domain::Product), the string-typed
//!   [`ProductDraft`](domain::ProductDraft) bound to forms, and the validated
//!   [`ProductInput`](domain::ProductInput) sent on commit
//! - **Pure core** - [`validation::validate`], [`query::query`],
//!   [`diff::has_changes`] and [`diff::describe_changes`]
//! - **Persistence** - a generic [`ResourceActor`](actor_framework::ResourceActor)
//!   owning the products, reached through [`ProductClient`](clients::ProductClient)
//! - **Screens** - [`ListScreen`](screens::ListScreen),
//!   [`CreateScreen`](screens::CreateScreen) and [`EditScreen`](screens::EditScreen)
//! - **System** - [`InventorySystem`](app_system::InventorySystem) starts the actor
//!   and hands out screens; [`setup_tracing`](app_system::setup_tracing) installs logging
//!
//! ## Example Usage
//!
//! ```no_run
//! use product_inventory::app_system::InventorySystem;
//! use product_inventory::config::InventoryConfig;
//! use product_inventory::domain::Field;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let system = InventorySystem::new(InventoryConfig::default());
//!
//! let mut form = system.create_screen();
//! form.edit(Field::Name, "Desk lamp");
//! form.edit(Field::Price, "24.90");
//! form.edit(Field::Stock, "8");
//! let product = form.submit().await?;
//!
//! let mut list = system.list_screen();
//! list.refresh().await?;
//! list.set_search("lamp");
//! assert_eq!(list.visible()[0].code, product.code);
//!
//! drop((form, list));
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod config;
pub mod diff;
pub mod domain;
pub mod error;
pub mod product_actor;
pub mod query;
pub mod screens;
pub mod stock;
pub mod validation;

#[cfg(test)]
mod mock_framework;
