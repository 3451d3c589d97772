//! `storefront` - A terminal storefront and admin console for a clothing catalog
//!
//! This library provides a typed client for the catalog REST API, the
//! storefront browser and admin console controllers built on it, and the
//! view models they render.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod admin;
pub mod api;
pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod form;
pub mod logging;
pub mod modal;
pub mod product;
pub mod prompt;
pub mod view;

pub use admin::AdminConsole;
pub use api::{CatalogApi, HttpCatalog};
pub use browser::CatalogBrowser;
pub use config::Config;
pub use error::{Error, Result};
pub use filter::{FilterControls, ProductFilter};
pub use form::{ProductForm, ProductPayload};
pub use logging::init_logging;
pub use modal::{Modal, ModalEvent, ModalState};
pub use product::{Product, StockTier};
pub use prompt::{Prompt, TerminalPrompt};
pub use view::{ListView, Renderer};
