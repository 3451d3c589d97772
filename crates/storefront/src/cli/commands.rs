//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::filter::FilterControls;
use crate::form::ProductForm;

/// Browse command arguments.
#[derive(Debug, Args)]
pub struct BrowseCommand {
    /// Only show products in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Only show products of this size
    #[arg(long)]
    pub size: Option<String>,

    /// Only show products of this color
    #[arg(long)]
    pub color: Option<String>,

    /// Clear all filters and show every product
    #[arg(long, conflicts_with_all = ["category", "size", "color"])]
    pub clear: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

impl BrowseCommand {
    /// The filter control values these arguments select.
    #[must_use]
    pub fn controls(&self) -> FilterControls {
        FilterControls::new(
            self.category.clone().unwrap_or_default(),
            self.size.clone().unwrap_or_default(),
            self.color.clone().unwrap_or_default(),
        )
    }
}

/// Categories command arguments.
#[derive(Debug, Args)]
pub struct CategoriesCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Product id
    pub id: i64,
}

/// Admin console commands.
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// List all products with their management actions
    List,

    /// Create a product
    Add(AddCommand),

    /// Edit a product; fields not given keep their current value
    Edit(EditCommand),

    /// Delete a product
    Delete {
        /// Product id
        id: i64,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Fields of a new product. Price and stock are sent as typed and coerced
/// to numbers on submission.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Product name
    #[arg(long)]
    pub name: String,

    /// Description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Category
    #[arg(long)]
    pub category: String,

    /// Price
    #[arg(long, allow_hyphen_values = true)]
    pub price: String,

    /// Size
    #[arg(long)]
    pub size: String,

    /// Color
    #[arg(long)]
    pub color: String,

    /// Units in stock
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub stock: String,

    /// Image URL
    #[arg(long, default_value = "")]
    pub image_url: String,
}

impl AddCommand {
    /// Copy the arguments into a create form.
    pub fn fill(&self, form: &mut ProductForm) {
        *form = ProductForm {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            price: self.price.clone(),
            size: self.size.clone(),
            color: self.color.clone(),
            stock: self.stock.clone(),
            image_url: self.image_url.clone(),
        };
    }
}

/// Field overrides for an existing product.
#[derive(Debug, Args)]
pub struct EditCommand {
    /// Product id
    pub id: i64,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New category
    #[arg(long)]
    pub category: Option<String>,

    /// New price
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,

    /// New size
    #[arg(long)]
    pub size: Option<String>,

    /// New color
    #[arg(long)]
    pub color: Option<String>,

    /// New stock count
    #[arg(long, allow_hyphen_values = true)]
    pub stock: Option<String>,

    /// New image URL
    #[arg(long)]
    pub image_url: Option<String>,
}

impl EditCommand {
    /// Overwrite the given fields of a pre-filled edit form.
    pub fn apply(&self, form: &mut ProductForm) {
        let overrides = [
            (&mut form.name, &self.name),
            (&mut form.description, &self.description),
            (&mut form.category, &self.category),
            (&mut form.price, &self.price),
            (&mut form.size, &self.size),
            (&mut form.color, &self.color),
            (&mut form.stock, &self.stock),
            (&mut form.image_url, &self.image_url),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                *field = value.clone();
            }
        }
    }
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Rendered text
    #[default]
    Plain,
    /// Raw products as JSON
    Json,
}
