//! View models and their text rendering.
//!
//! Products are first projected into plain view-model structs holding exactly
//! the fields a view shows (with fallbacks applied), then rendered through
//! their `Display` impls. The controllers only ever hold view models, which
//! keeps rendering testable without a terminal.

use std::fmt;

use crate::config::DisplayConfig;
use crate::product::{format_price, Product, StockTier};

/// Shown while a list request is in flight.
pub const LOADING_MESSAGE: &str = "Loading products...";

/// Shown in place of a list whose request failed.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading products. Please try again.";

/// Shown when the storefront grid has nothing to display.
pub const BROWSER_EMPTY_MESSAGE: &str = "No products found.";

/// Shown when the admin list has nothing to display.
pub const ADMIN_EMPTY_MESSAGE: &str = "No products found. Add your first product above!";

const NO_DESCRIPTION_DETAIL: &str = "No description available.";
const NO_DESCRIPTION_ADMIN: &str = "No description";

/// State of a rendered product list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView<T> {
    /// A request is in flight.
    Loading,
    /// The request succeeded with no products; holds the placeholder text.
    Empty(&'static str),
    /// The request failed; holds the static error text.
    Failed(&'static str),
    /// Products to show, in server order.
    Items(Vec<T>),
}

impl<T> ListView<T> {
    /// Build a list view, using `empty` as the placeholder for no items.
    #[must_use]
    pub fn from_items(items: Vec<T>, empty: &'static str) -> Self {
        if items.is_empty() {
            Self::Empty(empty)
        } else {
            Self::Items(items)
        }
    }

    /// The items, if the list holds any.
    #[must_use]
    pub fn items(&self) -> &[T] {
        match self {
            Self::Items(items) => items,
            _ => &[],
        }
    }

    /// The message shown instead of items, if any.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(LOADING_MESSAGE),
            Self::Empty(message) | Self::Failed(message) => Some(*message),
            Self::Items(_) => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for ListView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = self.message() {
            return writeln!(f, "{message}");
        }
        for (i, item) in self.items().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// How prominently a stock label is shown in the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// Positive (fully in stock).
    Success,
    /// Attention (low or out of stock).
    Accent,
}

/// A storefront grid card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    /// Product to open when the card is selected.
    pub id: i64,
    /// Image location, placeholder applied.
    pub image_url: String,
    /// Product name.
    pub name: String,
    /// Category.
    pub category: String,
    /// Description, empty when absent.
    pub description: String,
    /// Price with currency symbol.
    pub price: String,
    /// Stock style tag.
    pub stock_class: &'static str,
    /// Stock label.
    pub stock_label: String,
    /// Size and color line.
    pub attributes: String,
}

/// The product detail overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    /// Product shown.
    pub id: i64,
    /// Image location, placeholder applied.
    pub image_url: String,
    /// Product name.
    pub name: String,
    /// Stock label.
    pub stock_label: String,
    /// Emphasis for the stock label.
    pub stock_emphasis: Emphasis,
    /// Price with currency symbol.
    pub price: String,
    /// Category.
    pub category: String,
    /// Size.
    pub size: String,
    /// Color.
    pub color: String,
    /// Description, with fallback text.
    pub description: String,
}

/// Per-row action in the admin list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Open the edit modal for the product.
    Edit(i64),
    /// Delete the product (after confirmation).
    Delete(i64),
}

impl fmt::Display for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Edit(_) => f.write_str("Edit"),
            Self::Delete(_) => f.write_str("Delete"),
        }
    }
}

/// A row of the admin management list.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminRow {
    /// Product managed by this row.
    pub id: i64,
    /// Thumbnail location, placeholder applied.
    pub thumbnail_url: String,
    /// Product name.
    pub name: String,
    /// Category and price line.
    pub summary: String,
    /// Size, color and stock line.
    pub attributes: String,
    /// Description, with fallback text.
    pub description: String,
    /// Available actions.
    pub actions: [RowAction; 2],
}

/// Projects products into view models.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    display: DisplayConfig,
}

impl Renderer {
    /// Create a renderer with the given display settings.
    #[must_use]
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }

    fn price(&self, price: f64) -> String {
        format!("{}{}", self.display.currency_symbol, format_price(price))
    }

    /// Project a product into a grid card.
    #[must_use]
    pub fn card(&self, product: &Product) -> ProductCard {
        let tier = product.stock_tier();
        ProductCard {
            id: product.id,
            image_url: product
                .image_url()
                .unwrap_or(&self.display.card_placeholder)
                .to_string(),
            name: product.name.clone(),
            category: product.category.clone(),
            description: product.description().unwrap_or_default().to_string(),
            price: self.price(product.price),
            stock_class: tier.class(),
            stock_label: tier.label(),
            attributes: format!("Size: {} | Color: {}", product.size, product.color),
        }
    }

    /// Project a product into the detail overlay.
    #[must_use]
    pub fn detail(&self, product: &Product) -> ProductDetail {
        let tier = product.stock_tier();
        ProductDetail {
            id: product.id,
            image_url: product
                .image_url()
                .unwrap_or(&self.display.detail_placeholder)
                .to_string(),
            name: product.name.clone(),
            stock_label: tier.label(),
            stock_emphasis: if tier == StockTier::InStock {
                Emphasis::Success
            } else {
                Emphasis::Accent
            },
            price: self.price(product.price),
            category: product.category.clone(),
            size: product.size.clone(),
            color: product.color.clone(),
            description: product
                .description()
                .unwrap_or(NO_DESCRIPTION_DETAIL)
                .to_string(),
        }
    }

    /// Project a product into an admin list row.
    #[must_use]
    pub fn admin_row(&self, product: &Product) -> AdminRow {
        AdminRow {
            id: product.id,
            thumbnail_url: product
                .image_url()
                .unwrap_or(&self.display.thumbnail_placeholder)
                .to_string(),
            name: product.name.clone(),
            summary: format!(
                "Category: {} | Price: {}",
                product.category,
                self.price(product.price)
            ),
            attributes: format!(
                "Size: {} | Color: {} | Stock: {}",
                product.size, product.color, product.stock
            ),
            description: product
                .description()
                .unwrap_or(NO_DESCRIPTION_ADMIN)
                .to_string(),
            actions: [RowAction::Edit(product.id), RowAction::Delete(product.id)],
        }
    }

    /// Project a product list into the storefront grid.
    #[must_use]
    pub fn grid(&self, products: &[Product]) -> ListView<ProductCard> {
        ListView::from_items(
            products.iter().map(|p| self.card(p)).collect(),
            BROWSER_EMPTY_MESSAGE,
        )
    }

    /// Project a product list into the admin management list.
    #[must_use]
    pub fn admin_list(&self, products: &[Product]) -> ListView<AdminRow> {
        ListView::from_items(
            products.iter().map(|p| self.admin_row(p)).collect(),
            ADMIN_EMPTY_MESSAGE,
        )
    }
}

impl fmt::Display for ProductCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[#{}] {}", self.id, self.name)?;
        writeln!(f, "      {}", self.category)?;
        if !self.description.is_empty() {
            writeln!(f, "      {}", self.description)?;
        }
        writeln!(
            f,
            "      {}  {} ({})",
            self.price, self.stock_label, self.stock_class
        )?;
        writeln!(f, "      {}", self.attributes)?;
        writeln!(f, "      image: {}", self.image_url)
    }
}

impl fmt::Display for ProductDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.stock_emphasis {
            Emphasis::Success => "+",
            Emphasis::Accent => "!",
        };
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", "=".repeat(self.name.chars().count()))?;
        writeln!(f, "{marker} {}", self.stock_label)?;
        writeln!(f, "{}", self.price)?;
        writeln!(f)?;
        writeln!(f, "Category: {}", self.category)?;
        writeln!(f, "Size:     {}", self.size)?;
        writeln!(f, "Color:    {}", self.color)?;
        writeln!(f, "Image:    {}", self.image_url)?;
        writeln!(f)?;
        writeln!(f, "Description:")?;
        writeln!(f, "{}", self.description)
    }
}

impl fmt::Display for AdminRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[#{}] {}", self.id, self.name)?;
        writeln!(f, "      {}", self.summary)?;
        writeln!(f, "      {}", self.attributes)?;
        writeln!(f, "      {}", self.description)?;
        writeln!(f, "      thumbnail: {}", self.thumbnail_url)?;
        writeln!(
            f,
            "      actions: {} / {}",
            self.actions[0], self.actions[1]
        )
    }
}
