//! Storefront catalog browser.
//!
//! Owns the in-memory product list, the filter controls and the detail
//! overlay. Each handler issues at most one catalog request and leaves the
//! browser in a renderable state whatever the outcome.

use tracing::{error, info, warn};

use crate::api::CatalogApi;
use crate::filter::{FilterControls, ProductFilter};
use crate::modal::{Modal, ModalEvent};
use crate::product::Product;
use crate::view::{ListView, ProductCard, ProductDetail, Renderer, LOAD_ERROR_MESSAGE};

/// The storefront: a filterable product grid with a detail overlay.
#[derive(Debug)]
pub struct CatalogBrowser<A> {
    api: A,
    renderer: Renderer,
    products: Vec<Product>,
    categories: Vec<String>,
    controls: FilterControls,
    grid: ListView<ProductCard>,
    detail: Option<ProductDetail>,
    modal: Modal,
}

impl<A: CatalogApi> CatalogBrowser<A> {
    /// Create a browser with an empty grid.
    pub fn new(api: A, renderer: Renderer) -> Self {
        Self {
            api,
            renderer,
            products: Vec::new(),
            categories: Vec::new(),
            controls: FilterControls::default(),
            grid: ListView::Loading,
            detail: None,
            modal: Modal::new(),
        }
    }

    /// Initial page load: the unfiltered grid, then the category options.
    pub async fn start(&mut self) {
        self.load_products(&ProductFilter::none()).await;
        self.load_categories().await;
    }

    /// Fetch products matching `filter` and render them.
    ///
    /// On failure the grid shows a static error and the previously loaded
    /// products are kept.
    pub async fn load_products(&mut self, filter: &ProductFilter) -> &ListView<ProductCard> {
        self.grid = ListView::Loading;

        match self.api.list_products(filter).await {
            Ok(products) => {
                info!(count = products.len(), "Loaded products");
                self.grid = self.renderer.grid(&products);
                self.products = products;
            }
            Err(e) => {
                error!(error = %e, "Error loading products");
                self.grid = ListView::Failed(LOAD_ERROR_MESSAGE);
            }
        }

        &self.grid
    }

    /// Fetch the category options for the category filter, replacing any
    /// previously loaded options.
    ///
    /// Failures are logged and the options are left as they were.
    pub async fn load_categories(&mut self) {
        match self.api.list_categories().await {
            Ok(categories) => self.categories = categories,
            Err(e) => warn!(error = %e, "Error loading categories"),
        }
    }

    /// Reload the grid using the current filter control values.
    pub async fn apply_filters(&mut self) -> &ListView<ProductCard> {
        let filter = self.controls.to_filter();
        self.load_products(&filter).await
    }

    /// Reset the filter controls and reload the unfiltered grid.
    pub async fn clear_filters(&mut self) -> &ListView<ProductCard> {
        self.controls.clear();
        self.load_products(&ProductFilter::none()).await
    }

    /// Fetch one product and open it in the detail overlay.
    ///
    /// Failures are logged; the overlay is left untouched.
    pub async fn show_product_detail(&mut self, id: i64) -> Option<&ProductDetail> {
        match self.api.get_product(id).await {
            Ok(product) => {
                self.detail = Some(self.renderer.detail(&product));
                self.modal.handle(ModalEvent::Open);
            }
            Err(e) => error!(id, error = %e, "Error loading product detail"),
        }
        self.detail()
    }

    /// Close the detail overlay via its close control or an outside click.
    pub fn close_detail(&mut self, event: ModalEvent) {
        self.modal.handle(event);
    }

    /// The detail overlay, if it is open.
    #[must_use]
    pub fn detail(&self) -> Option<&ProductDetail> {
        if self.modal.is_open() {
            self.detail.as_ref()
        } else {
            None
        }
    }

    /// The current grid.
    #[must_use]
    pub fn grid(&self) -> &ListView<ProductCard> {
        &self.grid
    }

    /// The last successfully loaded products.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Options of the category filter.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Current filter control values.
    #[must_use]
    pub fn controls(&self) -> &FilterControls {
        &self.controls
    }

    /// Mutable access to the filter controls.
    pub fn controls_mut(&mut self) -> &mut FilterControls {
        &mut self.controls
    }

    /// The catalog API this browser talks to.
    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }
}
