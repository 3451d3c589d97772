//! Admin console: product management list, create form and edit modal.
//!
//! Mutations follow one contract: on success notify, then re-fetch the whole
//! list; on failure notify with the server's error string when there is one,
//! or a generic message otherwise, and leave the form as it was.

use tracing::{error, info, warn};

use crate::api::CatalogApi;
use crate::error::Error;
use crate::filter::ProductFilter;
use crate::form::ProductForm;
use crate::modal::{Modal, ModalEvent};
use crate::prompt::Prompt;
use crate::view::{AdminRow, ListView, Renderer, LOAD_ERROR_MESSAGE};

/// Question asked before deleting a product.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this product?";

/// A mutation the console performs, for user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Update,
    Delete,
}

impl Action {
    fn past(self) -> &'static str {
        match self {
            Self::Add => "added",
            Self::Update => "updated",
            Self::Delete => "deleted",
        }
    }

    fn progressive(self) -> &'static str {
        match self {
            Self::Add => "adding",
            Self::Update => "updating",
            Self::Delete => "deleting",
        }
    }

    fn success_message(self) -> String {
        format!("Product {} successfully!", self.past())
    }

    fn failure_message(self, err: &Error) -> String {
        match err.server_message() {
            Some(message) => format!("Error {} product: {message}", self.progressive()),
            None => format!("Error {} product. Please try again.", self.progressive()),
        }
    }
}

/// The admin console.
#[derive(Debug)]
pub struct AdminConsole<A, P> {
    api: A,
    prompt: P,
    renderer: Renderer,
    list: ListView<AdminRow>,
    add_form: ProductForm,
    edit_form: ProductForm,
    editing_id: Option<i64>,
    modal: Modal,
}

impl<A: CatalogApi, P: Prompt> AdminConsole<A, P> {
    /// Create a console with an empty list and closed edit modal.
    pub fn new(api: A, prompt: P, renderer: Renderer) -> Self {
        Self {
            api,
            prompt,
            renderer,
            list: ListView::Loading,
            add_form: ProductForm::default(),
            edit_form: ProductForm::default(),
            editing_id: None,
            modal: Modal::new(),
        }
    }

    /// Fetch the unfiltered product list and render the management list.
    pub async fn load_admin_products(&mut self) -> &ListView<AdminRow> {
        self.list = ListView::Loading;

        match self.api.list_products(&ProductFilter::none()).await {
            Ok(products) => {
                info!(count = products.len(), "Loaded products");
                self.list = self.renderer.admin_list(&products);
            }
            Err(e) => {
                error!(error = %e, "Error loading products");
                self.list = ListView::Failed(LOAD_ERROR_MESSAGE);
            }
        }

        &self.list
    }

    /// Submit the create form.
    ///
    /// Returns whether the product was created.
    pub async fn handle_add_product(&mut self) -> bool {
        let payload = self.add_form.to_payload();

        match self.api.create_product(&payload).await {
            Ok(product) => {
                info!(id = product.id, "Product created");
                self.prompt.notify(&Action::Add.success_message());
                self.add_form.reset();
                self.load_admin_products().await;
                true
            }
            Err(e) => {
                self.report_failure(Action::Add, &e);
                false
            }
        }
    }

    /// Fetch a product into the edit form and open the edit modal.
    ///
    /// Returns whether the modal was opened.
    pub async fn show_edit_modal(&mut self, id: i64) -> bool {
        match self.api.get_product(id).await {
            Ok(product) => {
                self.edit_form = ProductForm::from_product(&product);
                self.editing_id = Some(product.id);
                self.modal.handle(ModalEvent::Open);
                true
            }
            Err(e) => {
                error!(id, error = %e, "Error loading product");
                self.prompt.notify("Error loading product details.");
                false
            }
        }
    }

    /// Submit the edit form for the product being edited.
    ///
    /// Returns whether the product was updated.
    pub async fn handle_edit_product(&mut self) -> bool {
        let Some(id) = self.editing_id else {
            warn!("Edit submitted with no product loaded");
            return false;
        };
        let payload = self.edit_form.to_payload();

        match self.api.update_product(id, &payload).await {
            Ok(_) => {
                info!(id, "Product updated");
                self.prompt.notify(&Action::Update.success_message());
                self.modal.handle(ModalEvent::UpdateSucceeded);
                self.load_admin_products().await;
                true
            }
            Err(e) => {
                self.report_failure(Action::Update, &e);
                false
            }
        }
    }

    /// Delete a product after the user confirms.
    ///
    /// Returns whether the product was deleted. Declining issues no request.
    pub async fn delete_product(&mut self, id: i64) -> bool {
        if !self.prompt.confirm(DELETE_CONFIRMATION) {
            info!(id, "Delete cancelled");
            return false;
        }

        match self.api.delete_product(id).await {
            Ok(()) => {
                info!(id, "Product deleted");
                self.prompt.notify(&Action::Delete.success_message());
                self.load_admin_products().await;
                true
            }
            Err(e) => {
                self.report_failure(Action::Delete, &e);
                false
            }
        }
    }

    /// Close the edit modal via its close control or an outside click.
    pub fn close_edit_modal(&mut self, event: ModalEvent) {
        self.modal.handle(event);
    }

    fn report_failure(&mut self, action: Action, err: &Error) {
        if err.is_rejection() {
            warn!(error = %err, "Catalog API rejected {} product", action.progressive());
        } else {
            error!(error = %err, "Error {} product", action.progressive());
        }
        self.prompt.notify(&action.failure_message(err));
    }

    /// The current management list.
    #[must_use]
    pub fn list(&self) -> &ListView<AdminRow> {
        &self.list
    }

    /// Whether the edit modal is showing.
    #[must_use]
    pub fn is_edit_open(&self) -> bool {
        self.modal.is_open()
    }

    /// Id of the product loaded into the edit form.
    #[must_use]
    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    /// The create form.
    #[must_use]
    pub fn add_form(&self) -> &ProductForm {
        &self.add_form
    }

    /// Mutable access to the create form.
    pub fn add_form_mut(&mut self) -> &mut ProductForm {
        &mut self.add_form
    }

    /// The edit form.
    #[must_use]
    pub fn edit_form(&self) -> &ProductForm {
        &self.edit_form
    }

    /// Mutable access to the edit form.
    pub fn edit_form_mut(&mut self) -> &mut ProductForm {
        &mut self.edit_form
    }

    /// The catalog API this console talks to.
    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// The prompt used for notifications and confirmations.
    #[must_use]
    pub fn prompt(&self) -> &P {
        &self.prompt
    }
}
