//! The products page: list, form, and the handlers that connect them.
//!
//! # Design
//! The page owns every piece of mutable state and changes it only from its
//! own `&mut self` handlers. Each handler runs its request to completion
//! before returning, so a second submission cannot start while one is in
//! flight.
//!
//! The list is never patched locally. Every successful mutation is followed
//! by a full re-fetch, so what is shown is always the server's last answer.

use std::fmt;

use tracing::{debug, info};

use crate::api::ProductApi;
use crate::card::{CardIntent, ProductCard};
use crate::error::ApiError;
use crate::form::ProductForm;
use crate::prompt::Prompter;
use crate::transport::Transport;
use crate::types::{Product, ProductId, ProductInput};

pub const LOAD_FAILED: &str = "Failed to load products. Check console for details.";

/// Why the page is showing an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// The list could not be loaded. Replaces the list view.
    Load(String),
    /// A create, update or delete failed. Shown above the form; the list
    /// and the form input stay as they were.
    Action(String),
}

impl PageError {
    pub fn message(&self) -> &str {
        match self {
            PageError::Load(message) | PageError::Action(message) => message,
        }
    }
}

pub struct ProductPage<T, P> {
    api: ProductApi<T>,
    prompter: P,
    products: Vec<Product>,
    is_loading: bool,
    error: Option<PageError>,
    editing: Option<Product>,
    form: ProductForm,
}

impl<T: Transport, P: Prompter> ProductPage<T, P> {
    /// A page that has not loaded yet. Call `mount` to fetch the list.
    pub fn new(api: ProductApi<T>, prompter: P) -> Self {
        Self {
            api,
            prompter,
            products: Vec::new(),
            is_loading: true,
            error: None,
            editing: None,
            form: ProductForm::default(),
        }
    }

    pub fn mount(&mut self) {
        self.refresh();
    }

    /// Replace the list with the server's current one.
    pub fn refresh(&mut self) {
        self.is_loading = true;
        self.error = None;
        match self.api.list() {
            Ok(products) => {
                debug!(count = products.len(), "loaded products");
                self.products = products;
            }
            Err(_) => self.error = Some(PageError::Load(LOAD_FAILED.to_string())),
        }
        self.is_loading = false;
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_ref().map(PageError::message)
    }

    pub fn page_error(&self) -> Option<&PageError> {
        self.error.as_ref()
    }

    pub fn editing(&self) -> Option<&Product> {
        self.editing.as_ref()
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProductForm {
        &mut self.form
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn prompter_mut(&mut self) -> &mut P {
        &mut self.prompter
    }

    pub fn api(&self) -> &ProductApi<T> {
        &self.api
    }

    pub fn cards(&self) -> impl Iterator<Item = ProductCard<'_>> {
        self.products.iter().map(ProductCard::new)
    }

    /// The card at `index` in display order.
    pub fn card(&self, index: usize) -> Option<ProductCard<'_>> {
        self.products.get(index).map(ProductCard::new)
    }

    pub fn dispatch(&mut self, intent: CardIntent) {
        match intent {
            CardIntent::Edit(product) => self.start_edit(product),
            CardIntent::Delete(id) => self.request_delete(id),
        }
    }

    /// Switch the form to update mode for `product`.
    pub fn start_edit(&mut self, product: Product) {
        self.form = ProductForm::from(&product);
        self.editing = Some(product);
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.form = ProductForm::default();
    }

    /// Create or update from the current form, depending on whether a
    /// product is being edited.
    pub fn submit(&mut self) {
        let input = match self.form.to_input() {
            Ok(input) => input,
            Err(err) => {
                self.fail(err);
                return;
            }
        };
        match self.editing.as_ref().map(|product| product.id.clone()) {
            Some(id) => self.update(&id, &input),
            None => self.create(&input),
        }
    }

    fn create(&mut self, input: &ProductInput) {
        match self.api.create(input) {
            Ok(created) => {
                info!(id = %created.id, "product created");
                self.form = ProductForm::default();
                self.refresh();
                self.prompter.notify("Product created successfully!");
            }
            Err(err) => self.fail(err),
        }
    }

    fn update(&mut self, id: &ProductId, input: &ProductInput) {
        match self.api.update(id, input) {
            Ok(_) => {
                info!(%id, "product updated");
                self.cancel_edit();
                self.refresh();
                self.prompter.notify("Product updated successfully!");
            }
            Err(err) => self.fail(err),
        }
    }

    /// Delete after the user confirms. Declining does nothing.
    pub fn request_delete(&mut self, id: ProductId) {
        let question = format!("Are you sure you want to delete product {id}?");
        if !self.prompter.confirm(&question) {
            debug!(%id, "delete declined");
            return;
        }
        match self.api.delete(&id) {
            Ok(_) => {
                info!(%id, "product deleted");
                self.refresh();
                self.prompter.notify("Product deleted successfully!");
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: ApiError) {
        self.error = Some(PageError::Action(err.to_string()));
    }
}

impl<T, P> fmt::Display for ProductPage<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_loading {
            return writeln!(f, "Loading products...");
        }
        if let Some(PageError::Load(message)) = &self.error {
            return writeln!(f, "Error: {message}");
        }

        writeln!(f, "Simple Products CRUD Application")?;
        writeln!(f)?;
        match &self.editing {
            Some(product) => writeln!(f, "== Edit Product {} ==", product.id)?,
            None => writeln!(f, "== Add New Product ==")?,
        }
        writeln!(f, "{}", self.form)?;
        if let Some(PageError::Action(message)) = &self.error {
            writeln!(f, "Error: {message}")?;
        }
        writeln!(f)?;
        writeln!(f, "== Available Products ==")?;
        if self.products.is_empty() {
            return writeln!(f, "No products available.");
        }
        for (index, product) in self.products.iter().enumerate() {
            writeln!(f, "{}. {}", index + 1, ProductCard::new(product))?;
        }
        Ok(())
    }
}
