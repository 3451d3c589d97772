//! In-memory catalog used by controller tests.

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use super::CatalogApi;
use crate::error::{Error, Result};
use crate::filter::ProductFilter;
use crate::form::ProductPayload;
use crate::product::Product;

/// A request the fake received.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    List(ProductFilter),
    Categories,
    Get(i64),
    Create(ProductPayload),
    Update(i64, ProductPayload),
    Delete(i64),
}

/// How the next requests should fail, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Failure {
    #[default]
    None,
    /// Simulate a broken connection or unreadable body.
    Transport,
    /// Answer 500 with an `{"error": ...}` body.
    Rejected,
    /// Answer 500 with a body lacking an `error` field.
    RejectedWithoutMessage,
}

#[derive(Debug, Default)]
struct State {
    products: Vec<Product>,
    categories: Vec<String>,
    calls: Vec<Call>,
    failure: Failure,
    next_id: i64,
}

#[derive(Debug, Default)]
pub(crate) struct FakeCatalog {
    state: Mutex<State>,
}

impl FakeCatalog {
    pub(crate) fn with_products(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let mut categories: Vec<String> = Vec::new();
        for product in &products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        Self {
            state: Mutex::new(State {
                products,
                categories,
                next_id,
                ..State::default()
            }),
        }
    }

    pub(crate) fn fail_with(&self, failure: Failure) {
        self.state.lock().unwrap().failure = failure;
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub(crate) fn products(&self) -> Vec<Product> {
        self.state.lock().unwrap().products.clone()
    }

    fn record(&self, call: Call) -> Result<std::sync::MutexGuard<'_, State>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        let failure = state.failure;
        match failure {
            Failure::None => Ok(state),
            Failure::Transport => Err(serde_json::from_str::<()>("<html>").unwrap_err().into()),
            Failure::Rejected => Err(Error::rejected(
                StatusCode::INTERNAL_SERVER_ERROR,
                Some("database is locked".to_string()),
            )),
            Failure::RejectedWithoutMessage => {
                Err(Error::rejected(StatusCode::INTERNAL_SERVER_ERROR, None))
            }
        }
    }
}

fn not_found() -> Error {
    Error::rejected(StatusCode::NOT_FOUND, Some("Item not found".to_string()))
}

fn to_product(id: i64, payload: &ProductPayload) -> Product {
    Product {
        id,
        name: payload.name.clone(),
        description: Some(payload.description.clone()),
        category: payload.category.clone(),
        price: payload.price.unwrap_or(0.0),
        size: payload.size.clone(),
        color: payload.color.clone(),
        stock: payload.stock.unwrap_or(0),
        image_url: Some(payload.image_url.clone()),
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        let state = self.record(Call::List(filter.clone()))?;
        let wanted = |want: &Option<String>, have: &str| want.as_deref().map_or(true, |w| w == have);
        Ok(state
            .products
            .iter()
            .filter(|p| {
                wanted(&filter.category, &p.category)
                    && wanted(&filter.size, &p.size)
                    && wanted(&filter.color, &p.color)
            })
            .cloned()
            .collect())
    }

    async fn list_categories(&self) -> Result<Vec<String>> {
        let state = self.record(Call::Categories)?;
        Ok(state.categories.clone())
    }

    async fn get_product(&self, id: i64) -> Result<Product> {
        let state = self.record(Call::Get(id))?;
        state
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn create_product(&self, payload: &ProductPayload) -> Result<Product> {
        let mut state = self.record(Call::Create(payload.clone()))?;
        let product = to_product(state.next_id, payload);
        state.next_id += 1;
        state.products.push(product.clone());
        Ok(product)
    }

    async fn update_product(&self, id: i64, payload: &ProductPayload) -> Result<Product> {
        let mut state = self.record(Call::Update(id, payload.clone()))?;
        let slot = state
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(not_found)?;
        *slot = to_product(id, payload);
        Ok(slot.clone())
    }

    async fn delete_product(&self, id: i64) -> Result<()> {
        let mut state = self.record(Call::Delete(id))?;
        let before = state.products.len();
        state.products.retain(|p| p.id != id);
        if state.products.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}
