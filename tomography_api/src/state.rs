use crate::store::Datastore;
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub store: Arc<dyn Datastore>,
}

impl AppState {
    pub fn new(store: Arc<dyn Datastore>) -> Self {
        Self { store }
    }
}
