pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;
pub mod utils;

use store::EventStore;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: EventStore,
}

impl AppState {
    pub fn new(store: EventStore) -> Self {
        Self { store }
    }
}
