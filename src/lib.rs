pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod routes;
pub mod seed;
pub mod service;
pub mod store;
pub mod validation;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{config::Config, service::Catalog};

pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Mutex<Catalog>,
}
