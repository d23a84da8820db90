pub mod aggregate;
pub mod app;
pub mod auth;
pub mod client;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_store, resolve_data_path};
