pub mod app;
pub mod catalog;
pub mod errors;
pub mod handlers;
pub mod heatmap;
pub mod insights;
pub mod models;
pub mod state;
pub mod storage;
pub mod store;
pub mod streaks;
pub mod transfer;

pub use app::router;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
