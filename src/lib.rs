pub mod app;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod leveling;
pub mod models;
pub mod notify;
pub mod state;
pub mod store;
pub mod summary;
pub mod ui;

pub use app::router;
pub use config::ServerConfig;
pub use state::AppState;
pub use store::PortfolioStore;
