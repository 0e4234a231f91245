pub mod app;
pub mod chat;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod insights;
pub mod models;
pub mod resources;
pub mod responder;
pub mod shell;
pub mod state;
pub mod tracker;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
