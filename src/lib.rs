pub mod app;
pub mod calendar;
pub mod config;
pub mod dashboard;
pub mod dialogs;
pub mod errors;
pub mod handlers;
pub mod login;
pub mod models;
pub mod seed;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use dashboard::Dashboard;
pub use seed::load_seed;
pub use state::AppState;
