pub mod app;
pub mod catalogue;
pub mod config;
pub mod dates;
pub mod errors;
pub mod handlers;
pub mod history;
pub mod models;
pub mod records;
pub mod session;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use catalogue::load_catalogue;
pub use config::AppConfig;
pub use state::AppState;
pub use storage::load_data;
