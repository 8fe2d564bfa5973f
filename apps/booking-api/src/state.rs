use crate::config::Config;
use sea_orm::DatabaseConnection;

/// Shared application state handed to the API routers.
///
/// Cloning is cheap: the sea-orm connection is an Arc-backed pool handle.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: DatabaseConnection,
}
