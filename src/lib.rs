pub mod app;
pub mod domain;
pub mod error;
pub mod infra;

use std::path::PathBuf;

/// Conventional location of the CRM store: `<platform data dir>/com.contax.app/crm.db`.
///
/// The hosting surface passes this (or its own path) to [`infra::init_db`]
/// once at startup.
pub fn default_db_path() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("com.contax.app").join("crm.db")
}
