//! HTTP handlers

pub mod acronyms;
pub mod health;

pub use health::health;

use crate::error::ServerError;
use crate::AppState;
use acronym_core::AcronymStore;

/// Run a blocking store operation off the async executor
pub(crate) async fn with_store<T, F>(state: &AppState, f: F) -> Result<T, ServerError>
where
    F: FnOnce(&AcronymStore) -> acronym_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let store = state.store.clone();
    let result = tokio::task::spawn_blocking(move || f(&store)).await?;
    Ok(result?)
}
