pub(crate) mod ask;
pub(crate) mod history;
pub(crate) mod parse;
pub(crate) mod serve;

use std::io::Read;
use std::sync::Arc;

use anyhow::{Context, Result};
use studymate_service::HistoryService;
use studymate_storage::StorageBackend;

use crate::config::AppConfig;

/// Read `source`, where `-` means stdin.
pub(crate) fn read_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
        return Ok(buf);
    }
    Ok(source.to_owned())
}

/// History backed by `DATABASE_URL`, or by process memory when it is unset.
pub(crate) async fn open_history(config: &AppConfig) -> Result<Arc<HistoryService>> {
    connect_history(config.database_url.as_deref()).await
}

/// History for one-shot commands. Without a database their sessions would
/// vanish on exit, so `DATABASE_URL` is required.
pub(crate) async fn open_saved_history(config: &AppConfig) -> Result<Arc<HistoryService>> {
    connect_history(Some(config.require_database_url()?)).await
}

pub(crate) async fn connect_history(database_url: Option<&str>) -> Result<Arc<HistoryService>> {
    let storage = StorageBackend::connect(database_url).await?;
    tracing::debug!(backend = storage.name(), "storage ready");
    Ok(Arc::new(HistoryService::new(Arc::new(storage))))
}
