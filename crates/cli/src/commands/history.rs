use anyhow::Result;
use studymate_core::FeatureType;
use studymate_service::{Caller, HistoryView};

use super::open_saved_history;
use crate::config::AppConfig;

pub(crate) async fn run(
    config: &AppConfig,
    feature: Option<&str>,
    limit: Option<usize>,
    user: String,
) -> Result<()> {
    let feature = feature.map(str::parse::<FeatureType>).transpose()?;
    let history = open_saved_history(config).await?;
    let sessions = history.recent(&Caller::user(user), feature, limit).await?;
    println!("{}", serde_json::to_string_pretty(&sessions)?);
    Ok(())
}

pub(crate) async fn delete(config: &AppConfig, id: &str, user: String) -> Result<()> {
    let history = open_saved_history(config).await?;
    let caller = Caller::user(user);
    let mut view = HistoryView::load(&history, &caller, None).await?;
    if view.delete(&history, &caller, id).await? {
        println!("Deleted session {id}");
    } else {
        println!("Session not found: {id}");
    }
    Ok(())
}
