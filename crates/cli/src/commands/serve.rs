use std::sync::Arc;

use anyhow::Result;
use studymate_http::{AppState, create_router};
use studymate_service::StudyService;

use super::open_history;
use crate::config::AppConfig;

pub(crate) async fn run(config: &AppConfig, host: String, port: u16) -> Result<()> {
    let history = open_history(config).await?;

    let study = match config.llm_client() {
        Ok(llm) => {
            tracing::info!(
                model = llm.model(),
                base_url = llm.base_url(),
                "completion client ready"
            );
            StudyService::new(Arc::new(llm), history)
        },
        Err(e) => {
            tracing::warn!("{e}; serving history only, study requests will return 503");
            StudyService::without_completion(history)
        },
    };

    let router = create_router(Arc::new(AppState::new(Arc::new(study))));
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
