use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Args;
use studymate_core::{FeatureType, PromptModifiers};
use studymate_service::{Caller, StudyRequest, StudyService};

use super::{connect_history, read_input};
use crate::config::AppConfig;

#[derive(Debug, Args)]
pub(crate) struct ModifierArgs {
    #[arg(long)]
    subject: Option<String>,
    #[arg(long)]
    grade_level: Option<String>,
    /// short, medium or long
    #[arg(long)]
    summary_length: Option<String>,
    #[arg(long)]
    question_count: Option<u8>,
    /// multiple-choice, true-false, short-answer or mixed
    #[arg(long)]
    question_type: Option<String>,
}

impl ModifierArgs {
    fn into_modifiers(self) -> Result<PromptModifiers> {
        let mut modifiers = PromptModifiers {
            subject: self.subject,
            grade_level: self.grade_level,
            ..PromptModifiers::default()
        };
        if let Some(length) = self.summary_length {
            modifiers.summary_length = length.parse()?;
        }
        if let Some(kind) = self.question_type {
            modifiers.question_type = kind.parse()?;
        }
        if let Some(count) = self.question_count {
            modifiers.question_count = count;
        }
        Ok(modifiers)
    }
}

pub(crate) async fn run(
    config: &AppConfig,
    feature: &str,
    input: &str,
    modifiers: ModifierArgs,
    user: Option<String>,
) -> Result<()> {
    let feature: FeatureType = feature.parse()?;
    let modifiers = modifiers.into_modifiers()?;
    let request = StudyRequest::new(feature, read_input(input)?).with_modifiers(modifiers);
    // Anonymous answers are never saved, so only a named user needs the database.
    let caller = Caller::from_optional(user);
    let database_url = if caller.has_identity() {
        Some(config.require_database_url()?)
    } else {
        config.database_url.as_deref()
    };
    let llm = config.llm_client()?;

    let service = StudyService::new(Arc::new(llm), connect_history(database_url).await?);
    let response = match service.submit(&caller, request).await {
        Ok(response) => response,
        Err(studymate_service::ServiceError::Llm(e)) => bail!("{}", e.user_message()),
        Err(e) => return Err(e.into()),
    };

    println!("{}", response.output.display_text());
    if let Some(id) = response.session_id {
        eprintln!("saved as {id}");
    }
    Ok(())
}
