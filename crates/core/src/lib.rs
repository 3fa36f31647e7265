//! Core types for studymate
//!
//! Feature selection, study sessions, the structured summary model, the
//! prompt builder and the summary reply parser. Shared by all other crates.

mod constants;
mod env_config;
mod error;
mod feature;
mod prompt;
mod session;
mod summary;
mod summary_parser;

pub use constants::*;
pub use env_config::{env_non_empty, env_parse_with_default};
pub use error::*;
pub use feature::FeatureType;
pub use prompt::{PromptModifiers, QuestionType, SummaryLength, build_prompt, build_prompt_for};
pub use session::{NewStudySession, StudyOutput, StudySession};
pub use summary::{KeyTerm, SummaryData};
pub use summary_parser::parse_summary;
