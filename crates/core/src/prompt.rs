//! Prompt templates for each study feature.
//!
//! The summarizer template and `summary_parser` are a matched pair: the
//! headers and bullet style requested here are exactly what the parser
//! recognizes. Change them together.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_QUESTION_COUNT, MAX_QUESTION_COUNT};
use crate::error::CoreError;
use crate::feature::FeatureType;

/// Requested summary size. Stored as the session subject for summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl SummaryLength {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    /// How many key points the prompt asks for.
    #[must_use]
    pub const fn point_range(&self) -> &'static str {
        match *self {
            Self::Short => "3-4",
            Self::Medium => "5-7",
            Self::Long => "8-10",
        }
    }
}

impl FromStr for SummaryLength {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            _ => Err(CoreError::InvalidModifier { field: "summary length", value: s.to_owned() }),
        }
    }
}

/// Quiz question format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    #[default]
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
    Mixed,
}

impl QuestionType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::MultipleChoice => "multiple-choice",
            Self::TrueFalse => "true-false",
            Self::ShortAnswer => "short-answer",
            Self::Mixed => "mixed",
        }
    }

    const fn label(&self) -> &'static str {
        match *self {
            Self::MultipleChoice => "multiple-choice",
            Self::TrueFalse => "true/false",
            Self::ShortAnswer => "short-answer",
            Self::Mixed => "mixed-format (multiple-choice, true/false and short-answer)",
        }
    }

    const fn instruction(&self) -> &'static str {
        match *self {
            Self::MultipleChoice => "Give four options labelled A) to D) for each question.",
            Self::TrueFalse => "Phrase each question as a statement to be judged true or false.",
            Self::ShortAnswer => "Each question should be answerable in one to three sentences.",
            Self::Mixed => "Label each question with its format.",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "multiple-choice" | "mcq" => Ok(Self::MultipleChoice),
            "true-false" | "true/false" => Ok(Self::TrueFalse),
            "short-answer" => Ok(Self::ShortAnswer),
            "mixed" => Ok(Self::Mixed),
            _ => Err(CoreError::InvalidModifier { field: "question type", value: s.to_owned() }),
        }
    }
}

/// Optional knobs that shape a prompt. Each feature reads only its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptModifiers {
    pub subject: Option<String>,
    pub grade_level: Option<String>,
    pub summary_length: SummaryLength,
    pub question_count: u8,
    pub question_type: QuestionType,
}

impl Default for PromptModifiers {
    fn default() -> Self {
        Self {
            subject: None,
            grade_level: None,
            summary_length: SummaryLength::default(),
            question_count: DEFAULT_QUESTION_COUNT,
            question_type: QuestionType::default(),
        }
    }
}

impl PromptModifiers {
    /// Question count clamped into the accepted range.
    #[must_use]
    pub fn clamped_question_count(&self) -> u8 {
        self.question_count.clamp(1, MAX_QUESTION_COUNT)
    }

    fn subject(&self) -> Option<&str> {
        self.subject.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    fn grade_level(&self) -> Option<&str> {
        self.grade_level.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Build the prompt for a feature given by name.
///
/// An unrecognized feature returns the input unchanged.
#[must_use]
pub fn build_prompt(feature: &str, input: &str, modifiers: &PromptModifiers) -> String {
    match feature.parse::<FeatureType>() {
        Ok(feature) => build_prompt_for(feature, input, modifiers),
        Err(_) => input.to_owned(),
    }
}

/// Build the prompt for a known feature.
#[must_use]
pub fn build_prompt_for(feature: FeatureType, input: &str, modifiers: &PromptModifiers) -> String {
    match feature {
        FeatureType::Solver => solver_prompt(input, modifiers),
        FeatureType::Explainer => explainer_prompt(input, modifiers),
        FeatureType::Summarizer => summarizer_prompt(input, modifiers),
        FeatureType::Questions => questions_prompt(input, modifiers),
    }
}

fn solver_prompt(input: &str, modifiers: &PromptModifiers) -> String {
    let kind = modifiers.subject().map(|s| format!("{s} ")).unwrap_or_default();
    format!(
        "Solve the following {kind}problem step by step.

Problem:
{input}

Show your work for each step and end with a line starting with \"Final Answer:\"."
    )
}

fn explainer_prompt(input: &str, modifiers: &PromptModifiers) -> String {
    let context =
        modifiers.subject().map(|s| format!(" in the context of {s}")).unwrap_or_default();
    let audience = modifiers.grade_level().map_or_else(
        || "in clear, accessible language".to_owned(),
        |g| format!("for a learner at the {g} level"),
    );
    format!(
        "Explain the following concept{context} {audience}.

Concept:
{input}

Start with a simple definition, then build up to the details. Include at least one concrete example and one analogy."
    )
}

fn summarizer_prompt(input: &str, modifiers: &PromptModifiers) -> String {
    let points = modifiers.summary_length.point_range();
    format!(
        "Summarize the following text. Provide {points} key points.

Use exactly this format:

Main Idea: <one or two sentences capturing the central idea>

Key Terms:
- <Term>: <short definition>

Key Points:
- <point>

Connections:
- <how the ideas relate to each other or to other topics>

Text:
{input}"
    )
}

fn questions_prompt(input: &str, modifiers: &PromptModifiers) -> String {
    let count = modifiers.clamped_question_count();
    let qtype = modifiers.question_type;
    let noun = if count == 1 { "question" } else { "questions" };
    format!(
        "Create {count} {label} {noun} to test understanding of the following material.

Material:
{input}

Number each question. {instruction} After all questions, add a section headed \"Answers:\" listing the correct answer for each question.",
        label = qtype.label(),
        instruction = qtype.instruction(),
    )
}
