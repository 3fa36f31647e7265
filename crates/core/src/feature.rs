//! Study feature selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Study tool selected by the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FeatureType {
    /// Step-by-step problem solving
    Solver,
    /// Concept explanation
    Explainer,
    /// Structured summary of a passage
    Summarizer,
    /// Practice quiz generation
    Questions,
}

impl FeatureType {
    pub const ALL_VARIANTS: &'static [FeatureType] =
        &[Self::Solver, Self::Explainer, Self::Summarizer, Self::Questions];

    /// Returns the string stored in the `feature_type` column.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Solver => "solver",
            Self::Explainer => "explainer",
            Self::Summarizer => "summarizer",
            Self::Questions => "questions",
        }
    }

    /// System instruction sent alongside every prompt for this feature.
    #[must_use]
    pub const fn system_instruction(&self) -> &'static str {
        match *self {
            Self::Solver => {
                "You are a patient tutor who solves problems step by step. Show every step, \
                 explain the reasoning behind it, and finish with a clearly labelled final answer."
            },
            Self::Explainer => {
                "You are a friendly teacher who explains concepts clearly, using analogies and \
                 concrete examples suited to the learner's level."
            },
            Self::Summarizer => {
                "You are an expert at condensing study material. Always follow the requested \
                 output format exactly, using the given section headers and '-' bullets."
            },
            Self::Questions => {
                "You are an experienced educator who writes clear, fair practice questions \
                 together with their answers."
            },
        }
    }

    /// Completion token limit for this feature.
    #[must_use]
    pub const fn max_tokens(&self) -> u32 {
        match *self {
            Self::Solver | Self::Questions => 1500,
            Self::Explainer => 1200,
            Self::Summarizer => 1000,
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "solver" => Ok(Self::Solver),
            "explainer" => Ok(Self::Explainer),
            "summarizer" => Ok(Self::Summarizer),
            "questions" => Ok(Self::Questions),
            _ => Err(CoreError::UnknownFeature(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_str() {
        for feature in FeatureType::ALL_VARIANTS {
            assert_eq!(feature.as_str().parse::<FeatureType>().unwrap(), *feature);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Summarizer".parse::<FeatureType>().unwrap(), FeatureType::Summarizer);
        assert_eq!(" QUESTIONS ".parse::<FeatureType>().unwrap(), FeatureType::Questions);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "flashcards".parse::<FeatureType>().unwrap_err();
        assert_eq!(err, CoreError::UnknownFeature("flashcards".to_owned()));
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&FeatureType::Explainer).unwrap();
        assert_eq!(json, "\"explainer\"");
    }
}
