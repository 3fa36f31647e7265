use serde::{Deserialize, Serialize};

/// A term and its definition, as listed under "Key Terms".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyTerm {
    pub term: String,
    pub definition: String,
}

impl KeyTerm {
    #[must_use]
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self { term: term.into(), definition: definition.into() }
    }
}

/// Structured summary recovered from a summarizer reply.
///
/// Stored serialized in `output_text` for summarizer sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryData {
    pub main_idea: String,
    #[serde(default)]
    pub key_terms: Vec<KeyTerm>,
    #[serde(default)]
    pub points: Vec<String>,
    #[serde(default)]
    pub connections: Vec<String>,
}

impl SummaryData {
    /// Guarantees a headline: an empty main idea takes over the first point.
    pub fn promote_headline(&mut self) {
        if self.main_idea.is_empty() && !self.points.is_empty() {
            self.main_idea = self.points.remove(0);
        }
    }

    /// Renders the summary back into the sectioned plain-text layout.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        if !self.main_idea.is_empty() {
            out.push_str("Main Idea: ");
            out.push_str(&self.main_idea);
            out.push('\n');
        }
        if !self.key_terms.is_empty() {
            out.push_str("\nKey Terms:\n");
            for kt in &self.key_terms {
                out.push_str(&format!("- {}: {}\n", kt.term, kt.definition));
            }
        }
        push_list(&mut out, "Key Points", &self.points);
        push_list(&mut out, "Connections", &self.connections);
        out.trim_end().to_owned()
    }
}

fn push_list(out: &mut String, header: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("\n{header}:\n"));
    for item in items {
        out.push_str("- ");
        out.push_str(item);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promote_headline_takes_first_point() {
        let mut summary = SummaryData {
            points: vec!["first".to_owned(), "second".to_owned()],
            ..SummaryData::default()
        };
        summary.promote_headline();
        assert_eq!(summary.main_idea, "first");
        assert_eq!(summary.points, vec!["second".to_owned()]);
    }

    #[test]
    fn test_promote_headline_keeps_existing_main_idea() {
        let mut summary = SummaryData {
            main_idea: "headline".to_owned(),
            points: vec!["first".to_owned()],
            ..SummaryData::default()
        };
        summary.promote_headline();
        assert_eq!(summary.main_idea, "headline");
        assert_eq!(summary.points.len(), 1);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let summary = SummaryData {
            main_idea: "idea".to_owned(),
            key_terms: vec![KeyTerm::new("ATP", "energy carrier")],
            ..SummaryData::default()
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["mainIdea"], "idea");
        assert_eq!(value["keyTerms"][0]["term"], "ATP");
        assert_eq!(value["keyTerms"][0]["definition"], "energy carrier");
        assert!(value["points"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_plain_text_skips_empty_sections() {
        let summary = SummaryData {
            main_idea: "Cells need energy.".to_owned(),
            points: vec!["ATP powers work".to_owned()],
            ..SummaryData::default()
        };
        assert_eq!(
            summary.to_plain_text(),
            "Main Idea: Cells need energy.\n\nKey Points:\n- ATP powers work"
        );
    }
}
