//! Best-effort parser for summarizer replies.
//!
//! The model is asked for a fixed layout (see `prompt.rs`) but does not always
//! follow it. Anything the parser cannot place lands in `points`; nothing is
//! dropped and parsing never fails.

use std::sync::LazyLock;

use regex::Regex;

use crate::summary::{KeyTerm, SummaryData};

static EMPHASIS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*+|__+").expect("valid emphasis regex"));
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*#{1,6}[ \t]*").expect("valid heading regex"));

static MAIN_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:main idea|overview|summary)[:\s][:\s]*(.*)$").expect("valid main regex")
});
static TERMS_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:key terms?|vocabulary|important terms?)[:\s]*").expect("valid terms regex")
});
static POINTS_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:key points?|main points?|important points?)[:\s]*")
        .expect("valid points regex")
});
static CONNECTIONS_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:connections?|how .+ connect|relationships?)[:\s]*")
        .expect("valid connections regex")
});

static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-•]|\d+[.)])\s*(.*)$").expect("valid bullet regex"));
static TERM_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[:\-–—]").expect("valid separator regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Main,
    Terms,
    Points,
    Connections,
}

/// Parse a summarizer reply into a [`SummaryData`].
#[must_use]
pub fn parse_summary(raw: &str) -> SummaryData {
    let text = EMPHASIS_RE.replace_all(raw, "");
    let text = HEADING_RE.replace_all(&text, "");

    let mut summary = SummaryData::default();
    let mut section = Section::None;

    for line in text.trim().lines().map(str::trim).filter(|l| !l.is_empty()) {
        section = match detect_header(line, &mut summary) {
            Some(next) => next,
            None => handle_content(line, section, &mut summary),
        };
    }

    summary.promote_headline();
    summary
}

fn detect_header(line: &str, summary: &mut SummaryData) -> Option<Section> {
    if let Some(caps) = MAIN_HEADER_RE.captures(line) {
        summary.main_idea = caps.get(1).map_or("", |m| m.as_str()).trim().to_owned();
        return Some(Section::Main);
    }
    if TERMS_HEADER_RE.is_match(line) {
        return Some(Section::Terms);
    }
    if POINTS_HEADER_RE.is_match(line) {
        return Some(Section::Points);
    }
    if CONNECTIONS_HEADER_RE.is_match(line) {
        return Some(Section::Connections);
    }
    None
}

fn handle_content(line: &str, section: Section, summary: &mut SummaryData) -> Section {
    if let Some(caps) = BULLET_RE.captures(line) {
        let item = caps.get(1).map_or("", |m| m.as_str()).trim();
        match section {
            Section::Terms => match split_term(item) {
                Some(term) => summary.key_terms.push(term),
                None => summary.points.push(item.to_owned()),
            },
            Section::Connections => summary.connections.push(item.to_owned()),
            Section::None | Section::Main | Section::Points => summary.points.push(item.to_owned()),
        }
        return section;
    }

    match section {
        Section::Main if summary.main_idea.is_empty() => {
            summary.main_idea = line.to_owned();
        },
        Section::None if summary.main_idea.is_empty() => {
            summary.main_idea = line.to_owned();
            return Section::Main;
        },
        Section::Main => {
            summary.main_idea.push(' ');
            summary.main_idea.push_str(line);
        },
        Section::None | Section::Terms | Section::Points | Section::Connections => {
            summary.points.push(line.to_owned());
        },
    }
    section
}

fn split_term(item: &str) -> Option<KeyTerm> {
    let sep = TERM_SEPARATOR_RE.find(item)?;
    let term = item.get(..sep.start())?.trim();
    let definition = item.get(sep.end()..)?.trim();
    Some(KeyTerm::new(term, definition))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_full_template_reply() {
        let raw = "Main Idea: Photosynthesis converts light to chemical energy.\n\
                   Key Terms:\n\
                   - Chlorophyll: pigment that absorbs light\n\
                   - ATP: energy carrier molecule\n\
                   Key Points:\n\
                   - Occurs in chloroplasts\n\
                   - Requires water and CO2\n\
                   Connections:\n\
                   - Links to cellular respiration";
        let summary = parse_summary(raw);
        assert_eq!(summary.main_idea, "Photosynthesis converts light to chemical energy.");
        assert_eq!(
            summary.key_terms,
            vec![
                KeyTerm::new("Chlorophyll", "pigment that absorbs light"),
                KeyTerm::new("ATP", "energy carrier molecule"),
            ]
        );
        assert_eq!(summary.points, strings(&["Occurs in chloroplasts", "Requires water and CO2"]));
        assert_eq!(summary.connections, strings(&["Links to cellular respiration"]));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_summary(""), SummaryData::default());
        assert_eq!(parse_summary("   \n\n\t "), SummaryData::default());
    }

    #[test]
    fn test_arbitrary_input_does_not_panic() {
        let inputs =
            ["-", "1.", "::", "Key Terms:\n- :", "• —", "##", "**", "Main Idea:", "é—ü"];
        for raw in inputs {
            let _ = parse_summary(raw);
        }
    }

    #[test]
    fn test_headline_falls_back_to_first_point() {
        let summary = parse_summary("Key Points:\n- First\n- Second\n- Third");
        assert_eq!(summary.main_idea, "First");
        assert_eq!(summary.points, strings(&["Second", "Third"]));
    }

    #[test]
    fn test_term_without_separator_becomes_point() {
        let summary =
            parse_summary("Main Idea: Plants.\nKey Terms:\n- photosynthesis\n- ATP: fuel");
        assert_eq!(summary.key_terms, vec![KeyTerm::new("ATP", "fuel")]);
        assert_eq!(summary.points, strings(&["photosynthesis"]));
    }

    #[test]
    fn test_term_dash_separators() {
        let summary = parse_summary(
            "Summary: x\nVocabulary\n- Osmosis - water diffusion\n- Mitosis – cell division\n\
             - Meiosis — gamete formation",
        );
        assert_eq!(
            summary.key_terms,
            vec![
                KeyTerm::new("Osmosis", "water diffusion"),
                KeyTerm::new("Mitosis", "cell division"),
                KeyTerm::new("Meiosis", "gamete formation"),
            ]
        );
    }

    #[test]
    fn test_term_splits_on_first_bare_hyphen() {
        let summary = parse_summary(
            "Main Idea: m\nKey Terms:\n- Mitosis-cell division\n- Osmosis -water movement",
        );
        assert_eq!(
            summary.key_terms,
            vec![
                KeyTerm::new("Mitosis", "cell division"),
                KeyTerm::new("Osmosis", "water movement"),
            ]
        );
        assert!(summary.points.is_empty());
    }

    #[test]
    fn test_first_separator_wins() {
        let summary = parse_summary("Main Idea: m\nKey Terms:\n- pH: acid-base scale");
        assert_eq!(summary.key_terms, vec![KeyTerm::new("pH", "acid-base scale")]);
    }

    #[test]
    fn test_header_case_and_label_variants() {
        let headers =
            ["KEY POINTS:", "Key Point:", "key points", "Main Points", "Important Point -"];
        for header in headers {
            let raw = format!("Main Idea: idea\n{header}\n- one");
            let summary = parse_summary(&raw);
            assert_eq!(summary.points, strings(&["one"]), "header {header:?}");
            assert_eq!(summary.main_idea, "idea");
        }
    }

    #[test]
    fn test_connections_header_variants() {
        for header in ["Connections:", "connection", "How These Ideas Connect:", "Relationships"] {
            let raw = format!("Main Idea: idea\n{header}\n- linked");
            let summary = parse_summary(&raw);
            assert_eq!(summary.connections, strings(&["linked"]), "header {header:?}");
        }
    }

    #[test]
    fn test_order_is_preserved() {
        let summary = parse_summary(
            "Overview: o\nKey Terms:\n- B: 2\n- A: 1\nKey Points:\n3. third\n1) first\n- second\n\
             Connections:\n- z\n- y",
        );
        assert_eq!(summary.key_terms, vec![KeyTerm::new("B", "2"), KeyTerm::new("A", "1")]);
        assert_eq!(summary.points, strings(&["third", "first", "second"]));
        assert_eq!(summary.connections, strings(&["z", "y"]));
    }

    #[test]
    fn test_markdown_emphasis_and_headings_are_stripped() {
        let raw = "## **Main Idea:** Cells *divide*.\n### Key Terms\n- **Mitosis**: division\n";
        let summary = parse_summary(raw);
        assert_eq!(summary.main_idea, "Cells divide.");
        assert_eq!(summary.key_terms, vec![KeyTerm::new("Mitosis", "division")]);
    }

    #[test]
    fn test_star_marker_is_stripped_not_a_bullet() {
        let summary = parse_summary("Main Idea: m\nKey Terms:\n* Mitosis: division");
        assert!(summary.key_terms.is_empty());
        assert_eq!(summary.points, strings(&["Mitosis: division"]));
    }

    #[test]
    fn test_header_prefix_consumes_trailing_prose() {
        let summary =
            parse_summary("Main Idea: m\nKey points of contention remain unresolved.\n- a");
        assert_eq!(summary.main_idea, "m");
        assert_eq!(summary.points, strings(&["a"]));
    }

    #[test]
    fn test_prose_reply_without_headers() {
        let summary = parse_summary("The water cycle moves water.\nIt never stops.");
        assert_eq!(summary.main_idea, "The water cycle moves water. It never stops.");
        assert!(summary.points.is_empty());
    }

    #[test]
    fn test_main_header_without_remainder_takes_next_line() {
        let summary = parse_summary("Main Idea:\nEnergy is conserved.\nAcross all systems.");
        assert_eq!(summary.main_idea, "Energy is conserved. Across all systems.");
    }

    #[test]
    fn test_unbulleted_line_in_section_becomes_point() {
        let summary =
            parse_summary("Main Idea: m\nKey Terms:\nloose sentence\nConnections:\nalso loose");
        assert_eq!(summary.points, strings(&["loose sentence", "also loose"]));
        assert!(summary.key_terms.is_empty());
        assert!(summary.connections.is_empty());
    }

    #[test]
    fn test_bullets_before_any_header_are_points() {
        let summary = parse_summary("- alpha\n- beta");
        assert_eq!(summary.main_idea, "alpha");
        assert_eq!(summary.points, strings(&["beta"]));
    }

    #[test]
    fn test_empty_bullet_keeps_its_slot() {
        let summary = parse_summary("Main Idea: m\nKey Points:\n-\n- kept");
        assert_eq!(summary.points, strings(&["", "kept"]));

        let summary = parse_summary("Key Points:\n-\n- kept");
        assert_eq!(summary.main_idea, "");
        assert_eq!(summary.points, strings(&["kept"]));
    }
}
