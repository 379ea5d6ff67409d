//! Profile Parser: best-effort metadata from a search listing's title and snippet.
//!
//! Pure and total: every input yields a record, with empty fields (and
//! `Unknown` seniority) wherever the heuristics find nothing.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// `@Company` handle anywhere in title or snippet.
static RE_COMPANY_HANDLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\s*([^\s|•-]+)").expect("company handle regex"));
/// Title segment separator, swallowing surrounding whitespace.
static RE_TITLE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[-|•]\s*").expect("title separator regex"));

const NAME_SEPARATORS: [char; 3] = ['-', '|', '•'];
const ROLE_SEPARATOR: &str = " - ";
const MAX_KEY_SKILLS: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[default]
    Unknown,
    Junior,
    #[serde(rename = "Mid-Level")]
    MidLevel,
    Senior,
    Executive,
}

impl ExperienceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Unknown => "Unknown",
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::MidLevel => "Mid-Level",
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::Executive => "Executive",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seniority tiers, checked top to bottom; the first tier with any keyword wins.
/// "principal" sits in both Executive and Senior, so it always reads as Executive.
const EXPERIENCE_TIERS: &[(ExperienceLevel, &[&str])] = &[
    (
        ExperienceLevel::Executive,
        &["principal", "director", "vp", "head of", "chief", "c-level"],
    ),
    (
        ExperienceLevel::Senior,
        &["senior", "lead", "staff", "principal", "manager"],
    ),
    (
        ExperienceLevel::MidLevel,
        &["mid-level", "3-5 years", "4+ years", "5+ years"],
    ),
    (
        ExperienceLevel::Junior,
        &["junior", "1-2 years", "2-3 years", "entry", "graduate"],
    ),
];

const SKILL_VOCABULARY: &[&str] = &[
    "product management",
    "growth",
    "b2b",
    "b2c",
    "saas",
    "enterprise",
    "strategy",
    "analytics",
    "data",
    "customer",
    "market",
    "launch",
    "monetization",
    "pricing",
    "fundraising",
    "leadership",
    "innovation",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileMetadata {
    pub name: String,
    pub current_role: String,
    pub company: String,
    pub experience_level: ExperienceLevel,
    /// At most five unique skills. Order carries no meaning.
    pub key_skills: Vec<String>,
}

/// Extracts profile metadata from a listing's `title` and `snippet`.
pub fn extract(title: &str, snippet: &str) -> ProfileMetadata {
    // Seniority and skills scan the two strings glued together with no separator.
    let scan_text = format!("{snippet}{title}").to_lowercase();

    ProfileMetadata {
        name: extract_name(title),
        current_role: extract_role(title),
        company: extract_company(title, snippet),
        experience_level: classify_experience(&scan_text),
        key_skills: match_skills(&scan_text),
    }
}

fn extract_name(title: &str) -> String {
    title
        .split(NAME_SEPARATORS)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn extract_role(title: &str) -> String {
    match title.split_once(ROLE_SEPARATOR) {
        Some((before, _)) => before.trim().to_string(),
        None => String::new(),
    }
}

fn extract_company(title: &str, snippet: &str) -> String {
    let haystack = format!("{title} {snippet}");
    if let Some(captures) = RE_COMPANY_HANDLE.captures(&haystack) {
        return captures[1].trim().to_string();
    }

    let segments: Vec<&str> = RE_TITLE_SEPARATOR.split(title).collect();
    if segments.len() < 2 {
        return String::new();
    }
    segments
        .iter()
        .rev()
        .map(|segment| segment.trim())
        .find(|segment| !segment.is_empty())
        .unwrap_or_default()
        .to_string()
}

fn classify_experience(scan_text: &str) -> ExperienceLevel {
    EXPERIENCE_TIERS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| scan_text.contains(kw)))
        .map(|(level, _)| *level)
        .unwrap_or_default()
}

fn match_skills(scan_text: &str) -> Vec<String> {
    SKILL_VOCABULARY
        .iter()
        .filter(|skill| scan_text.contains(*skill))
        .take(MAX_KEY_SKILLS)
        .map(|skill| skill.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn skill_set(meta: &ProfileMetadata) -> HashSet<&str> {
        meta.key_skills.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_three_segment_title() {
        let meta = extract("Jane Doe - Senior PM - TechCorp", "...");
        assert_eq!(meta.name, "Jane Doe");
        // Text before the first " - ", which for LinkedIn titles is the name.
        assert_eq!(meta.current_role, "Jane Doe");
        assert_eq!(meta.company, "TechCorp");
        assert_eq!(meta.experience_level, ExperienceLevel::Senior);
    }

    #[test]
    fn test_at_handle_wins_over_trailing_segment() {
        let meta = extract("Jane Doe - Senior PM @ TechCorp", "Building things at scale");
        assert_eq!(meta.name, "Jane Doe");
        assert_eq!(meta.company, "TechCorp");
    }

    #[test]
    fn test_at_handle_found_in_snippet() {
        let meta = extract("Sam Lee - Engineer - Somewhere", "Currently @Stripe and ex-Google");
        assert_eq!(meta.company, "Stripe");
    }

    #[test]
    fn test_at_handle_stops_at_separator() {
        let meta = extract("Ana | Designer @ Figma|Remote", "");
        assert_eq!(meta.company, "Figma");
    }

    #[test]
    fn test_pipe_and_bullet_separators() {
        let meta = extract("Priya Shah | Head of Growth • Acme Inc", "");
        assert_eq!(meta.name, "Priya Shah");
        assert_eq!(meta.current_role, "");
        assert_eq!(meta.company, "Acme Inc");
        assert_eq!(meta.experience_level, ExperienceLevel::Executive);
    }

    #[test]
    fn test_trailing_empty_segment_is_skipped() {
        let meta = extract("Tom Ford - Founder - ", "");
        assert_eq!(meta.company, "Founder");
    }

    #[test]
    fn test_title_without_separator() {
        let meta = extract("Just A Name", "");
        assert_eq!(meta.name, "Just A Name");
        assert_eq!(meta.current_role, "");
        assert_eq!(meta.company, "");
    }

    #[test]
    fn test_title_starting_with_separator_has_no_name() {
        let meta = extract("- LinkedIn", "");
        assert_eq!(meta.name, "");
        assert_eq!(meta.company, "LinkedIn");
    }

    #[test]
    fn test_empty_input_yields_defaults() {
        let meta = extract("", "");
        assert_eq!(meta, ProfileMetadata::default());
        assert_eq!(meta.experience_level, ExperienceLevel::Unknown);
    }

    #[test]
    fn test_vp_without_senior_keywords_is_executive() {
        let meta = extract("Chris Park - Sales", "VP of Sales at a fintech company");
        assert_eq!(meta.experience_level, ExperienceLevel::Executive);
    }

    #[test]
    fn test_principal_reads_as_executive() {
        let meta = extract("Dana - Principal Engineer - Acme", "");
        assert_eq!(meta.experience_level, ExperienceLevel::Executive);
    }

    #[test]
    fn test_mid_level_and_junior_tiers() {
        assert_eq!(
            extract("Ravi - Analyst", "4+ years in analytics").experience_level,
            ExperienceLevel::MidLevel
        );
        assert_eq!(
            extract("Mia - Analyst", "Recent graduate, 1-2 years").experience_level,
            ExperienceLevel::Junior
        );
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let meta = extract("ALEX KIM - SENIOR ENGINEER", "");
        assert_eq!(meta.experience_level, ExperienceLevel::Senior);
    }

    #[test]
    fn test_skills_are_matched_case_insensitively() {
        let meta = extract(
            "Lee - PM",
            "B2B SaaS Product Management, Growth and Pricing",
        );
        let expected: HashSet<&str> = ["product management", "growth", "b2b", "saas", "pricing"]
            .into_iter()
            .collect();
        assert_eq!(skill_set(&meta), expected);
    }

    #[test]
    fn test_skills_capped_at_five() {
        let snippet = "growth b2b b2c saas enterprise strategy analytics data customer market";
        let meta = extract("Pat - PM", snippet);
        assert_eq!(meta.key_skills.len(), MAX_KEY_SKILLS);
        let unique: HashSet<&str> = skill_set(&meta);
        assert_eq!(unique.len(), MAX_KEY_SKILLS);
    }

    #[test]
    fn test_extract_is_deterministic() {
        let a = extract("Jane Doe - Senior PM - TechCorp", "saas growth leader");
        let b = extract("Jane Doe - Senior PM - TechCorp", "saas growth leader");
        assert_eq!(a.name, b.name);
        assert_eq!(a.company, b.company);
        assert_eq!(a.experience_level, b.experience_level);
        assert_eq!(skill_set(&a), skill_set(&b));
    }

    #[test]
    fn test_experience_level_serializes_with_hyphen() {
        assert_eq!(
            serde_json::to_string(&ExperienceLevel::MidLevel).unwrap(),
            "\"Mid-Level\""
        );
        assert_eq!(ExperienceLevel::MidLevel.to_string(), "Mid-Level");
    }
}
