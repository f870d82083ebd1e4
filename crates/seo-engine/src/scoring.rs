//! Heuristic on-page SEO scoring.
//!
//! Five independent sub-scores are computed from plain string checks and summed into
//! a single 0-100 score. Empty strings are valid input and score zero on every check
//! that depends on them.

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{word_count, Entity, Priority};

pub const MAX_SCORE: u32 = 100;

const TITLE_LENGTH: (usize, usize) = (30, 60);
const META_LENGTH: (usize, usize) = (120, 160);
const MIN_WORDS: usize = 800;
const DENSITY_RANGE: (f64, f64) = (0.5, 3.0);
const EXACT_MATCH_RANGE: (usize, usize) = (3, 8);
const KEYWORD_POSITION_LIMIT: usize = 10;
const LEAD_CHARS: usize = 200;
const MIN_PARAGRAPHS: usize = 5;
const ENTITY_POINTS: u32 = 2;
const ENTITY_CAP: u32 = 15;

const COMPELLING_WORDS: &[&str] = &[
    "discover",
    "learn",
    "master",
    "expert",
    "proven",
    "complete",
    "ultimate",
    "essential",
    "comprehensive",
    "exclusive",
];

/// Everything the scorer looks at.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ScoreInput {
    pub title: String,
    pub meta_description: String,
    /// Markdown body
    pub content: String,
    pub target_keyword: String,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SeoReport {
    /// Sum of the sub-scores, capped at 100
    pub score: u32,
    pub subscores: SubScores,
    pub recommendations: Vec<Recommendation>,
    pub analysis: SeoAnalysis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SubScores {
    pub title: u32,
    pub meta: u32,
    pub content: u32,
    pub structure: u32,
    pub keyword: u32,
}

impl SubScores {
    pub fn total(&self) -> u32 {
        (self.title + self.meta + self.content + self.structure + self.keyword).min(MAX_SCORE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SeoAnalysis {
    pub title: TitleAnalysis,
    pub meta: MetaAnalysis,
    pub content: ContentAnalysis,
    pub structure: StructureAnalysis,
    pub keyword: KeywordAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TitleAnalysis {
    pub has_keyword: bool,
    /// Length in characters
    pub length: usize,
    pub is_optimal_length: bool,
    /// Character offset of the first keyword match
    pub keyword_position: Option<usize>,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MetaAnalysis {
    pub has_keyword: bool,
    pub length: usize,
    pub is_optimal_length: bool,
    pub is_compelling: bool,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ContentAnalysis {
    pub word_count: usize,
    /// Keyword occurrences per 100 words, rounded to two decimals
    pub keyword_density: f64,
    pub entities_found: usize,
    /// Share of the supplied entities present in the content (0 when none supplied)
    pub entity_coverage: f64,
    pub has_adequate_length: bool,
    pub has_optimal_keyword_density: bool,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StructureAnalysis {
    pub has_h1: bool,
    pub has_h2: bool,
    pub has_h3: bool,
    pub has_lists: bool,
    pub has_bold_text: bool,
    pub paragraph_count: usize,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordAnalysis {
    pub exact_matches: usize,
    pub partial_matches: usize,
    pub in_headings: bool,
    pub in_first_paragraph: bool,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Title,
    Meta,
    Content,
    Structure,
    Keyword,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub message: String,
}

/// Score a piece of content against its target keyword.
pub fn score_content(input: &ScoreInput) -> SeoReport {
    let keyword = normalize_keyword(&input.target_keyword);
    let keyword = keyword.as_deref();

    let analysis = SeoAnalysis {
        title: analyze_title(&input.title, keyword),
        meta: analyze_meta(&input.meta_description, keyword),
        content: analyze_content(&input.content, keyword, &input.entities),
        structure: analyze_structure(&input.content),
        keyword: analyze_keyword_usage(&input.content, keyword),
    };

    let subscores = SubScores {
        title: analysis.title.score,
        meta: analysis.meta.score,
        content: analysis.content.score,
        structure: analysis.structure.score,
        keyword: analysis.keyword.score,
    };

    SeoReport {
        score: subscores.total(),
        subscores,
        recommendations: recommendations(&analysis, input.target_keyword.trim()),
        analysis,
    }
}

/// Lowercased, trimmed keyword; `None` when blank so that it never matches.
fn normalize_keyword(keyword: &str) -> Option<String> {
    let trimmed = keyword.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

fn analyze_title(title: &str, keyword: Option<&str>) -> TitleAnalysis {
    let lower = title.to_lowercase();
    let length = title.chars().count();
    let keyword_position = keyword.and_then(|k| char_position(&lower, k));
    let has_keyword = keyword_position.is_some();
    let is_optimal_length = in_range(length, TITLE_LENGTH);

    let mut score = 0;
    if has_keyword {
        score += 15;
    }
    if is_optimal_length {
        score += 10;
    }
    if keyword_position.is_some_and(|p| p <= KEYWORD_POSITION_LIMIT) {
        score += 5;
    }

    TitleAnalysis {
        has_keyword,
        length,
        is_optimal_length,
        keyword_position,
        score,
    }
}

fn analyze_meta(meta: &str, keyword: Option<&str>) -> MetaAnalysis {
    let lower = meta.to_lowercase();
    let length = meta.chars().count();
    let has_keyword = keyword.is_some_and(|k| lower.contains(k));
    let is_optimal_length = in_range(length, META_LENGTH);
    let is_compelling = COMPELLING_WORDS.iter().any(|w| lower.contains(w));

    let mut score = 0;
    if has_keyword {
        score += 10;
    }
    if is_optimal_length {
        score += 8;
    }
    if is_compelling {
        score += 7;
    }

    MetaAnalysis {
        has_keyword,
        length,
        is_optimal_length,
        is_compelling,
        score,
    }
}

fn analyze_content(content: &str, keyword: Option<&str>, entities: &[Entity]) -> ContentAnalysis {
    let lower = content.to_lowercase();
    let words = word_count(content);
    let keyword_density = keyword.map_or(0.0, |k| keyword_density(&lower, k, words));

    let entities_found = entities
        .iter()
        .filter(|e| {
            let name = e.name.trim().to_lowercase();
            !name.is_empty() && lower.contains(&name)
        })
        .count();
    let entity_coverage = if entities.is_empty() {
        0.0
    } else {
        round2(entities_found as f64 / entities.len() as f64 * 100.0)
    };

    let has_adequate_length = words >= MIN_WORDS;
    let has_optimal_keyword_density =
        keyword_density >= DENSITY_RANGE.0 && keyword_density <= DENSITY_RANGE.1;

    let mut score = 0;
    if has_adequate_length {
        score += 15;
    }
    if has_optimal_keyword_density {
        score += 10;
    }
    score += (entities_found as u32).saturating_mul(ENTITY_POINTS).min(ENTITY_CAP);

    ContentAnalysis {
        word_count: words,
        keyword_density,
        entities_found,
        entity_coverage,
        has_adequate_length,
        has_optimal_keyword_density,
        score,
    }
}

fn analyze_structure(content: &str) -> StructureAnalysis {
    let h2_re = Regex::new(r"(?m)^##\s").expect("valid regex");
    let h3_re = Regex::new(r"(?m)^###\s").expect("valid regex");
    let list_re = Regex::new(r"(?m)^[-*]\s").expect("valid regex");
    let bold_re = Regex::new(r"\*\*.*?\*\*").expect("valid regex");

    let has_h1 = {
        let mut chars = content.trim().chars();
        chars.next() == Some('#') && chars.next().is_some_and(char::is_whitespace)
    };
    let paragraph_count = paragraph_count(content);

    let analysis = StructureAnalysis {
        has_h1,
        has_h2: h2_re.is_match(content),
        has_h3: h3_re.is_match(content),
        has_lists: list_re.is_match(content),
        has_bold_text: bold_re.is_match(content),
        paragraph_count,
        score: 0,
    };

    let mut score = 0;
    if analysis.has_h1 {
        score += 5;
    }
    if analysis.has_h2 {
        score += 8;
    }
    if analysis.has_h3 {
        score += 5;
    }
    if analysis.has_lists {
        score += 5;
    }
    if analysis.has_bold_text {
        score += 2;
    }
    if paragraph_count >= MIN_PARAGRAPHS {
        score += 5;
    }

    StructureAnalysis { score, ..analysis }
}

fn analyze_keyword_usage(content: &str, keyword: Option<&str>) -> KeywordAnalysis {
    let Some(keyword) = keyword else {
        return KeywordAnalysis {
            exact_matches: 0,
            partial_matches: 0,
            in_headings: false,
            in_first_paragraph: false,
            score: 0,
        };
    };

    let lower = content.to_lowercase();
    let exact_matches = lower.matches(keyword).count();
    let partial_matches = keyword
        .split_whitespace()
        .map(|word| {
            Regex::new(&format!(r"\b{}\b", regex::escape(word)))
                .map(|re| re.find_iter(&lower).count())
                .unwrap_or(0)
        })
        .sum();
    let in_headings = lower.lines().any(|line| heading_contains(line, keyword));
    let lead: String = lower.chars().take(LEAD_CHARS).collect();
    let in_first_paragraph = lead.contains(keyword);

    let mut score = 0;
    if in_range(exact_matches, EXACT_MATCH_RANGE) {
        score += 10;
    }
    if in_headings {
        score += 5;
    }
    if in_first_paragraph {
        score += 5;
    }

    KeywordAnalysis {
        exact_matches,
        partial_matches,
        in_headings,
        in_first_paragraph,
        score,
    }
}

fn recommendations(analysis: &SeoAnalysis, keyword: &str) -> Vec<Recommendation> {
    let mut out = Vec::new();
    let mut push = |kind, priority, message: String| {
        out.push(Recommendation {
            kind,
            priority,
            message,
        })
    };

    if !analysis.title.has_keyword {
        push(
            RecommendationKind::Title,
            Priority::High,
            format!("Include \"{keyword}\" in your page title for better relevance."),
        );
    }
    if !analysis.title.is_optimal_length {
        push(
            RecommendationKind::Title,
            Priority::Medium,
            format!(
                "Optimize title length to 30-60 characters (currently {}).",
                analysis.title.length
            ),
        );
    }
    if !analysis.meta.has_keyword {
        push(
            RecommendationKind::Meta,
            Priority::High,
            format!("Include \"{keyword}\" in your meta description."),
        );
    }
    if !analysis.meta.is_optimal_length {
        push(
            RecommendationKind::Meta,
            Priority::Low,
            format!(
                "Keep the meta description between 120-160 characters (currently {}).",
                analysis.meta.length
            ),
        );
    }
    if !analysis.content.has_adequate_length {
        push(
            RecommendationKind::Content,
            Priority::High,
            format!(
                "Increase content length to at least 800 words (currently {}).",
                analysis.content.word_count
            ),
        );
    }
    if !analysis.content.has_optimal_keyword_density {
        push(
            RecommendationKind::Content,
            Priority::Medium,
            format!(
                "Optimize keyword density to 0.5-3.0% (currently {:.2}%).",
                analysis.content.keyword_density
            ),
        );
    }
    if !analysis.structure.has_h2 {
        push(
            RecommendationKind::Structure,
            Priority::Medium,
            "Add H2 headings to improve content structure and readability.".to_string(),
        );
    }
    if !analysis.keyword.in_first_paragraph {
        push(
            RecommendationKind::Keyword,
            Priority::Low,
            format!("Mention \"{keyword}\" within the first 200 characters."),
        );
    }

    out
}

/// Percentage of whitespace tokens that contain the keyword with its inner
/// whitespace removed. `lower` must already be lowercased.
pub fn keyword_density(lower: &str, keyword: &str, words: usize) -> f64 {
    let needle: String = keyword.split_whitespace().collect();
    if words == 0 || needle.is_empty() {
        return 0.0;
    }
    let hits = lower
        .split_whitespace()
        .filter(|token| token.contains(needle.as_str()))
        .count();
    round2(hits as f64 / words as f64 * 100.0)
}

/// Blank-line separated blocks that contain any text.
fn paragraph_count(content: &str) -> usize {
    let separator = Regex::new(r"\n\s*\n").expect("valid regex");
    separator
        .split(content)
        .filter(|block| !block.trim().is_empty())
        .count()
}

/// `#`, `##` or `###` heading line whose text contains `keyword`.
fn heading_contains(line: &str, keyword: &str) -> bool {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if !(1..=3).contains(&hashes) {
        return false;
    }
    let rest = &line[hashes..];
    rest.chars().next().is_some_and(char::is_whitespace) && rest.contains(keyword)
}

fn char_position(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte_idx| haystack[..byte_idx].chars().count())
}

fn in_range(value: usize, (lo, hi): (usize, usize)) -> bool {
    value >= lo && value <= hi
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, meta: &str, content: &str, keyword: &str) -> ScoreInput {
        ScoreInput {
            title: title.to_string(),
            meta_description: meta.to_string(),
            content: content.to_string(),
            target_keyword: keyword.to_string(),
            entities: Vec::new(),
        }
    }

    /// `total` words, `hits` of which are the keyword.
    fn body_with(keyword: &str, hits: usize, total: usize) -> String {
        let mut words = vec![keyword; hits];
        words.extend(std::iter::repeat("lorem").take(total - hits));
        words.join(" ")
    }

    #[test]
    fn short_title_gets_keyword_bonus_but_not_length_bonus() {
        let report = score_content(&input("SEO Guide", "", "", "SEO"));
        let title = &report.analysis.title;
        assert!(title.has_keyword);
        assert_eq!(title.length, 9);
        assert!(!title.is_optimal_length);
        assert_eq!(title.keyword_position, Some(0));
        assert_eq!(report.subscores.title, 20);
    }

    #[test]
    fn title_keyword_late_in_title_misses_position_bonus() {
        let report = score_content(&input(
            "A practical introduction to modern rust tooling",
            "",
            "",
            "rust",
        ));
        assert!(report.analysis.title.is_optimal_length);
        assert_eq!(report.analysis.title.keyword_position, Some(35));
        assert_eq!(report.subscores.title, 25);
    }

    #[test]
    fn missing_keyword_never_earns_position_bonus() {
        let report = score_content(&input("Nothing relevant here", "", "", "rust"));
        assert_eq!(report.analysis.title.keyword_position, None);
        assert_eq!(report.subscores.title, 0);
    }

    #[test]
    fn meta_description_scoring() {
        let meta = "Discover how rust helps teams ship reliable services faster, with \
                    practical examples, benchmarks and a migration checklist you can use.";
        assert!(in_range(meta.chars().count(), META_LENGTH));
        let report = score_content(&input("", meta, "", "rust"));
        assert!(report.analysis.meta.is_compelling);
        assert_eq!(report.subscores.meta, 25);

        let report = score_content(&input("", "plain text", "", "rust"));
        assert_eq!(report.subscores.meta, 0);
    }

    #[test]
    fn long_content_with_good_density_gets_both_bonuses() {
        // 10 hits in 1000 words = 1.0%
        let content = body_with("seo", 10, 1000);
        let report = score_content(&input("", "", &content, "seo"));
        let analysis = &report.analysis.content;
        assert_eq!(analysis.word_count, 1000);
        assert_eq!(analysis.keyword_density, 1.0);
        assert!(analysis.has_adequate_length);
        assert!(analysis.has_optimal_keyword_density);
        assert_eq!(report.subscores.content, 25);
    }

    #[test]
    fn keyword_stuffing_loses_density_bonus() {
        let content = body_with("seo", 100, 900);
        let report = score_content(&input("", "", &content, "seo"));
        assert!(report.analysis.content.keyword_density > 3.0);
        assert_eq!(report.subscores.content, 15);
    }

    #[test]
    fn entity_bonus_is_capped() {
        let names = [
            "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india",
            "juliet",
        ];
        let mut data = input("", "", &names.join(" "), "zulu");
        data.entities = names.iter().map(|n| Entity::new(*n, 1)).collect();
        data.entities.push(Entity::new("missing", 1));

        let report = score_content(&data);
        assert_eq!(report.analysis.content.entities_found, 10);
        assert_eq!(report.subscores.content, ENTITY_CAP);
        assert_eq!(report.analysis.content.entity_coverage, 90.91);
    }

    #[test]
    fn structure_markers() {
        let content = "# Title\n\nIntro **bold** text.\n\n## Section\n\n### Sub\n\n- item\n- item\n\nEnd.";
        let report = score_content(&input("", "", content, ""));
        let s = &report.analysis.structure;
        assert!(s.has_h1 && s.has_h2 && s.has_h3 && s.has_lists && s.has_bold_text);
        assert_eq!(s.paragraph_count, 6);
        assert_eq!(report.subscores.structure, 30);
    }

    #[test]
    fn h3_line_is_not_an_h2() {
        let report = score_content(&input("", "", "### only a sub heading", ""));
        assert!(!report.analysis.structure.has_h2);
        assert!(report.analysis.structure.has_h3);
        assert!(!report.analysis.structure.has_h1);
    }

    #[test]
    fn keyword_usage_scoring() {
        let content = "## Rust in production\n\nRust is fast. Teams pick rust for safety. rust!";
        let report = score_content(&input("", "", content, "Rust"));
        let k = &report.analysis.keyword;
        assert_eq!(k.exact_matches, 4);
        assert_eq!(k.partial_matches, 4);
        assert!(k.in_headings);
        assert!(k.in_first_paragraph);
        assert_eq!(report.subscores.keyword, 20);
    }

    #[test]
    fn keyword_only_in_h4_is_not_a_heading_match() {
        let report = score_content(&input("", "", "#### rust notes", "rust"));
        assert!(!report.analysis.keyword.in_headings);
    }

    #[test]
    fn empty_content_and_keyword_are_safe() {
        let report = score_content(&input("", "", "", ""));
        assert_eq!(report.analysis.content.keyword_density, 0.0);
        assert!(!report.analysis.content.keyword_density.is_nan());
        assert_eq!(report.analysis.content.entity_coverage, 0.0);
        assert_eq!(report.score, 0);

        let report = score_content(&input("", "", "", "x"));
        assert_eq!(report.analysis.content.word_count, 0);
        assert_eq!(report.score, 0);
    }

    #[test]
    fn blank_keyword_matches_nothing() {
        let report = score_content(&input("Some title", "Some meta", "Some content", "   "));
        assert!(!report.analysis.title.has_keyword);
        assert!(!report.analysis.meta.has_keyword);
        assert_eq!(report.analysis.keyword.exact_matches, 0);
    }

    #[test]
    fn total_is_capped_at_one_hundred() {
        let mut content = String::from("# seo handbook\n\nseo basics with **bold** text.\n\n");
        content.push_str("## seo section\n\n### detail\n\n- item\n\n");
        content.push_str(&body_with("seo", 4, 900));
        let meta = "Discover the complete seo playbook: audits, keyword research, content \
                    structure and link building, explained with real examples for teams.";
        let mut data = input("seo: the complete guide to ranking", meta, &content, "seo");
        data.entities = vec![Entity::new("basics", 3), Entity::new("handbook", 2)];

        let report = score_content(&data);
        let raw = report.subscores.title
            + report.subscores.meta
            + report.subscores.content
            + report.subscores.structure
            + report.subscores.keyword;
        assert!(raw > MAX_SCORE, "raw sum {raw} should exceed the cap");
        assert_eq!(report.score, MAX_SCORE);
    }

    #[test]
    fn scoring_is_idempotent() {
        let data = input("Rust guide for teams", "Learn rust", "# Rust\n\nrust rust rust", "rust");
        assert_eq!(score_content(&data), score_content(&data));
    }

    #[test]
    fn recommendations_follow_failed_checks() {
        let report = score_content(&input("SEO Guide", "", "short text", "SEO"));
        let messages: Vec<&str> = report
            .recommendations
            .iter()
            .map(|r| r.message.as_str())
            .collect();
        assert!(!messages.iter().any(|m| m.contains("in your page title")));
        assert!(messages.contains(&"Optimize title length to 30-60 characters (currently 9)."));
        assert!(messages.contains(&"Include \"SEO\" in your meta description."));
        assert!(messages.contains(&"Increase content length to at least 800 words (currently 2)."));
        assert!(messages.contains(&"Add H2 headings to improve content structure and readability."));
        assert_eq!(report.recommendations[0].kind, RecommendationKind::Title);
        assert_eq!(report.recommendations[0].priority, Priority::Medium);
    }

    #[test]
    fn every_failed_check_yields_its_recommendation_in_order() {
        // keyword only after the first 200 characters, 10 of 110 words
        let content = format!("{} {}", ["lorem"; 100].join(" "), ["seo"; 10].join(" "));
        let report = score_content(&input("Guide", "", &content, "SEO"));
        assert_eq!(report.analysis.content.keyword_density, 9.09);

        let rec = |kind, priority, message: &str| Recommendation {
            kind,
            priority,
            message: message.to_string(),
        };
        assert_eq!(
            report.recommendations,
            vec![
                rec(
                    RecommendationKind::Title,
                    Priority::High,
                    "Include \"SEO\" in your page title for better relevance."
                ),
                rec(
                    RecommendationKind::Title,
                    Priority::Medium,
                    "Optimize title length to 30-60 characters (currently 5)."
                ),
                rec(
                    RecommendationKind::Meta,
                    Priority::High,
                    "Include \"SEO\" in your meta description."
                ),
                rec(
                    RecommendationKind::Meta,
                    Priority::Low,
                    "Keep the meta description between 120-160 characters (currently 0)."
                ),
                rec(
                    RecommendationKind::Content,
                    Priority::High,
                    "Increase content length to at least 800 words (currently 110)."
                ),
                rec(
                    RecommendationKind::Content,
                    Priority::Medium,
                    "Optimize keyword density to 0.5-3.0% (currently 9.09%)."
                ),
                rec(
                    RecommendationKind::Structure,
                    Priority::Medium,
                    "Add H2 headings to improve content structure and readability."
                ),
                rec(
                    RecommendationKind::Keyword,
                    Priority::Low,
                    "Mention \"SEO\" within the first 200 characters."
                ),
            ]
        );
    }

    #[test]
    fn fully_optimized_content_has_no_recommendations() {
        let meta = "Discover the complete seo playbook: audits, keyword research, content \
                    structure and link building, explained with real examples for teams.";
        assert!(in_range(meta.chars().count(), META_LENGTH));
        let content = format!("## seo basics\n\n{}", body_with("seo", 10, 900));
        let title = "seo: the complete guide to ranking";
        let report = score_content(&input(title, meta, &content, "seo"));

        assert_eq!(report.analysis.content.keyword_density, 1.22);
        assert!(report.recommendations.is_empty(), "{:?}", report.recommendations);
    }

    #[test]
    fn density_helper_guards_zero_words() {
        assert_eq!(keyword_density("", "seo", 0), 0.0);
        assert_eq!(keyword_density("seo seo", "", 2), 0.0);
        assert_eq!(keyword_density("seo tips", "seo", 2), 50.0);
    }

    #[test]
    fn density_counts_tokens_not_substrings() {
        // a token repeating the keyword still counts once
        assert_eq!(keyword_density("seoseo lorem", "seo", 2), 50.0);
        assert_eq!(keyword_density("seo, seo. lorem ipsum", "seo", 4), 50.0);
    }

    #[test]
    fn multi_word_keyword_density_matches_joined_tokens() {
        let joined = "contentmarketing a b c d e f g h i";
        assert_eq!(keyword_density(joined, "content marketing", 10), 10.0);

        let split = "content marketing a b c d e f g h";
        assert_eq!(keyword_density(split, "content marketing", 10), 0.0);

        let content = body_with("content marketing", 10, 1000);
        let report = score_content(&input("", "", &content, "Content Marketing"));
        assert_eq!(report.analysis.content.keyword_density, 0.0);
        assert!(!report.analysis.content.has_optimal_keyword_density);
    }
}
