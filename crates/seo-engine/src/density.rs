//! Keyword density / word-cloud analysis.

use std::collections::HashMap;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const MIN_WORD_LEN: usize = 3;
const HIGH_DENSITY: f64 = 2.0;
const MEDIUM_DENSITY: f64 = 1.0;
pub const DEFAULT_TOP_N: usize = 50;

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "her", "was",
    "one", "our", "out", "has", "have", "his", "how", "its", "may", "new", "now", "old", "see",
    "two", "who", "did", "get", "let", "put", "say", "she", "too", "use", "that", "with", "this",
    "from", "they", "will", "would", "there", "their", "what", "about", "which", "when", "your",
    "were", "been", "into", "than", "then", "them", "these", "those", "some", "such", "only",
    "also", "more", "most", "other", "over", "very", "just", "each", "while", "where", "should",
    "could", "being", "both", "does", "here", "because", "through", "after", "before",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DensityCategory {
    High,
    Medium,
    Low,
}

impl DensityCategory {
    pub fn for_density(density: f64) -> Self {
        if density >= HIGH_DENSITY {
            Self::High
        } else if density >= MEDIUM_DENSITY {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordStat {
    pub word: String,
    pub count: usize,
    /// Percentage of all counted words
    pub density: f64,
    pub category: DensityCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DensityReport {
    /// Most frequent non-stop words, highest count first
    pub keywords: Vec<KeywordStat>,
    /// Alphabetic words of three or more letters, stop words included
    pub total_words: usize,
    /// Distinct non-stop words before truncation
    pub unique_words: usize,
}

pub fn analyze_keyword_density(text: &str, top_n: usize) -> DensityReport {
    let word_re = Regex::new(r"[a-z]+").expect("valid regex");
    let lower = text.to_lowercase();

    let mut total_words = 0usize;
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in word_re.find_iter(&lower).map(|m| m.as_str()) {
        if token.len() < MIN_WORD_LEN {
            continue;
        }
        total_words += 1;
        if !STOP_WORDS.contains(&token) {
            *counts.entry(token).or_insert(0) += 1;
        }
    }

    let unique_words = counts.len();
    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let keywords = ranked
        .into_iter()
        .take(top_n)
        .map(|(word, count)| {
            let density = density_percent(count, total_words);
            KeywordStat {
                word: word.to_string(),
                count,
                density,
                category: DensityCategory::for_density(density),
            }
        })
        .collect();

    DensityReport {
        keywords,
        total_words,
        unique_words,
    }
}

fn density_percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64 * 10_000.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_in_a_hundred_is_high() {
        let mut words = vec!["rust"; 3];
        words.extend(vec!["filler"; 97]);
        let report = analyze_keyword_density(&words.join(" "), 10);

        assert_eq!(report.total_words, 100);
        let rust = report.keywords.iter().find(|k| k.word == "rust").unwrap();
        assert_eq!(rust.count, 3);
        assert_eq!(rust.density, 3.0);
        assert_eq!(rust.category, DensityCategory::High);
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(DensityCategory::for_density(2.0), DensityCategory::High);
        assert_eq!(DensityCategory::for_density(1.99), DensityCategory::Medium);
        assert_eq!(DensityCategory::for_density(1.0), DensityCategory::Medium);
        assert_eq!(DensityCategory::for_density(0.99), DensityCategory::Low);
    }

    #[test]
    fn skips_short_words_digits_and_stop_words() {
        let report = analyze_keyword_density("The cat and the dog: a DOG, 42 dogs!", 10);
        // the, cat, and, the, dog, dog, dogs
        assert_eq!(report.total_words, 7);
        let words: Vec<&str> = report.keywords.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, vec!["dog", "cat", "dogs"]);
        assert_eq!(report.keywords[0].count, 2);
        assert_eq!(report.unique_words, 3);
    }

    #[test]
    fn ties_are_ordered_alphabetically_and_truncated() {
        let report = analyze_keyword_density("zeta beta alpha zeta beta alpha gamma", 2);
        let words: Vec<&str> = report.keywords.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, vec!["alpha", "beta"]);
        assert_eq!(report.unique_words, 4);
    }

    #[test]
    fn empty_text_yields_empty_report() {
        let report = analyze_keyword_density("", DEFAULT_TOP_N);
        assert_eq!(report.total_words, 0);
        assert!(report.keywords.is_empty());

        let report = analyze_keyword_density("a an to of", DEFAULT_TOP_N);
        assert_eq!(report.total_words, 0);
    }
}
