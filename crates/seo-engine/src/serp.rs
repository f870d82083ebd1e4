//! Synthetic search-results pages and naive entity extraction.
//!
//! Nothing here talks to a search engine. Results are built from fixed templates with
//! an injected RNG, so a seeded [`rand::rngs::StdRng`] reproduces the same page.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use sha2::{Digest, Sha256};

use crate::error::EngineError;
use crate::model::{Entity, SerpResult};

pub const RESULTS_PER_PAGE: u32 = 10;
pub const MAX_ENTITIES: usize = 20;
const KEYWORDS_PER_RESULT: usize = 8;
const ENTITIES_PER_RESULT: usize = 12;

const RELATED_TERMS: &[&str] = &["best", "guide", "tips", "strategies", "solutions"];

const COMMON_ENTITIES: &[&str] = &[
    "strategy",
    "implementation",
    "optimization",
    "analysis",
    "planning",
    "management",
    "development",
    "performance",
    "efficiency",
    "innovation",
    "technology",
    "automation",
    "integration",
    "scalability",
    "ROI",
    "KPI",
    "metrics",
    "analytics",
    "insights",
    "trends",
];

const TITLE_TEMPLATES: &[&str] = &[
    "{kw} - Complete Guide | {site}",
    "Best {kw} Solutions for 2024 | {site}",
    "{kw}: Expert Tips & Strategies | {site}",
    "How to Master {kw} | {site}",
    "{kw} Made Simple | {site}",
    "Ultimate {kw} Resource | {site}",
    "{kw} Best Practices | {site}",
    "Professional {kw} Services | {site}",
    "{kw} for Beginners | {site}",
    "Advanced {kw} Techniques | {site}",
];

const DESCRIPTION_TEMPLATES: &[&str] = &[
    "Discover the best {kw} strategies and techniques.",
    "Learn {kw} from experts.",
    "Master {kw} with our comprehensive guide.",
    "Get started with {kw} today.",
    "Professional {kw} solutions and services.",
    "Everything you need to know about {kw}.",
    "{kw} made easy with step-by-step instructions.",
    "Transform your approach to {kw}.",
    "Unlock the power of {kw} for better results.",
    "Expert {kw} advice and best practices.",
];

const DESCRIPTION_SUFFIX: &str = "Professional services and solutions.";

/// Build a ten-result synthetic SERP for `keyword`.
pub fn synthesize_serp<R: Rng + ?Sized>(
    keyword: &str,
    rng: &mut R,
) -> Result<Vec<SerpResult>, EngineError> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(EngineError::EmptyKeyword);
    }

    let results = (1..=RESULTS_PER_PAGE)
        .map(|position| {
            let site = format!("Example Site {position}");
            let domain = format!("example{position}.com");
            SerpResult {
                position,
                title: pick_template(TITLE_TEMPLATES, rng)
                    .replace("{kw}", keyword)
                    .replace("{site}", &site),
                description: format!(
                    "{} {DESCRIPTION_SUFFIX}",
                    pick_template(DESCRIPTION_TEMPLATES, rng).replace("{kw}", keyword)
                ),
                url: format!("https://{domain}"),
                domain,
                keywords: related_keywords(keyword),
                entities: mock_entities(keyword, rng),
                authority_score: rng.gen_range(60..100),
            }
        })
        .collect();

    Ok(results)
}

/// Stable RNG seed for a keyword, so repeated analyses of one keyword agree.
pub fn seed_for_keyword(keyword: &str) -> u64 {
    let digest = Sha256::digest(keyword.trim().to_lowercase().as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

/// Up to eight search phrases related to `keyword`.
pub fn related_keywords(keyword: &str) -> Vec<String> {
    let mut keywords = vec![
        keyword.to_string(),
        format!("best {keyword}"),
        format!("{keyword} guide"),
        format!("{keyword} tips"),
        format!("how to {keyword}"),
    ];
    keywords.extend(
        keyword
            .to_lowercase()
            .split_whitespace()
            .map(|term| format!("{term} solutions")),
    );
    keywords.extend(RELATED_TERMS.iter().map(|term| format!("{term} {keyword}")));
    keywords.truncate(KEYWORDS_PER_RESULT);
    keywords
}

/// The keyword's own words followed by 5-12 common business entities, at most twelve.
pub fn mock_entities<R: Rng + ?Sized>(keyword: &str, rng: &mut R) -> Vec<String> {
    let take = rng.gen_range(5..=12);
    keyword
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .chain(COMMON_ENTITIES.iter().take(take).map(|e| e.to_string()))
        .take(ENTITIES_PER_RESULT)
        .collect()
}

/// Count entity mentions across all results and keep the twenty most frequent.
///
/// Ties keep the order in which entities were first seen.
pub fn extract_entities(results: &[SerpResult]) -> Vec<Entity> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, u32> = HashMap::new();

    for name in results.iter().flat_map(|r| r.entities.iter()) {
        let count = counts.entry(name.as_str()).or_insert_with(|| {
            order.push(name.as_str());
            0
        });
        *count += 1;
    }

    let mut entities: Vec<Entity> = order
        .into_iter()
        .map(|name| Entity::new(name, counts[name]))
        .collect();
    // stable sort keeps first-seen order among equal counts
    entities.sort_by(|a, b| b.count.cmp(&a.count));
    entities.truncate(MAX_ENTITIES);
    entities
}

fn pick_template<R: Rng + ?Sized>(templates: &[&'static str], rng: &mut R) -> &'static str {
    templates.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn builds_ten_ranked_results() {
        let mut rng = StdRng::seed_from_u64(7);
        let results = synthesize_serp("local seo", &mut rng).unwrap();

        assert_eq!(results.len(), 10);
        for (i, r) in results.iter().enumerate() {
            let position = i as u32 + 1;
            assert_eq!(r.position, position);
            assert_eq!(r.domain, format!("example{position}.com"));
            assert_eq!(r.url, format!("https://example{position}.com"));
            assert!(r.title.contains("local seo"));
            assert!(r.title.ends_with(&format!("| Example Site {position}")));
            assert!(r.description.ends_with(DESCRIPTION_SUFFIX));
            assert!((60..100).contains(&r.authority_score));
            assert_eq!(r.keywords.len(), 8);
            assert!(r.entities.len() <= 12);
            assert_eq!(&r.entities[..2], &["local".to_string(), "seo".to_string()]);
        }
    }

    #[test]
    fn same_seed_same_page() {
        let seed = seed_for_keyword("Local SEO");
        assert_eq!(seed, seed_for_keyword("  local seo "));

        let a = synthesize_serp("local seo", &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = synthesize_serp("local seo", &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_blank_keyword() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(synthesize_serp("  ", &mut rng), Err(EngineError::EmptyKeyword));
    }

    #[test]
    fn related_keywords_for_single_word() {
        assert_eq!(
            related_keywords("Plumbing"),
            vec![
                "Plumbing",
                "best Plumbing",
                "Plumbing guide",
                "Plumbing tips",
                "how to Plumbing",
                "plumbing solutions",
                "best Plumbing",
                "guide Plumbing",
            ]
        );
    }

    #[test]
    fn mock_entities_start_with_keyword_words() {
        let mut rng = StdRng::seed_from_u64(3);
        let entities = mock_entities("Cloud Cost Control", &mut rng);
        assert_eq!(&entities[..3], &["cloud", "cost", "control"]);
        assert_eq!(entities[3], "strategy");
        assert!(entities.len() >= 8 && entities.len() <= 12);
    }

    fn result_with(entities: &[&str]) -> SerpResult {
        SerpResult {
            position: 1,
            title: String::new(),
            description: String::new(),
            url: String::new(),
            domain: String::new(),
            keywords: Vec::new(),
            entities: entities.iter().map(|e| e.to_string()).collect(),
            authority_score: 70,
        }
    }

    #[test]
    fn extract_counts_and_orders_entities() {
        let results = vec![
            result_with(&["seo", "strategy", "metrics"]),
            result_with(&["seo", "analytics"]),
            result_with(&["seo", "strategy"]),
        ];
        let entities = extract_entities(&results);
        assert_eq!(
            entities,
            vec![
                Entity::new("seo", 3),
                Entity::new("strategy", 2),
                Entity::new("metrics", 1),
                Entity::new("analytics", 1),
            ]
        );
    }

    #[test]
    fn extract_keeps_top_twenty() {
        let names: Vec<String> = (0..30).map(|i| format!("entity{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let entities = extract_entities(&[result_with(&refs)]);
        assert_eq!(entities.len(), MAX_ENTITIES);
        assert_eq!(entities[0].name, "entity0");
    }

    #[test]
    fn extract_from_synthetic_page() {
        let mut rng = StdRng::seed_from_u64(seed_for_keyword("seo"));
        let results = synthesize_serp("seo", &mut rng).unwrap();
        let entities = extract_entities(&results);
        assert_eq!(entities[0], Entity::new("seo", 10));
        assert_eq!(entities[1], Entity::new("strategy", 10));
        assert!(entities.len() <= MAX_ENTITIES);
    }
}
