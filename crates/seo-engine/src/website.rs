//! Mock website audit.
//!
//! The URL-derived part of the score is deterministic; everything else (speed, link
//! counts, competitor figures) is synthetic and drawn from the caller's RNG.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::EngineError;
use crate::model::Priority;

const BASE_URL_SCORE: i32 = 50;
const MIN_URL_SCORE: i32 = 30;
const MAX_URL_SCORE: i32 = 100;

const STRIPPED_TLDS: &[&str] = &[".com", ".org", ".net", ".io", ".co", ".uk"];

const COMPETITORS: &[&str] = &["competitor1.com", "competitor2.com", "competitor3.com"];

const HEADING_VERDICTS: &[&str] = &[
    "Well structured with proper hierarchy",
    "Good structure with minor improvements needed",
    "Needs improvement in heading hierarchy",
    "Excellent heading structure and organization",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WebsiteAnalysis {
    pub url: String,
    pub domain: String,
    pub seo_score: u32,
    /// The supplied keyword, or one guessed from the domain
    pub keyword: String,
    pub metrics: SiteMetrics,
    pub technical: TechnicalSeo,
    pub content: SiteContent,
    pub competitors: Vec<Competitor>,
    pub recommendations: Vec<SiteRecommendation>,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SiteMetrics {
    pub page_speed: u32,
    pub mobile_score: u32,
    pub accessibility: u32,
    pub best_practices: u32,
    pub performance: u32,
    pub seo: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TechnicalSeo {
    pub meta_title: String,
    pub meta_description: String,
    pub headings: HeadingCounts,
    pub images: ImageStats,
    pub links: LinkStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HeadingCounts {
    pub h1: u32,
    pub h2: u32,
    pub h3: u32,
    pub h4: u32,
    pub keyword_in_h1: bool,
    pub keyword_in_h2: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ImageStats {
    pub total: u32,
    pub with_alt: u32,
    pub optimized: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LinkStats {
    pub internal: u32,
    pub external: u32,
    pub broken: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SiteContent {
    pub word_count: u32,
    pub readability_score: u32,
    /// `None` when no keyword was supplied
    pub keyword_density: Option<f64>,
    pub headings_structure: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Competitor {
    pub domain: String,
    pub seo_score: u32,
    pub estimated_traffic: u32,
    pub backlinks: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SiteRecommendation {
    pub priority: Priority,
    pub category: String,
    pub title: String,
    pub description: String,
}

/// Parse `raw` and require an http(s) scheme with a host.
pub fn validate_url(raw: &str) -> Result<Url, EngineError> {
    let url = Url::parse(raw.trim()).map_err(|_| EngineError::InvalidUrl(raw.to_string()))?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url),
        _ => Err(EngineError::InvalidUrl(raw.to_string())),
    }
}

/// URL-structure score with a caller-supplied jitter, clamped to 30-100.
pub fn url_score(url: &Url, keyword: Option<&str>, jitter: i32) -> u32 {
    let path = url.path();
    let host = url.host_str().unwrap_or_default();
    let keyword = keyword
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty());

    let mut score = BASE_URL_SCORE;
    if keyword.as_deref().is_some_and(|k| path.contains(k)) {
        score += 10;
    }
    if path.split('/').count() <= 4 {
        score += 5;
    }
    if !path.contains('_') {
        score += 5;
    }
    if keyword.as_deref().is_some_and(|k| host.contains(k)) {
        score += 15;
    }
    if url.scheme() == "https" {
        score += 10;
    }

    (score + jitter).clamp(MIN_URL_SCORE, MAX_URL_SCORE) as u32
}

/// Guess a keyword from a hostname: "best-plumbing.co" -> "best plumbing".
pub fn main_keyword_from_domain(domain: &str) -> String {
    let lower = domain.to_lowercase();
    let stem = STRIPPED_TLDS
        .iter()
        .find_map(|tld| lower.strip_suffix(tld))
        .unwrap_or(lower.as_str());

    let words: Vec<&str> = stem
        .split(|c: char| c == '-' || c == '.')
        .filter(|w| w.chars().count() > 2)
        .collect();

    if words.is_empty() {
        domain.to_string()
    } else {
        words.join(" ")
    }
}

pub fn analyze_website<R: Rng + ?Sized>(
    raw_url: &str,
    keyword: Option<&str>,
    rng: &mut R,
) -> Result<WebsiteAnalysis, EngineError> {
    let url = validate_url(raw_url)?;
    let domain = url.host_str().unwrap_or_default().to_string();
    let keyword = keyword.map(str::trim).filter(|k| !k.is_empty());
    let business = domain.split('.').next().unwrap_or_default().to_string();

    let seo_score = url_score(&url, keyword, rng.gen_range(-10..10));
    let page_speed = rng.gen_range(60..100);

    let metrics = SiteMetrics {
        page_speed,
        mobile_score: rng.gen_range(70..100),
        accessibility: rng.gen_range(80..100),
        best_practices: rng.gen_range(75..100),
        performance: page_speed,
        seo: seo_score,
    };

    let technical = TechnicalSeo {
        meta_title: meta_title(&business, keyword, rng),
        meta_description: meta_description(&business, keyword, rng),
        headings: HeadingCounts {
            h1: rng.gen_range(1..4),
            h2: rng.gen_range(2..10),
            h3: rng.gen_range(5..20),
            h4: rng.gen_range(2..12),
            keyword_in_h1: keyword.is_some() && rng.gen_bool(0.7),
            keyword_in_h2: keyword.is_some() && rng.gen_bool(0.5),
        },
        images: ImageStats {
            total: rng.gen_range(10..60),
            with_alt: rng.gen_range(20..50),
            optimized: rng.gen_range(15..40),
        },
        links: LinkStats {
            internal: rng.gen_range(20..120),
            external: rng.gen_range(5..35),
            broken: rng.gen_range(0..5),
        },
    };

    let content = SiteContent {
        word_count: rng.gen_range(500..2500),
        readability_score: rng.gen_range(70..100),
        keyword_density: keyword
            .map(|_| (rng.gen_range(0.5..3.5_f64) * 100.0).round() / 100.0),
        headings_structure: HEADING_VERDICTS
            .choose(rng)
            .copied()
            .unwrap_or_default()
            .to_string(),
    };

    let competitors = COMPETITORS
        .iter()
        .map(|c| Competitor {
            domain: c.to_string(),
            seo_score: rng.gen_range(60..100),
            estimated_traffic: rng.gen_range(10_000..60_000),
            backlinks: rng.gen_range(1_000..6_000),
        })
        .collect();

    Ok(WebsiteAnalysis {
        url: raw_url.trim().to_string(),
        keyword: keyword
            .map(str::to_string)
            .unwrap_or_else(|| main_keyword_from_domain(&domain)),
        domain,
        seo_score,
        metrics,
        technical,
        content,
        competitors,
        recommendations: site_recommendations(seo_score, keyword),
        analyzed_at: Utc::now(),
    })
}

fn meta_title<R: Rng + ?Sized>(business: &str, keyword: Option<&str>, rng: &mut R) -> String {
    let options = match keyword {
        Some(k) => [
            format!("{k} | {business} - Professional Services"),
            format!("Best {k} from {business}"),
            format!("{business} - Your {k} Partner"),
            format!("{k} Experts | {business}"),
        ],
        None => [
            format!("{business} - Professional Services"),
            format!("Best Solutions from {business}"),
            format!("{business} - Your Business Partner"),
            format!("Professional Services | {business}"),
        ],
    };
    options.choose(rng).cloned().unwrap_or_default()
}

fn meta_description<R: Rng + ?Sized>(
    business: &str,
    keyword: Option<&str>,
    rng: &mut R,
) -> String {
    let k = |fallback: &'static str| keyword.unwrap_or(fallback);
    let options = [
        format!(
            "Discover {} with {business}. Expert solutions, proven results, and exceptional \
             customer service.",
            k("professional services")
        ),
        format!(
            "{business} provides top-quality {} with a focus on innovation and customer \
             satisfaction.",
            k("services")
        ),
        format!(
            "Get the best {} from {business}. Trusted by thousands of customers worldwide.",
            k("solutions")
        ),
        format!(
            "Professional {} by {business}. Contact us today for a free consultation and quote.",
            k("services")
        ),
    ];
    options.choose(rng).cloned().unwrap_or_default()
}

fn site_recommendations(seo_score: u32, keyword: Option<&str>) -> Vec<SiteRecommendation> {
    let mut out = Vec::new();

    if seo_score < 70 {
        out.push(SiteRecommendation {
            priority: Priority::High,
            category: "Technical SEO".to_string(),
            title: "Improve page load speed".to_string(),
            description: "Optimize images and reduce server response time to improve user \
                          experience and search rankings."
                .to_string(),
        });
    }

    if let Some(k) = keyword {
        out.push(SiteRecommendation {
            priority: Priority::Medium,
            category: "Content".to_string(),
            title: format!("Optimize content for \"{k}\""),
            description: "Improve keyword density and semantic relevance in your content."
                .to_string(),
        });
    }

    out.push(SiteRecommendation {
        priority: if seo_score < 60 {
            Priority::High
        } else {
            Priority::Low
        },
        category: "Meta Tags".to_string(),
        title: "Optimize meta descriptions".to_string(),
        description: "Write compelling meta descriptions that include target keywords and \
                      encourage clicks."
            .to_string(),
    });

    out
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn validates_scheme_and_syntax() {
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url(" http://example.com/path ").is_ok());
        assert_eq!(
            validate_url("example.com"),
            Err(EngineError::InvalidUrl("example.com".to_string()))
        );
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("not a url").is_err());
        assert!(validate_url("").is_err());
    }

    #[test]
    fn invalid_url_message_is_user_facing() {
        let err = validate_url("nope").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter a valid URL (including http:// or https://)"
        );
    }

    #[test]
    fn url_score_components() {
        let url = Url::parse("https://plumbing.com/plumbing").unwrap();
        // 50 + 10 path + 5 depth + 5 no underscore + 15 host + 10 https
        assert_eq!(url_score(&url, Some("Plumbing"), 0), 95);
        assert_eq!(url_score(&url, Some("plumbing"), 9), 100);

        let url = Url::parse("http://example.com/a/b/c/d_e").unwrap();
        assert_eq!(url_score(&url, None, 0), 50);
        assert_eq!(url_score(&url, None, -30), 30);
    }

    #[test]
    fn keyword_from_domain() {
        assert_eq!(main_keyword_from_domain("best-plumbing.com"), "best plumbing");
        assert_eq!(main_keyword_from_domain("www.acme-tools.io"), "www acme tools");
        assert_eq!(main_keyword_from_domain("ab.com"), "ab.com");
    }

    #[test]
    fn analysis_shape() {
        let mut rng = StdRng::seed_from_u64(11);
        let analysis =
            analyze_website("https://green-garden.com/services", Some("garden design"), &mut rng)
                .unwrap();

        assert_eq!(analysis.domain, "green-garden.com");
        assert_eq!(analysis.keyword, "garden design");
        assert!((30..=100).contains(&analysis.seo_score));
        assert_eq!(analysis.metrics.seo, analysis.seo_score);
        assert_eq!(analysis.metrics.performance, analysis.metrics.page_speed);
        assert_eq!(analysis.competitors.len(), 3);
        assert!(analysis.technical.meta_title.contains("green-garden"));
        let density = analysis.content.keyword_density.unwrap();
        assert!((0.5..=3.5).contains(&density));
        assert!(analysis
            .recommendations
            .iter()
            .any(|r| r.title == "Optimize content for \"garden design\""));
        assert_eq!(analysis.recommendations.last().unwrap().category, "Meta Tags");
    }

    #[test]
    fn analysis_without_keyword_guesses_one() {
        let mut rng = StdRng::seed_from_u64(5);
        let analysis = analyze_website("http://sunny-bakery.co", None, &mut rng).unwrap();
        assert_eq!(analysis.keyword, "sunny bakery");
        assert_eq!(analysis.content.keyword_density, None);
        assert!(!analysis.technical.headings.keyword_in_h1);
        assert!(!analysis
            .recommendations
            .iter()
            .any(|r| r.category == "Content"));
    }

    #[test]
    fn rejects_invalid_url() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(matches!(
            analyze_website("sunny-bakery.co", None, &mut rng),
            Err(EngineError::InvalidUrl(_))
        ));
    }

    #[test]
    fn recommendation_priorities_follow_score() {
        let low = site_recommendations(55, None);
        assert_eq!(low.len(), 2);
        assert_eq!(low[0].title, "Improve page load speed");
        assert_eq!(low[1].priority, Priority::High);

        let high = site_recommendations(85, Some("seo"));
        assert_eq!(high.len(), 2);
        assert_eq!(high[0].category, "Content");
        assert_eq!(high[1].priority, Priority::Low);
    }
}
