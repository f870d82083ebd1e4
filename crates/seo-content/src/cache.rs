/// Redis cache for the analysis tools.
///
/// All lookups return `Option<T>`; a disabled or unreachable Redis is just a miss.
///
/// Key schema (under the `seo:v1:` namespace):
/// - `serp:{sha256(keyword)}`: JSON Vec<SerpResult>
/// - `website:{sha256(url|keyword)}`: JSON WebsiteAnalysis
/// - `density:{sha256(top_n|text)}`: JSON DensityReport
use sha2::{Digest, Sha256};

use crate::error::AppError;
use mcp_common::redis::RedisCache;
use seo_engine::density::DensityReport;
use seo_engine::model::SerpResult;
use seo_engine::website::WebsiteAnalysis;

pub const NAMESPACE: &str = "seo:v1:";

pub struct AnalysisCache {
    redis: RedisCache,
    ttl_secs: u64,
}

impl AnalysisCache {
    pub fn new(redis: RedisCache, ttl_secs: u64) -> Self {
        Self { redis, ttl_secs }
    }

    /// Ping Redis; an error means the server runs uncached.
    pub async fn check(&self) -> Result<(), AppError> {
        self.redis.ping().await?;
        Ok(())
    }

    pub fn is_enabled(&self) -> bool {
        self.redis.is_enabled()
    }

    /// Drop every cached analysis, e.g. after changing the synthesis rules.
    pub async fn clear(&self) -> bool {
        self.redis.clear().await
    }

    pub async fn get_serp(&self, keyword: &str) -> Option<Vec<SerpResult>> {
        self.redis.get_json(&serp_key(keyword)).await
    }

    pub async fn set_serp(&self, keyword: &str, results: &[SerpResult]) {
        self.redis
            .set_json(&serp_key(keyword), &results, Some(self.ttl_secs))
            .await;
    }

    pub async fn get_website(&self, url: &str, keyword: Option<&str>) -> Option<WebsiteAnalysis> {
        self.redis.get_json(&website_key(url, keyword)).await
    }

    pub async fn set_website(&self, url: &str, keyword: Option<&str>, analysis: &WebsiteAnalysis) {
        self.redis
            .set_json(&website_key(url, keyword), analysis, Some(self.ttl_secs))
            .await;
    }

    pub async fn get_density(&self, text: &str, top_n: usize) -> Option<DensityReport> {
        self.redis.get_json(&density_key(text, top_n)).await
    }

    pub async fn set_density(&self, text: &str, top_n: usize, report: &DensityReport) {
        self.redis
            .set_json(&density_key(text, top_n), report, Some(self.ttl_secs))
            .await;
    }
}

fn serp_key(keyword: &str) -> String {
    format!("serp:{}", digest(&[keyword.trim().to_lowercase().as_bytes()]))
}

/// A missing keyword shares the "general" entry for the URL.
fn website_key(url: &str, keyword: Option<&str>) -> String {
    let keyword = keyword.map(str::trim).filter(|k| !k.is_empty()).unwrap_or("general");
    format!(
        "website:{}",
        digest(&[url.trim().as_bytes(), b"|".as_slice(), keyword.to_lowercase().as_bytes()])
    )
}

fn density_key(text: &str, top_n: usize) -> String {
    format!(
        "density:{}",
        digest(&[top_n.to_string().as_bytes(), b"|".as_slice(), text.as_bytes()])
    )
}

fn digest(parts: &[&[u8]]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    format!("{:x}", hasher.finalize())
}
