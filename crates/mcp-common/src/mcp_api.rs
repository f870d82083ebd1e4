use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use seo_engine::generator::GeneratedArticle;
use seo_engine::model::{
    Content, ContentStatus, Entity, FaqItem, Language, Project, ProjectStatus, SerpResult, Tone,
};
use seo_engine::scoring::SeoReport;
use seo_engine::website::WebsiteAnalysis;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ScoreContentParams {
    pub title: String,
    pub meta_description: String,
    /// Markdown body to score.
    pub content: String,
    /// Keyword to score against. Falls back to the project's keyword when omitted.
    pub target_keyword: Option<String>,
    /// Project whose keyword to use when `target_keyword` is omitted.
    pub project_id: Option<u64>,
    /// Entities expected in the content, typically from `analyze_serp`.
    pub entities: Option<Vec<Entity>>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GenerateArticleParams {
    /// Project to take keyword, business type, location and tone from.
    pub project_id: Option<u64>,
    /// Overrides the project's keyword; required without a project.
    pub target_keyword: Option<String>,
    /// Overrides the project's business type; required without a project.
    pub business_type: Option<String>,
    pub location: Option<String>,
    pub tone: Option<Tone>,
    /// Entities to weave into the applications section.
    pub entities: Option<Vec<Entity>>,
    /// Year used in headings (default: current year).
    pub year: Option<i32>,
    /// Save the article as draft content of `project_id` (default: false).
    pub save: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct KeywordDensityParams {
    /// Text to analyze.
    pub text: String,
    /// Maximum number of words to return (default: 50, max: 200).
    pub top_n: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AnalyzeSerpParams {
    /// Search phrase to synthesize a results page for.
    pub keyword: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AnalyzeWebsiteParams {
    /// Absolute http(s) URL.
    pub url: String,
    /// Keyword to evaluate the site against; guessed from the domain when omitted.
    pub keyword: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateProjectParams {
    pub business_type: String,
    /// Absolute http(s) URL of the site.
    pub website_url: String,
    pub target_keyword: String,
    /// Display name (default: the target keyword).
    pub name: Option<String>,
    pub location: Option<String>,
    pub language: Option<Language>,
    pub tone: Option<Tone>,
    pub additional_info: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ProjectIdParams {
    pub project_id: u64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateProjectParams {
    pub project_id: u64,
    /// New SEO score; values above 100 are clamped.
    pub seo_score: Option<u32>,
    pub status: Option<ProjectStatus>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SaveContentParams {
    pub project_id: u64,
    pub title: String,
    pub meta_description: String,
    /// Markdown body.
    pub body: String,
    pub faq: Option<Vec<FaqItem>>,
    /// Entity names the content was written against.
    pub entities: Option<Vec<String>>,
    pub status: Option<ContentStatus>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListContentParams {
    /// Only list content of this project.
    pub project_id: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateContentParams {
    pub content_id: u64,
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub body: Option<String>,
    pub faq: Option<Vec<FaqItem>>,
    pub status: Option<ContentStatus>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ContentIdParams {
    pub content_id: u64,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct SerpAnalysisResponse {
    pub keyword: String,
    pub results: Vec<SerpResult>,
    /// Most frequent entities across all results
    pub entities: Vec<Entity>,
    pub cached: bool,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct WebsiteAnalysisResponse {
    pub analysis: WebsiteAnalysis,
    pub cached: bool,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct GenerateArticleResponse {
    pub article: GeneratedArticle,
    pub report: SeoReport,
    /// Saved content, when `save` was requested
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ContentResponse {
    pub content: Content,
    /// Present when the owning project's keyword was known
    pub report: Option<SeoReport>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ContentListResponse {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct DeleteResponse {
    pub deleted: bool,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ClearCacheResponse {
    /// False when no Redis URL is configured
    pub enabled: bool,
    /// Every cached analysis was removed
    pub cleared: bool,
}
