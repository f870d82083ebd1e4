use std::fmt;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A content project built around one target keyword.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Project {
    pub id: u64,
    /// Display name; defaults to the target keyword.
    pub name: String,
    /// Free-form business type, e.g. "SaaS", "Local Business"
    pub business_type: String,
    pub website_url: String,
    pub target_keyword: String,
    pub location: Option<String>,
    pub language: Language,
    pub tone: Tone,
    pub additional_info: Option<String>,
    pub status: ProjectStatus,
    /// Last recorded SEO score (0-100)
    pub seo_score: u32,
    pub content_count: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ProjectStatus {
    #[default]
    Active,
    Paused,
    Completed,
}

impl ProjectStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tone of voice for generated copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Authority,
    Conversational,
    Technical,
    Creative,
}

impl Tone {
    /// Only `Professional` selects the formal phrasing of the article template.
    pub const fn is_formal(self) -> bool {
        matches!(self, Self::Professional)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Portuguese,
    Italian,
}

/// A generated or hand-edited article attached to a project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Content {
    pub id: u64,
    /// Owning project. Not validated against existing projects.
    pub project_id: u64,
    pub title: String,
    pub meta_description: String,
    /// Markdown body
    pub body: String,
    pub faq: Vec<FaqItem>,
    pub seo_score: u32,
    /// Entity names the content was written against
    pub entities: Vec<String>,
    pub word_count: usize,
    pub status: ContentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ContentStatus {
    #[default]
    Draft,
    Published,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// A keyword-like token and how often it appeared across SERP results.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    pub count: u32,
}

impl Entity {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// One synthetic search result.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SerpResult {
    /// 1-based rank
    pub position: u32,
    pub title: String,
    pub description: String,
    pub url: String,
    pub domain: String,
    pub keywords: Vec<String>,
    pub entities: Vec<String>,
    pub authority_score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Number of whitespace-separated tokens in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
