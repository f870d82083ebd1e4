//! Portfolio-level aggregates across projects.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{Project, ProjectStatus};

/// Projects scoring below this are flagged as improvement opportunities.
pub const IMPROVEMENT_THRESHOLD: u32 = 70;
const LABEL_CHARS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Neutral,
    Down,
}

impl Trend {
    pub fn for_score(score: u32) -> Self {
        match score {
            75.. => Self::Up,
            50..=74 => Self::Neutral,
            _ => Self::Down,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PortfolioReport {
    pub total_projects: usize,
    pub active_projects: usize,
    pub total_content: usize,
    pub average_seo_score: u32,
    pub trend: Trend,
    pub top_performer: Option<ProjectScore>,
    pub improvement_opportunities: usize,
    /// Project count per business type, sorted by business type
    pub business_types: Vec<BusinessTypeCount>,
    /// One point per project, in input order
    pub scores: Vec<ProjectScore>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectScore {
    pub project_id: u64,
    /// Target keyword, shortened for chart labels
    pub label: String,
    pub business_type: String,
    pub seo_score: u32,
    pub content_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BusinessTypeCount {
    pub business_type: String,
    pub projects: usize,
}

pub fn summarize(projects: &[Project], total_content: usize) -> PortfolioReport {
    let average_seo_score = if projects.is_empty() {
        0
    } else {
        let sum: u64 = projects.iter().map(|p| u64::from(p.seo_score)).sum();
        (sum as f64 / projects.len() as f64).round() as u32
    };

    // first project wins ties
    let top_performer = projects
        .iter()
        .fold(None::<&Project>, |best, p| match best {
            Some(b) if b.seo_score >= p.seo_score => Some(b),
            _ => Some(p),
        })
        .map(project_score);

    let mut by_type: BTreeMap<&str, usize> = BTreeMap::new();
    for p in projects {
        *by_type.entry(p.business_type.as_str()).or_insert(0) += 1;
    }

    PortfolioReport {
        total_projects: projects.len(),
        active_projects: projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Active)
            .count(),
        total_content,
        average_seo_score,
        trend: Trend::for_score(average_seo_score),
        top_performer,
        improvement_opportunities: projects
            .iter()
            .filter(|p| p.seo_score < IMPROVEMENT_THRESHOLD)
            .count(),
        business_types: by_type
            .into_iter()
            .map(|(business_type, projects)| BusinessTypeCount {
                business_type: business_type.to_string(),
                projects,
            })
            .collect(),
        scores: projects.iter().map(project_score).collect(),
    }
}

fn project_score(p: &Project) -> ProjectScore {
    ProjectScore {
        project_id: p.id,
        label: chart_label(&p.target_keyword),
        business_type: p.business_type.clone(),
        seo_score: p.seo_score,
        content_count: p.content_count,
    }
}

fn chart_label(keyword: &str) -> String {
    if keyword.chars().count() > LABEL_CHARS {
        format!("{}...", keyword.chars().take(LABEL_CHARS).collect::<String>())
    } else {
        keyword.to_string()
    }
}
