/// In-memory project and content registry.
///
/// Lives behind the server's `RwLock`; nothing here is persisted across restarts.
use std::collections::BTreeMap;

use chrono::Utc;

use crate::error::AppError;
use seo_engine::error::EngineError;
use seo_engine::model::{
    word_count, Content, ContentStatus, FaqItem, Language, Project, ProjectStatus, Tone,
};
use seo_engine::scoring::MAX_SCORE;
use seo_engine::website::validate_url;

#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub business_type: String,
    pub website_url: String,
    pub target_keyword: String,
    pub name: Option<String>,
    pub location: Option<String>,
    pub language: Language,
    pub tone: Tone,
    pub additional_info: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewContent {
    pub project_id: u64,
    pub title: String,
    pub meta_description: String,
    pub body: String,
    pub faq: Vec<FaqItem>,
    pub entities: Vec<String>,
    pub seo_score: u32,
    pub status: Option<ContentStatus>,
}

/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ContentUpdate {
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub body: Option<String>,
    pub faq: Option<Vec<FaqItem>>,
    pub status: Option<ContentStatus>,
}

#[derive(Debug)]
pub struct Registry {
    projects: BTreeMap<u64, Project>,
    contents: BTreeMap<u64, Content>,
    next_project_id: u64,
    next_content_id: u64,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            projects: BTreeMap::new(),
            contents: BTreeMap::new(),
            next_project_id: 1,
            next_content_id: 1,
        }
    }

    pub fn create_project(&mut self, new: NewProject) -> Result<Project, AppError> {
        let target_keyword = new.target_keyword.trim().to_string();
        if target_keyword.is_empty() {
            return Err(EngineError::EmptyKeyword.into());
        }
        let business_type = new.business_type.trim().to_string();
        if business_type.is_empty() {
            return Err(EngineError::MissingField("business_type").into());
        }
        let website_url = validate_url(&new.website_url)?;

        let id = self.next_project_id;
        self.next_project_id += 1;

        let project = Project {
            id,
            name: non_blank(new.name).unwrap_or_else(|| target_keyword.clone()),
            business_type,
            website_url: website_url.to_string(),
            target_keyword,
            location: non_blank(new.location),
            language: new.language,
            tone: new.tone,
            additional_info: non_blank(new.additional_info),
            status: ProjectStatus::Active,
            seo_score: 0,
            content_count: 0,
            created_at: Utc::now(),
        };
        self.projects.insert(id, project.clone());
        Ok(project)
    }

    /// Newest first.
    pub fn list_projects(&self) -> Vec<Project> {
        self.projects.values().rev().cloned().collect()
    }

    pub fn get_project(&self, id: u64) -> Result<&Project, AppError> {
        self.projects
            .get(&id)
            .ok_or_else(|| AppError::project_not_found(id))
    }

    pub fn update_project(
        &mut self,
        id: u64,
        seo_score: Option<u32>,
        status: Option<ProjectStatus>,
    ) -> Result<Project, AppError> {
        let project = self
            .projects
            .get_mut(&id)
            .ok_or_else(|| AppError::project_not_found(id))?;
        if let Some(score) = seo_score {
            project.seo_score = score.min(MAX_SCORE);
        }
        if let Some(status) = status {
            project.status = status;
        }
        Ok(project.clone())
    }

    /// Content of the project is left in place.
    pub fn delete_project(&mut self, id: u64) -> Result<(), AppError> {
        self.projects
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::project_not_found(id))
    }

    /// Store content; the owning project, if it exists, takes over its score and
    /// counts one more piece of content.
    pub fn create_content(&mut self, new: NewContent) -> Content {
        let id = self.next_content_id;
        self.next_content_id += 1;

        let now = Utc::now();
        let seo_score = new.seo_score.min(MAX_SCORE);
        let content = Content {
            id,
            project_id: new.project_id,
            word_count: word_count(&new.body),
            title: new.title,
            meta_description: new.meta_description,
            body: new.body,
            faq: new.faq,
            seo_score,
            entities: new.entities,
            status: new.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        if let Some(project) = self.projects.get_mut(&new.project_id) {
            project.content_count += 1;
            project.seo_score = seo_score;
        }
        self.contents.insert(id, content.clone());
        content
    }

    /// Newest first, optionally restricted to one project.
    pub fn list_content(&self, project_id: Option<u64>) -> Vec<Content> {
        self.contents
            .values()
            .rev()
            .filter(|c| project_id.map_or(true, |id| c.project_id == id))
            .cloned()
            .collect()
    }

    pub fn content_count(&self) -> usize {
        self.contents.len()
    }

    pub fn get_content(&self, id: u64) -> Result<&Content, AppError> {
        self.contents
            .get(&id)
            .ok_or_else(|| AppError::content_not_found(id))
    }

    pub fn update_content(&mut self, id: u64, update: ContentUpdate) -> Result<Content, AppError> {
        let content = self
            .contents
            .get_mut(&id)
            .ok_or_else(|| AppError::content_not_found(id))?;

        if let Some(title) = update.title {
            content.title = title;
        }
        if let Some(meta) = update.meta_description {
            content.meta_description = meta;
        }
        if let Some(body) = update.body {
            content.word_count = word_count(&body);
            content.body = body;
        }
        if let Some(faq) = update.faq {
            content.faq = faq;
        }
        if let Some(status) = update.status {
            content.status = status;
        }
        content.updated_at = Utc::now();
        Ok(content.clone())
    }

    pub fn set_content_score(&mut self, id: u64, score: u32) -> Result<Content, AppError> {
        let content = self
            .contents
            .get_mut(&id)
            .ok_or_else(|| AppError::content_not_found(id))?;
        content.seo_score = score.min(MAX_SCORE);
        Ok(content.clone())
    }

    pub fn delete_content(&mut self, id: u64) -> Result<(), AppError> {
        let content = self
            .contents
            .remove(&id)
            .ok_or_else(|| AppError::content_not_found(id))?;
        if let Some(project) = self.projects.get_mut(&content.project_id) {
            project.content_count = project.content_count.saturating_sub(1);
        }
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
