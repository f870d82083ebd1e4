/// MCP server for SEO content scoring and generation.
///
/// Stateless analysis tools (`score_content`, `generate_article`,
/// `analyze_keyword_density`, `analyze_serp`, `analyze_website`) sit next to an
/// in-memory project and content registry. Errors come back as short user-facing
/// strings.
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::AnalysisCache;
use crate::error::AppError;
use crate::store::{ContentUpdate, NewContent, NewProject, Registry};
use mcp_common::mcp_api::{
    AnalyzeSerpParams, AnalyzeWebsiteParams, ClearCacheResponse, ContentIdParams,
    ContentListResponse, ContentResponse, CreateProjectParams, DeleteResponse, GenerateArticleParams,
    GenerateArticleResponse, KeywordDensityParams, ListContentParams, ProjectIdParams,
    ProjectListResponse, SaveContentParams, ScoreContentParams, SerpAnalysisResponse,
    UpdateContentParams, UpdateProjectParams, WebsiteAnalysisResponse,
};
use seo_engine::density::{analyze_keyword_density, DensityReport, DEFAULT_TOP_N};
use seo_engine::generator::{generate_article, ArticleParams};
use seo_engine::model::{Content, Entity, Project};
use seo_engine::report::{summarize, PortfolioReport};
use seo_engine::scoring::{score_content, ScoreInput, SeoReport};
use seo_engine::serp::{extract_entities, seed_for_keyword, synthesize_serp};
use seo_engine::website::analyze_website;

const MAX_TOP_N: usize = 200;

#[derive(Clone)]
pub struct SeoContentServer {
    registry: Arc<RwLock<Registry>>,
    cache: Arc<AnalysisCache>,
    tool_router: ToolRouter<SeoContentServer>,
}

impl SeoContentServer {
    pub fn new(cache: Arc<AnalysisCache>) -> Self {
        Self {
            registry: Arc::new(RwLock::new(Registry::new())),
            cache,
            tool_router: Self::tool_router(),
        }
    }

    async fn project(&self, id: u64) -> Result<Project, String> {
        let registry = self.registry.read().await;
        registry
            .get_project(id)
            .cloned()
            .map_err(|e| e.to_string())
    }

    async fn optional_project(&self, id: Option<u64>) -> Result<Option<Project>, String> {
        match id {
            Some(id) => self.project(id).await.map(Some),
            None => Ok(None),
        }
    }

}

#[tool_router]
impl SeoContentServer {
    #[tool(description = "Score a title, meta description and markdown body for on-page SEO (0-100) with sub-scores, analysis and recommendations. Uses the project's target keyword when target_keyword is omitted.")]
    async fn score_content(
        &self,
        Parameters(params): Parameters<ScoreContentParams>,
    ) -> Result<Json<SeoReport>, String> {
        let target_keyword = match params.target_keyword {
            Some(keyword) => keyword,
            None => self
                .optional_project(params.project_id)
                .await?
                .map(|p| p.target_keyword)
                .unwrap_or_default(),
        };

        let report = score_content(&ScoreInput {
            title: params.title,
            meta_description: params.meta_description,
            content: params.content,
            target_keyword,
            entities: params.entities.unwrap_or_default(),
        });
        debug!(score = report.score, "content scored");
        Ok(Json(report))
    }

    #[tool(description = "Generate a templated markdown article (title, meta description, body, FAQ) for a keyword and business type, scored on the way out. Values default to those of project_id; set save=true to store it as draft content of that project.")]
    async fn generate_article(
        &self,
        Parameters(params): Parameters<GenerateArticleParams>,
    ) -> Result<Json<GenerateArticleResponse>, String> {
        let project = self.optional_project(params.project_id).await?;
        let save = params.save.unwrap_or(false);
        if save && project.is_none() {
            return Err("project_id is required to save the article".to_string());
        }

        let target_keyword = params
            .target_keyword
            .or_else(|| project.as_ref().map(|p| p.target_keyword.clone()))
            .unwrap_or_default();
        let business_type = params
            .business_type
            .or_else(|| project.as_ref().map(|p| p.business_type.clone()))
            .unwrap_or_default();
        let location = params
            .location
            .or_else(|| project.as_ref().and_then(|p| p.location.clone()));
        let tone = params
            .tone
            .or_else(|| project.as_ref().map(|p| p.tone))
            .unwrap_or_default();
        let entities = params.entities.unwrap_or_default();

        let article = generate_article(&ArticleParams {
            target_keyword: target_keyword.clone(),
            business_type,
            location,
            tone,
            entities: entities.clone(),
            year: params.year,
        })
        .map_err(|e| e.to_string())?;

        let report = score_content(&ScoreInput {
            title: article.title.clone(),
            meta_description: article.meta_description.clone(),
            content: article.body.clone(),
            target_keyword,
            entities: entities.clone(),
        });

        let content = match project {
            Some(project) if save => {
                let mut registry = self.registry.write().await;
                let content = registry.create_content(NewContent {
                    project_id: project.id,
                    title: article.title.clone(),
                    meta_description: article.meta_description.clone(),
                    body: article.body.clone(),
                    faq: article.faq.clone(),
                    entities: entities.into_iter().map(|e| e.name).collect(),
                    seo_score: report.score,
                    status: None,
                });
                info!(project_id = project.id, content_id = content.id, "article saved");
                Some(content)
            }
            _ => None,
        };

        Ok(Json(GenerateArticleResponse {
            article,
            report,
            content,
        }))
    }

    #[tool(description = "Word-frequency analysis of a text: the most frequent non-stop-words with counts, density percentages and high/medium/low categories.")]
    async fn analyze_keyword_density(
        &self,
        Parameters(params): Parameters<KeywordDensityParams>,
    ) -> Result<Json<DensityReport>, String> {
        let top_n = params
            .top_n
            .map_or(DEFAULT_TOP_N, |n| n as usize)
            .min(MAX_TOP_N);

        if let Some(cached) = self.cache.get_density(&params.text, top_n).await {
            return Ok(Json(cached));
        }

        let report = analyze_keyword_density(&params.text, top_n);
        self.cache.set_density(&params.text, top_n, &report).await;
        Ok(Json(report))
    }

    #[tool(description = "Synthesize the top-10 search results for a keyword and extract the most frequent entities across them. Results are reproducible per keyword.")]
    async fn analyze_serp(
        &self,
        Parameters(params): Parameters<AnalyzeSerpParams>,
    ) -> Result<Json<SerpAnalysisResponse>, String> {
        let keyword = params.keyword.trim().to_string();
        if keyword.is_empty() {
            return Err("keyword must not be empty".to_string());
        }

        let (results, cached) = match self.cache.get_serp(&keyword).await {
            Some(results) => (results, true),
            None => {
                let mut rng = StdRng::seed_from_u64(seed_for_keyword(&keyword));
                let results = synthesize_serp(&keyword, &mut rng).map_err(|e| e.to_string())?;
                self.cache.set_serp(&keyword, &results).await;
                (results, false)
            }
        };

        Ok(Json(SerpAnalysisResponse {
            entities: extract_entities(&results),
            keyword,
            results,
            cached,
        }))
    }

    #[tool(description = "Estimate SEO metrics, technical checks, competitors and prioritized recommendations for a website URL (http or https).")]
    async fn analyze_website(
        &self,
        Parameters(params): Parameters<AnalyzeWebsiteParams>,
    ) -> Result<Json<WebsiteAnalysisResponse>, String> {
        let keyword = params.keyword.as_deref();
        if let Some(analysis) = self.cache.get_website(&params.url, keyword).await {
            return Ok(Json(WebsiteAnalysisResponse {
                analysis,
                cached: true,
            }));
        }

        let mut rng = StdRng::from_entropy();
        let analysis =
            analyze_website(&params.url, keyword, &mut rng).map_err(|e| e.to_string())?;
        self.cache.set_website(&params.url, keyword, &analysis).await;

        Ok(Json(WebsiteAnalysisResponse {
            analysis,
            cached: false,
        }))
    }

    #[tool(description = "Remove all cached SERP, website and density analyses so the next calls recompute them.")]
    async fn clear_cache(&self) -> Result<Json<ClearCacheResponse>, String> {
        let enabled = self.cache.is_enabled();
        let cleared = enabled && self.cache.clear().await;
        info!(enabled, cleared, "analysis cache cleared");
        Ok(Json(ClearCacheResponse { enabled, cleared }))
    }

    #[tool(description = "Create a content project for a website, business type and target keyword.")]
    async fn create_project(
        &self,
        Parameters(params): Parameters<CreateProjectParams>,
    ) -> Result<Json<Project>, String> {
        let mut registry = self.registry.write().await;
        let project = registry
            .create_project(NewProject {
                business_type: params.business_type,
                website_url: params.website_url,
                target_keyword: params.target_keyword,
                name: params.name,
                location: params.location,
                language: params.language.unwrap_or_default(),
                tone: params.tone.unwrap_or_default(),
                additional_info: params.additional_info,
            })
            .map_err(|e| e.to_string())?;
        info!(project_id = project.id, keyword = %project.target_keyword, "project created");
        Ok(Json(project))
    }

    #[tool(description = "List all projects, newest first.")]
    async fn list_projects(&self) -> Result<Json<ProjectListResponse>, String> {
        let registry = self.registry.read().await;
        Ok(Json(ProjectListResponse {
            projects: registry.list_projects(),
        }))
    }

    #[tool(description = "Get a project by id.")]
    async fn get_project(
        &self,
        Parameters(params): Parameters<ProjectIdParams>,
    ) -> Result<Json<Project>, String> {
        self.project(params.project_id).await.map(Json)
    }

    #[tool(description = "Delete a project. Its content is kept.")]
    async fn delete_project(
        &self,
        Parameters(params): Parameters<ProjectIdParams>,
    ) -> Result<Json<DeleteResponse>, String> {
        let mut registry = self.registry.write().await;
        registry
            .delete_project(params.project_id)
            .map_err(|e| e.to_string())?;
        info!(project_id = params.project_id, "project deleted");
        Ok(Json(DeleteResponse { deleted: true }))
    }

    #[tool(description = "Record a project's SEO score (clamped to 100) and/or change its status (Active, Paused, Completed).")]
    async fn update_project_score(
        &self,
        Parameters(params): Parameters<UpdateProjectParams>,
    ) -> Result<Json<Project>, String> {
        let mut registry = self.registry.write().await;
        registry
            .update_project(params.project_id, params.seo_score, params.status)
            .map(Json)
            .map_err(|e| e.to_string())
    }

    #[tool(description = "Save content for a project. It is scored against the project's target keyword, and the project takes over that score.")]
    async fn save_content(
        &self,
        Parameters(params): Parameters<SaveContentParams>,
    ) -> Result<Json<ContentResponse>, String> {
        let entities = params.entities.unwrap_or_default();
        let keyword = self
            .registry
            .read()
            .await
            .get_project(params.project_id)
            .ok()
            .map(|p| p.target_keyword.clone());

        let report = keyword.map(|target_keyword| {
            score_content(&ScoreInput {
                title: params.title.clone(),
                meta_description: params.meta_description.clone(),
                content: params.body.clone(),
                target_keyword,
                entities: named_entities(&entities),
            })
        });

        let mut registry = self.registry.write().await;
        let content = registry.create_content(NewContent {
            project_id: params.project_id,
            title: params.title,
            meta_description: params.meta_description,
            body: params.body,
            faq: params.faq.unwrap_or_default(),
            entities,
            seo_score: report.as_ref().map_or(0, |r| r.score),
            status: params.status,
        });
        info!(project_id = content.project_id, content_id = content.id, "content saved");

        Ok(Json(ContentResponse { content, report }))
    }

    #[tool(description = "List saved content, newest first, optionally for one project.")]
    async fn list_content(
        &self,
        Parameters(params): Parameters<ListContentParams>,
    ) -> Result<Json<ContentListResponse>, String> {
        let registry = self.registry.read().await;
        Ok(Json(ContentListResponse {
            contents: registry.list_content(params.project_id),
        }))
    }

    #[tool(description = "Get saved content by id, with a fresh score against its project's keyword.")]
    async fn get_content(
        &self,
        Parameters(params): Parameters<ContentIdParams>,
    ) -> Result<Json<ContentResponse>, String> {
        let registry = self.registry.read().await;
        let content = registry
            .get_content(params.content_id)
            .cloned()
            .map_err(|e| e.to_string())?;
        let report = score_stored(&registry, &content);
        Ok(Json(ContentResponse { content, report }))
    }

    #[tool(description = "Edit saved content. Omitted fields are unchanged; the content is re-scored against its project's keyword.")]
    async fn update_content(
        &self,
        Parameters(params): Parameters<UpdateContentParams>,
    ) -> Result<Json<ContentResponse>, String> {
        let update = ContentUpdate {
            title: params.title,
            meta_description: params.meta_description,
            body: params.body,
            faq: params.faq,
            status: params.status,
        };
        let mut registry = self.registry.write().await;
        update_and_rescore(&mut registry, params.content_id, update)
            .map(Json)
            .map_err(|e| e.to_string())
    }

    #[tool(description = "Delete saved content.")]
    async fn delete_content(
        &self,
        Parameters(params): Parameters<ContentIdParams>,
    ) -> Result<Json<DeleteResponse>, String> {
        let mut registry = self.registry.write().await;
        registry
            .delete_content(params.content_id)
            .map_err(|e| e.to_string())?;
        info!(content_id = params.content_id, "content deleted");
        Ok(Json(DeleteResponse { deleted: true }))
    }

    #[tool(description = "Portfolio summary: project and content totals, average score with trend, top performer, improvement opportunities and per-business-type counts.")]
    async fn portfolio_report(&self) -> Result<Json<PortfolioReport>, String> {
        let registry = self.registry.read().await;
        Ok(Json(summarize(
            &registry.list_projects(),
            registry.content_count(),
        )))
    }
}

/// Score stored content against its project's keyword, if the project still exists.
fn score_stored(registry: &Registry, content: &Content) -> Option<SeoReport> {
    let project = registry.get_project(content.project_id).ok()?;
    Some(score_content(&ScoreInput {
        title: content.title.clone(),
        meta_description: content.meta_description.clone(),
        content: content.body.clone(),
        target_keyword: project.target_keyword.clone(),
        entities: named_entities(&content.entities),
    }))
}

/// Apply `update` and record the fresh score under one write guard.
fn update_and_rescore(
    registry: &mut Registry,
    id: u64,
    update: ContentUpdate,
) -> Result<ContentResponse, AppError> {
    let content = registry.update_content(id, update)?;
    let Some(report) = score_stored(registry, &content) else {
        return Ok(ContentResponse {
            content,
            report: None,
        });
    };
    let content = registry.set_content_score(id, report.score)?;
    Ok(ContentResponse {
        content,
        report: Some(report),
    })
}

fn named_entities(names: &[String]) -> Vec<Entity> {
    names.iter().map(|name| Entity::new(name.clone(), 1)).collect()
}

#[tool_handler]
impl ServerHandler for SeoContentServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: "seo-content".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "SEO content MCP server. Use score_content to grade a draft, \
                 generate_article for a templated keyword article, analyze_keyword_density \
                 for word frequencies, and analyze_serp / analyze_website for simulated \
                 research data (cached in Redis when configured; clear_cache resets it). \
                 Projects and content are kept in memory via the \
                 *_project and *_content tools; portfolio_report summarizes them."
                    .to_string(),
            ),
        }
    }
}
