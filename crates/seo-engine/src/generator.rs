//! Template-based article and FAQ generation.
//!
//! Output is fully determined by [`ArticleParams`]; the only varying input is the year,
//! which defaults to the current one.

use chrono::Datelike;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::model::{word_count, Entity, FaqItem, Tone};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ArticleParams {
    pub target_keyword: String,
    pub business_type: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub entities: Vec<Entity>,
    /// Year used in the title and headings; defaults to the current year
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GeneratedArticle {
    pub title: String,
    pub meta_description: String,
    /// Markdown body
    pub body: String,
    pub faq: Vec<FaqItem>,
    pub word_count: usize,
}

/// Interpolated values shared by every template section.
struct Vars<'a> {
    keyword: &'a str,
    business: &'a str,
    business_lower: String,
    location: Option<&'a str>,
    /// `" in {location}"` or empty
    in_location: String,
    formal: bool,
    year: i32,
}

impl<'a> Vars<'a> {
    fn new(
        keyword: &'a str,
        business: &'a str,
        location: Option<&'a str>,
        tone: Tone,
        year: i32,
    ) -> Self {
        let location = location.map(str::trim).filter(|l| !l.is_empty());
        Self {
            keyword,
            business,
            business_lower: business.to_lowercase(),
            location,
            in_location: location.map(|l| format!(" in {l}")).unwrap_or_default(),
            formal: tone.is_formal(),
            year,
        }
    }
}

pub fn generate_article(params: &ArticleParams) -> Result<GeneratedArticle, EngineError> {
    let keyword = params.target_keyword.trim();
    if keyword.is_empty() {
        return Err(EngineError::EmptyKeyword);
    }
    let business = params.business_type.trim();
    if business.is_empty() {
        return Err(EngineError::MissingField("business_type"));
    }

    let year = params.year.unwrap_or_else(|| chrono::Utc::now().year());
    let vars = Vars::new(keyword, business, params.location.as_deref(), params.tone, year);

    let body = article_body(&vars, &params.entities);
    Ok(GeneratedArticle {
        title: format!("{keyword} for {business}: Complete {year} Strategy Guide"),
        meta_description: format!(
            "Master {keyword} strategies for your {business} business{}. Expert insights, \
             actionable tips, and proven methods for {year} success.",
            vars.in_location
        ),
        word_count: word_count(&body),
        body,
        faq: faq_items(&vars),
    })
}

/// The six standard FAQ entries for a keyword and business type.
pub fn generate_faqs(
    keyword: &str,
    business_type: &str,
    location: Option<&str>,
) -> Result<Vec<FaqItem>, EngineError> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(EngineError::EmptyKeyword);
    }
    let vars = Vars::new(keyword, business_type.trim(), location, Tone::default(), 0);
    Ok(faq_items(&vars))
}

fn article_body(v: &Vars<'_>, entities: &[Entity]) -> String {
    let kw = v.keyword;
    let bt = v.business;
    let btl = &v.business_lower;
    let loc = &v.in_location;
    let year = v.year;

    let applications = entities
        .iter()
        .map(|e| {
            format!(
                "- **{}**: Strategic implementation for enhanced {btl} operations",
                e.name
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let strategic_approach = if v.formal {
        "Develop a comprehensive strategic framework that aligns with organizational \
         objectives and market dynamics."
    } else {
        "Start with a clear strategy that fits your business goals and market situation."
    };

    let (regional_heading, regional_text) = match v.location {
        Some(l) => (
            format!("Regional Considerations for {l}"),
            format!(
                "Businesses operating in {l} should consider local market dynamics, regulatory \
                 requirements, and cultural factors that impact {kw} implementation."
            ),
        ),
        None => (
            "Market Considerations".to_string(),
            "Consider local market dynamics, regulatory requirements, and industry-specific \
             factors that influence strategic decisions."
                .to_string(),
        ),
    };

    let closing = if v.formal {
        "We recommend engaging with experienced professionals to ensure optimal \
         implementation and results."
    } else {
        "Ready to get started? Consider working with experts who can help you implement \
         these strategies effectively."
    };

    let sections = [
        format!("# {kw}: The Complete {bt} Strategy Guide for {year}"),
        "## Executive Summary".to_string(),
        format!(
            "{kw} has become a cornerstone of successful {btl} operations{loc}. This \
             comprehensive guide provides actionable strategies, industry insights, and proven \
             methodologies to help your business excel in this critical area."
        ),
        format!("## What is {kw}?"),
        format!(
            "{kw} encompasses the strategic approaches and tactical implementations that enable \
             {btl} organizations to achieve their operational goals. For businesses{loc}, \
             understanding and mastering {kw} is essential for sustainable growth and \
             competitive advantage."
        ),
        "### Core Components".to_string(),
        format!(
            "1. **Strategic Planning**: Developing comprehensive {kw} frameworks\n\
             2. **Implementation Excellence**: Executing strategies with precision and efficiency\n\
             3. **Performance Optimization**: Continuous improvement and refinement\n\
             4. **Technology Integration**: Leveraging modern tools and platforms\n\
             5. **Stakeholder Alignment**: Ensuring organizational buy-in and support"
        ),
        format!("## Industry-Specific Applications for {bt}"),
        format!("### Primary Applications\n{applications}"),
        "### Implementation Framework".to_string(),
        format!(
            "#### Phase 1: Assessment and Planning\n\
             - Comprehensive analysis of current {kw} capabilities\n\
             - Identification of optimization opportunities\n\
             - Development of strategic roadmap"
        ),
        format!(
            "#### Phase 2: Strategy Development\n\
             - Creation of tailored {kw} frameworks\n\
             - Integration with existing {btl} processes\n\
             - Risk assessment and mitigation planning"
        ),
        format!(
            "#### Phase 3: Implementation and Execution\n\
             - Systematic deployment of {kw} strategies\n\
             - Team training and capability development\n\
             - Performance monitoring and adjustment"
        ),
        format!("## Best Practices for {bt} Organizations"),
        format!("### 1. Strategic Approach\n{strategic_approach}"),
        format!(
            "### 2. Technology Integration\n\
             Modern {kw} success requires leveraging appropriate technology solutions. Consider:\n\
             - Automation tools for efficiency gains\n\
             - Analytics platforms for data-driven decisions\n\
             - Integration systems for seamless operations"
        ),
        format!(
            "### 3. Performance Measurement\n\
             Establish clear KPIs to measure {kw} success:\n\
             - Operational efficiency metrics\n\
             - Customer satisfaction indicators\n\
             - ROI and financial performance measures\n\
             - Quality and compliance standards"
        ),
        "## Common Challenges and Solutions".to_string(),
        "### Challenge: Resource Constraints\n\
         **Solution**: Prioritize high-impact initiatives and implement phased approaches to \
         optimize resource utilization."
            .to_string(),
        "### Challenge: Change Management\n\
         **Solution**: Develop comprehensive change management strategies including \
         stakeholder communication, training programs, and gradual implementation."
            .to_string(),
        "### Challenge: Technology Integration\n\
         **Solution**: Conduct thorough system assessments and implement integration solutions \
         that minimize disruption while maximizing benefits."
            .to_string(),
        "### Challenge: Performance Measurement\n\
         **Solution**: Establish baseline metrics, implement robust tracking systems, and \
         create regular reporting processes."
            .to_string(),
        format!("## {regional_heading}"),
        regional_text,
        "### Key Factors:\n\
         - Market maturity and competitive landscape\n\
         - Regulatory compliance requirements\n\
         - Cultural and operational preferences\n\
         - Technology infrastructure considerations"
            .to_string(),
        "## Implementation Roadmap".to_string(),
        "### Months 1-2: Foundation Building\n\
         - Conduct comprehensive assessment\n\
         - Develop strategic framework\n\
         - Secure stakeholder alignment"
            .to_string(),
        format!(
            "### Months 3-4: Initial Implementation\n\
             - Deploy core {kw} capabilities\n\
             - Implement training programs\n\
             - Establish measurement systems"
        ),
        "### Months 5-6: Optimization and Scaling\n\
         - Analyze performance data\n\
         - Refine processes and procedures\n\
         - Scale successful initiatives"
            .to_string(),
        "## Measuring Success".to_string(),
        "### Key Performance Indicators\n\
         - **Efficiency Metrics**: Process improvements and resource optimization\n\
         - **Quality Indicators**: Service delivery and customer satisfaction\n\
         - **Financial Performance**: ROI, cost reduction, and revenue impact\n\
         - **Strategic Alignment**: Progress toward organizational objectives"
            .to_string(),
        "### Reporting and Analysis\n\
         Regular performance reviews should include:\n\
         - Monthly operational metrics\n\
         - Quarterly strategic assessments\n\
         - Annual comprehensive evaluations\n\
         - Continuous improvement recommendations"
            .to_string(),
        "## Future Trends and Considerations".to_string(),
        format!(
            "The {kw} landscape continues to evolve, with emerging trends including:\n\
             - Increased automation and AI integration\n\
             - Enhanced data analytics capabilities\n\
             - Greater focus on sustainability and social responsibility\n\
             - Expanded digital transformation initiatives"
        ),
        "## Conclusion".to_string(),
        format!(
            "Successful {kw} implementation requires a strategic approach, comprehensive \
             planning, and continuous optimization. {bt} organizations that invest in developing \
             robust {kw} capabilities will be better positioned for long-term success and \
             competitive advantage."
        ),
        closing.to_string(),
        "---".to_string(),
        format!(
            "*This guide provides foundational insights for {kw} success. For customized \
             strategies tailored to your specific {btl} needs{loc}, consider consulting with \
             industry experts.*"
        ),
    ];

    sections.join("\n\n")
}

fn faq_items(v: &Vars<'_>) -> Vec<FaqItem> {
    let kw = v.keyword;
    let bt = v.business;
    let btl = &v.business_lower;
    let loc = &v.in_location;

    let faq = |question: String, answer: String| FaqItem { question, answer };

    vec![
        faq(
            format!("What is {kw} and why is it crucial for {bt} success?"),
            format!(
                "{kw} refers to the strategic approaches and operational methodologies that \
                 enable {btl} organizations to achieve their objectives efficiently. It's crucial \
                 because it directly impacts operational efficiency, customer satisfaction, and \
                 competitive positioning{loc}."
            ),
        ),
        faq(
            format!("How long does it typically take to see results from {kw} implementation?"),
            format!(
                "Most {btl} organizations begin seeing measurable improvements within 60-90 days \
                 of implementation. However, significant transformational results typically \
                 emerge after 6-12 months of consistent application and optimization."
            ),
        ),
        faq(
            format!("What are the most critical success factors for {kw} in {bt}?"),
            format!(
                "Key success factors include strategic alignment, stakeholder buy-in, appropriate \
                 technology infrastructure, comprehensive training programs, and robust \
                 performance measurement systems. Organizations{loc} should also consider local \
                 market dynamics and regulatory requirements."
            ),
        ),
        faq(
            format!("How can I measure the ROI of {kw} initiatives?"),
            "ROI measurement should include both quantitative metrics (cost savings, revenue \
             increases, efficiency gains) and qualitative benefits (customer satisfaction, \
             employee engagement, competitive advantage). Establish baseline measurements before \
             implementation and track progress using defined KPIs."
                .to_string(),
        ),
        faq(
            format!("What resources are needed to successfully implement {kw} strategies?"),
            "Essential resources include dedicated project leadership, cross-functional team \
             participation, appropriate technology tools and platforms, training and development \
             budget, and ongoing operational support. The specific requirements vary based on \
             organization size, complexity, and existing capabilities."
                .to_string(),
        ),
        faq(
            format!("How does {kw} differ for {bt} compared to other industries?"),
            format!(
                "{bt} organizations have unique requirements including specific regulatory \
                 considerations, operational complexities, and customer expectations. {kw} \
                 strategies must be tailored to address these industry-specific factors while \
                 leveraging best practices from other sectors where applicable."
            ),
        ),
    ]
}
