use crate::core::render::{
    render_bio, render_contact, render_projects, BIO_SELECTOR, CONTACT_SELECTOR,
    PROJECTS_SELECTOR,
};
use crate::core::{DocumentSource, Page};
use crate::utils::error::{RenderError, Result};

/// 三個顯示區塊對應的 class 選擇器
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSelectors {
    pub bio: String,
    pub projects: String,
    pub contact: String,
}

impl Default for RegionSelectors {
    fn default() -> Self {
        Self {
            bio: BIO_SELECTOR.to_string(),
            projects: PROJECTS_SELECTOR.to_string(),
            contact: CONTACT_SELECTOR.to_string(),
        }
    }
}

impl RegionSelectors {
    pub fn as_array(&self) -> [&str; 3] {
        [self.bio.as_str(), self.projects.as_str(), self.contact.as_str()]
    }
}

/// 每個區塊各自的渲染結果，一個區塊失敗不影響其他區塊
#[derive(Debug)]
pub struct RenderReport {
    pub bio: Result<()>,
    pub projects: Result<()>,
    pub contact: Result<()>,
}

impl RenderReport {
    pub fn rendered_count(&self) -> usize {
        [&self.bio, &self.projects, &self.contact]
            .iter()
            .filter(|outcome| outcome.is_ok())
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.rendered_count() == 3
    }

    pub fn failures(&self) -> Vec<&RenderError> {
        [&self.bio, &self.projects, &self.contact]
            .into_iter()
            .filter_map(|outcome| outcome.as_ref().err())
            .collect()
    }
}

pub struct PortfolioRenderer<D: DocumentSource> {
    source: D,
    selectors: RegionSelectors,
}

impl<D: DocumentSource> PortfolioRenderer<D> {
    pub fn new(source: D) -> Self {
        Self::with_selectors(source, RegionSelectors::default())
    }

    pub fn with_selectors(source: D, selectors: RegionSelectors) -> Self {
        Self { source, selectors }
    }

    /// 擷取文件後依序渲染 bio、projects、contact。
    ///
    /// 擷取或解析失敗時直接回傳錯誤，頁面保持原狀。
    pub async fn run(&self, page: &mut dyn Page) -> Result<RenderReport> {
        tracing::info!("Fetching portfolio document from {}", self.source.locator());
        let document = self.source.fetch_document().await?;
        tracing::info!(
            "Loaded portfolio for {} with {} projects",
            document.bio.name,
            document.projects.len()
        );

        let report = RenderReport {
            bio: isolate(
                &self.selectors.bio,
                render_bio(page, &self.selectors.bio, &document.bio),
            ),
            projects: isolate(
                &self.selectors.projects,
                render_projects(page, &self.selectors.projects, &document.projects),
            ),
            contact: isolate(
                &self.selectors.contact,
                render_contact(page, &self.selectors.contact, &document.contact),
            ),
        };

        tracing::info!("Rendered {}/3 regions", report.rendered_count());
        Ok(report)
    }
}

fn isolate(selector: &str, outcome: Result<()>) -> Result<()> {
    match &outcome {
        Ok(()) => tracing::debug!("✅ Rendered {}", selector),
        Err(e) => tracing::warn!("⚠️ Skipped {}: {}", selector, e),
    }
    outcome
}
