// Application layer: wires storage, document source and page adapter for one run.

use crate::adapters::html::HtmlPage;
use crate::config::RunSettings;
use crate::core::engine::{PortfolioRenderer, RenderReport};
use crate::core::fetcher::{HttpSource, StorageSource};
use crate::core::{DocumentSource, Storage};
use crate::utils::error::{RenderError, Result};

/// 讀取頁面、渲染三個區塊並寫出結果。
///
/// 文件擷取或解析失敗時不寫出任何檔案。
pub async fn render_site<S: Storage + Clone>(
    storage: &S,
    settings: &RunSettings,
) -> Result<RenderReport> {
    match &settings.base_url {
        Some(base_url) => {
            let source = HttpSource::new(base_url, settings.timeout())?;
            render_with(source, storage, settings).await
        }
        None => {
            let source = StorageSource::for_page(storage.clone(), &settings.page_path);
            render_with(source, storage, settings).await
        }
    }
}

async fn render_with<D: DocumentSource, S: Storage>(
    source: D,
    storage: &S,
    settings: &RunSettings,
) -> Result<RenderReport> {
    tracing::debug!("Loading page: {}", settings.page_path);
    let bytes = storage.read_file(&settings.page_path).await?;
    let html = String::from_utf8(bytes).map_err(|e| RenderError::ConfigError {
        message: format!("Page {} is not valid UTF-8: {}", settings.page_path, e),
    })?;

    let mut page = HtmlPage::parse(&html, &settings.selectors.as_array());
    let renderer = PortfolioRenderer::with_selectors(source, settings.selectors.clone());
    let report = renderer.run(&mut page).await?;

    storage
        .write_file(settings.output_path(), page.to_html().as_bytes())
        .await?;
    tracing::info!("📁 Rendered page saved to: {}", settings.output_path());

    Ok(report)
}
