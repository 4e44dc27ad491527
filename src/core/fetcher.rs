use crate::core::{DocumentSource, PortfolioDocument, Storage};
use crate::utils::error::{RenderError, Result};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// 作品集文件固定的相對位置
pub const PORTFOLIO_LOCATOR: &str = "portfolio.json";

/// 將回應內容解析為作品集文件，欄位缺漏或型別不符都是解析錯誤
pub fn parse_document(body: &[u8]) -> Result<PortfolioDocument> {
    let document: PortfolioDocument = serde_json::from_slice(body)?;
    Ok(document)
}

/// 以頁面 URL 為基準解析 `portfolio.json` 的位置
pub fn resolve_locator(base_url: &str) -> Result<Url> {
    let base = Url::parse(base_url)?;
    Ok(base.join(PORTFOLIO_LOCATOR)?)
}

/// 以頁面檔案所在目錄為基準解析 `portfolio.json` 的位置
pub fn resolve_local_locator(page_path: &str) -> String {
    let dir = Path::new(page_path).parent().unwrap_or_else(|| Path::new(""));
    dir.join(PORTFOLIO_LOCATOR).to_string_lossy().into_owned()
}

pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        // 建立 client 失敗屬於設定問題，不是擷取失敗
        let client = builder.build().map_err(|e| RenderError::ConfigError {
            message: format!("Failed to build HTTP client: {}", e),
        })?;

        Ok(Self {
            client,
            url: resolve_locator(base_url)?,
        })
    }
}

#[async_trait::async_trait]
impl DocumentSource for HttpSource {
    fn locator(&self) -> String {
        self.url.to_string()
    }

    async fn fetch_document(&self) -> Result<PortfolioDocument> {
        tracing::debug!("Requesting portfolio document: {}", self.url);
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        tracing::debug!("Portfolio response status: {}", status);
        if !status.is_success() {
            return Err(RenderError::StatusError {
                url: self.url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        parse_document(&body)
    }
}

pub struct StorageSource<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> StorageSource<S> {
    pub fn new(storage: S, path: String) -> Self {
        Self { storage, path }
    }

    /// `portfolio.json` 與頁面放在同一個目錄
    pub fn for_page(storage: S, page_path: &str) -> Self {
        Self::new(storage, resolve_local_locator(page_path))
    }
}

#[async_trait::async_trait]
impl<S: Storage> DocumentSource for StorageSource<S> {
    fn locator(&self) -> String {
        self.path.clone()
    }

    async fn fetch_document(&self) -> Result<PortfolioDocument> {
        tracing::debug!("Reading portfolio document: {}", self.path);
        let body = self.storage.read_file(&self.path).await?;
        parse_document(&body)
    }
}
