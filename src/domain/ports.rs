use crate::domain::model::PortfolioDocument;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// 取得並解析作品集文件的來源
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// 文件實際的位置（URL 或檔案路徑），用於日誌
    fn locator(&self) -> String;

    async fn fetch_document(&self) -> Result<PortfolioDocument>;
}

/// 頁面上可被整段替換內容的顯示區塊
pub trait Region {
    fn inner_html(&self) -> &str;

    /// 完整替換區塊內容，舊內容全部丟棄
    fn set_inner_html(&mut self, markup: String);
}

/// 承載顯示區塊的頁面
pub trait Page {
    fn region_mut(&mut self, selector: &str) -> Option<&mut dyn Region>;
}
