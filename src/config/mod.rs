pub mod cli;
pub mod toml_config;

use crate::core::engine::RegionSelectors;
use crate::utils::error::{RenderError, Result};
use crate::utils::validation::{
    validate_class_selector, validate_path, validate_positive_number, validate_url, Validate,
};
use std::time::Duration;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_PAGE_PATH: &str = "index.html";

/// 合併 CLI 參數與 TOML 檔案後的執行設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub page_path: String,
    pub output_path: Option<String>,
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub selectors: RegionSelectors,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            page_path: DEFAULT_PAGE_PATH.to_string(),
            output_path: None,
            base_url: None,
            timeout_seconds: None,
            selectors: RegionSelectors::default(),
        }
    }
}

impl RunSettings {
    pub fn from_file_config(file: &TomlConfig) -> Self {
        let mut settings = Self::default();

        if let Some(path) = file.page_path() {
            settings.page_path = path.to_string();
        }
        settings.output_path = file.output_path().map(str::to_string);
        settings.base_url = file.base_url().map(str::to_string);
        settings.timeout_seconds = file.timeout_seconds();

        if let Some(selectors) = &file.selectors {
            if let Some(bio) = &selectors.bio {
                settings.selectors.bio = bio.clone();
            }
            if let Some(projects) = &selectors.projects {
                settings.selectors.projects = projects.clone();
            }
            if let Some(contact) = &selectors.contact {
                settings.selectors.contact = contact.clone();
            }
        }

        settings
    }

    /// 未指定輸出路徑時覆寫原頁面
    pub fn output_path(&self) -> &str {
        self.output_path.as_deref().unwrap_or(&self.page_path)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for RunSettings {
    fn validate(&self) -> Result<()> {
        validate_path("page", &self.page_path)?;
        validate_path("output", self.output_path())?;

        if let Some(base_url) = &self.base_url {
            validate_url("base_url", base_url)?;
        }
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }

        validate_class_selector("selectors.bio", &self.selectors.bio)?;
        validate_class_selector("selectors.projects", &self.selectors.projects)?;
        validate_class_selector("selectors.contact", &self.selectors.contact)?;

        // 每個區塊必須對應不同的元素
        let selectors = self.selectors.as_array();
        for (index, selector) in selectors.iter().enumerate() {
            if selectors[..index].contains(selector) {
                return Err(RenderError::InvalidConfigValueError {
                    field: "selectors".to_string(),
                    value: selector.to_string(),
                    reason: "Each region needs its own selector".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-render")]
#[command(about = "Render portfolio.json into the bio, projects and contact regions of a page")]
pub struct CliConfig {
    #[arg(long, help = "Hosting page to render into [default: index.html]")]
    pub page: Option<String>,

    #[arg(long, help = "Fetch portfolio.json over HTTP relative to this URL")]
    pub base_url: Option<String>,

    #[arg(long, help = "Where to write the rendered page [default: overwrite the page]")]
    pub output: Option<String>,

    #[arg(long, help = "Optional TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "HTTP timeout in seconds (no timeout by default)")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 先套用 TOML 檔案，再以 CLI 參數覆蓋
    pub fn settings(&self) -> Result<RunSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                RunSettings::from_file_config(&file)
            }
            None => RunSettings::default(),
        };

        if let Some(page) = &self.page {
            settings.page_path = page.clone();
        }
        if let Some(output) = &self.output {
            settings.output_path = Some(output.clone());
        }
        if let Some(base_url) = &self.base_url {
            settings.base_url = Some(base_url.clone());
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = Some(timeout);
        }

        settings.validate()?;
        Ok(settings)
    }
}
