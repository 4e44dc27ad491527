use crate::utils::error::{RenderError, Result};
use crate::utils::validation::{
    validate_class_selector, validate_path, validate_positive_number, validate_required_field,
    validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: Option<SourceConfig>,
    pub page: Option<PageConfig>,
    pub selectors: Option<SelectorConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageConfig {
    pub path: Option<String>,
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectorConfig {
    pub bio: Option<String>,
    pub projects: Option<String>,
    pub contact: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RenderError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SITE_URL})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn base_url(&self) -> Option<&str> {
        self.source.as_ref()?.base_url.as_deref()
    }

    pub fn timeout_seconds(&self) -> Option<u64> {
        self.source.as_ref()?.timeout_seconds
    }

    pub fn page_path(&self) -> Option<&str> {
        self.page.as_ref()?.path.as_deref()
    }

    pub fn output_path(&self) -> Option<&str> {
        self.page.as_ref()?.output_path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(source) = &self.source {
            if let Some(base_url) = &source.base_url {
                validate_url("source.base_url", base_url)?;
            }
            if let Some(timeout) = source.timeout_seconds {
                validate_positive_number("source.timeout_seconds", timeout, 1)?;
            }
        }

        // [page] 區段存在時必須指定頁面路徑
        if let Some(page) = &self.page {
            validate_path("page.path", validate_required_field("page.path", &page.path)?)?;
            if let Some(output_path) = &page.output_path {
                validate_path("page.output_path", output_path)?;
            }
        }

        if let Some(selectors) = &self.selectors {
            for (field, value) in [
                ("selectors.bio", &selectors.bio),
                ("selectors.projects", &selectors.projects),
                ("selectors.contact", &selectors.contact),
            ] {
                if let Some(selector) = value {
                    validate_class_selector(field, selector)?;
                }
            }
        }

        Ok(())
    }
}
