use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to retrieve portfolio document: {0}")]
    RetrievalError(#[from] reqwest::Error),

    #[error("Portfolio document request to {url} returned status {status}")]
    StatusError { url: String, status: u16 },

    #[error("Failed to parse portfolio document: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Display region not found: {selector}")]
    MissingRegionError { selector: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl RenderError {
    /// 取得文件階段（擷取/解析）的錯誤，發生時不會渲染任何區塊
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            RenderError::RetrievalError(_)
                | RenderError::StatusError { .. }
                | RenderError::ParseError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_error_classification() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(RenderError::ParseError(parse).is_document_error());
        assert!(RenderError::StatusError {
            url: "http://x/portfolio.json".to_string(),
            status: 404
        }
        .is_document_error());
        assert!(!RenderError::ConfigError {
            message: "Failed to build HTTP client".to_string()
        }
        .is_document_error());
        assert!(!RenderError::MissingRegionError {
            selector: ".header".to_string()
        }
        .is_document_error());
    }

    #[test]
    fn test_missing_region_message() {
        let err = RenderError::MissingRegionError {
            selector: ".contact".to_string(),
        };
        assert_eq!(err.to_string(), "Display region not found: .contact");
    }
}
