pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{html::HtmlPage, memory::MemoryPage};
pub use app::render_site;
pub use config::{cli::LocalStorage, RunSettings};
pub use crate::core::engine::{PortfolioRenderer, RegionSelectors, RenderReport};
pub use crate::core::fetcher::{HttpSource, StorageSource};
pub use domain::model::{Bio, Contact, PortfolioDocument, Project};
pub use utils::error::{RenderError, Result};
