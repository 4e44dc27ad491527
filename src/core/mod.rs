pub mod engine;
pub mod fetcher;
pub mod render;

pub use crate::domain::model::{Bio, Contact, PortfolioDocument, Project};
pub use crate::domain::ports::{DocumentSource, Page, Region, Storage};
pub use crate::utils::error::Result;
