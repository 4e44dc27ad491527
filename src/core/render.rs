//! 三個區塊的渲染器。
//!
//! 每個渲染器都是「整段替換」：先產生區塊的完整 markup，再覆寫區塊內容。
//! 資料值原樣插入，不做 HTML 跳脫。

use crate::core::{Bio, Contact, Page, Project};
use crate::utils::error::{RenderError, Result};

pub const BIO_SELECTOR: &str = ".header";
pub const PROJECTS_SELECTOR: &str = ".projects";
pub const CONTACT_SELECTOR: &str = ".contact";

pub fn bio_markup(bio: &Bio) -> String {
    format!(
        "\n    <img src=\"{}\" alt=\"Avatar\">\n    <h1>{}</h1>\n    <p>{}</p>\n    <p>{}</p>\n  ",
        bio.avatar, bio.name, bio.title, bio.description
    )
}

pub fn project_markup(project: &Project) -> String {
    format!(
        "\n    <div class=\"project\">\n      <img src=\"{}\" alt=\"{}\">\n      <h3>{}</h3>\n      <p>{}</p>\n      <a href=\"{}\" target=\"_blank\">View Project</a>\n    </div>\n  ",
        project.image, project.title, project.title, project.description, project.link
    )
}

/// 依輸入順序串接，空列表得到空字串
pub fn projects_markup(projects: &[Project]) -> String {
    projects.iter().map(project_markup).collect()
}

pub fn contact_markup(contact: &Contact) -> String {
    format!(
        "\n    <a href=\"mailto:{}\">{}</a>\n    <a href=\"{}\" target=\"_blank\">LinkedIn</a>\n    <a href=\"{}\" target=\"_blank\" class=\"github\">GitHub</a>\n  ",
        contact.email, contact.email, contact.linkedin, contact.github
    )
}

fn replace_region(page: &mut dyn Page, selector: &str, markup: String) -> Result<()> {
    let region = page
        .region_mut(selector)
        .ok_or_else(|| RenderError::MissingRegionError {
            selector: selector.to_string(),
        })?;
    tracing::debug!("Replacing {} ({} bytes)", selector, markup.len());
    region.set_inner_html(markup);
    Ok(())
}

pub fn render_bio(page: &mut dyn Page, selector: &str, bio: &Bio) -> Result<()> {
    replace_region(page, selector, bio_markup(bio))
}

pub fn render_projects(page: &mut dyn Page, selector: &str, projects: &[Project]) -> Result<()> {
    replace_region(page, selector, projects_markup(projects))
}

pub fn render_contact(page: &mut dyn Page, selector: &str, contact: &Contact) -> Result<()> {
    replace_region(page, selector, contact_markup(contact))
}
