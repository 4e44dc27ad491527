use crate::core::{Page, Region};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRegion {
    content: String,
}

impl MemoryRegion {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl Region for MemoryRegion {
    fn inner_html(&self) -> &str {
        &self.content
    }

    fn set_inner_html(&mut self, markup: String) {
        self.content = markup;
    }
}

/// 不依賴真實頁面的記憶體版本，區塊需明確加入
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    regions: HashMap<String, MemoryRegion>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_regions(selectors: &[&str]) -> Self {
        let mut page = Self::new();
        for selector in selectors {
            page.insert_region(selector, "");
        }
        page
    }

    pub fn insert_region(&mut self, selector: &str, content: impl Into<String>) {
        self.regions
            .insert(selector.to_string(), MemoryRegion::new(content));
    }

    pub fn inner_html(&self, selector: &str) -> Option<&str> {
        self.regions.get(selector).map(|region| region.inner_html())
    }
}

impl Page for MemoryPage {
    fn region_mut(&mut self, selector: &str) -> Option<&mut dyn Region> {
        self.regions
            .get_mut(selector)
            .map(|region| region as &mut dyn Region)
    }
}
