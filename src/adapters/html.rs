//! 將真實 HTML 頁面綁定為可替換的顯示區塊。
//!
//! 頁面在載入時切成「原樣文字」與「區塊內容」兩種片段，輸出時依序串接，
//! 因此未被替換的部分會逐位元組保留。

use crate::adapters::memory::MemoryRegion;
use crate::core::{Page, Region};
use regex::Regex;
use std::sync::LazyLock;

// 屬性值內的 `>` 不結束標籤
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(/?)([A-Za-z][A-Za-z0-9-]*)((?:[^>"']|"[^"]*"|'[^']*')*)>"#).unwrap()
});

// 未結束的註解延伸到文件結尾
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?(?:-->|\z)").unwrap());

static CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:^|\s)class\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#).unwrap()
});

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// 內容不解析為標籤的元素
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

#[derive(Debug)]
struct Tag<'a> {
    start: usize,
    end: usize,
    name: String,
    closing: bool,
    self_closing: bool,
    attrs: &'a str,
}

impl Tag<'_> {
    fn has_class(&self, class: &str) -> bool {
        CLASS_RE.captures(self.attrs).is_some_and(|caps| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .is_some_and(|value| value.as_str().split_whitespace().any(|c| c == class))
        })
    }

    fn can_hold_content(&self) -> bool {
        !self.self_closing && !VOID_ELEMENTS.contains(&self.name.as_str())
    }
}

#[derive(Debug, Clone)]
enum Segment {
    Text(String),
    Region {
        selector: String,
        region: MemoryRegion,
    },
}

#[derive(Debug, Clone)]
pub struct HtmlPage {
    segments: Vec<Segment>,
}

struct Span<'s> {
    selector: &'s str,
    content_start: usize,
    content_end: usize,
}

impl HtmlPage {
    /// 解析頁面並綁定給定的 class 選擇器；找不到的選擇器不會被綁定
    pub fn parse(html: &str, selectors: &[&str]) -> Self {
        let tags = scan_tags(html);

        let mut spans: Vec<Span> = selectors
            .iter()
            .filter_map(|selector| match locate_region(&tags, selector) {
                Some((content_start, content_end)) => Some(Span {
                    selector: *selector,
                    content_start,
                    content_end,
                }),
                None => {
                    tracing::warn!("⚠️ Region {} not found in page", selector);
                    None
                }
            })
            .collect();
        spans.sort_by_key(|span| span.content_start);

        let mut segments = Vec::new();
        let mut cursor = 0;
        for span in spans {
            if span.content_start < cursor {
                tracing::warn!(
                    "⚠️ Region {} overlaps another region and will not be bound",
                    span.selector
                );
                continue;
            }
            segments.push(Segment::Text(html[cursor..span.content_start].to_string()));
            segments.push(Segment::Region {
                selector: span.selector.to_string(),
                region: MemoryRegion::new(&html[span.content_start..span.content_end]),
            });
            cursor = span.content_end;
        }
        segments.push(Segment::Text(html[cursor..].to_string()));

        Self { segments }
    }

    pub fn bound_selectors(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Region { selector, .. } => Some(selector.as_str()),
                Segment::Text(_) => None,
            })
            .collect()
    }

    pub fn inner_html(&self, selector: &str) -> Option<&str> {
        self.segments.iter().find_map(|segment| match segment {
            Segment::Region {
                selector: bound,
                region,
            } if bound.as_str() == selector => Some(region.inner_html()),
            _ => None,
        })
    }

    pub fn to_html(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) => text.as_str(),
                Segment::Region { region, .. } => region.inner_html(),
            })
            .collect()
    }
}

impl Page for HtmlPage {
    fn region_mut(&mut self, selector: &str) -> Option<&mut dyn Region> {
        self.segments.iter_mut().find_map(|segment| match segment {
            Segment::Region {
                selector: bound,
                region,
            } if bound.as_str() == selector => Some(region as &mut dyn Region),
            _ => None,
        })
    }
}

fn scan_tags(html: &str) -> Vec<Tag<'_>> {
    let mut tags = Vec::new();
    let mut pos = 0;
    let mut next_comment = COMMENT_RE.find(html);

    while let Some(caps) = TAG_RE.captures_at(html, pos) {
        let Some(whole) = caps.get(0) else { break };

        // 標籤屬性內的 `<!--` 不是註解
        if next_comment.is_some_and(|comment| comment.start() < pos) {
            next_comment = COMMENT_RE.find_at(html, pos);
        }
        if let Some(comment) = next_comment {
            if comment.start() < whole.start() {
                pos = comment.end();
                next_comment = COMMENT_RE.find_at(html, pos);
                continue;
            }
        }

        let attrs = caps.get(3).map_or("", |m| m.as_str());
        let tag = Tag {
            start: whole.start(),
            end: whole.end(),
            name: caps[2].to_ascii_lowercase(),
            closing: !caps[1].is_empty(),
            self_closing: attrs.trim_end().ends_with('/'),
            attrs,
        };
        pos = tag.end;

        if !tag.closing && !tag.self_closing && RAW_TEXT_ELEMENTS.contains(&tag.name.as_str()) {
            pos = raw_text_end(html, pos, &tag.name);
        }
        tags.push(tag);
    }
    tags
}

/// 找到 raw text 元素的結束標籤位置，找不到時視為延伸到文件結尾
fn raw_text_end(html: &str, from: usize, name: &str) -> usize {
    let closing = format!("</{}", name);
    html[from..]
        .to_ascii_lowercase()
        .find(&closing)
        .map_or(html.len(), |offset| from + offset)
}

/// 回傳區塊內容的位元組範圍：開始標籤之後到對應的結束標籤之前
fn locate_region(tags: &[Tag], selector: &str) -> Option<(usize, usize)> {
    let class = selector.strip_prefix('.')?;
    let open_index = tags
        .iter()
        .position(|tag| !tag.closing && tag.has_class(class))?;
    let open = &tags[open_index];
    if !open.can_hold_content() {
        return None;
    }

    let mut depth = 0usize;
    for tag in &tags[open_index + 1..] {
        if tag.name != open.name {
            continue;
        }
        if tag.closing {
            if depth == 0 {
                return Some((open.end, tag.start));
            }
            depth -= 1;
        } else if !tag.self_closing {
            depth += 1;
        }
    }
    None
}
