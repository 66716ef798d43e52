use anyhow::{Context, Result};
use regex::Regex;

const TITLE_PATTERN: &str = r"(?is)<title>(.*?)</title>";
const OG_TITLE_PATTERN: &str =
    r#"(?is)<meta[^>]+property=["']og:title["'][^>]+content=["']([^"']+)["']"#;
const OG_DESCRIPTION_PATTERN: &str =
    r#"(?is)<meta[^>]+property=["']og:description["'][^>]+content=["']([^"']+)["']"#;
const DESCRIPTION_PATTERN: &str =
    r#"(?is)<meta[^>]+name=["']description["'][^>]+content=["']([^"']+)["']"#;

/// The four fields pulled out of a fetched page. Missing fields are empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    pub title: String,
    pub og_title: String,
    pub og_description: String,
    pub description: String,
}

impl MetadataRecord {
    /// Field names paired with their values, in print order.
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("title", self.title.as_str()),
            ("og_title", self.og_title.as_str()),
            ("og_description", self.og_description.as_str()),
            ("description", self.description.as_str()),
        ]
    }

    pub fn found_count(&self) -> usize {
        self.fields().iter().filter(|(_, value)| !value.is_empty()).count()
    }
}

/// Extracts the title, Open Graph title/description and meta description
/// from raw HTML text.
///
/// Each field is an independent, case-insensitive search over the whole
/// document and the first match wins. Attributes must appear in the usual
/// order (`property`/`name` before `content`); anything else is left empty.
/// Values are trimmed but entities are not unescaped.
///
/// # Errors
///
/// Only fails if one of the built-in patterns cannot be compiled.
pub fn extract_meta(html_content: &str) -> Result<MetadataRecord> {
    Ok(MetadataRecord {
        title: capture_first(TITLE_PATTERN, html_content)?,
        og_title: capture_first(OG_TITLE_PATTERN, html_content)?,
        og_description: capture_first(OG_DESCRIPTION_PATTERN, html_content)?,
        description: capture_first(DESCRIPTION_PATTERN, html_content)?,
    })
}

fn capture_first(pattern: &str, html_content: &str) -> Result<String> {
    let regex = Regex::new(pattern).with_context(|| format!("Failed to compile regex: {}", pattern))?;

    Ok(regex
        .captures(html_content)
        .and_then(|caps| caps.get(1).map(|match_| strip_value(match_.as_str()).to_string()))
        .unwrap_or_default())
}

/// Trims whitespace, counting the ASCII information separators
/// U+001C..=U+001F as whitespace too.
fn strip_value(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}
