use anyhow::{anyhow, Context};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

lazy_static! {
    static ref PDF_LINKS_REGEX: Regex =
        Regex::new(r#"https://[^"'\s<>]+/\d{4}-\d{2}-\d{2}_[^"'\s<>/]+\.pdf"#)
            .expect("PDF_LINKS_REGEX to compile");
}

/// Finds report download links on the listing page.
#[derive(Debug, Clone)]
pub struct PdfLinks {
    pattern: Regex,
}

impl Default for PdfLinks {
    fn default() -> Self {
        Self::new(PDF_LINKS_REGEX.clone())
    }
}

impl PdfLinks {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }

    /// Links in page order, duplicates dropped.
    pub fn find(&self, page_content: &str) -> anyhow::Result<Vec<Url>> {
        self.pattern
            .find_iter(page_content)
            .map(|a_match| a_match.as_str())
            .unique()
            .map(|link| Url::parse(link).with_context(|| format!("Invalid URL {link}")))
            .collect()
    }
}

pub fn file_name_of(url: &Url) -> anyhow::Result<&str> {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| anyhow!("{url} has no file name"))
}
