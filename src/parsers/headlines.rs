use crate::parsers::Document;
use crate::parsers::html::HtmlDocument;
use crate::results::HeadlineSequence;
use serde::{Deserialize, Serialize};

/// Heading levels harvested by the heading strategy
pub const HEADING_TAGS: [&str; 3] = ["h1", "h2", "h3"];

/// Length thresholds for headline candidates.
///
/// A candidate is kept only when its character count is strictly greater
/// than the threshold for its strategy. The `<title>` fallback has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorOptions {
    /// Threshold for trimmed `h1`/`h2`/`h3` text
    pub min_heading_len: usize,
    /// Threshold for anchor titles and anchor text
    pub min_anchor_len: usize,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            min_heading_len: 5,
            min_anchor_len: 10,
        }
    }
}

/// Extracts headlines from raw HTML with default options
///
/// Candidates are harvested in this order, and the first occurrence of a
/// string decides its position:
/// - trimmed text of every `h1`, `h2` and `h3`
/// - the `title` attribute of every `a`, or its trimmed text when the
///   attribute is missing or empty
/// - the trimmed document `<title>`
pub fn extract(html: &str) -> HeadlineSequence {
    extract_with_options(html, &ExtractorOptions::default())
}

/// Extracts headlines from raw HTML with specific options
pub fn extract_with_options(html: &str, options: &ExtractorOptions) -> HeadlineSequence {
    let doc = HtmlDocument::parse(html);
    extract_from_document(&doc, options)
}

/// Runs all strategies against an already parsed document
pub fn extract_from_document<D: Document + ?Sized>(
    doc: &D,
    options: &ExtractorOptions,
) -> HeadlineSequence {
    let headings = heading_candidates(doc, options);
    let anchors = anchor_candidates(doc, options);
    let title = title_candidate(doc);

    ::log::debug!(
        "Candidates: {} from headings, {} from anchors, title {}",
        headings.len(),
        anchors.len(),
        if title.is_some() { "present" } else { "absent" }
    );

    let headlines = headings
        .into_iter()
        .chain(anchors)
        .chain(title)
        .collect::<HeadlineSequence>();

    ::log::debug!("Kept {} unique headlines", headlines.len());
    headlines
}

//
// Strategies
//

/// Trimmed heading text longer than `min_heading_len`, in document order
pub fn heading_candidates<D: Document + ?Sized>(doc: &D, options: &ExtractorOptions) -> Vec<String> {
    doc.find_all(&HEADING_TAGS)
        .iter()
        .map(|heading| heading.trimmed_text())
        .filter(|text| exceeds(text, options.min_heading_len))
        .map(str::to_string)
        .collect()
}

/// Anchor titles (or trimmed anchor text) longer than `min_anchor_len`
pub fn anchor_candidates<D: Document + ?Sized>(doc: &D, options: &ExtractorOptions) -> Vec<String> {
    doc.find_all(&["a"])
        .iter()
        .map(|anchor| match anchor.attr("title") {
            Some(title) if !title.is_empty() => title,
            _ => anchor.trimmed_text(),
        })
        .filter(|text| exceeds(text, options.min_anchor_len))
        .map(str::to_string)
        .collect()
}

/// Trimmed document title, if present and not blank
pub fn title_candidate<D: Document + ?Sized>(doc: &D) -> Option<String> {
    doc.title()
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
}

fn exceeds(text: &str, threshold: usize) -> bool {
    text.chars().count() > threshold
}
