use crate::parsers::{Document, Element};
use scraper::{ElementRef, Html, Selector};

/// HTML document backed by the `scraper` parser
pub struct HtmlDocument {
    doc: Html,
}

impl HtmlDocument {
    /// Parses a full HTML document. Malformed markup is repaired, never rejected.
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }
}

fn to_element(node: ElementRef<'_>) -> Element {
    let value = node.value();
    Element {
        name: value.name().to_string(),
        attrs: value
            .attrs()
            .map(|(key, val)| (key.to_string(), val.to_string()))
            .collect(),
        text: node.text().collect(),
    }
}

impl Document for HtmlDocument {
    fn find_all(&self, tags: &[&str]) -> Vec<Element> {
        if tags.is_empty() {
            return Vec::new();
        }

        // A selector group matches in document order, not per selector
        let group = tags.join(", ");
        let selector = match Selector::parse(&group) {
            Ok(selector) => selector,
            Err(e) => {
                ::log::warn!("Invalid tag list {:?}: {}", tags, e);
                return Vec::new();
            }
        };

        let elements = self
            .doc
            .select(&selector)
            .map(to_element)
            .collect::<Vec<_>>();

        ::log::debug!("HTML parser found {} {:?} elements", elements.len(), tags);
        elements
    }

    fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.doc
            .select(&selector)
            .next()
            .map(|title| title.text().collect())
    }
}
