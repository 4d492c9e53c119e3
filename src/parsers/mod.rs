pub mod headlines;
pub mod html;


/// An element found in a parsed document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Lowercase tag name
    pub name: String,
    /// Attributes in source order
    pub attrs: Vec<(String, String)>,
    /// Concatenated text of all descendant text nodes, untrimmed
    pub text: String,
}

impl Element {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            text: text.into(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Value of the named attribute, if present
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Element text with leading and trailing whitespace removed
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }
}

/// Read access to a parsed markup document
pub trait Document {
    /// All elements whose tag is one of `tags`, in document order
    fn find_all(&self, tags: &[&str]) -> Vec<Element>;

    /// Text of the document `<title>`, if the document has one
    fn title(&self) -> Option<String>;
}
