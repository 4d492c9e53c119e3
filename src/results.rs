use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered collection of unique headlines, kept in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct HeadlineSequence {
    headlines: Vec<String>,
    seen: HashSet<String>,
}

impl HeadlineSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a headline unless it is blank or already present.
    ///
    /// Returns whether the headline was added.
    pub fn push(&mut self, headline: impl Into<String>) -> bool {
        let headline = headline.into();
        if headline.trim().is_empty() || self.seen.contains(&headline) {
            return false;
        }
        self.seen.insert(headline.clone());
        self.headlines.push(headline);
        true
    }

    pub fn len(&self) -> usize {
        self.headlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headlines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.headlines.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.headlines
    }
}

impl<S: Into<String>> FromIterator<S> for HeadlineSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut sequence = Self::new();
        sequence.extend(iter);
        sequence
    }
}

impl<S: Into<String>> Extend<S> for HeadlineSequence {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for headline in iter {
            self.push(headline);
        }
    }
}

impl From<Vec<String>> for HeadlineSequence {
    fn from(headlines: Vec<String>) -> Self {
        headlines.into_iter().collect()
    }
}

impl From<HeadlineSequence> for Vec<String> {
    fn from(sequence: HeadlineSequence) -> Self {
        sequence.headlines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let sequence: HeadlineSequence = ["B", "A", "B", "C", "A"].into_iter().collect();
        assert_eq!(sequence.as_slice(), ["B", "A", "C"]);
    }

    #[test]
    fn test_converts_into_plain_vec() {
        let sequence: HeadlineSequence = ["Left", "Right", "Left"].into_iter().collect();
        let plain: Vec<String> = sequence.into();
        assert_eq!(plain, ["Left", "Right"]);
    }

    #[test]
    fn test_blank_entries_are_rejected() {
        let mut sequence = HeadlineSequence::new();
        assert!(!sequence.push(""));
        assert!(!sequence.push("   \n"));
        assert!(sequence.is_empty());
    }

    #[test]
    fn test_equality_is_exact() {
        let sequence: HeadlineSequence = ["Headline", "headline", "Headline "].into_iter().collect();
        assert_eq!(sequence.len(), 3);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let sequence: HeadlineSequence = ["One", "Two", "One"].into_iter().collect();
        let json = serde_json::to_string(&sequence).unwrap();
        assert_eq!(json, r#"["One","Two"]"#);

        let back: HeadlineSequence = serde_json::from_str(r#"["X","X","Y"]"#).unwrap();
        assert_eq!(back.as_slice(), ["X", "Y"]);
    }
}
