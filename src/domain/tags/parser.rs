//! Search text parsing
//!
//! Splits what a user types into a search box into hashtags and free-text
//! terms: `"#travel beach #family"` queries the tags `travel` and `family`
//! and the term `beach`.

use regex::Regex;
use std::sync::OnceLock;

/// Regex for tag names: word, word-with-dashes, word_with_underscores
fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[\p{L}\p{N}_-]+$").unwrap())
}

/// Tag name of `word`, with at most one leading `#` removed.
///
/// Returns `None` when what remains is empty or has characters a tag cannot hold.
pub fn parse_tag(word: &str) -> Option<&str> {
    let name = word.strip_prefix('#').unwrap_or(word);
    tag_regex().is_match(name).then_some(name)
}

/// Tags and terms extracted from search text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Hashtags without the leading `#`, verbatim and in input order
    pub tags: Vec<String>,

    /// Remaining words, in input order
    pub terms: Vec<String>,
}

impl SearchQuery {
    pub fn parse(text: &str) -> Self {
        let mut query = SearchQuery::default();

        for word in text.split_whitespace() {
            // A lone "#" or "#?!" is neither a tag nor a term
            if !word.starts_with('#') {
                query.terms.push(word.to_string());
            } else if let Some(tag) = parse_tag(word) {
                query.tags.push(tag.to_string());
            }
        }

        query
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.terms.is_empty()
    }
}
