//! Tag queries over collections of taggable entities
//!
//! [`TagCollection`] is implemented for any slice of [`Taggable`] values, so a
//! `Vec<Memory>` can be aggregated, ranked and filtered directly. Every
//! operation is read-only and returns a freshly built result.
//!
//! # Examples
//!
//! ```
//! use cozy::domain::tags::{Match, Tag, TagCollection};
//! use cozy::domain::Memory;
//! use chrono::NaiveDate;
//!
//! let day = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
//! let memories = vec![
//!     Memory::with_tags(day, ["a", "b"]),
//!     Memory::with_tags(day, ["b"]),
//! ];
//!
//! assert_eq!(memories.tagged_with(&Tag::from("a")).len(), 1);
//! assert_eq!(memories.tagged_with_raw_tags(&["a".to_string(), "b".to_string()], Match::Any).len(), 2);
//! assert_eq!(memories.most_used_raw_tags(1), vec!["b".to_string()]);
//! ```

use super::tag::{Tag, Taggable};
use crate::error::CozyError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Number of tags returned by the ranking queries when no limit is given.
pub const DEFAULT_TAG_LIMIT: usize = 20;

/// How a list of query tags is matched against an entity's tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Match {
    /// Entity must carry every queried tag
    All,
    /// Entity must carry at least one queried tag
    #[default]
    Any,
    /// Entity must carry none of the queried tags
    None,
}

impl Match {
    /// Evaluate `query` against `tags`, walking the query in order and
    /// stopping at the first tag that decides the outcome.
    ///
    /// An empty query passes under `All` and `None` and fails under `Any`.
    pub fn accepts<O: Taggable>(self, tags: &[Tag<O>], query: &[Tag<O>]) -> bool {
        for tag in query {
            let present = tags.contains(tag);
            match self {
                Match::All if !present => return false,
                Match::Any if present => return true,
                Match::None if present => return false,
                _ => {}
            }
        }
        self != Match::Any
    }
}

impl FromStr for Match {
    type Err = CozyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Match::All),
            "any" => Ok(Match::Any),
            "none" => Ok(Match::None),
            _ => Err(CozyError::InvalidMatch(s.to_string())),
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Match::All => "all",
            Match::Any => "any",
            Match::None => "none",
        };
        f.write_str(name)
    }
}

/// Aggregation, ranking and filtering over an ordered collection of entities.
///
/// Ranking ties keep the order in which tags are first seen in
/// [`all_tags`](TagCollection::all_tags), for both most- and least-used.
pub trait TagCollection<T: Taggable> {
    /// Every tag of every entity, in collection order then per-entity order.
    fn all_tags(&self) -> Vec<Tag<T>>;

    /// [`all_tags`](TagCollection::all_tags) as raw values.
    fn all_raw_tags(&self) -> Vec<T::RawTag>;

    fn unique_tags(&self) -> HashSet<Tag<T>>;

    fn unique_raw_tags(&self) -> HashSet<T::RawTag>;

    /// Occurrences of each distinct tag; duplicates within one entity count individually.
    fn tags_frequency(&self) -> HashMap<Tag<T>, usize>;

    fn raw_tags_frequency(&self) -> HashMap<T::RawTag, usize>;

    /// Distinct tags with their counts, in first-seen order.
    fn tag_counts(&self) -> Vec<(Tag<T>, usize)>;

    fn raw_tag_counts(&self) -> Vec<(T::RawTag, usize)>;

    /// At most `limit` tags, most frequent first.
    fn most_used_tags(&self, limit: usize) -> Vec<Tag<T>>;

    fn most_used_raw_tags(&self, limit: usize) -> Vec<T::RawTag>;

    /// At most `limit` tags, least frequent first.
    fn least_used_tags(&self, limit: usize) -> Vec<Tag<T>>;

    fn least_used_raw_tags(&self, limit: usize) -> Vec<T::RawTag>;

    /// Entities carrying `tag`, in collection order.
    fn tagged_with(&self, tag: &Tag<T>) -> Vec<&T>;

    fn tagged_with_raw(&self, raw: &T::RawTag) -> Vec<&T>;

    /// Entities accepted by `policy` for `tags`, in collection order.
    fn tagged_with_tags(&self, tags: &[Tag<T>], policy: Match) -> Vec<&T>;

    fn tagged_with_raw_tags(&self, raw: &[T::RawTag], policy: Match) -> Vec<&T>;
}

impl<T: Taggable> TagCollection<T> for [T] {
    fn all_tags(&self) -> Vec<Tag<T>> {
        self.iter().flat_map(|item| item.tags().iter().cloned()).collect()
    }

    fn all_raw_tags(&self) -> Vec<T::RawTag> {
        self.all_tags().into_iter().map(Tag::into_raw).collect()
    }

    fn unique_tags(&self) -> HashSet<Tag<T>> {
        self.all_tags().into_iter().collect()
    }

    fn unique_raw_tags(&self) -> HashSet<T::RawTag> {
        self.all_raw_tags().into_iter().collect()
    }

    fn tags_frequency(&self) -> HashMap<Tag<T>, usize> {
        self.tag_counts().into_iter().collect()
    }

    fn raw_tags_frequency(&self) -> HashMap<T::RawTag, usize> {
        self.raw_tag_counts().into_iter().collect()
    }

    fn tag_counts(&self) -> Vec<(Tag<T>, usize)> {
        count_in_order(self.all_tags())
    }

    fn raw_tag_counts(&self) -> Vec<(T::RawTag, usize)> {
        count_in_order(self.all_raw_tags())
    }

    fn most_used_tags(&self, limit: usize) -> Vec<Tag<T>> {
        rank(self.tag_counts(), Ranking::Descending, limit)
    }

    fn most_used_raw_tags(&self, limit: usize) -> Vec<T::RawTag> {
        rank(self.raw_tag_counts(), Ranking::Descending, limit)
    }

    fn least_used_tags(&self, limit: usize) -> Vec<Tag<T>> {
        rank(self.tag_counts(), Ranking::Ascending, limit)
    }

    fn least_used_raw_tags(&self, limit: usize) -> Vec<T::RawTag> {
        rank(self.raw_tag_counts(), Ranking::Ascending, limit)
    }

    fn tagged_with(&self, tag: &Tag<T>) -> Vec<&T> {
        self.iter().filter(|item| item.has_tag(tag)).collect()
    }

    fn tagged_with_raw(&self, raw: &T::RawTag) -> Vec<&T> {
        self.tagged_with(&Tag::new(raw.clone()))
    }

    fn tagged_with_tags(&self, tags: &[Tag<T>], policy: Match) -> Vec<&T> {
        self.iter()
            .filter(|item| policy.accepts(item.tags(), tags))
            .collect()
    }

    fn tagged_with_raw_tags(&self, raw: &[T::RawTag], policy: Match) -> Vec<&T> {
        let tags: Vec<Tag<T>> = raw.iter().cloned().map(Tag::new).collect();
        self.tagged_with_tags(&tags, policy)
    }
}

#[derive(Debug, Clone, Copy)]
enum Ranking {
    Ascending,
    Descending,
}

/// Count distinct items, keeping the position of each item's first occurrence.
fn count_in_order<K: Clone + Eq + Hash>(items: Vec<K>) -> Vec<(K, usize)> {
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for item in items {
        match positions.get(&item) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }

    counts
}

/// Stable sort by count, then truncate.
fn rank<K>(mut counts: Vec<(K, usize)>, ranking: Ranking, limit: usize) -> Vec<K> {
    match ranking {
        Ranking::Descending => counts.sort_by(|a, b| b.1.cmp(&a.1)),
        Ranking::Ascending => counts.sort_by(|a, b| a.1.cmp(&b.1)),
    }
    counts.into_iter().take(limit).map(|(key, _)| key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Entry {
        name: &'static str,
        tags: Vec<Tag<Entry>>,
    }

    impl Entry {
        fn new(name: &'static str, tags: &[&str]) -> Self {
            Entry {
                name,
                tags: tags.iter().map(|t| Tag::from(*t)).collect(),
            }
        }
    }

    impl Taggable for Entry {
        type RawTag = String;

        fn tags(&self) -> &[Tag<Self>] {
            &self.tags
        }

        fn tags_mut(&mut self) -> &mut Vec<Tag<Self>> {
            &mut self.tags
        }
    }

    fn names(entries: Vec<&Entry>) -> Vec<&'static str> {
        entries.into_iter().map(|e| e.name).collect()
    }

    fn query(tags: &[&str]) -> Vec<Tag<Entry>> {
        tags.iter().map(|t| Tag::from(*t)).collect()
    }

    fn sample() -> Vec<Entry> {
        vec![
            Entry::new("e1", &["a", "b"]),
            Entry::new("e2", &["b"]),
            Entry::new("e3", &[]),
        ]
    }

    #[test]
    fn test_match_parse_and_display() {
        assert_eq!("all".parse::<Match>().unwrap(), Match::All);
        assert_eq!("ANY".parse::<Match>().unwrap(), Match::Any);
        assert_eq!("none".parse::<Match>().unwrap(), Match::None);
        assert!(matches!(
            "some".parse::<Match>(),
            Err(CozyError::InvalidMatch(_))
        ));
        assert_eq!(Match::None.to_string(), "none");
        assert_eq!(Match::default(), Match::Any);
    }

    #[test]
    fn test_all_tags_preserves_order() {
        let entries = vec![Entry::new("x", &["b", "a"]), Entry::new("y", &["a", "c"])];
        assert_eq!(entries.all_raw_tags(), vec!["b", "a", "a", "c"]);
    }

    #[test]
    fn test_match_all() {
        let entries = sample();
        assert_eq!(
            names(entries.tagged_with_tags(&query(&["a", "b"]), Match::All)),
            vec!["e1"]
        );
    }

    #[test]
    fn test_match_any() {
        let entries = sample();
        assert_eq!(
            names(entries.tagged_with_tags(&query(&["a", "b"]), Match::Any)),
            vec!["e1", "e2"]
        );
    }

    #[test]
    fn test_match_none() {
        let entries = sample();
        assert_eq!(
            names(entries.tagged_with_tags(&query(&["a", "b"]), Match::None)),
            vec!["e3"]
        );
    }

    #[test]
    fn test_empty_query() {
        let entries = sample();
        assert_eq!(
            names(entries.tagged_with_tags(&[], Match::All)),
            vec!["e1", "e2", "e3"]
        );
        assert!(entries.tagged_with_tags(&[], Match::Any).is_empty());
        assert_eq!(
            names(entries.tagged_with_tags(&[], Match::None)),
            vec!["e1", "e2", "e3"]
        );
    }

    #[test]
    fn test_duplicate_query_tags_are_harmless() {
        let entries = sample();
        assert_eq!(
            names(entries.tagged_with_tags(&query(&["b", "b"]), Match::All)),
            vec!["e1", "e2"]
        );
        assert_eq!(
            names(entries.tagged_with_tags(&query(&["a", "a"]), Match::None)),
            vec!["e2", "e3"]
        );
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let entries = sample();
        assert!(entries.tagged_with_raw(&"A".to_string()).is_empty());
    }

    #[test]
    fn test_tagged_with_single() {
        let entries = sample();
        assert_eq!(names(entries.tagged_with(&"b".into())), vec!["e1", "e2"]);
        assert_eq!(names(entries.tagged_with_raw(&"a".to_string())), vec!["e1"]);
    }

    #[test]
    fn test_frequency_counts_duplicates_within_entity() {
        let entries = vec![Entry::new("x", &["a", "a", "b"]), Entry::new("y", &["a"])];
        let freq = entries.raw_tags_frequency();
        assert_eq!(freq["a"], 3);
        assert_eq!(freq["b"], 1);
        assert_eq!(entries.tags_frequency()[&Tag::from("a")], 3);
    }

    #[test]
    fn test_ranking_ties_keep_first_seen_order() {
        let entries = vec![
            Entry::new("x", &["c", "a", "b"]),
            Entry::new("y", &["b", "d"]),
        ];
        assert_eq!(entries.most_used_raw_tags(10), vec!["b", "c", "a", "d"]);
        assert_eq!(entries.least_used_raw_tags(10), vec!["c", "a", "d", "b"]);
    }

    #[test]
    fn test_ranking_respects_limit() {
        let entries = vec![Entry::new("x", &["a", "b", "c", "a"])];
        assert_eq!(entries.most_used_tags(1), vec![Tag::from("a")]);
        assert_eq!(entries.least_used_tags(2).len(), 2);
        assert!(entries.most_used_tags(0).is_empty());
    }

    #[test]
    fn test_empty_collection() {
        let entries: Vec<Entry> = Vec::new();
        assert!(entries.all_tags().is_empty());
        assert!(entries.unique_tags().is_empty());
        assert!(entries.tags_frequency().is_empty());
        assert!(entries.most_used_tags(DEFAULT_TAG_LIMIT).is_empty());
    }
}
