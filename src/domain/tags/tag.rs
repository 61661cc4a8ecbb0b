//! Type-safe tags
//!
//! A [`Tag`] wraps a raw identifier and is tied to the entity type it belongs
//! to, so a tag made for one kind of entity cannot be attached to another.
//!
//! # Examples
//!
//! ```
//! use cozy::domain::tags::{Tag, Taggable};
//!
//! #[derive(Default)]
//! struct Entry {
//!     tags: Vec<Tag<Entry>>,
//! }
//!
//! impl Taggable for Entry {
//!     type RawTag = String;
//!
//!     fn tags(&self) -> &[Tag<Self>] {
//!         &self.tags
//!     }
//!
//!     fn tags_mut(&mut self) -> &mut Vec<Tag<Self>> {
//!         &mut self.tags
//!     }
//! }
//!
//! let mut entry = Entry::default();
//! entry.add_tag("travel".into());
//! assert!(entry.has_tag(&Tag::from("travel")));
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

/// An entity that carries an ordered list of tags.
///
/// There are no associated type defaults in Rust; by convention entities use
/// `String` as their raw tag type unless they need something else.
pub trait Taggable: Sized {
    /// The value backing this entity's tags.
    type RawTag: Clone + Eq + Hash;

    /// The tags of this entity, in the order they were assigned.
    fn tags(&self) -> &[Tag<Self>];

    /// Mutable access to the tag list.
    fn tags_mut(&mut self) -> &mut Vec<Tag<Self>>;

    /// Append a tag. Duplicates are kept.
    fn add_tag(&mut self, tag: Tag<Self>) {
        self.tags_mut().push(tag);
    }

    /// Whether this entity carries exactly this tag.
    fn has_tag(&self, tag: &Tag<Self>) -> bool {
        self.tags().contains(tag)
    }
}

/// A tag for entities of type `O`, backed by `O::RawTag`.
///
/// Equality, hashing and ordering all come from the raw value alone.
pub struct Tag<O: Taggable> {
    raw: O::RawTag,
    owner: PhantomData<fn() -> O>,
}

impl<O: Taggable> Tag<O> {
    pub fn new(raw: O::RawTag) -> Self {
        Tag {
            raw,
            owner: PhantomData,
        }
    }

    pub fn raw_value(&self) -> &O::RawTag {
        &self.raw
    }

    pub fn into_raw(self) -> O::RawTag {
        self.raw
    }
}

impl<O: Taggable> Clone for Tag<O> {
    fn clone(&self) -> Self {
        Tag::new(self.raw.clone())
    }
}

impl<O: Taggable> PartialEq for Tag<O> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<O: Taggable> Eq for Tag<O> {}

impl<O: Taggable> Hash for Tag<O> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<O> PartialOrd for Tag<O>
where
    O: Taggable,
    O::RawTag: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<O> Ord for Tag<O>
where
    O: Taggable,
    O::RawTag: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<O> fmt::Debug for Tag<O>
where
    O: Taggable,
    O::RawTag: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tag").field(&self.raw).finish()
    }
}

impl<O> fmt::Display for Tag<O>
where
    O: Taggable,
    O::RawTag: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw.fmt(f)
    }
}

// Literal conveniences, available whenever the raw type converts the same way.

impl<'a, O> From<&'a str> for Tag<O>
where
    O: Taggable,
    O::RawTag: From<&'a str>,
{
    fn from(value: &'a str) -> Self {
        Tag::new(value.into())
    }
}

impl<O> From<String> for Tag<O>
where
    O: Taggable,
    O::RawTag: From<String>,
{
    fn from(value: String) -> Self {
        Tag::new(value.into())
    }
}

impl<O> From<i64> for Tag<O>
where
    O: Taggable,
    O::RawTag: From<i64>,
{
    fn from(value: i64) -> Self {
        Tag::new(value.into())
    }
}

impl<O> From<u32> for Tag<O>
where
    O: Taggable,
    O::RawTag: From<u32>,
{
    fn from(value: u32) -> Self {
        Tag::new(value.into())
    }
}

impl<O> FromStr for Tag<O>
where
    O: Taggable,
    O::RawTag: FromStr,
{
    type Err = <O::RawTag as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Tag::new)
    }
}

// A tag is encoded as its raw value, with no surrounding envelope.

impl<O> Serialize for Tag<O>
where
    O: Taggable,
    O::RawTag: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de, O> Deserialize<'de> for Tag<O>
where
    O: Taggable,
    O::RawTag: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        O::RawTag::deserialize(deserializer).map(Tag::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Default)]
    struct Note {
        tags: Vec<Tag<Note>>,
    }

    impl Taggable for Note {
        type RawTag = String;

        fn tags(&self) -> &[Tag<Self>] {
            &self.tags
        }

        fn tags_mut(&mut self) -> &mut Vec<Tag<Self>> {
            &mut self.tags
        }
    }

    struct Track {
        tags: Vec<Tag<Track>>,
    }

    impl Taggable for Track {
        type RawTag = u32;

        fn tags(&self) -> &[Tag<Self>] {
            &self.tags
        }

        fn tags_mut(&mut self) -> &mut Vec<Tag<Self>> {
            &mut self.tags
        }
    }

    #[derive(Serialize, Deserialize)]
    struct NoteRecord {
        tags: Vec<Tag<Note>>,
    }

    #[derive(Serialize, Deserialize)]
    struct TrackRecord {
        tags: Vec<Tag<Track>>,
    }

    #[test]
    fn test_equality_follows_raw_value() {
        let a: Tag<Note> = Tag::new("work".to_string());
        let b: Tag<Note> = "work".into();
        let c: Tag<Note> = "Work".into();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_hash_follows_raw_value() {
        let mut set: HashSet<Tag<Note>> = HashSet::new();
        set.insert("work".into());
        set.insert(Tag::new("work".to_string()));
        set.insert("home".into());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_integer_literal_tags() {
        let tag: Tag<Track> = 7u32.into();
        assert_eq!(*tag.raw_value(), 7);
        assert_eq!(tag.into_raw(), 7);
    }

    #[test]
    fn test_from_str_uses_raw_parser() {
        let tag: Tag<Track> = "42".parse().unwrap();
        assert_eq!(tag, Tag::new(42));
        assert!("forty-two".parse::<Tag<Track>>().is_err());
    }

    #[test]
    fn test_display_prints_raw_value() {
        let tag: Tag<Note> = "garden".into();
        assert_eq!(tag.to_string(), "garden");
        assert_eq!(format!("{:?}", tag), "Tag(\"garden\")");
    }

    #[test]
    fn test_add_tag_keeps_duplicates_in_order() {
        let mut note = Note::default();
        note.add_tag("b".into());
        note.add_tag("a".into());
        note.add_tag("b".into());
        let raw: Vec<&str> = note.tags().iter().map(|t| t.raw_value().as_str()).collect();
        assert_eq!(raw, vec!["b", "a", "b"]);
        assert!(note.has_tag(&"a".into()));
        assert!(!note.has_tag(&"c".into()));
    }

    #[test]
    fn test_serializes_as_bare_raw_value() {
        let record = NoteRecord {
            tags: vec!["work".into(), "home".into()],
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"tags":["work","home"]}"#);

        let toml_text = toml::to_string(&record).unwrap();
        assert_eq!(toml_text.trim(), r#"tags = ["work", "home"]"#);
    }

    #[test]
    fn test_round_trip() {
        let tag: Tag<Track> = Tag::new(1234);
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, "1234");
        let back: Tag<Track> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tag);
    }

    #[test]
    fn test_decode_error_is_not_defaulted() {
        let result: std::result::Result<TrackRecord, _> = toml::from_str(r#"tags = ["seven"]"#);
        assert!(result.is_err());

        let result: std::result::Result<Tag<Track>, _> = serde_json::from_str("-1");
        assert!(result.is_err());
    }
}
