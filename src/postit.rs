//! Core data structures for the cogs application.
//!
//! This module contains the primary types used throughout the application,
//! including the PostIt and Tag structures.
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Represents a single post-it card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostIt {
    /// Unique identifier, assigned by the catalog at creation
    pub id: u32,
    /// Text displayed on the card
    pub text: String,
    /// Tag used for filtering
    pub tag: Tag,
    /// Display color; opaque to the core, only the UI interprets it
    pub color: String,
}

impl PostIt {
    /// Creates a new post-it with the given id, text, tag and color
    pub fn new(id: u32, text: impl Into<String>, tag: Tag, color: impl Into<String>) -> Self {
        PostIt {
            id,
            text: text.into(),
            tag,
            color: color.into(),
        }
    }

    /// A post-it is valid iff its text is non-empty
    pub fn is_valid(&self) -> bool {
        !self.text.is_empty()
    }
}

/// The closed set of tags a post-it can carry.
///
/// `All` is a wildcard used only for filtering; no post-it is ever
/// created with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Tag {
    All,
    Leadership,
    Marketing,
    Entrepreneurship,
    Finance,
    Productivity,
    Creativity,
}

impl Tag {
    /// All tags in display order, the wildcard first
    pub fn all() -> &'static [Tag] {
        &[
            Tag::All,
            Tag::Leadership,
            Tag::Marketing,
            Tag::Entrepreneurship,
            Tag::Finance,
            Tag::Productivity,
            Tag::Creativity,
        ]
    }

    /// Human-readable label for the tag
    pub fn label(&self) -> &'static str {
        match self {
            Tag::All => "All",
            Tag::Leadership => "Leadership",
            Tag::Marketing => "Marketing",
            Tag::Entrepreneurship => "Entrepreneurship",
            Tag::Finance => "Finance",
            Tag::Productivity => "Productivity",
            Tag::Creativity => "Creativity",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_it_with_text_is_valid() {
        let card = PostIt::new(1, "Business plan 2025", Tag::Entrepreneurship, "blue");
        assert!(card.is_valid());
    }

    #[test]
    fn post_it_with_empty_text_is_invalid() {
        let card = PostIt::new(2, "", Tag::Marketing, "pink");
        assert!(!card.is_valid());
    }

    #[test]
    fn tag_labels_are_unique() {
        let labels: std::collections::HashSet<_> =
            Tag::all().iter().map(|t| t.label()).collect();
        assert_eq!(labels.len(), Tag::all().len());
    }
}
