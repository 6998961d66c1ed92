//! In-memory post-it board.
//!
//! The catalog owns the post-its and free-text annotations shown on the
//! board, together with the currently selected tag filter. It is purely
//! in-memory: post-its added at runtime do not survive a restart.

use log::{debug, info};

use crate::{CogsError, PostIt, Result, Tag};

/// Partitions a slice into consecutive rows of `size` elements.
///
/// The final row holds the remainder (`1..=size` elements) when the input
/// length is not a multiple of `size`. An empty input yields no rows.
/// `size` is clamped to at least 1.
pub fn chunk_rows<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    let size = size.max(1);
    items.chunks(size).map(|row| row.to_vec()).collect()
}

/// Manages the post-its and annotations of the board.
pub struct Catalog {
    /// All post-its, in insertion order
    post_its: Vec<PostIt>,

    /// Free-text annotations, append-only
    annotations: Vec<String>,

    /// Currently selected tag filter
    selected_tag: Tag,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Creates an empty catalog with the wildcard filter selected
    pub fn new() -> Self {
        Catalog {
            post_its: Vec::new(),
            annotations: Vec::new(),
            selected_tag: Tag::All,
        }
    }

    /// Creates a catalog pre-populated with the demo board content
    pub fn with_demo_content() -> Self {
        let mut catalog = Catalog::new();
        catalog.post_its = vec![
            PostIt::new(1, "So many ideas, oh how I have ideas", Tag::Leadership, "yellow"),
            PostIt::new(2, "Social media strategy", Tag::Marketing, "green"),
            PostIt::new(3, "Business plan 2025", Tag::Entrepreneurship, "blue"),
            PostIt::new(4, "New advertising campaign", Tag::Marketing, "pink"),
            PostIt::new(5, "Monthly expense tracking", Tag::Finance, "purple"),
        ];
        catalog.annotations = vec![
            "Here is a user annotation, bla bla bla, running a business".to_string(),
            "Meeting with the marketing team next Tuesday".to_string(),
            "Need to review the project budget".to_string(),
        ];
        catalog
    }

    /// Returns the currently selected tag
    pub fn selected_tag(&self) -> Tag {
        self.selected_tag
    }

    /// Sets the current tag filter
    ///
    /// This is a pure state transition; no other state is touched.
    pub fn select_tag(&mut self, tag: Tag) {
        debug!("Selecting tag filter: {}", tag);
        self.selected_tag = tag;
    }

    /// Returns the post-its matching the current selection, in insertion order
    pub fn filtered(&self) -> Vec<PostIt> {
        self.filtered_by(self.selected_tag)
    }

    /// Returns the post-its matching `tag`, in insertion order.
    ///
    /// `Tag::All` is the wildcard: the full sequence is returned unchanged.
    /// No matches yields an empty vector, never an error.
    pub fn filtered_by(&self, tag: Tag) -> Vec<PostIt> {
        if tag == Tag::All {
            return self.post_its.clone();
        }
        self.post_its
            .iter()
            .filter(|p| p.tag == tag)
            .cloned()
            .collect()
    }

    /// Partitions the currently filtered post-its into rows of `columns`
    /// elements for grid display
    pub fn chunked(&self, columns: usize) -> Vec<Vec<PostIt>> {
        chunk_rows(&self.filtered(), columns)
    }

    /// Appends a new post-it to the board and returns its id.
    ///
    /// Fails with [`CogsError::InvalidPostIt`] when `text` is empty, before
    /// any state change. The id is one greater than the largest existing id
    /// (1 on an empty board).
    ///
    /// # Arguments
    ///
    /// * `text` - Text of the post-it, must be non-empty
    /// * `tag` - Tag for filtering
    /// * `color` - Opaque display color
    pub fn add_post_it(
        &mut self,
        text: impl Into<String>,
        tag: Tag,
        color: impl Into<String>,
    ) -> Result<u32> {
        let text = text.into();
        if text.is_empty() {
            return Err(CogsError::InvalidPostIt {
                message: "post-it text must not be empty".to_string(),
            });
        }

        let new_id = self.post_its.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let post_it = PostIt::new(new_id, text, tag, color.into());
        info!("Adding post-it {} with tag {}", new_id, post_it.tag);
        self.post_its.push(post_it);
        Ok(new_id)
    }

    /// Appends a free-text annotation
    pub fn add_annotation(&mut self, text: impl Into<String>) {
        self.annotations.push(text.into());
    }

    /// Returns all annotations in insertion order
    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    /// Returns all post-its regardless of the current filter
    pub fn post_its(&self) -> &[PostIt] {
        &self.post_its
    }
}
