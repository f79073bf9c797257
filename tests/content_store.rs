//! Integration tests for the localized content store.

#[path = "content_store/content_dir.rs"]
mod content_dir;
#[path = "content_store/merge_semantics.rs"]
mod merge_semantics;
