//! Localized page content for folio.
//!
//! This module builds one complete content tree per supported locale.
//!
//! # Overview
//!
//! Only the base locale (`en`) is authored in full. Every other locale is a
//! partial override that is deep-merged onto the base once, when the
//! `LocalizedContentStore` is built:
//! - **Records** merge field by field
//! - **Lists** merge by position: override entry `i` patches base entry `i`,
//!   `~` entries are holes, and a populated entry past the end of the base list
//!   is an error (`MergeIndexOutOfBounds`)
//! - **Scalars** replace the base value
//!
//! # Content Files
//!
//! Content is stored as YAML in `data/locales/{locale}.yml` and compiled into
//! the binary. A directory with the same layout can be loaded instead:
//!
//! ```yaml
//! # ja.yml
//! skills:
//!   title: "スキル"
//! projects:
//!   projects:
//!     - ~
//!     - description: "..."
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use folio::i18n::{LocaleKey, LocalizedContentStore};
//!
//! let store = LocalizedContentStore::embedded()?;
//! let ja = store.get(LocaleKey::Ja);
//! println!("{}", ja.oss_contributions.title);
//!
//! // User-supplied codes: unknown locales fall back to English.
//! let page = store.get_or_base("fr");
//! # let _ = page;
//! # Ok::<(), folio::i18n::ContentError>(())
//! ```
//!
//! # Error Handling
//!
//! - Broken content (parse errors, missing fields, out-of-bounds list patches)
//!   fails the build with a `ContentError` naming the locale and field path
//! - Unknown locale codes are the only recoverable error; `get_or_base` and
//!   `resolve_locale` fall back to the base locale and log the decision
//! - The `{myname}` placeholder is carried through verbatim; substituting it is
//!   up to the renderer

pub mod content;
mod detection;
mod error;
pub mod loader;
mod locale;
pub mod merge;
pub mod overrides;
mod resolver;
mod store;

pub use content::{
    ContentTree, Intro, NAME_PLACEHOLDER, OssContribution, OssContributions, Project,
    ProjectCategory, Projects, PullRequest, Skills,
};
pub use detection::{detect_system_locale, parse_locale_string};
pub use error::ContentError;
pub use locale::LocaleKey;
pub use merge::{Merge, MergeError};
pub use overrides::ContentOverride;
pub use resolver::{match_supported, resolve_locale};
pub use store::LocalizedContentStore;
