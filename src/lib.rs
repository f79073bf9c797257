//! Library entry for folio: typed portfolio content.
//!
//! - [`contributions`]: validated weekly contribution series for the activity chart
//! - [`i18n`]: per-locale page content built by deep-merging overrides onto the English base
//! - [`settings`]: user settings file for the command-line tool
//! - [`logging`]: tracing subscriber setup

pub mod contributions;
pub mod i18n;
pub mod logging;
pub mod settings;
