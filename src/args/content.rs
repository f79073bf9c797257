//! `folio content` and `folio locales`.

use std::error::Error;
use std::fmt::Write;

use folio::i18n::{ContentTree, LocaleKey, LocalizedContentStore};
use folio::settings::OutputFormat;
use serde::Serialize;

use crate::args::output::structured;

/// What: Render the resolved content tree for one locale.
///
/// Inputs:
/// - `store`: Built content store
/// - `locale`: Locale to render
/// - `format`: Output format
///
/// Output:
/// - Text ready to print
///
/// # Errors
/// - Returns the serializer error for structured output
pub fn handle_content(
    store: &LocalizedContentStore,
    locale: LocaleKey,
    format: OutputFormat,
) -> Result<String, Box<dyn Error>> {
    let tree = store.get(locale);
    match format {
        OutputFormat::Text => Ok(render_tree(locale, tree)),
        _ => structured(tree, format),
    }
}

fn render_tree(locale: LocaleKey, tree: &ContentTree) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {}", locale.label(), tree.intro.greeting);
    for paragraph in &tree.intro.paragraphs {
        for line in paragraph.lines() {
            let _ = writeln!(out, "  {line}");
        }
    }

    let skills = &tree.skills;
    let _ = writeln!(out, "\n{}", skills.title);
    let _ = writeln!(out, "  {}: (chart)", skills.most_used_languages_label);
    let _ = writeln!(
        out,
        "  {} / {}: {}",
        skills.frameworks_label,
        skills.libraries_label,
        skills.frameworks_and_libraries.join(", ")
    );

    let _ = writeln!(out, "\n{}", tree.projects.title);
    for (category, projects) in tree.projects_by_category() {
        let _ = writeln!(out, "  {category}");
        for project in projects {
            let _ = writeln!(out, "    - {}: {}", project.name, project.description);
            let _ = writeln!(out, "      repo: {}", project.repo_url);
            if let Some(demo) = &project.demo_url {
                let _ = writeln!(out, "      demo: {demo}");
            }
            if let Some(package) = &project.package_url {
                let _ = writeln!(out, "      package: {package}");
            }
            let _ = writeln!(out, "      tech: {}", project.technologies.join(", "));
        }
    }

    let _ = writeln!(out, "\n{}", tree.oss_contributions.title);
    for contribution in &tree.oss_contributions.contributions {
        let _ = writeln!(
            out,
            "  - {}: {}\n    {}",
            contribution.project, contribution.pr.title, contribution.pr.url
        );
    }
    out
}

/// One row of `folio locales`.
#[derive(Debug, Serialize)]
struct LocaleEntry {
    /// Locale code.
    code: &'static str,
    /// Switcher label.
    label: &'static str,
    /// Whether this is the base locale.
    base: bool,
}

/// What: Render the supported locale list.
///
/// # Errors
/// - Returns the serializer error for structured output
pub fn handle_locales(format: OutputFormat) -> Result<String, Box<dyn Error>> {
    let entries: Vec<LocaleEntry> = LocaleKey::ALL
        .into_iter()
        .map(|locale| LocaleEntry {
            code: locale.code(),
            label: locale.label(),
            base: locale.is_base(),
        })
        .collect();
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for entry in &entries {
                let marker = if entry.base { "  (base)" } else { "" };
                let _ = writeln!(out, "{:<4}{}{marker}", entry.code, entry.label);
            }
            Ok(out)
        }
        _ => structured(&entries, format),
    }
}
