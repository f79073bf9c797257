//! Fully resolved content tree for one locale.
//!
//! Field names serialize in camelCase (`mostUsedLanguagesLabel`, `repoUrl`, ...)
//! so the rendering layer sees the same keys it did before.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Token in intro paragraphs that the rendering layer replaces with the owner's name.
pub const NAME_PLACEHOLDER: &str = "{myname}";

/// Complete page copy for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTree {
    /// Greeting block.
    pub intro: Intro,
    /// Skills block.
    pub skills: Skills,
    /// Projects block.
    pub projects: Projects,
    /// OSS contributions block.
    pub oss_contributions: OssContributions,
}

/// Greeting and introductory paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intro {
    /// Short greeting line.
    pub greeting: String,
    /// Paragraphs; may contain `NAME_PLACEHOLDER`.
    pub paragraphs: Vec<String>,
}

/// Skills section labels and the framework/library list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    /// Section title.
    pub title: String,
    /// Label above the language chart.
    pub most_used_languages_label: String,
    /// Label above the framework list.
    pub frameworks_label: String,
    /// Label above the library list.
    pub libraries_label: String,
    /// Frameworks and libraries, in display order.
    pub frameworks_and_libraries: Vec<String>,
}

/// Projects section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projects {
    /// Section title.
    pub title: String,
    /// Projects, in display order.
    pub projects: Vec<Project>,
}

/// One showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Display name.
    pub name: String,
    /// Source repository.
    pub repo_url: String,
    /// Live demo, if deployed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    /// Published package, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_url: Option<String>,
    /// One-line description.
    pub description: String,
    /// Technologies used, in display order.
    pub technologies: Vec<String>,
    /// Grouping used by the projects page.
    pub category: ProjectCategory,
}

/// Project grouping shown on the projects page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    /// Deployed websites.
    #[serde(rename = "Websites")]
    Websites,
    /// Websites built to learn a stack.
    #[serde(rename = "Websites for Studying")]
    WebsitesForStudying,
    /// Packages published to npm.
    #[serde(rename = "npm Packages")]
    NpmPackages,
    /// Prettier plugins.
    #[serde(rename = "Prettier Plugins")]
    PrettierPlugins,
    /// Command-line tools.
    #[serde(rename = "CLI Tools")]
    CliTools,
}

impl ProjectCategory {
    /// Every category, in page order.
    pub const ALL: [Self; 5] = [
        Self::Websites,
        Self::WebsitesForStudying,
        Self::NpmPackages,
        Self::PrettierPlugins,
        Self::CliTools,
    ];

    /// Display name, identical to the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Websites => "Websites",
            Self::WebsitesForStudying => "Websites for Studying",
            Self::NpmPackages => "npm Packages",
            Self::PrettierPlugins => "Prettier Plugins",
            Self::CliTools => "CLI Tools",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// OSS contributions section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OssContributions {
    /// Section title.
    pub title: String,
    /// Contributions, in display order.
    pub contributions: Vec<OssContribution>,
}

/// A merged pull request in someone else's project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OssContribution {
    /// The pull request.
    pub pr: PullRequest,
    /// Name of the upstream project.
    pub project: String,
}

/// Pull request title and link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    /// Pull request title.
    pub title: String,
    /// Pull request URL.
    pub url: String,
}

impl ContentTree {
    /// What: Group projects by category in page order.
    ///
    /// Output:
    /// - One entry per category that has at least one project; projects keep
    ///   their relative order
    #[must_use]
    pub fn projects_by_category(&self) -> Vec<(ProjectCategory, Vec<&Project>)> {
        ProjectCategory::ALL
            .into_iter()
            .filter_map(|category| {
                let projects: Vec<&Project> = self
                    .projects
                    .projects
                    .iter()
                    .filter(|project| project.category == category)
                    .collect();
                (!projects.is_empty()).then_some((category, projects))
            })
            .collect()
    }

    /// What: Find the first required field left empty, in schema order.
    ///
    /// Output:
    /// - Dotted path of the field (e.g. `projects.projects[2].name`), or `None`
    ///   when the tree is complete
    ///
    /// Details:
    /// - Required strings must contain non-whitespace text.
    /// - Required lists must be non-empty: `intro.paragraphs`,
    ///   `skills.frameworksAndLibraries`, `projects.projects`, and each
    ///   project's `technologies`.
    /// - `ossContributions.contributions` may be empty; optional URLs are not
    ///   checked.
    #[must_use]
    pub fn first_missing_field(&self) -> Option<String> {
        let mut fields = RequiredFields::default();

        fields.text("intro.greeting", &self.intro.greeting);
        fields.list("intro.paragraphs", &self.intro.paragraphs);
        for (i, paragraph) in self.intro.paragraphs.iter().enumerate() {
            fields.text(format!("intro.paragraphs[{i}]"), paragraph);
        }

        let skills = &self.skills;
        fields.text("skills.title", &skills.title);
        fields.text("skills.mostUsedLanguagesLabel", &skills.most_used_languages_label);
        fields.text("skills.frameworksLabel", &skills.frameworks_label);
        fields.text("skills.librariesLabel", &skills.libraries_label);
        fields.list("skills.frameworksAndLibraries", &skills.frameworks_and_libraries);
        for (i, item) in skills.frameworks_and_libraries.iter().enumerate() {
            fields.text(format!("skills.frameworksAndLibraries[{i}]"), item);
        }

        fields.text("projects.title", &self.projects.title);
        fields.list("projects.projects", &self.projects.projects);
        for (i, project) in self.projects.projects.iter().enumerate() {
            let base = format!("projects.projects[{i}]");
            fields.text(format!("{base}.name"), &project.name);
            fields.text(format!("{base}.repoUrl"), &project.repo_url);
            fields.text(format!("{base}.description"), &project.description);
            fields.list(format!("{base}.technologies"), &project.technologies);
        }

        fields.text("ossContributions.title", &self.oss_contributions.title);
        for (i, contribution) in self.oss_contributions.contributions.iter().enumerate() {
            let base = format!("ossContributions.contributions[{i}]");
            fields.text(format!("{base}.pr.title"), &contribution.pr.title);
            fields.text(format!("{base}.pr.url"), &contribution.pr.url);
            fields.text(format!("{base}.project"), &contribution.project);
        }

        fields.first_missing
    }
}

/// Walks required fields and keeps the path of the first empty one.
#[derive(Default)]
struct RequiredFields {
    /// Path of the first empty field seen.
    first_missing: Option<String>,
}

impl RequiredFields {
    fn text(&mut self, path: impl Into<String>, value: &str) {
        if self.first_missing.is_none() && value.trim().is_empty() {
            self.first_missing = Some(path.into());
        }
    }

    fn list<T>(&mut self, path: impl Into<String>, items: &[T]) {
        if self.first_missing.is_none() && items.is_empty() {
            self.first_missing = Some(path.into());
        }
    }
}
