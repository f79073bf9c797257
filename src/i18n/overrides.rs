//! Partial content trees authored per non-base locale.
//!
//! Every key may be left out, and a left-out key keeps the base value. A key
//! that is present always replaces the base value, including an explicit
//! `null`: on a required field that leaves the merged tree incomplete, on the
//! optional URLs it removes the link. Lists are patched by position: element
//! `i` of an override list applies to element `i` of the base list, and a
//! `null` (`~`) *element* is a hole that leaves the base element alone.
//! Unknown keys are rejected so a typo in a locale file fails loudly instead
//! of silently falling back to English.

use serde::{Deserialize, Deserializer};

use crate::i18n::content::{
    ContentTree, Intro, OssContribution, OssContributions, Project, ProjectCategory, Projects,
    PullRequest, Skills,
};

/// Positional list patch: `None` entries are holes.
pub type ListPatch<T> = Vec<Option<T>>;

/// Patch for one field: `None` when the key is absent, `Some(None)` for an
/// explicit `null`, `Some(Some(value))` otherwise.
pub type FieldPatch<T> = Option<Option<T>>;

/// What: Override tree for one locale.
///
/// Details:
/// - Mirrors `ContentTree` with every field optional; see [`FieldPatch`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ContentOverride {
    /// Greeting block overrides.
    #[serde(deserialize_with = "present")]
    pub intro: FieldPatch<IntroPatch>,
    /// Skills block overrides.
    #[serde(deserialize_with = "present")]
    pub skills: FieldPatch<SkillsPatch>,
    /// Projects block overrides.
    #[serde(deserialize_with = "present")]
    pub projects: FieldPatch<ProjectsPatch>,
    /// OSS contributions block overrides.
    #[serde(deserialize_with = "present")]
    pub oss_contributions: FieldPatch<OssContributionsPatch>,
}

/// Overrides for `Intro`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct IntroPatch {
    /// Replacement greeting.
    #[serde(deserialize_with = "present")]
    pub greeting: FieldPatch<String>,
    /// Positional paragraph replacements.
    #[serde(deserialize_with = "present")]
    pub paragraphs: FieldPatch<ListPatch<String>>,
}

/// Overrides for `Skills`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SkillsPatch {
    /// Replacement section title.
    #[serde(deserialize_with = "present")]
    pub title: FieldPatch<String>,
    /// Replacement languages label.
    #[serde(deserialize_with = "present")]
    pub most_used_languages_label: FieldPatch<String>,
    /// Replacement frameworks label.
    #[serde(deserialize_with = "present")]
    pub frameworks_label: FieldPatch<String>,
    /// Replacement libraries label.
    #[serde(deserialize_with = "present")]
    pub libraries_label: FieldPatch<String>,
    /// Positional list replacements.
    #[serde(deserialize_with = "present")]
    pub frameworks_and_libraries: FieldPatch<ListPatch<String>>,
}

/// Overrides for `Projects`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectsPatch {
    /// Replacement section title.
    #[serde(deserialize_with = "present")]
    pub title: FieldPatch<String>,
    /// Positional project overrides.
    #[serde(deserialize_with = "present")]
    pub projects: FieldPatch<ListPatch<ProjectPatch>>,
}

/// Overrides for one `Project`.
///
/// `demo_url` and `package_url` are optional in the schema, so an explicit
/// `null` removes them instead of making the project incomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectPatch {
    /// Replacement name.
    #[serde(deserialize_with = "present")]
    pub name: FieldPatch<String>,
    /// Replacement repository URL.
    #[serde(deserialize_with = "present")]
    pub repo_url: FieldPatch<String>,
    /// Replacement or removal of the demo URL.
    #[serde(deserialize_with = "present")]
    pub demo_url: FieldPatch<String>,
    /// Replacement or removal of the package URL.
    #[serde(deserialize_with = "present")]
    pub package_url: FieldPatch<String>,
    /// Replacement description.
    #[serde(deserialize_with = "present")]
    pub description: FieldPatch<String>,
    /// Positional technology replacements.
    #[serde(deserialize_with = "present")]
    pub technologies: FieldPatch<ListPatch<String>>,
    /// Replacement category.
    #[serde(deserialize_with = "present")]
    pub category: FieldPatch<ProjectCategory>,
}

/// Overrides for `OssContributions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct OssContributionsPatch {
    /// Replacement section title.
    #[serde(deserialize_with = "present")]
    pub title: FieldPatch<String>,
    /// Positional contribution overrides.
    #[serde(deserialize_with = "present")]
    pub contributions: FieldPatch<ListPatch<OssContributionPatch>>,
}

/// Overrides for one `OssContribution`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct OssContributionPatch {
    /// Pull request overrides.
    #[serde(deserialize_with = "present")]
    pub pr: FieldPatch<PullRequestPatch>,
    /// Replacement project name.
    #[serde(deserialize_with = "present")]
    pub project: FieldPatch<String>,
}

/// Overrides for `PullRequest`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PullRequestPatch {
    /// Replacement title.
    #[serde(deserialize_with = "present")]
    pub title: FieldPatch<String>,
    /// Replacement URL.
    #[serde(deserialize_with = "present")]
    pub url: FieldPatch<String>,
}

/// Maps a present key to `Some(value)`, including an explicit `null`.
/// Absent keys never reach this function and fall back to `Default`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn full_list<T, P>(items: Vec<T>, convert: impl Fn(T) -> P) -> FieldPatch<ListPatch<P>> {
    Some(Some(items.into_iter().map(|item| Some(convert(item))).collect()))
}

impl From<ContentTree> for ContentOverride {
    /// Override that restates every field of `tree`.
    fn from(tree: ContentTree) -> Self {
        Self {
            intro: Some(Some(tree.intro.into())),
            skills: Some(Some(tree.skills.into())),
            projects: Some(Some(tree.projects.into())),
            oss_contributions: Some(Some(tree.oss_contributions.into())),
        }
    }
}

impl From<Intro> for IntroPatch {
    fn from(intro: Intro) -> Self {
        Self {
            greeting: Some(Some(intro.greeting)),
            paragraphs: full_list(intro.paragraphs, |p| p),
        }
    }
}

impl From<Skills> for SkillsPatch {
    fn from(skills: Skills) -> Self {
        Self {
            title: Some(Some(skills.title)),
            most_used_languages_label: Some(Some(skills.most_used_languages_label)),
            frameworks_label: Some(Some(skills.frameworks_label)),
            libraries_label: Some(Some(skills.libraries_label)),
            frameworks_and_libraries: full_list(skills.frameworks_and_libraries, |s| s),
        }
    }
}

impl From<Projects> for ProjectsPatch {
    fn from(projects: Projects) -> Self {
        Self {
            title: Some(Some(projects.title)),
            projects: full_list(projects.projects, ProjectPatch::from),
        }
    }
}

impl From<Project> for ProjectPatch {
    fn from(project: Project) -> Self {
        Self {
            name: Some(Some(project.name)),
            repo_url: Some(Some(project.repo_url)),
            demo_url: Some(project.demo_url),
            package_url: Some(project.package_url),
            description: Some(Some(project.description)),
            technologies: full_list(project.technologies, |t| t),
            category: Some(Some(project.category)),
        }
    }
}

impl From<OssContributions> for OssContributionsPatch {
    fn from(oss: OssContributions) -> Self {
        Self {
            title: Some(Some(oss.title)),
            contributions: full_list(oss.contributions, OssContributionPatch::from),
        }
    }
}

impl From<OssContribution> for OssContributionPatch {
    fn from(contribution: OssContribution) -> Self {
        Self {
            pr: Some(Some(contribution.pr.into())),
            project: Some(Some(contribution.project)),
        }
    }
}

impl From<PullRequest> for PullRequestPatch {
    fn from(pr: PullRequest) -> Self {
        Self {
            title: Some(Some(pr.title)),
            url: Some(Some(pr.url)),
        }
    }
}
