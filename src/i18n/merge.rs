//! Typed deep merge of override trees onto base content.
//!
//! Rules, applied at every path:
//! - absent override value: base kept
//! - explicit `null`: replaces the base value, so a required field becomes
//!   missing (optional URLs are cleared)
//! - record: merged field by field
//! - list: merged by position; base entries past the override's end are kept,
//!   a populated override entry past the base's end is an error
//! - scalar: replaced
//!
//! The same trait also turns a patch into a full value (`from_patch`), which is
//! how the base locale file is read: a patch applied to nothing must supply
//! every required field.

use std::fmt;

use crate::i18n::content::{
    ContentTree, Intro, OssContribution, OssContributions, Project, ProjectCategory, Projects,
    PullRequest, Skills,
};
use crate::i18n::overrides::{
    ContentOverride, FieldPatch, IntroPatch, ListPatch, OssContributionPatch, OssContributionsPatch,
    ProjectPatch, ProjectsPatch, PullRequestPatch, SkillsPatch,
};
use crate::i18n::{ContentError, LocaleKey};

/// What: Failure of a single merge, before it is attributed to a locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// Override list entry `index` has no base entry to merge onto.
    IndexOutOfBounds {
        /// Dotted path of the list.
        path: String,
        /// Offending index.
        index: usize,
        /// Length of the base list.
        len: usize,
    },
    /// A required field was not supplied.
    MissingField {
        /// Dotted path of the field.
        path: String,
    },
}

impl MergeError {
    /// Attribute the failure to `locale`.
    #[must_use]
    pub fn for_locale(self, locale: LocaleKey) -> ContentError {
        match self {
            Self::IndexOutOfBounds { path, index, len } => ContentError::MergeIndexOutOfBounds {
                locale,
                path,
                index,
                len,
            },
            Self::MissingField { path } => ContentError::SchemaIncomplete { locale, path },
        }
    }
}

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { path, index, len } => {
                write!(f, "{path}[{index}] is out of bounds (length {len})")
            }
            Self::MissingField { path } => write!(f, "missing required field {path}"),
        }
    }
}

impl std::error::Error for MergeError {}

/// What: A value that can absorb a partial override of itself.
pub trait Merge: Sized {
    /// Partial form of `Self` as written in override files.
    type Patch;

    /// What: Deep-merge `patch` onto `self` in place.
    ///
    /// Inputs:
    /// - `patch`: Override for this value
    /// - `path`: Dotted path of this value, for diagnostics
    ///
    /// # Errors
    /// - `MergeError::IndexOutOfBounds` when a list override reaches past the base
    /// - `MergeError::MissingField` when the patch sets a required field to `null`
    fn merge(&mut self, patch: Self::Patch, path: &str) -> Result<(), MergeError>;

    /// What: Build a full value from a patch with no base underneath.
    ///
    /// # Errors
    /// - `MergeError::MissingField` for the first required field left unset
    fn from_patch(patch: Self::Patch, path: &str) -> Result<Self, MergeError>;
}

/// Dotted path of `field` under `parent`.
fn child(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{parent}.{field}")
    }
}

/// Merge a field patch onto a required field; `null` leaves it missing.
fn merge_field<T: Merge>(
    target: &mut T,
    patch: FieldPatch<T::Patch>,
    parent: &str,
    field: &str,
) -> Result<(), MergeError> {
    match patch {
        Some(Some(patch)) => target.merge(patch, &child(parent, field)),
        Some(None) => Err(MergeError::MissingField {
            path: child(parent, field),
        }),
        None => Ok(()),
    }
}

/// Build a required field from a field patch; absent and `null` are both missing.
fn required<T: Merge>(patch: FieldPatch<T::Patch>, parent: &str, field: &str) -> Result<T, MergeError> {
    let path = child(parent, field);
    match patch.flatten() {
        Some(patch) => T::from_patch(patch, &path),
        None => Err(MergeError::MissingField { path }),
    }
}

impl Merge for String {
    type Patch = Self;

    fn merge(&mut self, patch: Self, _path: &str) -> Result<(), MergeError> {
        *self = patch;
        Ok(())
    }

    fn from_patch(patch: Self, _path: &str) -> Result<Self, MergeError> {
        Ok(patch)
    }
}

impl Merge for ProjectCategory {
    type Patch = Self;

    fn merge(&mut self, patch: Self, _path: &str) -> Result<(), MergeError> {
        *self = patch;
        Ok(())
    }

    fn from_patch(patch: Self, _path: &str) -> Result<Self, MergeError> {
        Ok(patch)
    }
}

impl<T: Merge> Merge for Vec<T> {
    type Patch = ListPatch<T::Patch>;

    fn merge(&mut self, patch: Self::Patch, path: &str) -> Result<(), MergeError> {
        let len = self.len();
        // Validate bounds first so a failed merge leaves the base untouched.
        if let Some(index) = patch
            .iter()
            .enumerate()
            .skip(len)
            .find_map(|(index, entry)| entry.as_ref().map(|_| index))
        {
            return Err(MergeError::IndexOutOfBounds {
                path: path.to_string(),
                index,
                len,
            });
        }
        for (index, (target, entry)) in self.iter_mut().zip(patch).enumerate() {
            if let Some(entry) = entry {
                target.merge(entry, &format!("{path}[{index}]"))?;
            }
        }
        Ok(())
    }

    fn from_patch(patch: Self::Patch, path: &str) -> Result<Self, MergeError> {
        patch
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let entry_path = format!("{path}[{index}]");
                match entry {
                    Some(entry) => T::from_patch(entry, &entry_path),
                    None => Err(MergeError::MissingField { path: entry_path }),
                }
            })
            .collect()
    }
}

impl Merge for ContentTree {
    type Patch = ContentOverride;

    fn merge(&mut self, patch: ContentOverride, path: &str) -> Result<(), MergeError> {
        merge_field(&mut self.intro, patch.intro, path, "intro")?;
        merge_field(&mut self.skills, patch.skills, path, "skills")?;
        merge_field(&mut self.projects, patch.projects, path, "projects")?;
        merge_field(
            &mut self.oss_contributions,
            patch.oss_contributions,
            path,
            "ossContributions",
        )
    }

    fn from_patch(patch: ContentOverride, path: &str) -> Result<Self, MergeError> {
        Ok(Self {
            intro: required(patch.intro, path, "intro")?,
            skills: required(patch.skills, path, "skills")?,
            projects: required(patch.projects, path, "projects")?,
            oss_contributions: required(patch.oss_contributions, path, "ossContributions")?,
        })
    }
}

impl Merge for Intro {
    type Patch = IntroPatch;

    fn merge(&mut self, patch: IntroPatch, path: &str) -> Result<(), MergeError> {
        merge_field(&mut self.greeting, patch.greeting, path, "greeting")?;
        merge_field(&mut self.paragraphs, patch.paragraphs, path, "paragraphs")
    }

    fn from_patch(patch: IntroPatch, path: &str) -> Result<Self, MergeError> {
        Ok(Self {
            greeting: required(patch.greeting, path, "greeting")?,
            paragraphs: required(patch.paragraphs, path, "paragraphs")?,
        })
    }
}

impl Merge for Skills {
    type Patch = SkillsPatch;

    fn merge(&mut self, patch: SkillsPatch, path: &str) -> Result<(), MergeError> {
        merge_field(&mut self.title, patch.title, path, "title")?;
        merge_field(
            &mut self.most_used_languages_label,
            patch.most_used_languages_label,
            path,
            "mostUsedLanguagesLabel",
        )?;
        merge_field(
            &mut self.frameworks_label,
            patch.frameworks_label,
            path,
            "frameworksLabel",
        )?;
        merge_field(
            &mut self.libraries_label,
            patch.libraries_label,
            path,
            "librariesLabel",
        )?;
        merge_field(
            &mut self.frameworks_and_libraries,
            patch.frameworks_and_libraries,
            path,
            "frameworksAndLibraries",
        )
    }

    fn from_patch(patch: SkillsPatch, path: &str) -> Result<Self, MergeError> {
        Ok(Self {
            title: required(patch.title, path, "title")?,
            most_used_languages_label: required(
                patch.most_used_languages_label,
                path,
                "mostUsedLanguagesLabel",
            )?,
            frameworks_label: required(patch.frameworks_label, path, "frameworksLabel")?,
            libraries_label: required(patch.libraries_label, path, "librariesLabel")?,
            frameworks_and_libraries: required(
                patch.frameworks_and_libraries,
                path,
                "frameworksAndLibraries",
            )?,
        })
    }
}

impl Merge for Projects {
    type Patch = ProjectsPatch;

    fn merge(&mut self, patch: ProjectsPatch, path: &str) -> Result<(), MergeError> {
        merge_field(&mut self.title, patch.title, path, "title")?;
        merge_field(&mut self.projects, patch.projects, path, "projects")
    }

    fn from_patch(patch: ProjectsPatch, path: &str) -> Result<Self, MergeError> {
        Ok(Self {
            title: required(patch.title, path, "title")?,
            projects: required(patch.projects, path, "projects")?,
        })
    }
}

impl Merge for Project {
    type Patch = ProjectPatch;

    fn merge(&mut self, patch: ProjectPatch, path: &str) -> Result<(), MergeError> {
        merge_field(&mut self.name, patch.name, path, "name")?;
        merge_field(&mut self.repo_url, patch.repo_url, path, "repoUrl")?;
        if let Some(demo_url) = patch.demo_url {
            self.demo_url = demo_url;
        }
        if let Some(package_url) = patch.package_url {
            self.package_url = package_url;
        }
        merge_field(&mut self.description, patch.description, path, "description")?;
        merge_field(&mut self.technologies, patch.technologies, path, "technologies")?;
        merge_field(&mut self.category, patch.category, path, "category")
    }

    fn from_patch(patch: ProjectPatch, path: &str) -> Result<Self, MergeError> {
        Ok(Self {
            name: required(patch.name, path, "name")?,
            repo_url: required(patch.repo_url, path, "repoUrl")?,
            demo_url: patch.demo_url.flatten(),
            package_url: patch.package_url.flatten(),
            description: required(patch.description, path, "description")?,
            technologies: required(patch.technologies, path, "technologies")?,
            category: required(patch.category, path, "category")?,
        })
    }
}

impl Merge for OssContributions {
    type Patch = OssContributionsPatch;

    fn merge(&mut self, patch: OssContributionsPatch, path: &str) -> Result<(), MergeError> {
        merge_field(&mut self.title, patch.title, path, "title")?;
        merge_field(&mut self.contributions, patch.contributions, path, "contributions")
    }

    fn from_patch(patch: OssContributionsPatch, path: &str) -> Result<Self, MergeError> {
        Ok(Self {
            title: required(patch.title, path, "title")?,
            contributions: required(patch.contributions, path, "contributions")?,
        })
    }
}

impl Merge for OssContribution {
    type Patch = OssContributionPatch;

    fn merge(&mut self, patch: OssContributionPatch, path: &str) -> Result<(), MergeError> {
        merge_field(&mut self.pr, patch.pr, path, "pr")?;
        merge_field(&mut self.project, patch.project, path, "project")
    }

    fn from_patch(patch: OssContributionPatch, path: &str) -> Result<Self, MergeError> {
        Ok(Self {
            pr: required(patch.pr, path, "pr")?,
            project: required(patch.project, path, "project")?,
        })
    }
}

impl Merge for PullRequest {
    type Patch = PullRequestPatch;

    fn merge(&mut self, patch: PullRequestPatch, path: &str) -> Result<(), MergeError> {
        merge_field(&mut self.title, patch.title, path, "title")?;
        merge_field(&mut self.url, patch.url, path, "url")
    }

    fn from_patch(patch: PullRequestPatch, path: &str) -> Result<Self, MergeError> {
        Ok(Self {
            title: required(patch.title, path, "title")?,
            url: required(patch.url, path, "url")?,
        })
    }
}

/// What: Merge `patch` onto a copy of `base`.
///
/// Inputs:
/// - `base`: Complete base tree (left operand, never modified)
/// - `patch`: Override tree (right operand)
///
/// Output:
/// - The merged tree
///
/// # Errors
/// - `MergeError::IndexOutOfBounds` when a list override reaches past the base
/// - `MergeError::MissingField` when the patch sets a required field to `null`
pub fn merged(base: &ContentTree, patch: ContentOverride) -> Result<ContentTree, MergeError> {
    let mut tree = base.clone();
    tree.merge(patch, "")?;
    Ok(tree)
}
