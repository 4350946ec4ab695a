use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Key of one content section. Declaration order is navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    #[default]
    Profile,
    Experience,
    Education,
    Skills,
}

impl SectionKey {
    pub const ALL: [SectionKey; 4] = [
        SectionKey::Profile,
        SectionKey::Experience,
        SectionKey::Education,
        SectionKey::Skills,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::Profile => "profile",
            SectionKey::Experience => "experience",
            SectionKey::Education => "education",
            SectionKey::Skills => "skills",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub title: &'static str,
    pub period: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skills {
    pub technical: &'static [&'static str],
    pub soft: &'static [&'static str],
}

/// A titled section payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<T> {
    pub title: &'static str,
    pub content: T,
}

/// The content table: one entry per `SectionKey`, fixed for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSections {
    pub profile: Section<&'static str>,
    pub experience: Section<&'static [Job]>,
    pub education: Section<&'static [Education]>,
    pub skills: Section<Skills>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Phone,
    Mail,
    SourceHosting,
}

/// Outbound link shown in the header. `href` is opaque and never parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub contacts: &'static [ContactLink],
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("section '{0}' has an empty title")]
    EmptyTitle(SectionKey),

    #[error("section '{0}' has no content")]
    EmptyContent(SectionKey),

    #[error("section '{section}' contains a blank entry at position {index}")]
    BlankEntry { section: SectionKey, index: usize },
}

impl ContentSections {
    pub fn title(&self, key: SectionKey) -> &'static str {
        match key {
            SectionKey::Profile => self.profile.title,
            SectionKey::Experience => self.experience.title,
            SectionKey::Education => self.education.title,
            SectionKey::Skills => self.skills.title,
        }
    }

    /// Checks that every section carries a title and a non-empty payload.
    pub fn validate(&self) -> Result<(), ContentError> {
        for key in SectionKey::ALL {
            if self.title(key).trim().is_empty() {
                return Err(ContentError::EmptyTitle(key));
            }
        }

        if self.profile.content.trim().is_empty() {
            return Err(ContentError::EmptyContent(SectionKey::Profile));
        }

        if self.experience.content.is_empty() {
            return Err(ContentError::EmptyContent(SectionKey::Experience));
        }
        for (index, job) in self.experience.content.iter().enumerate() {
            if is_blank(job.title)
                || is_blank(job.period)
                || job.details.is_empty()
                || job.details.iter().any(|d| is_blank(d))
            {
                return Err(ContentError::BlankEntry {
                    section: SectionKey::Experience,
                    index,
                });
            }
        }

        if self.education.content.is_empty() {
            return Err(ContentError::EmptyContent(SectionKey::Education));
        }
        for (index, edu) in self.education.content.iter().enumerate() {
            if is_blank(edu.degree) || is_blank(edu.institution) || is_blank(edu.period) {
                return Err(ContentError::BlankEntry {
                    section: SectionKey::Education,
                    index,
                });
            }
        }

        let skills = &self.skills.content;
        if skills.technical.is_empty() || skills.soft.is_empty() {
            return Err(ContentError::EmptyContent(SectionKey::Skills));
        }
        if let Some(index) = skills
            .technical
            .iter()
            .chain(skills.soft.iter())
            .position(|s| is_blank(s))
        {
            return Err(ContentError::BlankEntry {
                section: SectionKey::Skills,
                index,
            });
        }

        Ok(())
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
