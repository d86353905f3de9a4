use std::collections::HashSet;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONTENT_FILE: &str = "portfolio.json";
const ONGOING: &str = "Present";

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("No achievement with slug `{slug}`")]
    NotFound { slug: String },
}

/// Failures while loading the embedded content. These only happen at startup.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content file `{0}` is not embedded")]
    Missing(&'static str),
    #[error("Content file is not valid UTF-8")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("Couldn't parse content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate achievement slug `{0}`")]
    DuplicateSlug(String),
    #[error("Achievement slug `{0}` is not URL-safe")]
    InvalidSlug(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Github,
    Linkedin,
    Email,
    Globe,
    Notion,
    Youtube,
    Reddit,
    Medium,
    Colab,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Icon::Github => "devicon-github-plain",
            Icon::Linkedin => "devicon-linkedin-plain",
            Icon::Email => "extra-email",
            Icon::Globe => "extra-link",
            Icon::Notion => "extra-notion",
            Icon::Youtube => "extra-youtube",
            Icon::Reddit => "extra-reddit",
            Icon::Medium => "extra-medium",
            Icon::Colab => "extra-colab",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: Icon,
    #[serde(default)]
    pub navbar: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    #[serde(default)]
    pub tel: Option<String>,
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub url: String,
    pub location: String,
    pub location_link: String,
    pub description: String,
    /// Markdown.
    pub summary: String,
    pub avatar_url: String,
    pub contact: Contact,
}

impl Profile {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: u32,
    pub label: String,
    #[serde(default)]
    pub suffix: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    pub company: String,
    pub title: String,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub logo_url: String,
    #[serde(default)]
    pub href: Option<String>,
    pub start: String,
    /// `None` while the position is ongoing.
    #[serde(default)]
    pub end: Option<String>,
    pub description: String,
}

impl WorkEntry {
    pub fn period(&self) -> String {
        format!("{} - {}", self.start, self.end.as_deref().unwrap_or(ONGOING))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub logo_url: String,
    #[serde(default)]
    pub href: Option<String>,
    pub start: String,
    pub end: String,
}

impl EducationEntry {
    pub fn period(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub kind: String,
    pub href: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub href: Option<String>,
    pub dates: String,
    #[serde(default)]
    pub active: bool,
    /// Markdown.
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
}

impl Project {
    /// The project href, unless one of the named links already points there.
    pub fn live_link(&self) -> Option<&str> {
        self.href
            .as_deref()
            .filter(|href| !self.links.iter().any(|l| l.href == *href))
    }

    /// The first `shown` technology tags and how many were left out.
    pub fn tag_preview(&self, shown: usize) -> (&[String], usize) {
        let cut = shown.min(self.technologies.len());
        (&self.technologies[..cut], self.technologies.len() - cut)
    }
}

/// A populated outbound link of an achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkEntry<'a> {
    pub label: &'static str,
    pub url: &'a str,
    pub icon: Icon,
}

/// Links attached to an achievement. Each kind of achievement carries its own set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AchievementLinks {
    /// A hackathon submission.
    Submission {
        #[serde(default)]
        github: Option<String>,
        #[serde(default)]
        devpost: Option<String>,
        #[serde(default)]
        demo: Option<String>,
    },
    /// Work merged into someone else's repository.
    Contribution {
        repository: String,
        #[serde(default)]
        pull_request: Option<String>,
    },
}

impl AchievementLinks {
    pub fn entries(&self) -> Vec<LinkEntry<'_>> {
        let candidates: Vec<(&'static str, Option<&str>, Icon)> = match self {
            AchievementLinks::Submission {
                github,
                devpost,
                demo,
            } => vec![
                ("GitHub", github.as_deref(), Icon::Github),
                ("Devpost", devpost.as_deref(), Icon::Globe),
                ("Demo", demo.as_deref(), Icon::Youtube),
            ],
            AchievementLinks::Contribution {
                repository,
                pull_request,
            } => vec![
                ("Repository", Some(repository.as_str()), Icon::Github),
                ("Pull Request", pull_request.as_deref(), Icon::Github),
            ],
        };
        candidates
            .into_iter()
            .filter_map(|(label, url, icon)| {
                url.filter(|u| !u.is_empty())
                    .map(|url| LinkEntry { label, url, icon })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementDetails {
    pub event: String,
    pub placement: String,
    pub participants: String,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub icon: String,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub details: AchievementDetails,
    #[serde(default)]
    pub links: Option<AchievementLinks>,
}

impl Achievement {
    pub fn path(&self) -> String {
        format!("/achievements/{}", self.slug)
    }
}

/// Everything the site renders. Built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub work: Vec<WorkEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

impl Portfolio {
    /// Loads the content compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        let file = Content::get(CONTENT_FILE).ok_or(ContentError::Missing(CONTENT_FILE))?;
        let text = std::str::from_utf8(&file.data)?;
        Self::from_json(text)
    }

    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_str(text)?;
        portfolio.validate()?;
        log::debug!(
            "loaded portfolio for {} with {} achievements",
            portfolio.profile.name,
            portfolio.achievements.len()
        );
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for a in &self.achievements {
            if !is_url_safe(&a.slug) {
                return Err(ContentError::InvalidSlug(a.slug.clone()));
            }
            if !seen.insert(a.slug.as_str()) {
                return Err(ContentError::DuplicateSlug(a.slug.clone()));
            }
        }
        Ok(())
    }

    pub fn achievement(&self, slug: &str) -> Result<&Achievement, SiteError> {
        self.achievements
            .iter()
            .find(|a| a.slug == slug)
            .ok_or_else(|| SiteError::NotFound {
                slug: slug.to_string(),
            })
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.achievements.iter().map(|a| a.slug.as_str())
    }

    pub fn navbar_socials(&self) -> impl Iterator<Item = &SocialLink> {
        self.profile.contact.social.iter().filter(|s| s.navbar)
    }

    pub fn social(&self, name: &str) -> Option<&SocialLink> {
        self.profile
            .contact
            .social
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }
}

fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
