//! What each page shows, independent of how it is drawn.

use crate::portfolio::{Achievement, LinkEntry, Portfolio, SiteError};

/// Sections of the home page, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Stats,
    About,
    Work,
    Education,
    Skills,
    Projects,
    Achievements,
    Contact,
}

pub const HOME_SECTIONS: [Section; 9] = [
    Section::Hero,
    Section::Stats,
    Section::About,
    Section::Work,
    Section::Education,
    Section::Skills,
    Section::Projects,
    Section::Achievements,
    Section::Contact,
];

impl Section {
    /// Element id, also the fragment used by in-page links.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Stats => "stats",
            Section::About => "about",
            Section::Work => "work",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Achievements => "achievements",
            Section::Contact => "contact",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Achievement(String),
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Route::Home;
        }
        match trimmed.strip_prefix("/achievements/") {
            Some(slug) if !slug.is_empty() && !slug.contains('/') => {
                Route::Achievement(slug.to_string())
            }
            _ => Route::NotFound,
        }
    }
}

/// Every path that can be rendered ahead of time: home plus one per achievement.
pub fn static_paths(portfolio: &Portfolio) -> Vec<String> {
    std::iter::once("/".to_string())
        .chain(portfolio.achievements.iter().map(Achievement::path))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

pub fn home_meta(portfolio: &Portfolio) -> PageMeta {
    PageMeta {
        title: portfolio.profile.name.clone(),
        description: portfolio.profile.description.clone(),
    }
}

/// Metadata of an achievement page. Unknown slugs have none.
pub fn achievement_meta(portfolio: &Portfolio, slug: &str) -> Option<PageMeta> {
    let achievement = portfolio.achievement(slug).ok()?;
    Some(detail_meta(portfolio, achievement))
}

fn detail_meta(portfolio: &Portfolio, achievement: &Achievement) -> PageMeta {
    PageMeta {
        title: format!("{} | {}", achievement.title, portfolio.profile.name),
        description: achievement.description.clone(),
    }
}

/// Optional blocks of the achievement page, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailSection<'a> {
    Technologies(&'a [String]),
    About(&'a str),
    Highlights(&'a [String]),
    Links(Vec<LinkEntry<'a>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AchievementDetail<'a> {
    pub achievement: &'a Achievement,
    pub meta: PageMeta,
}

impl<'a> AchievementDetail<'a> {
    pub fn resolve(portfolio: &'a Portfolio, slug: &str) -> Result<Self, SiteError> {
        let achievement = portfolio.achievement(slug)?;
        Ok(Self {
            achievement,
            meta: detail_meta(portfolio, achievement),
        })
    }

    /// Labelled facts of the event grid. The project row only appears when set.
    pub fn facts(&self) -> Vec<(&'static str, &'a str)> {
        let details = &self.achievement.details;
        let mut facts = vec![
            ("Event", details.event.as_str()),
            ("Placement", details.placement.as_str()),
            ("Competition Size", details.participants.as_str()),
        ];
        if let Some(project) = &details.project {
            facts.push(("Project", project.as_str()));
        }
        facts
    }

    /// Illustration shown under the header, when one is set.
    pub fn illustration(&self) -> Option<&'a str> {
        self.achievement
            .image
            .as_deref()
            .filter(|src| !src.trim().is_empty())
    }

    pub fn sections(&self) -> Vec<DetailSection<'a>> {
        let achievement = self.achievement;
        let details = &achievement.details;
        let mut sections = Vec::new();
        if !details.tech_stack.is_empty() {
            sections.push(DetailSection::Technologies(&details.tech_stack));
        }
        if let Some(about) = achievement.long_description.as_deref() {
            sections.push(DetailSection::About(about));
        }
        if !details.highlights.is_empty() {
            sections.push(DetailSection::Highlights(&details.highlights));
        }
        let links = achievement
            .links
            .as_ref()
            .map(|l| l.entries())
            .unwrap_or_default();
        if !links.is_empty() {
            sections.push(DetailSection::Links(links));
        }
        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::tests::fixture;

    const BARE: &str = r#"[{
        "slug": "bare", "title": "Bare Win", "description": "Nothing extra", "date": "2024", "icon": "x",
        "details": { "event": "Jam", "placement": "2nd", "participants": "12 teams" },
        "links": { "kind": "submission" }
    }]"#;

    #[test]
    fn test_section_order() {
        let ids: Vec<_> = HOME_SECTIONS.iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            vec![
                "hero",
                "stats",
                "about",
                "work",
                "education",
                "skills",
                "projects",
                "achievements",
                "contact"
            ]
        );
    }

    #[test]
    fn test_route_parse() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(
            Route::parse("/achievements/perforated-ai-hackathon"),
            Route::Achievement("perforated-ai-hackathon".into())
        );
        assert_eq!(
            Route::parse("/achievements/abc/"),
            Route::Achievement("abc".into())
        );
        assert_eq!(Route::parse("/achievements/"), Route::NotFound);
        assert_eq!(Route::parse("/achievements/a/b"), Route::NotFound);
        assert_eq!(Route::parse("/blog"), Route::NotFound);
    }

    #[test]
    fn test_static_paths_match_slugs() {
        let portfolio = Portfolio::embedded().unwrap();
        let paths = static_paths(&portfolio);
        assert_eq!(paths[0], "/");
        let mut expected: Vec<String> = portfolio
            .slugs()
            .map(|s| format!("/achievements/{s}"))
            .collect();
        let mut got: Vec<String> = paths[1..].to_vec();
        expected.sort();
        got.sort();
        assert_eq!(got, expected);
        for path in &paths[1..] {
            assert!(matches!(Route::parse(path), Route::Achievement(_)));
        }
    }

    #[test]
    fn test_every_slug_resolves() {
        let portfolio = Portfolio::embedded().unwrap();
        for a in &portfolio.achievements {
            let detail = AchievementDetail::resolve(&portfolio, &a.slug).unwrap();
            assert!(detail.meta.title.contains(&a.title));
            assert!(detail.meta.title.ends_with(&portfolio.profile.name));
            assert_eq!(detail.meta.description, a.description);
            assert_eq!(achievement_meta(&portfolio, &a.slug), Some(detail.meta));
        }
    }

    #[test]
    fn test_unknown_slug_is_not_found() {
        let portfolio = Portfolio::embedded().unwrap();
        assert!(matches!(
            AchievementDetail::resolve(&portfolio, "does-not-exist"),
            Err(SiteError::NotFound { .. })
        ));
        assert_eq!(achievement_meta(&portfolio, "does-not-exist"), None);
    }

    #[test]
    fn test_full_detail_sections() {
        let portfolio = Portfolio::embedded().unwrap();
        let a = &portfolio.achievements[0];
        let detail = AchievementDetail::resolve(&portfolio, &a.slug).unwrap();
        let sections = detail.sections();
        match &sections[0] {
            DetailSection::Technologies(tags) => {
                for tag in a.details.tech_stack.iter() {
                    assert_eq!(tags.iter().filter(|t| *t == tag).count(), 1);
                }
            }
            other => panic!("expected technologies first, got {other:?}"),
        }
        assert!(matches!(sections[1], DetailSection::About(_)));
        assert!(matches!(sections[2], DetailSection::Highlights(_)));
        assert!(matches!(sections[3], DetailSection::Links(_)));
        assert_eq!(detail.facts().last().map(|f| f.0), Some("Project"));
    }

    #[test]
    fn test_bare_detail_omits_optional_sections() {
        let portfolio = fixture(BARE);
        let detail = AchievementDetail::resolve(&portfolio, "bare").unwrap();
        // empty tech stack, no long description, no highlights, links without urls
        assert!(detail.sections().is_empty());
        assert_eq!(detail.facts().len(), 3);
        assert_eq!(detail.meta.title, "Bare Win | Ada Lovelace");
    }

    #[test]
    fn test_illustration() {
        let portfolio = fixture(
            r#"[
            { "slug": "drawn", "title": "Drawn", "description": "d", "date": "2024", "icon": "x",
              "image": "/drawn.png",
              "details": { "event": "e", "placement": "1st", "participants": "3" } },
            { "slug": "blank", "title": "Blank", "description": "d", "date": "2024", "icon": "x",
              "image": " ",
              "details": { "event": "e", "placement": "1st", "participants": "3" } }
        ]"#,
        );
        let drawn = AchievementDetail::resolve(&portfolio, "drawn").unwrap();
        assert_eq!(drawn.illustration(), Some("/drawn.png"));
        let blank = AchievementDetail::resolve(&portfolio, "blank").unwrap();
        assert_eq!(blank.illustration(), None);
        let bare = fixture(BARE);
        let bare = AchievementDetail::resolve(&bare, "bare").unwrap();
        assert_eq!(bare.illustration(), None);
    }

    #[test]
    fn test_home_meta() {
        let portfolio = fixture("[]");
        let meta = home_meta(&portfolio);
        assert_eq!(meta.title, "Ada Lovelace");
        assert_eq!(meta.description, "Analyst.");
        assert_eq!(static_paths(&portfolio), vec!["/".to_string()]);
    }
}
