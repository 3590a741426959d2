mod data;

pub use data::{CERTIFICATES, EDUCATION, EXPERIENCES, PERSONAL_INFO, PROJECTS, SKILLS};

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::TECH_PREVIEW_LEN;

/// Build a date in const context; an impossible literal fails compilation.
pub(crate) const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("invalid date literal"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub bio: &'static str,
    pub resume_url: &'static str,
    pub profile_image: &'static str,
    pub social_links: SocialLinks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SocialLinks {
    pub github: Option<&'static str>,
    pub linkedin: Option<&'static str>,
    pub twitter: Option<&'static str>,
    pub website: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    Github,
    Linkedin,
    Twitter,
    Website,
}

impl SocialPlatform {
    pub fn label(self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Linkedin => "LinkedIn",
            Self::Twitter => "Twitter",
            Self::Website => "Website",
        }
    }

    /// Icon font class used to render the platform glyph.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Github => "devicon-github-plain",
            Self::Linkedin => "devicon-linkedin-plain",
            Self::Twitter => "devicon-twitter-original",
            Self::Website => "devicon-chrome-plain",
        }
    }
}

impl SocialLinks {
    /// Present links in fixed platform order.
    pub fn iter(&self) -> impl Iterator<Item = (SocialPlatform, &'static str)> {
        [
            (SocialPlatform::Github, self.github),
            (SocialPlatform::Linkedin, self.linkedin),
            (SocialPlatform::Twitter, self.twitter),
            (SocialPlatform::Website, self.website),
        ]
        .into_iter()
        .filter_map(|(platform, url)| url.map(|url| (platform, url)))
    }
}

#[derive(Serialize)]
struct PersonSchema<'a> {
    #[serde(rename = "@context")]
    context: &'a str,
    #[serde(rename = "@type")]
    kind: &'a str,
    name: &'a str,
    #[serde(rename = "jobTitle")]
    job_title: &'a str,
    email: String,
    telephone: &'a str,
    #[serde(rename = "homeLocation")]
    home_location: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(rename = "sameAs", skip_serializing_if = "Vec::is_empty")]
    same_as: Vec<&'a str>,
}

impl PersonalInfo {
    /// schema.org `Person` record for the document head.
    pub fn json_ld(&self) -> serde_json::Result<String> {
        let links = self.social_links;
        let schema = PersonSchema {
            context: "https://schema.org",
            kind: "Person",
            name: self.name,
            job_title: self.title,
            email: format!("mailto:{}", self.email),
            telephone: self.phone,
            home_location: self.location,
            description: self.bio,
            url: links.website,
            same_as: links
                .iter()
                .filter(|(p, _)| *p != SocialPlatform::Website)
                .map(|(_, url)| url)
                .collect(),
        };
        serde_json::to_string(&schema)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Web,
    Mobile,
    Ai,
    Fullstack,
    Other,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 5] = [
        Self::Web,
        Self::Mobile,
        Self::Ai,
        Self::Fullstack,
        Self::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "Web Development",
            Self::Mobile => "Mobile Apps",
            Self::Ai => "AI/ML Projects",
            Self::Fullstack => "Full Stack",
            Self::Other => "Other",
        }
    }
}

/// Selection of the project filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    /// "All" first, then one entry per category.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(Self::All).chain(ProjectCategory::ALL.into_iter().map(Self::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Only(c) => c.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => project.category == c,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub category: ProjectCategory,
    pub technologies: &'static [&'static str],
    pub images: &'static [&'static str],
    pub github_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
    pub featured: bool,
    pub completed_at: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub id: &'static str,
    pub company: &'static str,
    pub position: &'static str,
    pub description: &'static str,
    pub start_date: NaiveDate,
    /// `None` while the position is current.
    pub end_date: Option<NaiveDate>,
    pub technologies: &'static [&'static str],
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub id: &'static str,
    pub institution: &'static str,
    pub degree: &'static str,
    pub field: &'static str,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub gpa: Option<&'static str>,
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Mobile,
    Database,
    Devops,
    Design,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 7] = [
        Self::Frontend,
        Self::Backend,
        Self::Mobile,
        Self::Database,
        Self::Devops,
        Self::Design,
        Self::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Mobile => "Mobile",
            Self::Database => "Database",
            Self::Devops => "DevOps",
            Self::Design => "Design",
            Self::Other => "Other",
        }
    }

    /// Heading used on the resume.
    pub fn long_label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend Development",
            Self::Backend => "Backend Development",
            Self::Mobile => "Mobile Development",
            Self::Database => "Database Management",
            Self::Devops => "DevOps & Cloud",
            Self::Design => "Design & UX",
            Self::Other => "Other Technologies",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent, 0 to 100.
    pub level: u8,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certificate {
    pub id: &'static str,
    pub name: &'static str,
    pub issuer: &'static str,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub credential_url: Option<&'static str>,
}

impl Certificate {
    pub fn issued_label(&self) -> String {
        format!("Issued: {}", format_short_date(self.issue_date))
    }

    /// `None` for certificates that never expire.
    pub fn expires_label(&self) -> Option<String> {
        self.expiry_date
            .map(|d| format!("Expires: {}", format_short_date(d)))
    }
}

pub fn featured_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| p.featured)
}

/// Projects matching `filter`, in source order.
pub fn filter_projects(filter: CategoryFilter) -> Vec<&'static Project> {
    filter_in(PROJECTS, filter)
}

fn filter_in(projects: &[Project], filter: CategoryFilter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Skills grouped under their category, categories in declaration order, empty groups dropped.
pub fn skills_by_category() -> Vec<(SkillCategory, Vec<&'static Skill>)> {
    group_skills(SKILLS)
}

fn group_skills(skills: &[Skill]) -> Vec<(SkillCategory, Vec<&Skill>)> {
    SkillCategory::ALL
        .into_iter()
        .map(|c| (c, skills.iter().filter(|s| s.category == c).collect::<Vec<_>>()))
        .filter(|(_, group)| !group.is_empty())
        .collect()
}

pub fn years_of_experience() -> usize {
    EXPERIENCES.len()
}

/// Leading technologies plus the number left out.
pub fn technology_preview(technologies: &'static [&'static str]) -> (&'static [&'static str], usize) {
    let shown = technologies.len().min(TECH_PREVIEW_LEN);
    (&technologies[..shown], technologies.len() - shown)
}

pub fn format_short_date(d: NaiveDate) -> String {
    d.format("%b %-d, %Y").to_string()
}

pub fn format_long_date(d: NaiveDate) -> String {
    d.format("%B %-d, %Y").to_string()
}

/// "2020 - 2022", or "2022 - Present" for an open range.
pub fn format_year_range(start: NaiveDate, end: Option<NaiveDate>) -> String {
    let end = end
        .map(|d| d.format("%Y").to_string())
        .unwrap_or_else(|| "Present".to_string());
    format!("{} - {}", start.format("%Y"), end)
}

pub fn format_date_range(start: NaiveDate, end: Option<NaiveDate>) -> String {
    let end = end
        .map(format_short_date)
        .unwrap_or_else(|| "Present".to_string());
    format!("{} - {}", format_short_date(start), end)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn assert_unique_ids<'a>(ids: impl Iterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate id {id}");
        }
    }

    #[test]
    fn test_ids_unique_per_list() {
        assert_unique_ids(PROJECTS.iter().map(|p| p.id));
        assert_unique_ids(EXPERIENCES.iter().map(|e| e.id));
        assert_unique_ids(EDUCATION.iter().map(|e| e.id));
        assert_unique_ids(CERTIFICATES.iter().map(|c| c.id));
    }

    #[test]
    fn test_filter_all_returns_everything_in_order() {
        let all = filter_projects(CategoryFilter::All);
        assert_eq!(all.len(), PROJECTS.len());
        for (got, expected) in all.iter().zip(PROJECTS.iter()) {
            assert_eq!(got.id, expected.id);
        }
    }

    #[test]
    fn test_filter_by_each_category() {
        for category in ProjectCategory::ALL {
            let filtered = filter_projects(CategoryFilter::Only(category));
            let expected = PROJECTS
                .iter()
                .filter(|p| p.category == category)
                .map(|p| p.id)
                .collect::<Vec<_>>();
            assert_eq!(filtered.iter().map(|p| p.id).collect::<Vec<_>>(), expected);
            assert!(filtered.iter().all(|p| p.category == category));
        }
        // nothing in the data set is filed under "other"
        assert!(filter_projects(CategoryFilter::Only(ProjectCategory::Other)).is_empty());
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let base = PROJECTS[0];
        let projects = [
            Project { id: "a", category: ProjectCategory::Web, ..base },
            Project { id: "b", category: ProjectCategory::Ai, ..base },
            Project { id: "c", category: ProjectCategory::Web, ..base },
            Project { id: "d", category: ProjectCategory::Web, ..base },
        ];
        let web = filter_in(&projects, CategoryFilter::Only(ProjectCategory::Web));
        assert_eq!(web.iter().map(|p| p.id).collect::<Vec<_>>(), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_featured_subset() {
        let featured = featured_projects().collect::<Vec<_>>();
        assert!(!featured.is_empty());
        for p in featured {
            assert!(p.featured);
            assert_eq!(find_project(p.id), Some(p));
        }
    }

    #[test]
    fn test_filter_options() {
        let options = CategoryFilter::options().collect::<Vec<_>>();
        assert_eq!(options.len(), 6);
        assert_eq!(options[0], CategoryFilter::All);
        assert_eq!(options[0].label(), "All Projects");
        assert_eq!(options[3].label(), "AI/ML Projects");
    }

    #[test]
    fn test_skill_levels_in_range() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_skills_grouping() {
        let groups = skills_by_category();
        let total = groups.iter().map(|(_, g)| g.len()).sum::<usize>();
        assert_eq!(total, SKILLS.len());
        assert!(groups.iter().all(|(_, g)| !g.is_empty()));
        assert!(groups.iter().all(|(c, _)| *c != SkillCategory::Other));

        // categories keep declaration order, even though mobile skills are listed after devops
        let order = groups.iter().map(|(c, _)| *c).collect::<Vec<_>>();
        assert_eq!(
            order,
            vec![
                SkillCategory::Frontend,
                SkillCategory::Backend,
                SkillCategory::Mobile,
                SkillCategory::Database,
                SkillCategory::Devops,
                SkillCategory::Design,
            ]
        );
        let frontend = &groups[0].1;
        assert_eq!(frontend[0].name, "React");
        assert_eq!(frontend[1].name, "TypeScript");
    }

    #[test]
    fn test_technology_preview() {
        let (shown, rest) = technology_preview(&["a", "b", "c", "d", "e"]);
        assert_eq!(shown, &["a", "b", "c"]);
        assert_eq!(rest, 2);

        let (shown, rest) = technology_preview(&["a"]);
        assert_eq!(shown, &["a"]);
        assert_eq!(rest, 0);
    }

    #[test]
    fn test_date_formatting() {
        let d = date(2024, 11, 5);
        assert_eq!(format_short_date(d), "Nov 5, 2024");
        assert_eq!(format_long_date(d), "November 5, 2024");
        assert_eq!(
            format_year_range(date(2020, 6, 1), Some(date(2022, 2, 28))),
            "2020 - 2022"
        );
        assert_eq!(format_year_range(date(2022, 3, 1), None), "2022 - Present");
        assert_eq!(
            format_date_range(date(2020, 6, 1), Some(date(2022, 2, 28))),
            "Jun 1, 2020 - Feb 28, 2022"
        );
    }

    #[test]
    fn test_certificate_labels() {
        let expiring = CERTIFICATES
            .iter()
            .find(|c| c.expiry_date.is_some())
            .expect("at least one certificate expires");
        assert!(expiring.issued_label().starts_with("Issued: "));
        assert!(expiring.expires_label().is_some_and(|l| l.starts_with("Expires: ")));

        let lasting = Certificate {
            issue_date: date(2022, 12, 10),
            expiry_date: None,
            ..*expiring
        };
        assert_eq!(lasting.issued_label(), "Issued: Dec 10, 2022");
        assert_eq!(lasting.expires_label(), None);
    }

    #[test]
    fn test_current_position_is_open_ended() {
        assert!(EXPERIENCES[0].end_date.is_none());
        assert!(EXPERIENCES[1..].iter().all(|e| e.end_date.is_some()));
        assert_eq!(years_of_experience(), 3);
    }

    #[test]
    fn test_social_links_order_and_skip() {
        let links = SocialLinks {
            github: Some("gh"),
            linkedin: None,
            twitter: Some("tw"),
            website: None,
        };
        let got = links.iter().collect::<Vec<_>>();
        assert_eq!(
            got,
            vec![(SocialPlatform::Github, "gh"), (SocialPlatform::Twitter, "tw")]
        );
    }

    #[test]
    fn test_json_ld() {
        let json = PERSONAL_INFO.json_ld().expect("should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("should be valid json");
        assert_eq!(value["@type"], "Person");
        assert_eq!(value["name"], PERSONAL_INFO.name);
        assert_eq!(value["email"], format!("mailto:{}", PERSONAL_INFO.email));
        assert_eq!(value["sameAs"].as_array().map(|a| a.len()), Some(3));
        assert_eq!(value["url"], "https://alexjohnson.dev");
    }
}
