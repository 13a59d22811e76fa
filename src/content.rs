use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::cycler::{CycleTiming, CyclerError, TextCycler, WordList};

const SITE_FILE: &str = "site.json";

/// Anchor ids of the page sections, in page order.
pub const SECTION_IDS: [&str; 6] = [
    "about",
    "projects",
    "testimonials",
    "experience",
    "approach",
    "contact",
];

static GLOBAL_SITE_CONTENT: LazyLock<Result<SiteContent, ContentError>> = LazyLock::new(load);

#[derive(Embed)]
#[folder = "content"]
struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(String),
    #[error("couldn't parse site content: {0}")]
    Parse(String),
    #[error("invalid site content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub full_name: String,
    pub email: String,
    pub github: String,
    pub tagline: String,
    pub headline: String,
    pub intro: String,
    pub resume_path: String,
    pub resume_file_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypewriterConfig {
    pub words: Vec<String>,
    #[serde(default)]
    pub timing: CycleTiming,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub class: String,
    pub img_class: String,
    pub title_class: String,
    pub img: String,
    pub spare_img: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechItem {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub img: String,
    pub icons: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub title: String,
    pub profile_img: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: u32,
    pub name: String,
    pub img: String,
    pub name_img: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub organisation: String,
    pub description: String,
    pub thumbnail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproachPhase {
    pub order: String,
    pub title: String,
    pub description: String,
    pub accent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: u32,
    pub label: String,
    pub img: String,
    pub url: String,
}

/// Everything the page renders, loaded from `content/site.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub owner: Owner,
    pub typewriter: TypewriterConfig,
    pub nav: Vec<NavItem>,
    pub grid: Vec<GridItem>,
    pub tech_stack: Vec<TechItem>,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub companies: Vec<Company>,
    pub experience: Vec<Experience>,
    pub approach: Vec<ApproachPhase>,
    pub socials: Vec<SocialLink>,
}

impl SiteContent {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content =
            serde_json::from_str::<Self>(json).map_err(|e| ContentError::Parse(e.to_string()))?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        WordList::new(self.typewriter.words.iter().map(String::as_str))
            .map_err(|e| ContentError::Invalid(format!("typewriter: {e}")))?;
        for item in &self.nav {
            let known = item
                .link
                .strip_prefix('#')
                .is_some_and(|id| SECTION_IDS.contains(&id));
            if !known {
                return Err(ContentError::Invalid(format!(
                    "nav item '{}' points at unknown section '{}'",
                    item.name, item.link
                )));
            }
        }
        Ok(())
    }

    pub fn typewriter_cycler(&self) -> Result<TextCycler, CyclerError> {
        TextCycler::from_words(self.typewriter.words.clone(), self.typewriter.timing)
    }
}

pub fn load() -> Result<SiteContent, ContentError> {
    let file =
        ContentAssets::get(SITE_FILE).ok_or(ContentError::Missing(SITE_FILE.to_string()))?;
    let json = std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
    SiteContent::from_json(json)
}

/// Site content, parsed once on first use.
pub fn site() -> Result<&'static SiteContent, ContentError> {
    GLOBAL_SITE_CONTENT.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(words: &str, nav: &str) -> String {
        format!(
            r##"{{
                "owner": {{
                    "name": "Ada", "full_name": "Ada L", "email": "ada@example.com",
                    "github": "https://github.com/ada", "tagline": "t", "headline": "h",
                    "intro": "i", "resume_path": "/r.pdf", "resume_file_name": "r.pdf"
                }},
                "typewriter": {{ "words": {words} }},
                "nav": {nav},
                "grid": [], "tech_stack": [], "projects": [], "testimonials": [],
                "companies": [], "experience": [], "approach": [], "socials": []
            }}"##
        )
    }

    #[test]
    fn test_embedded_content_loads() {
        let content = load().expect("embedded site.json should be valid");
        assert!(!content.typewriter.words.is_empty());
        assert_eq!(content.grid.len(), 6);
        assert!(!content.projects.is_empty());
        assert!(!content.socials.is_empty());
        assert_eq!(content.approach.len(), 3);

        let cycler = content.typewriter_cycler().unwrap();
        assert_eq!(cycler.words().len(), content.typewriter.words.len());
        assert_eq!(cycler.render(), "|");
    }

    #[test]
    fn test_global_is_cached() {
        let a = site().unwrap();
        let b = site().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_default_timing_when_omitted() {
        let content = SiteContent::from_json(&minimal(r#"["x"]"#, "[]")).unwrap();
        assert_eq!(content.typewriter.timing, CycleTiming::default());
    }

    #[test]
    fn test_empty_words_rejected() {
        let err = SiteContent::from_json(&minimal("[]", "[]")).unwrap_err();
        assert_eq!(
            err,
            ContentError::Invalid(format!("typewriter: {}", CyclerError::EmptyWordList))
        );
    }

    #[test]
    fn test_unknown_nav_anchor_rejected() {
        let nav = r##"[{ "name": "Blog", "link": "#blog" }]"##;
        let err = SiteContent::from_json(&minimal(r#"["x"]"#, nav)).unwrap_err();
        assert!(matches!(err, ContentError::Invalid(_)));

        let nav = r##"[{ "name": "About", "link": "#about" }]"##;
        assert!(SiteContent::from_json(&minimal(r#"["x"]"#, nav)).is_ok());
    }

    #[test]
    fn test_parse_error() {
        let err = SiteContent::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }
}
