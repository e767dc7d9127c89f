use std::{sync::LazyLock, time::Duration};

use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::motion::{
    IntroSequence, Slide, SlideSelector, TypewriterCycler, TypewriterTiming, ViewportClass,
    DEFAULT_DWELL,
};

pub static SITE_CONTENT: LazyLock<Result<SiteContent, ConfigError>> = LazyLock::new(load);

pub const BUILD_TIME: &str = env!("BUILD_TIME");

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub owner: String,
    pub tagline: String,
    pub resume_href: String,
    pub avatar: String,
    pub roles: Vec<String>,
    #[serde(default)]
    pub typewriter: TypewriterMillis,
    #[serde(default)]
    pub intro: IntroContent,
    pub socials: Vec<SocialLink>,
    pub about: About,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub testimonials: Vec<Testimonial>,
    pub contact: ContactContent,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TypewriterMillis {
    pub typing: u64,
    pub deleting: u64,
    pub pause: u64,
}

impl Default for TypewriterMillis {
    fn default() -> Self {
        Self {
            typing: 60,
            deleting: 40,
            pause: 1200,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntroContent {
    pub greetings: Vec<String>,
    #[serde(default = "default_dwell_ms")]
    pub dwell_ms: u64,
}

impl Default for IntroContent {
    fn default() -> Self {
        Self {
            greetings: vec!["Hello".to_string()],
            dwell_ms: default_dwell_ms(),
        }
    }
}

fn default_dwell_ms() -> u64 {
    DEFAULT_DWELL.as_millis() as u64
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub link: String,
    pub bg_color: String,
    pub image: String,
    #[serde(default)]
    pub compact_image: Option<String>,
}

impl Project {
    pub fn image_for(&self, viewport: ViewportClass) -> &str {
        match (viewport, &self.compact_image) {
            (ViewportClass::Compact, Some(img)) => img,
            _ => &self.image,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub quote: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactContent {
    pub heading: String,
    pub image: String,
}

impl SiteContent {
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        serde_json::from_slice(bytes).map_err(|e| ConfigError::Content(e.to_string()))
    }

    pub fn typewriter_timing(&self) -> TypewriterTiming {
        let t = self.typewriter;
        TypewriterTiming::from_millis(t.typing, t.deleting, t.pause)
    }

    pub fn typewriter(&self) -> Result<TypewriterCycler, ConfigError> {
        TypewriterCycler::new(self.roles.clone(), self.typewriter_timing())
    }

    pub fn intro_sequence(&self) -> IntroSequence {
        IntroSequence::new(
            self.intro.greetings.clone(),
            Duration::from_millis(self.intro.dwell_ms),
        )
    }

    pub fn slides(&self) -> Vec<Slide> {
        Slide::from_ids(self.projects.iter().map(|p| p.title.as_str()))
    }

    pub fn project_for(&self, slide: &Slide) -> Option<&Project> {
        self.projects.get(slide.order)
    }

    pub fn skips_intro(&self) -> bool {
        self.intro.greetings.is_empty()
    }

    pub fn slide_selector(&self) -> Result<SlideSelector, ConfigError> {
        SlideSelector::for_slides(&self.slides())
    }

    /// Checks everything the page needs before any animation starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.typewriter()?;
        self.slide_selector()?;
        Ok(())
    }
}

fn load() -> Result<SiteContent, ConfigError> {
    let file = Assets::get("site.json")
        .ok_or_else(|| ConfigError::Content("site.json is not embedded".to_string()))?;
    let content = SiteContent::from_json(&file.data)?;
    content.validate()?;
    log::debug!(
        "loaded site content for {} ({} projects)",
        content.owner,
        content.projects.len()
    );
    Ok(content)
}

pub fn site_content() -> Result<&'static SiteContent, ConfigError> {
    SITE_CONTENT.as_ref().map_err(Clone::clone)
}

pub fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .ok()
        .map(|d| d.year())
}
