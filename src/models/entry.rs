use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const MAX_IMAGES: usize = 10;
pub const MAX_LINKS: usize = 5;

/// The three listing tables. They share one shape and differ only in
/// whether a row carries `links` or `location`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Blog,
    Project,
    Led,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [Self::Blog, Self::Project, Self::Led];

    pub fn table(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Project => "projects",
            Self::Led => "led",
        }
    }

    pub fn api_path(self) -> &'static str {
        match self {
            Self::Blog => "/api/blog",
            Self::Project => "/api/projects",
            Self::Led => "/api/led",
        }
    }

    pub fn has_links(self) -> bool {
        matches!(self, Self::Blog | Self::Project)
    }

    pub fn has_location(self) -> bool {
        matches!(self, Self::Led)
    }
}

impl FromStr for EntityKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blog" => Ok(Self::Blog),
            "projects" | "project" => Ok(Self::Project),
            "led" => Ok(Self::Led),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table())
    }
}

/// A stored row as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub img: String,
    pub images: Vec<String>,
    pub title: String,
    pub title_uz: String,
    pub title_en: String,
    pub description: String,
    pub description_uz: String,
    pub description_en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Entry {
    /// The shape echoed after a multipart create: localized variants are
    /// left blank even though they were stored.
    pub fn without_translations(self) -> Self {
        Self {
            title_uz: String::new(),
            title_en: String::new(),
            description_uz: String::new(),
            description_en: String::new(),
            ..self
        }
    }
}

/// JSON request body for create and update. Every field may be absent or
/// `null`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EntryPayload {
    pub title: Option<String>,
    pub title_uz: Option<String>,
    pub title_en: Option<String>,
    pub description: Option<String>,
    pub description_uz: Option<String>,
    pub description_en: Option<String>,
    pub location: Option<String>,
    pub images: Option<Vec<String>>,
    pub links: Option<Vec<String>>,
}

/// Canonical values about to be written to a row, whatever the request
/// shape was.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    pub title: String,
    pub title_uz: String,
    pub title_en: String,
    pub description: String,
    pub description_uz: String,
    pub description_en: String,
    pub location: String,
    pub images: Vec<String>,
    pub links: Vec<String>,
}

impl EntryDraft {
    pub fn img(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or("")
    }

    pub fn into_entry(self, kind: EntityKind, id: i64) -> Entry {
        let img = self.img().to_string();
        Entry {
            id,
            img,
            images: self.images,
            title: self.title,
            title_uz: self.title_uz,
            title_en: self.title_en,
            description: self.description,
            description_uz: self.description_uz,
            description_en: self.description_en,
            links: kind.has_links().then_some(self.links),
            location: kind.has_location().then_some(self.location),
        }
    }
}
