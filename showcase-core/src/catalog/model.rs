//! Sample model.
//!
//! One `Sample` is one showcase card. Optional fields degrade to "absent"
//! instead of failing the whole document, so a sloppy entry never takes
//! the catalog down with it.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The fixed link keys, in the order the links row renders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Code,
    Documentation,
    Video,
}

impl LinkKind {
    pub const ALL: [LinkKind; 3] = [LinkKind::Code, LinkKind::Documentation, LinkKind::Video];

    /// The JSON key, also used as the button's style class.
    pub fn key(self) -> &'static str {
        match self {
            LinkKind::Code => "code",
            LinkKind::Documentation => "documentation",
            LinkKind::Video => "video",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Code => "Code",
            LinkKind::Documentation => "Documentation",
            LinkKind::Video => "Video",
        }
    }
}

/// External links of a sample. Unknown keys in the source are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(default, deserialize_with = "truthy_string")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "truthy_string")]
    pub documentation: Option<String>,
    #[serde(default, deserialize_with = "truthy_string")]
    pub video: Option<String>,
}

impl Links {
    pub fn get(&self, kind: LinkKind) -> Option<&str> {
        match kind {
            LinkKind::Code => self.code.as_deref(),
            LinkKind::Documentation => self.documentation.as_deref(),
            LinkKind::Video => self.video.as_deref(),
        }
    }

    /// Present links in render order.
    pub fn iter(&self) -> impl Iterator<Item = (LinkKind, &str)> + '_ {
        LinkKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|url| (kind, url)))
    }
}

/// A highlighted feature of a sample; rendered as a link when `link` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Special {
    pub title: String,
    #[serde(default, deserialize_with = "truthy_string")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSample")]
pub struct Sample {
    pub title: String,
    pub platform: String,
    pub technologies: Vec<String>,
    pub links: Links,
    pub specials: Vec<Special>,
    pub screenshots: Vec<String>,
}

/// Wire shape of a sample. Older data files spell the screenshot key
/// `scrreenshots`; both keys may appear, and the correctly spelled one wins
/// when it is non-empty.
#[derive(Deserialize)]
struct RawSample {
    title: String,
    platform: String,
    #[serde(default)]
    technologies: Vec<String>,
    #[serde(default)]
    links: Links,
    #[serde(default, deserialize_with = "lenient_list")]
    specials: Vec<Special>,
    #[serde(default, deserialize_with = "lenient_list")]
    screenshots: Vec<String>,
    #[serde(default, rename = "scrreenshots", deserialize_with = "lenient_list")]
    legacy_screenshots: Vec<String>,
}

impl From<RawSample> for Sample {
    fn from(raw: RawSample) -> Self {
        let screenshots = if raw.screenshots.is_empty() {
            raw.legacy_screenshots
        } else {
            raw.screenshots
        };
        Self {
            title: raw.title,
            platform: raw.platform,
            technologies: raw.technologies,
            links: raw.links,
            specials: raw.specials,
            screenshots,
        }
    }
}

impl Sample {
    pub fn new(title: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            platform: platform.into(),
            technologies: Vec::new(),
            links: Links::default(),
            specials: Vec::new(),
            screenshots: Vec::new(),
        }
    }

    pub fn with_technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = technologies.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_technology(&self, tag: &str) -> bool {
        self.technologies.iter().any(|t| t == tag)
    }
}

/// Any non-empty string is kept; `null`, `false`, `""`, numbers etc. become `None`.
fn truthy_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// `null` reads as an empty list.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
