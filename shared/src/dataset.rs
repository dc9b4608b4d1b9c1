use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::site::{
    Achievement, Event, GalleryPhoto, Member, NavLink, Stat, TimelineItem, VideoItem,
};

const SITE_JSON: &str = include_str!("../data/site.json");

static SITE: LazyLock<SiteData> = LazyLock::new(|| {
    load_embedded().unwrap_or_else(|e| panic!("embedded site dataset is invalid: {e}"))
});

/// Parse and validate the dataset compiled into this crate.
pub fn load_embedded() -> Result<SiteData, DatasetError> {
    SiteData::from_json(SITE_JSON)
}

/// The embedded dataset, parsed and validated on first use.
pub fn site() -> &'static SiteData {
    &SITE
}

/// All static content of the site. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteData {
    pub nav_links: Vec<NavLink>,
    pub stats: Vec<Stat>,
    pub timeline: Vec<TimelineItem>,
    pub achievements: Vec<Achievement>,
    pub members: Vec<Member>,
    pub gallery: Vec<GalleryPhoto>,
    #[serde(default)]
    pub videos: Vec<VideoItem>,
    pub events: Vec<Event>,
}

#[derive(Debug)]
pub enum DatasetError {
    Parse(serde_json::Error),
    DuplicateId {
        collection: &'static str,
        id: String,
    },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "failed to parse dataset: {e}"),
            Self::DuplicateId { collection, id } => {
                write!(f, "duplicate id {id:?} in {collection}")
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::DuplicateId { .. } => None,
        }
    }
}

impl SiteData {
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let data: Self = serde_json::from_str(json).map_err(DatasetError::Parse)?;
        data.validate()?;
        Ok(data)
    }

    /// Ids must be unique within each collection.
    pub fn validate(&self) -> Result<(), DatasetError> {
        ensure_unique("members", self.members.iter().map(|m| m.id.as_str()))?;
        ensure_unique("gallery", self.gallery.iter().map(|p| p.id.as_str()))?;
        ensure_unique("videos", self.videos.iter().map(|v| v.id.as_str()))?;
        ensure_unique("events", self.events.iter().map(|e| e.id.as_str()))?;
        ensure_unique(
            "achievements",
            self.achievements.iter().map(|a| a.id.as_str()),
        )?;
        Ok(())
    }

    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }
}

fn ensure_unique<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), DatasetError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DatasetError::DuplicateId {
                collection,
                id: id.to_owned(),
            });
        }
    }
    Ok(())
}

/// Strong ETag for a serialized payload, derived from its CRC32.
pub fn payload_etag(kind: &str, body: &[u8]) -> String {
    format!("\"{kind}-{:08x}\"", crc32fast::hash(body))
}
