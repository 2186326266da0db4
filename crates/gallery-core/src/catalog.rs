//! The artwork catalog: a fixed list of records loaded once at startup.
//!
//! The catalog ships embedded in the crate as JSON of the form
//! `{"museum_artworks": [...]}`. Records are immutable after loading; the
//! same serialized form is attached to each artwork node so the interaction
//! layer can recover the record from the scene.

use crate::error::{GalleryError, Result};
use fnv::FnvHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub static BUILTIN_CATALOG_JSON: &str = include_str!("../assets/catalog.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    North,
    South,
    East,
    West,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::North, Wall::South, Wall::East, Wall::West];

    pub fn as_str(self) -> &'static str {
        match self {
            Wall::North => "north",
            Wall::South => "south",
            Wall::East => "east",
            Wall::West => "west",
        }
    }

    /// North and south walls run along x; east and west along z.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Wall::North | Wall::South)
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Wall {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "north" => Ok(Wall::North),
            "south" => Ok(Wall::South),
            "east" => Ok(Wall::East),
            "west" => Ok(Wall::West),
            other => Err(GalleryError::UnknownWall(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameSize {
    Small,
    Medium,
    Large,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub year: String,
    pub description: String,
    pub image_url: String,
    pub wall_position: Wall,
    pub frame_size: FrameSize,
}

impl ArtworkRecord {
    /// Serialized form attached to the artwork's scene node.
    pub fn to_attribute(&self) -> String {
        // Plain strings and unit enums cannot fail to serialize.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_attribute(node: &str, payload: &str) -> Result<Self> {
        serde_json::from_str(payload).map_err(|source| GalleryError::MalformedArtworkData {
            node: node.to_string(),
            source,
        })
    }

    /// Text for the small plate under the frame.
    pub fn label_text(&self) -> String {
        format!("{}\n{}, {}", self.title, self.artist, self.year)
    }

    /// Artist/year line of the description panel.
    pub fn info_line(&self) -> String {
        format!("{} • {}", self.artist, self.year)
    }

    pub fn node_id(&self) -> String {
        format!("artwork-{}", self.id)
    }
}

// Wall names stay strings until validation so one bad record does not sink
// the whole catalog.
#[derive(Deserialize)]
struct RawArtwork {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    artist: String,
    #[serde(default)]
    year: String,
    #[serde(default)]
    description: String,
    image_url: String,
    wall_position: String,
    frame_size: FrameSize,
}

#[derive(Deserialize)]
struct RawCatalog {
    museum_artworks: Vec<RawArtwork>,
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    artworks: Vec<ArtworkRecord>,
}

impl Catalog {
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        let mut seen = FnvHashSet::default();
        let mut artworks = Vec::with_capacity(raw.museum_artworks.len());
        for r in raw.museum_artworks {
            let wall = match r.wall_position.parse::<Wall>() {
                Ok(w) => w,
                Err(e) => {
                    log::warn!("[catalog] skipping `{}`: {}", r.id, e);
                    continue;
                }
            };
            if !seen.insert(r.id.clone()) {
                return Err(GalleryError::DuplicateArtworkId(r.id));
            }
            artworks.push(ArtworkRecord {
                id: r.id,
                title: r.title,
                artist: r.artist,
                year: r.year,
                description: r.description,
                image_url: r.image_url,
                wall_position: wall,
                frame_size: r.frame_size,
            });
        }
        log::info!("[catalog] loaded {} artworks", artworks.len());
        Ok(Self { artworks })
    }

    pub fn from_records(artworks: Vec<ArtworkRecord>) -> Result<Self> {
        let mut seen = FnvHashSet::default();
        for a in &artworks {
            if !seen.insert(a.id.as_str()) {
                return Err(GalleryError::DuplicateArtworkId(a.id.clone()));
            }
        }
        Ok(Self { artworks })
    }

    #[inline]
    pub fn artworks(&self) -> &[ArtworkRecord] {
        &self.artworks
    }

    pub fn get(&self, id: &str) -> Option<&ArtworkRecord> {
        self.artworks.iter().find(|a| a.id == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }
}
