use super::EntityId;
use std::fmt;

/// Tag carried by a collider in the scene
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SurfaceTag {
    /// Terrain the tower stands on
    Ground,
    /// Trigger volume surrounding the play area
    BoundingBox,
    Block,
    Custom(String),
}

impl SurfaceTag {
    /// Parse an engine tag string. Unknown tags are kept verbatim.
    pub fn from_engine_tag(tag: &str) -> Self {
        match tag {
            "Ground" => SurfaceTag::Ground,
            "BoundingBox" => SurfaceTag::BoundingBox,
            "Block" => SurfaceTag::Block,
            other => SurfaceTag::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for SurfaceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceTag::Ground => write!(f, "Ground"),
            SurfaceTag::BoundingBox => write!(f, "BoundingBox"),
            SurfaceTag::Block => write!(f, "Block"),
            SurfaceTag::Custom(tag) => write!(f, "{}", tag),
        }
    }
}

/// Collision-start notification as seen by one block
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionContact {
    /// The other collider's entity
    pub other: EntityId,
    pub tags: Vec<SurfaceTag>,
}

impl CollisionContact {
    pub fn new(other: EntityId, tags: Vec<SurfaceTag>) -> Self {
        Self { other, tags }
    }

    /// Build a contact from raw engine tag strings
    pub fn from_engine_tags<'a, I>(other: EntityId, tags: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            other,
            tags: tags.into_iter().map(SurfaceTag::from_engine_tag).collect(),
        }
    }

    pub fn has_tag(&self, tag: &SurfaceTag) -> bool {
        self.tags.contains(tag)
    }
}
