//! Location layout loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracker_core::{MapDimensions, Position};

use crate::layout::{LocationLayout, PlacedObject, PortalSpec};
use crate::loaders::{LoadResult, read_file};

/// Layout structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LayoutRon {
    name: String,
    dimensions: (u32, u32),
    player: (i32, i32),
    #[serde(default)]
    portals: Vec<(i32, i32, String)>, // (x, y, target)
    #[serde(default)]
    objects: Vec<(i32, i32, String, Option<String>)>, // (x, y, name, category)
}

/// Loader for location layouts from RON files.
pub struct LayoutLoader;

impl LayoutLoader {
    /// Load a layout from a RON file.
    pub fn load(path: &Path) -> LoadResult<LocationLayout> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse layout RON at {}: {}", path.display(), e))
    }

    /// Parse a layout from RON text.
    pub fn parse(content: &str) -> LoadResult<LocationLayout> {
        let data: LayoutRon = ron::from_str(content)?;

        let dimensions = MapDimensions::new(data.dimensions.0, data.dimensions.1);
        let player = Position::from(data.player);
        if !dimensions.contains(player) {
            anyhow::bail!(
                "player start {} lies outside the {}x{} layout",
                player,
                dimensions.width,
                dimensions.height
            );
        }

        let portals = data
            .portals
            .into_iter()
            .map(|(x, y, target)| PortalSpec {
                position: Position::new(x, y),
                target,
            })
            .collect();

        let objects = data
            .objects
            .into_iter()
            .map(|(x, y, name, category)| PlacedObject {
                position: Position::new(x, y),
                name,
                category,
            })
            .collect();

        Ok(LocationLayout {
            name: data.name,
            dimensions,
            player,
            portals,
            objects,
        })
    }
}
