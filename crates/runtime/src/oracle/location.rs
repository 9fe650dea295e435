use std::collections::HashMap;

use tracker_content::LocationLayout;
use tracker_core::{
    CategorizeError, Categorizer, Detection, LocationMap, MapDimensions, Position,
};

/// Category reported for doors and warps.
pub const PORTAL_CATEGORY: &str = "door";

/// Location built from a [`LocationLayout`], mutable so the world can change
/// between scans.
#[derive(Clone, Debug)]
pub struct StaticLocation {
    name: String,
    dimensions: MapDimensions,
    objects: HashMap<Position, Detection>,
    portals: HashMap<Position, String>,
}

impl StaticLocation {
    pub fn new(name: impl Into<String>, dimensions: MapDimensions) -> Self {
        Self {
            name: name.into(),
            dimensions,
            objects: HashMap::new(),
            portals: HashMap::new(),
        }
    }

    pub fn from_layout(layout: &LocationLayout) -> Self {
        let mut location = Self::new(layout.name.clone(), layout.dimensions);
        for portal in &layout.portals {
            location
                .portals
                .insert(portal.position, portal.target.clone());
        }
        for object in &layout.objects {
            let detection = Detection {
                name: object.name.clone(),
                category: object.category.clone(),
            };
            location.objects.insert(object.position, detection);
        }
        location
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Places or replaces the object at `position`.
    pub fn place(&mut self, position: Position, detection: Detection) -> Option<Detection> {
        self.objects.insert(position, detection)
    }

    pub fn remove(&mut self, position: Position) -> Option<Detection> {
        self.objects.remove(&position)
    }

    pub fn add_portal(&mut self, position: Position, target: impl Into<String>) {
        self.portals.insert(position, target.into());
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn portal_count(&self) -> usize {
        self.portals.len()
    }
}

impl LocationMap for StaticLocation {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn is_portal(&self, position: Position) -> bool {
        self.portals.contains_key(&position)
    }
}

impl Categorizer for StaticLocation {
    fn categorize(
        &self,
        tile: Position,
        _map: &dyn LocationMap,
    ) -> Result<Option<Detection>, CategorizeError> {
        if let Some(detection) = self.objects.get(&tile) {
            return Ok(Some(detection.clone()));
        }
        Ok(self
            .portals
            .get(&tile)
            .map(|target| Detection::new(target.clone(), PORTAL_CATEGORY)))
    }
}
