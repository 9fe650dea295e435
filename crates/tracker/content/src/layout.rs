use tracker_core::{MapDimensions, Position};

/// A door or warp on a location edge.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortalSpec {
    pub position: Position,
    /// Where the portal leads, announced as the object name.
    pub target: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedObject {
    pub position: Position,
    pub name: String,
    pub category: Option<String>,
}

/// Static description of one location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationLayout {
    pub name: String,
    pub dimensions: MapDimensions,
    pub player: Position,
    pub portals: Vec<PortalSpec>,
    pub objects: Vec<PlacedObject>,
}

impl LocationLayout {
    pub fn new(name: impl Into<String>, dimensions: MapDimensions, player: Position) -> Self {
        Self {
            name: name.into(),
            dimensions,
            player,
            portals: Vec::new(),
            objects: Vec::new(),
        }
    }

    pub fn with_portal(mut self, position: Position, target: impl Into<String>) -> Self {
        self.portals.push(PortalSpec {
            position,
            target: target.into(),
        });
        self
    }

    pub fn with_object(
        mut self,
        position: Position,
        name: impl Into<String>,
        category: Option<&str>,
    ) -> Self {
        self.objects.push(PlacedObject {
            position,
            name: name.into(),
            category: category.map(str::to_owned),
        });
        self
    }
}
