//! Image references used as list markers
//!
//! The list engine never decodes image data. It only carries a reference to a
//! stored resource together with the size the marker should be drawn at.

use serde::{Deserialize, Serialize};

/// Unique identifier for stored image resources
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId(String);

impl ResourceId {
    /// Create a new resource ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// An image resource with its intrinsic size and the size it is drawn at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageResource {
    /// Resource holding the image bytes
    pub resource_id: ResourceId,
    /// Intrinsic width in points
    pub original_width: f32,
    /// Intrinsic height in points
    pub original_height: f32,
    /// Width the image is drawn at, in points
    pub scaled_width: f32,
    /// Height the image is drawn at, in points
    pub scaled_height: f32,
}

impl ImageResource {
    /// Create an image drawn at its intrinsic size
    pub fn new(resource_id: impl Into<ResourceId>, width: f32, height: f32) -> Self {
        Self {
            resource_id: resource_id.into(),
            original_width: width,
            original_height: height,
            scaled_width: width,
            scaled_height: height,
        }
    }

    /// Force the drawn width, leaving the height untouched
    pub fn scale_absolute_width(&mut self, width: f32) {
        self.scaled_width = width;
    }

    /// Force the drawn height, leaving the width untouched
    pub fn scale_absolute_height(&mut self, height: f32) {
        self.scaled_height = height;
    }
}
