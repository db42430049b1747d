//! Debug toggle resource.
//!
//! The mere presence of this resource enables the stamina/motion overlay.
//! Remove it to disable debug drawing.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render system draws the debug overlay.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
