/// cube3d Core Library - Shared geometry, transformation and frame logic
/// 
/// This library provides the backend-independent core of the wireframe
/// viewer: vertex rotation and perspective projection, the cube model,
/// the adjustable view state and the per-frame render pipeline.

pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod overlay;
pub mod projection;
pub mod scene;
pub mod surface;
pub mod transform;
pub mod view;

// Re-export commonly used types
pub use config::Config;
pub use error::{ConfigError, TransformError};
pub use geometry::{Face, Vertex, Wireframe};
pub use input::{Action, Control};
pub use overlay::{status_lines, StatusLine};
pub use projection::Camera;
pub use scene::{FrameOutcome, Scene};
pub use surface::{Color, ScreenPoint, Surface};
pub use transform::{RotationState, Transform};
pub use view::ViewState;
