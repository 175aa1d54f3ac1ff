pub mod camera;
pub mod frame;
pub mod traits;
pub mod viewport;

// Re-export key types for convenient access
pub use camera::{CameraUniform, PerspectiveCamera};
pub use frame::{DrawItem, ModelUniform, RenderFrame};
pub use traits::Renderer;
pub use viewport::Viewport;
