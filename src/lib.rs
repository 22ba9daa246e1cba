pub mod camera;
pub mod cli;
pub mod composite;
pub mod config;
pub mod error;
pub mod input;
pub mod instance;
pub mod layout;
pub mod math;
pub mod mesh;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod traits;
pub mod types;

pub use error::SceneError;
pub use scene::{RenderCommand, Scene};
pub use scenes::{build_scene, SceneKind};
