mod bandstand;
mod cartwheel;
mod common;
mod surface;
mod woodland;

use std::fmt;

use clap::ValueEnum;

pub use bandstand::Bandstand;
pub use cartwheel::Cartwheel;
pub use surface::Surface;
pub use woodland::Woodland;

use crate::config::DemoConfig;
use crate::error::SceneError;
use crate::scene::Scene;
use crate::traits::SceneProvider;

/// The demos selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum SceneKind {
    Bandstand,
    Cartwheel,
    Woodland,
    Surface,
}

impl SceneKind {
    pub const ALL: [SceneKind; 4] = [
        SceneKind::Bandstand,
        SceneKind::Cartwheel,
        SceneKind::Woodland,
        SceneKind::Surface,
    ];

    pub fn provider(self, config: &DemoConfig) -> Box<dyn SceneProvider> {
        match self {
            SceneKind::Bandstand => Box::new(Bandstand::new(config.fly)),
            SceneKind::Cartwheel => Box::new(Cartwheel::new(config.orbit)),
            SceneKind::Woodland => Box::new(Woodland::new(config.fly, config.woodland_seed)),
            SceneKind::Surface => Box::new(Surface::new(config.orbit)),
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SceneKind::Bandstand => "bandstand",
            SceneKind::Cartwheel => "cartwheel",
            SceneKind::Woodland => "woodland",
            SceneKind::Surface => "surface",
        };
        f.write_str(name)
    }
}

pub fn build_scene(kind: SceneKind, config: &DemoConfig) -> Result<Scene, SceneError> {
    Scene::build(kind.provider(config).as_ref())
}
