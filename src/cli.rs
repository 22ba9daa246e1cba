// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::scenes::SceneKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-demos")]
#[command(about = "Procedural 3D scene demos", long_about = None)]
pub struct Cli {
    /// Scene to open
    #[arg(long, value_enum, default_value_t = SceneKind::Bandstand)]
    pub scene: SceneKind,

    /// JSON file overriding window size, camera steps and the woodland seed
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Hide the field-of-view window
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Print the vertex buffer layout and exit without opening a window
    #[arg(long = "print-layout", default_value = "false")]
    pub print_layout: bool,
}
