use glam::{Mat4, Vec3, Vec4};

use crate::camera::{CameraRig, NavCommand};
use crate::error::SceneError;
use crate::input::Key;
use crate::instance::Instance;
use crate::layout::{BufferLayout, DrawRange, MeshRegistry};
use crate::traits::{CameraController, DrawTarget, SceneProvider};

/// One draw of a registered range under its own transform and colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCommand {
    pub model_view: Mat4,
    pub colour: Vec4,
    pub range: DrawRange,
}

/// Records one frame of draws; the GPU backend replays it.
#[derive(Debug, Clone, Default)]
pub struct CommandList {
    pub projection: Mat4,
    pub clear_colour: Vec4,
    pub commands: Vec<RenderCommand>,
}

impl DrawTarget for CommandList {
    fn begin(&mut self, projection: Mat4, clear_colour: Vec4) {
        self.projection = projection;
        self.clear_colour = clear_colour;
        self.commands.clear();
    }

    fn draw(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }
}

/// A built demo: shared vertex layout, instances in draw order and a camera.
#[derive(Debug, Clone)]
pub struct Scene {
    name: String,
    layout: BufferLayout,
    instances: Vec<Instance>,
    ranges: Vec<DrawRange>,
    camera: CameraRig,
    clear_colour: Vec4,
}

impl Scene {
    /// Generate meshes, lay out the vertex buffer and resolve every instance.
    pub fn build(provider: &dyn SceneProvider) -> Result<Self, SceneError> {
        let style = provider.mesh_style()?;
        let mut registry = MeshRegistry::new();
        provider.register_meshes(&mut registry, &style)?;
        let layout = BufferLayout::compute(&registry);

        let instances = provider.instances();
        let ranges = instances
            .iter()
            .map(|instance| resolve(&layout, instance))
            .collect::<Result<Vec<_>, _>>()?;

        let scene = Self {
            name: provider.name().to_string(),
            layout,
            instances,
            ranges,
            camera: provider.camera(),
            clear_colour: provider.clear_colour(),
        };
        log::info!(
            "Built scene '{}': {} meshes, {} vertices, {} instances, {} draws",
            scene.name,
            registry.len(),
            scene.layout.vertex_count(),
            scene.instances.len(),
            scene.draw_count()
        );
        Ok(scene)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layout(&self) -> &BufferLayout {
        &self.layout
    }

    /// Concatenated vertex data, uploaded once
    pub fn vertex_data(&self) -> &[Vec3] {
        self.layout.vertices()
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn clear_colour(&self) -> Vec4 {
        self.clear_colour
    }

    /// Draw calls per frame, counting every segment
    pub fn draw_count(&self) -> usize {
        self.instances.iter().map(|i| i.segments() as usize).sum()
    }

    pub fn fovy_degrees(&self) -> Option<f32> {
        self.camera.fovy_degrees()
    }

    pub fn view(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        self.camera.projection(aspect)
    }

    /// Emit one frame: the projection, then one command per instance segment.
    pub fn render(&self, aspect: f32, target: &mut dyn DrawTarget) {
        target.begin(self.projection(aspect), self.clear_colour);
        let view = self.view();
        for (instance, range) in self.instances.iter().zip(&self.ranges) {
            let model_view = view * instance.model();
            for segment in range.segments(instance.segments()) {
                target.draw(RenderCommand {
                    model_view,
                    colour: instance.colour(),
                    range: segment,
                });
            }
        }
    }

    /// Translate a key into a camera command and apply it.
    /// Returns true when the view changed and a redraw is due.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match self.camera.command_for(key) {
            Some(command) => self.apply(command),
            None => {
                log::trace!("{key:?} is not bound in '{}'", self.name);
                false
            }
        }
    }

    pub fn apply(&mut self, command: NavCommand) -> bool {
        self.camera.apply(command)
    }
}

fn resolve(layout: &BufferLayout, instance: &Instance) -> Result<DrawRange, SceneError> {
    let mesh = instance.mesh();
    let range = layout
        .range(mesh)
        .ok_or(SceneError::UnregisteredMesh(mesh))?;
    let segments = instance.segments();
    if range.count % segments != 0 {
        return Err(SceneError::UnevenSegments {
            mesh,
            count: range.count,
            segments,
        });
    }
    Ok(range)
}
