//! Procedural unit-space meshes.
//!
//! Every primitive family is generated once per scene from a [`MeshStyle`] and
//! then shared by all instances of that family through its draw range.

mod circular;
mod octagonal;
mod prism;
mod surface;

use std::fmt;

use glam::Vec3;

use crate::error::SceneError;

pub use surface::{SurfaceGrid, SurfaceMeshes};

/// How a flat vertex list is assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    TriangleList,
    TriangleStrip,
    /// Triangles share the first vertex of the range
    TriangleFan,
    LineStrip,
}

impl Topology {
    /// Relative indices turning a fan of `count` vertices into a triangle list.
    ///
    /// Each triangle is `(0, i, i + 1)`; add the range's first vertex as base vertex.
    pub fn fan_indices(count: u32) -> Vec<u32> {
        (1..count.saturating_sub(1))
            .flat_map(|i| [0, i, i + 1])
            .collect()
    }
}

/// Primitive families with one shared unit-space mesh each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Cylinder,
    Cone,
    RectangularPrism,
    Octagon,
    OctagonalPyramid,
    Circle,
    CircularStrip,
    Step,
}

impl Shape {
    pub const ALL: [Shape; 8] = [
        Shape::Cylinder,
        Shape::Cone,
        Shape::RectangularPrism,
        Shape::Octagon,
        Shape::OctagonalPyramid,
        Shape::Circle,
        Shape::CircularStrip,
        Shape::Step,
    ];

    pub const fn topology(self) -> Topology {
        match self {
            Shape::Cylinder | Shape::CircularStrip | Shape::Step => Topology::TriangleStrip,
            Shape::Cone | Shape::Octagon | Shape::OctagonalPyramid | Shape::Circle => {
                Topology::TriangleFan
            }
            Shape::RectangularPrism => Topology::TriangleList,
        }
    }

    /// Number of vertices the generator emits for `style`.
    pub fn vertex_count(self, style: &MeshStyle) -> usize {
        let ring = style.ring_samples();
        match self {
            Shape::Cylinder | Shape::CircularStrip => 2 * ring,
            Shape::Cone => ring + 1,
            Shape::Circle => ring,
            Shape::RectangularPrism => prism::VERTEX_COUNT,
            Shape::Octagon => octagonal::SIDES,
            Shape::OctagonalPyramid => octagonal::SIDES + 2,
            Shape::Step => 2 * (octagonal::SIDES + 1),
        }
    }

    pub fn generate(self, style: &MeshStyle) -> Mesh {
        let vertices = match self {
            Shape::Cylinder => circular::cylinder(style),
            Shape::Cone => circular::cone(style),
            Shape::Circle => circular::circle(style),
            Shape::CircularStrip => circular::circular_strip(style),
            Shape::RectangularPrism => prism::rectangular_prism(style.box_anchor),
            Shape::Octagon => octagonal::octagon(),
            Shape::OctagonalPyramid => octagonal::octagonal_pyramid(),
            Shape::Step => octagonal::step(),
        };
        Mesh::new(vertices, self.topology())
    }

    pub const fn name(self) -> &'static str {
        match self {
            Shape::Cylinder => "cylinder",
            Shape::Cone => "cone",
            Shape::RectangularPrism => "rectangular-prism",
            Shape::Octagon => "octagon",
            Shape::OctagonalPyramid => "octagonal-pyramid",
            Shape::Circle => "circle",
            Shape::CircularStrip => "circular-strip",
            Shape::Step => "step",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable local-space vertex list with its draw topology.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    topology: Topology,
}

impl Mesh {
    pub fn new(vertices: Vec<Vec3>, topology: Topology) -> Self {
        Self { vertices, topology }
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Vertical extent of the cylinder side wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CylinderSpan {
    /// z from 0 to 1, base on the ground
    Unit,
    /// z from -1 to 1, centred on the origin
    Symmetric,
}

impl CylinderSpan {
    /// Every span ends at z = 1
    pub const TOP: f32 = 1.0;

    pub const fn bottom(self) -> f32 {
        match self {
            CylinderSpan::Unit => 0.0,
            CylinderSpan::Symmetric => -1.0,
        }
    }
}

/// Placement of the unit box relative to its local origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxAnchor {
    /// Spans 0..1 on every axis
    Corner,
    /// Spans -0.5..0.5 on every axis
    Centered,
}

/// Per-scene parameters for the primitive generators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshStyle {
    angular_step: u32,
    pub cylinder_span: CylinderSpan,
    pub box_anchor: BoxAnchor,
    pub strip_inner_radius: f32,
}

impl MeshStyle {
    pub const DEFAULT_ANGULAR_STEP: u32 = 10;
    pub const DEFAULT_INNER_RADIUS: f32 = 0.85;

    /// Style sampling round shapes every `degrees`; must divide 360 so rings close.
    pub fn with_angular_step(degrees: u32) -> Result<Self, SceneError> {
        if degrees == 0 || 360 % degrees != 0 {
            return Err(SceneError::InvalidAngularStep(degrees));
        }
        Ok(Self {
            angular_step: degrees,
            ..Self::default()
        })
    }

    pub fn cylinder_span(mut self, span: CylinderSpan) -> Self {
        self.cylinder_span = span;
        self
    }

    pub fn box_anchor(mut self, anchor: BoxAnchor) -> Self {
        self.box_anchor = anchor;
        self
    }

    pub fn angular_step(&self) -> u32 {
        self.angular_step
    }

    /// Samples on one closed ring, 0 and 360 degrees both included
    pub fn ring_samples(&self) -> usize {
        (360 / self.angular_step) as usize + 1
    }

    /// Unit-circle points at every step from 0 to 360 degrees inclusive
    pub(crate) fn ring(&self) -> impl Iterator<Item = (f32, f32)> {
        (0..=360u32).step_by(self.angular_step as usize).map(|degrees| {
            let theta = (degrees as f32).to_radians();
            (theta.cos(), theta.sin())
        })
    }
}

impl Default for MeshStyle {
    fn default() -> Self {
        Self {
            angular_step: Self::DEFAULT_ANGULAR_STEP,
            cylinder_span: CylinderSpan::Unit,
            box_anchor: BoxAnchor::Corner,
            strip_inner_radius: Self::DEFAULT_INNER_RADIUS,
        }
    }
}
