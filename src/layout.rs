//! Shared vertex store for a scene.
//!
//! Meshes are registered once in declaration order. [`BufferLayout::compute`]
//! then walks the registry a single time, handing every mesh a contiguous
//! range of the one vertex buffer that the backend uploads.

use std::fmt;

use glam::Vec3;

use crate::error::SceneError;
use crate::mesh::{Mesh, MeshStyle, Shape, Topology};

/// Identifies a registered mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKey {
    /// Shared unit mesh of a primitive family
    Shape(Shape),
    /// Scene-specific static mesh (ground, paths, roof, plot)
    Named(&'static str),
}

impl fmt::Display for MeshKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshKey::Shape(shape) => write!(f, "{shape}"),
            MeshKey::Named(name) => f.write_str(name),
        }
    }
}

impl From<Shape> for MeshKey {
    fn from(shape: Shape) -> Self {
        MeshKey::Shape(shape)
    }
}

/// Ordered key -> mesh mapping; a key may be registered once.
#[derive(Debug, Clone, Default)]
pub struct MeshRegistry {
    entries: Vec<(MeshKey, Mesh)>,
}

impl MeshRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, key: impl Into<MeshKey>, mesh: Mesh) -> Result<(), SceneError> {
        let key = key.into();
        if self.contains(key) {
            return Err(SceneError::DuplicateMesh(key));
        }
        self.entries.push((key, mesh));
        Ok(())
    }

    /// Generate and register the unit mesh of `shape`.
    pub fn register_shape(&mut self, shape: Shape, style: &MeshStyle) -> Result<(), SceneError> {
        self.register(shape, shape.generate(style))
    }

    pub fn contains(&self, key: MeshKey) -> bool {
        self.entries.iter().any(|(k, _)| *k == key)
    }

    pub fn get(&self, key: impl Into<MeshKey>) -> Option<&Mesh> {
        let key = key.into();
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, m)| m)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MeshKey, &Mesh)> {
        self.entries.iter().map(|(k, m)| (*k, m))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_vertices(&self) -> usize {
        self.entries.iter().map(|(_, m)| m.len()).sum()
    }
}

/// Contiguous run of vertices in the shared buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRange {
    pub first: u32,
    pub count: u32,
    pub topology: Topology,
}

impl DrawRange {
    pub fn end(&self) -> u32 {
        self.first + self.count
    }

    /// Split into `n` equal consecutive sub-ranges. Any remainder is dropped;
    /// scene build rejects ranges that do not divide evenly.
    pub fn segments(self, n: u32) -> impl Iterator<Item = DrawRange> {
        let n = n.max(1);
        let len = self.count / n;
        (0..n).map(move |k| DrawRange {
            first: self.first + k * len,
            count: len,
            topology: self.topology,
        })
    }

    pub fn contains(&self, other: &DrawRange) -> bool {
        other.first >= self.first && other.end() <= self.end()
    }
}

/// First offset for each count in order: a running total starting at 0.
pub fn assign_offsets(counts: impl IntoIterator<Item = u32>) -> Vec<u32> {
    counts
        .into_iter()
        .scan(0u32, |total, count| {
            let first = *total;
            *total += count;
            Some(first)
        })
        .collect()
}

/// Offset table plus the concatenated vertex data for one registry.
#[derive(Debug, Clone, Default)]
pub struct BufferLayout {
    ranges: Vec<(MeshKey, DrawRange)>,
    vertices: Vec<Vec3>,
}

impl BufferLayout {
    pub fn compute(registry: &MeshRegistry) -> Self {
        let offsets = assign_offsets(registry.iter().map(|(_, mesh)| mesh.len() as u32));
        let mut vertices = Vec::with_capacity(registry.total_vertices());
        let mut ranges = Vec::with_capacity(registry.len());

        for ((key, mesh), first) in registry.iter().zip(offsets) {
            let range = DrawRange {
                first,
                count: mesh.len() as u32,
                topology: mesh.topology(),
            };
            log::debug!(
                "{key}: first {} count {} ({:?})",
                range.first,
                range.count,
                range.topology
            );
            vertices.extend_from_slice(mesh.vertices());
            ranges.push((key, range));
        }

        Self { ranges, vertices }
    }

    pub fn range(&self, key: impl Into<MeshKey>) -> Option<DrawRange> {
        let key = key.into();
        self.ranges.iter().find(|(k, _)| *k == key).map(|(_, r)| *r)
    }

    pub fn ranges(&self) -> &[(MeshKey, DrawRange)] {
        &self.ranges
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Every distinct fan size in the layout, ascending
    pub fn fan_sizes(&self) -> Vec<u32> {
        let mut sizes: Vec<u32> = self
            .ranges
            .iter()
            .filter(|(_, r)| r.topology == Topology::TriangleFan)
            .map(|(_, r)| r.count)
            .collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_offsets_running_total() {
        assert_eq!(assign_offsets([4, 4, 36, 74]), vec![0, 4, 8, 44]);
        assert!(assign_offsets(Vec::new()).is_empty());
    }

    #[test]
    fn test_segments_split_evenly() {
        let range = DrawRange {
            first: 10,
            count: 6,
            topology: Topology::LineStrip,
        };
        let parts: Vec<_> = range.segments(3).collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].first, 10);
        assert_eq!(parts[2].first, 14);
        assert!(parts.iter().all(|p| p.count == 2 && range.contains(p)));
    }

    #[test]
    fn test_key_display() {
        assert_eq!(MeshKey::Shape(Shape::Cone).to_string(), "cone");
        assert_eq!(MeshKey::Named("grass").to_string(), "grass");
    }
}
