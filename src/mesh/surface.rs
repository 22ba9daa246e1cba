use glam::Vec3;

use super::{Mesh, Topology};

/// Square sample grid over `[-1, 1]²` for the height field `z = r⁴ - r²`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceGrid {
    divisions: u32,
}

/// Filled strips plus the two families of wire lines over the same samples.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMeshes {
    pub fill: Mesh,
    pub rows: Mesh,
    pub columns: Mesh,
}

impl SurfaceGrid {
    pub const DEFAULT_DIVISIONS: u32 = 50;

    pub fn new(divisions: u32) -> Self {
        Self {
            divisions: divisions.max(1),
        }
    }

    pub fn divisions(&self) -> u32 {
        self.divisions
    }

    /// Samples along one edge of the grid
    pub fn samples(&self) -> u32 {
        self.divisions + 1
    }

    /// Vertices in one fill strip; the fill mesh holds `divisions` of these
    pub fn strip_len(&self) -> u32 {
        2 * self.samples()
    }

    pub fn point(&self, i: u32, j: u32) -> Vec3 {
        let n = self.divisions as f32;
        let x = i as f32 / n;
        let y = j as f32 / n;
        let r2 = x * x + y * y;
        Vec3::new(2.0 * x - 1.0, 2.0 * y - 1.0, r2 * r2 - r2)
    }

    pub fn generate(&self) -> SurfaceMeshes {
        let n = self.divisions;
        let fill = (0..n)
            .flat_map(|i| (0..=n).flat_map(move |j| [(i, j), (i + 1, j)]))
            .map(|(i, j)| self.point(i, j))
            .collect();
        let rows = (0..=n)
            .flat_map(|i| (0..=n).map(move |j| (i, j)))
            .map(|(i, j)| self.point(i, j))
            .collect();
        let columns = (0..=n)
            .flat_map(|j| (0..=n).map(move |i| (i, j)))
            .map(|(i, j)| self.point(i, j))
            .collect();

        SurfaceMeshes {
            fill: Mesh::new(fill, Topology::TriangleStrip),
            rows: Mesh::new(rows, Topology::LineStrip),
            columns: Mesh::new(columns, Topology::LineStrip),
        }
    }
}

impl Default for SurfaceGrid {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIVISIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_and_height() {
        let grid = SurfaceGrid::default();
        assert_eq!(grid.point(0, 0), Vec3::new(-1.0, -1.0, 0.0));
        // r² = 1 at (50, 0), so z = 1 - 1
        assert!(grid.point(50, 0).abs_diff_eq(Vec3::new(1.0, -1.0, 0.0), 1e-6));
        // r² = 0.5 gives the minimum z = -0.25
        let p = grid.point(25, 25);
        assert!((p.z + 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_mesh_sizes() {
        let meshes = SurfaceGrid::default().generate();
        assert_eq!(meshes.fill.len(), 50 * 102);
        assert_eq!(meshes.rows.len(), 51 * 51);
        assert_eq!(meshes.columns.len(), 51 * 51);
    }
}
