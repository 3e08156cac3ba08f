//! Mesh data structures.

use std::sync::Arc;

use crate::math::Point3;

/// Face/vertex connectivity of a polygon mesh.
///
/// Stored as a flat vertex-index buffer plus a per-face vertex count, so
/// mixed triangle/quad meshes round-trip without retriangulation. The model
/// core never interprets this data; it is read from the mesh source,
/// shared between the neutral mesh and every mesh derived from it, and
/// handed back untouched on export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeshTopology {
    face_sizes: Vec<u32>,
    indices: Vec<u32>,
}

impl MeshTopology {
    /// Create a topology from per-face vertex counts and a flat index buffer.
    ///
    /// `face_sizes[f]` is the number of vertices of face `f`; `indices`
    /// concatenates the vertex indices of all faces in order. The counts
    /// must sum to `indices.len()`.
    pub fn new(face_sizes: Vec<u32>, indices: Vec<u32>) -> Self {
        debug_assert_eq!(
            face_sizes.iter().map(|&n| n as usize).sum::<usize>(),
            indices.len(),
            "face sizes must sum to the index buffer length"
        );
        Self {
            face_sizes,
            indices,
        }
    }

    /// An empty topology (vertex cloud, no faces).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of faces.
    pub fn face_count(&self) -> usize {
        self.face_sizes.len()
    }

    /// Per-face vertex counts.
    pub fn face_sizes(&self) -> &[u32] {
        &self.face_sizes
    }

    /// The flat vertex-index buffer.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Iterate over faces as slices of vertex indices.
    pub fn faces(&self) -> impl Iterator<Item = &[u32]> {
        let mut offset = 0usize;
        self.face_sizes.iter().map(move |&size| {
            let face = &self.indices[offset..offset + size as usize];
            offset += size as usize;
            face
        })
    }
}

/// A face mesh: ordered vertex positions plus shared topology.
///
/// Positions are indexed `0..N-1`; `N` is fixed by the neutral mesh once a
/// model is loaded and every morph target must match it. Topology lives
/// behind an [`Arc`] so that deformed meshes share connectivity with the
/// neutral mesh instead of copying it.
#[derive(Clone)]
pub struct FaceMesh {
    positions: Vec<Point3>,
    topology: Arc<MeshTopology>,
}

impl FaceMesh {
    /// Create a mesh from vertex positions and topology.
    pub fn new(positions: Vec<Point3>, topology: Arc<MeshTopology>) -> Self {
        Self {
            positions,
            topology,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Vertex positions in index order.
    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    /// The shared topology.
    pub fn topology(&self) -> &Arc<MeshTopology> {
        &self.topology
    }

    /// Build a mesh with new positions and this mesh's topology.
    ///
    /// The topology `Arc` is shared, not cloned.
    pub fn with_positions(&self, positions: Vec<Point3>) -> FaceMesh {
        FaceMesh {
            positions,
            topology: Arc::clone(&self.topology),
        }
    }
}

impl std::fmt::Debug for FaceMesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaceMesh")
            .field("vertex_count", &self.positions.len())
            .field("face_count", &self.topology.face_count())
            .finish()
    }
}
