//! The loaded model: shape modes and the immutable asset.

use crate::math::Vec3;
use crate::mesh::FaceMesh;

use super::error::ModelError;

/// A per-vertex displacement field: one delta per neutral-mesh vertex.
pub type ShapeMode = Vec<Vec3>;

/// Which of a model's two shape-mode sets to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeModeKind {
    /// Identity morph targets (`identity000`, `identity001`, …).
    Identity,
    /// Expression morph targets, in configuration order.
    Expression,
}

/// A named shape mode.
#[derive(Debug, Clone)]
pub struct ShapeModeEntry {
    name: String,
    deltas: ShapeMode,
}

impl ShapeModeEntry {
    /// The morph target's name (its filename stem).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Per-vertex displacements, indexed like the neutral mesh.
    pub fn deltas(&self) -> &[Vec3] {
        &self.deltas
    }
}

/// An ordered collection of shape modes.
///
/// Order is insertion order and is semantically meaningful: weight vectors
/// are positional, not keyed by name.
#[derive(Debug, Clone, Default)]
pub struct ShapeModeSet {
    entries: Vec<ShapeModeEntry>,
}

impl ShapeModeSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: String, deltas: ShapeMode) {
        self.entries.push(ShapeModeEntry { name, deltas });
    }

    /// Number of shape modes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in order.
    pub fn entries(&self) -> &[ShapeModeEntry] {
        &self.entries
    }

    /// The entry at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&ShapeModeEntry> {
        self.entries.get(index)
    }

    /// Mode names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}

/// An immutable loaded face model.
///
/// Holds the neutral mesh and the identity and expression shape-mode sets.
/// Never mutated after loading; share it across any number of
/// [`FaceModelInstance`](super::FaceModelInstance)s via `Arc`.
#[derive(Debug, Clone)]
pub struct FaceModelAsset {
    neutral: FaceMesh,
    identities: ShapeModeSet,
    expressions: ShapeModeSet,
}

impl FaceModelAsset {
    pub(crate) fn new(
        neutral: FaceMesh,
        identities: ShapeModeSet,
        expressions: ShapeModeSet,
    ) -> Self {
        Self {
            neutral,
            identities,
            expressions,
        }
    }

    /// The neutral mesh.
    pub fn neutral(&self) -> &FaceMesh {
        &self.neutral
    }

    /// Number of vertices; the dimensional contract for every shape mode.
    pub fn vertex_count(&self) -> usize {
        self.neutral.vertex_count()
    }

    /// The identity shape-mode set.
    pub fn identities(&self) -> &ShapeModeSet {
        &self.identities
    }

    /// The expression shape-mode set.
    pub fn expressions(&self) -> &ShapeModeSet {
        &self.expressions
    }

    /// The shape-mode set of the given kind.
    pub fn modes(&self, kind: ShapeModeKind) -> &ShapeModeSet {
        match kind {
            ShapeModeKind::Identity => &self.identities,
            ShapeModeKind::Expression => &self.expressions,
        }
    }

    /// Reconstruct the morph target a shape mode was computed from, as
    /// `neutral + mode`.
    ///
    /// Returns `None` if `index` is out of range for the set.
    pub fn reconstruct_mode(&self, kind: ShapeModeKind, index: usize) -> Option<FaceMesh> {
        let entry = self.modes(kind).get(index)?;
        let positions = self
            .neutral
            .positions()
            .iter()
            .zip(entry.deltas())
            .map(|(p, d)| p + d)
            .collect();
        Some(self.neutral.with_positions(positions))
    }
}

/// Compute the shape mode of one morph target relative to the neutral mesh.
///
/// The result is a per-vertex delta array, `offset[i] - neutral[i]` for
/// every vertex: exact componentwise subtraction, no clamping or
/// normalization. Pure function of its inputs.
///
/// # Errors
///
/// [`ModelError::TopologyMismatch`] if the morph target's vertex count
/// differs from the neutral mesh's; `name` identifies the offending asset.
pub fn compute_shape_mode(
    neutral: &FaceMesh,
    name: &str,
    offset: &FaceMesh,
) -> Result<ShapeMode, ModelError> {
    if offset.vertex_count() != neutral.vertex_count() {
        return Err(ModelError::TopologyMismatch {
            name: name.to_owned(),
            expected: neutral.vertex_count(),
            actual: offset.vertex_count(),
        });
    }
    Ok(offset
        .positions()
        .iter()
        .zip(neutral.positions())
        .map(|(o, n)| o - n)
        .collect())
}
