//! Posable face instances.

use std::sync::Arc;

use rand::Rng;
use rand_distr::StandardNormal;

use crate::math::{Point3, Real};
use crate::mesh::FaceMesh;

use super::asset::{FaceModelAsset, ShapeModeSet};

/// One face being parameterized by a shared [`FaceModelAsset`].
///
/// The instance owns its weight vectors and deformed vertex buffer
/// exclusively; the asset is shared read-only, so any number of instances
/// can pose the same model without recomputing shape modes.
///
/// A fresh instance has all-zero weights and a buffer equal to the neutral
/// mesh. Setting weights does not deform: weight mutation and mesh
/// recomputation are decoupled, and the buffer only changes when
/// [`deform_mesh`](Self::deform_mesh) or [`reset_mesh`](Self::reset_mesh)
/// runs.
#[derive(Debug, Clone)]
pub struct FaceModelInstance {
    asset: Arc<FaceModelAsset>,
    identity_weights: Vec<Real>,
    expression_weights: Vec<Real>,
    deformed: Vec<Point3>,
}

impl FaceModelInstance {
    /// Create an instance with all-zero weights.
    ///
    /// The deformed buffer starts as an independently allocated copy of the
    /// neutral mesh's positions; with zero weights it reconstructs exactly
    /// the neutral mesh.
    pub fn new(asset: Arc<FaceModelAsset>) -> Self {
        let deformed = asset.neutral().positions().to_vec();
        let identity_weights = vec![0.0; asset.identities().len()];
        let expression_weights = vec![0.0; asset.expressions().len()];
        Self {
            asset,
            identity_weights,
            expression_weights,
            deformed,
        }
    }

    /// Create an instance with initial weights.
    ///
    /// Applies the same head-slice truncation as
    /// [`set_identity`](Self::set_identity) /
    /// [`set_expression`](Self::set_expression). Does not deform.
    pub fn with_weights(
        asset: Arc<FaceModelAsset>,
        identity_weights: &[Real],
        expression_weights: &[Real],
    ) -> Self {
        let mut instance = Self::new(asset);
        instance.set_identity(identity_weights);
        instance.set_expression(expression_weights);
        instance
    }

    /// The shared model asset.
    pub fn asset(&self) -> &Arc<FaceModelAsset> {
        &self.asset
    }

    /// Current identity weights, one per identity shape mode.
    pub fn identity_weights(&self) -> &[Real] {
        &self.identity_weights
    }

    /// Current expression weights, one per expression shape mode.
    pub fn expression_weights(&self) -> &[Real] {
        &self.expression_weights
    }

    /// Overwrite identity weights from the head of `weights`.
    ///
    /// Copies the first `min(K, weights.len())` entries, where `K` is the
    /// number of identity shape modes. The stored vector never changes
    /// length: entries past the provided slice keep their prior values, and
    /// provided entries past `K` are silently discarded.
    pub fn set_identity(&mut self, weights: &[Real]) {
        copy_head(&mut self.identity_weights, weights);
    }

    /// Overwrite expression weights from the head of `weights`.
    ///
    /// Same truncation contract as [`set_identity`](Self::set_identity).
    pub fn set_expression(&mut self, weights: &[Real]) {
        copy_head(&mut self.expression_weights, weights);
    }

    /// Replace the identity weights with standard-normal samples.
    ///
    /// Draws one independent `N(0, 1)` sample per identity shape mode and
    /// replaces the identity weight vector outright. Does not deform.
    pub fn randomize_identity(&mut self) {
        self.randomize_identity_with(&mut rand::rng());
    }

    /// [`randomize_identity`](Self::randomize_identity) with a caller-provided
    /// generator, for reproducible sampling.
    pub fn randomize_identity_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let count = self.identity_weights.len();
        self.identity_weights = (0..count).map(|_| rng.sample(StandardNormal)).collect();
    }

    /// Reset the deformed buffer to the neutral mesh's positions.
    pub fn reset_mesh(&mut self) {
        self.deformed.copy_from_slice(self.asset.neutral().positions());
    }

    /// Recompute the deformed buffer from the current weights.
    ///
    /// Resets to the neutral positions, then accumulates identity
    /// contributions followed by expression contributions, each set in mode
    /// order: `buffer[v] += weight[i] * mode[i][v]`. The summation order is
    /// fixed so results are bit-reproducible across runs.
    pub fn deform_mesh(&mut self) {
        self.reset_mesh();
        accumulate_modes(&mut self.deformed, &self.identity_weights, self.asset.identities());
        accumulate_modes(
            &mut self.deformed,
            &self.expression_weights,
            self.asset.expressions(),
        );
    }

    /// The current deformed vertex positions.
    pub fn deformed_positions(&self) -> &[Point3] {
        &self.deformed
    }

    /// The current deformed mesh, ready for export.
    ///
    /// Pairs a copy of the deformed buffer with the neutral mesh's topology.
    pub fn deformed_mesh(&self) -> FaceMesh {
        self.asset.neutral().with_positions(self.deformed.clone())
    }
}

/// Overwrite the head of `stored` with the head of `provided`.
fn copy_head(stored: &mut [Real], provided: &[Real]) {
    let count = stored.len().min(provided.len());
    stored[..count].copy_from_slice(&provided[..count]);
}

/// Add each mode's weighted contribution to the buffer, in set order.
fn accumulate_modes(buffer: &mut [Point3], weights: &[Real], modes: &ShapeModeSet) {
    for (weight, entry) in weights.iter().zip(modes.entries()) {
        if *weight == 0.0 {
            continue;
        }
        for (position, delta) in buffer.iter_mut().zip(entry.deltas()) {
            *position += *weight * delta;
        }
    }
}
