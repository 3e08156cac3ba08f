//! Integration tests for model loading and deformation.
//!
//! Fixtures are model directories built in a [`MemoryStore`]. The canonical
//! fixture is a two-vertex model with one "smile" expression and two
//! identity morph targets.

use std::path::Path;
use std::sync::Arc;

use crate::math::Point3;
use crate::mesh::{FaceMesh, MeshTopology};
use crate::store::MemoryStore;

use super::{FaceModelAsset, ModelLoader};

mod deform_test;

/// Directory the fixtures live under inside the store.
pub(crate) const MODEL_DIR: &str = "model";

pub(crate) fn pt(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

/// Deformed position of the fixture's first vertex at smile weight 1.0.
pub(crate) fn smile_position() -> Point3 {
    pt(1.0, 0.0, 0.0)
}

/// A mesh with the given positions and no faces.
pub(crate) fn mesh(positions: Vec<Point3>) -> FaceMesh {
    FaceMesh::new(positions, Arc::new(MeshTopology::empty()))
}

/// The canonical fixture directory:
///
/// - neutral: two vertices at the origin
/// - expression "smile": first vertex moved to (1, 0, 0)
/// - identity000: first vertex moved to (0, 1, 0)
/// - identity001: second vertex moved to (0, 0, 2)
pub(crate) fn fixture_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.insert_text(
        "model/vertex_indices.json",
        r#"{"expressions": ["smile"]}"#,
    );
    let neutral = mesh(vec![pt(0.0, 0.0, 0.0), pt(0.0, 0.0, 0.0)]);
    store.insert_mesh(
        "model/smile.obj",
        neutral.with_positions(vec![pt(1.0, 0.0, 0.0), pt(0.0, 0.0, 0.0)]),
    );
    store.insert_mesh(
        "model/identity000.obj",
        neutral.with_positions(vec![pt(0.0, 1.0, 0.0), pt(0.0, 0.0, 0.0)]),
    );
    store.insert_mesh(
        "model/identity001.obj",
        neutral.with_positions(vec![pt(0.0, 0.0, 0.0), pt(0.0, 0.0, 2.0)]),
    );
    store.insert_mesh("model/generic_neutral_mesh.obj", neutral);
    store
}

/// Load the canonical fixture.
pub(crate) fn sample_asset() -> Arc<FaceModelAsset> {
    let loader = ModelLoader::new(fixture_store());
    Arc::new(loader.load(Path::new(MODEL_DIR)).expect("fixture must load"))
}
