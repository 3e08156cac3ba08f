//! Shape-mode verification export.

use std::path::Path;

use log::info;

use crate::store::ModelStore;

use super::asset::{FaceModelAsset, ShapeModeKind};
use super::error::ModelError;

/// Write every shape mode applied to the neutral mesh into `dir`.
///
/// For each identity and expression mode, reconstructs `neutral + mode` and
/// writes it as `<name>.<ext>` through the store. Opening these next to the
/// sculpted morph targets in a DCC tool is a quick visual check that the
/// modes were computed correctly; with exact loading they are identical.
pub fn write_verification_meshes<S: ModelStore>(
    asset: &FaceModelAsset,
    store: &S,
    dir: &Path,
) -> Result<(), ModelError> {
    for kind in [ShapeModeKind::Identity, ShapeModeKind::Expression] {
        let set = asset.modes(kind);
        info!("writing {} {kind:?} verification meshes", set.len());
        for (index, entry) in set.entries().iter().enumerate() {
            let Some(mesh) = asset.reconstruct_mode(kind, index) else {
                continue;
            };
            let path = dir.join(format!("{}.{}", entry.name(), store.mesh_extension()));
            store.write_mesh(&path, &mesh).map_err(ModelError::Store)?;
        }
    }
    Ok(())
}
