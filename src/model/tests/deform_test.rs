//! Deformation tests: the linear-blending contract of the instance.
//!
//! Exact floating-point equality is intentional throughout: the fixtures
//! use dyadic weights and small integer deltas, for which the accumulation
//! arithmetic is exact.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::math::Point3;
use crate::model::FaceModelInstance;

use super::{pt, sample_asset};

#[test]
fn test_zero_weights_reproduce_neutral() {
    let asset = sample_asset();
    let mut face = FaceModelInstance::new(asset.clone());
    face.deform_mesh();
    assert_eq!(face.deformed_positions(), asset.neutral().positions());
}

#[test]
fn test_single_expression_mode_round_trip() {
    // Weight 1.0 on one mode must reproduce the morph target exactly.
    let asset = sample_asset();
    let mut face = FaceModelInstance::new(asset);
    face.set_expression(&[1.0]);
    face.deform_mesh();
    assert_eq!(
        face.deformed_positions(),
        [pt(1.0, 0.0, 0.0), pt(0.0, 0.0, 0.0)]
    );
}

#[test]
fn test_single_identity_mode_round_trip() {
    let asset = sample_asset();
    let mut face = FaceModelInstance::new(asset);
    face.set_identity(&[0.0, 1.0]);
    face.deform_mesh();
    assert_eq!(
        face.deformed_positions(),
        [pt(0.0, 0.0, 0.0), pt(0.0, 0.0, 2.0)]
    );
}

#[test]
fn test_half_weight_scales_contribution() {
    let asset = sample_asset();
    let mut face = FaceModelInstance::new(asset);
    face.set_expression(&[0.5]);
    face.deform_mesh();
    assert_eq!(
        face.deformed_positions(),
        [pt(0.5, 0.0, 0.0), pt(0.0, 0.0, 0.0)]
    );
}

#[test]
fn test_identity_and_expression_contributions_sum() {
    let asset = sample_asset();
    let mut face = FaceModelInstance::new(asset);
    face.set_identity(&[1.0, 0.5]);
    face.set_expression(&[0.25]);
    face.deform_mesh();
    // v0: identity000 (0,1,0)*1.0 + smile (1,0,0)*0.25
    // v1: identity001 (0,0,2)*0.5
    assert_eq!(
        face.deformed_positions(),
        [pt(0.25, 1.0, 0.0), pt(0.0, 0.0, 1.0)]
    );
}

#[test]
fn test_linearity_in_the_weights() {
    let asset = sample_asset();
    let neutral = asset.neutral().positions().to_vec();
    let id_weights = [0.25, -0.5];
    let ex_weights = [0.75];
    let scale = 2.0;

    let mut face = FaceModelInstance::new(asset.clone());
    face.set_identity(&id_weights);
    face.set_expression(&ex_weights);
    face.deform_mesh();
    let base: Vec<Point3> = face.deformed_positions().to_vec();

    let scaled_id: Vec<f64> = id_weights.iter().map(|w| scale * w).collect();
    let scaled_ex: Vec<f64> = ex_weights.iter().map(|w| scale * w).collect();
    let mut scaled_face = FaceModelInstance::new(asset);
    scaled_face.set_identity(&scaled_id);
    scaled_face.set_expression(&scaled_ex);
    scaled_face.deform_mesh();

    for ((scaled, single), rest) in scaled_face
        .deformed_positions()
        .iter()
        .zip(&base)
        .zip(&neutral)
    {
        assert_eq!(scaled - rest, scale * (single - rest));
    }
}

#[test]
fn test_additivity_in_the_weights() {
    let asset = sample_asset();
    let neutral = asset.neutral().positions().to_vec();
    let first = ([0.5, 0.0], [0.25]);
    let second = ([0.25, 1.0], [0.5]);

    let deform = |id: &[f64], ex: &[f64]| {
        let mut face = FaceModelInstance::new(asset.clone());
        face.set_identity(id);
        face.set_expression(ex);
        face.deform_mesh();
        face.deformed_positions().to_vec()
    };

    let d1 = deform(&first.0, &first.1);
    let d2 = deform(&second.0, &second.1);
    let combined = deform(&[0.75, 1.0], &[0.75]);

    for i in 0..neutral.len() {
        let expected = neutral[i] + (d1[i] - neutral[i]) + (d2[i] - neutral[i]);
        assert_eq!(combined[i], expected);
    }
}

#[test]
fn test_set_weights_truncates_extra_entries() {
    let asset = sample_asset();
    let mut face = FaceModelInstance::new(asset);
    // Two identity modes: the trailing entries must be dropped.
    face.set_identity(&[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(face.identity_weights(), &[1.0, 2.0]);
    // One expression mode.
    face.set_expression(&[5.0, 6.0]);
    assert_eq!(face.expression_weights(), &[5.0]);
}

#[test]
fn test_set_weights_shorter_input_preserves_tail() {
    let asset = sample_asset();
    let mut face = FaceModelInstance::new(asset);
    // Never set: tail stays zero.
    face.set_identity(&[7.0]);
    assert_eq!(face.identity_weights(), &[7.0, 0.0]);
    // Previously set: tail keeps its prior value.
    face.set_identity(&[1.0, 2.0]);
    face.set_identity(&[9.0]);
    assert_eq!(face.identity_weights(), &[9.0, 2.0]);
}

#[test]
fn test_with_weights_applies_truncating_sets() {
    let asset = sample_asset();
    let face = FaceModelInstance::with_weights(asset.clone(), &[1.0, 2.0, 3.0], &[4.0, 5.0]);
    assert_eq!(face.identity_weights(), &[1.0, 2.0]);
    assert_eq!(face.expression_weights(), &[4.0]);
    // Construction never deforms.
    assert_eq!(face.deformed_positions(), asset.neutral().positions());
}

#[test]
fn test_randomize_identity_replaces_weights() {
    let asset = sample_asset();
    let mut face = FaceModelInstance::new(asset.clone());
    face.set_expression(&[0.5]);

    let mut rng = StdRng::seed_from_u64(7);
    face.randomize_identity_with(&mut rng);

    assert_eq!(face.identity_weights().len(), asset.identities().len());
    assert!(face.identity_weights().iter().any(|w| *w != 0.0));
    // Expression weights and the deformed buffer are untouched.
    assert_eq!(face.expression_weights(), &[0.5]);
    assert_eq!(face.deformed_positions(), asset.neutral().positions());
}

#[test]
fn test_randomize_identity_is_reproducible_per_seed() {
    let asset = sample_asset();
    let mut first = FaceModelInstance::new(asset.clone());
    let mut second = FaceModelInstance::new(asset);

    first.randomize_identity_with(&mut StdRng::seed_from_u64(42));
    second.randomize_identity_with(&mut StdRng::seed_from_u64(42));
    assert_eq!(first.identity_weights(), second.identity_weights());

    second.randomize_identity_with(&mut StdRng::seed_from_u64(43));
    assert_ne!(first.identity_weights(), second.identity_weights());
}

#[test]
fn test_deform_resets_before_accumulating() {
    let asset = sample_asset();
    let mut face = FaceModelInstance::new(asset.clone());
    face.set_expression(&[1.0]);
    face.deform_mesh();
    // Dropping the weights back to zero and deforming again must return to
    // the neutral mesh, not accumulate on top of the previous pose.
    face.set_expression(&[0.0]);
    face.deform_mesh();
    assert_eq!(face.deformed_positions(), asset.neutral().positions());
}

#[test]
fn test_instances_do_not_alias() {
    let asset = sample_asset();
    let mut posed = FaceModelInstance::new(asset.clone());
    let still = FaceModelInstance::new(asset.clone());

    posed.set_expression(&[1.0]);
    posed.deform_mesh();

    assert_eq!(still.deformed_positions(), asset.neutral().positions());
    assert_eq!(still.expression_weights(), &[0.0]);
}

#[test]
fn test_deformed_mesh_shares_neutral_topology() {
    let asset = sample_asset();
    let mut face = FaceModelInstance::new(asset.clone());
    face.deform_mesh();
    let exported = face.deformed_mesh();
    assert!(Arc::ptr_eq(exported.topology(), asset.neutral().topology()));
}
