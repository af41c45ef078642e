//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// MARGIN TESTS
// =============================================================================

#[test]
fn test_margin_fraction_matches_scale_factor() {
    // 5% per side is the same box as a 1.1x scale about the centre
    assert!((1.0 + 2.0 * DEFAULT_MARGIN_FRACTION - 1.1).abs() < 1e-12);
}

#[test]
fn test_min_margin_cells_is_positive() {
    assert!(DEFAULT_MIN_MARGIN_CELLS > 0.0);
}

#[test]
fn test_margin_uses_fraction_for_large_extent() {
    let policy = MarginPolicy::default();
    assert!((policy.margin(10.0, 0.1) - 0.5).abs() < 1e-12);
}

#[test]
fn test_margin_uses_floor_for_flat_axis() {
    let policy = MarginPolicy::default();
    assert!((policy.margin(0.0, 0.1) - 0.05).abs() < 1e-12);
}

// =============================================================================
// CELLS_TO_COVER TESTS
// =============================================================================

#[test]
fn test_cells_to_cover_rounds_up() {
    assert_eq!(cells_to_cover(1.1, 0.25), 5);
    assert_eq!(cells_to_cover(1.01, 0.5), 3);
}

#[test]
fn test_cells_to_cover_exact_multiple() {
    assert_eq!(cells_to_cover(1.0, 0.25), 4);
    assert_eq!(cells_to_cover(1.25, 0.25), 5);
}

#[test]
fn test_cells_to_cover_snaps_float_noise() {
    // 0.3 / 0.1 is 2.9999999999999996 and 0.7 / 0.1 is 6.999999999999999
    assert_eq!(cells_to_cover(0.3, 0.1), 3);
    assert_eq!(cells_to_cover(0.7, 0.1), 7);
    // Just above an integer by more than the tolerance still rounds up
    assert_eq!(cells_to_cover(1.0 + 1e-6, 0.5), 3);
}

#[test]
fn test_cells_to_cover_minimum_one() {
    assert_eq!(cells_to_cover(0.0, 1.0), MIN_CELL_COUNT);
    assert_eq!(cells_to_cover(1e-6, 1.0), 1);
}

// =============================================================================
// OUTPUT TESTS
// =============================================================================

#[test]
fn test_output_names() {
    assert_eq!(BLOCK_MESH_DICT_FILE_NAME, "blockMeshDict");
    assert!(JSON_SPEC_FILE_NAME.ends_with(".json"));
    assert_eq!(DEFAULT_SYSTEM_DIR, "system");
}
