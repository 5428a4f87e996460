use super::*;

#[test]
fn test_coord_to_index_roundtrip() {
  let (sx, sy, sz) = (5, 9, 5);
  for x in 0..sx {
    for y in 0..sy {
      for z in 0..sz {
        let idx = coord_to_index(x, y, z, sy, sz);
        assert!(idx < sx * sy * sz);
        assert_eq!(
          index_to_coord(idx, sy, sz),
          (x, y, z),
          "Roundtrip failed for ({}, {}, {})",
          x,
          y,
          z
        );
      }
    }
  }
}

#[test]
fn test_z_is_innermost() {
  assert_eq!(coord_to_index(0, 0, 1, 4, 4), 1);
  assert_eq!(coord_to_index(0, 1, 0, 4, 4), 4);
  assert_eq!(coord_to_index(1, 0, 0, 4, 4), 16);
}

#[test]
fn test_corner_offsets_are_unit_cube() {
  let mut seen = std::collections::HashSet::new();
  for offset in CORNER_OFFSETS {
    assert!(offset.iter().all(|&c| c <= 1));
    assert!(seen.insert(offset), "duplicate corner {:?}", offset);
  }
  assert_eq!(seen.len(), CUBE_CORNERS);
}

#[test]
fn test_bottom_face_then_top_face() {
  for corner in 0..4 {
    assert_eq!(CORNER_OFFSETS[corner][1], 0, "corner {} should be y=0", corner);
    assert_eq!(CORNER_OFFSETS[corner + 4][1], 1, "corner {} should be y=1", corner + 4);
    // Top corner sits directly above its bottom partner
    assert_eq!(CORNER_OFFSETS[corner][0], CORNER_OFFSETS[corner + 4][0]);
    assert_eq!(CORNER_OFFSETS[corner][2], CORNER_OFFSETS[corner + 4][2]);
  }
}

#[test]
fn test_corner_position() {
  assert_eq!(corner_position(0), [0.0, 0.0, 0.0]);
  assert_eq!(corner_position(2), [1.0, 0.0, 1.0]);
  assert_eq!(corner_position(6), [1.0, 1.0, 1.0]);
}
