//! Cube configuration from corner samples.

use crate::constants::CUBE_CORNERS;

/// Build the 8-bit cube configuration.
///
/// Bit `i` is set when corner `i` (order = [`crate::constants::CORNER_OFFSETS`])
/// is solid, i.e. its sample is strictly greater than `iso`. A sample equal
/// to `iso` counts as air.
#[inline]
pub fn cube_configuration(corners: &[f32; CUBE_CORNERS], iso: f32) -> u8 {
  corners
    .iter()
    .enumerate()
    .fold(0u8, |mask, (i, &v)| mask | (((v > iso) as u8) << i))
}

#[cfg(test)]
#[path = "corner_mask_test.rs"]
mod corner_mask_test;
