//! Rotation-angle math reconciling a weighted draw with the wheel graphic.
//!
//! Geometry, fixed once so the forward and inverse mappings cannot drift
//! apart: the pointer sits at 12 o'clock; wedges of `360/N` degrees are laid
//! out at increasing wheel-local angle away from it; applying a rotation of
//! `R` degrees brings wheel-local angle `R mod 360` under the pointer.
//! Everything below follows from those three statements.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RotationError {
    #[error("wheel has no segments")]
    NoSegments,
    #[error("segment index {index} out of range for {total_segments} segments")]
    IndexOutOfRange { index: usize, total_segments: usize },
}

/// How wedge 0 sits relative to the pointer at zero rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentLayout {
    /// Wedge `i` spans `[i*w, (i+1)*w)`; its center is at `i*w + w/2`.
    /// This is the canonical layout for this engine.
    StartAtPointer,
    /// Wedge `i` spans `[i*w - w/2, i*w + w/2)`; wedge 0 is centered under
    /// the pointer at zero rotation and wedge centers sit at `i*w`.
    CenteredAtPointer,
}

/// Angular center of a wedge under the canonical [`SegmentLayout::StartAtPointer`]
/// layout: `index * (360/total) + (360/total)/2`.
pub fn segment_angle(index: usize, total_segments: usize) -> Result<f64, RotationError> {
    wedge_center(index, total_segments, SegmentLayout::StartAtPointer)
}

/// Cumulative rotation that lands wedge `segment_index` under the pointer
/// after at least `extra_spins` full turns past `current_rotation`, under
/// the canonical layout.
pub fn calculate_final_rotation(
    segment_index: usize,
    total_segments: usize,
    current_rotation: f64,
    extra_spins: u32,
) -> Result<f64, RotationError> {
    final_rotation_with_layout(
        segment_index,
        total_segments,
        current_rotation,
        extra_spins,
        SegmentLayout::StartAtPointer,
    )
}

/// Layout-aware form of [`calculate_final_rotation`].
///
/// The naive `current + 360*spins + center` only aligns when `current` is a
/// multiple of 360 (the pointer sees `final mod 360`, and `current` leaks
/// into that residue). Compensating `current` keeps the terminal angle
/// congruent to the wedge center for any starting rotation, and reduces to
/// the naive form at `current = 0`.
pub fn final_rotation_with_layout(
    segment_index: usize,
    total_segments: usize,
    current_rotation: f64,
    extra_spins: u32,
    layout: SegmentLayout,
) -> Result<f64, RotationError> {
    let center = wedge_center(segment_index, total_segments, layout)?;
    let offset = (center - current_rotation).rem_euclid(360.0);
    Ok(current_rotation + 360.0 * f64::from(extra_spins) + offset)
}

/// Inverse mapping: which wedge sits under the pointer once the wheel has
/// been rotated by `rotation` degrees.
pub fn segment_at_pointer(
    rotation: f64,
    total_segments: usize,
    layout: SegmentLayout,
) -> Result<usize, RotationError> {
    if total_segments == 0 {
        return Err(RotationError::NoSegments);
    }
    let wedge = 360.0 / total_segments as f64;
    let local = rotation.rem_euclid(360.0);
    let index = match layout {
        SegmentLayout::StartAtPointer => (local / wedge).floor() as usize,
        // Shifting by half a wedge turns the centered layout into the
        // start-at-pointer one.
        SegmentLayout::CenteredAtPointer => ((local + wedge / 2.0) / wedge).floor() as usize,
    };
    Ok(index % total_segments)
}

fn wedge_center(
    index: usize,
    total_segments: usize,
    layout: SegmentLayout,
) -> Result<f64, RotationError> {
    if total_segments == 0 {
        return Err(RotationError::NoSegments);
    }
    if index >= total_segments {
        return Err(RotationError::IndexOutOfRange {
            index,
            total_segments,
        });
    }
    let wedge = 360.0 / total_segments as f64;
    let center = match layout {
        SegmentLayout::StartAtPointer => index as f64 * wedge + wedge / 2.0,
        SegmentLayout::CenteredAtPointer => index as f64 * wedge,
    };
    Ok(center)
}
