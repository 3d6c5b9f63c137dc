//! Texel-center coordinates with an optional cubic warp.
//!
//! An equal-spaced cube face parametrization packs texels more densely (in solid angle)
//! near the face center than near the edges. For small output faces a cubic remap
//! `tc' = tc * (warp * tc^2 + 1)` in the `[-1, 1]` domain pushes sample directions outward
//! and evens out the angular spacing.

/// Warp constant for an output face of `resolution` texels per side.
///
/// `res^2 / (res - 1)^3` for `res > 1`, else `0` (identity).
pub fn warp_factor(resolution: u32) -> f32 {
    if resolution > 1 {
        let r = resolution as f32;
        let d = r - 1.0;
        (r * r) / (d * d * d)
    } else {
        0.0
    }
}

/// Normalized `[0, 1]` coordinate of the center of texel `coord`, warped by `warp`.
///
/// A `warp` of `0` gives the plain texel center `(coord + 0.5) / resolution`.
pub fn tex_coord_warp(coord: u32, resolution: u32, warp: f32) -> f32 {
    let mut tc = (coord as f32 + 0.5) / resolution as f32;

    if warp != 0.0 {
        tc = tc * 2.0 - 1.0;
        tc *= warp * tc * tc + 1.0;
        tc = tc * 0.5 + 0.5;
    }

    tc
}

#[cfg(test)]
#[path = "../../tests/unit/cube/warp.rs"]
mod tests;
