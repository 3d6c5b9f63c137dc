//! Incremental NdotL evaluation over one source face.
//!
//! For a destination direction `n` and a source face with frame `(normal, u_axis, v_axis)`,
//! the unnormalized cosine against the hemicube point at face coordinates `(u, v)` is
//!
//! ```text
//! raw_nl(u, v) = n . (normal + u * u_axis + v * v_axis) = a * u + b * v + c
//! ```
//!
//! which is affine in the texel grid. Rows and columns where it cannot be positive are
//! pruned up front, and inside the remaining window it is stepped by constant deltas.

use std::ops::Range;

use glam::Vec3;

use crate::cube::face::CubeFace;

/// GGX normal-distribution constants for one roughness, with view == normal.
///
/// With `v == n` the half vector bisects `n` and `l`, so `NdotH^2 = 0.5 * NdotL + 0.5` and
/// the GGX denominator reduces to `NdotL * c1 + c2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GgxLobe {
    /// `alpha^2` where `alpha = roughness^2`.
    pub aa: f32,
    /// `0.5 * aa - 0.5`
    pub c1: f32,
    /// `c1 + 1`
    pub c2: f32,
}

impl GgxLobe {
    /// Constants for `roughness` (must be > 0 for a finite lobe).
    pub fn new(roughness: f32) -> Self {
        let alpha = roughness * roughness;
        let aa = alpha * alpha;
        let c1 = 0.5 * aa - 0.5;
        Self {
            aa,
            c1,
            c2: c1 + 1.0,
        }
    }

    /// Distribution term `D` for a normalized cosine `nl`.
    pub fn distribution(&self, nl: f32) -> f32 {
        let d = nl * self.c1 + self.c2;
        self.aa / (d * d)
    }
}

/// One source row that has at least one potentially visible texel.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanRow {
    /// Row index.
    pub y: usize,
    /// Conservative column window; every texel with positive `raw_nl` lies inside it.
    pub columns: Range<usize>,
    /// `b * v(y) + c`, the row's contribution to `raw_nl`.
    pub offset: f32,
}

/// Affine `raw_nl` of a destination direction against one source face.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceScan {
    /// Coefficient of the column coordinate `u`.
    pub a: f32,
    /// Coefficient of the row coordinate `v`.
    pub b: f32,
    /// Constant term.
    pub c: f32,
    res: usize,
}

impl FaceScan {
    /// Scan of `face` (a `res x res` grid) as seen from direction `n`.
    pub fn new(n: Vec3, face: CubeFace, res: usize) -> Self {
        let frame = face.frame();
        Self {
            a: n.dot(frame.u_axis),
            b: n.dot(frame.v_axis),
            c: n.dot(frame.normal),
            res,
        }
    }

    /// Face coordinate in `[-1, 1]` of the center of texel `i`.
    pub fn coord(&self, i: usize) -> f32 {
        texel_center(i, self.res)
    }

    /// `raw_nl` at face coordinates `(u, v)`.
    pub fn raw_nl(&self, u: f32, v: f32) -> f32 {
        self.a * u + self.b * v + self.c
    }

    /// Increment of `raw_nl` per column.
    pub fn dx(&self) -> f32 {
        self.a * 2.0 / self.res as f32
    }

    /// Increment of the row offset per row.
    pub fn dy(&self) -> f32 {
        self.b * 2.0 / self.res as f32
    }

    /// `raw_nl` at column `x` of a row with the given offset.
    pub fn nl_at(&self, offset: f32, x: usize) -> f32 {
        offset + self.a * self.coord(x)
    }

    /// Conservative range of rows where `raw_nl` can be positive somewhere along the row.
    pub fn row_range(&self) -> Range<usize> {
        let edge = 1.0 / self.res as f32 - 1.0;
        let best_column = (self.a * edge).max(-self.a * edge);
        positive_span(self.b, self.c + best_column, self.res)
    }

    /// Rows with a non-empty column window, with the row offset stepped incrementally.
    pub fn rows(&self) -> ScanRows<'_> {
        let rows = self.row_range();
        let offset = self.b * self.coord(rows.start) + self.c;
        ScanRows {
            scan: self,
            rows,
            offset,
            dy: self.dy(),
        }
    }
}

/// Iterator returned by [`FaceScan::rows`].
#[derive(Clone, Debug)]
pub struct ScanRows<'a> {
    scan: &'a FaceScan,
    rows: Range<usize>,
    offset: f32,
    dy: f32,
}

impl Iterator for ScanRows<'_> {
    type Item = ScanRow;

    fn next(&mut self) -> Option<ScanRow> {
        while let Some(y) = self.rows.next() {
            let offset = self.offset;
            self.offset += self.dy;
            let columns = positive_span(self.scan.a, offset, self.scan.res);
            if !columns.is_empty() {
                return Some(ScanRow {
                    y,
                    columns,
                    offset,
                });
            }
        }
        None
    }
}

/// Center of texel `i` of an `n`-texel edge, mapped to `[-1, 1]`.
pub(crate) fn texel_center(i: usize, n: usize) -> f32 {
    (2 * i + 1) as f32 / n as f32 - 1.0
}

/// Indices `i` in `0..n` for which `slope * texel_center(i, n) + offset` may be positive.
///
/// The result is a superset of the exact positive set, widened by one index on the open
/// side to absorb rounding in the root; callers still test each texel.
pub(crate) fn positive_span(slope: f32, offset: f32, n: usize) -> Range<usize> {
    let edge = 1.0 / n as f32 - 1.0;
    let best = offset + (slope * edge).max(-slope * edge);
    if best.is_nan() || best <= 0.0 {
        return 0..0;
    }
    if slope == 0.0 {
        return 0..n;
    }

    // Fractional texel index where the affine function crosses zero.
    let root = -offset / slope;
    let root_index = ((root + 1.0) * n as f32 - 1.0) * 0.5;
    if slope > 0.0 {
        clamp_index(root_index.floor(), n)..n
    } else {
        0..clamp_index(root_index.floor() + 2.0, n)
    }
}

fn clamp_index(v: f32, n: usize) -> usize {
    if v.is_nan() {
        0
    } else {
        v.clamp(0.0, n as f32) as usize
    }
}

#[cfg(test)]
#[path = "../../tests/unit/convolve/scan.rs"]
mod tests;
