/// Solid angle of the axis-aligned quad from `(0, 0, 1)` to `(x, y, 1)`.
///
/// Antiderivative used to evaluate exact rectangle solid angles by inclusion-exclusion.
pub fn area_element(x: f32, y: f32) -> f32 {
    (x * y).atan2((x * x + y * y + 1.0).sqrt())
}

/// Exact solid angle subtended by hemicube texel `(x, y)` of a face whose edge is
/// `1 / inverse_edge_length` texels long.
pub fn solid_angle_term(x: u32, y: u32, inverse_edge_length: f32) -> f32 {
    // Texel center in [-1, 1].
    let u = (x as f32 + 0.5) * (2.0 * inverse_edge_length) - 1.0;
    let v = (y as f32 + 0.5) * (2.0 * inverse_edge_length) - 1.0;

    let x0 = u - inverse_edge_length;
    let y0 = v - inverse_edge_length;
    let x1 = u + inverse_edge_length;
    let y1 = v + inverse_edge_length;

    area_element(x0, y0) - area_element(x0, y1) - area_element(x1, y0) + area_element(x1, y1)
}

#[cfg(test)]
#[path = "../../tests/unit/cube/solid_angle.rs"]
mod tests;
