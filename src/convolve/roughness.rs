/// Maps output mip levels to GGX roughness.
///
/// Mip 0 is the sharpest level. The last three levels all land on roughness 1; only the
/// third-from-last (4x4 for power-of-two chains) is meant to be sampled as the diffuse
/// term, the smaller ones exist so the texture has a complete mip chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoughnessSchedule {
    num_mips: u32,
}

impl RoughnessSchedule {
    /// Schedule for a chain of `num_mips` levels.
    pub fn new(num_mips: u32) -> Self {
        Self { num_mips }
    }

    /// Number of levels covered.
    pub fn num_mips(&self) -> u32 {
        self.num_mips
    }

    // Chains shorter than four levels would divide by zero or go negative.
    fn denominator(&self) -> f32 {
        self.num_mips.saturating_sub(3).max(1) as f32
    }

    /// Roughness used for mip 0.
    pub fn min_roughness(&self) -> f32 {
        0.5 / self.denominator()
    }

    /// Roughness for `mip`, clamped to `[min_roughness, 1]`.
    pub fn roughness(&self, mip: u32) -> f32 {
        (mip as f32 / self.denominator()).clamp(self.min_roughness(), 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/convolve/roughness.rs"]
mod tests;
