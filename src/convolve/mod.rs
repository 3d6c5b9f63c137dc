pub(crate) mod convolver;
pub(crate) mod driver;
pub(crate) mod kernel;
pub(crate) mod roughness;
pub(crate) mod scalar;
pub(crate) mod scan;
pub(crate) mod simd;
pub(crate) mod source;
