pub(crate) mod srgb;
mod tables;
