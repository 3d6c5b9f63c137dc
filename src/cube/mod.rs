pub(crate) mod face;
pub(crate) mod layout;
pub(crate) mod solid_angle;
pub(crate) mod warp;
