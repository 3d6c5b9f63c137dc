pub(crate) mod container;
pub(crate) mod format;
pub(crate) mod header;
