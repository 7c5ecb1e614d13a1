pub mod fit;
pub mod format;
pub mod wrap;
