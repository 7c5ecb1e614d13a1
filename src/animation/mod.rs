pub mod carousel;
pub mod ease;
pub mod schedule;
