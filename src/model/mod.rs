pub mod repo;
pub mod trophy;
