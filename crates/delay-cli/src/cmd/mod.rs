pub mod assignment;
pub mod predict;
