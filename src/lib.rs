pub mod log;
pub mod problem;
pub mod batch;
