pub mod partition;
pub mod randomized_quickselect;

pub use partition::partition;
pub use randomized_quickselect::randomized_quickselect;
