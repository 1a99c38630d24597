pub mod sampling;

pub use sampling::sample_without_replacement;
