pub mod bake;
pub mod error;
pub mod report;

pub use bake::{BakeSettings, NormalTexel};
pub use error::BakeError;
pub use report::BakeReport;
