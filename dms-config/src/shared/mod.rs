mod application;
mod aws;
mod base;
mod exporter;

pub use application::*;
pub use aws::*;
pub use base::*;
pub use exporter::*;
