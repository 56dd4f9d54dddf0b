mod health_check;
mod metrics;

pub use health_check::*;
pub use metrics::*;
