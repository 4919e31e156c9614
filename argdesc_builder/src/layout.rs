mod metrics;
mod printer;
mod wrap;

pub use metrics::*;
pub(crate) use printer::*;
pub use wrap::*;
