//! Types which, typically, may be imported without concern: `use argdesc::prelude::*`.

pub use crate::api::{CommandNode, HelpOptions, OptionDescriptor};
pub use crate::layout::LayoutMetrics;
pub use crate::model::{Depth, OptionKind, OptionValue};
