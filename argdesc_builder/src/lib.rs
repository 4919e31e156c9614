//! Builder module for `argdesc`.
//! See [documentation root](https://docs.rs/argdesc/latest/argdesc/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod error;
mod layout;
mod model;
pub mod prelude;

pub use api::*;
pub use error::ConfigError;
pub use layout::{wrap_indented, LayoutMetrics, TextWrapper};
pub use model::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
