mod descriptor;
mod node;

pub use descriptor::*;
pub use node::*;
