mod cursor;
mod error;
mod handle;
mod iter;
mod links;
mod node;

pub use cursor::*;
pub use error::*;
pub use handle::*;
pub use iter::*;
pub use links::*;
pub(crate) use node::*;
