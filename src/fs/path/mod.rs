mod canon;
mod display;
mod error;
mod iter;
mod owned_path;
mod tests;
mod validity;

pub use canon::*;
pub use display::*;
pub use error::*;
pub use iter::*;
pub use owned_path::*;
pub use validity::*;
