pub mod capture;
pub mod context;
pub mod error;

pub use capture::{Capturer, OutputBuffer};
pub use context::ViewContext;
pub use error::ViewError;
