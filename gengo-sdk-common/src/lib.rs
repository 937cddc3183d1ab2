pub mod de;
pub mod envelope;
mod error;
pub mod helper;

pub use error::Error;
