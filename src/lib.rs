pub mod datamap;
pub mod error;
pub mod excel;
pub mod extract;
pub mod sources;
pub mod utils;
pub mod validate;

pub use error::{Error, Result};
