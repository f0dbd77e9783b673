mod parser;
mod types;

pub use parser::{parse_datamap_file, parse_datamap_lines};
pub use types::{Datamap, DatamapLine};
