mod collection;
mod parsing;

pub use collection::collect_file_paths;
pub use parsing::{get_extension, load_file, validate_extension};
