//! XML parsing and navigation utilities.

mod document;
mod utils;

pub use document::{parse_bytes, parse_document};
pub use utils::{
    collect_text, collect_text_where, find_by_path, find_child, find_descendants,
    first_attribute, get_tag_name, get_text, text_nodes,
};
