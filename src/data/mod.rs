//! Graph input module

pub mod edge_list;

pub use edge_list::{load_edge_list, parse_edge_list};
