mod path_utils;

pub use path_utils::*;
