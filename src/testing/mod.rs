mod faulty_file_tree;

pub use faulty_file_tree::{FaultyFileTree, write_with_age};
