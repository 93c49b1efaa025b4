pub mod local_file_tree;
pub mod logging;

pub use local_file_tree::LocalFileTree;
pub use logging::init_logging;
