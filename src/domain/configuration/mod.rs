pub mod maintenance_config;
pub mod parse;

pub use maintenance_config::{
    CollisionPolicy, LogType, LoggingConfig, MaintenanceConfig, PruneConfig, SortConfig,
};
pub use parse::parse_config_content;
