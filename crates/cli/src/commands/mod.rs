pub mod config_cmd;
pub mod sanitize;
pub mod serve;
