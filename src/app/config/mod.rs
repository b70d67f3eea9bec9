mod config_dto;
mod load_config;

pub use load_config::{DEFAULT_CONFIG_FILE, load_config, parse_config_content};
