mod load_config;

pub use load_config::{CONFIG_FILE, load_config};
