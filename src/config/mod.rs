pub mod carrier;
#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use carrier::CarrierConfig;
#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;
