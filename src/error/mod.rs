mod config;
mod publish;

pub use config::ConfigError;
pub use publish::PublishError;
