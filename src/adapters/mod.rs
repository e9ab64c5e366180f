// Adapters - External system implementations

pub mod exec_melt;
pub mod fs_local;
pub mod process_tokio;
pub mod toml_config;
pub mod tracing_log;

// Re-export adapters
pub use exec_melt::MeltAdapter;
pub use fs_local::FsLocalAdapter;
pub use process_tokio::TokioProcessAdapter;
pub use toml_config::TomlConfigAdapter;
pub use tracing_log::TracingLogAdapter;
