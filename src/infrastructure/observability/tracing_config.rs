/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
}
