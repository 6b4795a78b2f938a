//! Driver metadata.

/// Static description of the driver.
#[derive(Debug, PartialEq, Eq)]
pub struct SpannerConnectionFactoryMetadata {
    /// Product name of the database.
    pub name: &'static str,
    /// Driver version.
    pub version: &'static str,
}

/// The single metadata instance every factory returns.
pub static METADATA: SpannerConnectionFactoryMetadata = SpannerConnectionFactoryMetadata {
    name: "Cloud Spanner",
    version: env!("CARGO_PKG_VERSION"),
};
