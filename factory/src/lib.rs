//! Spanner Factory
//!
//! Configuration glue between connection options and connections.
//!
//! Responsibilities:
//! - Hold driver options (driver, project, instance, database)
//! - Tell whether a set of options targets this driver
//! - Validate options and build a connection factory
//! - Expose static driver metadata

mod error;
mod factory;
mod metadata;
mod options;
mod provider;

pub use error::{FactoryError, FactoryResult};
pub use factory::SpannerConnectionFactory;
pub use metadata::{SpannerConnectionFactoryMetadata, METADATA};
pub use options::{ConnectionOptions, ConnectionOptionsBuilder, DATABASE, DRIVER, INSTANCE, PROJECT};
pub use provider::{SpannerConnectionFactoryProvider, DRIVER_NAME};
