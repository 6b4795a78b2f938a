//! Connection factory.

use std::sync::Arc;

use spanner_connection::Connection;
use spanner_transaction::Client;
use tracing::debug;

use crate::metadata::{SpannerConnectionFactoryMetadata, METADATA};

/// Creates connections to one database over a shared client.
pub struct SpannerConnectionFactory<C: Client> {
    database_name: Option<String>,
    client: Arc<C>,
}

impl<C: Client> SpannerConnectionFactory<C> {
    pub(crate) fn new(database_name: Option<String>, client: Arc<C>) -> Self {
        Self {
            database_name,
            client,
        }
    }

    /// Fully qualified database name
    /// (`projects/<p>/instances/<i>/databases/<d>`), if the options named one.
    pub fn database_name(&self) -> Option<&str> {
        self.database_name.as_deref()
    }

    /// Driver metadata. Always the same instance.
    pub fn metadata(&self) -> &'static SpannerConnectionFactoryMetadata {
        &METADATA
    }

    /// Create a new connection with no open transaction.
    pub fn create_connection(&self) -> Connection<C> {
        let connection = Connection::new(Arc::clone(&self.client));
        debug!(
            connection = %connection.id(),
            database = ?self.database_name,
            "created connection"
        );
        connection
    }
}

impl<C: Client> std::fmt::Debug for SpannerConnectionFactory<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpannerConnectionFactory")
            .field("database_name", &self.database_name)
            .finish_non_exhaustive()
    }
}
