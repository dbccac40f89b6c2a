//! HTTP server configuration object.

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) playground: bool,
}

impl ServerConfig {
    /// Bind to `host:port` with GraphiQL disabled.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            playground: false,
        }
    }

    /// Serve GraphiQL on `GET /graphql`.
    #[must_use]
    pub const fn with_playground(mut self, enabled: bool) -> Self {
        self.playground = enabled;
        self
    }

    /// Host and port to bind.
    #[must_use]
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }

    /// Whether GraphiQL is served.
    #[must_use]
    pub const fn playground(&self) -> bool {
        self.playground
    }
}
