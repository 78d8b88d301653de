use std::sync::Arc;
use std::time::Duration;

use bbgpd_core::{BbgConfig, BbgError, Reduced, RequestSpec, Service, Session, Verbosity};

/// Client owning a started vendor session and an open data service.
///
/// Request methods take `&mut self`: one request is drained to its terminal
/// event before the next can be issued on the same client.
pub struct Blp {
    pub(crate) session: Arc<dyn Session>,
    pub(crate) service: Arc<dyn Service>,
    pub(crate) cfg: BbgConfig,
}

/// Builder for connecting a [`Blp`] client.
pub struct BlpBuilder {
    session: Option<Arc<dyn Session>>,
    cfg: BbgConfig,
}

impl Default for BlpBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BlpBuilder {
    /// Create a builder with default configuration and no session.
    ///
    /// Defaults: `//blp/refdata` service, quiet logging, no event timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: None,
            cfg: BbgConfig::default(),
        }
    }

    /// Vendor session to drive. Required.
    #[must_use]
    pub fn session(mut self, session: Arc<dyn Session>) -> Self {
        self.session = Some(session);
        self
    }

    /// Name of the data service to open.
    #[must_use]
    pub fn service(mut self, name: impl Into<String>) -> Self {
        self.cfg.service = name.into();
        self
    }

    /// Logging verbosity for responses.
    #[must_use]
    pub const fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.cfg.verbosity = verbosity;
        self
    }

    /// Shorthand for `verbosity(Verbosity::Debug)` when `yes`, `Quiet` otherwise.
    #[must_use]
    pub const fn debug(self, yes: bool) -> Self {
        self.verbosity(if yes {
            Verbosity::Debug
        } else {
            Verbosity::Quiet
        })
    }

    /// Bound each wait for the next event.
    ///
    /// Without it a request waits as long as the session takes to deliver its
    /// terminal event.
    #[must_use]
    pub const fn event_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.event_timeout = Some(timeout);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: BbgConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Start the session, open the configured service and return the client.
    ///
    /// # Errors
    /// Returns `Session` if no session was given or it fails to start, and
    /// `ServiceUnavailable` if the service cannot be opened.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "bbgpd::core::connect",
            skip(self),
            fields(service = %self.cfg.service),
        )
    )]
    pub async fn connect(self) -> Result<Blp, BbgError> {
        let Some(session) = self.session else {
            return Err(BbgError::session("no session configured"));
        };
        session.start().await?;
        session.open_service(&self.cfg.service).await?;
        let service = session.service(&self.cfg.service).await?;
        #[cfg(feature = "tracing")]
        tracing::info!(vendor = session.vendor(), service = service.name(), "connected");
        Ok(Blp {
            session,
            service,
            cfg: self.cfg,
        })
    }
}

impl Blp {
    /// Start building a client.
    ///
    /// ```rust,ignore
    /// use bbgpd::Blp;
    /// use bbgpd_mock::MockSession;
    ///
    /// let mut blp = Blp::builder()
    ///     .session(MockSession::with_fixtures())
    ///     .debug(true)
    ///     .connect()
    ///     .await?;
    /// let table = blp.bdp(["ABC Equity"], ["PX_LAST"], vec![]).await?;
    /// blp.close().await?;
    /// ```
    #[must_use]
    pub fn builder() -> BlpBuilder {
        BlpBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &BbgConfig {
        &self.cfg
    }

    /// Stop the session.
    ///
    /// # Errors
    /// Returns the session's error if stopping fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "bbgpd::core::close", skip(self))
    )]
    pub async fn close(self) -> Result<(), BbgError> {
        self.session.stop().await
    }

    /// Submit `spec` and drain its response.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "bbgpd::core::run",
            skip(self, spec),
            fields(
                operation = %spec.kind(),
                securities = spec.securities().len(),
                fields = spec.fields().len(),
            ),
        )
    )]
    pub(crate) async fn run(&mut self, spec: &RequestSpec) -> Result<Reduced, BbgError> {
        bbgpd_core::execute(
            self.session.as_ref(),
            self.service.as_ref(),
            spec,
            self.cfg.verbosity,
            self.cfg.event_timeout,
        )
        .await
    }
}
