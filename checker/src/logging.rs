use tracing::{error, info};

pub(crate) const TARGET: &str = "unkou_checker";

#[derive(Clone, Default)]
pub(crate) struct Logger {
    url: Option<String>,
    error_text: Option<String>,
}

impl Logger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub(crate) fn error_text(mut self, error_text: impl Into<String>) -> Self {
        self.error_text = Some(error_text.into());
        self
    }

    pub(crate) fn info(&self, event: &'static str, message: &str) {
        let url = self.url.as_deref();
        info!(
            target: TARGET,
            event,
            url = url,
            error_text = ?self.error_text,
            "{}",
            message
        );
    }

    pub(crate) fn error<E: std::fmt::Debug>(&self, event: &'static str, err: &E, message: &str) {
        let url = self.url.as_deref();
        error!(
            target: TARGET,
            event,
            url = url,
            error_text = ?self.error_text,
            error = ?err,
            "{}",
            message
        );
    }
}
