use std::fmt::Display;

use tracing::Span;

///
/// Logging handle passed to every check. Events are emitted inside a span
/// named after the run, so all messages of one invocation share its context.
///
#[derive(Debug, Clone)]
pub struct Logger {
    span: Span,
}

impl Logger {
    pub fn new(name: &str) -> Self {
        Logger {
            span: tracing::info_span!("check", run = %name),
        }
    }

    pub fn info(&self, message: impl Display) {
        let _entered = self.span.enter();
        tracing::info!("{}", message);
    }

    pub fn error(&self, message: impl Display) {
        let _entered = self.span.enter();
        tracing::error!("{}", message);
    }

    pub fn debug(&self, message: impl Display) {
        let _entered = self.span.enter();
        tracing::debug!("{}", message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new(crate::consts::CHECK_INPUT_LOGGER)
    }
}
