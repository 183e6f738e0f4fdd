use std::sync::Arc;

/// A logger type which is called with various information.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information shared by engine components.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger }
    }

    /// Creates an instance of `Environment` which ignores all log messages.
    pub fn new_silent() -> Self {
        Self::new(Arc::new(|_: &str| {}))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(|msg: &str| println!("{msg}")))
    }
}
