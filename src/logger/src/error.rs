use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("A global logger was already registered for this process.")]
    AlreadyInitialized(#[from] log::SetLoggerError),

    #[error("Logger was registered, but its progress-bar handle could not be stored.")]
    DuplicateInstance,
}
