pub mod collect;
pub mod input;
pub mod prompts;
pub mod terminal;
pub mod validation;

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("failed to read terminal input: {0}")]
    TerminalRead(#[source] std::io::Error),
    #[error("scripted setup input exhausted before the wizard finished")]
    ScriptExhausted,
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
    #[error(transparent)]
    Discovery(#[from] crate::schemas::DiscoveryError),
}
