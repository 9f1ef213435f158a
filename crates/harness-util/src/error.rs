use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UtilError {
    #[error("no `/id/<n>/` segment in url `{0}`")]
    MissingId(String),
    #[error("id in url `{0}` does not fit in u64")]
    IdOverflow(String),
    #[error("no `/slave/`, `/runner/` or `/bcr/` segment in base path `{0}`")]
    MissingRunnerSegment(String),
}
