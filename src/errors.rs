use std::fmt;

/// Main error type for the heuristic battle agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// Error related to scoring configuration
    Config(ConfigError),
    /// Error related to loading a battle snapshot
    Snapshot(SnapshotError),
}

/// Failures reported by a damage oracle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    /// The move does not deal direct damage
    NonDamaging(String),
    /// The combination lacks the data needed for an estimate
    InsufficientData(String),
}

/// Errors related to scoring configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration file could not be read
    Io(String),
    /// The configuration file is not valid RON
    Parse(String),
    /// A value is outside its meaningful range
    Invalid(String),
}

/// Errors related to loading a battle snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// The snapshot file could not be read
    Io(String),
    /// The snapshot is not valid JSON or is missing fields
    Parse(String),
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::Config(err) => write!(f, "Config error: {}", err),
            AgentError::Snapshot(err) => write!(f, "Snapshot error: {}", err),
        }
    }
}

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OracleError::NonDamaging(move_id) => write!(f, "Move does not deal damage: {}", move_id),
            OracleError::InsufficientData(details) => write!(f, "Insufficient data: {}", details),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(details) => write!(f, "Failed to read config: {}", details),
            ConfigError::Parse(details) => write!(f, "Malformed config: {}", details),
            ConfigError::Invalid(details) => write!(f, "Invalid config value: {}", details),
        }
    }
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Io(details) => write!(f, "Failed to read snapshot: {}", details),
            SnapshotError::Parse(details) => write!(f, "Malformed snapshot: {}", details),
        }
    }
}

impl std::error::Error for AgentError {}
impl std::error::Error for OracleError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for SnapshotError {}

impl From<ConfigError> for AgentError {
    fn from(err: ConfigError) -> Self {
        AgentError::Config(err)
    }
}

impl From<SnapshotError> for AgentError {
    fn from(err: SnapshotError) -> Self {
        AgentError::Snapshot(err)
    }
}

/// Type alias for Results using AgentError
pub type AgentResult<T> = Result<T, AgentError>;

/// Type alias for Results using OracleError
pub type OracleResult<T> = Result<T, OracleError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Type alias for Results using SnapshotError
pub type SnapshotResult<T> = Result<T, SnapshotError>;
