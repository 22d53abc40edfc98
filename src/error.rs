use thiserror::Error;

/// Errors raised by the translation core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MmuError {
    /// The address has bits set above the configured address width.
    /// Out-of-width addresses are rejected, never masked, and the
    /// rejected translation mutates no state.
    #[error("address {addr:#x} exceeds the configured {bits}-bit address width")]
    InvalidAddress { addr: u32, bits: u32 },

    /// An unrecognized replacement policy name.
    #[error("unknown replacement policy: {0:?} (expected \"LRU\" or \"SegundaChance\")")]
    UnknownPolicy(String),

    /// A structurally invalid configuration, fatal at session creation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A rate was requested before any address was translated.
    #[error("no addresses translated; rates are undefined")]
    EmptyStatistics,
}

/// Errors raised while reading a trace file.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to read trace file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("trace line {line}: invalid logical address {token:?}")]
    InvalidRecord { line: usize, token: String },
}
