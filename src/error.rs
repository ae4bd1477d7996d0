// Unified error type for the emulator core.
//
// Every fallible boundary (ROM loading, mapper construction, config I/O) returns
// `EmulatorError` so callers at the CLI layer have one thing to match on.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmulatorError {
    #[error("I/O failure: {0}")]
    IoFailure(#[from] std::io::Error),

    #[error("invalid iNES header: {0}")]
    HeaderInvalid(String),

    #[error("unsupported mapper: {0}")]
    UnsupportedMapper(u8),

    #[error("unsupported feature: {0}")]
    UnsupportedFeature(String),

    #[error("allocation failure: {0}")]
    AllocationFailure(String),
}
