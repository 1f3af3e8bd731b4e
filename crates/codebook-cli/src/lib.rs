//! Library side of the `codebook` binary: logging setup and input loading.

pub mod inputs;
pub mod logging;
