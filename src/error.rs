use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum MacgenError {
    #[error("invalid prefix '{value}': {reason}")]
    #[diagnostic(help("use three hex octets, e.g. aa:bb:cc"))]
    InvalidPrefix { value: String, reason: String },

    #[error("validation error: {message}")]
    Validation { message: String },

    #[error(
        "pool of {len} addresses cannot be split into {vm_count} VMs with {nics_per_vm} NICs each"
    )]
    PoolShape {
        len: usize,
        vm_count: usize,
        nics_per_vm: usize,
    },

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}
