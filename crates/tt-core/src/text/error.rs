use thiserror::Error;

/// Errors raised while compiling a replacer.
///
/// These only ever surface at configuration time; a compiled replacer never
/// fails while cleaning.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    #[error("invalid replacement `{replacement}` for pattern `{pattern}`: {source}")]
    InvalidReplacement {
        pattern: String,
        replacement: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },
}
