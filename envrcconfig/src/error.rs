//! Error types for descriptor extraction and file generation

/// Errors that can occur while extracting variable descriptors or rendering
/// sample configuration files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The usage table could not be produced for a struct.
    #[error("failed to write usage table: {message}")]
    Introspection {
        /// Description of the underlying failure
        message: String,
    },

    /// A usage table row did not decompose into seven tab-separated tokens.
    ///
    /// This should not happen unless the table layout has changed.
    #[error(
        "incompatible usage table (this should not happen unless the layout has changed) - each line should contain seven tokens, found {found}"
    )]
    IncompatibleFormat {
        /// Number of tokens in the offending row
        found: usize,
        /// The offending row
        line: String,
    },

    /// The required column held something other than a boolean literal.
    #[error("failed to parse required flag '{value}': {source}")]
    ParseBool {
        /// The unparsable token
        value: String,
        source: std::str::ParseBoolError,
    },

    /// A format name outside of direnv, dotenv, kubernetes and terraform.
    #[error("unsupported output format '{value}'")]
    UnsupportedFormat {
        /// The format name as supplied by the user
        value: String,
    },

    /// Malformed or unknown command line flag.
    #[error(transparent)]
    Flags(#[from] clap::Error),

    /// A target identifier that is not present in the registry.
    #[error("unknown target '{target}' (expected <package>,<typename>)")]
    UnknownTarget {
        /// The target identifier as supplied on the command line
        target: String,
    },

    /// A template failed to render.
    #[error("failed to render {format} output: {source}")]
    Render {
        /// Name of the format being rendered
        format: String,
        source: minijinja::Error,
    },

    /// An output file could not be written.
    #[error("failed to write '{path}': {source}")]
    Io {
        /// Path of the file being written
        path: String,
        source: std::io::Error,
    },
}

impl Error {
    /// Create an unsupported format error
    pub(crate) fn unsupported_format(value: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            value: value.into(),
        }
    }

    /// True for errors caused by the command line rather than the program state
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::Flags(_) | Self::UnsupportedFormat { .. } | Self::UnknownTarget { .. }
        )
    }
}

/// Result alias used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;
