//! Errors raised while loading or validating portfolio content.

use std::path::PathBuf;

/// Content loading and validation failures.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Two projects share a title (titles are rendering keys)
    #[error("duplicate project title: {0}")]
    DuplicateProject(String),

    /// Two skills share a name (names are rendering keys)
    #[error("duplicate skill name: {0}")]
    DuplicateSkill(String),

    /// Two social links share a label
    #[error("duplicate social link: {0}")]
    DuplicateSocial(String),

    /// Skill color is not `#rgb` or `#rrggbb`
    #[error("skill {name}: invalid color {color:?}")]
    InvalidColor {
        /// Offending skill
        name: String,
        /// Value as written
        color: String,
    },

    /// Content file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Content file is not valid JSON for [`crate::types::PortfolioContent`]
    #[error("invalid content JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;
