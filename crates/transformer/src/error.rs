//! Pipeline errors, one variant per stage.

use castedit_cast_model::CastError;
use castedit_common::CasteditError;
use castedit_editor::EditError;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to open streams")]
    Open(#[source] CasteditError),

    #[error("failed to decode cast from input")]
    Decode(#[source] CastError),

    #[error("failed to transform cast with `{name}`")]
    Transform {
        name: String,
        #[source]
        source: EditError,
    },

    #[error("failed to save modified cast")]
    Encode(#[source] CastError),
}

/// Result type alias for pipeline runs.
pub type PipelineResult<T> = Result<T, PipelineError>;
