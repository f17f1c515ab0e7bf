//! Error types raised at the core's input boundaries.
//!
//! Resolution and classification are total and never produce these; they only
//! surface while building a mesh hierarchy, loading a model, or parsing ids
//! handed over from the page.

use thiserror::Error;

pub type SceneResult<T> = Result<T, SceneError>;

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    /// The hierarchy contains no triangles to measure.
    #[error("model has no geometry")]
    EmptyModel,

    /// The model's bounding box collapses to a point or is not finite.
    #[error("model bounds are degenerate (largest extent {extent})")]
    DegenerateModel { extent: f32 },

    /// A node was attached to a parent index that does not exist yet.
    #[error("parent node {parent} does not exist (hierarchy has {len} nodes)")]
    UnknownParent { parent: usize, len: usize },

    /// A zone id string outside the seven known ids.
    #[error("unknown zone id '{0}'")]
    UnknownZone(String),
}
