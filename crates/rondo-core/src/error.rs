pub type Result<T> = std::result::Result<T, Error>;

/// Input-validation failures.
///
/// These cover malformed snapshots only. An ineligible graph (odd degrees,
/// isolated nodes, disconnected components) is a valid structural answer and
/// is never reported through this type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Node id must not be empty")]
    EmptyNodeId,

    #[error("Node \"{id}\" has an empty label")]
    EmptyNodeLabel { id: String },

    #[error("Edge id must not be empty")]
    EmptyEdgeId,

    #[error("Duplicate node id: {id}")]
    DuplicateNodeId { id: String },

    #[error("Duplicate node label: {label}")]
    DuplicateNodeLabel { label: String },

    #[error("Duplicate edge id: {id}")]
    DuplicateEdgeId { id: String },
}
