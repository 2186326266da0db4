use thiserror::Error;

/// Failures the gallery can hit. None of them end the session: the caller
/// logs the error and carries on with whatever could be placed or shown.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// A node the gallery needs to hang content on is not in the scene.
    #[error("required scene node `{0}` not found")]
    MissingAnchor(&'static str),

    #[error("unknown wall `{0}`")]
    UnknownWall(String),

    /// The payload attached to an artwork node did not parse back into a record.
    #[error("malformed artwork data on `{node}`: {source}")]
    MalformedArtworkData {
        node: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("artwork node `{0}` has no attached data")]
    MissingArtworkData(String),

    #[error("catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),

    /// The host refused an operation (e.g. element creation).
    #[error("host error: {0}")]
    Host(String),

    #[error("duplicate artwork id `{0}`")]
    DuplicateArtworkId(String),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
