#[derive(thiserror::Error, Debug)]
pub enum ConvertError<E> {
    #[error(transparent)]
    Parse(E),
    #[error("render fusion failed: {0}")]
    Render(#[from] RenderError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("ast type `{kind}` is unknown.")]
    UnknownNodeKind { kind: String },

    #[error("`@path` only supports string payloads, `{found}` found.")]
    InvalidPathPayload { found: String },

    #[error("`@children` only supports string payloads, `{found}` found.")]
    InvalidChildrenPayload { found: String },

    #[error("`@key` only supports string payloads, `{found}` found.")]
    InvalidKeyPayload { found: String },

    #[error("element nesting exceeds the limit of {limit} levels.")]
    DepthLimitExceeded { limit: usize },
}
