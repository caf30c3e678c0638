/// One HTTP reply as seen by this crate: status line, headers, raw body.
///
/// Bodies are carried verbatim; subscribers decide whether to decode them
/// (see [`crate::transport::decode_resource_reference`] for accepted sends).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Semantic kind of a request outcome; notification handlers are keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// 200, 201, 204.
    Success,
    /// 400, 404, 405: the request itself was at fault and may be fixable by
    /// altering it.
    Problem,
    /// 401.
    AuthError,
    /// 415, 500, 503, and any status not otherwise listed.
    Error,
    /// The request never produced an HTTP status (connect failure, broken
    /// stream, etc). Never returned by [`OutcomeKind::of_status`].
    Transport,
}

impl OutcomeKind {
    /// Classify an HTTP status code.
    ///
    /// This is the vendor's documented response-code table. 415 is grouped
    /// with the server failures rather than the request problems, matching
    /// that table.
    pub fn of_status(status: u16) -> Self {
        match status {
            200 | 201 | 204 => Self::Success,
            400 | 404 | 405 => Self::Problem,
            401 => Self::AuthError,
            415 | 500 | 503 => Self::Error,
            _ => Self::Error,
        }
    }
}

/// The classified result of one issued request.
///
/// Exactly one outcome is produced per request that runs to completion; a
/// request that never completes produces none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(Reply),
    Problem(Reply),
    AuthError(Reply),
    Error(Reply),
    /// Network-level failure carrying a description of the underlying error.
    Transport(TransportFailure),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    pub message: String,
}

impl Outcome {
    /// Classify a completed HTTP reply.
    pub fn of_reply(reply: Reply) -> Self {
        match OutcomeKind::of_status(reply.status) {
            OutcomeKind::Success => Self::Success(reply),
            OutcomeKind::Problem => Self::Problem(reply),
            OutcomeKind::AuthError => Self::AuthError(reply),
            OutcomeKind::Error => Self::Error(reply),
            // of_status never yields Transport.
            OutcomeKind::Transport => unreachable!("of_status does not classify transports"),
        }
    }

    pub fn kind(&self) -> OutcomeKind {
        match self {
            Self::Success(_) => OutcomeKind::Success,
            Self::Problem(_) => OutcomeKind::Problem,
            Self::AuthError(_) => OutcomeKind::AuthError,
            Self::Error(_) => OutcomeKind::Error,
            Self::Transport(_) => OutcomeKind::Transport,
        }
    }

    /// The HTTP reply, when the request completed at the HTTP level.
    pub fn reply(&self) -> Option<&Reply> {
        match self {
            Self::Success(reply)
            | Self::Problem(reply)
            | Self::AuthError(reply)
            | Self::Error(reply) => Some(reply),
            Self::Transport(_) => None,
        }
    }
}
