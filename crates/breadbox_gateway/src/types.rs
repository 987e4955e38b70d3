pub type RequestId = u64;

/// Two-variant outcome of a chat send: the reply text, or why there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayEvent {
    ReplySettled {
        request_id: RequestId,
        result: Result<String, SendFailure>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendFailure {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("http status {0}")]
    HttpStatus(u16),
    /// Body was not JSON, or the `response` field was missing or not a string.
    #[error("malformed reply body")]
    MalformedReply,
}
