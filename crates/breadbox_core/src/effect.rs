#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SendChat {
        request_id: crate::RequestId,
        message: String,
    },
}
