//! Breadbox gateway: chat transport and effect execution.
mod gateway;
mod transport;
mod types;

pub use gateway::GatewayHandle;
pub use transport::{ChatTransport, ReqwestTransport, TransportSettings};
pub use types::{GatewayEvent, RequestId, SendFailure};
