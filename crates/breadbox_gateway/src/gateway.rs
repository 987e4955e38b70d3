use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use widget_logging::widget_trace;

use crate::transport::{ChatTransport, ReqwestTransport, TransportSettings};
use crate::{GatewayEvent, RequestId};

enum GatewayCommand {
    Send {
        request_id: RequestId,
        message: String,
    },
}

/// Handle to the transport thread.
///
/// Each send is spawned as its own task, so several requests can be in
/// flight at once and events arrive in completion order, not issue order.
#[derive(Clone)]
pub struct GatewayHandle {
    cmd_tx: mpsc::Sender<GatewayCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<GatewayEvent>>>,
}

impl GatewayHandle {
    pub fn new(settings: TransportSettings) -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::new(settings)))
    }

    /// Builds a handle around an injected transport. Tests use this to run
    /// the channel plumbing without a live server.
    pub fn with_transport(transport: Arc<dyn ChatTransport>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let transport = transport.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(transport.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn send(&self, request_id: RequestId, message: impl Into<String>) {
        let _ = self.cmd_tx.send(GatewayCommand::Send {
            request_id,
            message: message.into(),
        });
    }

    pub fn try_recv(&self) -> Option<GatewayEvent> {
        self.event_rx
            .lock()
            .ok()
            .and_then(|rx| rx.try_recv().ok())
    }
}

async fn handle_command(
    transport: &dyn ChatTransport,
    command: GatewayCommand,
    event_tx: mpsc::Sender<GatewayEvent>,
) {
    match command {
        GatewayCommand::Send {
            request_id,
            message,
        } => {
            let result = transport.send(request_id, &message).await;
            widget_trace!("chat settled request_id={} ok={}", request_id, result.is_ok());
            let _ = event_tx.send(GatewayEvent::ReplySettled { request_id, result });
        }
    }
}
