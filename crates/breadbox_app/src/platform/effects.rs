use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use breadbox_core::{Effect, Msg, ReplyFailure};
use breadbox_gateway::{GatewayEvent, GatewayHandle, SendFailure, TransportSettings};
use widget_logging::{widget_info, widget_warn};

pub(crate) struct EffectRunner {
    gateway: GatewayHandle,
}

impl EffectRunner {
    pub(crate) fn new(settings: TransportSettings, msg_tx: mpsc::Sender<Msg>) -> Self {
        let gateway = GatewayHandle::new(settings);
        let runner = Self { gateway };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub(crate) fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SendChat {
                    request_id,
                    message,
                } => {
                    widget_info!(
                        "SendChat request_id={} chars={}",
                        request_id,
                        message.chars().count()
                    );
                    self.gateway.send(request_id, message);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let gateway = self.gateway.clone();
        thread::spawn(move || loop {
            if let Some(event) = gateway.try_recv() {
                match event {
                    GatewayEvent::ReplySettled { request_id, result } => {
                        let result = result.map_err(|failure| {
                            widget_warn!("Chat request {} failed: {}", request_id, failure);
                            map_failure(failure)
                        });
                        let _ = msg_tx.send(Msg::ReplyArrived { request_id, result });
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_failure(failure: SendFailure) -> ReplyFailure {
    match failure {
        SendFailure::Network(_) => ReplyFailure::Network,
        SendFailure::Timeout => ReplyFailure::Timeout,
        SendFailure::HttpStatus(code) => ReplyFailure::HttpStatus(code),
        SendFailure::MalformedReply => ReplyFailure::MalformedReply,
    }
}
