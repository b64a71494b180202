//! Engine - owns the state, drives the update loop, runs actions
//!
//! Messages are applied synchronously; actions returned by the update
//! function are executed on spawned tasks that post their completion
//! message back through the engine's channel. The engine tracks how many
//! task completions are outstanding so one-shot callers can wait for the
//! state to settle.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;

use intelscope_api::ApiClient;
use intelscope_core::Result;

use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::settings::Settings;
use crate::state::AppState;

pub struct Engine {
    pub state: AppState,
    client: ApiClient,
    tx: mpsc::UnboundedSender<Message>,
    rx: mpsc::UnboundedReceiver<Message>,
    in_flight: usize,
}

impl Engine {
    pub fn new(settings: Settings) -> Result<Self> {
        let client = ApiClient::new(
            &settings.api.base_url,
            Duration::from_millis(settings.api.timeout_ms),
        )?;
        let (tx, rx) = mpsc::unbounded_channel();
        Ok(Self {
            state: AppState::new(settings),
            client,
            tx,
            rx,
            in_flight: 0,
        })
    }

    /// Apply a message, drive any follow-up messages to completion, and
    /// launch the actions they request.
    pub fn apply(&mut self, message: Message) {
        let mut next = Some(message);
        while let Some(msg) = next.take() {
            let result = handler::update(&mut self.state, msg);
            next = result.message;
            if let Some(action) = result.action {
                self.dispatch(action);
            }
        }
    }

    /// Number of background fetches whose completion has not yet been
    /// applied.
    pub fn pending(&self) -> usize {
        self.in_flight
    }

    /// Pump completion messages until no fetch remains outstanding.
    /// Suits one-shot drivers; an interactive frontend would instead
    /// `recv()` alongside its input events.
    pub async fn run_until_settled(&mut self) {
        while self.in_flight > 0 {
            let Some(msg) = self.rx.recv().await else {
                break;
            };
            self.in_flight -= 1;
            self.apply(msg);
        }
    }

    fn dispatch(&mut self, action: UpdateAction) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.in_flight += 1;
        debug!(?action, in_flight = self.in_flight, "dispatching action");

        match action {
            UpdateAction::FetchCheck {
                search_type,
                value,
                seq,
            } => {
                tokio::spawn(async move {
                    let msg = match client.check(search_type, &value).await {
                        Ok(response) => Message::SearchSucceeded {
                            search_type,
                            seq,
                            response,
                        },
                        Err(err) => Message::SearchFailed {
                            search_type,
                            seq,
                            message: err.user_message(),
                        },
                    };
                    let _ = tx.send(msg);
                });
            }

            UpdateAction::FetchStatistics { purpose } => {
                tokio::spawn(async move {
                    let result = client
                        .statistics()
                        .await
                        .map_err(|err| err.user_message());
                    let _ = tx.send(Message::StatisticsFetched { purpose, result });
                });
            }

            UpdateAction::FetchConfigStatus => {
                tokio::spawn(async move {
                    let result = client
                        .config_status()
                        .await
                        .map_err(|err| err.user_message());
                    let _ = tx.send(Message::ConfigStatusFetched(result));
                });
            }
        }
    }
}
