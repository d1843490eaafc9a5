//! Application Context
//!
//! Shared handles provided via the Leptos Context API: the injected store
//! client and the single reporting channel for mutation outcomes.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::StoreClient;
use crate::sync::MutationOutcome;

/// How long a transient notice stays on screen
const NOTICE_MILLIS: u32 = 4_000;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    // LocalStorage: the HTTP client is not Send on wasm
    client: StoredValue<StoreClient, LocalStorage>,
    notice: RwSignal<Option<(u64, String)>>,
    notice_seq: StoredValue<u64>,
}

impl AppContext {
    pub fn new(client: StoreClient) -> Self {
        Self {
            client: StoredValue::new_local(client),
            notice: RwSignal::new(None),
            notice_seq: StoredValue::new(0),
        }
    }

    /// Cheap clone of the shared client for a spawned request
    pub fn client(&self) -> StoreClient {
        self.client.get_value()
    }

    /// Current transient notice text, if any
    pub fn notice(&self) -> Option<String> {
        self.notice.get().map(|(_, text)| text)
    }

    /// Single reporting path for every mutation (toggle, update, create).
    pub fn report(&self, action: &str, outcome: &MutationOutcome) {
        match outcome {
            MutationOutcome::Applied => {
                web_sys::console::log_1(&format!("[STORE] {} applied", action).into());
            }
            MutationOutcome::Stale => {
                web_sys::console::log_1(
                    &format!("[STORE] stale response for {} discarded", action).into(),
                );
            }
            MutationOutcome::Failed(message) => {
                web_sys::console::error_1(
                    &format!("[STORE] {} failed: {}", action, message).into(),
                );
                self.push_notice(format!("Could not {}: {}", action, message));
            }
        }
    }

    /// Show a transient notice, replacing any current one.
    fn push_notice(&self, text: String) {
        let seq = self
            .notice_seq
            .try_update_value(|n| {
                *n += 1;
                *n
            })
            .unwrap_or(0);
        self.notice.set(Some((seq, text)));

        let notice = self.notice;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_MILLIS).await;
            // Clear only if a newer notice has not replaced this one
            if notice.get_untracked().map(|(s, _)| s) == Some(seq) {
                notice.set(None);
            }
        });
    }
}
