// SPDX-License-Identifier: MPL-2.0
//! Asset readiness sub-component.
//!
//! Tracks the before/after images independently. Every `set_asset` issues a
//! fresh [`ProbeTicket`]; a completion is applied only if its ticket is still
//! the current one for its slot, so a slow probe for an old URL can never
//! overwrite the status of a newer one. Superseded probes are also aborted.

use crate::domain::comparison::{AssetSlot, AssetStatus, DisplayState};
use crate::error::ProbeError;
use crate::media::probe::{LoadedAsset, Prober};
use futures_util::future::{AbortHandle, AbortRegistration, Abortable};
use std::future::Future;

/// Identifies one probe invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTicket {
    pub slot: AssetSlot,
    pub url: String,
    generation: u64,
}

/// A probe that has been requested but not started.
///
/// The caller runs it (usually as an iced `Task`) and feeds the resulting
/// [`ProbeCompletion`] back through [`Message::ProbeFinished`].
#[derive(Debug)]
pub struct ProbeRequest {
    ticket: ProbeTicket,
    registration: AbortRegistration,
}

impl ProbeRequest {
    #[must_use]
    pub fn ticket(&self) -> &ProbeTicket {
        &self.ticket
    }

    /// Starts the probe. The returned future resolves with
    /// [`ProbeOutcome::Cancelled`] if the slot moves on before it finishes.
    pub fn run(self, prober: &dyn Prober) -> impl Future<Output = ProbeCompletion> + Send + 'static {
        let probe = prober.probe(&self.ticket.url);
        let ticket = self.ticket;
        let registration = self.registration;
        async move {
            let outcome = match Abortable::new(probe, registration).await {
                Ok(result) => ProbeOutcome::Finished(result),
                Err(_aborted) => ProbeOutcome::Cancelled,
            };
            ProbeCompletion { ticket, outcome }
        }
    }
}

#[derive(Debug, Clone)]
pub enum ProbeOutcome {
    Finished(Result<LoadedAsset, ProbeError>),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct ProbeCompletion {
    pub ticket: ProbeTicket,
    pub outcome: ProbeOutcome,
}

#[derive(Debug, Default)]
struct Slot {
    url: Option<String>,
    status: AssetStatus,
    ticket: Option<ProbeTicket>,
    abort: Option<AbortHandle>,
    asset: Option<LoadedAsset>,
    error: Option<ProbeError>,
}

impl Slot {
    fn cancel_probe(&mut self) {
        if let Some(handle) = self.abort.take() {
            handle.abort();
        }
    }
}

/// Asset readiness state.
#[derive(Debug, Default)]
pub struct State {
    before: Slot,
    after: Slot,
    next_generation: u64,
    torn_down: bool,
}

/// Messages for the asset readiness sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    SetAsset { slot: AssetSlot, url: String },
    ProbeFinished(ProbeCompletion),
}

/// Effects produced by the asset readiness sub-component.
#[derive(Debug)]
pub enum Effect {
    None,
    /// The orchestrator must run this probe.
    StartProbe(ProbeRequest),
    StatusChanged {
        slot: AssetSlot,
        status: AssetStatus,
    },
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle an asset message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::SetAsset { slot, url } => Effect::StartProbe(self.set_asset(slot, url)),
            Message::ProbeFinished(completion) => {
                let slot = completion.ticket.slot;
                match self.probe_finished(completion) {
                    Some(status) => Effect::StatusChanged { slot, status },
                    None => Effect::None,
                }
            }
        }
    }

    /// Points `slot` at `url`, resetting it to `Pending`.
    ///
    /// Any probe still running for the slot is aborted and its result will be
    /// discarded. After teardown the returned request is already aborted.
    pub fn set_asset(&mut self, slot: AssetSlot, url: impl Into<String>) -> ProbeRequest {
        let url = url.into();
        self.next_generation += 1;
        let ticket = ProbeTicket {
            slot,
            url: url.clone(),
            generation: self.next_generation,
        };
        let (handle, registration) = AbortHandle::new_pair();

        if self.torn_down {
            handle.abort();
            return ProbeRequest {
                ticket,
                registration,
            };
        }

        let entry = self.slot_mut(slot);
        entry.cancel_probe();
        *entry = Slot {
            url: Some(url),
            status: AssetStatus::Pending,
            ticket: Some(ticket.clone()),
            abort: Some(handle),
            asset: None,
            error: None,
        };
        tracing::debug!(%slot, url = %ticket.url, "probing asset");

        ProbeRequest {
            ticket,
            registration,
        }
    }

    /// Applies a probe result. Returns the new status, or `None` if the
    /// completion was stale, cancelled, or arrived after teardown.
    pub fn probe_finished(&mut self, completion: ProbeCompletion) -> Option<AssetStatus> {
        if self.torn_down {
            return None;
        }
        let ProbeCompletion { ticket, outcome } = completion;
        let entry = self.slot_mut(ticket.slot);

        if entry.ticket.as_ref() != Some(&ticket) || entry.status.is_terminal() {
            tracing::debug!(slot = %ticket.slot, url = %ticket.url, "discarding stale probe result");
            return None;
        }

        match outcome {
            ProbeOutcome::Cancelled => {
                tracing::debug!(slot = %ticket.slot, url = %ticket.url, "probe cancelled");
                None
            }
            ProbeOutcome::Finished(Ok(asset)) => {
                tracing::info!(
                    slot = %ticket.slot,
                    url = %ticket.url,
                    width = asset.width,
                    height = asset.height,
                    "asset loaded"
                );
                entry.abort = None;
                entry.asset = Some(asset);
                entry.status = AssetStatus::Loaded;
                Some(AssetStatus::Loaded)
            }
            ProbeOutcome::Finished(Err(error)) => {
                tracing::warn!(slot = %ticket.slot, url = %ticket.url, %error, "asset failed to load");
                entry.abort = None;
                entry.error = Some(error);
                entry.status = AssetStatus::Failed;
                Some(AssetStatus::Failed)
            }
        }
    }

    /// Aborts outstanding probes; later results are ignored.
    pub fn teardown(&mut self) {
        self.before.cancel_probe();
        self.after.cancel_probe();
        self.torn_down = true;
    }

    #[must_use]
    pub fn display_state(&self) -> DisplayState {
        DisplayState::derive(self.before.status, self.after.status)
    }

    #[must_use]
    pub fn status(&self, slot: AssetSlot) -> AssetStatus {
        self.slot(slot).status
    }

    #[must_use]
    pub fn url(&self, slot: AssetSlot) -> Option<&str> {
        self.slot(slot).url.as_deref()
    }

    #[must_use]
    pub fn asset(&self, slot: AssetSlot) -> Option<&LoadedAsset> {
        self.slot(slot).asset.as_ref()
    }

    #[must_use]
    pub fn error(&self, slot: AssetSlot) -> Option<&ProbeError> {
        self.slot(slot).error.as_ref()
    }

    /// Whether a probe for `slot` is still in flight.
    #[must_use]
    pub fn is_probing(&self, slot: AssetSlot) -> bool {
        self.slot(slot).abort.is_some()
    }

    fn slot(&self, slot: AssetSlot) -> &Slot {
        match slot {
            AssetSlot::Before => &self.before,
            AssetSlot::After => &self.after,
        }
    }

    fn slot_mut(&mut self, slot: AssetSlot) -> &mut Slot {
        match slot {
            AssetSlot::Before => &mut self.before,
            AssetSlot::After => &mut self.after,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comparison::FailedAssets;
    use futures_util::future::{self, BoxFuture};
    use futures_util::FutureExt;
    use iced::widget::image;

    fn asset() -> LoadedAsset {
        LoadedAsset {
            handle: image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
            width: 1,
            height: 1,
        }
    }

    fn loaded(request: &ProbeRequest) -> ProbeCompletion {
        ProbeCompletion {
            ticket: request.ticket().clone(),
            outcome: ProbeOutcome::Finished(Ok(asset())),
        }
    }

    fn failed(request: &ProbeRequest) -> ProbeCompletion {
        ProbeCompletion {
            ticket: request.ticket().clone(),
            outcome: ProbeOutcome::Finished(Err(ProbeError::TimedOut)),
        }
    }

    /// Resolves immediately with a 1x1 image.
    struct ReadyProber;

    impl Prober for ReadyProber {
        fn probe(&self, _url: &str) -> BoxFuture<'static, Result<LoadedAsset, ProbeError>> {
            future::ready(Ok(asset())).boxed()
        }
    }

    /// Never resolves on its own.
    struct StuckProber;

    impl Prober for StuckProber {
        fn probe(&self, _url: &str) -> BoxFuture<'static, Result<LoadedAsset, ProbeError>> {
            future::pending().boxed()
        }
    }

    #[test]
    fn initial_state_is_loading() {
        let state = State::new();
        assert_eq!(state.status(AssetSlot::Before), AssetStatus::Pending);
        assert_eq!(state.display_state(), DisplayState::Loading);
        assert!(state.url(AssetSlot::After).is_none());
    }

    #[test]
    fn both_loaded_is_ready() {
        let mut state = State::new();
        let before = state.set_asset(AssetSlot::Before, "a.png");
        let after = state.set_asset(AssetSlot::After, "b.png");

        assert_eq!(state.probe_finished(loaded(&before)), Some(AssetStatus::Loaded));
        assert_eq!(state.display_state(), DisplayState::Loading);
        assert_eq!(state.probe_finished(loaded(&after)), Some(AssetStatus::Loaded));
        assert_eq!(state.display_state(), DisplayState::Ready);
        assert!(state.asset(AssetSlot::Before).is_some());
        assert!(!state.is_probing(AssetSlot::After));
    }

    #[test]
    fn one_failure_fails_display() {
        let mut state = State::new();
        let before = state.set_asset(AssetSlot::Before, "a.png");
        let after = state.set_asset(AssetSlot::After, "b.png");
        state.probe_finished(failed(&before));
        state.probe_finished(loaded(&after));

        assert_eq!(
            state.display_state(),
            DisplayState::Failed(FailedAssets::Before)
        );
        assert_eq!(state.error(AssetSlot::Before), Some(&ProbeError::TimedOut));
    }

    #[test]
    fn stale_success_is_discarded() {
        let mut state = State::new();
        let first = state.set_asset(AssetSlot::Before, "old.png");
        let second = state.set_asset(AssetSlot::Before, "new.png");

        assert_eq!(state.probe_finished(loaded(&first)), None);
        assert_eq!(state.status(AssetSlot::Before), AssetStatus::Pending);
        assert_eq!(state.url(AssetSlot::Before), Some("new.png"));

        assert_eq!(state.probe_finished(failed(&second)), Some(AssetStatus::Failed));
    }

    #[test]
    fn retry_with_same_url_supersedes_previous_probe() {
        let mut state = State::new();
        let first = state.set_asset(AssetSlot::After, "same.png");
        state.probe_finished(failed(&first));
        assert_eq!(state.status(AssetSlot::After), AssetStatus::Failed);

        let retry = state.set_asset(AssetSlot::After, "same.png");
        assert_eq!(state.status(AssetSlot::After), AssetStatus::Pending);
        assert!(state.error(AssetSlot::After).is_none());
        assert_eq!(state.probe_finished(loaded(&first)), None);
        assert_eq!(state.probe_finished(loaded(&retry)), Some(AssetStatus::Loaded));
    }

    #[test]
    fn terminal_status_is_applied_once() {
        let mut state = State::new();
        let request = state.set_asset(AssetSlot::Before, "a.png");
        assert_eq!(state.probe_finished(loaded(&request)), Some(AssetStatus::Loaded));
        assert_eq!(state.probe_finished(failed(&request)), None);
        assert_eq!(state.status(AssetSlot::Before), AssetStatus::Loaded);
    }

    #[test]
    fn slots_are_independent() {
        let mut state = State::new();
        let before = state.set_asset(AssetSlot::Before, "a.png");
        state.set_asset(AssetSlot::After, "b.png");
        state.probe_finished(loaded(&before));
        state.set_asset(AssetSlot::After, "c.png");
        assert_eq!(state.status(AssetSlot::Before), AssetStatus::Loaded);
        assert_eq!(state.status(AssetSlot::After), AssetStatus::Pending);
    }

    #[test]
    fn handle_routes_messages() {
        let mut state = State::new();
        let Effect::StartProbe(request) = state.handle(Message::SetAsset {
            slot: AssetSlot::Before,
            url: "a.png".into(),
        }) else {
            panic!("expected a probe request");
        };
        assert_eq!(request.ticket().url, "a.png");

        let effect = state.handle(Message::ProbeFinished(loaded(&request)));
        assert!(matches!(
            effect,
            Effect::StatusChanged {
                slot: AssetSlot::Before,
                status: AssetStatus::Loaded
            }
        ));
        assert!(matches!(
            state.handle(Message::ProbeFinished(loaded(&request))),
            Effect::None
        ));
    }

    #[tokio::test]
    async fn run_resolves_with_prober_result() {
        let mut state = State::new();
        let request = state.set_asset(AssetSlot::Before, "a.png");
        let completion = request.run(&ReadyProber).await;
        assert!(matches!(completion.outcome, ProbeOutcome::Finished(Ok(_))));
        assert_eq!(state.probe_finished(completion), Some(AssetStatus::Loaded));
    }

    #[tokio::test]
    async fn superseded_probe_is_cancelled() {
        let mut state = State::new();
        let first = state.set_asset(AssetSlot::Before, "slow.png");
        let pending = first.run(&StuckProber);
        state.set_asset(AssetSlot::Before, "fast.png");

        let completion = pending.await;
        assert!(matches!(completion.outcome, ProbeOutcome::Cancelled));
        assert_eq!(state.probe_finished(completion), None);
        assert_eq!(state.status(AssetSlot::Before), AssetStatus::Pending);
    }

    #[tokio::test]
    async fn teardown_aborts_and_ignores_results() {
        let mut state = State::new();
        let request = state.set_asset(AssetSlot::After, "slow.png");
        let ticket = request.ticket().clone();
        let pending = request.run(&StuckProber);
        state.teardown();

        assert!(matches!(pending.await.outcome, ProbeOutcome::Cancelled));
        let late = ProbeCompletion {
            ticket,
            outcome: ProbeOutcome::Finished(Ok(asset())),
        };
        assert_eq!(state.probe_finished(late), None);

        let after_teardown = state.set_asset(AssetSlot::After, "new.png");
        assert!(matches!(
            after_teardown.run(&ReadyProber).await.outcome,
            ProbeOutcome::Cancelled
        ));
        assert_eq!(state.url(AssetSlot::After), Some("slow.png"));
    }
}
