//! Inquiry submission lifecycle as one cancellable async operation.
//!
//! DESIGN
//! ======
//! The lifecycle is `begin_submit → submitter → finish_submit → sleep →
//! complete → on_close`. Each state change is a short synchronous step
//! through [`FormStore`], so the whole future can be dropped or aborted
//! between steps without leaving a half-applied transition behind.
//!
//! The submitter is the seam for a real endpoint: [`SimulatedSubmitter`]
//! only waits out a fixed latency and succeeds.
//!
//! ERROR HANDLING
//! ==============
//! Submitter failures land the form in `Failed` (retryable). A store that
//! no longer exists (disposed signal) ends the run as `Detached` without
//! touching anything or firing `on_close`.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;

use crate::state::inquiry::{InquiryFields, InquiryForm, SubmitError, SubmitRejected};

/// Delay between submit and confirmation.
pub const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_millis(1500);
/// How long the confirmation stays up before the dialog resets and closes.
pub const DEFAULT_CONFIRMATION: Duration = Duration::from_millis(3000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InquiryTimings {
    pub submit_latency: Duration,
    pub confirmation: Duration,
}

impl Default for InquiryTimings {
    fn default() -> Self {
        Self { submit_latency: DEFAULT_SUBMIT_LATENCY, confirmation: DEFAULT_CONFIRMATION }
    }
}

// =============================================================================
// SEAMS
// =============================================================================

/// Non-blocking delay source.
pub trait Sleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Delivers a validated field set somewhere.
pub trait InquirySubmitter {
    fn submit(&self, fields: &InquiryFields) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Mutable access to the form owned by a component.
pub trait FormStore {
    /// Run `f` against the form, or return `None` if it has been disposed.
    fn with_form<R>(&self, f: impl FnOnce(&mut InquiryForm) -> R) -> Option<R>;
}

impl FormStore for RwSignal<InquiryForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut InquiryForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Browser timer backed by `setTimeout`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSleeper;

#[cfg(feature = "hydrate")]
impl Sleeper for BrowserSleeper {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
}

/// Stand-in endpoint: waits `latency`, then accepts.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedSubmitter<S> {
    sleeper: S,
    latency: Duration,
}

impl<S: Sleeper> SimulatedSubmitter<S> {
    #[must_use]
    pub fn new(sleeper: S, latency: Duration) -> Self {
        Self { sleeper, latency }
    }
}

impl<S: Sleeper> InquirySubmitter for SimulatedSubmitter<S> {
    async fn submit(&self, _fields: &InquiryFields) -> Result<(), SubmitError> {
        self.sleeper.sleep(self.latency).await;
        Ok(())
    }
}

// =============================================================================
// DRIVER
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Submit pressed while not idle; nothing changed.
    Ignored,
    /// Validation blocked the submission; status unchanged.
    Invalid(SubmitError),
    /// The submitter failed; the form is in `Failed`.
    Failed(SubmitError),
    /// Confirmation shown, form reset and `on_close` fired.
    Completed,
    /// The form went away mid-flight.
    Detached,
}

/// Run one full submission lifecycle against `store`.
///
/// `on_close` fires at most once, only after the form has been reset.
pub async fn drive_submission<St, Sb, Sl>(
    store: &St,
    submitter: &Sb,
    sleeper: &Sl,
    confirmation: Duration,
    on_close: impl FnOnce(),
) -> SubmissionOutcome
where
    St: FormStore,
    Sb: InquirySubmitter,
    Sl: Sleeper,
{
    let snapshot = match store.with_form(InquiryForm::begin_submit) {
        None => return SubmissionOutcome::Detached,
        Some(Err(SubmitRejected::NotIdle)) => return SubmissionOutcome::Ignored,
        Some(Err(SubmitRejected::Invalid(e))) => return SubmissionOutcome::Invalid(e),
        Some(Ok(fields)) => fields,
    };

    let result = submitter.submit(&snapshot).await;
    let failure = result.as_ref().err().cloned();
    if store.with_form(|form| form.finish_submit(result)).is_none() {
        return SubmissionOutcome::Detached;
    }
    if let Some(e) = failure {
        return SubmissionOutcome::Failed(e);
    }

    sleeper.sleep(confirmation).await;
    match store.with_form(InquiryForm::complete) {
        None => SubmissionOutcome::Detached,
        // Closed by hand during the confirmation; that path already reset.
        Some(false) => SubmissionOutcome::Ignored,
        Some(true) => {
            on_close();
            SubmissionOutcome::Completed
        }
    }
}
