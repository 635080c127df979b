//! Booking flow state machine.
//!
//! ```text
//!  pricing page ──selection──▶ DetailsEntry ──submit──▶ ScheduleSelection{ready}
//!       ▲                          │  ▲                        │
//!       └────────── back ──────────┘  └───────── back ─────────┘
//! ```
//!
//! Timers are `tokio::time` sleeps. Dropping a pending `submit` or
//! `await_widget` future cancels it before it touches the state.

use crate::booking::{
    BookingDetails, BookingSelection, DetailsForm, Field, FieldErrors, FieldInput, ReadinessPort,
    SchedulingWidget,
};
use crate::config::Config;
use crate::i18n::Language;
use crate::routing::RouteKey;
use serde::Serialize;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

/// Timing and widget settings shared by every flow instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSettings {
    /// Pause between a valid submit and showing the calendar
    pub processing_delay: Duration,
    /// Longest wait for the widget's readiness message
    pub ready_timeout: Duration,
    pub widget: SchedulingWidget,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            processing_delay: Duration::from_millis(500),
            ready_timeout: Duration::from_secs(10),
            widget: SchedulingWidget::default(),
        }
    }
}

impl FlowSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            processing_delay: config.processing_delay,
            ready_timeout: config.widget_ready_timeout,
            widget: config.widget.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    DetailsEntry,
    ScheduleSelection { ready: bool },
}

/// Result of entering the flow.
#[derive(Debug)]
pub enum FlowEntry {
    Started(BookingFlow),
    /// No selection was handed over; go back to this page instead.
    Redirect(RouteKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Still inside the flow
    Stay,
    /// Leave the flow for this page
    Exit(RouteKey),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected(FieldErrors),
    /// Submit outside `DetailsEntry`
    Ignored,
}

/// Which side of the readiness race won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadySource {
    Message,
    Timeout,
}

#[derive(Debug)]
pub struct BookingFlow {
    language: Language,
    selection: BookingSelection,
    form: DetailsForm,
    step: Step,
    settings: FlowSettings,
}

impl BookingFlow {
    /// Enter the flow. Without a selection the only way forward is back to pricing.
    pub fn enter(
        selection: Option<BookingSelection>,
        language: Language,
        settings: FlowSettings,
    ) -> FlowEntry {
        match selection {
            Some(selection) => {
                info!(
                    "Booking started: plan={} cycle={} lang={}",
                    selection.plan.id,
                    selection.billing_cycle.as_str(),
                    language
                );
                FlowEntry::Started(BookingFlow {
                    language,
                    selection,
                    form: DetailsForm::new(),
                    step: Step::DetailsEntry,
                    settings,
                })
            }
            None => {
                info!("Booking entered without a plan, redirecting to pricing");
                FlowEntry::Redirect(RouteKey::Pricing)
            }
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn selection(&self) -> &BookingSelection {
        &self.selection
    }

    pub fn form(&self) -> &DetailsForm {
        &self.form
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.step, Step::ScheduleSelection { ready: true })
    }

    /// Edit a form field. Ignored outside `DetailsEntry`.
    pub fn change(&mut self, input: FieldInput) {
        if self.step == Step::DetailsEntry {
            self.form.change(input);
        } else {
            debug!("Ignoring edit to {:?} outside the details step", input.field());
        }
    }

    /// Replace every field value at once, as when a whole form body is posted.
    /// Ignored outside `DetailsEntry`.
    pub fn fill(&mut self, details: BookingDetails) {
        if self.step == Step::DetailsEntry {
            self.form = DetailsForm::with_details(details);
        }
    }

    /// Leave a form field. Ignored outside `DetailsEntry`.
    pub fn blur(&mut self, field: Field) {
        if self.step == Step::DetailsEntry {
            self.form.blur(field);
        }
    }

    /// Validate the form and, if it passes, move to `ScheduleSelection` after
    /// the processing delay.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.step != Step::DetailsEntry {
            return SubmitOutcome::Ignored;
        }

        if !self.form.validate_all() {
            debug!("Details rejected: {:?}", self.form.errors().keys());
            return SubmitOutcome::Rejected(self.form.errors().clone());
        }

        sleep(self.settings.processing_delay).await;
        self.step = Step::ScheduleSelection { ready: false };
        debug!("Details accepted, showing scheduling widget");
        SubmitOutcome::Accepted
    }

    /// Prefilled widget URL. Only available in `ScheduleSelection`.
    pub fn widget_url(&self) -> Option<String> {
        match self.step {
            Step::ScheduleSelection { .. } => Some(self.settings.widget.prefill_url(
                self.form.details(),
                &self.selection,
                self.language.strings(),
            )),
            Step::DetailsEntry => None,
        }
    }

    /// Wait for the widget: the readiness message or the fallback timeout,
    /// whichever comes first. The loser is dropped.
    ///
    /// Returns `None` outside `ScheduleSelection` or when already ready.
    pub async fn await_widget<P: ReadinessPort>(&mut self, port: &mut P) -> Option<ReadySource> {
        if self.step != (Step::ScheduleSelection { ready: false }) {
            return None;
        }

        let source = tokio::select! {
            biased;
            _ = port.wait_ready() => ReadySource::Message,
            _ = sleep(self.settings.ready_timeout) => ReadySource::Timeout,
        };

        if source == ReadySource::Timeout {
            info!(
                "No readiness message after {:?}, showing widget anyway",
                self.settings.ready_timeout
            );
        }

        self.step = Step::ScheduleSelection { ready: true };
        Some(source)
    }

    /// Step back. Field values survive going back to `DetailsEntry`.
    pub fn back(&mut self) -> Navigation {
        match self.step {
            Step::ScheduleSelection { .. } => {
                self.step = Step::DetailsEntry;
                Navigation::Stay
            }
            Step::DetailsEntry => Navigation::Exit(RouteKey::Pricing),
        }
    }
}
