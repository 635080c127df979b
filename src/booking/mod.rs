//! Booking: plan catalog, details form, and the flow that hands the visitor
//! over to the external scheduling widget.

mod flow;
mod form;
mod plan;
mod readiness;
mod widget;

pub use flow::{
    BookingFlow, FlowEntry, FlowSettings, Navigation, ReadySource, Step, SubmitOutcome,
};
pub use form::{
    localize_errors, BookingDetails, DetailsForm, ExperienceLevel, Field, FieldError, FieldErrors,
    FieldInput,
};
pub use plan::{BillingCycle, BookingSelection, Plan, PlanCatalog, Pricing};
pub use readiness::{ManualReadiness, ManualTrigger, MessageListener, ReadinessPort, WidgetMessage};
pub use widget::SchedulingWidget;
