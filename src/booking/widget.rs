//! Embedded scheduling widget: fixed URL, prefill query, readiness event.

use crate::booking::{BookingDetails, BookingSelection};
use crate::i18n::LanguageStrings;
use crate::util::percent_encode;
use serde::Serialize;

/// Where the widget lives and how it announces that it has loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchedulingWidget {
    /// Same URL for every booking
    pub url: String,
    /// Name of the cross-origin message event that signals readiness
    pub ready_event: String,
    /// Origin the readiness message must come from
    pub origin: String,
}

impl Default for SchedulingWidget {
    fn default() -> Self {
        Self {
            url: "https://calendly.com/coach/session".to_string(),
            ready_event: "calendly.event_type_viewed".to_string(),
            origin: "https://calendly.com".to_string(),
        }
    }
}

impl SchedulingWidget {
    /// Widget URL prefilled with the collected details.
    ///
    /// Custom answers: `a1` plan, `a2` billing cycle, `a3` phone,
    /// `a4` experience level, `a5` notes. Empty answers are left out.
    pub fn prefill_url(
        &self,
        details: &BookingDetails,
        selection: &BookingSelection,
        strings: &LanguageStrings,
    ) -> String {
        let params = [
            ("name", details.name.trim()),
            ("email", details.email.trim()),
            ("a1", selection.plan.name.as_str()),
            ("a2", selection.billing_cycle.label(strings)),
            ("a3", details.phone.trim()),
            ("a4", details.experience.label(strings)),
            ("a5", details.notes.trim()),
        ];

        let query = params
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| format!("{}={}", key, percent_encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.url, separator, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{BillingCycle, ExperienceLevel, PlanCatalog};
    use crate::i18n::Language;

    fn selection() -> BookingSelection {
        PlanCatalog::builtin(Language::ENGLISH)
            .select("performance", BillingCycle::Quarterly)
            .unwrap()
    }

    #[test]
    fn test_prefill_url_full() {
        let details = BookingDetails {
            name: "Ana López".to_string(),
            email: "ana@example.com".to_string(),
            phone: "600 111 222".to_string(),
            experience: ExperienceLevel::Advanced,
            notes: "Knee injury".to_string(),
            consent: true,
            marketing_consent: false,
        };

        let url = SchedulingWidget::default().prefill_url(
            &details,
            &selection(),
            Language::ENGLISH.strings(),
        );

        assert_eq!(
            url,
            "https://calendly.com/coach/session?name=Ana%20L%C3%B3pez&email=ana%40example.com\
             &a1=Performance&a2=Quarterly&a3=600%20111%20222&a4=Advanced&a5=Knee%20injury"
        );
    }

    #[test]
    fn test_prefill_url_skips_empty_answers() {
        let details = BookingDetails {
            name: "Al".to_string(),
            email: "a@b.co".to_string(),
            consent: true,
            ..BookingDetails::default()
        };

        let url = SchedulingWidget::default().prefill_url(
            &details,
            &selection(),
            Language::ENGLISH.strings(),
        );

        assert!(!url.contains("a3="));
        assert!(!url.contains("a5="));
        assert!(url.contains("a4=Beginner"));
    }

    #[test]
    fn test_prefill_url_appends_to_existing_query() {
        let widget = SchedulingWidget {
            url: "https://calendly.com/coach/session?hide_gdpr_banner=1".to_string(),
            ..SchedulingWidget::default()
        };
        let details = BookingDetails {
            name: "Al".to_string(),
            email: "a@b.co".to_string(),
            ..BookingDetails::default()
        };

        let url = widget.prefill_url(&details, &selection(), Language::ENGLISH.strings());
        assert!(url.starts_with("https://calendly.com/coach/session?hide_gdpr_banner=1&name=Al"));
    }
}
