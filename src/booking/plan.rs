//! Training plans and the booking selection handed from pricing to booking.

use crate::i18n::{Language, LanguageStrings};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    Monthly,
    Quarterly,
    Annual,
}

impl BillingCycle {
    pub const ALL: [BillingCycle; 3] = [
        BillingCycle::Monthly,
        BillingCycle::Quarterly,
        BillingCycle::Annual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Quarterly => "quarterly",
            BillingCycle::Annual => "annual",
        }
    }

    pub fn months(&self) -> u32 {
        match self {
            BillingCycle::Monthly => 1,
            BillingCycle::Quarterly => 3,
            BillingCycle::Annual => 12,
        }
    }

    pub fn label(&self, strings: &LanguageStrings) -> &'static str {
        match self {
            BillingCycle::Monthly => strings.billing_monthly,
            BillingCycle::Quarterly => strings.billing_quarterly,
            BillingCycle::Annual => strings.billing_annual,
        }
    }
}

/// Price per billing cycle, in euro cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pricing {
    pub monthly: u32,
    pub quarterly: u32,
    pub annual: u32,
}

impl Pricing {
    pub fn price(&self, cycle: BillingCycle) -> u32 {
        match cycle {
            BillingCycle::Monthly => self.monthly,
            BillingCycle::Quarterly => self.quarterly,
            BillingCycle::Annual => self.annual,
        }
    }

    /// Saving of `cycle` against paying monthly for the same period, in cents.
    pub fn saving(&self, cycle: BillingCycle) -> u32 {
        (self.monthly * cycle.months()).saturating_sub(self.price(cycle))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub description: String,
    pub pricing: Pricing,
    pub features: Vec<String>,
}

/// Plan and billing cycle chosen on the pricing page.
///
/// Lives only as long as the booking flow that receives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSelection {
    pub plan: Plan,
    pub billing_cycle: BillingCycle,
}

impl BookingSelection {
    pub fn new(plan: Plan, billing_cycle: BillingCycle) -> Self {
        Self {
            plan,
            billing_cycle,
        }
    }

    /// Price of the selected plan for the selected cycle, in cents.
    pub fn price(&self) -> u32 {
        self.plan.pricing.price(self.billing_cycle)
    }
}

/// Localized copy of one plan.
struct PlanCopy {
    name: &'static str,
    description: &'static str,
    features: &'static [&'static str],
}

struct PlanDefinition {
    id: &'static str,
    pricing: Pricing,
    /// Copy per language code
    copy: [(&'static str, PlanCopy); 3],
}

impl PlanDefinition {
    /// Copy for `language`, or the default language's copy if it has none.
    fn copy_for(&self, language: Language) -> &PlanCopy {
        let find = |code: &str| {
            self.copy
                .iter()
                .find(|(candidate, _)| *candidate == code)
                .map(|(_, copy)| copy)
        };

        find(language.code()).unwrap_or_else(|| {
            warn!("No '{}' copy for plan '{}', using default language", language, self.id);
            find(Language::default_language().code()).unwrap_or(&self.copy[0].1)
        })
    }
}

const PLANS: [PlanDefinition; 3] = [
    PlanDefinition {
        id: "essential",
        pricing: Pricing {
            monthly: 12_000,
            quarterly: 33_000,
            annual: 120_000,
        },
        copy: [
            ("es", PlanCopy {
                name: "Esencial",
                description: "Una sesión semanal para construir el hábito.",
                features: &["4 sesiones al mes", "Plan de entrenamiento", "Seguimiento por email"],
            }),
            ("en", PlanCopy {
                name: "Essential",
                description: "One weekly session to build the habit.",
                features: &["4 sessions per month", "Training plan", "Email follow-up"],
            }),
            ("fr", PlanCopy {
                name: "Essentiel",
                description: "Une séance par semaine pour prendre l'habitude.",
                features: &["4 séances par mois", "Programme d'entraînement", "Suivi par e-mail"],
            }),
        ],
    },
    PlanDefinition {
        id: "performance",
        pricing: Pricing {
            monthly: 20_000,
            quarterly: 55_000,
            annual: 200_000,
        },
        copy: [
            ("es", PlanCopy {
                name: "Rendimiento",
                description: "Dos sesiones semanales y pautas de nutrición.",
                features: &[
                    "8 sesiones al mes",
                    "Plan de entrenamiento",
                    "Pautas de nutrición",
                    "Revisión mensual",
                ],
            }),
            ("en", PlanCopy {
                name: "Performance",
                description: "Two weekly sessions plus nutrition guidance.",
                features: &[
                    "8 sessions per month",
                    "Training plan",
                    "Nutrition guidance",
                    "Monthly review",
                ],
            }),
            ("fr", PlanCopy {
                name: "Performance",
                description: "Deux séances par semaine et des conseils nutritionnels.",
                features: &[
                    "8 séances par mois",
                    "Programme d'entraînement",
                    "Conseils nutritionnels",
                    "Bilan mensuel",
                ],
            }),
        ],
    },
    PlanDefinition {
        id: "premium",
        pricing: Pricing {
            monthly: 32_000,
            quarterly: 90_000,
            annual: 330_000,
        },
        copy: [
            ("es", PlanCopy {
                name: "Premium",
                description: "Acompañamiento completo, sin límites.",
                features: &[
                    "Sesiones ilimitadas",
                    "Plan de nutrición personalizado",
                    "Soporte por chat",
                    "Revisión quincenal",
                ],
            }),
            ("en", PlanCopy {
                name: "Premium",
                description: "Full coaching with no limits.",
                features: &[
                    "Unlimited sessions",
                    "Personalized nutrition plan",
                    "Chat support",
                    "Fortnightly review",
                ],
            }),
            ("fr", PlanCopy {
                name: "Premium",
                description: "Un accompagnement complet, sans limites.",
                features: &[
                    "Séances illimitées",
                    "Plan nutritionnel personnalisé",
                    "Support par chat",
                    "Bilan toutes les deux semaines",
                ],
            }),
        ],
    },
];

/// The plans shown on the pricing page, in one language.
#[derive(Debug, Clone)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
}

impl PlanCatalog {
    pub fn builtin(language: Language) -> Self {
        let plans = PLANS
            .iter()
            .map(|definition| {
                let copy = definition.copy_for(language);
                Plan {
                    id: definition.id.to_string(),
                    name: copy.name.to_string(),
                    description: copy.description.to_string(),
                    pricing: definition.pricing,
                    features: copy.features.iter().map(|f| f.to_string()).collect(),
                }
            })
            .collect();

        Self { plans }
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn find(&self, id: &str) -> Option<&Plan> {
        self.plans.iter().find(|plan| plan.id == id)
    }

    /// Build a selection from the ids the pricing page sends.
    pub fn select(&self, id: &str, billing_cycle: BillingCycle) -> Option<BookingSelection> {
        self.find(id)
            .map(|plan| BookingSelection::new(plan.clone(), billing_cycle))
    }
}
