use crate::routing::RouteKey;

/// All localized user-facing strings for a language.
///
/// Every field is mandatory, so a language cannot be registered with a
/// partial catalog: a missing label is a compile error, not a runtime fallback.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Site ====================
    pub site_name: &'static str,

    /// Footer line. Placeholders: {year}
    pub footer_rights: &'static str,

    /// Label in front of the language switcher links
    pub language_switcher_label: &'static str,

    // ==================== Page Titles ====================
    pub title_home: &'static str,
    pub title_about: &'static str,
    pub title_services: &'static str,
    pub title_pricing: &'static str,
    pub title_booking: &'static str,
    pub title_contact: &'static str,
    pub title_privacy: &'static str,
    pub title_terms: &'static str,
    pub title_cookies: &'static str,
    pub title_legal_notice: &'static str,

    // ==================== Navigation ====================
    pub nav_home: &'static str,

    pub not_found_title: &'static str,
    pub not_found_body: &'static str,

    // ==================== Booking ====================
    pub booking_continue: &'static str,
    pub booking_back: &'static str,

    /// Overlay text shown while the scheduling widget loads
    pub widget_loading: &'static str,

    pub billing_monthly: &'static str,
    pub billing_quarterly: &'static str,
    pub billing_annual: &'static str,
    /// Saving against monthly billing; `{amount}` is replaced
    pub billing_saving: &'static str,

    pub experience_beginner: &'static str,
    pub experience_intermediate: &'static str,
    pub experience_advanced: &'static str,

    // ==================== Form Errors ====================
    pub error_name_required: &'static str,
    pub error_name_too_short: &'static str,
    pub error_email_required: &'static str,
    pub error_email_invalid: &'static str,
    pub error_phone_too_short: &'static str,
    pub error_consent_required: &'static str,
}

impl LanguageStrings {
    /// Page title for a route.
    pub fn page_title(&self, key: RouteKey) -> &'static str {
        match key {
            RouteKey::Home => self.title_home,
            RouteKey::About => self.title_about,
            RouteKey::Services => self.title_services,
            RouteKey::Pricing => self.title_pricing,
            RouteKey::Booking => self.title_booking,
            RouteKey::Contact => self.title_contact,
            RouteKey::Privacy => self.title_privacy,
            RouteKey::Terms => self.title_terms,
            RouteKey::Cookies => self.title_cookies,
            RouteKey::LegalNotice => self.title_legal_notice,
        }
    }

    /// Label used for a route in navigation menus.
    pub fn nav_label(&self, key: RouteKey) -> &'static str {
        match key {
            RouteKey::Home => self.nav_home,
            other => self.page_title(other),
        }
    }
}

// ==================== Spanish Strings ====================

pub const SPANISH_STRINGS: LanguageStrings = LanguageStrings {
    site_name: "Entrenamiento Personal",
    footer_rights: "© {year} Entrenamiento Personal. Todos los derechos reservados.",
    language_switcher_label: "Idioma",

    title_home: "Entrenamiento personal a tu medida",
    title_about: "Sobre mí",
    title_services: "Servicios",
    title_pricing: "Tarifas",
    title_booking: "Reserva tu sesión",
    title_contact: "Contacto",
    title_privacy: "Política de privacidad",
    title_terms: "Términos y condiciones",
    title_cookies: "Política de cookies",
    title_legal_notice: "Aviso legal",

    nav_home: "Inicio",

    not_found_title: "Página no encontrada",
    not_found_body: "La página que buscas no existe o ha cambiado de dirección.",

    booking_continue: "Continuar",
    booking_back: "Volver",
    widget_loading: "Cargando el calendario…",

    billing_monthly: "Mensual",
    billing_quarterly: "Trimestral",
    billing_annual: "Anual",
    billing_saving: "Ahorras {amount}",

    experience_beginner: "Principiante",
    experience_intermediate: "Intermedio",
    experience_advanced: "Avanzado",

    error_name_required: "El nombre es obligatorio",
    error_name_too_short: "El nombre debe tener al menos 2 caracteres",
    error_email_required: "El email es obligatorio",
    error_email_invalid: "Introduce un email válido",
    error_phone_too_short: "El teléfono debe tener al menos 9 caracteres",
    error_consent_required: "Debes aceptar la política de privacidad",
};

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    site_name: "Personal Training",
    footer_rights: "© {year} Personal Training. All rights reserved.",
    language_switcher_label: "Language",

    title_home: "Personal training that fits you",
    title_about: "About me",
    title_services: "Services",
    title_pricing: "Pricing",
    title_booking: "Book your session",
    title_contact: "Contact",
    title_privacy: "Privacy policy",
    title_terms: "Terms and conditions",
    title_cookies: "Cookie policy",
    title_legal_notice: "Legal notice",

    nav_home: "Home",

    not_found_title: "Page not found",
    not_found_body: "The page you are looking for does not exist or has moved.",

    booking_continue: "Continue",
    booking_back: "Back",
    widget_loading: "Loading the calendar…",

    billing_monthly: "Monthly",
    billing_quarterly: "Quarterly",
    billing_annual: "Annual",
    billing_saving: "Save {amount}",

    experience_beginner: "Beginner",
    experience_intermediate: "Intermediate",
    experience_advanced: "Advanced",

    error_name_required: "Name is required",
    error_name_too_short: "Name must be at least 2 characters",
    error_email_required: "Email is required",
    error_email_invalid: "Enter a valid email address",
    error_phone_too_short: "Phone number must be at least 9 characters",
    error_consent_required: "You must accept the privacy policy",
};

// ==================== French Strings ====================

pub const FRENCH_STRINGS: LanguageStrings = LanguageStrings {
    site_name: "Coaching Personnel",
    footer_rights: "© {year} Coaching Personnel. Tous droits réservés.",
    language_switcher_label: "Langue",

    title_home: "Un coaching personnel sur mesure",
    title_about: "À propos",
    title_services: "Services",
    title_pricing: "Tarifs",
    title_booking: "Réservez votre séance",
    title_contact: "Contact",
    title_privacy: "Politique de confidentialité",
    title_terms: "Conditions générales",
    title_cookies: "Politique relative aux cookies",
    title_legal_notice: "Mentions légales",

    nav_home: "Accueil",

    not_found_title: "Page introuvable",
    not_found_body: "La page que vous cherchez n'existe pas ou a été déplacée.",

    booking_continue: "Continuer",
    booking_back: "Retour",
    widget_loading: "Chargement du calendrier…",

    billing_monthly: "Mensuel",
    billing_quarterly: "Trimestriel",
    billing_annual: "Annuel",
    billing_saving: "Économisez {amount}",

    experience_beginner: "Débutant",
    experience_intermediate: "Intermédiaire",
    experience_advanced: "Avancé",

    error_name_required: "Le nom est obligatoire",
    error_name_too_short: "Le nom doit comporter au moins 2 caractères",
    error_email_required: "L'e-mail est obligatoire",
    error_email_invalid: "Saisissez une adresse e-mail valide",
    error_phone_too_short: "Le téléphone doit comporter au moins 9 caractères",
    error_consent_required: "Vous devez accepter la politique de confidentialité",
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [&LanguageStrings; 3] = [&SPANISH_STRINGS, &ENGLISH_STRINGS, &FRENCH_STRINGS];

    #[test]
    fn test_templates_have_placeholders() {
        for strings in ALL {
            assert!(strings.footer_rights.contains("{year}"));
            assert!(strings.billing_saving.contains("{amount}"));
        }
    }

    #[test]
    fn test_every_page_has_a_title() {
        for strings in ALL {
            for key in RouteKey::ALL {
                assert!(
                    !strings.page_title(key).is_empty(),
                    "missing title for {:?} in {}",
                    key,
                    strings.site_name
                );
            }
        }
    }

    #[test]
    fn test_nav_label_home_differs_from_title() {
        assert_eq!(ENGLISH_STRINGS.nav_label(RouteKey::Home), "Home");
        assert_eq!(ENGLISH_STRINGS.nav_label(RouteKey::Pricing), "Pricing");
    }

    #[test]
    fn test_error_messages_not_empty() {
        for strings in ALL {
            assert!(!strings.error_name_required.is_empty());
            assert!(!strings.error_email_invalid.is_empty());
            assert!(!strings.error_phone_too_short.is_empty());
            assert!(!strings.error_consent_required.is_empty());
        }
    }

    #[test]
    fn test_spanish_booking_labels() {
        assert_eq!(SPANISH_STRINGS.booking_back, "Volver");
        assert_eq!(SPANISH_STRINGS.billing_quarterly, "Trimestral");
    }
}
