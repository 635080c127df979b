//! Server-rendered page shells and the sitemap.
//!
//! Pages carry the localized chrome (title, navigation, language switcher,
//! `hreflang` alternates, footer). Section content is filled in client-side.

use crate::booking::{BillingCycle, PlanCatalog};
use crate::i18n::Language;
use crate::routing::{Resolver, RouteKey};
use crate::util::encode_path;
use std::fmt::Write;

/// Values that change per deployment or per request rather than per page.
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    pub site_url: &'a str,
    pub year: i32,
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format euro cents as e.g. `1.200,00 €` / `€1,200.00` depending on language.
pub fn format_price(cents: u32, language: Language) -> String {
    let euros = cents / 100;
    let rest = cents % 100;

    let (thousands, decimal) = match language.code() {
        "en" => (',', '.'),
        "fr" => ('\u{202f}', ','),
        _ => ('.', ','),
    };

    let digits = euros.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(thousands);
        }
        grouped.push(c);
    }

    match language.code() {
        "en" => format!("€{grouped}{decimal}{rest:02}"),
        _ => format!("{grouped}{decimal}{rest:02} €"),
    }
}

/// Render a recognized page.
pub fn render_page(
    resolver: &Resolver,
    ctx: &PageContext<'_>,
    language: Language,
    key: RouteKey,
) -> String {
    let strings = language.strings();
    let current = resolver.resolve_route(key, language);
    let title = strings.page_title(key);

    let mut head = String::new();
    let _ = writeln!(
        head,
        r#"<link rel="canonical" href="{}{}">"#,
        ctx.site_url,
        escape_html(&current)
    );
    for (alternate, route) in resolver.alternates(key) {
        let _ = writeln!(
            head,
            r#"<link rel="alternate" hreflang="{}" href="{}{}">"#,
            alternate,
            ctx.site_url,
            escape_html(&route)
        );
    }
    let _ = writeln!(
        head,
        r#"<link rel="alternate" hreflang="x-default" href="{}{}">"#,
        ctx.site_url,
        escape_html(&resolver.resolve_route(key, Language::default_language()))
    );

    let body = match key {
        RouteKey::Pricing => render_plans(resolver, language),
        RouteKey::Booking => {
            let pricing = escape_html(&resolver.resolve_route(RouteKey::Pricing, language));
            format!(
                r#"<a class="back" href="{}">{}</a><div id="booking" data-step="details_entry" data-back="{}" data-loading="{}"></div>"#,
                pricing,
                escape_html(strings.booking_back),
                pricing,
                escape_html(strings.widget_loading)
            )
        }
        _ => String::new(),
    };

    layout(resolver, ctx, language, Some(key), title, &head, &body)
}

/// Render the not-found page for a pathname under a valid language prefix.
pub fn render_not_found(
    resolver: &Resolver,
    ctx: &PageContext<'_>,
    language: Language,
    pathname: &str,
) -> String {
    let strings = language.strings();
    let body = format!(
        r#"<p>{}</p><p><code>{}</code></p>"#,
        escape_html(strings.not_found_body),
        escape_html(pathname)
    );
    layout(
        resolver,
        ctx,
        language,
        None,
        strings.not_found_title,
        r#"<meta name="robots" content="noindex">"#,
        &body,
    )
}

fn render_plans(resolver: &Resolver, language: Language) -> String {
    let strings = language.strings();
    let booking = resolver.resolve_route(RouteKey::Booking, language);
    let mut out = String::from(r#"<section class="plans">"#);

    for plan in PlanCatalog::builtin(language).plans() {
        let _ = write!(
            out,
            r#"<article class="plan" data-plan-id="{}"><h2>{}</h2><p>{}</p><ul>"#,
            escape_html(&plan.id),
            escape_html(&plan.name),
            escape_html(&plan.description)
        );
        for feature in &plan.features {
            let _ = write!(out, "<li>{}</li>", escape_html(feature));
        }
        out.push_str("</ul><dl>");
        for cycle in BillingCycle::ALL {
            let _ = write!(
                out,
                r#"<dt>{}</dt><dd data-cycle="{}">{}</dd>"#,
                escape_html(cycle.label(strings)),
                cycle.as_str(),
                escape_html(&format_price(plan.pricing.price(cycle), language))
            );
            let saving = plan.pricing.saving(cycle);
            if saving > 0 {
                let _ = write!(
                    out,
                    r#"<dd class="saving" data-cycle="{}">{}</dd>"#,
                    cycle.as_str(),
                    escape_html(
                        &strings
                            .billing_saving
                            .replace("{amount}", &format_price(saving, language))
                    )
                );
            }
        }
        let _ = write!(
            out,
            r#"</dl><a class="book" href="{}" data-plan-id="{}">{}</a></article>"#,
            escape_html(&booking),
            escape_html(&plan.id),
            escape_html(strings.booking_continue)
        );
    }

    out.push_str("</section>");
    out
}

fn layout(
    resolver: &Resolver,
    ctx: &PageContext<'_>,
    language: Language,
    current: Option<RouteKey>,
    title: &str,
    head: &str,
    body: &str,
) -> String {
    let strings = language.strings();

    let mut nav = String::from("<nav><ul>");
    for key in RouteKey::main_navigation() {
        let _ = write!(
            nav,
            r#"<li><a href="{}">{}</a></li>"#,
            escape_html(&resolver.resolve_route(key, language)),
            escape_html(strings.nav_label(key))
        );
    }
    nav.push_str("</ul></nav>");

    let mut switcher = format!(
        r#"<div class="language-switcher" aria-label="{}">"#,
        escape_html(strings.language_switcher_label)
    );
    // Same page in each language; unknown pages switch to the home page.
    for target in Language::all() {
        let href = resolver.resolve_route(current.unwrap_or(RouteKey::Home), target);
        let _ = write!(
            switcher,
            r#"<a href="{}" hreflang="{}" lang="{}"{}>{}</a>"#,
            escape_html(&href),
            target,
            target,
            if target == language { r#" aria-current="true""# } else { "" },
            escape_html(target.native_name())
        );
    }
    switcher.push_str("</div>");

    let mut footer = String::from("<footer><ul>");
    for key in RouteKey::legal_pages() {
        let _ = write!(
            footer,
            r#"<li><a href="{}">{}</a></li>"#,
            escape_html(&resolver.resolve_route(key, language)),
            escape_html(strings.page_title(key))
        );
    }
    let _ = write!(
        footer,
        "</ul><p>{}</p></footer>",
        escape_html(&strings.footer_rights.replace("{year}", &ctx.year.to_string()))
    );

    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} | {site}</title>\n{head}</head>\n<body>\n<header>{nav}{switcher}</header>\n\
         <main><h1>{title}</h1>{body}</main>\n{footer}\n</body>\n</html>\n",
        lang = language,
        title = escape_html(title),
        site = escape_html(strings.site_name),
        head = head,
        nav = nav,
        switcher = switcher,
        body = body,
        footer = footer,
    )
}

/// `sitemap.xml` listing every route in every language with its alternates.
pub fn render_sitemap(resolver: &Resolver, site_url: &str) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
         xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    for key in RouteKey::ALL {
        let alternates = resolver.alternates(key);
        for (_, route) in &alternates {
            let _ = writeln!(
                out,
                "  <url>\n    <loc>{}{}</loc>",
                site_url,
                escape_html(&encode_path(route))
            );
            for (language, alternate) in &alternates {
                let _ = writeln!(
                    out,
                    r#"    <xhtml:link rel="alternate" hreflang="{}" href="{}{}"/>"#,
                    language,
                    site_url,
                    escape_html(&encode_path(alternate))
                );
            }
            out.push_str("  </url>\n");
        }
    }

    out.push_str("</urlset>\n");
    out
}
