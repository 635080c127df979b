//! Validate a route table and print every localized route.
//!
//! Usage: `check-routes [FILE]`. Without a file the built-in table is checked.
//! Exits non-zero when the table has errors.

use anyhow::{bail, Result};
use coach_site::i18n::{Language, RouteTableValidator};
use coach_site::routing::{Resolver, RouteKey, RouteTable};
use tracing::{info, warn};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("check_routes=info".parse()?)
                .add_directive("coach_site=warn".parse()?),
        )
        .init();

    let table = match std::env::args().nth(1) {
        Some(path) => {
            info!("Checking route table {}", path);
            RouteTable::load(&path)?
        }
        None => {
            info!("Checking built-in route table");
            RouteTable::builtin()
        }
    };

    let report = RouteTableValidator::validate(&table);
    for warning in &report.warnings {
        warn!("{}", warning);
    }

    if report.has_errors() {
        for error in &report.errors {
            eprintln!("✗ {}", error);
        }
        bail!("Route table has {} error(s)", report.errors.len());
    }

    let resolver = Resolver::lenient(table);
    for key in RouteKey::ALL {
        let routes: Vec<String> = Language::all()
            .into_iter()
            .map(|language| resolver.resolve_route(key, language))
            .collect();
        println!("{:<14} {}", key, routes.join("  "));
    }

    println!("✓ {} routes in {} languages", RouteKey::ALL.len(), Language::all().len());
    Ok(())
}
