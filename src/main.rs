//! Demonstration entry point.
//!
//! Runs the effect-generic program against every configured carrier, then
//! prints the relative dates. Carrier diagnostics and results go to stdout;
//! logs and asynchronous failures go to stderr.

use tagless::carrier::{FutureCarrier, IdentityCarrier, OptionCarrier};
use tagless::config::{CarrierKind, DemoConfig};
use tagless::dsl::{SystemClock, days, short_date};
use tagless::effect::{Diagnostics, program_traced};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,tagless=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match DemoConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load configuration from environment: {e}");
            tracing::info!("Using default configuration");
            DemoConfig::default()
        }
    };

    let diagnostics = Diagnostics::stdout();
    for kind in &config.carriers {
        match kind {
            CarrierKind::Option => run_option(&diagnostics),
            CarrierKind::Future => run_future(&diagnostics).await,
            CarrierKind::Identity => run_identity(&diagnostics),
        }
    }

    if !config.skip_dates {
        run_dates(config.date_offset);
    }
}

fn run_option(diagnostics: &Diagnostics) {
    let carrier = OptionCarrier::new(diagnostics.clone());
    match program_traced(OptionCarrier::LABEL, &carrier) {
        Some(result) => println!("{} result: {result}", OptionCarrier::LABEL),
        None => println!("{} result: absent", OptionCarrier::LABEL),
    }
}

async fn run_future(diagnostics: &Diagnostics) {
    let carrier = FutureCarrier::new(diagnostics.clone());
    let computation = program_traced(FutureCarrier::LABEL, &carrier);

    let completion = FutureCarrier::spawn_observed(computation, |outcome| match outcome {
        Ok(result) => println!("{} result: {result}", FutureCarrier::LABEL),
        Err(error) => {
            for line in FutureCarrier::describe_failure(&error) {
                eprintln!("{line}");
            }
        }
    });

    if let Err(error) = completion.await {
        tracing::error!(%error, "completion observer did not finish");
    }
}

fn run_identity(diagnostics: &Diagnostics) {
    let carrier = IdentityCarrier::new(diagnostics.clone());
    let result = program_traced(IdentityCarrier::LABEL, &carrier);
    println!("{} result: {}", IdentityCarrier::LABEL, result.into_inner());
}

fn run_dates(offset: i64) {
    let count = days(offset);
    match (count.ago_on(&SystemClock), count.from_now_on(&SystemClock)) {
        (Ok(past), Ok(future)) => {
            println!("{offset} days ago: {}", short_date(past));
            println!("{offset} days from now: {}", short_date(future));
        }
        (Err(error), _) | (_, Err(error)) => {
            tracing::error!(%error, "cannot compute relative dates");
        }
    }
}
