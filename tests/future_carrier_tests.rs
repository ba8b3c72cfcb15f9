#![cfg(feature = "async")]
//! End-to-end tests for the Future carrier.
//!
//! Covers running the generic program asynchronously, the completion
//! observer, and root-cause reporting of failures.

use std::sync::Arc;

use parking_lot::Mutex;
use rstest::rstest;
use tagless::carrier::FutureCarrier;
use tagless::effect::{AsyncIO, CarrierError, Diagnostics, IoAlgebra, program};
use tagless::typeclass::Monad;

#[rstest]
#[tokio::test]
async fn program_resolves_to_read_value() {
    let carrier = FutureCarrier::new(Diagnostics::captured());
    let result = program(&carrier).run_async().await;
    assert_eq!(result, "read from web service");
}

#[rstest]
#[tokio::test]
async fn program_equals_direct_calculation() {
    let carrier = FutureCarrier::new(Diagnostics::captured());
    let input = carrier.read().run_async().await;
    let direct = carrier.calculate(input).run_async().await;

    assert_eq!(program(&carrier).run_async().await, direct);
}

#[rstest]
#[tokio::test]
async fn nothing_runs_until_awaited() {
    let diagnostics = Diagnostics::captured();
    let carrier = FutureCarrier::new(diagnostics.clone());

    let computation = program(&carrier);
    assert!(diagnostics.is_empty());

    computation.run_async().await;
    assert_eq!(diagnostics.lines(), vec!["future log: read from web service"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn observer_runs_before_completion_handle_resolves() {
    let diagnostics = Diagnostics::captured();
    let carrier = FutureCarrier::new(diagnostics.clone());
    let observed = Arc::new(Mutex::new(None));
    let slot = observed.clone();

    let handle = FutureCarrier::spawn_observed(program(&carrier), move |outcome| {
        *slot.lock() = Some(outcome.map_err(|error| error.to_string()));
    });
    handle.await.expect("observer task joins");

    assert_eq!(
        observed.lock().clone(),
        Some(Ok("read from web service".to_string()))
    );
    assert_eq!(diagnostics.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn steps_stay_ordered_across_workers() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let carrier = FutureCarrier::new(Diagnostics::captured());

    let first = order.clone();
    let second = order.clone();
    let computation = carrier.chain(
        AsyncIO::new(move || async move {
            tokio::task::yield_now().await;
            first.lock().push("first");
            1
        }),
        move |value: i32| {
            AsyncIO::new(move || async move {
                second.lock().push("second");
                value + 1
            })
        },
    );

    assert_eq!(FutureCarrier::complete(computation).await.ok(), Some(2));
    assert_eq!(*order.lock(), vec!["first", "second"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn failure_in_chain_reports_banner_and_root_cause() {
    let carrier = FutureCarrier::new(Diagnostics::captured());
    let failing = carrier.chain(carrier.read(), |_input: String| {
        AsyncIO::<String>::new(|| async { panic!("web service timed out") })
    });
    let reported = Arc::new(Mutex::new(None));
    let slot = reported.clone();

    let handle = FutureCarrier::spawn_observed(failing, move |outcome: Result<String, CarrierError>| {
        if let Err(error) = outcome {
            *slot.lock() = Some((error.to_string(), FutureCarrier::describe_failure(&error)));
        }
    });
    handle.await.expect("observer task joins");

    assert_eq!(
        reported.lock().clone(),
        Some((
            "future carrier failed".to_string(),
            [
                "error: asynchronous program failed".to_string(),
                "task panicked: web service timed out".to_string(),
            ]
        ))
    );
}
