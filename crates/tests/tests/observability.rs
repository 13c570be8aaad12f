use resultview_core::RenderIntentKind;
use resultview_observability::{init_tracing, ClassifierMetrics};

#[test]
fn tracing_init_runs_once_per_process() {
    init_tracing("resultview_tests");
    init_tracing("resultview_tests");

    tracing::info!(kind = RenderIntentKind::Table.as_str(), "tracing installed");
    let metrics = ClassifierMetrics::shared();
    metrics.observe_intent(RenderIntentKind::Table);
    assert_eq!(metrics.snapshot().count(RenderIntentKind::Table), 1);
}
