use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use resultview_core::RenderIntentKind;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

const KIND_COUNT: usize = RenderIntentKind::ALL.len();

#[derive(Debug, Default)]
pub struct ClassifierMetrics {
    messages_total: AtomicU64,
    malformed_total: AtomicU64,
    unclassified_total: AtomicU64,
    by_kind: [AtomicU64; KIND_COUNT],
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub messages_total: u64,
    pub malformed_total: u64,
    pub unclassified_total: u64,
    pub by_kind: Vec<(RenderIntentKind, u64)>,
}

impl MetricsSnapshot {
    pub fn count(&self, kind: RenderIntentKind) -> u64 {
        self.by_kind
            .iter()
            .find(|(candidate, _)| *candidate == kind)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

impl ClassifierMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_message(&self) {
        self.messages_total.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("resultview_messages_total").increment(1);
    }

    pub fn inc_malformed(&self) {
        self.malformed_total.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("resultview_malformed_envelopes_total").increment(1);
    }

    pub fn observe_intent(&self, kind: RenderIntentKind) {
        if kind == RenderIntentKind::Unclassified {
            self.unclassified_total.fetch_add(1, Ordering::Relaxed);
        }
        self.by_kind[kind_index(kind)].fetch_add(1, Ordering::Relaxed);
        metrics::counter!("resultview_intents_total", "kind" => kind.as_str()).increment(1);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            messages_total: self.messages_total.load(Ordering::Relaxed),
            malformed_total: self.malformed_total.load(Ordering::Relaxed),
            unclassified_total: self.unclassified_total.load(Ordering::Relaxed),
            by_kind: RenderIntentKind::ALL
                .iter()
                .map(|kind| (*kind, self.by_kind[kind_index(*kind)].load(Ordering::Relaxed)))
                .collect(),
        }
    }
}

fn kind_index(kind: RenderIntentKind) -> usize {
    RenderIntentKind::ALL
        .iter()
        .position(|candidate| *candidate == kind)
        .unwrap_or(KIND_COUNT - 1)
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}=info,resultview_viewer=info,resultview_core=warn",
                service_name
            ))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .init();
    });
}
