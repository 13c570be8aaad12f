use tracing::debug;

use crate::extract;
use crate::models::{RenderIntent, RenderIntentKind};
use crate::payload::Payload;

/// One entry of the precedence table.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub kind: RenderIntentKind,
    pub extract: fn(&Payload) -> Option<RenderIntent>,
}

/// Extractors in precedence order. The first match wins.
pub static RULES: &[Rule] = &[
    Rule {
        name: "time_series",
        kind: RenderIntentKind::LineSeries,
        extract: extract::time_series,
    },
    Rule {
        name: "phasor",
        kind: RenderIntentKind::Phasor,
        extract: extract::phasor,
    },
    Rule {
        name: "solution_map",
        kind: RenderIntentKind::ScalarMap,
        extract: extract::solution_map,
    },
    Rule {
        name: "scalar_map",
        kind: RenderIntentKind::ScalarMap,
        extract: extract::scalar_map,
    },
    Rule {
        name: "indexed_array",
        kind: RenderIntentKind::IndexedSeries,
        extract: extract::indexed_array,
    },
    Rule {
        name: "table",
        kind: RenderIntentKind::Table,
        extract: extract::table,
    },
    Rule {
        name: "matrix",
        kind: RenderIntentKind::Matrix,
        extract: extract::matrix,
    },
    Rule {
        name: "complex",
        kind: RenderIntentKind::ComplexPlane,
        extract: extract::complex,
    },
    Rule {
        name: "polynomial",
        kind: RenderIntentKind::Polynomial,
        extract: extract::polynomial,
    },
    Rule {
        name: "convergence",
        kind: RenderIntentKind::ConvergenceTrace,
        extract: extract::convergence,
    },
    Rule {
        name: "trajectory",
        kind: RenderIntentKind::OdeTrajectory,
        extract: extract::trajectory,
    },
    Rule {
        name: "curve_fit",
        kind: RenderIntentKind::CurveFit,
        extract: extract::curve_fit,
    },
    Rule {
        name: "text_blocks",
        kind: RenderIntentKind::FreeText,
        extract: extract::text_blocks,
    },
];

pub fn classify(payload: &Payload) -> RenderIntent {
    classify_traced(payload).0
}

/// Like [`classify`], also naming the rule that matched.
pub fn classify_traced(payload: &Payload) -> (RenderIntent, Option<&'static str>) {
    for rule in RULES {
        if let Some(intent) = (rule.extract)(payload) {
            debug!(rule = rule.name, kind = rule.kind.as_str(), "payload classified");
            return (intent, Some(rule.name));
        }
    }

    debug!(keys = payload.len(), "no rule matched payload");
    (RenderIntent::Unclassified, None)
}
