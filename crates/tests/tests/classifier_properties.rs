use std::f64::consts::FRAC_PI_2;

use resultview_core::{
    classify, classify_traced, Complex, ConvergencePoint, Payload, RenderIntent,
    RenderIntentKind, ScalarOrigin,
};
use serde_json::{json, Value};

const TOLERANCE: f64 = 1e-9;

fn payload(value: Value) -> Payload {
    value.as_object().cloned().expect("test payload is a record")
}

#[test]
fn garbage_payloads_always_classify() {
    let cases = [
        json!({}),
        json!({ "a": null, "b": [null, []], "c": [[[]]] }),
        json!({ "samples": null, "phasor": [], "solution": 3, "table": {} }),
        json!({ "roots": [{}], "iterations": [{ "iteration": "1" }], "x": "abc" }),
        json!({ "deep": { "deeper": { "deepest": [1, { "k": [true] }] } } }),
        json!({ "coefficients": [], "t": [1, 2], "y": [1] }),
    ];

    for case in cases {
        let intent = classify(&payload(case));
        assert!(RenderIntentKind::ALL.contains(&intent.kind()));
    }
}

#[test]
fn phasor_precedes_scalars_in_any_key_order() {
    let first = payload(json!({
        "phasor": { "magnitude": 2, "angle": FRAC_PI_2 },
        "frequency_hz": 50,
    }));
    let second = payload(json!({
        "frequency_hz": 50,
        "phasor": { "magnitude": 2, "angle": FRAC_PI_2 },
    }));

    for candidate in [first, second] {
        let RenderIntent::Phasor(phasor) = classify(&candidate) else {
            panic!("expected phasor");
        };
        assert_eq!(phasor.magnitude, 2.0);
        assert!((phasor.angle_deg - 90.0).abs() < TOLERANCE);
    }
}

#[test]
fn classification_is_idempotent() {
    let p = payload(json!({
        "table": [{ "a": 1, "b": "x" }, { "a": 2 }],
        "notes": ["ok"],
    }));
    assert_eq!(classify(&p), classify(&p));
}

#[test]
fn polar_complex_converts_to_rectangular() {
    let RenderIntent::ComplexPlane(plane) = classify(&payload(json!({ "modulus": 2, "argument": 0 })))
    else {
        panic!("expected complex plane");
    };
    assert_eq!(plane.points, vec![Complex { real: 2.0, imag: 0.0 }]);

    let RenderIntent::ComplexPlane(plane) =
        classify(&payload(json!({ "modulus": 1, "argument": FRAC_PI_2 })))
    else {
        panic!("expected complex plane");
    };
    assert!((plane.points[0].modulus() - 1.0).abs() < TOLERANCE);
    assert!(plane.points[0].real.abs() < TOLERANCE);
    assert!((plane.points[0].imag - 1.0).abs() < TOLERANCE);
}

#[test]
fn scalar_map_excludes_topic_and_keeps_order() {
    let RenderIntent::ScalarMap(map) = classify(&payload(json!({
        "topic": "rlc",
        "resistance": 10,
        "reactance": 5
    }))) else {
        panic!("expected scalar map");
    };

    assert_eq!(map.origin, ScalarOrigin::TopLevel);
    let names = map
        .entries
        .iter()
        .map(|entry| (entry.name.as_str(), entry.value))
        .collect::<Vec<_>>();
    assert_eq!(names, vec![("resistance", 10.0), ("reactance", 5.0)]);
}

#[test]
fn table_headers_follow_first_row() {
    let RenderIntent::Table(table) =
        classify(&payload(json!({ "table": [{ "a": 1, "b": 2 }, { "a": 3, "b": 4 }] })))
    else {
        panic!("expected table");
    };

    assert_eq!(table.headers, vec!["a", "b"]);
    assert_eq!(
        table.rows,
        vec![
            vec![Some(json!(1)), Some(json!(2))],
            vec![Some(json!(3)), Some(json!(4))],
        ]
    );
}

#[test]
fn raw_iterations_are_numbered_from_one() {
    let RenderIntent::ConvergenceTrace(trace) = classify(&payload(json!({ "iterations": [5, 2, 0.1] })))
    else {
        panic!("expected convergence trace");
    };

    assert_eq!(
        trace.points,
        vec![
            ConvergencePoint { iteration: 1.0, value: 5.0 },
            ConvergencePoint { iteration: 2.0, value: 2.0 },
            ConvergencePoint { iteration: 3.0, value: 0.1 },
        ]
    );
}

#[test]
fn booleans_and_strings_fall_back_to_unclassified() {
    let (intent, rule) = classify_traced(&payload(json!({ "foo": "bar", "nested": true })));
    assert!(intent.is_unclassified());
    assert_eq!(rule, None);
}

#[test]
fn synthesised_fit_matches_explicit_fit() {
    let RenderIntent::CurveFit(synthesised) = classify(&payload(json!({
        "x": [0, 1, 2], "y": [1, 3, 5], "coefficients": [1, 2]
    }))) else {
        panic!("expected curve fit");
    };
    assert_eq!(synthesised.y_fit, vec![1.0, 3.0, 5.0]);

    let RenderIntent::CurveFit(explicit) = classify(&payload(json!({
        "x": [0, 1, 2], "y": [1, 3, 5], "y_fit": [1, 3, 5], "coefficients": [1, 2]
    }))) else {
        panic!("expected curve fit");
    };
    assert_eq!(explicit.y_fit, synthesised.y_fit);
}

#[test]
fn time_series_outranks_everything() {
    let (intent, rule) = classify_traced(&payload(json!({
        "gain": 3,
        "phasor": { "magnitude": 1, "angle": 0 },
        "samples": { "time": [0, 1], "values": [2, 4] }
    })));
    assert_eq!(rule, Some("time_series"));
    assert_eq!(intent.kind(), RenderIntentKind::LineSeries);
}

#[test]
fn solution_record_precedes_top_level_scalars() {
    let RenderIntent::ScalarMap(map) = classify(&payload(json!({
        "elapsed_ms": 12,
        "solution": { "x1": 1.5, "x2": -0.5 }
    }))) else {
        panic!("expected scalar map");
    };
    assert_eq!(map.origin, ScalarOrigin::Solution);
    assert!(map.is_fully_numeric());
    assert_eq!(map.get("elapsed_ms"), None);
}

#[test]
fn ode_trajectory_and_polynomial_shapes() {
    let intent = classify(&payload(json!({ "t": [0, 0.5, 1], "y": [1, 0.6, 0.37] })));
    assert_eq!(intent.kind(), RenderIntentKind::OdeTrajectory);

    let RenderIntent::Polynomial(poly) = classify(&payload(json!({ "coefficients": [1, 0, 1], "about": 2 })))
    else {
        panic!("expected polynomial");
    };
    assert_eq!(poly.evaluate(3.0), 2.0);
    assert_eq!(poly.expression(), "1 + 1(x - 2)^2");
}

#[test]
fn nested_records_become_free_text() {
    let RenderIntent::FreeText(text) = classify(&payload(json!({
        "topic": "report",
        "warnings": ["step size reduced"],
        "settings": { "solver": "newton", "limits": { "max_iter": 50 } }
    }))) else {
        panic!("expected free text");
    };

    assert_eq!(text.blocks.len(), 2);
    assert_eq!(text.blocks[0].lines, vec!["step size reduced"]);
    assert_eq!(
        text.blocks[1].lines,
        vec!["solver: newton", "limits:", "  max_iter: 50"]
    );
}
