//! Structural extractors. Each one inspects a payload and either returns a
//! complete intent or `None`; none of them mutate the payload or fail.

use serde_json::{Map, Value};

use crate::models::{
    Complex, ComplexPlane, ConvergencePoint, ConvergenceTrace, CurveFit, IndexedSeries,
    LineSeries, Matrix, Phasor, Polynomial, RenderIntent, ScalarEntry, ScalarMap, ScalarOrigin,
    Table, TextBlock, TextBlocks, Trajectory,
};
use crate::payload::{
    is_reserved, number, number_at, numeric_array, numeric_array_at, record_to_text,
    string_array, Payload, INDEXED_ARRAY_KEYS,
};

pub fn time_series(payload: &Payload) -> Option<RenderIntent> {
    let samples = payload.get("samples")?.as_object()?;
    let mut x = numeric_array_at(samples, "time")?;
    let mut y = numeric_array_at(samples, "values")?;

    let len = x.len().min(y.len());
    x.truncate(len);
    y.truncate(len);

    Some(RenderIntent::LineSeries(LineSeries { x, y }))
}

pub fn phasor(payload: &Payload) -> Option<RenderIntent> {
    let phasor = payload.get("phasor")?.as_object()?;
    let magnitude = number_at(phasor, "magnitude")?;
    let angle = number_at(phasor, "angle")?;

    Some(RenderIntent::Phasor(Phasor::from_radians(magnitude, angle)))
}

pub fn solution_map(payload: &Payload) -> Option<RenderIntent> {
    let solution = payload.get("solution")?.as_object()?;
    if solution.is_empty() {
        return None;
    }

    let mut entries = Vec::new();
    let mut passthrough = Vec::new();
    for (name, value) in solution {
        match number(value) {
            Some(value) => entries.push(ScalarEntry {
                name: name.clone(),
                value,
            }),
            None => passthrough.push((name.clone(), value.clone())),
        }
    }

    Some(RenderIntent::ScalarMap(ScalarMap {
        origin: ScalarOrigin::Solution,
        entries,
        passthrough,
    }))
}

pub fn scalar_map(payload: &Payload) -> Option<RenderIntent> {
    let entries = payload
        .iter()
        .filter(|(key, _)| !is_reserved(key))
        .filter_map(|(key, value)| {
            number(value).map(|value| ScalarEntry {
                name: key.clone(),
                value,
            })
        })
        .collect::<Vec<_>>();

    if entries.is_empty() {
        return None;
    }

    Some(RenderIntent::ScalarMap(ScalarMap {
        origin: ScalarOrigin::TopLevel,
        entries,
        passthrough: Vec::new(),
    }))
}

pub fn indexed_array(payload: &Payload) -> Option<RenderIntent> {
    INDEXED_ARRAY_KEYS.iter().find_map(|key| {
        let values = payload.get(*key)?.as_array()?;
        if values.is_empty() {
            return None;
        }
        Some(RenderIntent::IndexedSeries(IndexedSeries {
            key: (*key).to_string(),
            values: values.clone(),
        }))
    })
}

pub fn table(payload: &Payload) -> Option<RenderIntent> {
    let rows = payload.get("table")?.as_array()?;
    let records = rows
        .iter()
        .map(Value::as_object)
        .collect::<Option<Vec<_>>>()?;
    let headers = records.first()?.keys().cloned().collect::<Vec<_>>();
    if headers.is_empty() {
        return None;
    }

    let rows = records
        .iter()
        .map(|record| {
            headers
                .iter()
                .map(|header| record.get(header).cloned())
                .collect::<Vec<_>>()
        })
        .collect();

    Some(RenderIntent::Table(Table { headers, rows }))
}

pub fn matrix(payload: &Payload) -> Option<RenderIntent> {
    payload
        .iter()
        .filter(|(key, _)| !is_reserved(key))
        .find_map(|(key, value)| {
            let rows = value.as_array()?;
            if rows.is_empty() {
                return None;
            }
            let rows = rows
                .iter()
                .map(numeric_array)
                .collect::<Option<Vec<_>>>()?;
            Some(RenderIntent::Matrix(Matrix {
                key: key.clone(),
                rows,
            }))
        })
}

pub fn complex(payload: &Payload) -> Option<RenderIntent> {
    let points = match payload.get("roots").and_then(roots) {
        Some(points) => points,
        None => vec![complex_point(payload)?],
    };

    Some(RenderIntent::ComplexPlane(ComplexPlane { points }))
}

fn roots(value: &Value) -> Option<Vec<Complex>> {
    let items = value.as_array()?;
    if items.is_empty() {
        return None;
    }
    items
        .iter()
        .map(|item| item.as_object().and_then(complex_point))
        .collect()
}

fn complex_point(record: &Map<String, Value>) -> Option<Complex> {
    if let (Some(real), Some(imag)) = (number_at(record, "real"), number_at(record, "imag")) {
        return Some(Complex { real, imag });
    }

    let modulus = number_at(record, "modulus")?;
    let argument = number_at(record, "argument")?;
    Some(Complex::from_polar(modulus, argument))
}

pub fn polynomial(payload: &Payload) -> Option<RenderIntent> {
    if sample_pair(payload).is_some() {
        return None;
    }

    Some(RenderIntent::Polynomial(polynomial_at(payload)?))
}

fn polynomial_at(payload: &Payload) -> Option<Polynomial> {
    let coefficients = numeric_array_at(payload, "coefficients")?;
    let about = number_at(payload, "about").unwrap_or(0.0);
    Some(Polynomial::new(coefficients, about))
}

pub fn convergence(payload: &Payload) -> Option<RenderIntent> {
    let iterations = payload.get("iterations")?;

    let points: Vec<ConvergencePoint> = match numeric_array(iterations) {
        Some(values) => values
            .into_iter()
            .enumerate()
            .map(|(index, value)| ConvergencePoint {
                iteration: (index + 1) as f64,
                value,
            })
            .collect(),
        None => {
            let items = iterations.as_array()?;
            if items.is_empty() {
                return None;
            }
            items
                .iter()
                .map(|item| {
                    let record = item.as_object()?;
                    Some(ConvergencePoint {
                        iteration: number_at(record, "iteration")?,
                        value: number_at(record, "value")?,
                    })
                })
                .collect::<Option<Vec<_>>>()?
        }
    };

    Some(RenderIntent::ConvergenceTrace(ConvergenceTrace { points }))
}

pub fn trajectory(payload: &Payload) -> Option<RenderIntent> {
    let t = numeric_array_at(payload, "t")?;
    let y = numeric_array_at(payload, "y")?;
    if t.len() != y.len() {
        return None;
    }

    Some(RenderIntent::OdeTrajectory(Trajectory { t, y }))
}

pub fn curve_fit(payload: &Payload) -> Option<RenderIntent> {
    let (x, y) = sample_pair(payload)?;

    let explicit = numeric_array_at(payload, "y_fit").filter(|fit| fit.len() == x.len());
    let (y_fit, coefficients) = match explicit {
        Some(fit) => (fit, None),
        None => {
            let poly = polynomial_at(payload)?;
            let fit = x.iter().map(|value| poly.evaluate(*value)).collect();
            (fit, Some(poly.coefficients))
        }
    };

    Some(RenderIntent::CurveFit(CurveFit {
        x,
        y,
        y_fit,
        coefficients,
    }))
}

/// Equal-length numeric `x` and `y` arrays.
fn sample_pair(payload: &Payload) -> Option<(Vec<f64>, Vec<f64>)> {
    let x = numeric_array_at(payload, "x")?;
    let y = numeric_array_at(payload, "y")?;
    (x.len() == y.len()).then_some((x, y))
}

pub fn text_blocks(payload: &Payload) -> Option<RenderIntent> {
    let blocks = payload
        .iter()
        .filter(|(key, _)| key.as_str() != "solution")
        .filter_map(|(key, value)| {
            let lines = match value {
                Value::Object(record) => record_to_text(record),
                other => string_array(other)?,
            };
            Some(TextBlock {
                title: key.clone(),
                lines,
            })
        })
        .collect::<Vec<_>>();

    if blocks.is_empty() {
        return None;
    }

    Some(RenderIntent::FreeText(TextBlocks { blocks }))
}
