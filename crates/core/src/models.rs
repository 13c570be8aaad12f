use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderIntentKind {
    ScalarMap,
    IndexedSeries,
    LineSeries,
    Phasor,
    Table,
    Matrix,
    ComplexPlane,
    Polynomial,
    ConvergenceTrace,
    OdeTrajectory,
    CurveFit,
    FreeText,
    Unclassified,
}

impl RenderIntentKind {
    pub const ALL: [RenderIntentKind; 13] = [
        Self::ScalarMap,
        Self::IndexedSeries,
        Self::LineSeries,
        Self::Phasor,
        Self::Table,
        Self::Matrix,
        Self::ComplexPlane,
        Self::Polynomial,
        Self::ConvergenceTrace,
        Self::OdeTrajectory,
        Self::CurveFit,
        Self::FreeText,
        Self::Unclassified,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ScalarMap => "scalar_map",
            Self::IndexedSeries => "indexed_series",
            Self::LineSeries => "line_series",
            Self::Phasor => "phasor",
            Self::Table => "table",
            Self::Matrix => "matrix",
            Self::ComplexPlane => "complex_plane",
            Self::Polynomial => "polynomial",
            Self::ConvergenceTrace => "convergence_trace",
            Self::OdeTrajectory => "ode_trajectory",
            Self::CurveFit => "curve_fit",
            Self::FreeText => "free_text",
            Self::Unclassified => "unclassified",
        }
    }
}

/// What to draw for one payload. Each case holds validated, coerced data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum RenderIntent {
    ScalarMap(ScalarMap),
    IndexedSeries(IndexedSeries),
    LineSeries(LineSeries),
    Phasor(Phasor),
    Table(Table),
    Matrix(Matrix),
    ComplexPlane(ComplexPlane),
    Polynomial(Polynomial),
    ConvergenceTrace(ConvergenceTrace),
    OdeTrajectory(Trajectory),
    CurveFit(CurveFit),
    FreeText(TextBlocks),
    Unclassified,
}

impl RenderIntent {
    pub fn kind(&self) -> RenderIntentKind {
        match self {
            Self::ScalarMap(_) => RenderIntentKind::ScalarMap,
            Self::IndexedSeries(_) => RenderIntentKind::IndexedSeries,
            Self::LineSeries(_) => RenderIntentKind::LineSeries,
            Self::Phasor(_) => RenderIntentKind::Phasor,
            Self::Table(_) => RenderIntentKind::Table,
            Self::Matrix(_) => RenderIntentKind::Matrix,
            Self::ComplexPlane(_) => RenderIntentKind::ComplexPlane,
            Self::Polynomial(_) => RenderIntentKind::Polynomial,
            Self::ConvergenceTrace(_) => RenderIntentKind::ConvergenceTrace,
            Self::OdeTrajectory(_) => RenderIntentKind::OdeTrajectory,
            Self::CurveFit(_) => RenderIntentKind::CurveFit,
            Self::FreeText(_) => RenderIntentKind::FreeText,
            Self::Unclassified => RenderIntentKind::Unclassified,
        }
    }

    pub fn is_unclassified(&self) -> bool {
        matches!(self, Self::Unclassified)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarOrigin {
    /// Entries of the nested `solution` record.
    Solution,
    /// Numeric keys found directly on the payload.
    TopLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarEntry {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarMap {
    pub origin: ScalarOrigin,
    pub entries: Vec<ScalarEntry>,
    /// Non-numeric `solution` entries, carried verbatim in payload order.
    pub passthrough: Vec<(String, Value)>,
}

impl ScalarMap {
    /// True when every entry is numeric and the per-value renderer applies.
    pub fn is_fully_numeric(&self) -> bool {
        self.passthrough.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedSeries {
    pub key: String,
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phasor {
    pub magnitude: f64,
    pub angle_rad: f64,
    pub angle_deg: f64,
}

impl Phasor {
    pub fn from_radians(magnitude: f64, angle_rad: f64) -> Self {
        Self {
            magnitude,
            angle_rad,
            angle_deg: angle_rad.to_degrees(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    /// Cells follow `headers`; `None` marks a key the row did not carry.
    pub rows: Vec<Vec<Option<Value>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub key: String,
    pub rows: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn is_rectangular(&self) -> bool {
        let width = self.rows.first().map(Vec::len).unwrap_or(0);
        self.rows.iter().all(|row| row.len() == width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub fn from_polar(modulus: f64, argument: f64) -> Self {
        Self {
            real: modulus * argument.cos(),
            imag: modulus * argument.sin(),
        }
    }

    pub fn modulus(self) -> f64 {
        self.real.hypot(self.imag)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexPlane {
    pub points: Vec<Complex>,
}

/// Coefficients run from the constant term upward, about `about`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polynomial {
    pub coefficients: Vec<f64>,
    pub about: f64,
}

impl Polynomial {
    pub fn new(coefficients: Vec<f64>, about: f64) -> Self {
        Self {
            coefficients,
            about,
        }
    }

    /// Horner evaluation of `sum c[k] * (x - about)^k`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let h = x - self.about;
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, coefficient| acc * h + coefficient)
    }

    pub fn degree(&self) -> usize {
        self.coefficients
            .iter()
            .rposition(|coefficient| *coefficient != 0.0)
            .unwrap_or(0)
    }

    pub fn expression(&self) -> String {
        let base = if self.about == 0.0 {
            "x".to_string()
        } else if self.about < 0.0 {
            format!("(x + {})", -self.about)
        } else {
            format!("(x - {})", self.about)
        };

        let mut terms = Vec::new();
        for (power, coefficient) in self.coefficients.iter().enumerate() {
            if *coefficient == 0.0 {
                continue;
            }
            let term = match power {
                0 => format!("{coefficient}"),
                1 => format!("{coefficient}{base}"),
                _ => format!("{coefficient}{base}^{power}"),
            };
            terms.push(term);
        }

        if terms.is_empty() {
            "0".to_string()
        } else {
            terms.join(" + ")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvergencePoint {
    pub iteration: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceTrace {
    pub points: Vec<ConvergencePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub t: Vec<f64>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveFit {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub y_fit: Vec<f64>,
    /// Set when `y_fit` was synthesised from a polynomial.
    pub coefficients: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlocks {
    pub blocks: Vec<TextBlock>,
}
