//! Distance metrics.
//!
//! A [`Metric`] is resolved once at run start and invoked uniformly by the
//! neighbour selector. Built-ins cover the five supported distances; a
//! caller-supplied function is wrapped in [`Metric::Custom`] and vetted by
//! [`Metric::validate`] before the run is allowed to proceed.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::ConfigError;

/// Signature every metric must satisfy: two equal-length feature vectors
/// in, one scalar distance out.
pub type MetricFn = Arc<dyn Fn(&[f64], &[f64]) -> f64 + Send + Sync>;

/// Distance metric over two feature vectors.
///
/// All built-ins are total, deterministic, non-negative and symmetric over
/// equal-length input. Zero distance is given special treatment by the
/// selector's weighting, not here.
#[derive(Clone)]
pub enum Metric {
    /// L1 norm of the difference.
    Manhattan,
    /// L2 norm of the difference.
    Euclidean,
    /// Squared L2 norm of the difference. The default.
    SquaredEuclidean,
    /// Angle between the two vectors, in radians.
    Angular,
    /// Tanimoto distance: `1 − a·b / (|a|² + |b|² − a·b)`.
    Tanimoto,
    /// Caller-supplied metric. Accepted only after [`Metric::validate`].
    Custom {
        /// Display name used in logs and errors.
        name: String,
        /// The distance function itself.
        f: MetricFn,
    },
}

impl Metric {
    /// Wraps a caller-supplied distance function.
    pub fn custom(
        name: impl Into<String>,
        f: impl Fn(&[f64], &[f64]) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Metric::Custom {
            name: name.into(),
            f: Arc::new(f),
        }
    }

    /// Display name of this metric.
    pub fn name(&self) -> &str {
        match self {
            Metric::Manhattan => "manhattan",
            Metric::Euclidean => "euclidean",
            Metric::SquaredEuclidean => "squared_euclidean",
            Metric::Angular => "angular",
            Metric::Tanimoto => "tanimoto",
            Metric::Custom { name, .. } => name,
        }
    }

    /// Computes the distance between two equal-length vectors.
    ///
    /// The caller is responsible for the length precondition; the selector
    /// checks it per pair and reports a mismatch as an execution error.
    pub fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        match self {
            Metric::Manhattan => manhattan(a, b),
            Metric::Euclidean => sq_euclidean(a, b).sqrt(),
            Metric::SquaredEuclidean => sq_euclidean(a, b),
            Metric::Angular => angular(a, b),
            Metric::Tanimoto => tanimoto(a, b),
            Metric::Custom { f, .. } => f(a, b),
        }
    }

    /// Vets the metric before the run starts.
    ///
    /// Built-ins always pass. A custom function is probed on fixed short
    /// vectors; a probe returning a non-finite or negative value fails with
    /// [`ConfigError::InvalidMetric`]. The `Fn(&[f64], &[f64]) -> f64`
    /// signature already enforces arity and plain-function-ness.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Metric::Custom { name, f } = self else {
            return Ok(());
        };

        let probes: [(&[f64], &[f64]); 3] = [
            (&[0.0, 3.0, 4.0], &[0.0, 0.0, 0.0]),
            (&[1.0, 1.0, 1.0], &[1.0, 1.0, 1.0]),
            (&[2.0, -1.0, 0.5], &[-0.5, 1.0, 2.0]),
        ];
        for (a, b) in probes {
            let d = f(a, b);
            if !d.is_finite() {
                return Err(ConfigError::InvalidMetric {
                    reason: format!("'{name}' returned non-finite distance {d} on probe input"),
                });
            }
            if d < 0.0 {
                return Err(ConfigError::InvalidMetric {
                    reason: format!("'{name}' returned negative distance {d} on probe input"),
                });
            }
        }
        Ok(())
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::SquaredEuclidean
    }
}

impl fmt::Debug for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Custom { name, .. } => f.debug_struct("Custom").field("name", name).finish(),
            builtin => f.write_str(builtin.name()),
        }
    }
}

impl FromStr for Metric {
    type Err = ConfigError;

    /// Parses a built-in metric name. Accepted aliases:
    /// `manhattan`/`l1`, `euclidean`/`l2`, `squared_euclidean`/`sql2`,
    /// `angular`/`cosine`, `tanimoto`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manhattan" | "l1" => Ok(Metric::Manhattan),
            "euclidean" | "l2" => Ok(Metric::Euclidean),
            "squared_euclidean" | "sql2" => Ok(Metric::SquaredEuclidean),
            "angular" | "cosine" => Ok(Metric::Angular),
            "tanimoto" => Ok(Metric::Tanimoto),
            _ => Err(ConfigError::UnknownMetric {
                name: s.to_string(),
            }),
        }
    }
}

fn manhattan(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(&x, &y)| (x - y).abs()).sum()
}

fn sq_euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(&x, &y)| x * y).sum()
}

fn angular(a: &[f64], b: &[f64]) -> f64 {
    let na = dot(a, a).sqrt();
    let nb = dot(b, b).sqrt();
    // A zero-norm vector has no direction; define the angle as 0.
    if na == 0.0 || nb == 0.0 {
        return 0.0;
    }
    (dot(a, b) / (na * nb)).clamp(-1.0, 1.0).acos()
}

fn tanimoto(a: &[f64], b: &[f64]) -> f64 {
    let ab = dot(a, b);
    let denom = dot(a, a) + dot(b, b) - ab;
    // Both vectors all-zero: treat as identical.
    if denom == 0.0 {
        return 0.0;
    }
    1.0 - ab / denom
}
