use serde::{Deserialize, Serialize};

/// The unknown function the population is trying to approximate
pub trait TargetFunction: Send + Sync {
    fn value(&self, x: f64, y: f64) -> f64;
}

impl<F> TargetFunction for F
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    fn value(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// Named targets selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinTarget {
    /// x^2 + y^2
    #[default]
    Paraboloid,
    /// x^2 - y^2
    Saddle,
    /// sin(x) * cos(y)
    Ripple,
    /// x * y
    Product,
    /// x / (1 + y^2)
    Rational,
}

impl BuiltinTarget {
    pub fn formula(&self) -> &'static str {
        match self {
            BuiltinTarget::Paraboloid => "x^2 + y^2",
            BuiltinTarget::Saddle => "x^2 - y^2",
            BuiltinTarget::Ripple => "sin(x) * cos(y)",
            BuiltinTarget::Product => "x * y",
            BuiltinTarget::Rational => "x / (1 + y^2)",
        }
    }
}

impl TargetFunction for BuiltinTarget {
    fn value(&self, x: f64, y: f64) -> f64 {
        match self {
            BuiltinTarget::Paraboloid => x * x + y * y,
            BuiltinTarget::Saddle => x * x - y * y,
            BuiltinTarget::Ripple => x.sin() * y.cos(),
            BuiltinTarget::Product => x * y,
            BuiltinTarget::Rational => x / (1.0 + y * y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_values() {
        assert_eq!(BuiltinTarget::Paraboloid.value(0.5, -0.5), 0.5);
        assert_eq!(BuiltinTarget::Saddle.value(1.0, 1.0), 0.0);
        assert_eq!(BuiltinTarget::Rational.value(2.0, 1.0), 1.0);
    }

    #[test]
    fn test_closure_is_a_target() {
        let target = |x: f64, y: f64| 3.0 * x - y;
        assert_eq!(target.value(1.0, 1.0), 2.0);
    }
}
