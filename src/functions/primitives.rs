use crate::functions::traits::Primitive;

// --- Arithmetic ---
#[derive(Debug)]
pub struct Add;

impl Primitive for Add {
    fn alias(&self) -> &'static str { "add" }
    fn arity(&self) -> usize { 2 }
    fn execute(&self, args: &[f64]) -> f64 {
        args[0] + args[1]
    }
    fn render(&self, args: &[String]) -> String {
        format!("({} + {})", args[0], args[1])
    }
}

#[derive(Debug)]
pub struct Sub;

impl Primitive for Sub {
    fn alias(&self) -> &'static str { "sub" }
    fn arity(&self) -> usize { 2 }
    fn execute(&self, args: &[f64]) -> f64 {
        args[0] - args[1]
    }
    fn render(&self, args: &[String]) -> String {
        format!("({} - {})", args[0], args[1])
    }
}

#[derive(Debug)]
pub struct Mul;

impl Primitive for Mul {
    fn alias(&self) -> &'static str { "mul" }
    fn arity(&self) -> usize { 2 }
    fn execute(&self, args: &[f64]) -> f64 {
        args[0] * args[1]
    }
    fn render(&self, args: &[String]) -> String {
        format!("({} * {})", args[0], args[1])
    }
}

/// Unprotected division: a zero divisor yields inf or NaN
#[derive(Debug)]
pub struct Div;

impl Primitive for Div {
    fn alias(&self) -> &'static str { "div" }
    fn arity(&self) -> usize { 2 }
    fn execute(&self, args: &[f64]) -> f64 {
        args[0] / args[1]
    }
    fn render(&self, args: &[String]) -> String {
        format!("({} / {})", args[0], args[1])
    }
}

#[derive(Debug)]
pub struct Neg;

impl Primitive for Neg {
    fn alias(&self) -> &'static str { "neg" }
    fn arity(&self) -> usize { 1 }
    fn execute(&self, args: &[f64]) -> f64 {
        -args[0]
    }
    fn render(&self, args: &[String]) -> String {
        format!("-({})", args[0])
    }
}

#[derive(Debug)]
pub struct Sqr;

impl Primitive for Sqr {
    fn alias(&self) -> &'static str { "sqr" }
    fn arity(&self) -> usize { 1 }
    fn execute(&self, args: &[f64]) -> f64 {
        args[0] * args[0]
    }
    fn render(&self, args: &[String]) -> String {
        format!("sqr({})", args[0])
    }
}

#[derive(Debug)]
pub struct Abs;

impl Primitive for Abs {
    fn alias(&self) -> &'static str { "abs" }
    fn arity(&self) -> usize { 1 }
    fn execute(&self, args: &[f64]) -> f64 {
        args[0].abs()
    }
    fn render(&self, args: &[String]) -> String {
        format!("abs({})", args[0])
    }
}

/// NaN-ignoring maximum, as `f64::max`
#[derive(Debug)]
pub struct Max;

impl Primitive for Max {
    fn alias(&self) -> &'static str { "max" }
    fn arity(&self) -> usize { 2 }
    fn execute(&self, args: &[f64]) -> f64 {
        args[0].max(args[1])
    }
    fn render(&self, args: &[String]) -> String {
        format!("max({}, {})", args[0], args[1])
    }
}

// --- Transcendental ---
#[derive(Debug)]
pub struct Sin;

impl Primitive for Sin {
    fn alias(&self) -> &'static str { "sin" }
    fn arity(&self) -> usize { 1 }
    fn execute(&self, args: &[f64]) -> f64 {
        args[0].sin()
    }
    fn render(&self, args: &[String]) -> String {
        format!("sin({})", args[0])
    }
}

#[derive(Debug)]
pub struct Cos;

impl Primitive for Cos {
    fn alias(&self) -> &'static str { "cos" }
    fn arity(&self) -> usize { 1 }
    fn execute(&self, args: &[f64]) -> f64 {
        args[0].cos()
    }
    fn render(&self, args: &[String]) -> String {
        format!("cos({})", args[0])
    }
}

#[derive(Debug)]
pub struct Exp;

impl Primitive for Exp {
    fn alias(&self) -> &'static str { "exp" }
    fn arity(&self) -> usize { 1 }
    fn execute(&self, args: &[f64]) -> f64 {
        args[0].exp()
    }
    fn render(&self, args: &[String]) -> String {
        format!("exp({})", args[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_is_not_clamped() {
        assert!(Div.execute(&[1.0, 0.0]).is_infinite());
        assert!(Div.execute(&[0.0, 0.0]).is_nan());
    }

    #[test]
    fn test_render_is_parenthesised() {
        let args = vec!["x".to_string(), "y".to_string()];
        assert_eq!(Mul.render(&args), "(x * y)");
        assert_eq!(Sin.render(&args[..1]), "sin(x)");
        assert_eq!(Neg.render(&args[1..]), "-(y)");
    }

    #[test]
    fn test_square_abs_and_max() {
        assert_eq!(Sqr.execute(&[-3.0]), 9.0);
        assert_eq!(Abs.execute(&[-2.5]), 2.5);
        assert_eq!(Max.execute(&[1.0, -4.0]), 1.0);
        assert_eq!(Max.execute(&[f64::NAN, 2.0]), 2.0);
        assert!(Sqr.execute(&[f64::INFINITY]).is_infinite());

        let args = vec!["x".to_string(), "y".to_string()];
        assert_eq!(Sqr.render(&args[..1]), "sqr(x)");
        assert_eq!(Abs.render(&args[1..]), "abs(y)");
        assert_eq!(Max.render(&args), "max(x, y)");
        assert_eq!((Sqr.arity(), Abs.arity(), Max.arity()), (1, 1, 2));
    }
}
