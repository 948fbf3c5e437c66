//! Expression tree and numeric evaluation.

use std::fmt;

/// One of the two free variables an expression may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Var {
    /// The x coordinate.
    X,
    /// The y coordinate.
    Y,
}

impl Var {
    /// Variable name as written in source.
    pub fn name(self) -> &'static str {
        match self {
            Var::X => "x",
            Var::Y => "y",
        }
    }
}

/// A unary function recognized by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    /// Natural logarithm. `log` and `ln` both map here.
    Log,
    Abs,
    Exp,
    Sqrt,
}

impl Func {
    /// Look up a function by its source-level name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Func::Sin),
            "cos" => Some(Func::Cos),
            "tan" => Some(Func::Tan),
            "asin" => Some(Func::Asin),
            "acos" => Some(Func::Acos),
            "atan" => Some(Func::Atan),
            "log" | "ln" => Some(Func::Log),
            "abs" => Some(Func::Abs),
            "exp" => Some(Func::Exp),
            "sqrt" => Some(Func::Sqrt),
            _ => None,
        }
    }

    /// Canonical name for display.
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Asin => "asin",
            Func::Acos => "acos",
            Func::Atan => "atan",
            Func::Log => "log",
            Func::Abs => "abs",
            Func::Exp => "exp",
            Func::Sqrt => "sqrt",
        }
    }

    /// Apply the function with plain f64 semantics. Out-of-domain inputs
    /// produce NaN or infinities, never errors.
    pub fn apply(self, v: f64) -> f64 {
        match self {
            Func::Sin => v.sin(),
            Func::Cos => v.cos(),
            Func::Tan => v.tan(),
            Func::Asin => v.asin(),
            Func::Acos => v.acos(),
            Func::Atan => v.atan(),
            Func::Log => v.ln(),
            Func::Abs => v.abs(),
            Func::Exp => v.exp(),
            Func::Sqrt => v.sqrt(),
        }
    }
}

/// A parsed expression in the two free variables x and y.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum Expr {
    Const(f64),
    Var(Var),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Neg(Box<Expr>),
    Call(Func, Box<Expr>),
}

impl Expr {
    /// Evaluate at a point. Division by zero and out-of-domain function
    /// arguments follow IEEE semantics (±Inf / NaN).
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        match self {
            Expr::Const(c) => *c,
            Expr::Var(Var::X) => x,
            Expr::Var(Var::Y) => y,
            Expr::Add(lhs, rhs) => lhs.eval(x, y) + rhs.eval(x, y),
            Expr::Sub(lhs, rhs) => lhs.eval(x, y) - rhs.eval(x, y),
            Expr::Mul(lhs, rhs) => lhs.eval(x, y) * rhs.eval(x, y),
            Expr::Div(lhs, rhs) => lhs.eval(x, y) / rhs.eval(x, y),
            Expr::Pow(base, exp) => base.eval(x, y).powf(exp.eval(x, y)),
            Expr::Neg(inner) => -inner.eval(x, y),
            Expr::Call(func, arg) => func.apply(arg.eval(x, y)),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(c) => write!(f, "{}", c),
            Expr::Var(v) => write!(f, "{}", v.name()),
            Expr::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Expr::Sub(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            Expr::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Expr::Div(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Expr::Pow(base, exp) => write!(f, "({} ** {})", base, exp),
            Expr::Neg(inner) => write!(f, "(-{})", inner),
            Expr::Call(func, arg) => write!(f, "{}({})", func.name(), arg),
        }
    }
}
