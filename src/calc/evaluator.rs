use super::key::Operator;

/// Apply `op` to two operands. Division by zero yields `NaN` rather than an
/// error; the NaN is shown on the display like any other result.
pub fn evaluate(a: f64, b: f64, op: Operator) -> f64 {
    match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b != 0.0 {
                a / b
            } else {
                f64::NAN
            }
        }
    }
}

/// Like [`evaluate`], over a raw operator symbol. Unknown symbols yield 0.0.
pub fn evaluate_symbol(a: f64, b: f64, symbol: &str) -> f64 {
    match Operator::from_symbol(symbol) {
        Some(op) => evaluate(a, b, op),
        None => 0.0,
    }
}
