/// ## Expression results
///
/// Every value is a number. `CHR$` marks its result as a character so
/// that PRINT shows the byte instead of the number.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Val {
    Number(f32),
    Char(f32),
}

impl Default for Val {
    fn default() -> Val {
        Val::Number(0.0)
    }
}

impl Val {
    pub fn number(self) -> f32 {
        match self {
            Val::Number(n) | Val::Char(n) => n,
        }
    }

    pub fn is_char(self) -> bool {
        matches!(self, Val::Char(_))
    }

    /// Arithmetic keeps the character mark when either side has it.
    pub fn map2(self, rhs: Val, f: impl Fn(f32, f32) -> f32) -> Val {
        let n = f(self.number(), rhs.number());
        if self.is_char() || rhs.is_char() {
            Val::Char(n)
        } else {
            Val::Number(n)
        }
    }
}

impl From<f32> for Val {
    fn from(n: f32) -> Val {
        Val::Number(n)
    }
}

impl From<bool> for Val {
    fn from(b: bool) -> Val {
        Val::Number(if b { 1.0 } else { 0.0 })
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Char(n) => write!(f, "{}", char::from(*n as u8)),
            Val::Number(n) => write!(f, "{}", general(*n)),
        }
    }
}

/// Six significant digits, trailing zeros dropped, switching to an
/// exponent outside 1e-4..1e6. The classic `%g`.
fn general(n: f32) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_nan() {
        return "nan".to_string();
    }
    if n.is_infinite() {
        return if n < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    let sci = format!("{:.5e}", n);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if exp < -4 || exp >= 6 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let fixed = format!("{:.*}", (5 - exp) as usize, n);
        trim_fraction(&fixed).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_format() {
        assert_eq!(Val::Number(14.0).to_string(), "14");
        assert_eq!(Val::Number(-3.0).to_string(), "-3");
        assert_eq!(Val::Number(0.5).to_string(), "0.5");
        assert_eq!(Val::Number(1.0 / 3.0).to_string(), "0.333333");
        assert_eq!(Val::Number(123456.0).to_string(), "123456");
        assert_eq!(Val::Number(1234567.0).to_string(), "1.23457e+06");
        assert_eq!(Val::Number(0.00001).to_string(), "1e-05");
        assert_eq!(Val::Number(0.0).to_string(), "0");
    }

    #[test]
    fn test_char() {
        assert_eq!(Val::Char(65.0).to_string(), "A");
        assert_eq!(Val::Char(65.0).map2(Val::Number(1.0), |a, b| a + b), Val::Char(66.0));
        assert_eq!(Val::Number(1.0).map2(Val::Number(1.0), |a, b| a + b), Val::Number(2.0));
    }
}
