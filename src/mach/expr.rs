use super::{Runtime, Val};
use crate::error;
use crate::lang::scan;
use crate::lang::token::{Function, Lexeme, Relop};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Expression evaluator
///
/// Recursive descent over the text at the cursor in four tiers:
/// relation, sum, term and primary. Problems raise `expression_error`
/// and evaluation carries on with zero, so the caller checks the flag
/// once at the end.

impl Runtime {
    pub(super) fn byte(&self) -> u8 {
        self.arena.byte(self.txt_pos)
    }

    pub(super) fn skip_blanks(&mut self) {
        scan::skip_blanks(self.arena.bytes(), &mut self.txt_pos);
    }

    pub(super) fn scan<T: Lexeme>(&mut self) -> Option<T> {
        scan::scan(self.arena.bytes(), &mut self.txt_pos)
    }

    /// Evaluates a whole expression.
    pub(super) fn expression(&mut self) -> Result<Val> {
        self.expression_error = false;
        let val = self.relation();
        if self.expression_error {
            Err(error!(SyntaxError))
        } else {
            Ok(val)
        }
    }

    /// At most one comparison; the result is 1 or 0.
    fn relation(&mut self) -> Val {
        let lhs = self.sum();
        if self.expression_error {
            return lhs;
        }
        match self.scan::<Relop>() {
            None => lhs,
            Some(op) => {
                let rhs = self.sum();
                Val::from(op.holds(lhs.number(), rhs.number()))
            }
        }
    }

    fn sum(&mut self) -> Val {
        self.skip_blanks();
        let mut acc = match self.byte() {
            b'-' => {
                self.txt_pos += 1;
                let rhs = self.term();
                Val::default().map2(rhs, |a, b| a - b)
            }
            b'+' => {
                self.txt_pos += 1;
                let rhs = self.term();
                Val::default().map2(rhs, |a, b| a + b)
            }
            _ => self.term(),
        };
        loop {
            match self.byte() {
                b'-' => {
                    self.txt_pos += 1;
                    let rhs = self.term();
                    acc = acc.map2(rhs, |a, b| a - b);
                }
                b'+' => {
                    self.txt_pos += 1;
                    let rhs = self.term();
                    acc = acc.map2(rhs, |a, b| a + b);
                }
                _ => return acc,
            }
        }
    }

    fn term(&mut self) -> Val {
        let mut acc = self.primary();
        loop {
            match self.byte() {
                b'*' => {
                    self.txt_pos += 1;
                    let rhs = self.primary();
                    acc = acc.map2(rhs, |a, b| a * b);
                }
                b'/' => {
                    self.txt_pos += 1;
                    let rhs = self.primary();
                    if rhs.number() == 0.0 {
                        self.expression_error = true;
                    } else {
                        acc = acc.map2(rhs, |a, b| a / b);
                    }
                }
                _ => return acc,
            }
        }
    }

    fn primary(&mut self) -> Val {
        self.skip_blanks();
        let val = self.primary_value();
        self.skip_blanks();
        val
    }

    fn primary_value(&mut self) -> Val {
        let ch = self.byte();
        if ch == b'-' || ch == b'.' || ch.is_ascii_digit() {
            return self.number();
        }
        if scan::is_letter(ch) {
            if !scan::is_letter(self.arena.byte(self.txt_pos + 1)) {
                self.txt_pos += 1;
                return Val::Number(self.arena.variable(ch));
            }
            return self.call();
        }
        if ch == b'(' {
            self.txt_pos += 1;
            let val = self.relation();
            self.skip_blanks();
            if self.byte() != b')' {
                return self.fault();
            }
            self.txt_pos += 1;
            return val;
        }
        self.fault()
    }

    fn fault(&mut self) -> Val {
        self.expression_error = true;
        Val::default()
    }

    /// Numeric literal: `-`, digits, `.`, digits, then `E`, sign, digits.
    fn number(&mut self) -> Val {
        let start = self.txt_pos;
        let at = |pos| self.arena.byte(pos);
        let mut pos = start;
        if at(pos) == b'-' {
            pos += 1;
        }
        let mut digits = 0;
        while at(pos).is_ascii_digit() {
            pos += 1;
            digits += 1;
        }
        if at(pos) == b'.' {
            pos += 1;
            while at(pos).is_ascii_digit() {
                pos += 1;
                digits += 1;
            }
        }
        if digits == 0 {
            return self.fault();
        }
        if at(pos) == b'E' {
            let mut exp = pos + 1;
            if at(exp) == b'-' || at(exp) == b'+' {
                exp += 1;
            }
            if at(exp).is_ascii_digit() {
                while at(exp).is_ascii_digit() {
                    exp += 1;
                }
                pos = exp;
            }
        }
        let parsed = std::str::from_utf8(&self.arena.bytes()[start..pos])
            .ok()
            .and_then(|s| s.parse::<f32>().ok());
        self.txt_pos = pos;
        match parsed {
            Some(n) => Val::Number(n),
            None => self.fault(),
        }
    }

    /// `NAME(` with zero or one argument `)`.
    fn call(&mut self) -> Val {
        let function = match self.scan::<Function>() {
            Some(f) => f,
            None => return self.fault(),
        };
        if self.byte() != b'(' {
            return self.fault();
        }
        self.txt_pos += 1;
        self.skip_blanks();
        let arg = if self.byte() == b')' {
            None
        } else {
            let val = self.relation();
            self.skip_blanks();
            Some(val.number())
        };
        if self.byte() != b')' {
            return self.fault();
        }
        self.txt_pos += 1;
        if self.expression_error {
            return Val::default();
        }
        match self.function(function, arg) {
            Ok(val) => val,
            Err(_) => self.fault(),
        }
    }
}
