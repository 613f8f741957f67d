//! Number literal lexing.
//!
//! A numeric literal is decomposed rather than evaluated: see
//! [`Number`](crate::Number) for the components.
//!
//! # Number Formats
//!
//! - Decimal: `42`, `1_000`
//! - Fraction: `3.14`, `1.05`
//! - Exponent: `1e10`, `2.5E-3`, `7e+2`
//! - Radix: `0xFF`, `0b1010_0101`, `0o777`
//! - Leading dot: `.5` where the `.` is in operand position
//! - Signed: `-5`, `-.5` where the `-` is in operand position
//!
//! The raw literal is the longest run of digits, ASCII letters and
//! underscores, plus a `.` directly followed by a digit and the sign of an
//! exponent. Letters that are not digits of the literal's radix make the
//! whole literal [`InvalidLiteral`](LexErrorKind::InvalidLiteral).

use crate::char_class::is_number_continue;
use crate::error::LexErrorKind;
use crate::token::{Number, TokenKind};
use crate::Lexer;

/// Accumulated value of one run of digits.
#[derive(Debug, Default)]
struct DigitRun {
    value: u64,
    digits: u32,
    overflow: bool,
    invalid: bool,
}

impl DigitRun {
    fn push(&mut self, digit: u32, radix: u32) {
        self.digits = self.digits.saturating_add(1);
        if self.overflow {
            return;
        }
        match self
            .value
            .checked_mul(u64::from(radix))
            .and_then(|v| v.checked_add(u64::from(digit)))
        {
            Some(v) => self.value = v,
            None => {
                self.value = u64::MAX;
                self.overflow = true;
            },
        }
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a number literal starting at a digit.
    ///
    /// Always emits a `Number` token. Overflow clamps the affected component
    /// and reports `NumberTooLarge`; invalid characters report
    /// `InvalidLiteral` and zero every component except the sign. A literal
    /// reports at most one of the two.
    pub(crate) fn lex_number(&mut self) {
        let leading_dot = self.fold_leading_dot();
        let negative = self.config.signed_numbers && self.fold_sign();

        let mut number = Number {
            negative,
            ..Number::default()
        };
        let mut overflow = false;
        let mut invalid = false;

        let radix = if leading_dot { None } else { self.radix_prefix() };
        if let Some(radix) = radix {
            self.cursor.advance_n(2);
            let run = self.scan_digits(radix);
            number.mantissa = run.value;
            overflow |= run.overflow;
            invalid |= run.invalid || run.digits == 0;
        } else {
            let fraction_follows = if leading_dot {
                true
            } else {
                let whole = self.scan_digits(10);
                number.mantissa = whole.value;
                overflow |= whole.overflow;
                invalid |= whole.invalid;

                let dot = self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit();
                if dot {
                    self.cursor.advance();
                }
                dot
            };

            if fraction_follows {
                let fraction = self.scan_digits(10);
                number.fraction = fraction.value;
                number.fraction_digits = fraction.digits;
                overflow |= fraction.overflow;
                invalid |= fraction.invalid;
            }

            if self.at_exponent() {
                self.cursor.advance();
                let exponent_negative = match self.cursor.current_char() {
                    '-' => {
                        self.cursor.advance();
                        true
                    },
                    '+' => {
                        self.cursor.advance();
                        false
                    },
                    _ => false,
                };
                let exponent = self.scan_exponent_digits();
                let (value, clamped) = clamp_exponent(exponent.value, exponent_negative);
                number.exponent = value;
                overflow |= exponent.overflow || clamped;
                invalid |= exponent.invalid;
            }
        }

        let span = self.token_span();
        if invalid {
            self.report(LexErrorKind::InvalidLiteral, span);
            number = Number {
                negative,
                ..Number::default()
            };
        } else if overflow {
            self.report(LexErrorKind::NumberTooLarge, span);
        }

        self.push_token(TokenKind::Number(number));
    }

    /// Folds a directly preceding operand-position `.` into this literal,
    /// which then has no integer part (`.5`).
    ///
    /// After a value-producing token the `.` is member access (`t.0`) and is
    /// left alone.
    fn fold_leading_dot(&mut self) -> bool {
        self.fold_prefix('.')
    }

    /// Folds a directly preceding prefix-position `-` into this literal.
    ///
    /// The `-` must end exactly where the literal starts and must not follow
    /// a value-producing token (`a-1` stays a subtraction).
    fn fold_sign(&mut self) -> bool {
        self.fold_prefix('-')
    }

    /// Removes the last token if it is `symbol`, ends exactly where the
    /// current literal starts and does not follow a value. The literal's
    /// span then starts at the removed symbol.
    fn fold_prefix(&mut self, symbol: char) -> bool {
        let Some(prefix) = self.tokens.last() else {
            return false;
        };
        if !prefix.kind.is_symbol(symbol) || prefix.span.end() != self.token_start_pos {
            return false;
        }

        let operand_before = self.tokens.len() >= 2 && self.tokens[self.tokens.len() - 2].kind.is_value();
        if operand_before {
            return false;
        }

        let start = prefix.span.start();
        self.tokens.pop();
        self.token_start_pos = start;
        true
    }

    /// Returns the radix if the cursor is at `0x`, `0b` or `0o`.
    fn radix_prefix(&self) -> Option<u32> {
        if !self.config.radix_prefixes || self.cursor.current_char() != '0' {
            return None;
        }
        match self.cursor.peek_char(1) {
            'x' | 'X' => Some(16),
            'b' | 'B' => Some(2),
            'o' | 'O' => Some(8),
            _ => None,
        }
    }

    /// Returns true if the cursor is at an exponent marker that is followed
    /// by a digit, or by a sign and then a digit.
    fn at_exponent(&self) -> bool {
        if !self.config.exponents || !matches!(self.cursor.current_char(), 'e' | 'E') {
            return false;
        }
        match self.cursor.peek_char(1) {
            '+' | '-' => self.cursor.peek_char(2).is_ascii_digit(),
            c => c.is_ascii_digit(),
        }
    }

    /// Scans a run of digits in `radix`.
    ///
    /// Underscores are separators. A decimal run stops in front of a valid
    /// exponent marker; any other letter is consumed and marks the run
    /// invalid.
    fn scan_digits(&mut self, radix: u32) -> DigitRun {
        let mut run = DigitRun::default();
        while is_number_continue(self.cursor.current_char()) {
            let c = self.cursor.current_char();
            if radix == 10 && self.at_exponent() {
                break;
            }
            match c {
                '_' => {},
                _ => match c.to_digit(radix) {
                    Some(d) => run.push(d, radix),
                    None => run.invalid = true,
                },
            }
            self.cursor.advance();
        }
        run
    }

    /// Scans exponent digits; every letter here is invalid.
    fn scan_exponent_digits(&mut self) -> DigitRun {
        let mut run = DigitRun::default();
        while is_number_continue(self.cursor.current_char()) {
            let c = self.cursor.current_char();
            match c {
                '_' => {},
                _ => match c.to_digit(10) {
                    Some(d) => run.push(d, 10),
                    None => run.invalid = true,
                },
            }
            self.cursor.advance();
        }
        run
    }
}

/// Applies the exponent sign, clamping magnitudes that do not fit an `i32`.
///
/// Returns the exponent and whether it was clamped.
fn clamp_exponent(magnitude: u64, negative: bool) -> (i32, bool) {
    if negative {
        match i64::try_from(magnitude).ok().and_then(|m| i32::try_from(-m).ok()) {
            Some(v) => (v, false),
            None => (i32::MIN, true),
        }
    } else {
        match i32::try_from(magnitude) {
            Ok(v) => (v, false),
            Err(_) => (i32::MAX, true),
        }
    }
}
