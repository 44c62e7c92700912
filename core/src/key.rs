//! Property keys and their numeric coercion.
//!
//! A read on a [`Subscripted`](crate::Subscripted) value is addressed by a
//! [`Key`]. String keys are coerced the way a numeric literal comparison
//! would coerce them: `"2"`, `" 2 "`, `"2.0"`, `"0x2"` and `"2e0"` all name
//! index `2`, while `"1.5"`, `"Infinity"` and `"name"` name ordinary
//! properties.

use core::fmt;

/// A coerced property key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'k> {
    /// The key is an integer and is routed to the delegate.
    ///
    /// Integers that do not fit in an `i64` saturate. They can never address
    /// an element, so routing them still yields no value.
    Index(i64),
    /// Any other key. Reads fall through to the wrapped value.
    Property(&'k str),
}

impl<'k> Key<'k> {
    /// Coerce a string key.
    pub fn parse(key: &'k str) -> Self {
        match to_number(key) {
            Some(n) if n.is_finite() && n % 1.0 == 0.0 => Key::Index(n as i64),
            _ => Key::Property(key),
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    pub fn as_index(&self) -> Option<i64> {
        match *self {
            Key::Index(index) => Some(index),
            Key::Property(_) => None,
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{}", index),
            Key::Property(name) => f.write_str(name),
        }
    }
}

impl<'k> From<&'k str> for Key<'k> {
    fn from(key: &'k str) -> Self {
        Key::parse(key)
    }
}

impl<'k> From<&'k crate::String> for Key<'k> {
    fn from(key: &'k crate::String) -> Self {
        Key::parse(key)
    }
}

macro_rules! impl_from_int {
    ($($int:ty),* $(,)?) => {
        $(
            impl From<$int> for Key<'_> {
                fn from(index: $int) -> Self {
                    // Saturates, see `Key::Index`.
                    Key::Index(i64::try_from(index).unwrap_or(if index > 0 as $int {
                        i64::MAX
                    } else {
                        i64::MIN
                    }))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// ECMAScript white space and line terminators.
fn is_space(c: char) -> bool {
    // `char::is_whitespace` also covers NEL (U+0085), which is not white space here.
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Numeric value of a string key, or `None` if it is not numeric.
fn to_number(key: &str) -> Option<f64> {
    let s = key.trim_matches(is_space);
    if s.is_empty() {
        return Some(0.0);
    }

    let bytes = s.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'0' {
        let radix = match bytes[1] {
            b'x' | b'X' => Some(16),
            b'o' | b'O' => Some(8),
            b'b' | b'B' => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            return radix_number(&s[2..], radix);
        }
    }

    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if unsigned == "Infinity" {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    if !is_decimal_literal(unsigned) {
        return None;
    }
    s.parse().ok()
}

fn radix_number(digits: &str, radix: u32) -> Option<f64> {
    let mut value = 0.0f64;
    for c in digits.chars() {
        value = value * radix as f64 + c.to_digit(radix)? as f64;
    }
    Some(value)
}

/// `digits [. digits] [e [+-] digits]` with at least one mantissa digit.
fn is_decimal_literal(s: &str) -> bool {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(at) => (&s[..at], Some(&s[at + 1..])),
        None => (s, None),
    };

    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if int.is_empty() && frac.is_empty() || !all_digits(int) || !all_digits(frac) {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp.is_empty() && all_digits(exp)
        }
    }
}

#[cfg(test)]
#[path = "key_test.rs"]
mod key_test;
