//! Numeric tags: fixed-width wrappers with literal suffixes and range checks.
//!
//! | Type | Storage | Bounds | Suffix |
//! |------|---------|--------|--------|
//! | [`Byte`] | `i8` | `-128..=127` | `b` |
//! | [`Short`] | `i16` | `-32768..=32767` | `s` |
//! | [`Int`] | `i32` | 32-bit signed | none |
//! | [`Long`] | `i64` | 64-bit signed | `l` |
//! | [`Float`] | `f64` | `-3.4e38 <= v < 3.4e38` | `f` |
//! | [`Double`] | `f64` | finite | `d` (accepted, never written) |
//!
//! Construction never clamps: anything outside the bounds is a
//! [`SnbtError::Range`], anything that is not a literal of the kind is a
//! [`SnbtError::MalformedLiteral`].
//!
//! Scalar comparisons between different numeric kinds compare the raw values,
//! so `Int(1) == Short(1)` and `Byte(1) == true`. Tags stored inside
//! containers use the stricter kind-aware rule on [`Tag`](crate::Tag).

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::error::{Result, SnbtError};
use crate::tag::Kind;

/// Exclusive magnitude bound of [`Float`] values.
pub const FLOAT_LIMIT: f64 = 3.4e38;

/// Trim `text` and drop one trailing `suffix` character in either case.
fn strip_suffix(text: &str, suffix: Option<char>) -> &str {
    let text = text.trim();
    let Some(suffix) = suffix else {
        return text;
    };
    text.strip_suffix(suffix.to_ascii_lowercase())
        .or_else(|| text.strip_suffix(suffix.to_ascii_uppercase()))
        .unwrap_or(text)
}

/// Format a float so it always reads back as a floating literal: Rust's
/// shortest round-trip form, with `.0` inserted when it has no dot
/// (`1e16` becomes `1.0e16`).
pub(crate) fn format_float(value: f64) -> String {
    let text = format!("{value:?}");
    if text.contains('.') {
        return text;
    }
    match text.find(['e', 'E']) {
        Some(pos) => format!("{}.0{}", &text[..pos], &text[pos..]),
        None => format!("{text}.0"),
    }
}

/// Range error for a floating kind, with bounds in exponent form.
fn float_range(kind: Kind, value: f64, min: f64, max: f64) -> SnbtError {
    SnbtError::range(kind, format!("{value:e}"), format!("{min:e}"), format!("{max:e}"))
}

macro_rules! integer_tag {
    ($(#[$meta:meta])* $name:ident($prim:ty), $kind:expr, $suffix:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name($prim);

        impl $name {
            pub const KIND: Kind = $kind;
            pub const SUFFIX: Option<char> = $suffix;
            pub const MIN: $prim = <$prim>::MIN;
            pub const MAX: $prim = <$prim>::MAX;

            /// Wrap `value`, failing if it does not fit the kind's bounds.
            pub fn new(value: i128) -> Result<Self> {
                <$prim>::try_from(value)
                    .map($name)
                    .map_err(|_| SnbtError::range(Self::KIND, value, Self::MIN, Self::MAX))
            }

            /// Parse `text` in the given base after stripping an optional
            /// suffix.
            pub fn from_str_radix(text: &str, radix: u32) -> Result<Self> {
                if !(2..=36).contains(&radix) {
                    return Err(SnbtError::malformed(
                        Self::KIND,
                        text,
                        format!("unsupported base {radix}"),
                    ));
                }
                let body = strip_suffix(text, Self::SUFFIX);
                match i128::from_str_radix(body, radix) {
                    Ok(value) => Self::new(value),
                    Err(err) => match err.kind() {
                        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                            Err(SnbtError::range(Self::KIND, body, Self::MIN, Self::MAX))
                        }
                        _ => Err(SnbtError::malformed(
                            Self::KIND,
                            text,
                            format!("not a base-{radix} integer"),
                        )),
                    },
                }
            }

            pub fn get(self) -> $prim {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = SnbtError;

            fn from_str(text: &str) -> Result<Self> {
                Self::from_str_radix(text, 10)
            }
        }

        impl From<$prim> for $name {
            fn from(value: $prim) -> Self {
                $name(value)
            }
        }

        impl From<$name> for $prim {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)?;
                if let Some(suffix) = Self::SUFFIX {
                    write!(f, "{suffix}")?;
                }
                Ok(())
            }
        }

        impl Scalar for $name {
            fn scalar(&self) -> Number {
                Number::Integer(i128::from(self.0))
            }
        }
    };
}

integer_tag!(
    /// 8-bit signed integer tag, written with a `b` suffix.
    Byte(i8),
    Kind::Byte,
    Some('b')
);
integer_tag!(
    /// 16-bit signed integer tag, written with an `s` suffix.
    Short(i16),
    Kind::Short,
    Some('s')
);
integer_tag!(
    /// 32-bit signed integer tag, written without a suffix.
    Int(i32),
    Kind::Int,
    None
);
integer_tag!(
    /// 64-bit signed integer tag, written with an `l` suffix.
    Long(i64),
    Kind::Long,
    Some('l')
);

/// Single-precision tag. The value is kept as `f64` so that no precision is
/// silently dropped; only the bounds are those of a Minecraft float.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Float(f64);

impl Float {
    pub const KIND: Kind = Kind::Float;
    pub const SUFFIX: Option<char> = Some('f');
    pub const MIN: f64 = -FLOAT_LIMIT;
    pub const MAX: f64 = FLOAT_LIMIT;

    pub fn new(value: f64) -> Result<Self> {
        if (Self::MIN..Self::MAX).contains(&value) {
            Ok(Float(value))
        } else {
            Err(float_range(Self::KIND, value, Self::MIN, Self::MAX))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl FromStr for Float {
    type Err = SnbtError;

    fn from_str(text: &str) -> Result<Self> {
        let body = strip_suffix(text, Self::SUFFIX);
        let value: f64 = body
            .parse()
            .map_err(|_| SnbtError::malformed(Self::KIND, text, "not a decimal number"))?;
        Self::new(value)
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}f", format_float(self.0))
    }
}

/// Double-precision tag. Any finite value is accepted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Double(f64);

impl Double {
    pub const KIND: Kind = Kind::Double;
    pub const SUFFIX: Option<char> = Some('d');
    pub const MIN: f64 = f64::MIN;
    pub const MAX: f64 = f64::MAX;

    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() {
            Ok(Double(value))
        } else {
            Err(float_range(Self::KIND, value, Self::MIN, Self::MAX))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl FromStr for Double {
    type Err = SnbtError;

    fn from_str(text: &str) -> Result<Self> {
        let body = strip_suffix(text, Self::SUFFIX);
        let value: f64 = body
            .parse()
            .map_err(|_| SnbtError::malformed(Self::KIND, text, "not a decimal number"))?;
        Self::new(value)
    }
}

impl fmt::Display for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_float(self.0))
    }
}

impl From<Double> for f64 {
    fn from(value: Double) -> Self {
        value.0
    }
}

impl From<Float> for f64 {
    fn from(value: Float) -> Self {
        value.0
    }
}

/// Raw value of a numeric tag, used for cross-kind scalar comparisons.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Number {
    Integer(i128),
    Float(f64),
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Integer(i), Number::Float(f)) | (Number::Float(f), Number::Integer(i)) => {
                integral_eq(i, f)
            }
        }
    }
}

/// Exact comparison: `f` must be integral and equal to `i` without rounding.
fn integral_eq(i: i128, f: f64) -> bool {
    const BOUND: f64 = 170141183460469231731687303715884105728.0; // 2^127
    f.fract() == 0.0 && (-BOUND..BOUND).contains(&f) && f as i128 == i
}

pub(crate) trait Scalar {
    fn scalar(&self) -> Number;
}

impl Scalar for Float {
    fn scalar(&self) -> Number {
        Number::Float(self.0)
    }
}

impl Scalar for Double {
    fn scalar(&self) -> Number {
        Number::Float(self.0)
    }
}

macro_rules! cross_eq {
    ($lhs:ident => $($rhs:ident),+) => {
        $(
            impl PartialEq<$rhs> for $lhs {
                fn eq(&self, other: &$rhs) -> bool {
                    self.scalar() == other.scalar()
                }
            }
        )+
    };
}

cross_eq!(Byte => Short, Int, Long, Float, Double);
cross_eq!(Short => Byte, Int, Long, Float, Double);
cross_eq!(Int => Byte, Short, Long, Float, Double);
cross_eq!(Long => Byte, Short, Int, Float, Double);
cross_eq!(Float => Byte, Short, Int, Long, Double);
cross_eq!(Double => Byte, Short, Int, Long, Float);

impl PartialEq<bool> for Byte {
    fn eq(&self, other: &bool) -> bool {
        self.0 == i8::from(*other)
    }
}

impl PartialEq<Byte> for bool {
    fn eq(&self, other: &Byte) -> bool {
        other == self
    }
}
