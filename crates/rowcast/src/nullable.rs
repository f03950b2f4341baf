//! Nullable wrappers.
//!
//! Two families are recognized: [`Nullable<T>`] (an explicit validity flag
//! next to the inner value, like SQL null types) and `Option<T>`. Both are
//! viewed through [`OptionalScalar`], so dispatch never cares which family a
//! value came from.

use serde::{Deserialize, Serialize};

use crate::reflect::{Kind, Reflect};

/// Optional-scalar view of a nullable wrapper. `None` means "not valid".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionalScalar<'a> {
    Text(Option<&'a str>),
    Bool(Option<bool>),
    Int(Option<i64>),
    /// 32-bit integers; only record projection recognizes these
    NarrowInt(Option<i32>),
    Float(Option<f64>),
}

impl OptionalScalar<'_> {
    pub fn is_valid(&self) -> bool {
        match self {
            OptionalScalar::Text(v) => v.is_some(),
            OptionalScalar::Bool(v) => v.is_some(),
            OptionalScalar::Int(v) => v.is_some(),
            OptionalScalar::NarrowInt(v) => v.is_some(),
            OptionalScalar::Float(v) => v.is_some(),
        }
    }
}

/// A value with an explicit validity flag. When `valid` is false, `inner`
/// is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Nullable<T> {
    pub valid: bool,
    pub inner: T,
}

pub type NullString = Nullable<String>;
pub type NullBool = Nullable<bool>;
pub type NullInt32 = Nullable<i32>;
pub type NullInt64 = Nullable<i64>;
pub type NullFloat64 = Nullable<f64>;

impl<T> Nullable<T> {
    /// A valid value
    pub fn new(inner: T) -> Self {
        Self { valid: true, inner }
    }

    /// The inner value when valid
    pub fn get(&self) -> Option<&T> {
        self.valid.then_some(&self.inner)
    }

    pub fn into_option(self) -> Option<T> {
        self.valid.then_some(self.inner)
    }
}

impl<T: Default> Nullable<T> {
    /// An invalid value
    pub fn null() -> Self {
        Self {
            valid: false,
            inner: T::default(),
        }
    }
}

impl<T: Default> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => Self::new(inner),
            None => Self::null(),
        }
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for String {}
    impl Sealed for bool {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
}

/// Inner types a nullable wrapper may carry
pub trait NullableScalar: private::Sealed {
    fn optional(value: Option<&Self>) -> OptionalScalar<'_>;
}

impl NullableScalar for String {
    fn optional(value: Option<&Self>) -> OptionalScalar<'_> {
        OptionalScalar::Text(value.map(String::as_str))
    }
}

impl NullableScalar for bool {
    fn optional(value: Option<&Self>) -> OptionalScalar<'_> {
        OptionalScalar::Bool(value.copied())
    }
}

impl NullableScalar for i32 {
    fn optional(value: Option<&Self>) -> OptionalScalar<'_> {
        OptionalScalar::NarrowInt(value.copied())
    }
}

impl NullableScalar for i64 {
    fn optional(value: Option<&Self>) -> OptionalScalar<'_> {
        OptionalScalar::Int(value.copied())
    }
}

impl NullableScalar for f64 {
    fn optional(value: Option<&Self>) -> OptionalScalar<'_> {
        OptionalScalar::Float(value.copied())
    }
}

impl<T: NullableScalar> Reflect for Nullable<T> {
    fn as_nullable(&self) -> Option<OptionalScalar<'_>> {
        Some(T::optional(self.get()))
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Other
    }
}

impl<T: NullableScalar> Reflect for Option<T> {
    fn as_nullable(&self) -> Option<OptionalScalar<'_>> {
        Some(T::optional(self.as_ref()))
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_ignores_inner() {
        let n = Nullable {
            valid: false,
            inner: String::from("stale"),
        };
        assert_eq!(n.get(), None);
        assert_eq!(n.as_nullable(), Some(OptionalScalar::Text(None)));
    }

    #[test]
    fn test_families_share_a_view() {
        let sql_style = NullInt64::new(12);
        let option_style: Option<i64> = Some(12);
        assert_eq!(sql_style.as_nullable(), option_style.as_nullable());

        let none: Option<f64> = None;
        assert_eq!(
            NullFloat64::null().as_nullable(),
            none.as_nullable()
        );
    }

    #[test]
    fn test_narrow_int() {
        assert_eq!(
            Some(5i32).as_nullable(),
            Some(OptionalScalar::NarrowInt(Some(5)))
        );
        assert!(!NullInt32::null().as_nullable().unwrap().is_valid());
    }

    #[test]
    fn test_from_option() {
        let n: NullBool = Some(true).into();
        assert!(n.valid);
        assert_eq!(n.into_option(), Some(true));

        let n: NullString = None.into();
        assert!(!n.valid);
    }

    #[test]
    fn test_serde_shape() {
        let n = NullInt64::new(3);
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, r#"{"valid":true,"inner":3}"#);
    }
}
