//! Runtime view of a value, consumed by the dispatch chain.
//!
//! A type describes itself through capability accessors (`as_temporal`,
//! `as_display`, `as_nullable`) and through its underlying [`Kind`]. The
//! accessors default to `None` so most impls only provide `kind`.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, TimeZone};

use crate::nullable::OptionalScalar;

/// A value the projector can inspect at runtime
pub trait Reflect {
    /// Concrete type name, used in logs and errors
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// The native date-time, only for the exact date-time type
    fn as_temporal(&self) -> Option<NaiveDateTime> {
        None
    }

    /// Human-readable rendering, for types that opt into it
    fn as_display(&self) -> Option<&dyn fmt::Display> {
        None
    }

    /// Optional-scalar view for nullable wrappers
    fn as_nullable(&self) -> Option<OptionalScalar<'_>> {
        None
    }

    /// Underlying kind, consulted after every capability check fails
    fn kind(&self) -> Kind<'_>;
}

/// Underlying shape of a value
#[derive(Clone, Copy)]
pub enum Kind<'a> {
    Text(&'a str),
    /// Any signed integer width
    Int(i64),
    /// Any floating-point width
    Float(f64),
    Bool(bool),
    /// Unsigned integers are not a native cell kind
    Unsigned(u64),
    /// A dynamic value wrapping another one
    Boxed(&'a dyn Reflect),
    Sequence(&'a dyn Sequence),
    Record(&'a dyn Record),
    Other,
}

impl Kind<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Text(_) => "text",
            Kind::Int(_) => "int",
            Kind::Float(_) => "float",
            Kind::Bool(_) => "bool",
            Kind::Unsigned(_) => "unsigned",
            Kind::Boxed(_) => "boxed",
            Kind::Sequence(_) => "sequence",
            Kind::Record(_) => "record",
            Kind::Other => "other",
        }
    }
}

impl fmt::Debug for Kind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Kind::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Kind::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Kind::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Kind::Unsigned(u) => f.debug_tuple("Unsigned").field(u).finish(),
            Kind::Boxed(inner) => f.debug_tuple("Boxed").field(&inner.type_name()).finish(),
            Kind::Sequence(seq) => f.debug_struct("Sequence").field("len", &seq.len()).finish(),
            Kind::Record(rec) => f
                .debug_struct("Record")
                .field("fields", &rec.field_count())
                .finish(),
            Kind::Other => f.write_str("Other"),
        }
    }
}

/// Positional access to an ordered collection
pub trait Sequence {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect>;
}

/// A record field: declared name, column tag, and value
#[derive(Clone, Copy)]
pub struct Field<'a> {
    pub name: &'static str,
    /// Column index as text, or the skip marker
    pub tag: &'static str,
    pub value: &'a dyn Reflect,
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("type", &self.value.type_name())
            .finish()
    }
}

/// Fields of a record in declaration order
///
/// Usually implemented with [`impl_record!`](crate::impl_record).
pub trait Record {
    fn fields(&self) -> Vec<Field<'_>>;

    fn field_count(&self) -> usize {
        self.fields().len()
    }
}

// Scalars

impl Reflect for String {
    fn kind(&self) -> Kind<'_> {
        Kind::Text(self)
    }
}

impl Reflect for &str {
    fn kind(&self) -> Kind<'_> {
        Kind::Text(self)
    }
}

impl Reflect for bool {
    fn kind(&self) -> Kind<'_> {
        Kind::Bool(*self)
    }
}

macro_rules! reflect_kind {
    ($variant:ident as $wide:ty => $($ty:ty),+) => {$(
        impl Reflect for $ty {
            fn kind(&self) -> Kind<'_> {
                Kind::$variant(*self as $wide)
            }
        }
    )+};
}

reflect_kind!(Int as i64 => i8, i16, i32, i64, isize);
reflect_kind!(Float as f64 => f32, f64);
reflect_kind!(Unsigned as u64 => u8, u16, u32, u64, usize);

impl Reflect for () {
    fn kind(&self) -> Kind<'_> {
        Kind::Other
    }
}

// Dynamic wrappers. Capabilities see through to the inner value; the kind
// stays `Boxed` so only sequence projection unwraps plain scalars.

impl Reflect for Box<dyn Reflect> {
    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn as_temporal(&self) -> Option<NaiveDateTime> {
        (**self).as_temporal()
    }

    fn as_display(&self) -> Option<&dyn fmt::Display> {
        (**self).as_display()
    }

    fn as_nullable(&self) -> Option<OptionalScalar<'_>> {
        (**self).as_nullable()
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Boxed(&**self)
    }
}

impl<'r> Reflect for &'r dyn Reflect {
    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn as_temporal(&self) -> Option<NaiveDateTime> {
        (**self).as_temporal()
    }

    fn as_display(&self) -> Option<&dyn fmt::Display> {
        (**self).as_display()
    }

    fn as_nullable(&self) -> Option<OptionalScalar<'_>> {
        (**self).as_nullable()
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Boxed(*self)
    }
}

// Collections

impl<T: Reflect> Sequence for Vec<T> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|v| v as &dyn Reflect)
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn kind(&self) -> Kind<'_> {
        Kind::Sequence(self)
    }
}

impl<T: Reflect, const N: usize> Sequence for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|v| v as &dyn Reflect)
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn kind(&self) -> Kind<'_> {
        Kind::Sequence(self)
    }
}

impl<T: Reflect> Sequence for &[T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(|v| v as &dyn Reflect)
    }
}

impl<T: Reflect> Reflect for &[T] {
    fn kind(&self) -> Kind<'_> {
        Kind::Sequence(self)
    }
}

// Date and time

impl Reflect for NaiveDateTime {
    fn as_temporal(&self) -> Option<NaiveDateTime> {
        Some(*self)
    }

    fn as_display(&self) -> Option<&dyn fmt::Display> {
        Some(self)
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Other
    }
}

/// Zoned date-times are not the native date-time type; they render as text.
impl<Tz: TimeZone> Reflect for DateTime<Tz>
where
    Tz::Offset: fmt::Display,
{
    fn as_display(&self) -> Option<&dyn fmt::Display> {
        Some(self)
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Other
    }
}

crate::impl_display_reflect!(chrono::NaiveDate, chrono::NaiveTime);
