/// Implement [`Record`](crate::Record) and [`Reflect`](crate::Reflect) for a
/// struct by listing its fields with their column tags.
///
/// ```
/// use rowcast::{impl_record, project_record};
/// use rowcast_core::Row;
///
/// struct Person {
///     name: String,
///     age: i64,
///     secret: String,
/// }
///
/// impl_record!(Person {
///     name => "0",
///     age => "1",
///     secret => "-",
/// });
///
/// let person = Person { name: "Ann".into(), age: 30, secret: "x".into() };
/// let mut row = Row::new();
/// assert_eq!(project_record(&mut row, &person, -1), Ok(2));
/// assert_eq!(row.value(0).as_text(), "Ann");
/// ```
#[macro_export]
macro_rules! impl_record {
    ($ty:ty { $($field:ident => $tag:literal),* $(,)? }) => {
        impl $crate::Record for $ty {
            fn fields(&self) -> ::std::vec::Vec<$crate::Field<'_>> {
                ::std::vec![
                    $($crate::Field {
                        name: ::std::stringify!($field),
                        tag: $tag,
                        value: &self.$field,
                    },)*
                ]
            }
        }

        impl $crate::Reflect for $ty {
            fn kind(&self) -> $crate::Kind<'_> {
                $crate::Kind::Record(self)
            }
        }
    };
}

/// Implement [`Reflect`](crate::Reflect) for types that render through
/// `Display`.
#[macro_export]
macro_rules! impl_display_reflect {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::Reflect for $ty {
            fn as_display(&self) -> ::std::option::Option<&dyn ::std::fmt::Display> {
                ::std::option::Option::Some(self)
            }

            fn kind(&self) -> $crate::Kind<'_> {
                $crate::Kind::Other
            }
        }
    )+};
}
