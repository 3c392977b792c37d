// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Declare a host struct together with its foreign layout
///
/// Each field carries the [`FieldKind`](crate::FieldKind) it occupies in the
/// foreign block. Field order is the layout order.
///
/// # Example
///
/// ```
/// use excelize_marshal::{Element, FieldKind, HostRecord, Primitive, host_record};
///
/// host_record! {
/// 	pub struct Border {
/// 		pub r#type: String => FieldKind::CString,
/// 		pub color: String => FieldKind::CString,
/// 		pub style: i64 => FieldKind::Scalar(Primitive::I64),
/// 	}
/// }
///
/// host_record! {
/// 	pub struct Style {
/// 		pub border: Vec<Border> => FieldKind::Sequence(Element::Record(Border::descriptor())),
/// 		pub custom_num_fmt: Option<String> => FieldKind::CString,
/// 	}
/// }
///
/// assert_eq!(Style::descriptor().len(), 2);
/// ```
#[macro_export]
macro_rules! host_record {
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident {
			$(
				$(#[$field_meta:meta])*
				$field_vis:vis $field:ident : $ty:ty => $kind:expr
			),* $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Default, PartialEq)]
		$vis struct $name {
			$(
				$(#[$field_meta])*
				$field_vis $field: $ty,
			)*
		}

		impl $crate::ToValue for $name {
			fn to_value(&self) -> $crate::Value {
				$crate::Value::Record(vec![$($crate::ToValue::to_value(&self.$field)),*])
			}
		}

		impl $crate::FromValue for $name {
			#[allow(unused_mut)]
			fn from_value(value: $crate::Value, path: &mut $crate::FieldPath) -> $crate::Result<Self> {
				if value.is_none() {
					return Ok(<Self as Default>::default());
				}
				let count = <Self as $crate::HostRecord>::descriptor().len();
				let mut fields = $crate::__private::expect_record(value, path, stringify!($name), count)?.into_iter();
				$(
					path.push_field($crate::__private::field_name(stringify!($field)));
					let $field = <$ty as $crate::FromValue>::from_value(
						fields.next().unwrap_or($crate::Value::None),
						path,
					)?;
					path.pop();
				)*
				Ok(Self { $($field),* })
			}
		}

		impl $crate::HostRecord for $name {
			fn descriptor() -> &'static $crate::Descriptor {
				static DESCRIPTOR: $crate::__private::Lazy<$crate::Descriptor> = $crate::__private::Lazy::new(|| {
					$crate::Descriptor::new(
						stringify!($name),
						vec![$($crate::Field::new($crate::__private::field_name(stringify!($field)), $kind)),*],
					)
				});
				&DESCRIPTOR
			}
		}
	};
}
