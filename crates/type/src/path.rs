// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
	Field(&'static str),
	Index(usize),
}

/// Location of a value inside a nested record, e.g. `Style.border[2].color`.
///
/// The marshaller pushes a segment before descending and pops it on the way
/// back up, so the path at any error site names the offending field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldPath {
	root: &'static str,
	segments: Vec<Segment>,
}

impl FieldPath {
	pub fn root(name: &'static str) -> Self {
		Self {
			root: name,
			segments: Vec::new(),
		}
	}

	pub fn push_field(&mut self, name: &'static str) {
		self.segments.push(Segment::Field(name));
	}

	pub fn push_index(&mut self, index: usize) {
		self.segments.push(Segment::Index(index));
	}

	pub fn pop(&mut self) {
		self.segments.pop();
	}

	pub fn depth(&self) -> usize {
		self.segments.len()
	}
}

impl Display for FieldPath {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.root)?;
		for segment in &self.segments {
			match segment {
				Segment::Field(name) => write!(f, ".{name}")?,
				Segment::Index(index) => write!(f, "[{index}]")?,
			}
		}
		Ok(())
	}
}

#[cfg(test)]
pub mod tests {
	use super::FieldPath;

	#[test]
	fn test_root_only() {
		assert_eq!(FieldPath::root("Style").to_string(), "Style");
	}

	#[test]
	fn test_nested() {
		let mut path = FieldPath::root("Style");
		path.push_field("border");
		path.push_index(2);
		path.push_field("color");
		assert_eq!(path.to_string(), "Style.border[2].color");
		assert_eq!(path.depth(), 3);

		path.pop();
		path.pop();
		assert_eq!(path.to_string(), "Style.border");
	}
}
