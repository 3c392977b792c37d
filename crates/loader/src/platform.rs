// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use crate::error::PlatformError;

/// What the resolver needs to know about the running process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostFacts {
	pub os: String,
	pub arch: String,
	/// `64bit` or `32bit`
	pub pointer_width: String,
}

impl HostFacts {
	pub fn new(os: impl Into<String>, arch: impl Into<String>, pointer_width: impl Into<String>) -> Self {
		Self {
			os: os.into(),
			arch: arch.into(),
			pointer_width: pointer_width.into(),
		}
	}

	pub fn current() -> Self {
		Self::new(std::env::consts::OS, std::env::consts::ARCH, PointerWidth::current().to_string())
	}
}

impl Display for HostFacts {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{} ({})", self.os, self.arch, self.pointer_width)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerWidth {
	Bits32,
	Bits64,
}

impl PointerWidth {
	pub fn current() -> Self {
		if cfg!(target_pointer_width = "64") {
			PointerWidth::Bits64
		} else {
			PointerWidth::Bits32
		}
	}

	pub fn parse(width: &str) -> Result<Self, PlatformError> {
		match width.trim().to_ascii_lowercase().as_str() {
			"64bit" => Ok(PointerWidth::Bits64),
			"32bit" => Ok(PointerWidth::Bits32),
			other => Err(PlatformError::UnsupportedPointerWidth(other.to_string())),
		}
	}
}

impl Display for PointerWidth {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			PointerWidth::Bits32 => f.write_str("32bit"),
			PointerWidth::Bits64 => f.write_str("64bit"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
	Linux,
	Darwin,
	Windows,
}

impl Os {
	fn parse(os: &str) -> Result<Self, PlatformError> {
		match os.trim().to_ascii_lowercase().as_str() {
			"linux" => Ok(Os::Linux),
			"macos" | "darwin" => Ok(Os::Darwin),
			"windows" => Ok(Os::Windows),
			other => Err(PlatformError::UnsupportedOs(other.to_string())),
		}
	}

	pub const fn token(&self) -> &'static str {
		match self {
			Os::Linux => "linux",
			Os::Darwin => "darwin",
			Os::Windows => "windows",
		}
	}

	pub const fn extension(&self) -> &'static str {
		match self {
			Os::Linux => "so",
			Os::Darwin => "dylib",
			Os::Windows => "dll",
		}
	}

	fn supports(&self, arch: Arch) -> bool {
		match self {
			Os::Linux => true,
			Os::Darwin => matches!(arch, Arch::Amd64 | Arch::Arm64),
			Os::Windows => matches!(arch, Arch::Amd64 | Arch::Arm64 | Arch::I386),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
	Amd64,
	Arm64,
	I386,
	Arm,
}

impl Arch {
	fn parse(arch: &str) -> Option<Self> {
		match arch.trim().to_ascii_lowercase().as_str() {
			"x86_64" | "amd64" => Some(Arch::Amd64),
			"aarch64" | "arm64" => Some(Arch::Arm64),
			"x86" | "i386" | "i686" => Some(Arch::I386),
			"arm" | "armv7l" | "armv6l" => Some(Arch::Arm),
			_ => None,
		}
	}

	pub const fn token(&self) -> &'static str {
		match self {
			Arch::Amd64 => "amd64",
			Arch::Arm64 => "arm64",
			Arch::I386 => "386",
			Arch::Arm => "arm",
		}
	}

	pub const fn pointer_width(&self) -> PointerWidth {
		match self {
			Arch::Amd64 | Arch::Arm64 => PointerWidth::Bits64,
			Arch::I386 | Arch::Arm => PointerWidth::Bits32,
		}
	}
}

/// The native artifact built for one platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artifact {
	pub os: Os,
	pub arch: Arch,
}

impl Artifact {
	/// File name of the artifact for a library base name, e.g.
	/// `libexcelize.arm64.darwin.dylib`
	pub fn file_name(&self, library_name: &str) -> String {
		format!("{library_name}.{}.{}.{}", self.arch.token(), self.os.token(), self.os.extension())
	}
}

impl Display for Artifact {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}-{}", self.arch.token(), self.os.token())
	}
}

/// Map host facts to the artifact shipped for them
pub fn resolve(facts: &HostFacts) -> Result<Artifact, PlatformError> {
	let os = Os::parse(&facts.os)?;
	let width = PointerWidth::parse(&facts.pointer_width)?;

	let unsupported = || PlatformError::UnsupportedArch {
		os: os.token().to_string(),
		arch: facts.arch.clone(),
	};

	let arch = Arch::parse(&facts.arch).ok_or_else(unsupported)?;
	if !os.supports(arch) {
		return Err(unsupported());
	}

	if arch.pointer_width() != width {
		return Err(PlatformError::PointerWidthMismatch {
			arch: facts.arch.clone(),
			width: width.to_string(),
		});
	}

	Ok(Artifact {
		os,
		arch,
	})
}

#[cfg(test)]
pub mod tests {
	mod resolve {
		use crate::{HostFacts, PlatformError, resolve};

		fn file(os: &str, arch: &str, width: &str) -> String {
			resolve(&HostFacts::new(os, arch, width)).unwrap().file_name("libexcelize")
		}

		#[test]
		fn test_linux() {
			assert_eq!(file("linux", "x86_64", "64bit"), "libexcelize.amd64.linux.so");
			assert_eq!(file("linux", "aarch64", "64bit"), "libexcelize.arm64.linux.so");
			assert_eq!(file("linux", "i686", "32bit"), "libexcelize.386.linux.so");
			assert_eq!(file("linux", "armv7l", "32bit"), "libexcelize.arm.linux.so");
		}

		#[test]
		fn test_darwin() {
			assert_eq!(file("macos", "arm64", "64bit"), "libexcelize.arm64.darwin.dylib");
			assert_eq!(file("Darwin", "x86_64", "64bit"), "libexcelize.amd64.darwin.dylib");
		}

		#[test]
		fn test_windows() {
			assert_eq!(file("windows", "amd64", "64bit"), "libexcelize.amd64.windows.dll");
			assert_eq!(file("windows", "x86", "32bit"), "libexcelize.386.windows.dll");
			assert_eq!(file("windows", "arm64", "64bit"), "libexcelize.arm64.windows.dll");
		}

		#[test]
		fn test_unknown_os() {
			let err = resolve(&HostFacts::new("plan9", "x86_64", "64bit")).unwrap_err();
			assert_eq!(err, PlatformError::UnsupportedOs("plan9".to_string()));
		}

		#[test]
		fn test_unknown_arch_is_distinct() {
			let err = resolve(&HostFacts::new("linux", "mips", "32bit")).unwrap_err();
			assert!(matches!(err, PlatformError::UnsupportedArch { .. }));
		}

		#[test]
		fn test_arch_not_shipped_for_os() {
			let err = resolve(&HostFacts::new("macos", "armv7l", "32bit")).unwrap_err();
			assert!(matches!(err, PlatformError::UnsupportedArch { .. }));
		}

		#[test]
		fn test_unknown_pointer_width() {
			let err = resolve(&HostFacts::new("linux", "x86_64", "128bit")).unwrap_err();
			assert_eq!(err, PlatformError::UnsupportedPointerWidth("128bit".to_string()));
		}

		#[test]
		fn test_pointer_width_mismatch() {
			let err = resolve(&HostFacts::new("linux", "x86_64", "32bit")).unwrap_err();
			assert!(matches!(err, PlatformError::PointerWidthMismatch { .. }));
		}

		#[test]
		fn test_current_host_formats() {
			let facts = HostFacts::current();
			assert!(facts.to_string().contains(&facts.arch));
		}
	}
}
