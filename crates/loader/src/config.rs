// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	env,
	path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::platform::Artifact;

/// Overrides the directory the native library is loaded from
pub const LIB_DIR_ENV: &str = "EXCELIZE_LIB_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
	/// Directory holding the platform artifacts; the directory of the running
	/// executable when unset
	pub search_dir: Option<PathBuf>,
	/// Base name the artifact file name is built from
	pub library_name: String,
}

impl Default for LoaderConfig {
	fn default() -> Self {
		Self {
			search_dir: None,
			library_name: "libexcelize".to_string(),
		}
	}
}

impl LoaderConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.search_dir = Some(dir.into());
		self
	}

	pub fn library_name(mut self, name: impl Into<String>) -> Self {
		self.library_name = name.into();
		self
	}

	/// Apply `EXCELIZE_LIB_DIR` when it is set to a non-empty value
	pub fn with_env(self) -> Self {
		match env::var_os(LIB_DIR_ENV) {
			Some(dir) if !dir.is_empty() => self.search_dir(dir),
			_ => self,
		}
	}

	/// Directory the artifact is looked up in
	pub fn dir(&self) -> PathBuf {
		if let Some(dir) = &self.search_dir {
			return dir.clone();
		}
		env::current_exe()
			.ok()
			.and_then(|exe| exe.parent().map(Path::to_path_buf))
			.unwrap_or_else(|| PathBuf::from("."))
	}

	/// Full path of the artifact for this configuration
	pub fn path_for(&self, artifact: &Artifact) -> PathBuf {
		self.dir().join(artifact.file_name(&self.library_name))
	}
}
