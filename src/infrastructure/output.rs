// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Destinations for rendered manifests

use crate::shared::error::RenderError;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Where rendered documents end up.
pub trait OutputSink {
    fn create_dir_all(&self, dir: &Path) -> Result<(), RenderError>;

    /// Write `content` to `path`, replacing any existing file.
    fn write(&self, path: &Path, content: &str) -> Result<(), RenderError>;
}

/// Writes to the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskSink;

impl OutputSink for DiskSink {
    fn create_dir_all(&self, dir: &Path) -> Result<(), RenderError> {
        fs::create_dir_all(dir).map_err(|e| RenderError::write_failed(dir, e))
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), RenderError> {
        fs::write(path, content).map_err(|e| RenderError::write_failed(path, e))
    }
}

/// In-memory sink. Writes fail unless the parent directory was created first,
/// matching the disk sink.
#[derive(Debug, Default)]
pub struct MemorySink {
    dirs: RefCell<BTreeSet<PathBuf>>,
    files: RefCell<BTreeMap<PathBuf, String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    pub fn files(&self) -> BTreeMap<PathBuf, String> {
        self.files.borrow().clone()
    }

    pub fn has_dir(&self, dir: impl AsRef<Path>) -> bool {
        self.dirs.borrow().contains(dir.as_ref())
    }
}

impl OutputSink for MemorySink {
    fn create_dir_all(&self, dir: &Path) -> Result<(), RenderError> {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in dir.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), RenderError> {
        let parent_exists = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.has_dir(parent),
            _ => true,
        };
        if !parent_exists {
            return Err(RenderError::write_failed(path, "parent directory does not exist"));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
