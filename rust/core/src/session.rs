// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-viewer session state: the last fragment buffer and its names.

use crate::messages::Messages;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Download name used while no fragments are available.
pub const DEFAULT_DOWNLOAD_NAME: &str = "model.frag";

/// Immutable fragment-format bytes.
///
/// Cloning shares the allocation; a new load replaces the whole buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct FragmentBuffer(Rc<[u8]>);

impl FragmentBuffer {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Whether two handles point at the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Vec<u8>> for FragmentBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into())
    }
}

impl Deref for FragmentBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for FragmentBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FragmentBuffer({} bytes)", self.0.len())
    }
}

/// Format of the last loaded source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Fragment,
    Ifc,
}

impl SourceKind {
    pub fn label(self, messages: &Messages) -> &'static str {
        match self {
            SourceKind::Fragment => messages.source_fragment,
            SourceKind::Ifc => messages.source_ifc,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    fragments: Option<FragmentBuffer>,
    download_name: String,
    source: Option<(String, SourceKind)>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            fragments: None,
            download_name: DEFAULT_DOWNLOAD_NAME.to_string(),
            source: None,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fragments(&self) -> Option<&FragmentBuffer> {
        self.fragments.as_ref()
    }

    pub fn download_name(&self) -> &str {
        &self.download_name
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source.as_ref().map(|(name, _)| name.as_str())
    }

    pub fn source_kind(&self) -> Option<SourceKind> {
        self.source.as_ref().map(|(_, kind)| *kind)
    }

    /// Replace the fragment buffer and the name it downloads as.
    pub fn store_fragments(&mut self, buffer: FragmentBuffer, download_name: impl Into<String>) {
        self.fragments = Some(buffer);
        self.download_name = download_name.into();
    }

    pub fn set_source(&mut self, name: impl Into<String>, kind: SourceKind) {
        self.source = Some((name.into(), kind));
    }

    /// Drop the fragment buffer. The source display is left as is.
    pub fn clear_fragments(&mut self) {
        self.fragments = None;
        self.download_name = DEFAULT_DOWNLOAD_NAME.to_string();
    }
}
