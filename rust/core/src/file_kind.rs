// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! File classification by extension

const FRAGMENT_SUFFIX: &str = ".frag";
const IFC_SUFFIX: &str = ".ifc";

/// Kind of file the viewer knows how to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Fragment,
    Ifc,
}

impl FileKind {
    /// Classify a file by its (case-insensitive) suffix
    pub fn classify(name: &str) -> Option<Self> {
        if has_suffix_ignore_case(name, FRAGMENT_SUFFIX) {
            Some(FileKind::Fragment)
        } else if has_suffix_ignore_case(name, IFC_SUFFIX) {
            Some(FileKind::Ifc)
        } else {
            None
        }
    }

    /// Value for the picker's `accept` attribute
    pub fn accept_attribute() -> String {
        format!("{IFC_SUFFIX},{FRAGMENT_SUFFIX}")
    }
}

/// Download name for the fragments converted from `name`.
///
/// A trailing `.ifc` (any case) becomes `.frag`; the base name keeps its case.
/// Names without that suffix are returned unchanged.
pub fn fragment_download_name(name: &str) -> String {
    if has_suffix_ignore_case(name, IFC_SUFFIX) {
        let base = &name[..name.len() - IFC_SUFFIX.len()];
        format!("{base}{FRAGMENT_SUFFIX}")
    } else {
        name.to_string()
    }
}

fn has_suffix_ignore_case(name: &str, suffix: &str) -> bool {
    let (name, suffix) = (name.as_bytes(), suffix.as_bytes());
    name.len() >= suffix.len() && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}
