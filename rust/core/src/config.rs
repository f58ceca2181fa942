// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Viewer configuration.
//!
//! Every field has a default so hosts only pass what they change:
//!
//! ```json
//! { "basePath": "/viewer/", "locale": "en", "features": { "help": false } }
//! ```

use crate::library::{CameraPose, WasmLocation};
use crate::messages::Locale;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Viewer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerConfig {
    /// Deployed base path the worker and WASM assets are resolved against.
    pub base_path: String,
    /// Background worker script, relative to the base path.
    pub worker_file: String,
    /// Directory holding the IFC parser's WASM files, relative to the base path.
    pub wasm_dir: String,
    /// UI language.
    pub locale: Locale,
    /// Initial state of the auto-convert option.
    pub auto_convert: bool,
    /// Camera pose used at startup and by "reset view".
    pub home: CameraPose,
    /// Distance kept between help cards and the viewport edge, in CSS pixels.
    pub help_margin: f64,
    /// Optional UI affordances.
    pub features: Features,
}

/// Optional parts of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Features {
    pub auto_convert_toggle: bool,
    pub drop_zone: bool,
    pub fullscreen: bool,
    pub help: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            auto_convert_toggle: true,
            drop_zone: true,
            fullscreen: true,
            help: true,
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_path: "/".into(),
            worker_file: "worker.mjs".into(),
            wasm_dir: "wasm/".into(),
            locale: Locale::default(),
            auto_convert: true,
            home: CameraPose::default(),
            help_margin: 12.0,
            features: Features::default(),
        }
    }
}

impl ViewerConfig {
    /// Parse a JSON configuration; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// URL of the fragments background worker.
    pub fn worker_url(&self) -> String {
        join_base(&self.base_path, &self.worker_file)
    }

    /// Location of the IFC parser's WASM files.
    pub fn wasm_location(&self) -> WasmLocation {
        let mut path = join_base(&self.base_path, &self.wasm_dir);
        if !path.ends_with('/') {
            path.push('/');
        }
        WasmLocation {
            path,
            absolute: true,
        }
    }
}

fn join_base(base: &str, relative: &str) -> String {
    let relative = relative.trim_start_matches("./").trim_start_matches('/');
    let mut joined = String::with_capacity(base.len() + relative.len() + 1);
    joined.push_str(base);
    if !joined.ends_with('/') {
        joined.push('/');
    }
    joined.push_str(relative);
    joined
}
