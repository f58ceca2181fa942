// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Contract with the external components library.
//!
//! Parsing, conversion, the scene graph and rendering all live in the
//! external library. The viewer only reaches it through these traits:
//! load a buffer, dispose a model, export a model as fragments and move
//! the camera. Everything runs on one thread, so the futures returned by
//! the async methods are not required to be `Send`.

#![allow(async_fn_in_trait)]

use crate::session::FragmentBuffer;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier the external library uses to address a loaded model
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(String);

impl ModelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the IFC parser finds its WASM support files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasmLocation {
    pub path: String,
    pub absolute: bool,
}

/// Camera eye and look-at target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub eye: [f64; 3],
    pub target: [f64; 3],
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            eye: [18.0, 12.0, 18.0],
            target: [0.0, 0.0, 0.0],
        }
    }
}

/// The fragments runtime: owns every model attached to the scene.
pub trait FragmentsRuntime {
    /// Load a fragment buffer and attach the resulting model to the scene.
    async fn load(&self, buffer: &FragmentBuffer, id: &ModelId) -> Result<()>;

    /// Identifiers of all models currently held by the runtime.
    fn resident(&self) -> Vec<ModelId>;

    /// Remove a model's object from the scene. Unknown ids are ignored.
    fn detach(&self, id: &ModelId);

    /// Release a model and its worker-side resources.
    async fn dispose(&self, id: &ModelId) -> Result<()>;
}

/// IFC parser entry point.
pub trait IfcLoader {
    type Model: IfcModel;

    /// Point the parser at its WASM support files.
    async fn configure(&self, wasm: &WasmLocation) -> Result<()>;

    /// Parse an IFC buffer into a model registered under `id`.
    async fn load(&self, bytes: &[u8], id: &ModelId) -> Result<Self::Model>;
}

/// A model produced by the IFC loader.
pub trait IfcModel {
    fn id(&self) -> &ModelId;

    /// Export the model in fragment format.
    async fn fragment_buffer(&self) -> Result<FragmentBuffer>;
}

/// Camera controller.
pub trait CameraControls {
    fn look_at(&self, pose: &CameraPose, animate: bool);
}

/// A file handed to the viewer by the picker or a drop.
pub trait SourceFile {
    fn name(&self) -> String;

    async fn read(&self) -> Result<Vec<u8>>;
}
