// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # IFC Lab Core
//!
//! Platform-independent half of the IFC Lab viewer: loads `.ifc` and `.frag`
//! files through an external components library, converts IFC models to
//! fragments and keeps the result ready for download.
//!
//! ## Overview
//!
//! - **Load orchestration**: [`Viewer`] routes files by extension and runs the
//!   clear → load → (convert → dispose → reload) sequence
//! - **Session state**: the last fragment buffer and its download name
//! - **Presentation**: overlay, status line and stat cards through [`View`]
//! - **Controls**: fullscreen with CSS fallback, help card placement
//!
//! The external library is reached only through the traits in [`library`];
//! the browser shell implements them on top of wasm-bindgen.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ifc_lab_core::{Viewer, ViewerConfig, LoadOutcome};
//!
//! let viewer = Viewer::new(fragments, ifc_loader, camera, view, ViewerConfig::default());
//! viewer.start();
//!
//! match viewer.handle_files(picked_files).await {
//!     LoadOutcome::Loaded(kind) => println!("loaded {kind:?}"),
//!     other => println!("nothing loaded: {other:?}"),
//! }
//! viewer.download();
//! ```

pub mod config;
pub mod error;
pub mod file_kind;
pub mod fullscreen;
pub mod help;
pub mod library;
pub mod markup;
pub mod messages;
pub mod presentation;
pub mod session;
pub mod viewer;

pub use config::{Features, ViewerConfig};
pub use error::{Error, Result};
pub use file_kind::{fragment_download_name, FileKind};
pub use fullscreen::{FullscreenController, FullscreenHost, FullscreenMode};
pub use help::{
    default_cards, place_card, CardPosition, HelpCard, HelpOverlay, Placement, Point, Rect, Size,
};
pub use library::{
    CameraControls, CameraPose, FragmentsRuntime, IfcLoader, IfcModel, ModelId, SourceFile,
    WasmLocation,
};
pub use messages::{Locale, Messages};
pub use presentation::{Overlay, Stats, View};
pub use session::{FragmentBuffer, Session, SourceKind, DEFAULT_DOWNLOAD_NAME};
pub use viewer::{LoadOutcome, Viewer, ViewerEvent};
