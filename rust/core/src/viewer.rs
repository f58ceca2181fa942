// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Load orchestration.
//!
//! [`Viewer`] takes a picked or dropped file, routes it by extension and
//! drives the external library through the load sequence:
//!
//! - `.frag`: clear the scene, load the buffer, keep it for download.
//! - `.ifc`: clear the scene, parse, and (with auto-convert on) export the
//!   parsed model as fragments, dispose it and reload the fragments so the
//!   resident model is always fragment-backed.
//!
//! The session is only written from here, between suspension points; no
//! borrow of it is held across an `await`.

use crate::config::ViewerConfig;
use crate::file_kind::{fragment_download_name, FileKind};
use crate::library::{CameraControls, FragmentsRuntime, IfcLoader, IfcModel, ModelId, SourceFile};
use crate::messages::Messages;
use crate::presentation::{Overlay, Stats, View};
use crate::session::{FragmentBuffer, Session, SourceKind};
use crate::Result;
use std::cell::{Cell, Ref, RefCell};

/// Result of handing a file selection to the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The selection was empty
    Ignored,
    /// Another load was still running; nothing was touched
    Busy,
    /// Unsupported extension; nothing was touched
    Rejected,
    Loaded(FileKind),
    Failed,
}

/// User intents the page forwards to the viewer
#[derive(Debug)]
pub enum ViewerEvent<S> {
    FilesSelected(Vec<S>),
    DownloadRequested,
    ResetRequested,
}

pub struct Viewer<F, L, C, V> {
    fragments: F,
    ifc: L,
    camera: C,
    view: V,
    config: ViewerConfig,
    messages: &'static Messages,
    session: RefCell<Session>,
    loading: Cell<bool>,
    ifc_configured: Cell<bool>,
    next_model: Cell<u64>,
}

/// Clears the loading flag when a load finishes, however it finishes.
struct LoadingGuard<'a>(&'a Cell<bool>);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<F, L, C, V> Viewer<F, L, C, V>
where
    F: FragmentsRuntime,
    L: IfcLoader,
    C: CameraControls,
    V: View,
{
    pub fn new(fragments: F, ifc: L, camera: C, view: V, config: ViewerConfig) -> Self {
        let messages = config.locale.messages();
        Self {
            fragments,
            ifc,
            camera,
            view,
            config,
            messages,
            session: RefCell::new(Session::new()),
            loading: Cell::new(false),
            ifc_configured: Cell::new(false),
            next_model: Cell::new(0),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn session(&self) -> Ref<'_, Session> {
        self.session.borrow()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Put the page in its initial "waiting for a file" state.
    pub fn start(&self) {
        self.view.show_overlay(&Overlay::busy(self.messages.overlay_waiting));
        self.view.show_status(self.messages.no_file);
        self.refresh_stats();
    }

    pub async fn dispatch<S: SourceFile>(&self, event: ViewerEvent<S>) -> Option<LoadOutcome> {
        match event {
            ViewerEvent::FilesSelected(files) => Some(self.handle_files(files).await),
            ViewerEvent::DownloadRequested => {
                self.download();
                None
            }
            ViewerEvent::ResetRequested => {
                self.reset_view();
                None
            }
        }
    }

    /// Load the first file of a selection; the rest is ignored.
    pub async fn handle_files<S, I>(&self, files: I) -> LoadOutcome
    where
        S: SourceFile,
        I: IntoIterator<Item = S>,
    {
        match files.into_iter().next() {
            Some(file) => self.handle_file(file).await,
            None => LoadOutcome::Ignored,
        }
    }

    pub async fn handle_file<S: SourceFile>(&self, file: S) -> LoadOutcome {
        let name = file.name();

        let Some(_guard) = self.begin_load() else {
            tracing::warn!(file = %name, "load requested while another load is running");
            self.view.show_status(self.messages.busy);
            return LoadOutcome::Busy;
        };

        let Some(kind) = FileKind::classify(&name) else {
            tracing::debug!(file = %name, "unsupported file type");
            self.view.show_status(self.messages.unknown_type);
            return LoadOutcome::Rejected;
        };

        let result = match kind {
            FileKind::Fragment => self.load_fragment_file(&file, &name).await,
            FileKind::Ifc => self.load_ifc_file(&file, &name).await,
        };

        match result {
            Ok(()) => {
                tracing::info!(file = %name, ?kind, "file loaded");
                LoadOutcome::Loaded(kind)
            }
            Err(err) => {
                tracing::error!(file = %name, error = %err, "failed to load file");
                self.session.borrow_mut().clear_fragments();
                self.refresh_stats();
                self.view.show_status(self.messages.load_failed);
                self.view.show_overlay(&Overlay::idle(self.messages.overlay_failed));
                LoadOutcome::Failed
            }
        }
    }

    /// Remove every model on request. Refused while a load is running.
    pub async fn clear(&self) -> Result<bool> {
        let Some(_guard) = self.begin_load() else {
            tracing::warn!("clear requested while a load is running");
            return Ok(false);
        };
        self.clear_models().await?;
        Ok(true)
    }

    /// Offer the stored fragments as a download. Returns whether a save
    /// was started.
    pub fn download(&self) -> bool {
        let session = self.session.borrow();
        let Some(buffer) = session.fragments() else {
            return false;
        };

        match self.view.save_file(session.download_name(), buffer.as_bytes()) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(error = %err, "download failed");
                false
            }
        }
    }

    pub fn reset_view(&self) {
        self.camera.look_at(&self.config.home, true);
    }

    fn begin_load(&self) -> Option<LoadingGuard<'_>> {
        if self.loading.replace(true) {
            None
        } else {
            Some(LoadingGuard(&self.loading))
        }
    }

    async fn clear_models(&self) -> Result<()> {
        for id in self.fragments.resident() {
            self.fragments.detach(&id);
            self.fragments.dispose(&id).await?;
            tracing::debug!(model = %id, "model disposed");
        }
        self.session.borrow_mut().clear_fragments();
        self.refresh_stats();
        Ok(())
    }

    async fn load_fragment_file<S: SourceFile>(&self, file: &S, name: &str) -> Result<()> {
        self.clear_models().await?;
        self.view
            .show_overlay(&Overlay::busy(self.messages.overlay_fragment_loading));
        self.view.show_status(self.messages.fragment_loading);

        let buffer = FragmentBuffer::from(file.read().await?);
        self.load_fragment_buffer(&buffer, "frag").await?;

        {
            let mut session = self.session.borrow_mut();
            session.set_source(name, SourceKind::Fragment);
            session.store_fragments(buffer, name);
        }

        self.refresh_stats();
        self.view.show_status(self.messages.fragment_loaded);
        self.view
            .show_overlay(&Overlay::idle(self.messages.overlay_fragment_loaded));
        Ok(())
    }

    async fn load_ifc_file<S: SourceFile>(&self, file: &S, name: &str) -> Result<()> {
        self.clear_models().await?;
        self.view
            .show_overlay(&Overlay::busy(self.messages.overlay_ifc_loading));
        self.view.show_status(self.messages.ifc_loading);

        self.ensure_ifc_loader().await?;

        let bytes = file.read().await?;
        let id = self.next_model_id("ifc");
        let model = self.ifc.load(&bytes, &id).await?;

        self.session.borrow_mut().set_source(name, SourceKind::Ifc);
        self.refresh_stats();

        if !self.view.auto_convert_enabled() {
            self.view.show_status(self.messages.ifc_loaded_no_convert);
            self.view
                .show_overlay(&Overlay::idle(self.messages.overlay_ifc_loaded));
            return Ok(());
        }

        self.view.show_status(self.messages.ifc_converting);
        self.view
            .show_overlay(&Overlay::busy(self.messages.overlay_converting));

        let buffer = model.fragment_buffer().await?;
        self.session
            .borrow_mut()
            .store_fragments(buffer.clone(), fragment_download_name(name));

        self.fragments.detach(model.id());
        self.fragments.dispose(model.id()).await?;
        drop(model);

        self.load_fragment_buffer(&buffer, "ifc-frag").await?;

        self.refresh_stats();
        self.view.show_status(self.messages.ifc_converted);
        self.view
            .show_overlay(&Overlay::idle(self.messages.overlay_fragments_loaded));
        Ok(())
    }

    async fn ensure_ifc_loader(&self) -> Result<()> {
        if !self.ifc_configured.get() {
            self.ifc.configure(&self.config.wasm_location()).await?;
            self.ifc_configured.set(true);
        }
        Ok(())
    }

    async fn load_fragment_buffer(&self, buffer: &FragmentBuffer, prefix: &str) -> Result<()> {
        let id = self.next_model_id(prefix);
        tracing::debug!(model = %id, bytes = buffer.len(), "loading fragments");
        self.fragments.load(buffer, &id).await
    }

    fn next_model_id(&self, prefix: &str) -> ModelId {
        let seq = self.next_model.get() + 1;
        self.next_model.set(seq);
        ModelId::new(format!("{prefix}-{seq}"))
    }

    fn refresh_stats(&self) {
        let stats = Stats::from_session(&self.session.borrow(), self.messages);
        self.view.show_stats(&stats);
    }
}
