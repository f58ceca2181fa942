// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Load orchestration against an in-memory stand-in for the components library.

use ifc_lab_core::messages::DUTCH;
use ifc_lab_core::{
    CameraControls, CameraPose, Error, FileKind, FragmentBuffer, FragmentsRuntime, IfcLoader,
    IfcModel, LoadOutcome, ModelId, Overlay, Result, SourceFile, Stats, View, Viewer,
    ViewerConfig, ViewerEvent, WasmLocation, DEFAULT_DOWNLOAD_NAME,
};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

const CONVERTED_PREFIX: &[u8] = b"FRAG:";

#[derive(Default)]
struct Scene {
    resident: BTreeMap<ModelId, Vec<u8>>,
    attached: BTreeSet<ModelId>,
    disposed: Vec<ModelId>,
    configured: Vec<WasmLocation>,
    camera_moves: Vec<(CameraPose, bool)>,
    fail_ifc_parse: bool,
    fail_fragments_load: bool,
}

type Shared = Rc<RefCell<Scene>>;

struct FakeFragments(Shared);

impl FragmentsRuntime for FakeFragments {
    async fn load(&self, buffer: &FragmentBuffer, id: &ModelId) -> Result<()> {
        let mut scene = self.0.borrow_mut();
        if scene.fail_fragments_load {
            return Err(Error::Library("worker crashed".into()));
        }
        scene.resident.insert(id.clone(), buffer.to_vec());
        scene.attached.insert(id.clone());
        Ok(())
    }

    fn resident(&self) -> Vec<ModelId> {
        self.0.borrow().resident.keys().cloned().collect()
    }

    fn detach(&self, id: &ModelId) {
        self.0.borrow_mut().attached.remove(id);
    }

    async fn dispose(&self, id: &ModelId) -> Result<()> {
        let mut scene = self.0.borrow_mut();
        scene.resident.remove(id);
        scene.disposed.push(id.clone());
        Ok(())
    }
}

struct FakeIfc(Shared);

struct FakeModel {
    id: ModelId,
    source: Vec<u8>,
}

impl IfcLoader for FakeIfc {
    type Model = FakeModel;

    async fn configure(&self, wasm: &WasmLocation) -> Result<()> {
        self.0.borrow_mut().configured.push(wasm.clone());
        Ok(())
    }

    async fn load(&self, bytes: &[u8], id: &ModelId) -> Result<FakeModel> {
        let mut scene = self.0.borrow_mut();
        if scene.fail_ifc_parse {
            return Err(Error::Library("unexpected token at line 1".into()));
        }
        scene.resident.insert(id.clone(), bytes.to_vec());
        scene.attached.insert(id.clone());
        Ok(FakeModel {
            id: id.clone(),
            source: bytes.to_vec(),
        })
    }
}

impl IfcModel for FakeModel {
    fn id(&self) -> &ModelId {
        &self.id
    }

    async fn fragment_buffer(&self) -> Result<FragmentBuffer> {
        let mut converted = CONVERTED_PREFIX.to_vec();
        converted.extend_from_slice(&self.source);
        Ok(FragmentBuffer::from(converted))
    }
}

struct FakeCamera(Shared);

impl CameraControls for FakeCamera {
    fn look_at(&self, pose: &CameraPose, animate: bool) {
        self.0.borrow_mut().camera_moves.push((*pose, animate));
    }
}

#[derive(Default)]
struct FakeView {
    auto_convert: Cell<bool>,
    overlay: RefCell<Option<Overlay>>,
    status: RefCell<String>,
    stats: RefCell<Option<Stats>>,
    saved: RefCell<Vec<(String, Vec<u8>)>>,
}

impl View for FakeView {
    fn show_overlay(&self, overlay: &Overlay) {
        *self.overlay.borrow_mut() = Some(overlay.clone());
    }

    fn show_status(&self, text: &str) {
        *self.status.borrow_mut() = text.to_string();
    }

    fn show_stats(&self, stats: &Stats) {
        *self.stats.borrow_mut() = Some(stats.clone());
    }

    fn auto_convert_enabled(&self) -> bool {
        self.auto_convert.get()
    }

    fn save_file(&self, name: &str, bytes: &[u8]) -> Result<()> {
        self.saved.borrow_mut().push((name.to_string(), bytes.to_vec()));
        Ok(())
    }
}

struct FakeFile {
    name: &'static str,
    bytes: Vec<u8>,
    unreadable: bool,
    slow: bool,
}

impl FakeFile {
    fn new(name: &'static str, bytes: &[u8]) -> Self {
        Self {
            name,
            bytes: bytes.to_vec(),
            unreadable: false,
            slow: false,
        }
    }
}

impl SourceFile for FakeFile {
    fn name(&self) -> String {
        self.name.to_string()
    }

    async fn read(&self) -> Result<Vec<u8>> {
        if self.slow {
            tokio::task::yield_now().await;
        }
        if self.unreadable {
            return Err(Error::FileRead("NotReadableError".into()));
        }
        Ok(self.bytes.clone())
    }
}

type TestViewer = Viewer<FakeFragments, FakeIfc, FakeCamera, FakeView>;

fn viewer() -> (TestViewer, Shared) {
    let scene = Shared::default();
    let view = FakeView::default();
    view.auto_convert.set(true);
    let viewer = Viewer::new(
        FakeFragments(scene.clone()),
        FakeIfc(scene.clone()),
        FakeCamera(scene.clone()),
        view,
        ViewerConfig::default(),
    );
    viewer.start();
    (viewer, scene)
}

fn download_enabled(viewer: &TestViewer) -> bool {
    viewer
        .view()
        .stats
        .borrow()
        .as_ref()
        .map(|stats| stats.download_enabled)
        .unwrap_or(false)
}

fn status(viewer: &TestViewer) -> String {
    viewer.view().status.borrow().clone()
}

fn overlay(viewer: &TestViewer) -> Overlay {
    viewer.view().overlay.borrow().clone().expect("overlay shown")
}

fn attached(scene: &Shared) -> Vec<String> {
    scene
        .borrow()
        .attached
        .iter()
        .map(|id| id.as_str().to_string())
        .collect()
}

#[tokio::test]
async fn test_initial_state() {
    let (viewer, scene) = viewer();
    assert_eq!(overlay(&viewer), Overlay::busy(DUTCH.overlay_waiting));
    assert_eq!(status(&viewer), DUTCH.no_file);
    assert!(!download_enabled(&viewer));
    assert!(attached(&scene).is_empty());
}

#[tokio::test]
async fn test_fragment_load() {
    let (viewer, scene) = viewer();
    let outcome = viewer
        .handle_file(FakeFile::new("plan.frag", b"fragment bytes"))
        .await;

    assert_eq!(outcome, LoadOutcome::Loaded(FileKind::Fragment));
    {
        let session = viewer.session();
        assert_eq!(session.download_name(), "plan.frag");
        assert_eq!(
            session.fragments().map(|b| b.to_vec()),
            Some(b"fragment bytes".to_vec())
        );
    }
    assert!(download_enabled(&viewer));
    assert_eq!(status(&viewer), DUTCH.fragment_loaded);
    assert_eq!(overlay(&viewer), Overlay::idle(DUTCH.overlay_fragment_loaded));
    assert_eq!(attached(&scene), vec!["frag-1"]);

    let stats = viewer.view().stats.borrow().clone().unwrap();
    assert_eq!(stats.source_name, "plan.frag");
    assert_eq!(stats.source_type, DUTCH.source_fragment);
}

#[tokio::test]
async fn test_ifc_load_converts_to_fragments() {
    let (viewer, scene) = viewer();
    let outcome = viewer
        .handle_file(FakeFile::new("Tower.IFC", b"ISO-10303-21;"))
        .await;

    assert_eq!(outcome, LoadOutcome::Loaded(FileKind::Ifc));
    assert_eq!(viewer.session().download_name(), "Tower.frag");
    assert_eq!(
        viewer.session().fragments().map(|b| b.to_vec()),
        Some(b"FRAG:ISO-10303-21;".to_vec())
    );
    assert!(download_enabled(&viewer));
    assert_eq!(status(&viewer), DUTCH.ifc_converted);
    assert_eq!(overlay(&viewer), Overlay::idle(DUTCH.overlay_fragments_loaded));

    // The parsed model was disposed and replaced by its fragments
    let scene_ref = scene.borrow();
    assert_eq!(scene_ref.disposed, vec![ModelId::new("ifc-1")]);
    assert_eq!(scene_ref.resident.len(), 1);
    assert_eq!(
        scene_ref.resident.get(&ModelId::new("ifc-frag-2")),
        Some(&b"FRAG:ISO-10303-21;".to_vec())
    );
    drop(scene_ref);
    assert_eq!(attached(&scene), vec!["ifc-frag-2"]);
}

#[tokio::test]
async fn test_ifc_load_without_conversion() {
    let (viewer, scene) = viewer();
    viewer.view().auto_convert.set(false);

    let outcome = viewer
        .handle_file(FakeFile::new("model.ifc", b"ISO-10303-21;"))
        .await;

    assert_eq!(outcome, LoadOutcome::Loaded(FileKind::Ifc));
    assert!(viewer.session().fragments().is_none());
    assert_eq!(viewer.session().download_name(), DEFAULT_DOWNLOAD_NAME);
    assert!(!download_enabled(&viewer));
    assert_eq!(status(&viewer), DUTCH.ifc_loaded_no_convert);
    assert_eq!(overlay(&viewer), Overlay::idle(DUTCH.overlay_ifc_loaded));
    assert_eq!(attached(&scene), vec!["ifc-1"]);

    assert!(!viewer.download());
    assert!(viewer.view().saved.borrow().is_empty());
}

#[tokio::test]
async fn test_ifc_loader_configured_once() {
    let (viewer, scene) = viewer();
    viewer.handle_file(FakeFile::new("a.ifc", b"A")).await;
    viewer.handle_file(FakeFile::new("b.ifc", b"B")).await;

    assert_eq!(
        scene.borrow().configured,
        vec![WasmLocation {
            path: "/wasm/".into(),
            absolute: true
        }]
    );
}

#[tokio::test]
async fn test_unknown_extension_keeps_state() {
    let (viewer, scene) = viewer();
    viewer.handle_file(FakeFile::new("plan.frag", b"F")).await;

    let outcome = viewer.handle_file(FakeFile::new("notes.txt", b"hello")).await;

    assert_eq!(outcome, LoadOutcome::Rejected);
    assert_eq!(status(&viewer), DUTCH.unknown_type);
    assert_eq!(viewer.session().download_name(), "plan.frag");
    assert_eq!(viewer.session().fragments().map(|b| b.to_vec()), Some(b"F".to_vec()));
    assert!(download_enabled(&viewer));
    assert_eq!(attached(&scene), vec!["frag-1"]);
    assert!(scene.borrow().disposed.is_empty());
}

#[tokio::test]
async fn test_second_load_replaces_model() {
    let (viewer, scene) = viewer();
    viewer.handle_file(FakeFile::new("plan.frag", b"F")).await;
    viewer.handle_file(FakeFile::new("Tower.ifc", b"I")).await;

    assert_eq!(attached(&scene), vec!["ifc-frag-3"]);
    assert_eq!(
        scene.borrow().disposed,
        vec![ModelId::new("frag-1"), ModelId::new("ifc-2")]
    );

    viewer.handle_file(FakeFile::new("other.frag", b"G")).await;
    assert_eq!(attached(&scene), vec!["frag-4"]);
    assert_eq!(scene.borrow().resident.len(), 1);
}

#[tokio::test]
async fn test_failed_parse() {
    let (viewer, scene) = viewer();
    viewer.handle_file(FakeFile::new("plan.frag", b"F")).await;
    scene.borrow_mut().fail_ifc_parse = true;

    let outcome = viewer.handle_file(FakeFile::new("broken.ifc", b"garbage")).await;

    assert_eq!(outcome, LoadOutcome::Failed);
    assert_eq!(status(&viewer), DUTCH.load_failed);
    assert_eq!(overlay(&viewer), Overlay::idle(DUTCH.overlay_failed));

    // The failed load leaves the scene and the session as the clear left them
    assert!(viewer.session().fragments().is_none());
    assert_eq!(viewer.session().download_name(), DEFAULT_DOWNLOAD_NAME);
    assert!(!download_enabled(&viewer));
    assert!(attached(&scene).is_empty());
    assert!(!viewer.is_loading());
}

#[tokio::test]
async fn test_failed_reload_after_conversion() {
    let (viewer, scene) = viewer();
    scene.borrow_mut().fail_fragments_load = true;

    let outcome = viewer.handle_file(FakeFile::new("Tower.ifc", b"I")).await;

    assert_eq!(outcome, LoadOutcome::Failed);
    assert!(viewer.session().fragments().is_none());
    assert!(!download_enabled(&viewer));
}

#[tokio::test]
async fn test_unreadable_file() {
    let (viewer, _scene) = viewer();
    let file = FakeFile {
        unreadable: true,
        ..FakeFile::new("plan.frag", b"")
    };

    assert_eq!(viewer.handle_file(file).await, LoadOutcome::Failed);
    assert_eq!(status(&viewer), DUTCH.load_failed);
}

#[tokio::test]
async fn test_only_first_file_is_used() {
    let (viewer, scene) = viewer();

    let outcome = viewer
        .handle_files(vec![
            FakeFile::new("first.frag", b"1"),
            FakeFile::new("second.frag", b"2"),
        ])
        .await;

    assert_eq!(outcome, LoadOutcome::Loaded(FileKind::Fragment));
    assert_eq!(viewer.session().download_name(), "first.frag");
    assert_eq!(scene.borrow().resident.len(), 1);

    let outcome = viewer.handle_files(Vec::<FakeFile>::new()).await;
    assert_eq!(outcome, LoadOutcome::Ignored);
    assert_eq!(viewer.session().download_name(), "first.frag");
}

#[tokio::test]
async fn test_overlapping_load_is_refused() {
    let (viewer, scene) = viewer();
    let slow = FakeFile {
        slow: true,
        ..FakeFile::new("slow.frag", b"S")
    };

    let (first, second) = tokio::join!(
        viewer.handle_file(slow),
        viewer.handle_file(FakeFile::new("fast.frag", b"F"))
    );

    assert_eq!(first, LoadOutcome::Loaded(FileKind::Fragment));
    assert_eq!(second, LoadOutcome::Busy);
    assert_eq!(viewer.session().download_name(), "slow.frag");
    assert_eq!(attached(&scene), vec!["frag-1"]);

    // The guard is released once the first load finishes
    let outcome = viewer.handle_file(FakeFile::new("fast.frag", b"F")).await;
    assert_eq!(outcome, LoadOutcome::Loaded(FileKind::Fragment));
}

#[tokio::test]
async fn test_download() {
    let (viewer, _scene) = viewer();
    assert!(!viewer.download());

    viewer.handle_file(FakeFile::new("Tower.IFC", b"I")).await;
    assert!(viewer.download());

    let saved = viewer.view().saved.borrow();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].0, "Tower.frag");
    assert_eq!(saved[0].1, b"FRAG:I".to_vec());
}

#[tokio::test]
async fn test_clear() {
    let (viewer, scene) = viewer();
    viewer.handle_file(FakeFile::new("plan.frag", b"F")).await;
    assert!(download_enabled(&viewer));

    assert_eq!(viewer.clear().await, Ok(true));
    assert!(viewer.session().fragments().is_none());
    assert!(!download_enabled(&viewer));
    assert!(attached(&scene).is_empty());
    assert!(scene.borrow().resident.is_empty());
}

#[tokio::test]
async fn test_events() {
    let (viewer, scene) = viewer();

    let outcome = viewer
        .dispatch(ViewerEvent::FilesSelected(vec![FakeFile::new("plan.frag", b"F")]))
        .await;
    assert_eq!(outcome, Some(LoadOutcome::Loaded(FileKind::Fragment)));

    assert_eq!(viewer.dispatch(ViewerEvent::<FakeFile>::DownloadRequested).await, None);
    assert_eq!(viewer.view().saved.borrow().len(), 1);

    assert_eq!(viewer.dispatch(ViewerEvent::<FakeFile>::ResetRequested).await, None);
    assert_eq!(
        scene.borrow().camera_moves,
        vec![(CameraPose::default(), true)]
    );
}

#[tokio::test]
async fn test_english_locale() {
    let scene = Shared::default();
    let viewer = Viewer::new(
        FakeFragments(scene.clone()),
        FakeIfc(scene.clone()),
        FakeCamera(scene),
        FakeView::default(),
        ViewerConfig::from_json(r#"{"locale":"en"}"#).unwrap(),
    );

    viewer.handle_file(FakeFile::new("notes.txt", b"")).await;
    assert_eq!(status(&viewer), "Unknown file type. Use .ifc or .frag.");
}
