// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! User-visible copy, one table per locale.

use serde::{Deserialize, Serialize};

/// UI language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Nl,
    En,
}

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::Nl => &DUTCH,
            Locale::En => &ENGLISH,
        }
    }
}

/// Every string the viewer shows.
#[derive(Debug)]
pub struct Messages {
    // Page chrome
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub reset_button: &'static str,
    pub download_button: &'static str,
    pub fullscreen_button: &'static str,
    pub fullscreen_close_button: &'static str,
    pub help_button: &'static str,
    pub help_close_button: &'static str,
    pub files_heading: &'static str,
    pub pick_file: &'static str,
    pub drop_here: &'static str,
    pub drop_hint: &'static str,
    pub auto_convert_label: &'static str,
    pub viewer_heading: &'static str,
    pub viewer_hint: &'static str,
    pub source_label: &'static str,
    pub type_label: &'static str,
    pub fragment_label: &'static str,

    // Status line
    pub no_file: &'static str,
    pub fragment_loading: &'static str,
    pub fragment_loaded: &'static str,
    pub ifc_loading: &'static str,
    pub ifc_loaded_no_convert: &'static str,
    pub ifc_converting: &'static str,
    pub ifc_converted: &'static str,
    pub unknown_type: &'static str,
    pub load_failed: &'static str,
    pub busy: &'static str,

    // Overlay
    pub overlay_waiting: &'static str,
    pub overlay_fragment_loading: &'static str,
    pub overlay_fragment_loaded: &'static str,
    pub overlay_ifc_loading: &'static str,
    pub overlay_ifc_loaded: &'static str,
    pub overlay_converting: &'static str,
    pub overlay_fragments_loaded: &'static str,
    pub overlay_failed: &'static str,

    // Stat cards
    pub placeholder: &'static str,
    pub source_fragment: &'static str,
    pub source_ifc: &'static str,
    pub fragment_ready: &'static str,
    pub fragment_ready_hint: &'static str,
    pub fragment_missing: &'static str,
    pub fragment_missing_hint: &'static str,

    // Help cards
    pub help_files_title: &'static str,
    pub help_files_body: &'static str,
    pub help_viewer_title: &'static str,
    pub help_viewer_body: &'static str,
    pub help_download_title: &'static str,
    pub help_download_body: &'static str,
    pub help_reset_title: &'static str,
    pub help_reset_body: &'static str,
}

pub static DUTCH: Messages = Messages {
    eyebrow: "IFC Lab",
    title: "IFC & Fragment Viewer",
    subtitle: "Laad een .ifc of .frag bestand. Grote IFC's worden automatisch \
               op de achtergrond omgezet naar fragments voor snelle weergave.",
    reset_button: "Reset view",
    download_button: "Download .frag",
    fullscreen_button: "Volledig scherm",
    fullscreen_close_button: "Sluiten",
    help_button: "Help",
    help_close_button: "Sluit help",
    files_heading: "Bestanden",
    pick_file: "Kies bestand",
    drop_here: "Sleep hier een .ifc of .frag",
    drop_hint: "of gebruik de knop hierboven",
    auto_convert_label: "Automatisch IFC naar fragment converteren",
    viewer_heading: "Viewer",
    viewer_hint: "Sleep om te draaien, scroll om te zoomen",
    source_label: "Bronbestand",
    type_label: "Type",
    fragment_label: "Fragment status",

    no_file: "Nog geen bestand geladen.",
    fragment_loading: "Fragment wordt geladen.",
    fragment_loaded: "Fragment geladen.",
    ifc_loading: "IFC wordt geladen.",
    ifc_loaded_no_convert: "IFC geladen. Auto-conversie uitgeschakeld.",
    ifc_converting: "IFC geladen. Converteren naar fragments op de achtergrond...",
    ifc_converted: "IFC omgezet naar fragments en geladen.",
    unknown_type: "Onbekend bestandstype. Gebruik .ifc of .frag.",
    load_failed: "Er ging iets mis bij het laden van het bestand.",
    busy: "Er wordt al een bestand geladen. Even geduld.",

    overlay_waiting: "Wachten op bestand...",
    overlay_fragment_loading: "Fragment laden...",
    overlay_fragment_loaded: "Fragment geladen",
    overlay_ifc_loading: "IFC laden...",
    overlay_ifc_loaded: "IFC geladen",
    overlay_converting: "Converteer IFC naar fragments...",
    overlay_fragments_loaded: "Fragments geladen",
    overlay_failed: "Laden mislukt",

    placeholder: "-",
    source_fragment: "Fragment (.frag)",
    source_ifc: "IFC (.ifc)",
    fragment_ready: "Fragment klaar",
    fragment_ready_hint: "Je kunt de .frag downloaden of herladen.",
    fragment_missing: "Nog niet beschikbaar",
    fragment_missing_hint: "Laad een IFC om te converteren.",

    help_files_title: "Bestand laden",
    help_files_body: "Sleep een .ifc of .frag hierheen of kies een bestand.",
    help_viewer_title: "Navigeren",
    help_viewer_body: "Sleep om te draaien, scroll om te zoomen.",
    help_download_title: "Downloaden",
    help_download_body: "Bewaar het omgezette model als .frag.",
    help_reset_title: "Camera",
    help_reset_body: "Zet de camera terug naar het startpunt.",
};

pub static ENGLISH: Messages = Messages {
    eyebrow: "IFC Lab",
    title: "IFC & Fragment Viewer",
    subtitle: "Load an .ifc or .frag file. Large IFC files are converted to \
               fragments in the background for fast display.",
    reset_button: "Reset view",
    download_button: "Download .frag",
    fullscreen_button: "Fullscreen",
    fullscreen_close_button: "Close",
    help_button: "Help",
    help_close_button: "Close help",
    files_heading: "Files",
    pick_file: "Choose file",
    drop_here: "Drop an .ifc or .frag here",
    drop_hint: "or use the button above",
    auto_convert_label: "Convert IFC to fragments automatically",
    viewer_heading: "Viewer",
    viewer_hint: "Drag to orbit, scroll to zoom",
    source_label: "Source file",
    type_label: "Type",
    fragment_label: "Fragment status",

    no_file: "No file loaded yet.",
    fragment_loading: "Loading fragment.",
    fragment_loaded: "Fragment loaded.",
    ifc_loading: "Loading IFC.",
    ifc_loaded_no_convert: "IFC loaded. Auto-conversion disabled.",
    ifc_converting: "IFC loaded. Converting to fragments in the background...",
    ifc_converted: "IFC converted to fragments and loaded.",
    unknown_type: "Unknown file type. Use .ifc or .frag.",
    load_failed: "Something went wrong loading the file.",
    busy: "A file is already loading. Please wait.",

    overlay_waiting: "Waiting for file...",
    overlay_fragment_loading: "Loading fragment...",
    overlay_fragment_loaded: "Fragment loaded",
    overlay_ifc_loading: "Loading IFC...",
    overlay_ifc_loaded: "IFC loaded",
    overlay_converting: "Converting IFC to fragments...",
    overlay_fragments_loaded: "Fragments loaded",
    overlay_failed: "Loading failed",

    placeholder: "-",
    source_fragment: "Fragment (.frag)",
    source_ifc: "IFC (.ifc)",
    fragment_ready: "Fragment ready",
    fragment_ready_hint: "You can download or reload the .frag.",
    fragment_missing: "Not available yet",
    fragment_missing_hint: "Load an IFC to convert it.",

    help_files_title: "Load a file",
    help_files_body: "Drop an .ifc or .frag here or pick one.",
    help_viewer_title: "Navigate",
    help_viewer_body: "Drag to orbit, scroll to zoom.",
    help_download_title: "Download",
    help_download_body: "Save the converted model as .frag.",
    help_reset_title: "Camera",
    help_reset_body: "Move the camera back to its starting point.",
};
