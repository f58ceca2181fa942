// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! What the page shows: overlay, status line and stat cards.

use crate::messages::Messages;
use crate::session::Session;
use crate::Result;

/// Viewer overlay. A busy overlay covers the viewer with a spinner;
/// an idle one is hidden but keeps its last text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub text: String,
    pub busy: bool,
}

impl Overlay {
    pub fn busy(text: &str) -> Self {
        Self {
            text: text.to_string(),
            busy: true,
        }
    }

    pub fn idle(text: &str) -> Self {
        Self {
            text: text.to_string(),
            busy: false,
        }
    }
}

/// Contents of the stat cards and the download button state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub source_name: String,
    pub source_type: String,
    pub fragment_status: String,
    pub fragment_hint: String,
    pub download_enabled: bool,
}

impl Stats {
    pub fn from_session(session: &Session, messages: &Messages) -> Self {
        let ready = session.fragments().is_some();
        let (fragment_status, fragment_hint) = if ready {
            (messages.fragment_ready, messages.fragment_ready_hint)
        } else {
            (messages.fragment_missing, messages.fragment_missing_hint)
        };

        Self {
            source_name: session
                .source_name()
                .unwrap_or(messages.placeholder)
                .to_string(),
            source_type: session
                .source_kind()
                .map_or(messages.placeholder, |kind| kind.label(messages))
                .to_string(),
            fragment_status: fragment_status.to_string(),
            fragment_hint: fragment_hint.to_string(),
            download_enabled: ready,
        }
    }
}

/// Page surface the viewer reflects its state into.
pub trait View {
    fn show_overlay(&self, overlay: &Overlay);

    fn show_status(&self, text: &str);

    fn show_stats(&self, stats: &Stats);

    /// Current value of the auto-convert option.
    fn auto_convert_enabled(&self) -> bool;

    /// Offer `bytes` to the user as a download named `name`.
    fn save_file(&self, name: &str, bytes: &[u8]) -> Result<()>;
}
