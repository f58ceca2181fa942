// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Page markup for the viewer shell.

use crate::config::Features;
use crate::file_kind::FileKind;
use crate::help::HelpCard;
use crate::messages::Messages;
use std::fmt::Write;

/// Rules for the classes the page and the shell toggle (`hidden`, the
/// fullscreen classes, help card positioning).
pub const STYLESHEET: &str = include_str!("style.css");

/// Element ids the shell looks up after rendering.
pub mod ids {
    pub const STYLE: &str = "ifcLabStyle";
    pub const FILE_INPUT: &str = "fileInput";
    pub const DROP_ZONE: &str = "dropZone";
    pub const STATUS_TEXT: &str = "statusText";
    pub const SOURCE_NAME: &str = "sourceName";
    pub const SOURCE_TYPE: &str = "sourceType";
    pub const FRAG_STATUS: &str = "fragStatus";
    pub const FRAG_HINT: &str = "fragHint";
    pub const DOWNLOAD_BUTTON: &str = "downloadBtn";
    pub const RESET_BUTTON: &str = "resetBtn";
    pub const AUTO_CONVERT: &str = "autoConvert";
    pub const VIEWER_WRAP: &str = "viewerWrap";
    pub const VIEWER: &str = "viewer";
    pub const OVERLAY: &str = "viewerOverlay";
    pub const OVERLAY_TEXT: &str = "overlayText";
    pub const FULLSCREEN_BUTTON: &str = "fullscreenBtn";
    pub const FULLSCREEN_CLOSE_BUTTON: &str = "fullscreenCloseBtn";
    pub const HELP_BUTTON: &str = "helpBtn";
    pub const HELP_OVERLAY: &str = "helpOverlay";
    pub const HELP_CLOSE_BUTTON: &str = "helpCloseBtn";

    /// Id of the `index`-th help card.
    pub fn help_card(index: usize) -> String {
        format!("helpCard{index}")
    }
}

/// Render the page. Optional parts follow `features`; `auto_convert` is the
/// initial state of the conversion checkbox.
pub fn render(
    messages: &Messages,
    features: &Features,
    auto_convert: bool,
    cards: &[HelpCard],
) -> String {
    let mut html = String::with_capacity(4096);

    // `write!` into a String cannot fail
    let _ = write!(
        html,
        "<style id=\"{id}\">\n{css}</style>\n",
        id = ids::STYLE,
        css = STYLESHEET,
    );
    let _ = write!(
        html,
        r#"<div class="app">
  <header class="hero">
    <div>
      <p class="eyebrow">{eyebrow}</p>
      <h1>{title}</h1>
      <p class="subtitle">{subtitle}</p>
    </div>
    <div class="actions">
"#,
        eyebrow = messages.eyebrow,
        title = messages.title,
        subtitle = messages.subtitle,
    );

    if features.help {
        let _ = writeln!(
            html,
            r#"      <button class="ghost" id="{id}" type="button" aria-expanded="false">{label}</button>"#,
            id = ids::HELP_BUTTON,
            label = messages.help_button,
        );
    }
    let _ = write!(
        html,
        r#"      <button class="ghost" id="{reset}" type="button">{reset_label}</button>
      <button class="primary" id="{download}" type="button" disabled>{download_label}</button>
    </div>
  </header>

  <section class="panel">
    <div class="panel-header">
      <h2>{files}</h2>
      <div class="panel-actions">
        <label class="file">
          <input id="{input}" type="file" accept="{accept}" />
          {pick}
        </label>
      </div>
    </div>
"#,
        reset = ids::RESET_BUTTON,
        reset_label = messages.reset_button,
        download = ids::DOWNLOAD_BUTTON,
        download_label = messages.download_button,
        files = messages.files_heading,
        input = ids::FILE_INPUT,
        accept = FileKind::accept_attribute(),
        pick = messages.pick_file,
    );

    if features.drop_zone {
        let _ = write!(
            html,
            r#"
    <div class="upload" id="{id}">
      <strong>{drop}</strong>
      <span class="hint">{hint}</span>
"#,
            id = ids::DROP_ZONE,
            drop = messages.drop_here,
            hint = messages.drop_hint,
        );
        if features.auto_convert_toggle {
            push_auto_convert(&mut html, messages, auto_convert);
        }
        html.push_str("    </div>\n");
    } else if features.auto_convert_toggle {
        push_auto_convert(&mut html, messages, auto_convert);
    }

    let _ = write!(
        html,
        r#"
    <p class="upload-status" id="{status}">{no_file}</p>

    <div class="output-cards">
      <div class="stat-card">
        <p class="stat-label">{source_label}</p>
        <p class="stat-value" id="{source_name}">{placeholder}</p>
      </div>
      <div class="stat-card">
        <p class="stat-label">{type_label}</p>
        <p class="stat-value" id="{source_type}">{placeholder}</p>
      </div>
      <div class="stat-card">
        <p class="stat-label">{fragment_label}</p>
        <p class="stat-value" id="{frag_status}">{missing}</p>
        <p class="stat-note" id="{frag_hint}">{missing_hint}</p>
      </div>
    </div>
  </section>

  <section class="panel">
    <div class="panel-header">
      <h2>{viewer_heading}</h2>
      <span class="hint">{viewer_hint}</span>
"#,
        status = ids::STATUS_TEXT,
        no_file = messages.no_file,
        source_label = messages.source_label,
        source_name = ids::SOURCE_NAME,
        placeholder = messages.placeholder,
        type_label = messages.type_label,
        source_type = ids::SOURCE_TYPE,
        fragment_label = messages.fragment_label,
        frag_status = ids::FRAG_STATUS,
        missing = messages.fragment_missing,
        frag_hint = ids::FRAG_HINT,
        missing_hint = messages.fragment_missing_hint,
        viewer_heading = messages.viewer_heading,
        viewer_hint = messages.viewer_hint,
    );

    if features.fullscreen {
        let _ = writeln!(
            html,
            r#"      <button class="ghost" id="{id}" type="button">{label}</button>"#,
            id = ids::FULLSCREEN_BUTTON,
            label = messages.fullscreen_button,
        );
    }

    let _ = write!(
        html,
        r#"    </div>
    <div class="viewer-wrap" id="{wrap}">
      <div id="{viewer}" class="viewer"></div>
      <div id="{overlay}" class="viewer-overlay">
        <span>
          <span class="spinner"></span>
          <span id="{overlay_text}">{waiting}</span>
        </span>
      </div>
"#,
        wrap = ids::VIEWER_WRAP,
        viewer = ids::VIEWER,
        overlay = ids::OVERLAY,
        overlay_text = ids::OVERLAY_TEXT,
        waiting = messages.overlay_waiting,
    );

    if features.fullscreen {
        let _ = writeln!(
            html,
            r#"      <button class="ghost fullscreen-close" id="{id}" type="button">{label}</button>"#,
            id = ids::FULLSCREEN_CLOSE_BUTTON,
            label = messages.fullscreen_close_button,
        );
    }
    html.push_str("    </div>\n  </section>\n");

    if features.help {
        let _ = writeln!(
            html,
            r#"  <div class="help-overlay hidden" id="{id}" role="dialog">"#,
            id = ids::HELP_OVERLAY,
        );
        for (index, card) in cards.iter().enumerate() {
            let _ = writeln!(
                html,
                r#"    <div class="help-card" id="{id}" data-target="{target}" data-placement="{placement}"><strong>{title}</strong><p>{body}</p></div>"#,
                id = ids::help_card(index),
                target = card.target,
                placement = card.placement.as_str(),
                title = card.title,
                body = card.body,
            );
        }
        let _ = writeln!(
            html,
            r#"    <button class="primary help-close" id="{id}" type="button">{label}</button>
  </div>"#,
            id = ids::HELP_CLOSE_BUTTON,
            label = messages.help_close_button,
        );
    }

    html.push_str("</div>\n");
    html
}

fn push_auto_convert(html: &mut String, messages: &Messages, checked: bool) {
    let _ = writeln!(
        html,
        r#"      <label class="inline-field">
        <input id="{id}" type="checkbox"{checked} />
        {label}
      </label>"#,
        id = ids::AUTO_CONVERT,
        checked = if checked { " checked" } else { "" },
        label = messages.auto_convert_label,
    );
}
