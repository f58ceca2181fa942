// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fullscreen toggle for the viewer container.
//!
//! Uses the platform fullscreen API when there is one and falls back to a
//! CSS-only emulation when it is missing or rejects the request. Each
//! transition updates the container classes and resizes the renderer once.

#![allow(async_fn_in_trait)]

use crate::Result;
use std::cell::Cell;

/// Set on the container while it is expanded.
pub const FULLSCREEN_CLASS: &str = "is-fullscreen";
/// Set on the container while the CSS emulation is in use.
pub const FALLBACK_CLASS: &str = "is-fullscreen-fallback";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenMode {
    Native,
    Fallback,
}

/// Platform side of the fullscreen toggle.
pub trait FullscreenHost {
    fn native_available(&self) -> bool;

    async fn request_native(&self) -> Result<()>;

    async fn exit_native(&self) -> Result<()>;

    fn set_class(&self, class: &str, on: bool);

    fn resize_renderer(&self);
}

pub struct FullscreenController<H> {
    host: H,
    mode: Cell<Option<FullscreenMode>>,
    switching: Cell<bool>,
}

impl<H: FullscreenHost> FullscreenController<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            mode: Cell::new(None),
            switching: Cell::new(false),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn mode(&self) -> Option<FullscreenMode> {
        self.mode.get()
    }

    pub fn is_active(&self) -> bool {
        self.mode.get().is_some()
    }

    /// Enter or leave fullscreen. Returns the new state.
    pub async fn toggle(&self) -> bool {
        if self.is_active() {
            self.exit().await;
        } else {
            self.enter().await;
        }
        self.is_active()
    }

    pub async fn enter(&self) {
        if self.is_active() || self.switching.replace(true) {
            return;
        }

        let mode = if self.host.native_available() {
            match self.host.request_native().await {
                Ok(()) => FullscreenMode::Native,
                Err(err) => {
                    tracing::warn!(error = %err, "fullscreen request rejected, using fallback");
                    FullscreenMode::Fallback
                }
            }
        } else {
            tracing::debug!("fullscreen API unavailable, using fallback");
            FullscreenMode::Fallback
        };

        self.apply(Some(mode));
        self.switching.set(false);
    }

    pub async fn exit(&self) {
        let Some(mode) = self.mode.get() else {
            return;
        };
        if self.switching.replace(true) {
            return;
        }

        self.apply(None);
        if mode == FullscreenMode::Native {
            if let Err(err) = self.host.exit_native().await {
                tracing::warn!(error = %err, "failed to exit fullscreen");
            }
        }
        self.switching.set(false);
    }

    /// The platform reported a fullscreen change, e.g. the user pressed Escape.
    pub fn on_native_change(&self, active: bool) {
        if !active && !self.switching.get() && self.mode.get() == Some(FullscreenMode::Native) {
            self.apply(None);
        }
    }

    fn apply(&self, mode: Option<FullscreenMode>) {
        self.mode.set(mode);
        self.host.set_class(FULLSCREEN_CLASS, mode.is_some());
        self.host
            .set_class(FALLBACK_CLASS, mode == Some(FullscreenMode::Fallback));
        self.host.resize_renderer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::cell::RefCell;
    use std::collections::BTreeSet;

    #[derive(Default)]
    struct FakeHost {
        available: bool,
        reject: bool,
        native: Cell<bool>,
        classes: RefCell<BTreeSet<String>>,
        resizes: Cell<usize>,
    }

    impl FullscreenHost for FakeHost {
        fn native_available(&self) -> bool {
            self.available
        }

        async fn request_native(&self) -> Result<()> {
            if self.reject {
                return Err(Error::Library("permission denied".into()));
            }
            self.native.set(true);
            Ok(())
        }

        async fn exit_native(&self) -> Result<()> {
            self.native.set(false);
            Ok(())
        }

        fn set_class(&self, class: &str, on: bool) {
            let mut classes = self.classes.borrow_mut();
            if on {
                classes.insert(class.to_string());
            } else {
                classes.remove(class);
            }
        }

        fn resize_renderer(&self) {
            self.resizes.set(self.resizes.get() + 1);
        }
    }

    fn classes(host: &FakeHost) -> Vec<String> {
        host.classes.borrow().iter().cloned().collect()
    }

    #[tokio::test]
    async fn test_native_round_trip() {
        let controller = FullscreenController::new(FakeHost {
            available: true,
            ..Default::default()
        });
        let before = classes(controller.host());

        assert!(controller.toggle().await);
        assert_eq!(controller.mode(), Some(FullscreenMode::Native));
        assert!(controller.host().native.get());
        assert_eq!(classes(controller.host()), vec![FULLSCREEN_CLASS.to_string()]);
        assert_eq!(controller.host().resizes.get(), 1);

        assert!(!controller.toggle().await);
        assert!(!controller.host().native.get());
        assert_eq!(classes(controller.host()), before);
        assert_eq!(controller.host().resizes.get(), 2);

        // Change event that follows our own exit is a no-op
        controller.on_native_change(false);
        assert_eq!(controller.host().resizes.get(), 2);
    }

    #[tokio::test]
    async fn test_rejected_request_falls_back() {
        let controller = FullscreenController::new(FakeHost {
            available: true,
            reject: true,
            ..Default::default()
        });

        assert!(controller.toggle().await);
        assert_eq!(controller.mode(), Some(FullscreenMode::Fallback));
        assert_eq!(
            classes(controller.host()),
            vec![FULLSCREEN_CLASS.to_string(), FALLBACK_CLASS.to_string()]
        );

        assert!(!controller.toggle().await);
        assert!(classes(controller.host()).is_empty());
        assert_eq!(controller.host().resizes.get(), 2);
    }

    #[tokio::test]
    async fn test_missing_api_falls_back() {
        let controller = FullscreenController::new(FakeHost::default());
        controller.enter().await;
        assert_eq!(controller.mode(), Some(FullscreenMode::Fallback));
        controller.enter().await;
        assert_eq!(controller.host().resizes.get(), 1);
    }

    #[tokio::test]
    async fn test_platform_exit() {
        let controller = FullscreenController::new(FakeHost {
            available: true,
            ..Default::default()
        });
        controller.enter().await;
        controller.on_native_change(true);
        assert_eq!(controller.host().resizes.get(), 1);

        controller.on_native_change(false);
        assert!(!controller.is_active());
        assert!(classes(controller.host()).is_empty());
        assert_eq!(controller.host().resizes.get(), 2);
    }
}
