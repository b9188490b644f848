// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The preview: edited content mounted inside the isolated frame.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use easel_frame::{FrameBridge, MountOutcome, Surface};

use crate::canvas::EditorStatus;
use crate::state::{Dispatch, UiAction, UiPatch};

/// Zone id of the root drop target.
pub const ROOT_DROPPABLE_ID: &str = "default-zone";

/// Default element id of the preview frame.
pub const PREVIEW_FRAME_ID: &str = "easel-preview";

/// The single drop target at the document root.
///
/// Drag and drop itself lives outside this crate; the target only names the
/// zone the collaborator should attach to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootDropTarget {
    zone: &'static str,
}

impl RootDropTarget {
    /// The zone id.
    #[must_use]
    pub fn zone(&self) -> &'static str {
        self.zone
    }

    /// Drops are only accepted once the editor is ready.
    #[must_use]
    pub fn accepts_drops(&self, status: EditorStatus) -> bool {
        status == EditorStatus::Ready
    }
}

impl Default for RootDropTarget {
    fn default() -> Self {
        Self {
            zone: ROOT_DROPPABLE_ID,
        }
    }
}

/// Renders the document root around its children.
///
/// `P` is the root's props, `C` the rendered content type of the surface.
pub trait RootRenderer<P, C> {
    /// Wraps `children` for `root`.
    fn render(&self, root: &P, edit_mode: bool, children: C) -> C;
}

impl<P, C, F> RootRenderer<P, C> for F
where
    F: Fn(&P, bool, C) -> C,
{
    fn render(&self, root: &P, edit_mode: bool, children: C) -> C {
        self(root, edit_mode, children)
    }
}

/// Wraps the whole preview, replacing the default container.
pub trait PreviewWrapper<C> {
    /// Wraps `children`.
    fn wrap(&self, children: C) -> C;
}

impl<C, F> PreviewWrapper<C> for F
where
    F: Fn(C) -> C,
{
    fn wrap(&self, children: C) -> C {
        self(children)
    }
}

/// Identity renderer and wrapper.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassThrough;

impl<P, C> RootRenderer<P, C> for PassThrough {
    fn render(&self, _root: &P, _edit_mode: bool, children: C) -> C {
        children
    }
}

impl<C> PreviewWrapper<C> for PassThrough {
    fn wrap(&self, children: C) -> C {
        children
    }
}

/// Host supplied component overrides that apply to the preview.
pub struct Overrides<C> {
    /// Replaces the preview container.
    pub preview: Option<Box<dyn PreviewWrapper<C>>>,
}

impl<C> Overrides<C> {
    /// Sets the preview override.
    #[must_use]
    pub fn with_preview(mut self, wrapper: impl PreviewWrapper<C> + 'static) -> Self {
        self.preview = Some(Box::new(wrapper));
        self
    }

    /// Applies the preview override, or passes `children` through.
    pub fn wrap_preview(&self, children: C) -> C {
        match &self.preview {
            Some(wrapper) => wrapper.wrap(children),
            None => children,
        }
    }
}

impl<C> Default for Overrides<C> {
    fn default() -> Self {
        Self { preview: None }
    }
}

impl<C> fmt::Debug for Overrides<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overrides")
            .field("preview", &self.preview.is_some())
            .finish()
    }
}

/// Mounts the document root inside a [`FrameBridge`].
///
/// Each [`Preview::render`] builds the content bottom‑up: the root drop zone,
/// then the root renderer, then the preview override. A degraded surface
/// skips the render entirely.
pub struct Preview<S: Surface, P> {
    id: String,
    bridge: FrameBridge<S>,
    renderer: Option<Box<dyn RootRenderer<P, S::Content>>>,
    overrides: Overrides<S::Content>,
    edit_mode: bool,
    drop_target: RootDropTarget,
}

impl<S: Surface, P> Preview<S, P> {
    /// Creates a preview over `surface`, initializing it.
    pub fn new(surface: S) -> Self {
        Self {
            id: PREVIEW_FRAME_ID.into(),
            bridge: FrameBridge::new(surface),
            renderer: None,
            overrides: Overrides::default(),
            edit_mode: true,
            drop_target: RootDropTarget::default(),
        }
    }

    /// Sets the frame element id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the root renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: impl RootRenderer<P, S::Content> + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Sets the overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides<S::Content>) -> Self {
        self.overrides = overrides;
        self
    }

    /// Sets the edit mode flag handed to the root renderer.
    pub fn set_edit_mode(&mut self, edit_mode: bool) {
        self.edit_mode = edit_mode;
    }

    /// The frame element id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The root drop target.
    #[must_use]
    pub fn drop_target(&self) -> RootDropTarget {
        self.drop_target
    }

    /// Renders `root` and mounts the result in the frame.
    ///
    /// `drop_zone` builds the root zone's content for the given target.
    pub fn render(
        &mut self,
        root: &P,
        drop_zone: impl FnOnce(&RootDropTarget) -> S::Content,
    ) -> MountOutcome {
        if self.bridge.is_degraded() {
            tracing::trace!(id = %self.id, "surface degraded, skipping preview render");
            return MountOutcome::Skipped;
        }
        let children = drop_zone(&self.drop_target);
        let children = match &self.renderer {
            Some(renderer) => renderer.render(root, self.edit_mode, children),
            None => children,
        };
        let content = self.overrides.wrap_preview(children);
        self.bridge.mount(content)
    }

    /// Whether the frame's stylesheets have settled.
    #[must_use]
    pub fn styles_loaded(&self) -> bool {
        self.bridge.is_ready()
    }

    /// Clicking the preview background clears the selection.
    pub fn click_background(&self, dispatch: &mut impl Dispatch) {
        dispatch.dispatch(UiAction::SetUi {
            ui: UiPatch::clear_selection(),
            record_history: false,
        });
    }

    /// The frame bridge.
    #[must_use]
    pub fn bridge(&self) -> &FrameBridge<S> {
        &self.bridge
    }

    /// The frame bridge, for stylesheet and geometry updates.
    pub fn bridge_mut(&mut self) -> &mut FrameBridge<S> {
        &mut self.bridge
    }
}

impl<S: Surface + fmt::Debug, P> fmt::Debug for Preview<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preview")
            .field("id", &self.id)
            .field("bridge", &self.bridge)
            .field("renderer", &self.renderer.is_some())
            .field("overrides", &self.overrides)
            .field("edit_mode", &self.edit_mode)
            .field("drop_target", &self.drop_target)
            .finish()
    }
}
