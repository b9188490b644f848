// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_zoom::{
    Viewport, ViewportOption, ZoomConfig, ZoomMode, compute_zoom_config, lock_root_height,
};
use kurbo::{Affine, Size};

use crate::error::CanvasError;
use crate::event::{LayoutCause, LayoutEvent};
use crate::options::{CanvasOptions, RefitPolicy, TransitionSpec};
use crate::state::{Dispatch, UiAction, UiLayoutState, UiPatch};

/// Measures the frame that hosts the scaled content.
pub trait FrameMeasure {
    /// The frame's content box (its own border and padding excluded), or
    /// `None` if it has not been laid out yet.
    fn content_box(&self) -> Option<Size>;
}

impl FrameMeasure for Size {
    fn content_box(&self) -> Option<Size> {
        Some(*self)
    }
}

impl FrameMeasure for Option<Size> {
    fn content_box(&self) -> Option<Size> {
        *self
    }
}

/// Whether the editor has finished its first render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EditorStatus {
    /// Not mounted yet; drop zones stay inactive.
    #[default]
    Loading,
    /// Mounted.
    Ready,
}

/// Style the host applies to the root content box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootStyle {
    /// Unscaled width: the active viewport's width.
    pub width: f64,
    /// Unscaled height: the viewport's literal height or the locked auto height.
    pub height: f64,
    /// Uniform scale: the active zoom.
    pub scale: f64,
    /// Transition for width, height and transform; only set while animating.
    pub transition: Option<TransitionSpec>,
}

impl RootStyle {
    /// The scale transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale)
    }

    /// The size the root box occupies on screen.
    #[must_use]
    pub fn scaled_size(&self) -> Size {
        Size::new(self.width * self.scale, self.height * self.scale)
    }
}

/// Orchestrates the fit transform of the edited content.
///
/// `Canvas` is the single owner and writer of the [`ZoomConfig`]; zoom and
/// viewport controls read it through [`Canvas::zoom_config`] and write only
/// through [`Canvas::set_zoom_config`] or user intent events.
///
/// It reconciles three inputs into one transform:
/// - Environment changes (mount, sidebar toggles, container resizes) re‑fit
///   instantly, without a transition.
/// - A viewport selection animates and re‑fits according to the
///   [`RefitPolicy`].
/// - A zoom selection animates and pins the zoom.
///
/// Whenever the active zoom changes while the viewport height is "auto", the
/// unscaled root height is re‑measured on the next layout pass
/// ([`Canvas::after_layout`]). Hosts call [`Canvas::handle`] after the layout
/// change that caused an event has been committed, and
/// [`Canvas::after_layout`] after the new transform has been laid out.
#[derive(Clone, Debug)]
pub struct Canvas {
    options: CanvasOptions,
    zoom_config: ZoomConfig,
    show_transition: bool,
    status: EditorStatus,
    viewport: Viewport,
    sidebars: Option<(bool, bool)>,
    frame_box: Size,
    lock_in_pending: bool,
}

impl Canvas {
    /// Creates a canvas with a fresh [`ZoomConfig`].
    #[must_use]
    pub fn new(options: CanvasOptions) -> Self {
        Self {
            options,
            zoom_config: ZoomConfig::default(),
            show_transition: false,
            status: EditorStatus::Loading,
            viewport: Viewport::default(),
            sidebars: None,
            frame_box: Size::ZERO,
            lock_in_pending: false,
        }
    }

    /// The configuration.
    #[must_use]
    pub fn options(&self) -> &CanvasOptions {
        &self.options
    }

    /// The active fit transform.
    #[must_use]
    pub fn zoom_config(&self) -> ZoomConfig {
        self.zoom_config
    }

    /// Replaces the fit transform, for zoom controls that edit it directly.
    ///
    /// A change of the active zoom schedules a root height lock‑in.
    pub fn set_zoom_config(&mut self, config: ZoomConfig) {
        self.commit(config);
    }

    /// Sets the active zoom, exactly like a zoom selection.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidZoom`] and keeps the previous config if
    /// `zoom` is not finite and strictly positive.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<bool, CanvasError> {
        self.select_zoom(true, zoom)
    }

    /// Whether the next transform change animates.
    #[must_use]
    pub fn show_transition(&self) -> bool {
        self.show_transition
    }

    /// Editor status; `Ready` once mounted.
    #[must_use]
    pub fn status(&self) -> EditorStatus {
        self.status
    }

    /// The frame content box as of the last refit or lock‑in.
    ///
    /// This is a cached value: it is refreshed whenever the canvas measures
    /// the frame and does not track the frame in between. Zero sized if the
    /// frame has never been measured.
    #[must_use]
    pub fn frame_dimensions(&self) -> Size {
        self.frame_box
    }

    /// Whether a root height lock‑in waits for the next layout pass.
    #[must_use]
    pub fn lock_in_pending(&self) -> bool {
        self.lock_in_pending
    }

    /// Mounts the canvas: fits instantly and schedules the first lock‑in.
    ///
    /// Handling a [`LayoutEvent::mount`] event does the same. Returns `true`
    /// if the zoom config changed.
    pub fn mount(&mut self, ui: &UiLayoutState, frame: &impl FrameMeasure) -> bool {
        self.status = EditorStatus::Ready;
        self.sidebars = Some(ui.sidebars());
        let changed = self.apply_passive(&LayoutEvent::mount(), ui, frame);
        self.lock_in_pending = true;
        changed
    }

    /// Re‑fits if the sidebar flags differ from the last seen state.
    ///
    /// Returns `true` if the flags had changed. Calling this again with the
    /// same state does nothing.
    pub fn sync_ui(&mut self, ui: &UiLayoutState, frame: &impl FrameMeasure) -> bool {
        let sidebars = ui.sidebars();
        if self.sidebars == Some(sidebars) {
            return false;
        }
        self.sidebars = Some(sidebars);
        self.apply_passive(&LayoutEvent::sidebars_changed(), ui, frame);
        true
    }

    /// Applies a layout event.
    ///
    /// Returns `Ok(true)` if the zoom config changed.
    ///
    /// # Errors
    ///
    /// User intents carrying an unusable zoom or viewport size are rejected
    /// with a [`CanvasError`]; nothing changes and nothing is dispatched.
    pub fn handle(
        &mut self,
        event: LayoutEvent,
        ui: &UiLayoutState,
        frame: &impl FrameMeasure,
        dispatch: &mut impl Dispatch,
    ) -> Result<bool, CanvasError> {
        match event.cause() {
            LayoutCause::ViewportSelected(option) => {
                self.select_viewport(event.animate(), option.clone(), ui, frame, dispatch)
            }
            LayoutCause::ZoomSelected(zoom) => self.select_zoom(event.animate(), *zoom),
            LayoutCause::Mount => Ok(self.mount(ui, frame)),
            LayoutCause::SidebarsChanged | LayoutCause::ContainerResized => {
                Ok(self.apply_passive(&event, ui, frame))
            }
        }
    }

    /// Re‑fits against `ui`'s current viewport, or the last seen one.
    ///
    /// Leaves the transition state alone.
    pub fn reset_auto_zoom(
        &mut self,
        ui: Option<&UiLayoutState>,
        frame: &impl FrameMeasure,
    ) -> bool {
        if let Some(ui) = ui {
            self.viewport = ui.viewports.current;
        }
        self.refit(self.viewport, frame, ZoomMode::AutoFit)
    }

    /// Completes a pending root height lock‑in after a layout pass.
    ///
    /// Reads the frame's rendered content height, which depends on the zoom
    /// applied before this pass, and stores it unscaled. Runs at most once per
    /// zoom change. Returns `true` if the zoom config changed.
    ///
    /// An unmeasured frame leaves the lock‑in pending for the next pass.
    pub fn after_layout(&mut self, ui: &UiLayoutState, frame: &impl FrameMeasure) -> bool {
        if !self.lock_in_pending {
            return false;
        }
        self.viewport = ui.viewports.current;
        if !self.viewport.height.is_auto() {
            self.lock_in_pending = false;
            return false;
        }
        let Some(measured) = frame.content_box() else {
            tracing::trace!("frame not measured yet, deferring root height lock-in");
            return false;
        };
        self.lock_in_pending = false;
        self.frame_box = measured;
        let locked = lock_root_height(self.zoom_config, measured.height);
        // Lock-in only writes the height; it must not schedule another lock-in.
        let changed = locked != self.zoom_config;
        self.zoom_config = locked;
        changed
    }

    /// The style for the root content box under `ui`'s active viewport.
    #[must_use]
    pub fn root_style(&self, ui: &UiLayoutState) -> RootStyle {
        let viewport = ui.viewports.current;
        RootStyle {
            width: viewport.width,
            height: self.zoom_config.applied_root_height(&viewport),
            scale: self.zoom_config.zoom(),
            transition: self.show_transition.then_some(self.options.transition),
        }
    }

    /// Clicking the canvas background clears the selection.
    pub fn click_background(&self, dispatch: &mut impl Dispatch) {
        dispatch.dispatch(UiAction::SetUi {
            ui: UiPatch::clear_selection(),
            record_history: true,
        });
    }

    fn apply_passive(
        &mut self,
        event: &LayoutEvent,
        ui: &UiLayoutState,
        frame: &impl FrameMeasure,
    ) -> bool {
        tracing::trace!(cause = ?event.cause(), "passive layout event");
        self.show_transition = event.animate();
        self.viewport = ui.viewports.current;
        self.refit(self.viewport, frame, ZoomMode::AutoFit)
    }

    fn select_viewport(
        &mut self,
        animate: bool,
        option: ViewportOption,
        ui: &UiLayoutState,
        frame: &impl FrameMeasure,
        dispatch: &mut impl Dispatch,
    ) -> Result<bool, CanvasError> {
        let viewport = option.viewport();
        if !viewport.is_measurable() {
            tracing::warn!(width = viewport.width, "rejecting viewport selection");
            return Err(CanvasError::InvalidViewport(viewport.width));
        }
        if !viewport.height.is_valid() {
            let height = viewport.height.fixed().unwrap_or_default();
            tracing::warn!(height, "rejecting viewport selection");
            return Err(CanvasError::InvalidViewportHeight(height));
        }
        self.show_transition = animate;
        self.viewport = viewport;

        let mut viewports = ui.viewports.clone();
        viewports.current = viewport;
        dispatch.dispatch(UiAction::SetUi {
            ui: UiPatch::viewports(viewports),
            record_history: false,
        });

        let mode = match self.options.refit_policy {
            RefitPolicy::Always => ZoomMode::AutoFit,
            RefitPolicy::UnlessPinned if self.zoom_config.is_auto_fit() => ZoomMode::AutoFit,
            RefitPolicy::UnlessPinned | RefitPolicy::Never => ZoomMode::Pinned,
        };
        let changed = self.refit(viewport, frame, mode);
        if viewport.height.is_auto() {
            self.lock_in_pending = true;
        }
        Ok(changed)
    }

    fn select_zoom(&mut self, animate: bool, zoom: f64) -> Result<bool, CanvasError> {
        let Some(config) = self.zoom_config.with_zoom(zoom) else {
            tracing::warn!(zoom, "rejecting zoom selection");
            return Err(CanvasError::InvalidZoom(zoom));
        };
        self.show_transition = animate;
        Ok(self.commit(config))
    }

    fn refit(&mut self, viewport: Viewport, frame: &impl FrameMeasure, mode: ZoomMode) -> bool {
        let frame_box = self.measure(frame);
        let config = compute_zoom_config(viewport, frame_box, self.zoom_config, mode);
        self.commit(config)
    }

    fn measure(&mut self, frame: &impl FrameMeasure) -> Size {
        self.frame_box = frame.content_box().unwrap_or(Size::ZERO);
        self.frame_box
    }

    fn commit(&mut self, config: ZoomConfig) -> bool {
        if config == self.zoom_config {
            return false;
        }
        if config.zoom() != self.zoom_config.zoom() {
            self.lock_in_pending = true;
        }
        tracing::debug!(
            zoom = config.zoom(),
            auto_zoom = config.auto_zoom(),
            root_height = config.root_height(),
            animate = self.show_transition,
            "zoom config updated"
        );
        self.zoom_config = config;
        true
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(CanvasOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use easel_zoom::{Viewport, ViewportOption, ZoomConfig};
    use kurbo::Size;

    use super::*;
    use crate::state::{ItemSelector, UiAction, UiLayoutState, UiPatch};

    fn ui_with(viewport: Viewport) -> UiLayoutState {
        let mut ui = UiLayoutState::default();
        ui.viewports.current = viewport;
        ui
    }

    #[test]
    fn unmeasured_frame_reports_zero_and_keeps_defaults() {
        let mut canvas = Canvas::default();
        let ui = ui_with(Viewport::auto(375.0));
        canvas.mount(&ui, &None::<Size>);
        assert_eq!(canvas.frame_dimensions(), Size::ZERO);
        assert_eq!(canvas.zoom_config(), ZoomConfig::default());
        assert_eq!(canvas.status(), EditorStatus::Ready);
    }

    #[test]
    fn sync_ui_only_refits_on_sidebar_change() {
        let mut canvas = Canvas::default();
        let mut ui = ui_with(Viewport::auto(375.0));
        canvas.mount(&ui, &Size::new(320.0, 500.0));
        assert!(!canvas.sync_ui(&ui, &Size::new(600.0, 500.0)));

        ui.left_side_bar_visible = false;
        assert!(canvas.sync_ui(&ui, &Size::new(600.0, 500.0)));
        assert_eq!(canvas.zoom_config().zoom(), 1.0);
        assert!(!canvas.show_transition());
    }

    #[test]
    fn zoom_selection_pins_and_animates() {
        let mut canvas = Canvas::default();
        let ui = ui_with(Viewport::auto(375.0));
        let frame = Size::new(320.0, 500.0);
        canvas.mount(&ui, &frame);

        let mut sink = |_: UiAction| {};
        let changed = canvas
            .handle(LayoutEvent::zoom_selected(1.0), &ui, &frame, &mut sink)
            .unwrap();
        assert!(changed);
        assert!(canvas.show_transition());
        assert_eq!(canvas.zoom_config().zoom(), 1.0);
        assert!((canvas.zoom_config().auto_zoom() - 320.0 / 375.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_zoom_is_rejected_without_side_effects() {
        let mut canvas = Canvas::default();
        let ui = ui_with(Viewport::auto(375.0));
        let frame = Size::new(320.0, 500.0);
        canvas.mount(&ui, &frame);
        let before = canvas.zoom_config();

        let mut sink = |_: UiAction| {};
        for zoom in [0.0, -2.0, f64::NAN] {
            let result = canvas.handle(LayoutEvent::zoom_selected(zoom), &ui, &frame, &mut sink);
            assert!(matches!(result, Err(CanvasError::InvalidZoom(_))));
        }
        assert_eq!(canvas.set_zoom(0.0), Err(CanvasError::InvalidZoom(0.0)));
        assert_eq!(canvas.zoom_config(), before);
        assert!(!canvas.show_transition());

        assert_eq!(canvas.set_zoom(1.25), Ok(true));
        assert_eq!(canvas.set_zoom(1.25), Ok(false));
    }

    #[test]
    fn viewport_selection_dispatches_new_current() {
        let mut canvas = Canvas::default();
        let mut ui = ui_with(Viewport::auto(375.0));
        let frame = Size::new(320.0, 500.0);
        canvas.mount(&ui, &frame);

        let mut actions = Vec::new();
        let mut sink = |action: UiAction| actions.push(action);
        canvas
            .handle(
                LayoutEvent::viewport_selected(ViewportOption::new(1280.0, None)),
                &ui,
                &frame,
                &mut sink,
            )
            .unwrap();
        assert!(canvas.show_transition());
        assert_eq!(canvas.zoom_config().zoom(), 0.25);

        assert_eq!(actions.len(), 1);
        let UiAction::SetUi { ui: patch, record_history } = actions.remove(0);
        assert!(!record_history);
        patch.apply(&mut ui);
        assert_eq!(ui.viewports.current, Viewport::auto(1280.0));
    }

    #[test]
    fn invalid_viewport_is_rejected() {
        let mut canvas = Canvas::default();
        let ui = ui_with(Viewport::auto(375.0));
        let mut actions = Vec::new();
        let mut sink = |action: UiAction| actions.push(action);
        let result = canvas.handle(
            LayoutEvent::viewport_selected(ViewportOption::new(0.0, None)),
            &ui,
            &Size::new(320.0, 500.0),
            &mut sink,
        );
        assert_eq!(result, Err(CanvasError::InvalidViewport(0.0)));
        assert!(actions.is_empty());
    }

    #[test]
    fn unusable_fixed_height_is_rejected() {
        let mut canvas = Canvas::default();
        let ui = ui_with(Viewport::auto(375.0));
        let frame = Size::new(320.0, 500.0);
        canvas.mount(&ui, &frame);
        let before = canvas.zoom_config();
        let mut actions = Vec::new();
        let mut sink = |action: UiAction| actions.push(action);

        for height in [f64::NAN, f64::INFINITY, -1.0] {
            let result = canvas.handle(
                LayoutEvent::viewport_selected(ViewportOption::new(375.0, Some(height))),
                &ui,
                &frame,
                &mut sink,
            );
            assert!(
                matches!(result, Err(CanvasError::InvalidViewportHeight(_))),
                "{height}"
            );
        }
        assert!(actions.is_empty());
        assert_eq!(canvas.zoom_config(), before);
        assert!(canvas.root_style(&ui).height.is_finite());

        // Zero is a legal, if empty, device height.
        let zero = LayoutEvent::viewport_selected(ViewportOption::new(375.0, Some(0.0)));
        assert!(canvas.handle(zero, &ui, &frame, &mut |_: UiAction| {}).is_ok());
    }

    #[test]
    fn unmeasured_frame_defers_lock_in() {
        let mut canvas = Canvas::default();
        let ui = ui_with(Viewport::auto(320.0));
        canvas.mount(&ui, &Size::new(320.0, 600.0));
        canvas.after_layout(&ui, &Size::new(320.0, 600.0));
        assert_eq!(canvas.zoom_config().root_height(), 600.0);

        canvas.set_zoom(0.5).unwrap();
        assert!(!canvas.after_layout(&ui, &None::<Size>));
        assert!(canvas.lock_in_pending());
        assert_eq!(canvas.zoom_config().root_height(), 600.0);

        assert!(!canvas.after_layout(&ui, &Size::new(320.0, 300.0)));
        assert!(!canvas.lock_in_pending());
        assert_eq!(canvas.zoom_config().root_height(), 600.0);

        canvas.set_zoom(0.25).unwrap();
        assert!(canvas.after_layout(&ui, &Size::new(320.0, 200.0)));
        assert_eq!(canvas.zoom_config().root_height(), 800.0);
        assert_eq!(canvas.frame_dimensions(), Size::new(320.0, 200.0));
    }

    #[test]
    fn mount_event_matches_mount() {
        let ui = ui_with(Viewport::auto(375.0));
        let frame = Size::new(320.0, 500.0);
        let mut direct = Canvas::default();
        direct.mount(&ui, &frame);

        let mut handled = Canvas::default();
        let mut sink = |_: UiAction| {};
        assert_eq!(
            handled.handle(LayoutEvent::mount(), &ui, &frame, &mut sink),
            Ok(true)
        );
        assert_eq!(handled.status(), EditorStatus::Ready);
        assert!(handled.lock_in_pending());
        assert_eq!(handled.zoom_config(), direct.zoom_config());
        assert!(!handled.sync_ui(&ui, &frame));
    }

    #[test]
    fn frame_dimensions_are_cached_between_measurements() {
        let mut canvas = Canvas::default();
        let ui = ui_with(Viewport::auto(375.0));
        canvas.mount(&ui, &Size::new(320.0, 500.0));
        let wider = Size::new(600.0, 500.0);
        assert_eq!(canvas.frame_dimensions(), Size::new(320.0, 500.0));

        canvas.reset_auto_zoom(None, &wider);
        assert_eq!(canvas.frame_dimensions(), wider);
    }

    #[test]
    fn refit_policies_on_viewport_change() {
        let frame = Size::new(320.0, 500.0);
        let ui = ui_with(Viewport::auto(375.0));
        let mut sink = |_: UiAction| {};
        let pick = LayoutEvent::viewport_selected(ViewportOption::new(640.0, None));

        for (policy, expected) in [
            (RefitPolicy::Always, 0.5),
            (RefitPolicy::UnlessPinned, 1.5),
            (RefitPolicy::Never, 1.5),
        ] {
            let mut canvas = Canvas::new(CanvasOptions::default().with_refit_policy(policy));
            canvas.mount(&ui, &frame);
            canvas
                .handle(LayoutEvent::zoom_selected(1.5), &ui, &frame, &mut sink)
                .unwrap();
            canvas.handle(pick.clone(), &ui, &frame, &mut sink).unwrap();
            assert_eq!(canvas.zoom_config().zoom(), expected, "{policy:?}");
            assert_eq!(canvas.zoom_config().auto_zoom(), 0.5, "{policy:?}");
        }

        // UnlessPinned still follows the fit when the zoom was never pinned.
        let mut canvas =
            Canvas::new(CanvasOptions::default().with_refit_policy(RefitPolicy::UnlessPinned));
        canvas.mount(&ui, &frame);
        canvas.handle(pick, &ui, &frame, &mut sink).unwrap();
        assert_eq!(canvas.zoom_config().zoom(), 0.5);
    }

    #[test]
    fn fixed_height_skips_lock_in() {
        let mut canvas = Canvas::default();
        let ui = ui_with(Viewport::new(375.0, Some(667.0)));
        let frame = Size::new(320.0, 500.0);
        canvas.mount(&ui, &frame);
        assert!(canvas.lock_in_pending());
        assert!(!canvas.after_layout(&ui, &frame));
        assert!(!canvas.lock_in_pending());
        assert_eq!(canvas.root_style(&ui).height, 667.0);
    }

    #[test]
    fn background_click_clears_selection_with_history() {
        let canvas = Canvas::default();
        let mut ui = UiLayoutState {
            item_selector: Some(ItemSelector {
                index: 0,
                zone: None,
            }),
            ..UiLayoutState::default()
        };
        let mut actions = Vec::new();
        canvas.click_background(&mut |action: UiAction| actions.push(action));
        assert_eq!(
            actions,
            [UiAction::SetUi {
                ui: UiPatch::clear_selection(),
                record_history: true,
            }]
        );
        let UiAction::SetUi { ui: patch, .. } = actions.remove(0);
        patch.apply(&mut ui);
        assert!(ui.item_selector.is_none());
    }

    #[test]
    fn root_style_transform_and_scaled_size() {
        let mut canvas = Canvas::default();
        let ui = ui_with(Viewport::auto(400.0));
        canvas.mount(&ui, &Size::new(200.0, 300.0));
        canvas.after_layout(&ui, &Size::new(200.0, 300.0));

        let style = canvas.root_style(&ui);
        assert_eq!(style.scale, 0.5);
        assert_eq!(style.height, 600.0);
        assert_eq!(style.transition, None);
        assert_eq!(style.scaled_size(), Size::new(200.0, 300.0));
        assert_eq!(style.transform(), Affine::scale(0.5));
    }
}
