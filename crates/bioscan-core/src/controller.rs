//! Pointer-driven selection state machine.
//!
//! The controller owns all interaction state (selection, hover, camera, the
//! saved initial view, the translated zone table and the loaded model) and is
//! the only thing that mutates it. Presentation side effects go out through
//! [`SceneHooks`].

use crate::camera::{OrbitCamera, ViewState};
use crate::classifier::MeshClassifier;
use crate::config::SceneConfig;
use crate::error::SceneResult;
use crate::hooks::{AudioCue, SceneHooks, StatusLevel};
use crate::mesh::{MeshHierarchy, MeshHit, MeshId};
use crate::resolver::SpatialResolver;
use crate::timeline::{self, Timeline, TimelineAction};
use crate::transform::ModelTransform;
use crate::zone::{ZoneName, ZoneRegistry};
use fnv::FnvHashSet;
use glam::{Vec2, Vec3};
use rand::prelude::*;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(ZoneName),
}

impl Selection {
    pub fn zone(self) -> Option<ZoneName> {
        match self {
            Selection::Unselected => None,
            Selection::Selected(z) => Some(z),
        }
    }
}

struct LoadedModel {
    hierarchy: MeshHierarchy,
    transform: ModelTransform,
    initial_view: ViewState,
}

pub struct InteractionController<H: SceneHooks> {
    hooks: H,
    registry: ZoneRegistry,
    resolver: SpatialResolver,
    classifier: MeshClassifier,
    camera: OrbitCamera,
    timeline: Timeline,
    model: Option<LoadedModel>,
    queued_model: Option<MeshHierarchy>,
    selection: Selection,
    highlighted: FnvHashSet<MeshId>,
    hover: Option<ZoneName>,
    viewport: Vec2,
    hover_cue_chance: f32,
    target_lift: f32,
    rng: StdRng,
    zone_debug: bool,
}

impl<H: SceneHooks> InteractionController<H> {
    pub fn new(config: SceneConfig, hooks: H, viewport_w: u32, viewport_h: u32) -> Self {
        let mut camera = OrbitCamera::new(&config.camera, 1.0);
        camera.set_aspect(viewport_w, viewport_h);
        Self {
            hooks,
            registry: ZoneRegistry::new(),
            resolver: SpatialResolver::new(config.resolver),
            classifier: MeshClassifier::new(config.classifier),
            camera,
            timeline: Timeline::new(),
            model: None,
            queued_model: None,
            selection: Selection::Unselected,
            highlighted: FnvHashSet::default(),
            hover: None,
            viewport: Vec2::new(viewport_w.max(1) as f32, viewport_h.max(1) as f32),
            hover_cue_chance: config.hover_cue_chance,
            target_lift: config.camera.target_lift,
            rng: StdRng::seed_from_u64(config.seed),
            zone_debug: false,
        }
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    pub fn registry(&self) -> &ZoneRegistry {
        &self.registry
    }

    pub fn resolver(&self) -> &SpatialResolver {
        &self.resolver
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn hover(&self) -> Option<ZoneName> {
        self.hover
    }

    pub fn highlighted(&self) -> &FnvHashSet<MeshId> {
        &self.highlighted
    }

    /// True once a model has been loaded; every pointer entry point is a
    /// no-op before that.
    pub fn is_ready(&self) -> bool {
        self.model.is_some()
    }

    pub fn model(&self) -> Option<&MeshHierarchy> {
        self.model.as_ref().map(|m| &m.hierarchy)
    }

    pub fn model_transform(&self) -> Option<ModelTransform> {
        self.model.as_ref().map(|m| m.transform)
    }

    pub fn initial_view(&self) -> Option<ViewState> {
        self.model.as_ref().map(|m| m.initial_view)
    }

    pub fn zone_debug(&self) -> bool {
        self.zone_debug
    }

    pub fn toggle_zone_debug(&mut self) -> bool {
        self.zone_debug = !self.zone_debug;
        log::info!(
            "[zones] visualization {}",
            if self.zone_debug { "enabled" } else { "disabled" }
        );
        self.zone_debug
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = Vec2::new(width.max(1) as f32, height.max(1) as f32);
        self.camera.set_aspect(width, height);
    }

    /// Start the cosmetic progress sequence shown while the model loads.
    pub fn begin_loading(&mut self) {
        timeline::schedule_scan_progress(&mut self.timeline);
    }

    /// Hand over a model that is already in memory. It is loaded by the
    /// timeline after `delay`, so the scan progress started by
    /// [`begin_loading`](Self::begin_loading) is shown first.
    pub fn queue_model(&mut self, hierarchy: MeshHierarchy, delay: Duration) {
        self.queued_model = Some(hierarchy);
        self.timeline.cancel(timeline::Track::ModelLoad);
        self.timeline.schedule(
            delay,
            timeline::Track::ModelLoad,
            TimelineAction::LoadQueuedModel,
        );
    }

    /// Readiness gate: normalise the model, move the zones into its frame,
    /// aim the camera and capture the reset view. On error the gate stays
    /// closed. Loading again drops the selection and hover, whose meshes
    /// belonged to the previous model.
    pub fn load_model(&mut self, mut hierarchy: MeshHierarchy) -> SceneResult<ModelTransform> {
        let transform = match ModelTransform::fit(&hierarchy) {
            Ok(t) => t,
            Err(e) => {
                log::error!("[load] model rejected: {}", e);
                self.timeline.cancel(timeline::Track::LoadProgress);
                self.hooks
                    .set_status(StatusLevel::Error, timeline::STATUS_LOAD_FAILED);
                return Err(e);
            }
        };
        transform.apply(&mut hierarchy);
        if self.selection != Selection::Unselected {
            self.clear_selection();
        }
        self.hover = None;
        self.registry.translate(transform.translation);
        self.camera.target =
            transform.translation + Vec3::new(0.0, self.target_lift, 0.0);
        let initial_view = self.camera.snapshot();
        if let Some(bounds) = hierarchy.world_bounds() {
            log::info!(
                "[load] model bounds min=({:.2},{:.2},{:.2}) max=({:.2},{:.2},{:.2})",
                bounds.min.x,
                bounds.min.y,
                bounds.min.z,
                bounds.max.x,
                bounds.max.y,
                bounds.max.z
            );
        }
        self.model = Some(LoadedModel {
            hierarchy,
            transform,
            initial_view,
        });
        timeline::schedule_load_complete(&mut self.timeline);
        Ok(transform)
    }

    /// Cast a ray through `ndc` against the loaded model.
    pub fn pick(&self, ndc: Vec2) -> Option<MeshHit> {
        let model = self.model.as_ref()?;
        model.hierarchy.raycast(&self.camera.ray_from_ndc(ndc))
    }

    /// Pointer click at normalised device coordinates. Returns false while
    /// the model is not loaded.
    pub fn handle_click(&mut self, ndc: Vec2) -> bool {
        if !self.is_ready() {
            return false;
        }
        let hit = self.pick(ndc).map(|h| h.point);
        self.on_click(hit)
    }

    pub fn handle_move(&mut self, ndc: Vec2) -> bool {
        if !self.is_ready() {
            return false;
        }
        let hit = self.pick(ndc).map(|h| h.point);
        self.on_move(hit)
    }

    /// Click with an already ray-cast intersection (`None` for a miss).
    pub fn on_click(&mut self, hit: Option<Vec3>) -> bool {
        if !self.is_ready() {
            return false;
        }
        let Some(point) = hit else {
            log::debug!("[click] ray missed the model");
            self.clear_selection();
            return true;
        };
        match self.resolver.resolve_detailed(&self.registry, point) {
            Some(r) => {
                log::info!(
                    "[click] ({:.3},{:.3},{:.3}) -> {} via {:?}",
                    point.x,
                    point.y,
                    point.z,
                    r.zone,
                    r.rule
                );
                self.select(r.zone);
            }
            None => {
                log::info!(
                    "[click] ({:.3},{:.3},{:.3}) hit the model but no zone",
                    point.x,
                    point.y,
                    point.z
                );
                self.clear_selection();
            }
        }
        true
    }

    fn select(&mut self, zone: ZoneName) {
        if self.selection == Selection::Selected(zone) {
            return;
        }
        if self.selection != Selection::Unselected {
            self.highlighted.clear();
            self.hooks.highlight_cleared();
        }
        self.selection = Selection::Selected(zone);
        self.highlighted = match self.model.as_ref() {
            Some(m) => self
                .classifier
                .meshes_in_zone(&self.registry, zone, &m.hierarchy),
            None => FnvHashSet::default(),
        };
        self.hooks.highlight(&self.highlighted);
        self.hooks.zone_selected(zone);
        self.hooks.play_cue(AudioCue::Click);
        self.hooks
            .set_status(StatusLevel::Warning, timeline::STATUS_INITIALIZING_TEST);
    }

    /// Drop the selection and tell the page to fall back to its idle panel.
    /// `selection_cleared` fires even when nothing was selected.
    pub fn clear_selection(&mut self) {
        if self.selection != Selection::Unselected {
            log::info!("[click] selection cleared");
            self.selection = Selection::Unselected;
            self.highlighted.clear();
            self.hooks.highlight_cleared();
        }
        self.hooks.selection_cleared();
    }

    /// Pointer moved with an already ray-cast intersection. Never touches
    /// the selection.
    pub fn on_move(&mut self, hit: Option<Vec3>) -> bool {
        if !self.is_ready() {
            return false;
        }
        let Some(point) = hit else {
            if self.hover.take().is_some() {
                log::debug!("[hover] left the model");
            }
            self.hooks.tracker_hidden();
            return true;
        };
        let zone = self.resolver.resolve(&self.registry, point);
        if zone == self.hover {
            return true;
        }
        log::debug!("[hover] {:?} -> {:?}", self.hover, zone);
        self.hover = zone;
        if zone.is_some() {
            if let Some(screen) =
                self.camera
                    .project_to_screen(point, self.viewport.x, self.viewport.y)
            {
                self.hooks.tracker_moved(screen);
            }
            if self.rng.gen::<f32>() < self.hover_cue_chance {
                self.hooks.play_cue(AudioCue::Hover);
            }
        }
        true
    }

    /// Restore the view captured at load. Selection is left alone.
    pub fn handle_double_click(&mut self) -> bool {
        let Some(view) = self.initial_view() else {
            return false;
        };
        self.camera.restore(view);
        self.hooks.play_cue(AudioCue::Reset);
        self.hooks
            .set_status(StatusLevel::Warning, timeline::STATUS_VIEW_RESET);
        timeline::schedule_view_reset_status(&mut self.timeline);
        true
    }

    /// Per-frame update: camera damping and due timeline steps.
    pub fn tick(&mut self, dt: Duration) {
        for action in self.timeline.advance(dt) {
            self.apply(action);
        }
        self.camera.update(dt.as_secs_f32());
    }

    fn apply(&mut self, action: TimelineAction) {
        match action {
            TimelineAction::SetProgress { percent, message } => {
                self.hooks.set_progress(percent, message)
            }
            TimelineAction::SetStatus(level, text) => self.hooks.set_status(level, text),
            TimelineAction::LoadingOverlay(phase) => self.hooks.loading_overlay(phase),
            TimelineAction::PlayCue(cue) => self.hooks.play_cue(cue),
            TimelineAction::RevealLabel(label) => self.hooks.reveal_label(label),
            TimelineAction::SetAutoRotate(on) => self.camera.auto_rotate = on,
            TimelineAction::LoadQueuedModel => {
                let Some(hierarchy) = self.queued_model.take() else {
                    return;
                };
                // Failures are reported by load_model itself.
                if let Ok(t) = self.load_model(hierarchy) {
                    log::info!(
                        "[load] scale={:.4} translation=({:.2},{:.2},{:.2})",
                        t.scale,
                        t.translation.x,
                        t.translation.y,
                        t.translation.z
                    );
                }
            }
        }
    }
}
