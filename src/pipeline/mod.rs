// src/pipeline/mod.rs
//
// Rewrites the dummy objects left in a generated dungeon into the host's
// registered objects. Three stages, one per lifecycle event, each a no-op for
// dungeons generated from another flow.

pub mod graph;
mod hazards;
mod hooks;
mod placeholder;
mod scrap;
mod structural;

pub use graph::{
    GeneratedDungeon, Item, ItemGroup, LevelSession, RandomMapObject, RandomScrapSpawn,
    SelectableLevel, SessionId, SpawnSyncedObject, SpawnableItemWithRarity,
};
pub use hazards::{fix_map_objects, HazardReport};
pub use hooks::{HookCallback, HookRegistry, LifecycleEvent};
pub use placeholder::{classify, PlaceholderCategory, PlaceholderKind};
pub use scrap::{
    find_donor, fix_scrap_spawns, ItemGroups, ScrapOutcome, ScrapReport, SCRAP_DONORS,
    SMALL_ITEMS_DONOR,
};
pub use structural::{fix_structural_objects, StructuralReport};

use std::collections::BTreeSet;
use std::sync::Arc;

use log::{debug, info, warn};
use parking_lot::Mutex;

use crate::registry::PrefabRegistry;

pub const PLACEHOLDER_PREFIX: &str = "ExampleDungeon_";
pub const PLACEHOLDER_SUFFIX: &str = "_DUMMY";

/// What the stages need from the plugin.
#[derive(Clone)]
pub struct PipelineContext {
    /// Only dungeons generated from this flow are touched.
    pub flow_name: String,
    pub registry: Arc<dyn PrefabRegistry + Send + Sync>,
}

impl std::fmt::Debug for PipelineContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineContext")
            .field("flow_name", &self.flow_name)
            .finish_non_exhaustive()
    }
}

/// Reports collected for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub session: Option<SessionId>,
    pub structural: Option<StructuralReport>,
    pub hazards: Option<HazardReport>,
    pub scrap: Option<ScrapReport>,
}

#[derive(Debug, Default)]
struct StageProgress {
    ran: BTreeSet<LifecycleEvent>,
    report: SessionReport,
}

impl StageProgress {
    /// Returns false if `event` already ran for `session`.
    fn begin(&mut self, session: SessionId, event: LifecycleEvent) -> bool {
        if self.report.session != Some(session) {
            *self = StageProgress::default();
            self.report.session = Some(session);
        }
        if self.ran.contains(&event) {
            warn!("{} already ran for {}, skipping.", event, session);
            return false;
        }
        if let Some(later) = self.ran.iter().find(|e| **e > event) {
            warn!("{} fired after {} for {}.", event, later, session);
        }
        self.ran.insert(event);
        true
    }
}

pub struct ReplacementPipeline {
    ctx: PipelineContext,
    progress: Mutex<StageProgress>,
}

impl ReplacementPipeline {
    pub fn new(ctx: PipelineContext) -> Self {
        Self {
            ctx,
            progress: Mutex::new(StageProgress::default()),
        }
    }

    pub fn context(&self) -> &PipelineContext {
        &self.ctx
    }

    /// Registers the three stages with the generator's lifecycle events.
    pub fn install(self: &Arc<Self>, hooks: &mut HookRegistry) {
        let pipeline = Arc::clone(self);
        hooks.on(LifecycleEvent::FloorGenerated, move |session| {
            pipeline.on_floor_generated(session);
        });
        let pipeline = Arc::clone(self);
        hooks.on(LifecycleEvent::BeforeMapObjects, move |session| {
            pipeline.on_before_map_objects(session);
        });
        let pipeline = Arc::clone(self);
        hooks.on(LifecycleEvent::BeforeScrapSpawn, move |session| {
            pipeline.on_before_scrap_spawn(session);
        });
    }

    fn owns(&self, session: &LevelSession) -> bool {
        if session.flow_name() != self.ctx.flow_name {
            debug!(
                "Ignoring dungeon generated from flow '{}'.",
                session.flow_name()
            );
            return false;
        }
        true
    }

    fn begin(&self, session: &LevelSession, event: LifecycleEvent) -> bool {
        self.owns(session) && self.progress.lock().begin(session.id, event)
    }

    /// Stage A: entrances, vents and storage shelves.
    pub fn on_floor_generated(&self, session: &mut LevelSession) -> Option<StructuralReport> {
        if !self.begin(session, LifecycleEvent::FloorGenerated) {
            return None;
        }
        info!("Attempting to fix entrance teleporters.");
        let report = fix_structural_objects(&*self.ctx.registry, &mut session.dungeon);
        self.progress.lock().report.structural = Some(report.clone());
        Some(report)
    }

    /// Stage B: left to the hazard spawner, see [`fix_map_objects`].
    pub fn on_before_map_objects(&self, session: &mut LevelSession) -> Option<HazardReport> {
        if !self.begin(session, LifecycleEvent::BeforeMapObjects) {
            return None;
        }
        let report = fix_map_objects(&session.dungeon);
        self.progress.lock().report.hazards = Some(report.clone());
        Some(report)
    }

    /// Stage C: scrap spawner item groups.
    pub fn on_before_scrap_spawn(&self, session: &mut LevelSession) -> Option<ScrapReport> {
        if !self.begin(session, LifecycleEvent::BeforeScrapSpawn) {
            return None;
        }
        let report = fix_scrap_spawns(&session.level, &mut session.dungeon);
        self.progress.lock().report.scrap = Some(report.clone());
        Some(report)
    }

    /// Reports gathered so far for the most recent session.
    pub fn session_report(&self) -> SessionReport {
        self.progress.lock().report.clone()
    }
}

impl std::fmt::Debug for ReplacementPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplacementPipeline")
            .field("ctx", &self.ctx)
            .finish_non_exhaustive()
    }
}
