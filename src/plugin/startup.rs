// src/plugin/startup.rs

use std::path::Path;
use std::sync::Arc;

use log::{info, warn};
use thiserror::Error;

use super::PLUGIN_VERSION;
use crate::config::DungeonConfig;
use crate::dungeon::{
    AssetBundle, BundleError, DungeonDescriptor, DungeonFlow, SelectionPool, FLOW_ASSET_PATH,
};
use crate::level::{self, LevelTypes};
use crate::pipeline::{HookRegistry, PipelineContext, ReplacementPipeline};
use crate::registry::PrefabRegistry;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to load Dungeon assets: {0}")]
    AssetBundle(#[from] BundleError),
    #[error("Failed to load Dungeon Flow '{0}'.")]
    MissingFlow(String),
    #[error("Config file invalid, moon config \"{0}\" does not match one of the preset values.")]
    InvalidMoons(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Registered(LevelTypes),
    /// The pool already holds this dungeon; nothing was submitted.
    AlreadyRegistered,
}

/// The plugin instance. One per process; it is passed around explicitly
/// instead of living in a static.
#[derive(Debug)]
pub struct LethalDungeon {
    config: DungeonConfig,
    /// Set once the descriptor has been submitted.
    flow: Option<DungeonFlow>,
    pipeline: Option<Arc<ReplacementPipeline>>,
}

impl LethalDungeon {
    pub fn new(config: DungeonConfig) -> Self {
        Self {
            config,
            flow: None,
            pipeline: None,
        }
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    /// The registered flow, if startup succeeded.
    pub fn flow(&self) -> Option<&DungeonFlow> {
        self.flow.as_ref()
    }

    pub fn is_registered(&self) -> bool {
        self.flow.is_some()
    }

    /// Loads the asset bundle file and runs [`LethalDungeon::startup`].
    pub fn startup_from_file<P>(
        &mut self,
        bundle_path: &Path,
        pool: &mut P,
    ) -> Result<Registration, StartupError>
    where
        P: SelectionPool + ?Sized,
    {
        if self.is_registered() {
            return Ok(Registration::AlreadyRegistered);
        }
        let bundle = AssetBundle::load_from_file(bundle_path)?;
        self.startup(&bundle, pool)
    }

    /// Resolves the configured moons and submits the dungeon to `pool`.
    ///
    /// Any error leaves the pool untouched. Calling this again after a
    /// successful registration does nothing, and so does calling it when the
    /// pool already holds this dungeon's flow.
    pub fn startup<P>(
        &mut self,
        bundle: &AssetBundle,
        pool: &mut P,
    ) -> Result<Registration, StartupError>
    where
        P: SelectionPool + ?Sized,
    {
        if self.is_registered() {
            info!("Dungeon already registered, skipping.");
            return Ok(Registration::AlreadyRegistered);
        }

        let flow = bundle
            .load_flow(FLOW_ASSET_PATH)
            .ok_or_else(|| StartupError::MissingFlow(FLOW_ASSET_PATH.to_string()))?;

        let moons = self.config.moons().to_lowercase();
        let level_types = level::resolve(&moons);
        let descriptor =
            DungeonDescriptor::new(flow.clone(), self.config.selection_weight(), level_types)
                .ok_or_else(|| StartupError::InvalidMoons(moons.clone()))?;
        info!("Moon type string \"{}\" got type(s) {:?}", moons, level_types);

        if !pool.register(descriptor) {
            warn!("Dungeon flow '{}' is already in the selection pool.", flow.name);
            return Ok(Registration::AlreadyRegistered);
        }
        self.flow = Some(flow);

        info!(
            "Lethal Dungeon [Version {}] successfully loaded.",
            PLUGIN_VERSION
        );
        Ok(Registration::Registered(level_types))
    }

    /// Hooks the replacement pipeline into the generator. Returns `None` if
    /// the dungeon was never registered, since no level can use it then.
    ///
    /// Hooks are installed once; later calls return the installed pipeline
    /// and register nothing.
    pub fn install_hooks(
        &mut self,
        registry: Arc<dyn PrefabRegistry + Send + Sync>,
        hooks: &mut HookRegistry,
    ) -> Option<Arc<ReplacementPipeline>> {
        if let Some(pipeline) = &self.pipeline {
            warn!("Replacement pipeline already installed.");
            return Some(Arc::clone(pipeline));
        }
        let flow = self.flow.as_ref()?;
        let pipeline = Arc::new(ReplacementPipeline::new(PipelineContext {
            flow_name: flow.name.clone(),
            registry,
        }));
        pipeline.install(hooks);
        self.pipeline = Some(Arc::clone(&pipeline));
        Some(pipeline)
    }

    pub fn pipeline(&self) -> Option<&Arc<ReplacementPipeline>> {
        self.pipeline.as_ref()
    }
}
