// src/dungeon/mod.rs
mod asset_bundle;
mod descriptor;

pub use asset_bundle::{AssetBundle, BundleError, FlowAsset};
pub use descriptor::{DungeonDescriptor, DungeonFlow, DungeonPool, SelectionPool};

/// File name of the asset bundle shipped next to the binary.
pub const BUNDLE_FILE_NAME: &str = "exampledungeon";
/// Path of the dungeon flow inside the bundle.
pub const FLOW_ASSET_PATH: &str = "assets/Example/Flow/ExampleFlow.asset";
/// Name of the flow template. Lifecycle hooks compare against it.
pub const FLOW_NAME: &str = "ExampleFlow";
