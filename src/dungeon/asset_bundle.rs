// src/dungeon/asset_bundle.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::DungeonFlow;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("failed to read asset bundle {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("asset bundle {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A dungeon flow entry in the bundle manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowAsset {
    pub path: String,
    pub name: String,
}

/// The dungeon's packaged assets. Only flows are looked up from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetBundle {
    pub name: String,
    #[serde(default)]
    pub flows: Vec<FlowAsset>,
}

impl AssetBundle {
    pub fn load_from_file(path: &Path) -> Result<Self, BundleError> {
        let text = fs::read_to_string(path).map_err(|source| BundleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| BundleError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Looks up a flow by its asset path. Matching is case-insensitive, the
    /// way bundle asset paths are.
    pub fn load_flow(&self, asset_path: &str) -> Option<DungeonFlow> {
        self.flows
            .iter()
            .find(|f| f.path.eq_ignore_ascii_case(asset_path))
            .map(|f| DungeonFlow {
                name: f.name.clone(),
                asset_path: f.path.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{BUNDLE_FILE_NAME, FLOW_ASSET_PATH, FLOW_NAME};

    fn bundle() -> AssetBundle {
        AssetBundle {
            name: "exampledungeon".to_string(),
            flows: vec![FlowAsset {
                path: FLOW_ASSET_PATH.to_string(),
                name: FLOW_NAME.to_string(),
            }],
        }
    }

    #[test]
    fn test_load_flow() {
        let flow = bundle().load_flow(FLOW_ASSET_PATH).unwrap();
        assert_eq!(flow.name, FLOW_NAME);
        assert!(bundle()
            .load_flow("Assets/Example/Flow/ExampleFlow.asset")
            .is_some());
    }

    #[test]
    fn test_missing_flow() {
        assert!(bundle().load_flow("assets/Other/Flow.asset").is_none());
        assert!(AssetBundle::default().load_flow(FLOW_ASSET_PATH).is_none());
    }

    #[test]
    fn test_manifest_parsing() {
        let json = r#"{ "name": "exampledungeon", "flows": [
            { "path": "assets/Example/Flow/ExampleFlow.asset", "name": "ExampleFlow" } ] }"#;
        let parsed: AssetBundle = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, bundle());
    }

    #[test]
    fn test_missing_bundle_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = AssetBundle::load_from_file(&dir.path().join(BUNDLE_FILE_NAME));
        assert!(matches!(result, Err(BundleError::Io { .. })));
    }

    #[test]
    fn test_load_bundle_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(BUNDLE_FILE_NAME);
        fs::write(&path, serde_json::to_string(&bundle()).unwrap()).unwrap();
        let loaded = AssetBundle::load_from_file(&path).unwrap();
        assert_eq!(loaded, bundle());
    }

    #[test]
    fn test_corrupt_bundle_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(BUNDLE_FILE_NAME);
        fs::write(&path, "UnityFS\0binary").unwrap();
        let result = AssetBundle::load_from_file(&path);
        assert!(matches!(result, Err(BundleError::Corrupt { .. })));
    }
}
