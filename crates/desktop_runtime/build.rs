use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowDefaults {
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppManifest {
    schema_version: u32,
    app_id: String,
    display_name: String,
    display_name_de: String,
    show_in_taskbar: bool,
    window_defaults: WindowDefaults,
}

const APP_DIRS: [&str; 4] = ["settings", "browser", "notes", "clock"];

fn app_manifest_paths(root: &Path) -> Vec<PathBuf> {
    APP_DIRS
        .iter()
        .map(|name| {
            root.join("..")
                .join("apps")
                .join(name)
                .join("app.manifest.toml")
        })
        .collect()
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let mut manifests = Vec::<AppManifest>::new();

    for path in app_manifest_paths(&crate_root) {
        println!("cargo:rerun-if-changed={}", path.display());
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
        let manifest: AppManifest = toml::from_str(&raw)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
        if manifest.schema_version != 1 {
            panic!(
                "manifest schema mismatch in {}: expected 1 found {}",
                path.display(),
                manifest.schema_version
            );
        }
        if manifest.window_defaults.width <= 0 || manifest.window_defaults.height <= 0 {
            panic!("window defaults must be positive in {}", path.display());
        }
        manifests.push(manifest);
    }

    // Catalog order is taskbar order, so keep the directory order instead of sorting.
    let json = serde_json::to_string_pretty(&manifests).expect("serialize app manifest catalog");
    let generated = format!(
        "/// Build-time generated app manifest catalog JSON.\n\
pub const APP_MANIFEST_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
