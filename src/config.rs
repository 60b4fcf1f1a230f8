use std::path::PathBuf;

/// Overrides the data directory lookup
pub const DATA_DIR_ENV: &str = "SLOT_REEL_DATA_DIR";

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "slot_reel_lib=debug,reel_demo=debug,reel_state=debug,reel_data=debug";

/// Resolve the data directory holding symbols.json
pub fn resolve_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    // target/<profile>/<bin> -> project root
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()));
    if let Some(dir) = exe_dir {
        let project_root = dir.parent().and_then(|p| p.parent());
        if let Some(root) = project_root {
            let data = root.join("data");
            if data.exists() {
                return data;
            }
        }
    }
    PathBuf::from("data")
}
