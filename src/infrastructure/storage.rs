use std::fs;
use std::path::{Path, PathBuf};
use tauri::{AppHandle, Manager};

pub fn resolve_app_data_dir(app_handle: &AppHandle) -> std::io::Result<PathBuf> {
    let app_data_dir = app_handle
        .path()
        .app_data_dir()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    ensure_dir(&app_data_dir)?;
    Ok(app_data_dir)
}

pub fn resolve_bundled_dataset(app_handle: &AppHandle) -> Option<PathBuf> {
    let resource = app_handle
        .path()
        .resource_dir()
        .ok()
        .map(|dir| dir.join("data.csv"))
        .filter(|path| path.exists());

    // Fall back to the repository copy during development.
    resource.or_else(|| {
        let dev = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data.csv");
        dev.exists().then_some(dev)
    })
}

fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
