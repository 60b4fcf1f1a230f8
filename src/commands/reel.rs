use reel_data::SymbolCatalog;
use reel_state::{ImageKey, Label, ReelSnapshot, SlotImage, SlotImageStore};
use serde::Serialize;
use std::sync::Mutex;
use tokio::sync::watch;

/// Reel store shared with UI consumers
#[derive(Debug, Default)]
pub struct ReelState(pub Mutex<SlotImageStore>);

pub fn initialize_images(state: &ReelState, images: Vec<SlotImage>) -> Result<(), String> {
    let mut store = state.0.lock().map_err(|e| e.to_string())?;
    tracing::debug!("Initializing reel with {} images", images.len());
    store.initialize_images(&images);
    Ok(())
}

pub fn initialize_starter_reel(state: &ReelState, catalog: &SymbolCatalog) -> Result<(), String> {
    initialize_images(state, reel_data::starter_images(catalog))
}

pub fn update_image(
    state: &ReelState,
    key: ImageKey,
    src: String,
    label: Option<Label>,
) -> Result<(), String> {
    let mut store = state.0.lock().map_err(|e| e.to_string())?;
    if store.find(key).is_none() {
        return Ok(());
    }
    tracing::debug!("Update image {:?} -> {} ({:?})", key, src, label);
    store.update_image(key, src, label);
    Ok(())
}

pub fn save_previous_images(state: &ReelState) -> Result<(), String> {
    let mut store = state.0.lock().map_err(|e| e.to_string())?;
    tracing::debug!("Saving {} images as restore point", store.len());
    store.save_previous_images();
    Ok(())
}

pub fn restore_previous_images(state: &ReelState) -> Result<(), String> {
    let mut store = state.0.lock().map_err(|e| e.to_string())?;
    tracing::debug!("Restoring {} saved images", store.previous_images().len());
    store.restore_previous_images();
    Ok(())
}

pub fn get_reel_state(state: &ReelState) -> Result<serde_json::Value, String> {
    let store = state.0.lock().map_err(|e| e.to_string())?;
    Ok(reel_payload(&store.snapshot()))
}

pub fn subscribe(state: &ReelState) -> Result<watch::Receiver<ReelSnapshot>, String> {
    let store = state.0.lock().map_err(|e| e.to_string())?;
    Ok(store.subscribe())
}

/// JSON shape sent to the frontend for a reel snapshot
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReelPayload<'a> {
    images: &'a [SlotImage],
    previous_images: &'a [SlotImage],
    revision: u64,
}

pub fn reel_payload(snapshot: &ReelSnapshot) -> serde_json::Value {
    serde_json::json!(ReelPayload {
        images: &snapshot.images,
        previous_images: &snapshot.previous_images,
        revision: snapshot.revision,
    })
}
