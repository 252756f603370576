use filing_shared::MapError;
use filing_shared::asset::{MapAsset, parse_map_asset};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::MAP_ASSET_URL;

#[derive(Clone, Debug, PartialEq)]
pub enum AssetState {
    Loading,
    Ready(MapAsset),
    Failed(MapError),
}

/// Fetch and parse the map drawing.
pub async fn fetch_map_asset() -> Result<MapAsset, MapError> {
    let resp = gloo_net::http::Request::get(MAP_ASSET_URL)
        .send()
        .await
        .map_err(|e| MapError::MapAssetUnavailable(format!("fetch error: {e}")))?;

    if !resp.ok() {
        return Err(MapError::MapAssetUnavailable(format!(
            "HTTP {}",
            resp.status()
        )));
    }

    let text = resp
        .text()
        .await
        .map_err(|e| MapError::MapAssetUnavailable(format!("read error: {e}")))?;
    parse_map_asset(&text)
}

/// Single best-effort load. A failure is final for this mount.
pub fn load_map_asset(state: RwSignal<AssetState>) {
    spawn_local(async move {
        match fetch_map_asset().await {
            Ok(asset) => {
                web_sys::console::info_1(
                    &format!("map asset loaded: {} shapes", asset.shapes.len()).into(),
                );
                state.set(AssetState::Ready(asset));
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("{e}").into());
                state.set(AssetState::Failed(e));
            }
        }
    });
}
