//! Show or update persisted preferences

use anyhow::Result;

use crate::state::{AppState, KeyValueStore};
use crate::Site;

/// Apply an optional change to the stored state and return the result
pub fn update(store: &mut dyn KeyValueStore, english_only: Option<bool>) -> Result<AppState> {
    let mut state = AppState::load(store);

    if let Some(value) = english_only {
        state.english_only = value;
        state.save(store)?;
        tracing::info!("Set english-only to {}", value);
    }

    Ok(state)
}

/// Run the prefs command
pub fn run(site: &Site, english_only: Option<bool>) -> Result<()> {
    let mut store = site.state_store()?;
    let state = update(&mut store, english_only)?;
    println!("english-only: {}", state.english_only);
    Ok(())
}
