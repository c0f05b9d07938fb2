use crate::commands::{CmdMessage, CmdResult, SaveFileSummary};
use crate::error::Result;
use crate::store::{CatalogStore, StorageBackend};

pub fn list<B: StorageBackend>(store: &CatalogStore<B>) -> Result<CmdResult> {
    let summaries = store
        .catalog()
        .iter()
        .map(|(name, cars)| SaveFileSummary {
            name: name.clone(),
            car_count: cars.len(),
        })
        .collect();
    Ok(CmdResult::default().with_save_files(summaries))
}

pub fn create<B: StorageBackend>(store: &mut CatalogStore<B>, name: &str) -> Result<CmdResult> {
    store.create_save_file(name)?;
    let mut result = list(store)?;
    result.add_message(CmdMessage::success(format!("Save file created: {}", name)));
    Ok(result)
}

pub fn delete<B: StorageBackend>(store: &mut CatalogStore<B>, name: &str) -> Result<CmdResult> {
    let removed = store.delete_save_file(name)?;
    let mut result = list(store)?;
    result.add_message(CmdMessage::success(format!(
        "Save file deleted: {} ({} {})",
        name,
        removed.len(),
        if removed.len() == 1 { "car" } else { "cars" }
    )));
    Ok(result)
}
