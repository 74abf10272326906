use std::sync::{OnceLock, PoisonError, RwLock};

/// Debug metadata attached to saving and loading games.
///
/// The contents are opaque here; the save/load code decides what they mean.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugTagValues {
    /// `DBGL` chunk data to write into the next savegame.
    pub savegame_dbgl: Option<String>,
    /// `DBGL` chunk data found in the last loaded game.
    pub loadgame_dbgl: String,
    /// Whether the next savegame gets a `DBGC` chunk.
    pub save_dbgc: bool,
    /// `DBGC` chunk data found in the last loaded game.
    pub loadgame_dbgc: String,
}

/// Shared, lock-protected [`DebugTagValues`].
#[derive(Debug, Default)]
pub struct DebugTags {
    values: RwLock<DebugTagValues>,
}

impl DebugTags {
    /// Tags with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current values.
    pub fn get(&self) -> DebugTagValues {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Changes the values in place.
    pub fn update(&self, f: impl FnOnce(&mut DebugTagValues)) {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut values);
    }

    /// Sets or clears the `DBGL` data for the next savegame.
    pub fn set_savegame_dbgl(&self, data: Option<String>) {
        self.update(|v| v.savegame_dbgl = data);
    }

    /// Records the `DBGL` data of the loaded game.
    pub fn set_loadgame_dbgl(&self, data: impl Into<String>) {
        let data = data.into();
        self.update(|v| v.loadgame_dbgl = data);
    }

    /// Enables or disables the `DBGC` chunk on save.
    pub fn set_save_dbgc(&self, enabled: bool) {
        self.update(|v| v.save_dbgc = enabled);
    }

    /// Records the `DBGC` data of the loaded game.
    pub fn set_loadgame_dbgc(&self, data: impl Into<String>) {
        let data = data.into();
        self.update(|v| v.loadgame_dbgc = data);
    }

    /// Human-readable block for crash and desync reports.
    pub fn to_report_string(&self) -> String {
        let values = self.get();
        let mut out = String::new();
        if let Some(data) = &values.savegame_dbgl {
            out.push_str(&format!("Savegame DBGL data: {data}\n"));
        }
        if !values.loadgame_dbgl.is_empty() {
            out.push_str(&format!("Loadgame DBGL data: {}\n", values.loadgame_dbgl));
        }
        out.push_str(&format!("Save DBGC data: {}\n", values.save_dbgc));
        if !values.loadgame_dbgc.is_empty() {
            out.push_str(&format!("Loadgame DBGC data: {}\n", values.loadgame_dbgc));
        }
        out
    }
}

static DEBUG_TAGS: OnceLock<DebugTags> = OnceLock::new();

/// Process-wide savegame/loadgame debug tags.
pub fn debug_tags() -> &'static DebugTags {
    DEBUG_TAGS.get_or_init(DebugTags::new)
}
