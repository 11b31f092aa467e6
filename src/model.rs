//! App-level data types: the caller-owned photo transform and the persisted
//! editor settings.

use serde::{Deserialize, Serialize};

use crate::state::Pan;

/// The transform the editor owns and the photo component proposes changes
/// to. Zoom 1 is exact cover; pan is a fraction of the viewport per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhotoTransform {
    pub zoom: f64,
    pub pan: Pan,
}

impl Default for PhotoTransform {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Pan::default(),
        }
    }
}

/// Aspect of the crop frame the photo is composed into. Switching shapes
/// resizes the viewport, which is what drives the snap-back path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameShape {
    #[default]
    Square,
    Portrait,
    Wide,
}

impl FrameShape {
    pub const ALL: [FrameShape; 3] = [FrameShape::Square, FrameShape::Portrait, FrameShape::Wide];

    pub fn label(&self) -> &'static str {
        match self {
            FrameShape::Square => "Square",
            FrameShape::Portrait => "Portrait",
            FrameShape::Wide => "Wide",
        }
    }

    /// Inline size for the photo viewport.
    pub fn frame_style(&self) -> &'static str {
        match self {
            FrameShape::Square => "width:min(70vw, 420px); aspect-ratio:1 / 1;",
            FrameShape::Portrait => "width:min(55vw, 320px); aspect-ratio:3 / 4;",
            FrameShape::Wide => "width:min(85vw, 560px); aspect-ratio:16 / 9;",
        }
    }
}

const SETTINGS_KEY: &str = "pb_editor_settings_v1";

/// Editor preferences persisted across sessions. The transform itself is
/// deliberately not part of this.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    pub frame: FrameShape,
}

impl EditorSettings {
    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(SETTINGS_KEY) {
                    if let Ok(settings) = serde_json::from_str(&raw) {
                        return settings;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(raw) = serde_json::to_string(self) {
                    let _ = store.set_item(SETTINGS_KEY, &raw);
                }
            }
        }
    }
}
