use geofence::{FenceStatus, GeoPoint};

/// Tracks the state for the selection of the geofence marker.
pub struct SelectionState {
    pub fence_selected: bool,
}

impl SelectionState {
    pub fn new() -> SelectionState {
        Self {
            fence_selected: false,
        }
    }

    /// If the fence marker is already selected, it will be deselected.
    /// Otherwise, it will be selected.
    pub fn toggle_fence_selection(&mut self) {
        self.fence_selected = !self.fence_selected;
    }
}

/// Tracks what the map currently knows about the user.
pub struct ViewState {
    pub position: Option<GeoPoint>,
    pub last_status: Option<FenceStatus>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            position: None,
            last_status: None,
        }
    }
}
