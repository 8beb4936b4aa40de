use std::collections::BTreeMap;

use cgmath::Vector3;

use super::{AudioSink, ExitSignal, MarkerFactory, MarkerHandle, UiElement, UiSink};

/// In-memory host: keeps marker visuals, widget visibility and sound counts
/// as plain data. The viewer polls its exit flag; tests assert on the rest.
#[derive(Debug, Default)]
pub struct SceneHost {
    pub markers: BTreeMap<MarkerHandle, Vector3<f32>>,
    pub visibility: BTreeMap<UiElement, bool>,
    pub display_points: BTreeMap<UiElement, Vector3<f32>>,
    pub placement_sounds: u32,
    pub removal_sounds: u32,
    pub exit_requested: bool,
    next_handle: u64,
}

impl SceneHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unset elements count as hidden.
    pub fn is_visible(&self, element: UiElement) -> bool {
        self.visibility.get(&element).copied().unwrap_or(false)
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }
}

impl MarkerFactory for SceneHost {
    fn create_marker(&mut self, position: Vector3<f32>) -> MarkerHandle {
        self.next_handle += 1;
        let handle = MarkerHandle(self.next_handle);
        self.markers.insert(handle, position);
        log::debug!("Created marker {:?} at {:?}", handle, position);
        handle
    }

    fn destroy_marker(&mut self, handle: MarkerHandle) {
        if self.markers.remove(&handle).is_none() {
            log::warn!("Destroy requested for unknown marker {:?}", handle);
        }
    }

    fn move_display_point(&mut self, element: UiElement, position: Vector3<f32>) {
        self.display_points.insert(element, position);
    }
}

impl AudioSink for SceneHost {
    fn play_placement_sound(&mut self) {
        self.placement_sounds += 1;
    }

    fn play_removal_sound(&mut self) {
        self.removal_sounds += 1;
    }
}

impl UiSink for SceneHost {
    fn set_visible(&mut self, element: UiElement, visible: bool) {
        self.visibility.insert(element, visible);
    }
}

impl ExitSignal for SceneHost {
    fn request_exit(&mut self) {
        log::info!("Exit requested");
        self.exit_requested = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_unique() {
        let mut host = SceneHost::new();
        let a = host.create_marker(Vector3::new(0.0, 0.0, 0.0));
        let b = host.create_marker(Vector3::new(0.0, 0.0, 0.0));
        assert_ne!(a, b);
        assert_eq!(host.marker_count(), 2);

        host.destroy_marker(a);
        assert_eq!(host.marker_count(), 1);
        assert!(host.markers.contains_key(&b));
    }

    #[test]
    fn test_unset_visibility_is_hidden() {
        let mut host = SceneHost::new();
        assert!(!host.is_visible(UiElement::MenuPanel));
        host.set_visible(UiElement::MenuPanel, true);
        assert!(host.is_visible(UiElement::MenuPanel));
    }
}
