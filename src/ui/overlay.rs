//! Overlay state: menu panel, undo button, orientation hint and shooting mode.
//!
//! The overlay remembers what it last told the host so it only forwards real
//! changes, and so the controller can ask whether the menu is open without
//! querying the host.

use crate::host::{UiElement, UiSink};
use crate::input::DeviceOrientation;

/// Which target face the centre marker belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShootingMode {
    #[default]
    Archery,
    Airgun,
}

#[derive(Debug, Clone)]
pub struct OverlayState {
    menu_open: bool,
    undo_visible: bool,
    landscape_text: bool,
    portrait_text: bool,
    mode: ShootingMode,
}

impl OverlayState {
    /// Pushes the start-up layout to `ui`: menu closed, undo hidden, airgun
    /// centre hidden, portrait hint shown.
    pub fn new(ui: &mut impl UiSink) -> Self {
        let state = Self {
            menu_open: false,
            undo_visible: false,
            landscape_text: false,
            portrait_text: true,
            mode: ShootingMode::Archery,
        };

        ui.set_visible(UiElement::MenuPanel, false);
        ui.set_visible(UiElement::UndoButton, false);
        ui.set_visible(UiElement::AirgunCenter, false);
        ui.set_visible(UiElement::LandscapeText, false);
        ui.set_visible(UiElement::PortraitText, true);

        state
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn undo_visible(&self) -> bool {
        self.undo_visible
    }

    pub fn mode(&self) -> ShootingMode {
        self.mode
    }

    pub fn landscape_text(&self) -> bool {
        self.landscape_text
    }

    /// Menu button. The undo button hides while the menu is open.
    pub fn toggle_menu(&mut self, ui: &mut impl UiSink) {
        self.menu_open = !self.menu_open;
        ui.set_visible(UiElement::MenuPanel, self.menu_open);
        self.set_undo_visible(!self.menu_open, ui);
    }

    /// Mode buttons live in the menu panel, so picking one also toggles it.
    pub fn set_mode(&mut self, mode: ShootingMode, ui: &mut impl UiSink) {
        if self.mode != mode {
            log::info!("Shooting mode: {:?}", mode);
        }
        self.mode = mode;
        ui.set_visible(UiElement::AirgunCenter, mode == ShootingMode::Airgun);

        self.menu_open = !self.menu_open;
        ui.set_visible(UiElement::MenuPanel, self.menu_open);
    }

    pub fn set_undo_visible(&mut self, visible: bool, ui: &mut impl UiSink) {
        if self.undo_visible != visible {
            self.undo_visible = visible;
            ui.set_visible(UiElement::UndoButton, visible);
        }
    }

    /// Landscape orientations show the landscape hint, portrait shows the
    /// portrait hint, anything else (flat, upside down, unknown) leaves the
    /// current hint alone.
    pub fn apply_orientation(&mut self, orientation: DeviceOrientation, ui: &mut impl UiSink) {
        if !self.landscape_text && orientation.is_landscape() {
            self.landscape_text = true;
            self.portrait_text = false;
        } else if !self.portrait_text && orientation == DeviceOrientation::Portrait {
            self.landscape_text = false;
            self.portrait_text = true;
        } else {
            return;
        }

        ui.set_visible(UiElement::LandscapeText, self.landscape_text);
        ui.set_visible(UiElement::PortraitText, self.portrait_text);
    }
}
