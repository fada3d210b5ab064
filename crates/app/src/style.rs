//! egui side of the theme: the context is the style root

use egui::{Color32, Rounding, Stroke, Visuals};
use services::StyleRoot;

pub const ACCENT_DARK: Color32 = Color32::from_rgb(100, 180, 255);
pub const ACCENT_LIGHT: Color32 = Color32::from_rgb(50, 100, 200);

pub fn accent(dark: bool) -> Color32 {
    if dark {
        ACCENT_DARK
    } else {
        ACCENT_LIGHT
    }
}

/// Secondary text colour for dates, locations and captions
pub fn muted(dark: bool) -> Color32 {
    if dark {
        Color32::from_rgb(160, 160, 170)
    } else {
        Color32::from_rgb(100, 100, 110)
    }
}

pub struct EguiRoot<'a>(pub &'a egui::Context);

impl StyleRoot for EguiRoot<'_> {
    fn set_dark(&mut self, dark: bool) {
        let mut style = (*self.0.style()).clone();
        style.visuals = if dark { Visuals::dark() } else { Visuals::light() };
        style.visuals.window_rounding = Rounding::same(12.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);

        if dark {
            style.visuals.panel_fill = Color32::from_rgb(30, 30, 35);
        } else {
            style.visuals.panel_fill = Color32::from_rgb(250, 250, 252);
        }
        style.visuals.widgets.hovered.bg_stroke = Stroke::new(2.0, accent(dark));
        style.visuals.selection.stroke = Stroke::new(2.0, accent(dark));
        style.visuals.hyperlink_color = accent(dark);

        self.0.set_style(style);
    }
}
