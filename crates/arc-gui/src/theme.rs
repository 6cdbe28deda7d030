use egui::Color32;

// Blue cerulean palette
const BACKGROUND: Color32 = Color32::from_rgb(4, 45, 70);
const PANEL: Color32 = Color32::from_rgb(6, 58, 88);
const WIDGET: Color32 = Color32::from_rgb(16, 84, 122);
const WIDGET_HOVER: Color32 = Color32::from_rgb(30, 110, 155);
const FOREGROUND: Color32 = Color32::from_rgb(230, 240, 248);
const MUTED: Color32 = Color32::from_rgb(120, 160, 190);
const HIGHLIGHT: Color32 = Color32::from_rgb(0, 159, 191);
const WARN: Color32 = Color32::from_rgb(255, 196, 92);
const ERROR: Color32 = Color32::from_rgb(255, 105, 97);
const EXTREME_BG: Color32 = Color32::from_rgb(2, 30, 48);

/// Chart colours, shared with the chart and status bar.
pub const CHART_BACKGROUND: Color32 = Color32::from_rgb(3, 38, 60);
pub const GRID: Color32 = Color32::from_rgb(28, 78, 108);
pub const AXIS: Color32 = Color32::from_rgb(150, 190, 215);
pub const SINE: Color32 = Color32::from_rgb(199, 232, 91);
pub const COSINE: Color32 = Color32::from_rgb(0, 191, 230);
pub const STATUS_ERROR: Color32 = ERROR;
pub const STATUS_INFO: Color32 = FOREGROUND;

static INIT: std::sync::Once = std::sync::Once::new();

/// Apply the blue cerulean visuals to the egui context.
///
/// Visuals are set once (guarded by `std::sync::Once`).
pub fn apply(ctx: &egui::Context) {
    INIT.call_once(|| {
        let mut visuals = egui::Visuals::dark();

        visuals.panel_fill = BACKGROUND;
        visuals.window_fill = PANEL;
        visuals.faint_bg_color = PANEL;
        visuals.extreme_bg_color = EXTREME_BG;

        visuals.selection.bg_fill = HIGHLIGHT;
        visuals.selection.stroke = egui::Stroke::new(1.0, FOREGROUND);

        visuals.hyperlink_color = HIGHLIGHT;
        visuals.warn_fg_color = WARN;
        visuals.error_fg_color = ERROR;

        visuals.widgets.inactive.bg_fill = WIDGET;
        visuals.widgets.inactive.weak_bg_fill = WIDGET;
        visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, FOREGROUND);
        visuals.widgets.inactive.bg_stroke = egui::Stroke::new(0.0, MUTED);

        visuals.widgets.hovered.bg_fill = WIDGET_HOVER;
        visuals.widgets.hovered.weak_bg_fill = WIDGET_HOVER;
        visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.5, FOREGROUND);
        visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, HIGHLIGHT);

        visuals.widgets.active.bg_fill = HIGHLIGHT;
        visuals.widgets.active.weak_bg_fill = HIGHLIGHT;
        visuals.widgets.active.fg_stroke = egui::Stroke::new(2.0, FOREGROUND);
        visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, FOREGROUND);

        visuals.widgets.noninteractive.bg_fill = BACKGROUND;
        visuals.widgets.noninteractive.weak_bg_fill = BACKGROUND;
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, FOREGROUND);
        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(0.0, PANEL);

        visuals.widgets.open.bg_fill = PANEL;
        visuals.widgets.open.weak_bg_fill = PANEL;
        visuals.widgets.open.fg_stroke = egui::Stroke::new(1.0, HIGHLIGHT);
        visuals.widgets.open.bg_stroke = egui::Stroke::new(1.0, HIGHLIGHT);

        visuals.window_stroke = egui::Stroke::new(1.0, MUTED);

        ctx.set_visuals(visuals);
    });
}
