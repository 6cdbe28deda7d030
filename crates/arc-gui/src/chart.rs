use crate::theme;
use arc_core::{Oscilloscope, Series};
use egui::{pos2, vec2, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke};

pub const TITLE: &str = "ARC Oscilloscope";
const X_TITLE: &str = "Time (s)";
const Y_TITLE: &str = "Voltage (V)";

const X_DIVISIONS: usize = 10;
const Y_DIVISIONS: usize = 8;
const LINE_WIDTH: f32 = 2.0;

// Plot area insets inside the allocated rect.
const MARGIN_LEFT: f32 = 70.0;
const MARGIN_RIGHT: f32 = 24.0;
const MARGIN_TOP: f32 = 40.0;
const MARGIN_BOTTOM: f32 = 50.0;

/// Maps plot coordinates (time, voltage) into screen space.
#[derive(Debug, Clone, Copy)]
pub struct PlotTransform {
    pub rect: Rect,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl PlotTransform {
    pub fn to_screen(&self, time: f64, voltage: f64) -> Pos2 {
        let fx = normalize(time, self.x_range);
        let fy = normalize(voltage, self.y_range);
        pos2(
            self.rect.left() + fx as f32 * self.rect.width(),
            self.rect.bottom() - fy as f32 * self.rect.height(),
        )
    }
}

fn normalize(v: f64, (lo, hi): (f64, f64)) -> f64 {
    if hi <= lo {
        return 0.5;
    }
    (v - lo) / (hi - lo)
}

/// Symmetric voltage range with some headroom; never narrower than ±1 V.
pub fn voltage_range(amplitude: f64) -> (f64, f64) {
    let half = (amplitude.abs() * 1.1).max(1.0);
    (-half, half)
}

/// Draw the chart with its axes, grid, and the visible series.
pub fn draw_chart(ui: &mut egui::Ui, scope: &Oscilloscope) {
    let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, theme::CHART_BACKGROUND);

    let plot_rect = Rect::from_min_max(
        rect.min + vec2(MARGIN_LEFT, MARGIN_TOP),
        rect.max - vec2(MARGIN_RIGHT, MARGIN_BOTTOM),
    );
    if plot_rect.width() <= 0.0 || plot_rect.height() <= 0.0 {
        return;
    }

    let state = scope.state();
    let transform = PlotTransform {
        rect: plot_rect,
        x_range: (0.0, state.period()),
        y_range: voltage_range(state.amplitude()),
    };

    painter.text(
        pos2(rect.center().x, rect.top() + MARGIN_TOP / 2.0),
        Align2::CENTER_CENTER,
        TITLE,
        FontId::proportional(18.0),
        theme::AXIS,
    );

    draw_grid(&painter, &transform);
    draw_axis_titles(&painter, rect, plot_rect);

    // Samples taken before an amplitude change may fall outside the new range.
    let series_painter = ui.painter_at(plot_rect);
    for (series, color) in [(scope.sine(), theme::SINE), (scope.cosine(), theme::COSINE)] {
        if series.is_visible() {
            draw_series(&series_painter, &transform, series, color);
        }
    }
}

fn draw_grid(painter: &egui::Painter, t: &PlotTransform) {
    let grid = Stroke::new(1.0, theme::GRID);
    let label_font = FontId::monospace(11.0);
    let r = t.rect;

    for i in 0..=X_DIVISIONS {
        let frac = i as f64 / X_DIVISIONS as f64;
        let time = t.x_range.0 + frac * (t.x_range.1 - t.x_range.0);
        let x = t.to_screen(time, t.y_range.0).x;
        painter.line_segment([pos2(x, r.top()), pos2(x, r.bottom())], grid);
        painter.text(
            pos2(x, r.bottom() + 4.0),
            Align2::CENTER_TOP,
            format_tick(time),
            label_font.clone(),
            theme::AXIS,
        );
    }

    for i in 0..=Y_DIVISIONS {
        let frac = i as f64 / Y_DIVISIONS as f64;
        let volts = t.y_range.0 + frac * (t.y_range.1 - t.y_range.0);
        let y = t.to_screen(t.x_range.0, volts).y;
        painter.line_segment([pos2(r.left(), y), pos2(r.right(), y)], grid);
        painter.text(
            pos2(r.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            format_tick(volts),
            label_font.clone(),
            theme::AXIS,
        );
    }

    // Zero line
    let zero = t.to_screen(t.x_range.0, 0.0).y;
    painter.line_segment(
        [pos2(r.left(), zero), pos2(r.right(), zero)],
        Stroke::new(1.0, theme::AXIS.gamma_multiply(0.6)),
    );
    painter.rect_stroke(
        r,
        0.0,
        Stroke::new(1.0, theme::AXIS),
        egui::epaint::StrokeKind::Inside,
    );
}

fn draw_axis_titles(painter: &egui::Painter, rect: Rect, plot_rect: Rect) {
    let font = FontId::proportional(14.0);
    painter.text(
        pos2(plot_rect.center().x, rect.bottom() - 8.0),
        Align2::CENTER_BOTTOM,
        X_TITLE,
        font.clone(),
        theme::AXIS,
    );

    let galley = painter.layout_no_wrap(Y_TITLE.to_string(), font, theme::AXIS);
    let pos = pos2(
        rect.left() + 8.0,
        plot_rect.center().y + galley.size().x / 2.0,
    );
    painter.add(
        egui::epaint::TextShape::new(pos, galley, theme::AXIS)
            .with_angle(-std::f32::consts::FRAC_PI_2),
    );
}

fn draw_series(painter: &egui::Painter, t: &PlotTransform, series: &Series, color: Color32) {
    let points: Vec<Pos2> = series
        .points()
        .iter()
        .map(|p| t.to_screen(p.time, p.voltage))
        .collect();

    match points.as_slice() {
        [] => {}
        [single] => {
            painter.circle_filled(*single, LINE_WIDTH, color);
        }
        _ => {
            painter.add(egui::Shape::line(points, Stroke::new(LINE_WIDTH, color)));
        }
    }
}

fn format_tick(v: f64) -> String {
    if v.fract().abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{:.1}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arc_core::Param;

    fn transform() -> PlotTransform {
        PlotTransform {
            rect: Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 50.0)),
            x_range: (0.0, 10.0),
            y_range: (-5.0, 5.0),
        }
    }

    #[test]
    fn test_corners_map_to_rect() {
        let t = transform();
        assert_eq!(t.to_screen(0.0, -5.0), pos2(0.0, 50.0));
        assert_eq!(t.to_screen(10.0, 5.0), pos2(100.0, 0.0));
        assert_eq!(t.to_screen(5.0, 0.0), pos2(50.0, 25.0));
    }

    #[test]
    fn test_degenerate_range_centers() {
        let t = PlotTransform {
            x_range: (3.0, 3.0),
            ..transform()
        };
        assert_eq!(t.to_screen(3.0, 0.0).x, 50.0);
    }

    #[test]
    fn test_voltage_range() {
        assert_eq!(voltage_range(0.0), (-1.0, 1.0));
        let (lo, hi) = voltage_range(10.0);
        assert!((hi - 11.0).abs() < 1e-9);
        assert!((lo + 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_series_clipped_to_plot_area() {
        let mut scope = Oscilloscope::default();
        scope.set_param(Param::Amplitude, 10.0);
        for _ in 0..40 {
            scope.tick();
        }
        scope.set_param(Param::Amplitude, 1.0);

        let screen = Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0));
        let ctx = egui::Context::default();
        let output = ctx.run(
            egui::RawInput {
                screen_rect: Some(screen),
                ..Default::default()
            },
            |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| draw_chart(ui, &scope));
            },
        );

        let lines: Vec<Rect> = output
            .shapes
            .iter()
            .filter(|s| matches!(s.shape, egui::Shape::Path(_)))
            .map(|s| s.clip_rect)
            .collect();
        assert_eq!(lines.len(), 2);
        for clip in lines {
            assert!(clip.left() >= screen.left() + MARGIN_LEFT);
            assert!(clip.top() >= screen.top() + MARGIN_TOP);
            assert!(clip.bottom() <= screen.bottom() - MARGIN_BOTTOM);
            assert!(clip.right() <= screen.right() - MARGIN_RIGHT);
        }
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(3.0), "3");
        assert_eq!(format_tick(-2.5), "-2.5");
    }
}
