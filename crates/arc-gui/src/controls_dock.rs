use crate::state::UiCommand;
use arc_core::{Oscilloscope, Param};
use crossbeam::channel::Sender;
use egui::{vec2, Sense, Stroke, Ui};
use std::f32::consts::PI;
use std::ops::RangeInclusive;

/// Half of the dial's sweep, measured from twelve o'clock.
const DIAL_HALF_SWEEP: f32 = PI * 5.0 / 6.0;
const DIAL_SIZE: f32 = 56.0;

/// Draw the controls dock: series check boxes, amplitude and period spin box +
/// slider pairs, and the phase spin box + dial.
///
/// Each control shows the current state and sends a command on change; paired
/// controls stay in sync because both read the same value next frame.
pub fn draw_controls(ui: &mut Ui, scope: &Oscilloscope, tx: &Sender<UiCommand>) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            let mut sine = scope.sine().is_visible();
            if ui.checkbox(&mut sine, "Sine").changed() {
                let _ = tx.try_send(UiCommand::SetSineVisible(sine));
            }
            let mut cosine = scope.cosine().is_visible();
            if ui.checkbox(&mut cosine, "Cosine").changed() {
                let _ = tx.try_send(UiCommand::SetCosineVisible(cosine));
            }
        });

        ui.separator();

        ui.vertical(|ui| {
            egui::Grid::new("slider_controls")
                .num_columns(3)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    for param in [Param::Amplitude, Param::Period] {
                        slider_row(ui, scope, param, tx);
                        ui.end_row();
                    }
                });
        });

        ui.separator();

        ui.horizontal(|ui| {
            let param = Param::Phase;
            let range = int_range(param);
            let mut value = scope.state().get(param).round() as i32;
            ui.label(param.label());
            let spin = ui.add(egui::DragValue::new(&mut value).range(range.clone()));
            let knob = dial(ui, &mut value, range);
            if spin.changed() || knob.changed() {
                send_param(tx, param, value);
            }
        });
    });
}

fn slider_row(ui: &mut Ui, scope: &Oscilloscope, param: Param, tx: &Sender<UiCommand>) {
    let range = int_range(param);
    let mut value = scope.state().get(param).round() as i32;
    ui.label(param.label());
    let spin = ui.add(egui::DragValue::new(&mut value).range(range.clone()));
    let slider = ui.add(
        egui::Slider::new(&mut value, range)
            .show_value(false)
            .integer(),
    );
    if spin.changed() || slider.changed() {
        send_param(tx, param, value);
    }
}

fn send_param(tx: &Sender<UiCommand>, param: Param, value: i32) {
    let _ = tx.try_send(UiCommand::SetParam {
        param,
        value: value as f64,
    });
}

fn int_range(param: Param) -> RangeInclusive<i32> {
    let r = param.range();
    (r.min.round() as i32)..=(r.max.round() as i32)
}

/// Rotary integer control. Drag around the knob to change the value.
pub fn dial(ui: &mut Ui, value: &mut i32, range: RangeInclusive<i32>) -> egui::Response {
    let (rect, mut response) =
        ui.allocate_exact_size(vec2(DIAL_SIZE, DIAL_SIZE), Sense::click_and_drag());
    let center = rect.center();
    let radius = rect.width() / 2.0 - 2.0;
    let (lo, hi) = (*range.start(), *range.end());
    let span = (hi - lo).max(1) as f32;

    if let Some(pointer) = response.interact_pointer_pos() {
        let d = pointer - center;
        if d.length() > 2.0 {
            let fraction = angle_to_fraction(d.x.atan2(-d.y));
            let new_value = lo + (fraction * span).round() as i32;
            if new_value != *value {
                *value = new_value.clamp(lo, hi);
                response.mark_changed();
            }
        }
    }

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact(&response);
        let painter = ui.painter();
        painter.circle(center, radius, visuals.bg_fill, visuals.bg_stroke);

        let ticks = (hi - lo).clamp(1, 24);
        for i in 0..=ticks {
            let a = fraction_to_angle(i as f32 / ticks as f32);
            let dir = vec2(a.sin(), -a.cos());
            painter.line_segment(
                [center + dir * (radius - 5.0), center + dir * radius],
                Stroke::new(1.0, visuals.fg_stroke.color),
            );
        }

        let a = fraction_to_angle((*value - lo) as f32 / span);
        let tip = center + vec2(a.sin(), -a.cos()) * (radius - 8.0);
        painter.line_segment([center, tip], Stroke::new(2.5, visuals.fg_stroke.color));
        painter.circle_filled(center, 3.0, visuals.fg_stroke.color);
    }

    response
}

/// Map a pointer angle (0 at twelve o'clock, clockwise positive) onto the
/// dial's [0, 1] travel. Angles outside the sweep stick to the nearest end.
fn angle_to_fraction(angle: f32) -> f32 {
    let clamped = angle.clamp(-DIAL_HALF_SWEEP, DIAL_HALF_SWEEP);
    (clamped + DIAL_HALF_SWEEP) / (2.0 * DIAL_HALF_SWEEP)
}

fn fraction_to_angle(fraction: f32) -> f32 {
    fraction.clamp(0.0, 1.0) * 2.0 * DIAL_HALF_SWEEP - DIAL_HALF_SWEEP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dial_ends_and_middle() {
        assert!((angle_to_fraction(-DIAL_HALF_SWEEP) - 0.0).abs() < 1e-6);
        assert!((angle_to_fraction(0.0) - 0.5).abs() < 1e-6);
        assert!((angle_to_fraction(DIAL_HALF_SWEEP) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_dial_dead_zone_clamps() {
        assert_eq!(angle_to_fraction(PI), 1.0);
        assert_eq!(angle_to_fraction(-PI), 0.0);
    }

    #[test]
    fn test_fraction_angle_inverse() {
        for f in [0.0f32, 0.2, 0.5, 0.9, 1.0] {
            assert!((angle_to_fraction(fraction_to_angle(f)) - f).abs() < 1e-5);
        }
    }

    #[test]
    fn test_int_ranges_follow_params() {
        assert_eq!(int_range(Param::Amplitude), 0..=10);
        assert_eq!(int_range(Param::Period), 1..=60);
        assert_eq!(int_range(Param::Phase), 0..=10);
    }
}
