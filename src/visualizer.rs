// src/visualizer.rs
use crate::earthing::{
    GroundingConfiguration, GroundingMetrics, GroundingStatus, MAX_RADIAL_COUNT, MAX_ROD_COUNT,
};
use eframe::egui;
use egui::{Color32, Pos2, Rect, Rounding, Stroke, Vec2};

pub fn status_color(status: GroundingStatus) -> Color32 {
    let [r, g, b] = status.color();
    Color32::from_rgb(r, g, b)
}

// Dark wet earth at 10 Ω·m up to pale dry sand at 1500 Ω·m, log scale
fn soil_color(resistivity: f64) -> Color32 {
    let t = ((resistivity.max(1.0).log10() - 1.0) / (1500f64.log10() - 1.0)).clamp(0.0, 1.0) as f32;
    let lerp = |a: f32, b: f32| (a + (b - a) * t) as u8;
    Color32::from_rgb(lerp(92.0, 196.0), lerp(64.0, 170.0), lerp(40.0, 120.0))
}

/// Side view of the installation: mast above grade, rods and radials below,
/// with the ground band tinted by the current status.
pub fn draw_cross_section(
    ui: &mut egui::Ui,
    config: &GroundingConfiguration,
    metrics: &GroundingMetrics,
) {
    let width = ui.available_width().max(320.0);
    let height = 260.0;
    let (response, painter) = ui.allocate_painter(Vec2::new(width, height), egui::Sense::hover());
    let rect = response.rect;
    let text_color = Color32::from_rgb(180, 180, 180);
    let grade_y = rect.top() + height * 0.45;

    // counts set through code paths other than presets are not bounded
    let rod_count = config.rod_count.min(MAX_ROD_COUNT);
    let radial_count = config.radial_count.min(MAX_RADIAL_COUNT);

    // world metres -> pixels, fitted to the widest and deepest element
    let span_m = (config.rod_spacing * rod_count.saturating_sub(1) as f64)
        .max(config.radial_length * 2.0)
        .max(4.0);
    let depth_m = config.rod_length.max(config.mast_height * 0.8).max(1.0);
    let scale = ((width as f64 - 40.0) / span_m)
        .min((height as f64 * 0.5) / depth_m)
        .max(1.0) as f32;
    let cx = rect.center().x;

    // sky and soil
    painter.rect_filled(
        Rect::from_min_max(rect.min, Pos2::new(rect.right(), grade_y)),
        Rounding::same(0.0),
        Color32::from_rgb(18, 22, 32),
    );
    let soil_rect = Rect::from_min_max(Pos2::new(rect.left(), grade_y), rect.max);
    painter.rect_filled(soil_rect, Rounding::same(0.0), soil_color(metrics.resistivity));
    let status = status_color(metrics.status);
    painter.line_segment(
        [Pos2::new(rect.left(), grade_y), Pos2::new(rect.right(), grade_y)],
        Stroke::new(3.0, status),
    );

    // mast
    let mast_px = (config.mast_height.max(0.0) as f32 * scale).min(grade_y - rect.top() - 10.0);
    let mast_top = Pos2::new(cx, grade_y - mast_px);
    painter.line_segment([Pos2::new(cx, grade_y), mast_top], Stroke::new(4.0, Color32::LIGHT_GRAY));
    painter.circle_filled(mast_top, 4.0, Color32::from_rgb(255, 80, 80));

    // radials: half to each side, drawn just below grade
    if radial_count > 0 && config.radial_length > 0.0 {
        let reach = config.radial_length as f32 * scale;
        let per_side = radial_count.div_ceil(2).max(1);
        for i in 0..radial_count {
            let side = if i % 2 == 0 { -1.0 } else { 1.0 };
            let slot = (i / 2) as f32 / per_side as f32;
            let end = Pos2::new(cx + side * reach * (1.0 - slot * 0.5), grade_y + 6.0 + slot * 8.0);
            painter.line_segment([Pos2::new(cx, grade_y + 4.0), end], Stroke::new(1.5, Color32::from_rgb(205, 127, 50)));
        }
    }

    // rods, centred under the mast
    let rod_px = config.rod_length.max(0.0) as f32 * scale;
    let spacing_px = config.rod_spacing.max(0.0) as f32 * scale;
    let first_x = cx - spacing_px * rod_count.saturating_sub(1) as f32 / 2.0;
    for i in 0..rod_count {
        let x = first_x + i as f32 * spacing_px;
        if x < rect.left() || x > rect.right() {
            continue;
        }
        painter.line_segment(
            [Pos2::new(x, grade_y), Pos2::new(x, grade_y + rod_px)],
            Stroke::new(3.0, Color32::from_rgb(184, 115, 51)),
        );
        // dispersion halo, tighter when the model couples rods strongly
        let halo = (rod_px * (0.6 - metrics.coupling_factor as f32 * 0.4)).max(4.0);
        painter.circle_stroke(
            Pos2::new(x, grade_y + rod_px * 0.6),
            halo,
            Stroke::new(1.0, status.linear_multiply(0.35)),
        );
    }

    painter.text(
        rect.min + Vec2::new(6.0, 4.0),
        egui::Align2::LEFT_TOP,
        format!("ρ = {:.1} Ω·m", metrics.resistivity),
        egui::FontId::proportional(12.0),
        text_color,
    );
    painter.text(
        Pos2::new(rect.right() - 6.0, rect.top() + 4.0),
        egui::Align2::RIGHT_TOP,
        format!("{} · {}", config.soil_type.label(), config.weather.label()),
        egui::FontId::proportional(12.0),
        text_color,
    );
}
