// src/gui.rs
use eframe::egui;
use egui::{Color32, RichText};
use egui_plot::{HLine, Line, Plot, PlotPoints, Points};
use crate::earthing::{
    design_grid, minimum_rods_for_target, render_sweep_png, rod_count_sweep, GroundingConfiguration,
    GroundingMetrics, GroundingStatus, PlotStyle, SoilCategory, SweepPoint, WeatherCondition,
    MAX_RADIAL_COUNT, MAX_ROD_COUNT,
};
use crate::engine::GroundingSystem;
use crate::recorder::SessionRecorder;
use crate::types::*;
use crate::visualizer;

const SWEEP_MAX_RODS: u32 = MAX_ROD_COUNT;
const GRID_RODS: [u32; 6] = [1, 2, 4, 6, 8, 12];
// spacing as a multiple of rod length
const GRID_SPACING_RATIOS: [f64; 5] = [0.5, 0.7, 1.0, 1.5, 2.0];

pub struct EarthingApp {
    system: GroundingSystem,
    metrics: GroundingMetrics,
    sweep: Vec<SweepPoint>,
    recorder: SessionRecorder,
    paths: ExportPaths,
    log_messages: Vec<String>,
}

impl EarthingApp {
    pub fn new(config: GroundingConfiguration) -> Self {
        let system = GroundingSystem::new(config);
        let metrics = system.calculate();
        let sweep = rod_count_sweep(system.config(), SWEEP_MAX_RODS);
        Self {
            system,
            metrics,
            sweep,
            recorder: SessionRecorder::new(),
            paths: ExportPaths::default(),
            log_messages: vec!["Earthing Lab ready.".to_owned()],
        }
    }

    fn log(&mut self, msg: &str) {
        self.log_messages.push(format!("> {}", msg));
        if self.log_messages.len() > 8 { self.log_messages.remove(0); }
    }

    fn recompute(&mut self) {
        self.metrics = self.system.calculate();
        self.sweep = rod_count_sweep(self.system.config(), SWEEP_MAX_RODS);
        if let Err(e) = self.recorder.write_record(self.system.config(), &self.metrics) {
            log::error!("session write failed: {e}");
            self.log(&format!("Recording stopped: {e}"));
            self.recorder.stop().ok();
        }
    }

    fn apply_all(&mut self, commands: Vec<ParamCommand>) {
        if commands.is_empty() { return; }
        for cmd in commands {
            self.system.apply(cmd);
        }
        self.recompute();
    }

    fn save_preset(&mut self) {
        let result = self.system.config().save_preset(&self.paths.preset);
        match result {
            Ok(()) => self.log(&format!("Preset saved: {}", self.paths.preset)),
            Err(e) => { log::error!("{e}"); self.log(&format!("Save failed: {e}")); }
        }
    }

    fn load_preset(&mut self) {
        match GroundingConfiguration::load_preset(&self.paths.preset) {
            Ok(config) => {
                self.system.replace_config(config);
                self.recompute();
                self.log(&format!("Preset loaded: {}", self.paths.preset));
            }
            Err(e) => { log::error!("{e}"); self.log(&format!("Load failed: {e}")); }
        }
    }

    fn toggle_recording(&mut self) {
        if self.recorder.is_recording() {
            match self.recorder.stop() {
                Ok(()) => self.log("Session saved."),
                Err(e) => self.log(&format!("Session flush failed: {e}")),
            }
            return;
        }
        match self.recorder.start(&self.paths.session_dir) {
            Ok(path) => {
                self.log(&format!("Recording: {}", path.display()));
                if let Err(e) = self.recorder.write_record(self.system.config(), &self.metrics) {
                    self.log(&format!("Session write failed: {e}"));
                }
            }
            Err(e) => { log::error!("{e}"); self.log(&format!("Record failed: {e}")); }
        }
    }

    fn export_chart(&mut self) {
        let target = self.system.config().target_resistance;
        let result = render_sweep_png(&self.sweep, target, PlotStyle::default())
            .and_then(|png| std::fs::write(&self.paths.chart, png).map_err(Into::into));
        match result {
            Ok(()) => {
                log::info!("chart exported to {}", self.paths.chart);
                self.log(&format!("Chart exported: {}", self.paths.chart));
            }
            Err(e) => { log::error!("{e}"); self.log(&format!("Export failed: {e}")); }
        }
    }

    fn parameter_controls(cfg: &GroundingConfiguration, ui: &mut egui::Ui) -> Vec<ParamCommand> {
        let mut out = Vec::new();

        ui.label("SITE");
        let mut soil = cfg.soil_type;
        egui::ComboBox::from_label("Soil")
            .selected_text(soil.label())
            .show_ui(ui, |ui| {
                for s in SoilCategory::ALL {
                    ui.selectable_value(&mut soil, s, format!("{} ({} Ω·m)", s.label(), s.resistivity()));
                }
            });
        if soil != cfg.soil_type { out.push(ParamCommand::SetSoil(soil)); }

        let mut weather = cfg.weather;
        egui::ComboBox::from_label("Weather")
            .selected_text(weather.label())
            .show_ui(ui, |ui| {
                for w in WeatherCondition::ALL {
                    ui.selectable_value(&mut weather, w, w.label());
                }
            });
        if weather != cfg.weather { out.push(ParamCommand::SetWeather(weather)); }

        let mut humidity = cfg.humidity;
        if ui.add(egui::Slider::new(&mut humidity, 0.0..=1.0).text("Humidity")).changed() {
            out.push(ParamCommand::SetHumidity(humidity));
        }
        let mut mast = cfg.mast_height;
        if ui.add(egui::Slider::new(&mut mast, 2.0..=40.0).text("Mast height").suffix(" m")).changed() {
            out.push(ParamCommand::SetMastHeight(mast));
        }

        ui.separator();
        ui.label("RODS");
        let mut rods = cfg.rod_count;
        if ui.add(egui::Slider::new(&mut rods, 0..=SWEEP_MAX_RODS).text("Count")).changed() {
            out.push(ParamCommand::SetRodCount(rods));
        }
        let mut length = cfg.rod_length;
        if ui.add(egui::Slider::new(&mut length, 0.0..=6.0).text("Length").suffix(" m")).changed() {
            out.push(ParamCommand::SetRodLength(length));
        }
        let mut diameter_mm = cfg.rod_diameter * 1000.0;
        if ui.add(egui::Slider::new(&mut diameter_mm, 0.0..=40.0).text("Diameter").suffix(" mm")).changed() {
            out.push(ParamCommand::SetRodDiameter(diameter_mm / 1000.0));
        }
        let mut spacing = cfg.rod_spacing;
        if ui.add(egui::Slider::new(&mut spacing, 0.3..=12.0).text("Spacing").suffix(" m")).changed() {
            out.push(ParamCommand::SetRodSpacing(spacing));
        }

        ui.separator();
        ui.label("RADIALS");
        let mut radials = cfg.radial_count;
        if ui.add(egui::Slider::new(&mut radials, 0..=MAX_RADIAL_COUNT).text("Count")).changed() {
            out.push(ParamCommand::SetRadialCount(radials));
        }
        let mut radial_len = cfg.radial_length;
        if ui.add(egui::Slider::new(&mut radial_len, 0.0..=20.0).text("Length").suffix(" m")).changed() {
            out.push(ParamCommand::SetRadialLength(radial_len));
        }

        ui.separator();
        ui.label("DESIGN");
        let mut voltage = cfg.fault_voltage;
        if ui.add(egui::Slider::new(&mut voltage, 12.0..=1000.0).logarithmic(true).text("Fault voltage").suffix(" V")).changed() {
            out.push(ParamCommand::SetFaultVoltage(voltage));
        }
        let mut target = cfg.target_resistance;
        if ui.add(egui::Slider::new(&mut target, 0.5..=50.0).logarithmic(true).text("Target").suffix(" Ω")).changed() {
            out.push(ParamCommand::SetTargetResistance(target));
        }
        if ui.button("↺ DEFAULTS").clicked() { out.push(ParamCommand::ResetDefaults); }
        out
    }

    fn metrics_panel(&self, ui: &mut egui::Ui) {
        let m = &self.metrics;
        let cfg = self.system.config();
        let col = visualizer::status_color(m.status);
        ui.horizontal(|ui| {
            ui.label(RichText::new(m.status.message()).heading().strong().color(col));
            ui.label(RichText::new(format_ohms(m.total_resistance)).heading());
            let verdict = if m.meets_target(cfg.target_resistance) { "meets" } else { "above" };
            ui.label(format!("{verdict} target {:.1} Ω", cfg.target_resistance));
        });
        egui::Grid::new("metrics").num_columns(4).spacing([24.0, 4.0]).show(ui, |ui| {
            ui.label("Resistivity");
            ui.monospace(format!("{:.1} Ω·m", m.resistivity));
            ui.label("Single rod");
            ui.monospace(format_ohms(m.single_rod_resistance));
            ui.end_row();
            ui.label("Coupling λ");
            ui.monospace(format!("{:.2}", m.coupling_factor));
            ui.label("Rod group");
            ui.monospace(format_ohms(m.parallel_resistance));
            ui.end_row();
            ui.label("Radial factor");
            ui.monospace(format!("{:.2}", m.radial_factor));
            ui.label("Efficiency");
            ui.monospace(format!("{:.0} %", m.efficiency));
            ui.end_row();
            ui.label("Fault current");
            ui.monospace(format!("{:.1} A @ {:.0} V", m.fault_current, cfg.fault_voltage));
            ui.label("Rods for target");
            ui.monospace(match minimum_rods_for_target(cfg, SWEEP_MAX_RODS) {
                Some(n) => n.to_string(),
                None => format!("> {SWEEP_MAX_RODS}"),
            });
            ui.end_row();
        });
    }

    fn sweep_plot(&self, ui: &mut egui::Ui) {
        let cfg = self.system.config();
        let points: Vec<[f64; 2]> = self
            .sweep
            .iter()
            .filter(|p| p.total_resistance.is_finite())
            .map(|p| [p.rod_count as f64, p.total_resistance])
            .collect();
        let current = self.metrics.total_resistance;
        Plot::new("sweep_plot")
            .height(220.0)
            .include_y(0.0)
            .include_y(cfg.target_resistance * 1.5)
            .allow_drag(false)
            .allow_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(PlotPoints::new(points)).name("R total").color(Color32::from_rgb(0, 200, 255)));
                plot_ui.hline(HLine::new(cfg.target_resistance).name("target").color(Color32::from_rgb(255, 171, 0)));
                if current.is_finite() && cfg.rod_count > 0 {
                    plot_ui.points(
                        Points::new(vec![[cfg.rod_count as f64, current]])
                            .radius(5.0)
                            .color(visualizer::status_color(self.metrics.status))
                            .name("current"),
                    );
                }
            });
    }

    fn design_table(&self, ui: &mut egui::Ui) {
        let cfg = self.system.config();
        let spacings: Vec<f64> = GRID_SPACING_RATIOS.iter().map(|r| r * cfg.rod_length).collect();
        let grid = design_grid(cfg, &GRID_RODS, &spacings);
        egui::Grid::new("design_table").striped(true).show(ui, |ui| {
            ui.label("rods \\ spacing");
            for s in &spacings { ui.monospace(format!("{:.1} m", s)); }
            ui.end_row();
            for (row, rods) in GRID_RODS.iter().enumerate() {
                ui.monospace(rods.to_string());
                for col in 0..spacings.len() {
                    let r = grid[[row, col]];
                    let status = GroundingStatus::classify(r);
                    ui.label(RichText::new(format_ohms(r)).monospace().color(visualizer::status_color(status)));
                }
                ui.end_row();
            }
        });
    }
}

fn format_ohms(r: f64) -> String {
    if r.is_finite() { format!("{:.2} Ω", r) } else { "∞ Ω".to_owned() }
}

impl eframe::App for EarthingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut visuals = egui::Visuals::dark();
        visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(10, 10, 15);
        ctx.set_visuals(visuals);

        let cfg = self.system.config().clone();
        let mut commands = Vec::new();
        let mut save = false;
        let mut load = false;
        let mut record = false;
        let mut export = false;

        egui::SidePanel::left("L").min_width(300.0).show(ctx, |ui| {
            ui.add_space(10.0);
            ui.heading("Earthing Lab");
            ui.label("Antenna grounding model");
            ui.separator();
            egui::ScrollArea::vertical().max_height((ui.available_height() - 220.0).max(120.0)).show(ui, |ui| {
                commands = Self::parameter_controls(&cfg, ui);
            });

            ui.separator();
            ui.label("PRESET");
            ui.text_edit_singleline(&mut self.paths.preset);
            ui.horizontal(|ui| {
                save = ui.button("💾 SAVE").clicked();
                load = ui.button("📂 LOAD").clicked();
            });

            let rec_btn_text = if self.recorder.is_recording() { "⏹ STOP" } else { "🔴 RECORD" };
            let rec_btn_col = if self.recorder.is_recording() { Color32::RED } else { Color32::DARK_GRAY };
            ui.horizontal(|ui| {
                record = ui.add(egui::Button::new(RichText::new(rec_btn_text).color(Color32::WHITE)).fill(rec_btn_col)).clicked();
                export = ui.button("🖼 EXPORT CHART").clicked();
            });

            ui.add_space(10.0);
            egui::ScrollArea::vertical().id_source("log").max_height(100.0).show(ui, |ui| {
                for m in &self.log_messages { ui.monospace(m); }
            });
        });

        self.apply_all(commands);
        if save { self.save_preset(); }
        if load { self.load_preset(); }
        if record { self.toggle_recording(); }
        if export { self.export_chart(); }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.metrics_panel(ui);
                ui.separator();
                visualizer::draw_cross_section(ui, self.system.config(), &self.metrics);
                ui.separator();
                ui.label("RESISTANCE VS. ROD COUNT");
                self.sweep_plot(ui);
                egui::CollapsingHeader::new("Design table").default_open(false).show(ui, |ui| {
                    self.design_table(ui);
                });
            });
        });
    }
}
