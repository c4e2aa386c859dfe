// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
mod earthing;
mod engine;
mod gui;
mod recorder;
mod types;
mod visualizer;
use anyhow::Context;
use eframe::egui;
use egui::IconData;
use earthing::GroundingConfiguration;
// 32x32 earth symbol: a stem over three shrinking bars
fn app_icon() -> IconData {
    let size = 32u32;
    let img = image::RgbaImage::from_fn(size, size, |x, y| {
        let x = x as i32 - 16;
        let y = y as i32;
        let stem = x.abs() <= 1 && (4..16).contains(&y);
        let bar = |row: i32, half: i32| (row..row + 3).contains(&y) && x.abs() <= half;
        if stem || bar(16, 13) || bar(21, 9) || bar(26, 4) {
            image::Rgba([0, 200, 83, 255])
        } else {
            image::Rgba([0, 0, 0, 0])
        }
    });
    IconData {
        rgba: img.into_raw(),
        width: size,
        height: size,
    }
}
// Optional first argument: a JSON preset to start from
fn initial_config() -> anyhow::Result<GroundingConfiguration> {
    match std::env::args().nth(1) {
        Some(path) => GroundingConfiguration::load_preset(&path)
            .with_context(|| format!("loading preset {path}")),
        None => Ok(GroundingConfiguration::default()),
    }
}
// entry point
fn main() -> eframe::Result<()> {
    env_logger::init();
    let config = initial_config().unwrap_or_else(|e| {
        log::error!("{e:#}; starting from defaults");
        GroundingConfiguration::default()
    });
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1280.0, 860.0])
        .with_min_inner_size([1000.0, 700.0])
        .with_title("Earthing Lab")
        .with_icon(app_icon());
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "EarthingLab",
        options,
        Box::new(move |_cc| Box::new(gui::EarthingApp::new(config))),
    )
}
