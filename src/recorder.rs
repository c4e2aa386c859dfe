use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use crate::earthing::{EarthingError, GroundingConfiguration, GroundingMetrics};

const HEADER: &str = "elapsed_s,soil,weather,humidity,rod_count,rod_length,rod_diameter,rod_spacing,\
radial_count,radial_length,resistivity,single_rod_ohms,coupling,total_ohms,efficiency,fault_current_a,status";

/// Appends one CSV row per evaluation while a session is open.
pub struct SessionRecorder {
    writer: Option<BufWriter<File>>,
    path: Option<PathBuf>,
    started: Instant,
}

impl SessionRecorder {
    pub fn new() -> Self {
        Self { writer: None, path: None, started: Instant::now() }
    }

    /// Opens `earthing_session_<unix millis>.csv` inside `dir`, adding a
    /// `_<n>` suffix when that name is already taken.
    pub fn start(&mut self, dir: impl AsRef<Path>) -> Result<PathBuf, EarthingError> {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let dir = dir.as_ref();
        let mut path = dir.join(format!("earthing_session_{stamp}.csv"));
        let mut n = 1;
        while path.exists() {
            path = dir.join(format!("earthing_session_{stamp}_{n}.csv"));
            n += 1;
        }
        self.start_at(&path)?;
        Ok(path)
    }

    pub fn start_at(&mut self, path: &Path) -> Result<(), EarthingError> {
        self.stop()?;
        let mut w = BufWriter::new(File::create(path)?);
        writeln!(w, "{HEADER}")?;
        self.writer = Some(w);
        self.path = Some(path.to_path_buf());
        self.started = Instant::now();
        log::info!("session recording to {}", path.display());
        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), EarthingError> {
        if let Some(mut w) = self.writer.take() {
            w.flush()?;
            if let Some(path) = self.path.take() {
                log::info!("session saved to {}", path.display());
            }
        }
        Ok(())
    }

    pub fn write_record(
        &mut self,
        config: &GroundingConfiguration,
        metrics: &GroundingMetrics,
    ) -> Result<(), EarthingError> {
        let Some(w) = &mut self.writer else {
            return Ok(());
        };
        let t = self.started.elapsed().as_secs_f64();
        writeln!(
            w,
            "{:.3},{},{},{:.2},{},{},{},{},{},{},{:.3},{:.4},{},{:.4},{:.2},{:.3},{}",
            t,
            config.soil_type.tag(),
            config.weather.tag(),
            config.humidity,
            config.rod_count,
            config.rod_length,
            config.rod_diameter,
            config.rod_spacing,
            config.radial_count,
            config.radial_length,
            metrics.resistivity,
            metrics.single_rod_resistance,
            metrics.coupling_factor,
            metrics.total_resistance,
            metrics.efficiency,
            metrics.fault_current,
            metrics.status.message(),
        )?;
        Ok(())
    }

    pub fn is_recording(&self) -> bool {
        self.writer.is_some()
    }
}

impl Default for SessionRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::earthing::calculate;
    #[test]
    fn records_header_and_rows() {
        let path = std::env::temp_dir()
            .join(format!("earthing_lab_session_{}.csv", std::process::id()));
        let mut recorder = SessionRecorder::new();
        assert!(!recorder.is_recording());
        recorder.start_at(&path).unwrap();
        assert!(recorder.is_recording());
        let mut config = GroundingConfiguration::default();
        recorder.write_record(&config, &calculate(&config)).unwrap();
        config.set_rod_count(0);
        recorder.write_record(&config, &calculate(&config)).unwrap();
        recorder.stop().unwrap();
        assert!(!recorder.is_recording());
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("elapsed_s,soil"));
        assert!(lines[1].contains(",clay,sunny,"));
        assert!(lines[1].ends_with("Excellent"));
        assert!(lines[2].contains("inf"));
        assert!(lines[2].ends_with("Danger"));
        std::fs::remove_file(&path).ok();
    }
    #[test]
    fn back_to_back_sessions_get_distinct_files() {
        let dir = std::env::temp_dir().join(format!("earthing_lab_sessions_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let mut recorder = SessionRecorder::new();
        let first = recorder.start(&dir).unwrap();
        let config = GroundingConfiguration::default();
        recorder.write_record(&config, &calculate(&config)).unwrap();
        recorder.stop().unwrap();
        let second = recorder.start(&dir).unwrap();
        recorder.stop().unwrap();
        assert_ne!(first, second);
        let kept = std::fs::read_to_string(&first).unwrap();
        assert_eq!(kept.lines().count(), 2);
        std::fs::remove_dir_all(&dir).ok();
    }
    #[test]
    fn writing_without_session_is_a_no_op() {
        let mut recorder = SessionRecorder::new();
        let config = GroundingConfiguration::default();
        recorder.write_record(&config, &calculate(&config)).unwrap();
    }
}
