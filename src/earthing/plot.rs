use std::io::Cursor;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::prelude::LineSeries;
use plotters::prelude::*;
use crate::earthing::error::EarthingError;
use crate::earthing::sweep::SweepPoint;
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub curve: RGBColor,
    pub target: RGBColor,
    /// Caption, axis labels and legend. Needs a system sans-serif font.
    pub annotate: bool,
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 900,
            height: 400,
            background: RGBColor(10, 10, 15),
            curve: RGBColor(0, 200, 255),
            target: RGBColor(255, 171, 0),
            annotate: true,
        }
    }
}
/// Renders total resistance against rod count, with the design target as a
/// horizontal line, and returns PNG bytes.
pub fn render_sweep_png(
    points: &[SweepPoint],
    target_ohms: f64,
    style: PlotStyle,
) -> Result<Vec<u8>, EarthingError> {
    let finite: Vec<(f64, f64)> = points
        .iter()
        .filter(|p| p.total_resistance.is_finite())
        .map(|p| (p.rod_count as f64, p.total_resistance))
        .collect();
    if finite.is_empty() {
        return Err(EarthingError::Plot("sweep has no finite resistance values".into()));
    }
    let x_max = finite.iter().map(|(x, _)| *x).fold(1.0f64, f64::max);
    let y_max = finite
        .iter()
        .map(|(_, y)| *y)
        .fold(target_ohms, f64::max)
        .max(1e-3)
        * 1.1;
    let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&style.background)?;
        let mut builder = ChartBuilder::on(&root);
        builder.margin(10);
        if style.annotate {
            builder
                .caption(
                    "Grounding resistance vs. rod count",
                    ("sans-serif", 20).into_font().color(&WHITE),
                )
                .set_label_area_size(LabelAreaPosition::Left, 45)
                .set_label_area_size(LabelAreaPosition::Bottom, 40);
        }
        let mut chart = builder.build_cartesian_2d(1f64..x_max.max(2.0), 0f64..y_max)?;
        if style.annotate {
            chart
                .configure_mesh()
                .x_desc("rods")
                .y_desc("ohms")
                .light_line_style(&WHITE.mix(0.1))
                .draw()?;
        }
        let curve = style.curve;
        let target = style.target;
        let series = chart.draw_series(LineSeries::new(finite.iter().copied(), &curve))?;
        if style.annotate {
            series
                .label("total resistance")
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &curve));
        }
        let target_line = chart.draw_series(LineSeries::new(
            vec![(1.0, target_ohms), (x_max.max(2.0), target_ohms)],
            &target,
        ))?;
        if style.annotate {
            target_line
                .label("target")
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &target));
            chart
                .configure_series_labels()
                .border_style(&WHITE.mix(0.2))
                .background_style(&style.background)
                .draw()?;
        }
        root.present()?;
    }
    encode_png(&buffer, style.width, style.height)
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EarthingError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| EarthingError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::earthing::config::GroundingConfiguration;
    use crate::earthing::sweep::rod_count_sweep;
    fn bare() -> PlotStyle {
        PlotStyle {
            width: 200,
            height: 120,
            annotate: false,
            ..PlotStyle::default()
        }
    }
    #[test]
    fn sweep_chart_is_png() {
        let points = rod_count_sweep(&GroundingConfiguration::default(), 12);
        let png = render_sweep_png(&points, 5.0, bare()).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }
    #[test]
    fn empty_sweep_is_rejected() {
        let err = render_sweep_png(&[], 5.0, bare()).unwrap_err();
        assert!(matches!(err, EarthingError::Plot(_)));
    }
}
