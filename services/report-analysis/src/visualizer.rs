//! # Trend Chart Rendering
//!
//! Renders PNG line charts for the extracted measurement sequences: a
//! combined blood pressure chart plus one chart each for RBC and glucose.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::Local;
use plotters::prelude::*;
use tracing::info;
use vitalscan_models::{ExtractionResult, MeasurementKind};
use vitalscan_utils::{ChartConfig, StorageConfig, VitalScanError, VitalScanResult};

const SYSTOLIC_COLOR: RGBColor = RGBColor(0x34, 0x98, 0xdb);
const DIASTOLIC_COLOR: RGBColor = RGBColor(0xe7, 0x4c, 0x3c);
const RBC_COLOR: RGBColor = RGBColor(0x2e, 0xcc, 0x71);
const GLUCOSE_COLOR: RGBColor = RGBColor(0x9b, 0x59, 0xb6);

struct ChartSeries<'a> {
    label: &'static str,
    color: RGBColor,
    values: &'a [f64],
}

pub struct ChartRenderer {
    chart_dir: PathBuf,
    public_prefix: String,
    width: u32,
    height: u32,
}

impl ChartRenderer {
    pub fn new(storage: &StorageConfig, charts: &ChartConfig) -> Self {
        Self {
            chart_dir: PathBuf::from(&storage.chart_dir),
            public_prefix: storage.public_chart_path.clone(),
            width: charts.width,
            height: charts.height,
        }
    }

    /// Renderer writing into `dir` with default dimensions and URL prefix.
    pub fn with_output_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            chart_dir: dir.into(),
            public_prefix: "/static".to_string(),
            width: 1000,
            height: 600,
        }
    }

    /// Renders every chart the extraction has data for and returns chart
    /// name mapped to public URL path.
    ///
    /// The blood pressure chart is produced only when BOTH systolic and
    /// diastolic carry values; single-series charts only when their kind
    /// does. Filenames carry a second-resolution timestamp so repeated
    /// analyses never overwrite earlier artifacts. The first failed render
    /// aborts the remaining charts and fails the whole analysis.
    pub fn render_all(
        &self,
        extraction: &ExtractionResult,
    ) -> VitalScanResult<BTreeMap<String, String>> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let mut visualizations = BTreeMap::new();

        let systolic = extraction.values(MeasurementKind::Systolic);
        let diastolic = extraction.values(MeasurementKind::Diastolic);
        if !systolic.is_empty() && !diastolic.is_empty() {
            let file = format!("bp_{timestamp}.png");
            self.render_line_chart(
                &file,
                "blood_pressure",
                "Blood Pressure Trend",
                MeasurementKind::Systolic.unit(),
                &[
                    ChartSeries {
                        label: MeasurementKind::Systolic.display_name(),
                        color: SYSTOLIC_COLOR,
                        values: systolic,
                    },
                    ChartSeries {
                        label: MeasurementKind::Diastolic.display_name(),
                        color: DIASTOLIC_COLOR,
                        values: diastolic,
                    },
                ],
            )?;
            visualizations.insert("blood_pressure".to_string(), self.public_path(&file));
        }

        let rbc = extraction.values(MeasurementKind::Rbc);
        if !rbc.is_empty() {
            let file = format!("rbc_{timestamp}.png");
            self.render_line_chart(
                &file,
                "rbc",
                "Red Blood Cell Count Trend",
                MeasurementKind::Rbc.unit(),
                &[ChartSeries {
                    label: MeasurementKind::Rbc.display_name(),
                    color: RBC_COLOR,
                    values: rbc,
                }],
            )?;
            visualizations.insert("rbc".to_string(), self.public_path(&file));
        }

        let glucose = extraction.values(MeasurementKind::Glucose);
        if !glucose.is_empty() {
            let file = format!("glucose_{timestamp}.png");
            self.render_line_chart(
                &file,
                "glucose",
                "Blood Glucose Trend",
                MeasurementKind::Glucose.unit(),
                &[ChartSeries {
                    label: MeasurementKind::Glucose.display_name(),
                    color: GLUCOSE_COLOR,
                    values: glucose,
                }],
            )?;
            visualizations.insert("glucose".to_string(), self.public_path(&file));
        }

        Ok(visualizations)
    }

    fn public_path(&self, file: &str) -> String {
        format!("{}/{}", self.public_prefix.trim_end_matches('/'), file)
    }

    fn render_line_chart(
        &self,
        file: &str,
        chart_name: &str,
        title: &str,
        unit: &str,
        series: &[ChartSeries<'_>],
    ) -> VitalScanResult<()> {
        let path = self.chart_dir.join(file);
        let chart_err =
            |e: String| VitalScanError::artifact_write(chart_name, e);

        let max_len = series.iter().map(|s| s.values.len()).max().unwrap_or(0);
        let y_min = series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(f64::INFINITY, f64::min);
        let y_max = series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(f64::NEG_INFINITY, f64::max);
        // Pad the axis; a single-value series still needs a non-degenerate
        // range.
        let span = (y_max - y_min).max(1.0);
        let y_range = (y_min - 0.1 * span)..(y_max + 0.1 * span);

        let root = BitMapBackend::new(&path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| chart_err(e.to_string()))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(1..(max_len as i32 + 1), y_range)
            .map_err(|e| chart_err(e.to_string()))?;

        chart
            .configure_mesh()
            .x_labels(max_len.min(10))
            .x_desc("Measurement")
            .y_desc(unit)
            .light_line_style(ShapeStyle::from(&RGBColor(220, 220, 220)))
            .draw()
            .map_err(|e| chart_err(e.to_string()))?;

        for s in series {
            let color = s.color;
            let points: Vec<(i32, f64)> = s
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| (i as i32 + 1, *v))
                .collect();

            chart
                .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
                .map_err(|e| chart_err(e.to_string()))?
                .label(s.label)
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });

            chart
                .draw_series(
                    points
                        .iter()
                        .map(|(x, y)| Circle::new((*x, *y), 3, color.filled())),
                )
                .map_err(|e| chart_err(e.to_string()))?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| chart_err(e.to_string()))?;

        root.present().map_err(|e| chart_err(e.to_string()))?;
        info!(chart = chart_name, path = %path.display(), "Chart written");
        Ok(())
    }
}
