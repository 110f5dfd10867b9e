use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use plotters::prelude::*;

use crate::EvaluationError;

const SVG_WIDTH: u32 = 720;
const SVG_HEIGHT: u32 = 450;
/// Default series blue, same hue as Wolfram's ColorData[97] palette.
const POINT_COLOR: RGBColor = RGBColor(0x5E, 0x81, 0xB5);
const POINT_RADIUS: i32 = 3;

/// The rendering sink the plot sampler draws into. `plot` calls this
/// synchronously with parallel x/y sequences of equal length.
pub trait ImageDrawer {
  fn draw_scatter_plot(
    &mut self,
    title: &str,
    x_label: &str,
    y_label: &str,
    xs: &[f64],
    ys: &[f64],
  ) -> Result<(), EvaluationError>;
}

/// Renders each scatter plot to a standalone SVG document and writes
/// it to a file, keeping the markup around for callers that want to
/// embed it instead.
pub struct SvgDrawer {
  output: PathBuf,
  last_svg: Option<String>,
}

impl SvgDrawer {
  pub fn new(output: impl Into<PathBuf>) -> Self {
    SvgDrawer {
      output: output.into(),
      last_svg: None,
    }
  }

  /// The markup produced by the most recent draw call, if any.
  pub fn last_svg(&self) -> Option<&str> {
    self.last_svg.as_deref()
  }
}

impl ImageDrawer for SvgDrawer {
  fn draw_scatter_plot(
    &mut self,
    title: &str,
    x_label: &str,
    y_label: &str,
    xs: &[f64],
    ys: &[f64],
  ) -> Result<(), EvaluationError> {
    let svg = scatter_plot_svg(title, x_label, y_label, xs, ys)?;
    std::fs::write(&self.output, &svg).map_err(|e| {
      EvaluationError::RenderError(format!(
        "cannot write {}: {e}",
        self.output.display()
      ))
    })?;
    self.last_svg = Some(svg);
    Ok(())
  }
}

/// Generate the SVG for one scatter plot.
pub fn scatter_plot_svg(
  title: &str,
  x_label: &str,
  y_label: &str,
  xs: &[f64],
  ys: &[f64],
) -> Result<String, EvaluationError> {
  let (x_min, x_max) = axis_range(xs);
  let (y_min, y_max) = axis_range(ys);

  let mut buf = String::new();
  {
    let root = SVGBackend::with_string(&mut buf, (SVG_WIDTH, SVG_HEIGHT))
      .into_drawing_area();
    root
      .fill(&WHITE)
      .map_err(|e| EvaluationError::RenderError(format!("plot: {e}")))?;

    let mut chart = ChartBuilder::on(&root)
      .caption(title, ("sans-serif", 20.0).into_font())
      .margin(10)
      .x_label_area_size(35)
      .y_label_area_size(45)
      .build_cartesian_2d(x_min..x_max, y_min..y_max)
      .map_err(|e| EvaluationError::RenderError(format!("plot: {e}")))?;

    chart
      .configure_mesh()
      .x_desc(x_label)
      .y_desc(y_label)
      .draw()
      .map_err(|e| EvaluationError::RenderError(format!("plot: {e}")))?;

    chart
      .draw_series(
        xs.iter()
          .zip(ys.iter())
          .filter(|(x, y)| x.is_finite() && y.is_finite())
          .map(|(x, y)| Circle::new((*x, *y), POINT_RADIUS, POINT_COLOR.filled())),
      )
      .map_err(|e| EvaluationError::RenderError(format!("plot: {e}")))?;
  }
  Ok(buf)
}

/// Axis bounds covering the finite values, widened when the data is
/// degenerate so plotters never sees an empty range.
fn axis_range(values: &[f64]) -> (f64, f64) {
  let mut min = f64::INFINITY;
  let mut max = f64::NEG_INFINITY;
  for &value in values {
    if value.is_finite() {
      min = min.min(value);
      max = max.max(value);
    }
  }
  if min > max {
    // No finite samples at all
    return (0.0, 1.0);
  }
  if min == max {
    return (min - 1.0, max + 1.0);
  }
  (min, max)
}

/// A captured `draw_scatter_plot` call.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterPlot {
  pub title: String,
  pub x_label: String,
  pub y_label: String,
  pub xs: Vec<f64>,
  pub ys: Vec<f64>,
}

/// Records draw calls instead of rendering them. Clones share the same
/// buffer, so tests can keep a handle while the environment owns the
/// drawer.
#[derive(Clone, Default)]
pub struct RecordingDrawer {
  plots: Rc<RefCell<Vec<ScatterPlot>>>,
}

impl RecordingDrawer {
  pub fn plots(&self) -> Vec<ScatterPlot> {
    self.plots.borrow().clone()
  }
}

impl ImageDrawer for RecordingDrawer {
  fn draw_scatter_plot(
    &mut self,
    title: &str,
    x_label: &str,
    y_label: &str,
    xs: &[f64],
    ys: &[f64],
  ) -> Result<(), EvaluationError> {
    self.plots.borrow_mut().push(ScatterPlot {
      title: title.to_string(),
      x_label: x_label.to_string(),
      y_label: y_label.to_string(),
      xs: xs.to_vec(),
      ys: ys.to_vec(),
    });
    Ok(())
  }
}
