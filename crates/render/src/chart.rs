//! Grid figures built from plot, histogram and text panels.

use crate::canvas::{self, to_i32, Canvas, Color, Rect};
use crate::error::RenderError;
use crate::font;
use image::{ImageFormat, RgbImage};
use rl::metrics::Histogram;
use std::path::Path;

const FIGURE_TITLE_BAND: u32 = 40;
const CELL_MARGIN: u32 = 6;
const PANEL_TITLE_BAND: u32 = 30;
const LEFT_MARGIN: u32 = 74;
const RIGHT_MARGIN: u32 = 14;
const BOTTOM_MARGIN: u32 = 44;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LineStyle {
    #[default]
    Solid,
    /// Piecewise constant: each value holds until the next sample.
    Steps,
}

/// One line drawn on a [`Plot`].
#[derive(Clone, Debug)]
pub struct Series {
    pub label: Option<String>,
    pub points: Vec<(f32, f32)>,
    pub color: Color,
    pub style: LineStyle,
    pub width: u32,
}

impl Series {
    pub fn new(points: Vec<(f32, f32)>, color: Color) -> Self {
        Self { label: None, points, color, style: LineStyle::Solid, width: 2 }
    }

    /// `values` plotted against their index.
    pub fn indexed(values: &[f32], color: Color) -> Self {
        Self::new(values.iter().enumerate().map(|(i, &v)| (i as f32, v)).collect(), color)
    }

    #[must_use]
    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn steps(mut self) -> Self {
        self.style = LineStyle::Steps;
        self
    }

    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = width.max(1);
        self
    }
}

/// Horizontal or vertical marker line spanning the whole plot area.
#[derive(Clone, Debug)]
pub struct RefLine {
    pub value: f32,
    pub color: Color,
    pub label: Option<String>,
    pub dashed: bool,
}

impl RefLine {
    pub fn dashed(value: f32, color: Color) -> Self {
        Self { value, color, label: None, dashed: true }
    }

    pub fn solid(value: f32, color: Color) -> Self {
        Self { value, color, label: None, dashed: false }
    }

    #[must_use]
    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct Plot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub hlines: Vec<RefLine>,
    pub vlines: Vec<RefLine>,
    /// Fixed y range; derived from the data when unset.
    pub y_limits: Option<(f32, f32)>,
    /// Replaces the numeric y tick labels.
    pub y_ticks: Option<Vec<(f32, String)>>,
    pub legend: bool,
    pub grid: bool,
}

impl Plot {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), grid: true, ..Self::default() }
    }

    #[must_use]
    pub fn labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = x.into();
        self.y_label = y.into();
        self
    }

    #[must_use]
    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    #[must_use]
    pub fn hline(mut self, line: RefLine) -> Self {
        self.hlines.push(line);
        self
    }

    #[must_use]
    pub fn vline(mut self, line: RefLine) -> Self {
        self.vlines.push(line);
        self
    }

    #[must_use]
    pub fn y_limits(mut self, low: f32, high: f32) -> Self {
        self.y_limits = Some((low, high));
        self
    }

    #[must_use]
    pub fn y_ticks(mut self, ticks: Vec<(f32, String)>) -> Self {
        self.y_ticks = Some(ticks);
        self
    }

    #[must_use]
    pub fn with_legend(mut self) -> Self {
        self.legend = true;
        self
    }

    fn legend_entries(&self) -> Vec<(&str, Color, bool)> {
        let series = self
            .series
            .iter()
            .filter_map(|s| s.label.as_deref().map(|l| (l, s.color, false)));
        let lines = self
            .hlines
            .iter()
            .chain(&self.vlines)
            .filter_map(|r| r.label.as_deref().map(|l| (l, r.color, r.dashed)));
        series.chain(lines).collect()
    }
}

#[derive(Clone, Debug)]
pub struct HistogramPanel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub histogram: Histogram,
    pub color: Color,
}

impl HistogramPanel {
    pub fn new(title: impl Into<String>, histogram: Histogram, color: Color) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: "Frequency".to_owned(),
            histogram,
            color,
        }
    }

    #[must_use]
    pub fn labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = x.into();
        self.y_label = y.into();
        self
    }
}

/// Monospace text block.
#[derive(Clone, Debug)]
pub struct TextPanel {
    pub text: String,
    /// Draw on a shaded, framed background.
    pub boxed: bool,
    /// Largest font scale to use; shrunk until the block fits.
    pub scale: u32,
    pub centered: bool,
}

impl TextPanel {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), boxed: false, scale: 2, centered: false }
    }

    #[must_use]
    pub fn boxed(mut self) -> Self {
        self.boxed = true;
        self
    }

    #[must_use]
    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    #[must_use]
    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }
}

#[derive(Clone, Debug)]
pub enum Panel {
    Plot(Plot),
    Histogram(HistogramPanel),
    Text(TextPanel),
}

impl From<Plot> for Panel {
    fn from(plot: Plot) -> Self {
        Panel::Plot(plot)
    }
}

impl From<HistogramPanel> for Panel {
    fn from(histogram: HistogramPanel) -> Self {
        Panel::Histogram(histogram)
    }
}

impl From<TextPanel> for Panel {
    fn from(text: TextPanel) -> Self {
        Panel::Text(text)
    }
}

#[derive(Clone, Debug)]
struct Cell {
    row: usize,
    col: usize,
    row_span: usize,
    col_span: usize,
    panel: Panel,
}

/// A fixed-size image split into a `rows x cols` grid of panels.
#[derive(Clone, Debug)]
pub struct Figure {
    width: u32,
    height: u32,
    rows: usize,
    cols: usize,
    title: Option<String>,
    cells: Vec<Cell>,
}

impl Figure {
    pub fn new(width: u32, height: u32, rows: usize, cols: usize) -> Self {
        Self { width, height, rows, cols, title: None, cells: Vec::new() }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn panel_count(&self) -> usize {
        self.cells.len()
    }

    pub fn place(&mut self, row: usize, col: usize, panel: impl Into<Panel>) -> &mut Self {
        self.place_span(row, col, 1, 1, panel)
    }

    /// Place a panel covering `row_span` rows and `col_span` columns starting
    /// at `(row, col)`. Grid bounds are checked when rendering.
    pub fn place_span(
        &mut self,
        row: usize,
        col: usize,
        row_span: usize,
        col_span: usize,
        panel: impl Into<Panel>,
    ) -> &mut Self {
        self.cells.push(Cell { row, col, row_span, col_span, panel: panel.into() });
        self
    }

    /// Draw every panel onto a white image.
    ///
    /// # Errors
    ///
    /// [`RenderError::EmptyFigure`] for a figure without panels or with a zero
    /// dimension, [`RenderError::CellOutOfGrid`] for a panel placed outside
    /// the grid.
    pub fn render(&self) -> Result<RgbImage, RenderError> {
        if self.cells.is_empty() || self.width == 0 || self.height == 0 || self.rows == 0 || self.cols == 0 {
            return Err(RenderError::EmptyFigure);
        }
        for cell in &self.cells {
            let fits = cell.row_span > 0
                && cell.col_span > 0
                && cell.row + cell.row_span <= self.rows
                && cell.col + cell.col_span <= self.cols;
            if !fits {
                return Err(RenderError::CellOutOfGrid {
                    row: cell.row,
                    col: cell.col,
                    row_span: cell.row_span,
                    col_span: cell.col_span,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
        }

        let mut canvas = Canvas::new(self.width, self.height, canvas::WHITE);
        let band = match &self.title {
            Some(title) => {
                canvas.text_centered(to_i32(self.width / 2), 10, title, 3, canvas::BLACK);
                FIGURE_TITLE_BAND
            }
            None => 0,
        };
        let cell_w = self.width / grid_units(self.cols);
        let cell_h = self.height.saturating_sub(band) / grid_units(self.rows);

        for cell in &self.cells {
            let (x, w) = span(cell.col, cell.col_span, cell_w);
            let (y, h) = span(cell.row, cell.row_span, cell_h);
            let rect = Rect::new(x, y + to_i32(band), w, h).inset(CELL_MARGIN);
            match &cell.panel {
                Panel::Plot(plot) => draw_plot(&mut canvas, rect, plot),
                Panel::Histogram(hist) => draw_histogram(&mut canvas, rect, hist),
                Panel::Text(text) => draw_text(&mut canvas, rect, text),
            }
        }
        Ok(canvas.into_image())
    }

    /// Render and write a PNG to `path`, creating missing parent directories.
    ///
    /// # Errors
    ///
    /// Everything [`Figure::render`] reports, plus I/O and encoding failures.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        let image = self.render()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        image.save_with_format(path, ImageFormat::Png)?;
        tracing::debug!(path = %path.display(), panels = self.cells.len(), "saved figure");
        Ok(())
    }
}

fn grid_units(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX).max(1)
}

/// Pixel offset and length of `len` grid units starting at unit `start`.
fn span(start: usize, len: usize, unit: u32) -> (i32, u32) {
    let unit = u64::from(unit);
    let offset = start as u64 * unit;
    let length = len as u64 * unit;
    (
        i32::try_from(offset).unwrap_or(i32::MAX),
        u32::try_from(length).unwrap_or(u32::MAX),
    )
}

/// Roughly `target` evenly spaced round values inside `[low, high]`.
pub fn nice_ticks(low: f32, high: f32, target: usize) -> Vec<f32> {
    if !(low.is_finite() && high.is_finite()) || high <= low || target == 0 {
        return Vec::new();
    }
    let step = nice_step((high - low) / target as f32);
    let first = (low / step).ceil() as i64;
    let last = (high / step).floor() as i64;
    (first..=last).map(|i| i as f32 * step).collect()
}

fn nice_step(raw: f32) -> f32 {
    let magnitude = 10f32.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Tick label with just enough decimals to tell neighbours `step` apart.
pub fn format_tick(value: f32, step: f32) -> String {
    let value = if (value / step).abs() < 1e-3 { 0.0 } else { value };
    let decimals = if step >= 1.0 || step <= 0.0 {
        0
    } else {
        (-step.log10() - 1e-4).ceil() as usize
    };
    format!("{value:.decimals$}")
}

fn finite_range(values: impl Iterator<Item = f32>) -> Option<(f32, f32)> {
    values.filter(|v| v.is_finite()).fold(None, |range, v| match range {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

fn padded(range: Option<(f32, f32)>, fraction: f32) -> (f32, f32) {
    match range {
        None => (0.0, 1.0),
        Some((lo, hi)) if lo == hi => (lo - 0.5, hi + 0.5),
        Some((lo, hi)) => {
            let pad = (hi - lo) * fraction;
            (lo - pad, hi + pad)
        }
    }
}

fn ordered((a, b): (f32, f32)) -> (f32, f32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Maps data coordinates onto the plot area of a panel.
struct Frame {
    area: Rect,
    x: (f32, f32),
    y: (f32, f32),
}

impl Frame {
    /// Pixel column of `v`, pinned to one pixel outside the plot area.
    fn sx(&self, v: f32) -> i32 {
        let t = (v - self.x.0) / (self.x.1 - self.x.0);
        let offset = (t * self.area.w.saturating_sub(1) as f32).round() as i32;
        self.area.x.saturating_add(offset).clamp(self.area.x - 1, self.area.right())
    }

    /// Pixel row of `v`, pinned to one pixel outside the plot area.
    fn sy(&self, v: f32) -> i32 {
        let t = (v - self.y.0) / (self.y.1 - self.y.0);
        let offset = (t * self.area.h.saturating_sub(1) as f32).round() as i32;
        (self.area.bottom() - 1).saturating_sub(offset).clamp(self.area.y - 1, self.area.bottom())
    }

    fn contains(&self, (x, y): (f32, f32)) -> bool {
        let (x_lo, x_hi) = ordered(self.x);
        let (y_lo, y_hi) = ordered(self.y);
        (x_lo..=x_hi).contains(&x) && (y_lo..=y_hi).contains(&y)
    }

    /// Liang-Barsky clip of the data segment `a`-`b` to the frame limits.
    fn clip(&self, a: (f32, f32), b: (f32, f32)) -> Option<((f32, f32), (f32, f32))> {
        let (x_lo, x_hi) = ordered(self.x);
        let (y_lo, y_hi) = ordered(self.y);
        let (dx, dy) = (b.0 - a.0, b.1 - a.1);
        let (mut t0, mut t1) = (0.0_f32, 1.0_f32);
        for (p, q) in [(-dx, a.0 - x_lo), (dx, x_hi - a.0), (-dy, a.1 - y_lo), (dy, y_hi - a.1)] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return None;
            }
        }
        let at = |t: f32| (a.0 + t * dx, a.1 + t * dy);
        Some((at(t0), at(t1)))
    }

    /// Clip `a`-`b` and draw what is left.
    fn segment(&self, canvas: &mut Canvas, a: (f32, f32), b: (f32, f32), series: &Series) {
        if let Some((a, b)) = self.clip(a, b) {
            canvas.thick_line(self.sx(a.0), self.sy(a.1), self.sx(b.0), self.sy(b.1), series.width, series.color);
        }
    }
}

struct Axes<'a> {
    title: &'a str,
    x_label: &'a str,
    y_label: &'a str,
    x: (f32, f32),
    y: (f32, f32),
    y_ticks: Option<&'a [(f32, String)]>,
    grid: bool,
}

/// Title, grid, axis box, ticks and labels; returns the data area.
fn draw_axes(canvas: &mut Canvas, rect: Rect, axes: &Axes<'_>) -> Frame {
    canvas.text_centered(rect.x + to_i32(rect.w / 2), rect.y + 6, axes.title, 2, canvas::BLACK);
    let area = Rect::new(
        rect.x + to_i32(LEFT_MARGIN),
        rect.y + to_i32(PANEL_TITLE_BAND),
        rect.w.saturating_sub(LEFT_MARGIN + RIGHT_MARGIN),
        rect.h.saturating_sub(PANEL_TITLE_BAND + BOTTOM_MARGIN),
    );
    let frame = Frame { area, x: axes.x, y: axes.y };

    let x_ticks = nice_ticks(axes.x.0, axes.x.1, 6);
    let x_step = tick_step(&x_ticks);
    let y_ticks: Vec<(f32, String)> = match axes.y_ticks {
        Some(ticks) => ticks.to_vec(),
        None => {
            let ticks = nice_ticks(axes.y.0, axes.y.1, 5);
            let step = tick_step(&ticks);
            ticks.into_iter().map(|t| (t, format_tick(t, step))).collect()
        }
    };

    if axes.grid {
        for &t in &x_ticks {
            let px = frame.sx(t);
            canvas.line(px, area.y, px, area.bottom() - 1, canvas::GRID);
        }
        for (t, _) in &y_ticks {
            let py = frame.sy(*t);
            canvas.line(area.x, py, area.right() - 1, py, canvas::GRID);
        }
    }
    canvas.stroke_rect(area.x, area.y, area.w, area.h, canvas::AXIS);

    for &t in &x_ticks {
        let px = frame.sx(t);
        canvas.line(px, area.bottom(), px, area.bottom() + 3, canvas::AXIS);
        canvas.text_centered(px, area.bottom() + 7, &format_tick(t, x_step), 1, canvas::AXIS);
    }
    for (t, label) in &y_ticks {
        let py = frame.sy(*t);
        canvas.line(area.x - 4, py, area.x - 1, py, canvas::AXIS);
        let width = to_i32(font::text_width(label, 1));
        canvas.text(area.x - 8 - width, py - 3, label, 1, canvas::AXIS);
    }

    if !axes.x_label.is_empty() {
        canvas.text_centered(area.x + to_i32(area.w / 2), area.bottom() + 22, axes.x_label, 2, canvas::BLACK);
    }
    if !axes.y_label.is_empty() {
        let half = to_i32(font::text_width(axes.y_label, 2) / 2);
        canvas.text_vertical(rect.x + 2, area.y + to_i32(area.h / 2) + half, axes.y_label, 2, canvas::BLACK);
    }
    frame
}

fn tick_step(ticks: &[f32]) -> f32 {
    match ticks {
        [a, b, ..] => b - a,
        _ => 1.0,
    }
}

fn draw_ref_line(canvas: &mut Canvas, (x0, y0, x1, y1): (i32, i32, i32, i32), line: &RefLine) {
    if line.dashed {
        canvas.dashed_line(x0, y0, x1, y1, 6, line.color);
    } else {
        canvas.line(x0, y0, x1, y1, line.color);
    }
}

fn draw_series(canvas: &mut Canvas, frame: &Frame, series: &Series) {
    let finite = |p: &(f32, f32)| p.0.is_finite() && p.1.is_finite();
    if let [only] = series.points.as_slice() {
        if finite(only) && frame.contains(*only) {
            let w = series.width + 2;
            let r = to_i32(w / 2);
            canvas.fill_rect(frame.sx(only.0) - r, frame.sy(only.1) - r, w, w, series.color);
        }
        return;
    }
    for pair in series.points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if !(finite(&a) && finite(&b)) {
            continue;
        }
        match series.style {
            LineStyle::Solid => frame.segment(canvas, a, b, series),
            LineStyle::Steps => {
                let corner = (b.0, a.1);
                frame.segment(canvas, a, corner, series);
                frame.segment(canvas, corner, b, series);
            }
        }
    }
}

fn draw_legend(canvas: &mut Canvas, area: Rect, entries: &[(&str, Color, bool)]) {
    if entries.is_empty() {
        return;
    }
    let text_w = entries.iter().map(|(l, ..)| font::text_width(l, 1)).max().unwrap_or(0);
    let row_h = 14;
    let w = text_w + 36;
    let h = u32::try_from(entries.len()).unwrap_or(0) * row_h + 8;
    let (x, y) = (area.right() - to_i32(w) - 6, area.y + 6);
    canvas.fill_rect(x, y, w, h, canvas::WHITE);
    canvas.stroke_rect(x, y, w, h, canvas::GRAY);
    for (i, (label, color, dashed)) in entries.iter().enumerate() {
        let row_y = y + 4 + to_i32(u32::try_from(i).unwrap_or(0) * row_h);
        let mid = row_y + 3;
        if *dashed {
            canvas.dashed_line(x + 6, mid, x + 26, mid, 4, *color);
        } else {
            canvas.thick_line(x + 6, mid, x + 26, mid, 2, *color);
        }
        canvas.text(x + 30, row_y, label, 1, canvas::BLACK);
    }
}

fn draw_plot(canvas: &mut Canvas, rect: Rect, plot: &Plot) {
    let xs = plot
        .series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.0))
        .chain(plot.vlines.iter().map(|l| l.value));
    let x = padded(finite_range(xs), 0.02);
    let y = plot
        .y_limits
        .filter(|(lo, hi)| lo.is_finite() && hi.is_finite() && lo < hi)
        .unwrap_or_else(|| {
            let ys = plot
                .series
                .iter()
                .flat_map(|s| s.points.iter().map(|p| p.1))
                .chain(plot.hlines.iter().map(|l| l.value));
            padded(finite_range(ys), 0.05)
        });

    let frame = draw_axes(
        canvas,
        rect,
        &Axes {
            title: &plot.title,
            x_label: &plot.x_label,
            y_label: &plot.y_label,
            x,
            y,
            y_ticks: plot.y_ticks.as_deref(),
            grid: plot.grid,
        },
    );
    let area = frame.area;
    canvas.clipped(area, |c| {
        for line in &plot.hlines {
            let py = frame.sy(line.value);
            draw_ref_line(c, (area.x, py, area.right() - 1, py), line);
        }
        for line in &plot.vlines {
            let px = frame.sx(line.value);
            draw_ref_line(c, (px, area.y, px, area.bottom() - 1), line);
        }
        for series in &plot.series {
            draw_series(c, &frame, series);
        }
    });
    if plot.legend {
        draw_legend(canvas, area, &plot.legend_entries());
    }
}

fn draw_histogram(canvas: &mut Canvas, rect: Rect, panel: &HistogramPanel) {
    let hist = &panel.histogram;
    let x = match (hist.edges.first(), hist.edges.last()) {
        (Some(&lo), Some(&hi)) if lo < hi => (lo, hi),
        _ => (0.0, 1.0),
    };
    let y = (0.0, hist.max_count().max(1) as f32 * 1.05);
    let frame = draw_axes(
        canvas,
        rect,
        &Axes {
            title: &panel.title,
            x_label: &panel.x_label,
            y_label: &panel.y_label,
            x,
            y,
            y_ticks: None,
            grid: true,
        },
    );
    let base = frame.sy(0.0);
    canvas.clipped(frame.area, |c| {
        for (i, &count) in hist.counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let (left, right) = (frame.sx(hist.edges[i]), frame.sx(hist.edges[i + 1]));
            let top = frame.sy(count as f32);
            let w = u32::try_from(right - left).unwrap_or(0).max(1);
            let h = u32::try_from(base - top + 1).unwrap_or(0);
            c.fill_rect(left, top, w, h, panel.color);
            c.stroke_rect(left, top, w + 1, h, canvas::BLACK);
        }
    });
}

fn draw_text(canvas: &mut Canvas, rect: Rect, panel: &TextPanel) {
    const PADDING: u32 = 12;
    let inner = rect.inset(4);
    if panel.boxed {
        canvas.fill_rect(inner.x, inner.y, inner.w, inner.h, canvas::faded(canvas::WHEAT, 0.5));
        canvas.stroke_rect(inner.x, inner.y, inner.w, inner.h, canvas::GRAY);
    }

    let lines: Vec<&str> = panel.text.lines().collect();
    let columns = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let rows = u32::try_from(lines.len()).unwrap_or(u32::MAX);
    let columns = u32::try_from(columns).unwrap_or(u32::MAX);
    let block = |scale: u32| {
        let line_h = (font::GLYPH_HEIGHT + 3) * scale;
        (columns.saturating_mul(font::ADVANCE * scale), rows.saturating_mul(line_h), line_h)
    };
    let room = (inner.w.saturating_sub(2 * PADDING), inner.h.saturating_sub(2 * PADDING));
    let mut scale = panel.scale.max(1);
    while scale > 1 {
        let (w, h, _) = block(scale);
        if w <= room.0 && h <= room.1 {
            break;
        }
        scale -= 1;
    }
    let (block_w, block_h, line_h) = block(scale);

    let (x0, y0) = if panel.centered {
        (
            inner.x + to_i32(inner.w.saturating_sub(block_w) / 2),
            inner.y + to_i32(inner.h.saturating_sub(block_h) / 2),
        )
    } else {
        (inner.x + to_i32(PADDING), inner.y + to_i32(PADDING))
    };
    canvas.clipped(inner, |c| {
        let mut y = y0;
        for line in &lines {
            c.text(x0, y, line, scale, canvas::BLACK);
            y += to_i32(line_h);
        }
    });
}
