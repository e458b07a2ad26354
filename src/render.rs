use crate::error::{BifurcationError, Result};
use crate::sweep::BifurcationDiagram;

pub const PLOT_WIDTH: usize = 1000;
pub const PLOT_HEIGHT: usize = 700;

const BACKGROUND: u32 = 0xFFFFFF;
const MARKER: u32 = 0x000000;
const AXIS: u32 = 0x808080;
const LABEL: u32 = 0x202020;

const MARGIN_LEFT: usize = 50;
const MARGIN_RIGHT: usize = 20;
const MARGIN_TOP: usize = 30;
const MARGIN_BOTTOM: usize = 40;

const GLYPH_SCALE: usize = 2;

/// 0RGB pixel buffer, row-major, the layout minifb expects.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    buffer: Vec<u32>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, fill: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(BifurcationError::EmptyCanvas { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(BifurcationError::CanvasTooLarge { width, height })?;
        Ok(Canvas { width, height, buffer: vec![fill; len] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn buffer(&self) -> &[u32] {
        &self.buffer
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        (x < self.width && y < self.height).then(|| self.buffer[y * self.width + x])
    }

    /// Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: usize, y: usize, color: u32) {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x] = color;
        }
    }

    fn hline(&mut self, x0: usize, x1: usize, y: usize, color: u32) {
        for x in x0..=x1 {
            self.set(x, y, color);
        }
    }

    fn vline(&mut self, x: usize, y0: usize, y1: usize, color: u32) {
        for y in y0..=y1 {
            self.set(x, y, color);
        }
    }

    fn draw_char(&mut self, x: usize, y: usize, ch: char, scale: usize, color: u32) {
        for (dy, &row) in glyph(ch).iter().enumerate() {
            for dx in 0..3 {
                if row & (1 << (2 - dx)) == 0 {
                    continue;
                }
                for sy in 0..scale {
                    for sx in 0..scale {
                        self.set(x + dx * scale + sx, y + dy * scale + sy, color);
                    }
                }
            }
        }
    }

    pub fn draw_text(&mut self, x: usize, y: usize, text: &str, scale: usize, color: u32) {
        let mut offset_x = x;
        for ch in text.chars() {
            if offset_x >= self.width {
                break;
            }
            self.draw_char(offset_x, y, ch, scale, color);
            offset_x += 4 * scale;
        }
    }
}

fn text_width(text: &str, scale: usize) -> usize {
    text.chars().count() * 4 * scale
}

// 3x5 bitmap font; unknown characters render blank.
fn glyph(ch: char) -> &'static [u8; 5] {
    match ch {
        '0' => &[0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => &[0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => &[0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => &[0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => &[0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => &[0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => &[0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => &[0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => &[0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => &[0b111, 0b101, 0b111, 0b001, 0b111],
        '.' => &[0b000, 0b000, 0b000, 0b000, 0b010],
        '-' => &[0b000, 0b000, 0b111, 0b000, 0b000],
        'a' => &[0b111, 0b101, 0b111, 0b101, 0b101],
        'c' => &[0b111, 0b100, 0b100, 0b100, 0b111],
        'e' => &[0b111, 0b100, 0b111, 0b100, 0b111],
        'o' => &[0b111, 0b101, 0b101, 0b101, 0b111],
        'r' => &[0b110, 0b101, 0b110, 0b101, 0b101],
        't' => &[0b111, 0b010, 0b010, 0b010, 0b010],
        'x' => &[0b101, 0b101, 0b010, 0b101, 0b101],
        _ => &[0b000, 0b000, 0b000, 0b000, 0b000],
    }
}

/// Pixel rectangle that holds the data, inside the axis margins.
#[derive(Clone, Copy, Debug)]
struct PlotArea {
    left: usize,
    top: usize,
    right: usize,
    bottom: usize,
    r_min: f64,
    r_max: f64,
}

impl PlotArea {
    fn new(width: usize, height: usize, r_min: f64, r_max: f64) -> Self {
        let right = width.saturating_sub(MARGIN_RIGHT + 1).max(MARGIN_LEFT.min(width - 1));
        let bottom = height.saturating_sub(MARGIN_BOTTOM + 1).max(MARGIN_TOP.min(height - 1));
        PlotArea {
            left: MARGIN_LEFT.min(right),
            top: MARGIN_TOP.min(bottom),
            right,
            bottom,
            r_min,
            r_max,
        }
    }

    fn x_for(&self, r: f64) -> Option<usize> {
        if !(self.r_min..=self.r_max).contains(&r) {
            return None;
        }
        let span = self.r_max - self.r_min;
        let t = if span > 0.0 { (r - self.r_min) / span } else { 0.0 };
        Some(self.left + (t * (self.right - self.left) as f64).round() as usize)
    }

    fn y_for(&self, value: f64) -> Option<usize> {
        if !(0.0..=1.0).contains(&value) {
            return None;
        }
        Some(self.bottom - (value * (self.bottom - self.top) as f64).round() as usize)
    }
}

/// Rasterize a diagram: one black pixel per (r, attractor) pair over
/// [r_min, r_max] × [0, 1], with axes and tick labels.
pub fn render_diagram(
    diagram: &BifurcationDiagram,
    r_min: f64,
    r_max: f64,
    width: usize,
    height: usize,
) -> Result<Canvas> {
    let mut canvas = Canvas::new(width, height, BACKGROUND)?;
    let area = PlotArea::new(width, height, r_min, r_max);

    draw_axes(&mut canvas, &area);

    for &(r, value) in diagram.points() {
        if let (Some(x), Some(y)) = (area.x_for(r), area.y_for(value)) {
            canvas.set(x, y, MARKER);
        }
    }

    Ok(canvas)
}

fn draw_axes(canvas: &mut Canvas, area: &PlotArea) {
    canvas.hline(area.left, area.right, area.bottom, AXIS);
    canvas.vline(area.left, area.top, area.bottom, AXIS);

    let glyph_h = 5 * GLYPH_SCALE;

    for i in 0..=4 {
        let r = area.r_min + (area.r_max - area.r_min) * i as f64 / 4.0;
        let Some(x) = area.x_for(r) else { continue };
        canvas.vline(x, area.bottom, area.bottom + 4, AXIS);
        let label = format_tick(r);
        let lx = x.saturating_sub(text_width(&label, GLYPH_SCALE) / 2);
        canvas.draw_text(lx, area.bottom + 8, &label, GLYPH_SCALE, LABEL);
    }

    for value in [0.0, 0.5, 1.0] {
        let Some(y) = area.y_for(value) else { continue };
        canvas.hline(area.left.saturating_sub(4), area.left, y, AXIS);
        let label = format!("{value:.1}");
        let lx = area.left.saturating_sub(8 + text_width(&label, GLYPH_SCALE));
        canvas.draw_text(lx, y.saturating_sub(glyph_h / 2), &label, GLYPH_SCALE, LABEL);
    }

    canvas.draw_text(area.right.saturating_sub(4 * GLYPH_SCALE), area.bottom + 8 + glyph_h + 4, "r", GLYPH_SCALE, LABEL);
    canvas.draw_text(area.left, area.top.saturating_sub(glyph_h + 8), "attractor", GLYPH_SCALE, LABEL);
}

fn format_tick(r: f64) -> String {
    if r.fract() == 0.0 { format!("{r:.0}") } else { format!("{r:.2}") }
}
