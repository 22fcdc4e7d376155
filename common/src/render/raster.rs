use super::{Color, Surface};

/// In-memory RGBA pixel buffer.
///
/// A pixel is painted when its centre lies inside the shape, so edges are
/// hard (no anti-aliasing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Self {
        Raster {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; width as usize * height as usize],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Raw RGBA bytes, row major.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|c| [c.r, c.g, c.b, c.a])
            .collect()
    }

    fn fill_where(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color, inside: impl Fn(f64, f64) -> bool) {
        let x0 = x.floor().max(0.0) as u32;
        let y0 = y.floor().max(0.0) as u32;
        let x1 = ((x + w).ceil().max(0.0) as u32).min(self.width);
        let y1 = ((y + h).ceil().max(0.0) as u32).min(self.height);

        for py in y0..y1 {
            for px in x0..x1 {
                if inside(px as f64 + 0.5, py as f64 + 0.5) {
                    let idx = (py * self.width + px) as usize;
                    self.pixels[idx] = color.over(self.pixels[idx]);
                }
            }
        }
    }
}

impl Surface for Raster {
    fn width(&self) -> f64 {
        self.width as f64
    }

    fn height(&self) -> f64 {
        self.height as f64
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.fill_where(x, y, w, h, color, |px, py| {
            px >= x && px < x + w && py >= y && py < y + h
        });
    }

    fn fill_round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64, color: Color) {
        let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
        self.fill_where(x, y, w, h, color, |px, py| {
            if px < x || px >= x + w || py < y || py >= y + h {
                return false;
            }
            // Distance to the rectangle shrunk by r decides the corners
            let nx = px.clamp(x + r, x + w - r);
            let ny = py.clamp(y + r, y + h - r);
            (px - nx).powi(2) + (py - ny).powi(2) <= r * r
        });
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        self.fill_where(cx - radius, cy - radius, radius * 2.0, radius * 2.0, color, |px, py| {
            (px - cx).powi(2) + (py - cy).powi(2) <= radius * radius
        });
    }
}
