//! Immediate-mode drawing into the RGB24 framebuffer the frontend presents.

use invasion_common::Color;

use crate::camera::Frame;
use crate::font::{self, ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::geometry::Rect;
use crate::gesture::{Hand, HAND_CONNECTIONS};
use crate::sprite::Sprite;

const BYTES_PER_PIXEL: usize = 3;

const HAND_POINT_COLOR: Color = Color::new_rgb(255, 0, 0);
const HAND_LINE_COLOR: Color = Color::new_rgb(224, 224, 224);
const HAND_POINT_RADIUS: i64 = 2;

pub struct Screen<'a> {
    buf: &'a mut [u8],
    width: u32,
    height: u32,
}

/// Pixel width of `text` drawn at `scale`.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    (chars * ADVANCE - 1) * scale
}

pub fn text_height(scale: u32) -> u32 {
    GLYPH_HEIGHT * scale
}

impl<'a> Screen<'a> {
    pub fn new(buf: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(buf.len(), width as usize * height as usize * BYTES_PER_PIXEL);
        Screen { buf, width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        for px in self.buf.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&[color.r, color.g, color.b]);
        }
    }

    #[inline]
    fn put(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        self.buf[idx] = color.r;
        self.buf[idx + 1] = color.g;
        self.buf[idx + 2] = color.b;
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        Color::new_rgb(self.buf[idx], self.buf[idx + 1], self.buf[idx + 2])
    }

    /// Integer pixel span `[x0, x1) x [y0, y1)` of `rect`, clipped.
    fn span(&self, rect: &Rect) -> (i64, i64, i64, i64) {
        let x0 = (rect.left().round() as i64).max(0);
        let y0 = (rect.top().round() as i64).max(0);
        let x1 = (rect.right().round() as i64).min(self.width as i64);
        let y1 = (rect.bottom().round() as i64).min(self.height as i64);
        (x0, y0, x1, y1)
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (x0, y0, x1, y1) = self.span(&rect);
        for y in y0..y1 {
            for x in x0..x1 {
                self.put(x, y, color);
            }
        }
    }

    /// Stretches `sprite` over `rect`; unlit cells are left untouched.
    pub fn draw_sprite(&mut self, sprite: &Sprite, rect: Rect, color: Color) {
        let (sw, sh) = (sprite.width(), sprite.height());
        if sw == 0 || sh == 0 || rect.w <= 0.0 || rect.h <= 0.0 {
            return;
        }
        let (x0, y0, x1, y1) = self.span(&rect);
        let (left, top) = (rect.left().round() as i64, rect.top().round() as i64);
        for y in y0..y1 {
            let row = ((y - top) as f32 * sh as f32 / rect.h) as usize;
            for x in x0..x1 {
                let col = ((x - left) as f32 * sw as f32 / rect.w) as usize;
                if sprite.is_set(col, row) {
                    self.put(x, y, color);
                }
            }
        }
    }

    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, scale: u32, color: Color) {
        let scale = scale.max(1) as i64;
        for (i, c) in text.chars().enumerate() {
            let char_x = x as i64 + i as i64 * ADVANCE as i64 * scale;
            for (row, &bits) in font::glyph(c).iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 0 {
                        continue;
                    }
                    let px = char_x + col as i64 * scale;
                    let py = y as i64 + row as i64 * scale;
                    for dy in 0..scale {
                        for dx in 0..scale {
                            self.put(px + dx, py + dy, color);
                        }
                    }
                }
            }
        }
    }

    /// Nearest-neighbour scales `frame` over the whole screen, optionally
    /// mirrored left to right.
    pub fn blit_frame(&mut self, frame: &Frame, mirror: bool) {
        if frame.width == 0 || frame.height == 0 {
            return;
        }
        for y in 0..self.height {
            let fy = (y as u64 * frame.height as u64 / self.height as u64) as u32;
            for x in 0..self.width {
                let mut fx = (x as u64 * frame.width as u64 / self.width as u64) as u32;
                if mirror {
                    fx = frame.width - 1 - fx;
                }
                let color = frame.pixel(fx, fy);
                self.put(x as i64, y as i64, color);
            }
        }
    }

    /// One-pixel line between two points, inclusive (Bresenham).
    pub fn draw_line(&mut self, from: (i64, i64), to: (i64, i64), color: Color) {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put(x, y, color);
            if (x, y) == to {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draws `hand` over a camera frame of `frame_width` x `frame_height`
    /// blitted with the same `mirror`. Bones whose ends are missing are
    /// skipped.
    pub fn draw_hand(&mut self, hand: &Hand, frame_width: u32, frame_height: u32, mirror: bool) {
        if frame_width == 0 || frame_height == 0 {
            return;
        }
        let to_screen = |id: u8| {
            hand.get(id).ok().map(|lm| {
                let mut x = lm.x as i64 * self.width as i64 / frame_width as i64;
                let y = lm.y as i64 * self.height as i64 / frame_height as i64;
                if mirror {
                    x = self.width as i64 - 1 - x;
                }
                (x, y)
            })
        };

        let bones: Vec<_> = HAND_CONNECTIONS
            .iter()
            .filter_map(|&(a, b)| Some((to_screen(a)?, to_screen(b)?)))
            .collect();
        let points: Vec<_> = hand
            .landmarks
            .iter()
            .filter_map(|lm| to_screen(lm.id))
            .collect();

        for (from, to) in bones {
            self.draw_line(from, to, HAND_LINE_COLOR);
        }
        for (x, y) in points {
            for py in y - HAND_POINT_RADIUS..=y + HAND_POINT_RADIUS {
                for px in x - HAND_POINT_RADIUS..=x + HAND_POINT_RADIUS {
                    self.put(px, py, HAND_POINT_COLOR);
                }
            }
        }
    }
}
