use anyhow::{bail, Result};
use invasion_common::Color;

/// One RGB24 image from the camera.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Frame {
    pub fn blank(width: u32, height: u32, color: Color) -> Self {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..width * height {
            pixels.extend_from_slice(&[color.r, color.g, color.b]);
        }
        Frame {
            width,
            height,
            pixels,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let idx = ((y * self.width + x) * 3) as usize;
        Color::new_rgb(self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2])
    }
}

/// A capture device. Reads are synchronous and may fail.
pub trait Camera {
    fn read(&mut self) -> Result<Frame>;
    /// Gives the device back. Called once.
    fn release(&mut self);
}

/// Owns a camera and releases it exactly once: explicitly, or when the
/// handle is dropped on any exit path.
pub struct CameraHandle {
    camera: Option<Box<dyn Camera>>,
}

impl CameraHandle {
    pub fn new(camera: Box<dyn Camera>) -> Self {
        CameraHandle {
            camera: Some(camera),
        }
    }

    pub fn read(&mut self) -> Result<Frame> {
        match self.camera.as_mut() {
            Some(camera) => camera.read(),
            None => bail!("camera already released"),
        }
    }

    pub fn is_released(&self) -> bool {
        self.camera.is_none()
    }

    pub fn release(&mut self) {
        if let Some(mut camera) = self.camera.take() {
            camera.release();
            log::info!("Camera released");
        }
    }
}

impl Drop for CameraHandle {
    fn drop(&mut self) {
        self.release();
    }
}

/// Generates frames without hardware: a vertical gradient with a slowly
/// drifting band, so the background visibly moves.
pub struct SyntheticCamera {
    width: u32,
    height: u32,
    tick: u32,
    fail_every: Option<u32>,
}

impl SyntheticCamera {
    const TOP: Color = Color::new_rgb(24, 28, 48);
    const BOTTOM: Color = Color::new_rgb(70, 80, 110);

    pub fn new(width: u32, height: u32) -> Self {
        SyntheticCamera {
            width,
            height,
            tick: 0,
            fail_every: None,
        }
    }

    /// Every `n`-th read fails, as a flaky device would.
    pub fn failing_every(mut self, n: u32) -> Self {
        self.fail_every = Some(n.max(1));
        self
    }
}

impl Camera for SyntheticCamera {
    fn read(&mut self) -> Result<Frame> {
        self.tick = self.tick.wrapping_add(1);
        if let Some(n) = self.fail_every {
            if self.tick % n == 0 {
                bail!("no frame available (read {})", self.tick);
            }
        }

        let band = self.tick % self.height.max(1);
        let mut pixels = Vec::with_capacity((self.width * self.height * 3) as usize);
        for y in 0..self.height {
            let t = y as f32 / self.height.max(1) as f32;
            let mut color = Self::TOP.lerp(Self::BOTTOM, t);
            if y.abs_diff(band) < 4 {
                color = color.lerp(Color::WHITE, 0.15);
            }
            for _ in 0..self.width {
                pixels.extend_from_slice(&[color.r, color.g, color.b]);
            }
        }
        Ok(Frame {
            width: self.width,
            height: self.height,
            pixels,
        })
    }

    fn release(&mut self) {
        log::debug!("Synthetic camera stopped after {} reads", self.tick);
    }
}
