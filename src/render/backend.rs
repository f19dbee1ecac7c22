use crate::foundation::error::DotsResult;
use crate::render::profile::Viewport;
use crate::render::scene::Scene;

#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA of the pixel at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data
            .get(i..i + 4)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }
}

/// Rasterizes a display list into an RGBA8 frame.
pub trait RenderBackend {
    fn render_scene(&mut self, scene: &Scene, viewport: Viewport) -> DotsResult<FrameRGBA>;
}
