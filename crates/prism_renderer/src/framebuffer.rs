//! RGBA8 framebuffer the render loop writes into.

/// Row-major grid of RGBA pixels.
///
/// Created by the caller before rendering. The renderer only writes the
/// pixels whose ray hits something; all others keep the initial background.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, [0, 0, 0, 0])
    }

    /// Create a new framebuffer filled with `background`.
    pub fn with_background(width: u32, height: u32, background: [u8; 4]) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width as usize * height as usize],
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.index(x, y);
        self.pixels[i] = rgba;
    }

    /// Pixels in row-major order.
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Raw channel bytes, RGBA order, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.pixels.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent_black() {
        let fb = Framebuffer::new(3, 2);

        assert_eq!(fb.pixels().len(), 6);
        assert!(fb.pixels().iter().all(|p| *p == [0, 0, 0, 0]));
    }

    #[test]
    fn test_dimensions_match_storage() {
        let fb = Framebuffer::with_background(5, 3, [7, 7, 7, 7]);

        assert_eq!(fb.width(), 5);
        assert_eq!(fb.height(), 3);
        assert_eq!(fb.pixels().len(), (fb.width() * fb.height()) as usize);
        assert_eq!(fb.get(4, 2), [7, 7, 7, 7]);
    }

    #[test]
    fn test_set_get() {
        let mut fb = Framebuffer::with_background(4, 4, [9, 9, 9, 255]);
        fb.set(3, 1, [1, 2, 3, 4]);

        assert_eq!(fb.get(3, 1), [1, 2, 3, 4]);
        assert_eq!(fb.get(1, 3), [9, 9, 9, 255]);
    }

    #[test]
    fn test_byte_layout() {
        let mut fb = Framebuffer::new(2, 2);
        fb.set(1, 0, [10, 20, 30, 40]);
        fb.set(0, 1, [50, 60, 70, 80]);

        let bytes = fb.as_bytes();
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[4..8], &[10, 20, 30, 40]);
        assert_eq!(&bytes[8..12], &[50, 60, 70, 80]);
    }
}
