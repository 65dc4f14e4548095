/// Black-on-transparent camera glyph, meant to be shown as a template image
pub fn camera_icon_rgba(size: u32) -> Vec<u8> {
    let n = size as f32;
    let (cx, cy) = (0.5 * n, 0.58 * n);
    let lens_inner = 0.10 * n;
    let lens_outer = 0.19 * n;

    let mut rgba = vec![0u8; (size * size * 4) as usize];
    for y in 0..size {
        for x in 0..size {
            let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);

            let body = px >= 0.08 * n && px <= 0.92 * n && py >= 0.30 * n && py <= 0.86 * n;
            let finder = px >= 0.34 * n && px <= 0.62 * n && py >= 0.18 * n && py < 0.30 * n;
            let dist = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
            let lens_ring = dist >= lens_inner && dist <= lens_outer;

            if (body || finder) && !lens_ring {
                let i = ((y * size + x) * 4) as usize;
                rgba[i + 3] = 255;
            }
        }
    }
    rgba
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha(rgba: &[u8], size: u32, x: u32, y: u32) -> u8 {
        rgba[((y * size + x) * 4 + 3) as usize]
    }

    #[test]
    fn buffer_is_square_rgba() {
        assert_eq!(camera_icon_rgba(32).len(), 32 * 32 * 4);
    }

    #[test]
    fn glyph_shape() {
        let size = 32;
        let rgba = camera_icon_rgba(size);
        // corner is outside the body
        assert_eq!(alpha(&rgba, size, 0, 0), 0);
        // lens center is filled, the ring around it is cut out
        assert_eq!(alpha(&rgba, size, 16, 18), 255);
        assert_eq!(alpha(&rgba, size, 16 + 4, 18), 0);
        // body edge away from the lens
        assert_eq!(alpha(&rgba, size, 4, 26), 255);
    }

    #[test]
    fn template_pixels_are_black() {
        let rgba = camera_icon_rgba(16);
        assert!(rgba.chunks(4).all(|p| p[0] == 0 && p[1] == 0 && p[2] == 0));
    }
}
