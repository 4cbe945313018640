use image::{Rgb, RgbImage};

pub fn blank_canvas(size: u32, background: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(size, size, background)
}

/// Blend `fg` over `bg` with 8-bit coverage.
pub fn blend(bg: Rgb<u8>, fg: Rgb<u8>, coverage: u8) -> Rgb<u8> {
    match coverage {
        0 => bg,
        u8::MAX => fg,
        alpha => {
            let alpha = u16::from(alpha);
            let inv = 255 - alpha;
            let mix = |b: u8, f: u8| ((u16::from(b) * inv + u16::from(f) * alpha + 127) / 255) as u8;
            Rgb([mix(bg[0], fg[0]), mix(bg[1], fg[1]), mix(bg[2], fg[2])])
        },
    }
}
