use palette::{IntoColor, LinSrgb, Mix, Oklch, Srgb};

/// A terminal-ready RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A two-endpoint color ramp, interpolated in OKLCH space.
///
/// Interpolating in OKLCH keeps the ramp perceptually even instead of
/// washing out through the middle the way raw RGB lerps do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRamp {
    pub start: Rgb,
    pub end: Rgb,
}

impl ColorRamp {
    /// Below this chroma a color is treated as achromatic; its hue angle is
    /// numeric noise and must not steer the interpolation.
    const ACHROMATIC: f32 = 1e-3;

    pub const fn new(start: Rgb, end: Rgb) -> Self {
        Self { start, end }
    }

    /// Sample the ramp at `t` (0.0 = start, 1.0 = end, clamped).
    pub fn at(&self, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let (from_l, from_c, from_h) = rgb_to_oklch(self.start);
        let (to_l, to_c, to_h) = rgb_to_oklch(self.end);

        let l = from_l + (to_l - from_l) * t;
        let c = from_c + (to_c - from_c) * t;

        // A gray endpoint borrows the other side's hue; otherwise take the
        // shortest path around the circle
        let (from_h, to_h) = if from_c < Self::ACHROMATIC {
            (to_h, to_h)
        } else if to_c < Self::ACHROMATIC {
            (from_h, from_h)
        } else {
            (from_h, to_h)
        };
        let mut dh = to_h - from_h;
        if dh > 180.0 {
            dh -= 360.0;
        } else if dh < -180.0 {
            dh += 360.0;
        }
        let h = (from_h + dh * t).rem_euclid(360.0);

        oklch_to_rgb(l, c, h)
    }
}

/// Alpha-blend `top` over `base`.
///
/// Blending happens in linear light so partial opacities read the way they
/// would on a real display; `alpha` is clamped to [0, 1].
pub fn blend_over(base: Rgb, top: Rgb, alpha: f32) -> Rgb {
    let alpha = alpha.clamp(0.0, 1.0);
    let base: LinSrgb = Srgb::new(
        base.r as f32 / 255.0,
        base.g as f32 / 255.0,
        base.b as f32 / 255.0,
    )
    .into_linear();
    let top: LinSrgb = Srgb::new(
        top.r as f32 / 255.0,
        top.g as f32 / 255.0,
        top.b as f32 / 255.0,
    )
    .into_linear();

    let mixed = base.mix(top, alpha);
    let srgb: Srgb = Srgb::from_linear(mixed);
    let (r, g, b) = srgb.into_format::<u8>().into_components();
    Rgb::new(r, g, b)
}

fn rgb_to_oklch(rgb: Rgb) -> (f32, f32, f32) {
    let srgb = Srgb::new(
        rgb.r as f32 / 255.0,
        rgb.g as f32 / 255.0,
        rgb.b as f32 / 255.0,
    );
    let oklch: Oklch = srgb.into_color();
    (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();
    Rgb::new(r, g, b)
}
