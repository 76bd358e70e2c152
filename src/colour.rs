use serde::{Deserialize, Serialize};

// BT.709 luminance weights
const LUM_R: f64 = 0.2125;
const LUM_G: f64 = 0.7154;
const LUM_B: f64 = 0.0721;

/// Slider bounds. The core accepts values outside them.
pub const PARAM_MIN: i32 = -100;
pub const PARAM_MAX: i32 = 100;

/// One colour sample, each channel nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedColour {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl NormalizedColour {
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        NormalizedColour { red, green, blue }
    }

    /// Divides each integer channel by `max`.
    pub fn from_ints(red: u8, green: u8, blue: u8, max: u8) -> Self {
        let max = f64::from(max);
        NormalizedColour {
            red: f64::from(red) / max,
            green: f64::from(green) / max,
            blue: f64::from(blue) / max,
        }
    }
}

/// Saturation, brightness and contrast as set on the sliders.
/// All zero is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdjustmentParams {
    pub saturation: i32,
    pub brightness: i32,
    pub contrast: i32,
}

impl AdjustmentParams {
    pub const fn new(saturation: i32, brightness: i32, contrast: i32) -> Self {
        AdjustmentParams {
            saturation,
            brightness,
            contrast,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == AdjustmentParams::default()
    }

    /// True when every value lies within the slider range.
    pub fn in_slider_range(&self) -> bool {
        [self.saturation, self.brightness, self.contrast]
            .iter()
            .all(|v| (PARAM_MIN..=PARAM_MAX).contains(v))
    }
}

/// Applies saturation, brightness and contrast to `colour`. The result is not clamped.
pub fn transform(colour: NormalizedColour, params: &AdjustmentParams) -> NormalizedColour {
    let b = f64::from(params.brightness) / 100.0;
    let c = (f64::from(params.contrast) + 100.0) / 100.0;
    let s = (f64::from(params.saturation) + 100.0) / 100.0;

    let sr = (1.0 - s) * LUM_R;
    let sg = (1.0 - s) * LUM_G;
    let sb = (1.0 - s) * LUM_B;

    let t = (1.0 - c) / 2.0;

    let NormalizedColour { red: r, green: g, blue: bl } = colour;

    NormalizedColour {
        red: r * c * (sr + s) + g * c * sg + bl * c * sb + t + b,
        green: r * c * sr + g * c * (sg + s) + bl * c * sb + t + b,
        blue: r * c * sr + g * c * sg + bl * c * (sb + s) + t + b,
    }
}

/// Rounds `x * max` to the nearest integer and clamps it to `[0, max]`.
pub fn scale_to_int(x: f64, max: u8) -> u8 {
    let scaled = (x * f64::from(max)).round();
    if scaled > f64::from(max) {
        return max;
    }
    if scaled < 0.0 {
        return 0;
    }
    // NaN falls through both checks and saturates to 0
    scaled as u8
}

pub fn scale_rgb(colour: NormalizedColour, max: u8) -> [u8; 3] {
    [
        scale_to_int(colour.red, max),
        scale_to_int(colour.green, max),
        scale_to_int(colour.blue, max),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: NormalizedColour, b: NormalizedColour) {
        assert!((a.red - b.red).abs() < 1e-9, "{:?} != {:?}", a, b);
        assert!((a.green - b.green).abs() < 1e-9, "{:?} != {:?}", a, b);
        assert!((a.blue - b.blue).abs() < 1e-9, "{:?} != {:?}", a, b);
    }

    #[test]
    fn zero_params_are_identity() {
        let params = AdjustmentParams::default();
        for colour in [
            NormalizedColour::new(0.0, 0.0, 0.0),
            NormalizedColour::new(1.0, 1.0, 1.0),
            NormalizedColour::new(0.25, 0.5, 0.75),
            NormalizedColour::new(1.3, -0.2, 0.9),
        ] {
            assert_close(transform(colour, &params), colour);
        }
    }

    #[test]
    fn brightness_shifts_every_channel() {
        let params = AdjustmentParams::new(0, 50, 0);
        let out = transform(NormalizedColour::new(0.1, 0.2, 0.3), &params);
        assert_close(out, NormalizedColour::new(0.6, 0.7, 0.8));
    }

    #[test]
    fn contrast_pivots_around_midpoint() {
        let params = AdjustmentParams::new(0, 0, 100);
        let grey = NormalizedColour::new(0.5, 0.5, 0.5);
        assert_close(transform(grey, &params), grey);

        let out = transform(NormalizedColour::new(0.75, 0.25, 0.0), &params);
        assert_close(out, NormalizedColour::new(1.0, 0.0, -0.5));
    }

    #[test]
    fn full_desaturation_gives_luminance() {
        let params = AdjustmentParams::new(-100, 0, 0);
        let out = transform(NormalizedColour::new(1.0, 0.0, 0.0), &params);
        assert_close(out, NormalizedColour::new(LUM_R, LUM_R, LUM_R));

        let white = NormalizedColour::new(1.0, 1.0, 1.0);
        assert_close(transform(white, &params), white);
    }

    #[test]
    fn scale_to_int_clamps_and_rounds() {
        assert_eq!(scale_to_int(1.5, 31), 31);
        assert_eq!(scale_to_int(-0.2, 31), 0);
        assert_eq!(scale_to_int(0.5, 1), 1);
        assert_eq!(scale_to_int(0.49999, 31), 15);
        assert_eq!(scale_to_int(1.0, 255), 255);
        assert_eq!(scale_to_int(f64::NAN, 31), 0);
    }

    #[test]
    fn scale_rgb_shares_max() {
        let colour = NormalizedColour::new(0.0, 0.5, 2.0);
        assert_eq!(scale_rgb(colour, 255), [0, 128, 255]);
        assert_eq!(scale_rgb(colour, 31), [0, 16, 31]);
    }

    #[test]
    fn slider_range() {
        assert!(AdjustmentParams::new(-100, 100, 0).in_slider_range());
        assert!(!AdjustmentParams::new(0, 101, 0).in_slider_range());
        assert!(AdjustmentParams::default().is_identity());
    }
}
