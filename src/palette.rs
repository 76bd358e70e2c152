use crate::colour::{scale_rgb, transform, AdjustmentParams, NormalizedColour};

const CHANNEL_MAX: u8 = 0x1F;

/// A GBA palette entry as it sits in ROM: little-endian `0bXBBBBBGG_GGGRRRRR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedColour555 {
    pub lo: u8,
    pub hi: u8,
}

impl PackedColour555 {
    pub const fn new(lo: u8, hi: u8) -> Self {
        PackedColour555 { lo, hi }
    }

    /// Packs three 5-bit channels. Bits above the fifth are dropped.
    pub const fn from_rgb5(red: u8, green: u8, blue: u8) -> Self {
        let red = red & CHANNEL_MAX;
        let green = green & CHANNEL_MAX;
        let blue = blue & CHANNEL_MAX;
        PackedColour555 {
            lo: red | ((green & 0x7) << 5),
            hi: (green >> 3) | (blue << 2),
        }
    }

    pub const fn red(&self) -> u8 {
        self.lo & CHANNEL_MAX
    }

    pub const fn green(&self) -> u8 {
        (self.lo >> 5) | ((self.hi & 0x3) << 3)
    }

    pub const fn blue(&self) -> u8 {
        (self.hi >> 2) & CHANNEL_MAX
    }

    pub const fn rgb5(&self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()]
    }
}

pub fn decode(lo: u8, hi: u8) -> NormalizedColour {
    let packed = PackedColour555::new(lo, hi);
    NormalizedColour::from_ints(packed.red(), packed.green(), packed.blue(), CHANNEL_MAX)
}

pub fn encode(colour: NormalizedColour) -> (u8, u8) {
    let [red, green, blue] = scale_rgb(colour, CHANNEL_MAX);
    let packed = PackedColour555::from_rgb5(red, green, blue);
    (packed.lo, packed.hi)
}

/// Decodes one palette entry, grades it and packs it back.
pub fn adjust_colour_pair(lo: u8, hi: u8, params: &AdjustmentParams) -> (u8, u8) {
    encode(transform(decode(lo, hi), params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_fields() {
        // R=1, G=0b10110, B=0b01101
        let packed = PackedColour555::new(0b1100_0001, 0b0011_0110);
        assert_eq!(packed.rgb5(), [1, 0b10110, 0b01101]);
    }

    #[test]
    fn unused_bit_is_ignored() {
        assert_eq!(
            PackedColour555::new(0x00, 0x80).rgb5(),
            PackedColour555::new(0x00, 0x00).rgb5()
        );
        assert_eq!(encode(decode(0xFF, 0xFF)), (0xFF, 0x7F));
    }

    #[test]
    fn every_555_triple_survives_decode_encode() {
        for r in 0..=CHANNEL_MAX {
            for g in 0..=CHANNEL_MAX {
                for b in 0..=CHANNEL_MAX {
                    let packed = PackedColour555::from_rgb5(r, g, b);
                    let (lo, hi) = encode(decode(packed.lo, packed.hi));
                    assert_eq!(PackedColour555::new(lo, hi).rgb5(), [r, g, b]);
                }
            }
        }
    }

    #[test]
    fn black_unchanged_by_zero_params() {
        let params = AdjustmentParams::default();
        assert_eq!(adjust_colour_pair(0x00, 0x00, &params), (0x00, 0x00));
    }

    #[test]
    fn white_survives_full_desaturation() {
        let params = AdjustmentParams::new(-100, 0, 0);
        let (lo, hi) = adjust_colour_pair(0xFF, 0x7F, &params);
        for channel in PackedColour555::new(lo, hi).rgb5() {
            assert!(channel >= 30, "channel {} drifted from white", channel);
        }
    }

    #[test]
    fn brightness_lifts_black() {
        let params = AdjustmentParams::new(0, 50, 0);
        let (lo, hi) = adjust_colour_pair(0x00, 0x00, &params);
        // 0.5 * 31 rounds up to 16 on every channel
        assert_eq!(PackedColour555::new(lo, hi).rgb5(), [16, 16, 16]);
    }
}
