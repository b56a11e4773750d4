use crate::BolayError;
use palette::{FromColor, Hsv, Srgb};
use std::str::FromStr;

/// An 8-bit RGBA colour. The alpha channel travels with the colour but is not
/// painted by the PDF backend.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::new(0, 0, 0, 255)
    }
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Rgba {
        Rgba { r, g, b, a }
    }

    /// Create an opaque colour
    pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
        Rgba::new(r, g, b, 255)
    }

    /// Resolve a CSS / SVG colour name (`"darkslategrey"`) or a hex triplet
    /// (`"#2f4f4f"`, `"2f4f4f"`, `"#fff"`) into a colour with the given alpha
    pub fn parse(s: &str, alpha: u8) -> Result<Rgba, BolayError> {
        let name = s.trim().to_ascii_lowercase();
        let rgb: Srgb<u8> = match palette::named::from_str(&name) {
            Some(rgb) => rgb,
            None => name
                .parse::<Srgb<u8>>()
                .map_err(|_| BolayError::InvalidColour(s.to_string()))?,
        };
        Ok(Rgba::new(rgb.red, rgb.green, rgb.blue, alpha))
    }

    /// The red, green, and blue channels scaled to 0.0 ..= 1.0
    pub fn rgb_f32(&self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }

    fn hsv(&self) -> Hsv {
        let (r, g, b) = self.rgb_f32();
        Hsv::from_color(Srgb::new(r, g, b))
    }

    /// Apply an affine change to saturation and value in HSV space:
    /// `s' = clamp(s * rs + ds)` and `v' = clamp(v * rv + dv)`. Hue and alpha are kept.
    pub fn resaturate(&self, rs: f32, ds: f32, rv: f32, dv: f32) -> Rgba {
        let mut hsv = self.hsv();
        hsv.saturation = (hsv.saturation * rs + ds).clamp(0.0, 1.0);
        hsv.value = (hsv.value * rv + dv).clamp(0.0, 1.0);

        let rgb: Srgb = Srgb::from_color(hsv);
        let channel = |c: f32| (c * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgba::new(
            channel(rgb.red),
            channel(rgb.green),
            channel(rgb.blue),
            self.a,
        )
    }

    /// Whether the colour has any saturation at all, i.e. it is not a grey
    pub fn is_saturated(&self) -> bool {
        self.hsv().saturation > 0.0
    }
}

impl FromStr for Rgba {
    type Err = BolayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgba::parse(s, 255)
    }
}

impl From<(u8, u8, u8)> for Rgba {
    fn from(c: (u8, u8, u8)) -> Self {
        Rgba::rgb(c.0, c.1, c.2)
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(c: [u8; 4]) -> Self {
        let [r, g, b, a] = c;
        Rgba::new(r, g, b, a)
    }
}

/// A list of pre-defined colour constants, matching their CSS names
pub mod colours {
    use super::Rgba;

    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const GREY: Rgba = Rgba::rgb(128, 128, 128);
    pub const LIGHT_GREY: Rgba = Rgba::rgb(211, 211, 211);
    /// Note that CSS "darkgrey" is lighter than "grey"
    pub const DARK_GREY: Rgba = Rgba::rgb(169, 169, 169);
    pub const DARK_SLATE_GREY: Rgba = Rgba::rgb(47, 79, 79);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_constants() {
        for (name, colour) in [
            ("white", colours::WHITE),
            ("grey", colours::GREY),
            ("lightgrey", colours::LIGHT_GREY),
            ("darkgrey", colours::DARK_GREY),
            ("DarkSlateGrey", colours::DARK_SLATE_GREY),
            ("black", colours::BLACK),
        ] {
            assert_eq!(name.parse::<Rgba>().unwrap(), colour, "{name}");
        }
    }

    #[test]
    fn hex_strings_parse_with_alpha() {
        assert_eq!(
            Rgba::parse("#ff8000", 17).unwrap(),
            Rgba::new(255, 128, 0, 17)
        );
        assert_eq!(Rgba::parse("0f0", 255).unwrap(), Rgba::rgb(0, 255, 0));
    }

    #[test]
    fn garbage_does_not_parse() {
        assert!(matches!(
            "not a colour".parse::<Rgba>(),
            Err(BolayError::InvalidColour(_))
        ));
    }

    #[test]
    fn default_is_opaque_black() {
        assert_eq!(Rgba::default(), Rgba::new(0, 0, 0, 255));
    }

    #[test]
    fn identity_resaturation() {
        for colour in [
            Rgba::new(12, 200, 99, 40),
            colours::DARK_SLATE_GREY,
            colours::WHITE,
            colours::BLACK,
            Rgba::rgb(255, 0, 128),
        ] {
            assert_eq!(colour.resaturate(1.0, 0.0, 1.0, 0.0), colour);
        }
    }

    #[test]
    fn desaturating_gives_grey() {
        let grey = Rgba::new(200, 50, 50, 9).resaturate(0.0, 0.0, 1.0, 0.0);
        assert_eq!(grey, Rgba::new(200, 200, 200, 9));
        assert!(!grey.is_saturated());
    }

    #[test]
    fn value_is_clamped() {
        let bright = Rgba::rgb(100, 50, 25).resaturate(1.0, 0.0, 1.0, 5.0);
        assert_eq!(bright.r, 255);
    }

    #[test]
    fn greys_are_not_saturated() {
        for v in [0u8, 1, 127, 254, 255] {
            assert!(!Rgba::rgb(v, v, v).is_saturated());
        }
        assert!(Rgba::rgb(1, 0, 0).is_saturated());
        assert!(Rgba::rgb(10, 10, 11).is_saturated());
    }
}
