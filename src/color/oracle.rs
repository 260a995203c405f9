//! Canonical color serialization using cssparser
//!
//! Mirrors what a 2D drawing context does with its `strokeStyle`: invalid
//! assignments are ignored, opaque colors read back as `#rrggbb` and
//! translucent ones as `rgba(r, g, b, a)`.

use cssparser::color::{parse_hash_color, parse_named_color};
use cssparser::{ParseError, Parser, ParserInput, Token};
use std::f32::consts::PI;

/// Initial stroke style of a fresh drawing context
pub const DEFAULT_STROKE_STYLE: &str = "#000000";

/// A color with 8-bit channels and a unit alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl RgbaColor {
    pub fn new(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self {
            r,
            g,
            b,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Parse any supported CSS color value
    pub fn parse(value: &str) -> Option<Self> {
        let mut input = ParserInput::new(value);
        let mut parser = Parser::new(&mut input);
        parser.parse_entirely(parse_color).ok()
    }

    /// Serialization used by drawing contexts
    pub fn serialize(&self) -> String {
        if self.alpha >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            // Alpha is stored with 8-bit precision, printed without trailing zeros
            let alpha = (self.alpha * 255.0).round() / 255.0;
            let alpha = (alpha * 1000.0).round() / 1000.0;
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
        }
    }
}

/// Scoped stand-in for a drawing surface's stroke style property
#[derive(Debug, Clone)]
pub struct StrokeStyleOracle {
    stroke_style: String,
}

impl StrokeStyleOracle {
    pub fn new() -> Self {
        Self {
            stroke_style: DEFAULT_STROKE_STYLE.to_string(),
        }
    }

    /// Assign a color. Values that don't parse leave the current style as is.
    pub fn set_stroke_style(&mut self, value: &str) {
        match RgbaColor::parse(value) {
            Some(color) => self.stroke_style = color.serialize(),
            None => log::debug!("Ignoring unparsable stroke style '{}'", value),
        }
    }

    /// Canonical serialization of the current style
    pub fn stroke_style(&self) -> &str {
        &self.stroke_style
    }
}

impl Default for StrokeStyleOracle {
    fn default() -> Self {
        Self::new()
    }
}

type ColorResult<'i, T> = Result<T, ParseError<'i, ()>>;

fn parse_color<'i>(parser: &mut Parser<'i, '_>) -> ColorResult<'i, RgbaColor> {
    let location = parser.current_source_location();
    let token = parser.next()?.clone();
    match token {
        Token::Hash(ref value) | Token::IDHash(ref value) => parse_hash_color(value.as_bytes())
            .map(|(r, g, b, alpha)| RgbaColor::new(r, g, b, alpha))
            .map_err(|()| location.new_unexpected_token_error(token.clone())),
        Token::Ident(ref name) => {
            if name.eq_ignore_ascii_case("transparent") {
                return Ok(RgbaColor::new(0, 0, 0, 0.0));
            }
            parse_named_color(name)
                .map(|(r, g, b)| RgbaColor::new(r, g, b, 1.0))
                .map_err(|()| location.new_unexpected_token_error(token.clone()))
        }
        Token::Function(ref name) => {
            let name = name.to_ascii_lowercase();
            match name.as_str() {
                "rgb" | "rgba" => parser.parse_nested_block(parse_rgb),
                "hsl" | "hsla" => parser.parse_nested_block(parse_hsl),
                _ => Err(location.new_unexpected_token_error(token.clone())),
            }
        }
        _ => Err(location.new_unexpected_token_error(token)),
    }
}

fn parse_rgb<'i>(parser: &mut Parser<'i, '_>) -> ColorResult<'i, RgbaColor> {
    let r = parse_rgb_channel(parser)?;
    let legacy = parser.try_parse(|p| p.expect_comma()).is_ok();
    let g = parse_rgb_channel(parser)?;
    if legacy {
        parser.expect_comma()?;
    }
    let b = parse_rgb_channel(parser)?;
    let alpha = parse_alpha(parser, legacy)?;
    Ok(RgbaColor::new(r, g, b, alpha))
}

fn parse_rgb_channel<'i>(parser: &mut Parser<'i, '_>) -> ColorResult<'i, u8> {
    let location = parser.current_source_location();
    match *parser.next()? {
        Token::Number { value, .. } => Ok(clamp_channel(value)),
        Token::Percentage { unit_value, .. } => Ok(clamp_channel(unit_value * 255.0)),
        ref token => Err(location.new_unexpected_token_error(token.clone())),
    }
}

fn parse_hsl<'i>(parser: &mut Parser<'i, '_>) -> ColorResult<'i, RgbaColor> {
    let hue = parse_hue(parser)?;
    let legacy = parser.try_parse(|p| p.expect_comma()).is_ok();
    let saturation = parse_unit_percentage(parser)?;
    if legacy {
        parser.expect_comma()?;
    }
    let lightness = parse_unit_percentage(parser)?;
    let alpha = parse_alpha(parser, legacy)?;
    let (r, g, b) = hsl_to_rgb(hue / 360.0, saturation, lightness);
    Ok(RgbaColor::new(
        clamp_channel(r * 255.0),
        clamp_channel(g * 255.0),
        clamp_channel(b * 255.0),
        alpha,
    ))
}

fn parse_hue<'i>(parser: &mut Parser<'i, '_>) -> ColorResult<'i, f32> {
    let location = parser.current_source_location();
    let degrees = match *parser.next()? {
        Token::Number { value, .. } => value,
        Token::Dimension {
            value, ref unit, ..
        } => match unit.to_ascii_lowercase().as_str() {
            "deg" => value,
            "rad" => value * 180.0 / PI,
            "grad" => value * 0.9,
            "turn" => value * 360.0,
            _ => {
                let token = Token::Dimension {
                    has_sign: false,
                    value,
                    int_value: None,
                    unit: unit.clone(),
                };
                return Err(location.new_unexpected_token_error(token));
            }
        },
        ref token => return Err(location.new_unexpected_token_error(token.clone())),
    };
    Ok(degrees.rem_euclid(360.0))
}

fn parse_unit_percentage<'i>(parser: &mut Parser<'i, '_>) -> ColorResult<'i, f32> {
    let location = parser.current_source_location();
    match *parser.next()? {
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        Token::Number { value, .. } => Ok((value / 100.0).clamp(0.0, 1.0)),
        ref token => Err(location.new_unexpected_token_error(token.clone())),
    }
}

fn parse_alpha<'i>(parser: &mut Parser<'i, '_>, legacy: bool) -> ColorResult<'i, f32> {
    let has_alpha = if legacy {
        parser.try_parse(|p| p.expect_comma()).is_ok()
    } else {
        parser.try_parse(|p| p.expect_delim('/')).is_ok()
    };
    if !has_alpha {
        return Ok(1.0);
    }
    let location = parser.current_source_location();
    match *parser.next()? {
        Token::Number { value, .. } => Ok(value.clamp(0.0, 1.0)),
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        ref token => Err(location.new_unexpected_token_error(token.clone())),
    }
}

fn clamp_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> (f32, f32, f32) {
    fn hue_to_rgb(m1: f32, m2: f32, mut h: f32) -> f32 {
        if h < 0.0 {
            h += 1.0;
        }
        if h > 1.0 {
            h -= 1.0;
        }
        if h * 6.0 < 1.0 {
            m1 + (m2 - m1) * h * 6.0
        } else if h * 2.0 < 1.0 {
            m2
        } else if h * 3.0 < 2.0 {
            m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
        } else {
            m1
        }
    }

    let m2 = if lightness <= 0.5 {
        lightness * (saturation + 1.0)
    } else {
        lightness + saturation - lightness * saturation
    };
    let m1 = lightness * 2.0 - m2;
    (
        hue_to_rgb(m1, m2, hue + 1.0 / 3.0),
        hue_to_rgb(m1, m2, hue),
        hue_to_rgb(m1, m2, hue - 1.0 / 3.0),
    )
}
