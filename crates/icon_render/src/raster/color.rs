use image::Rgb;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid color {0:?}, expected #rrggbb, #rgb or a basic color name")]
    Invalid(String),
}

/// Parse `#rrggbb`, `#rgb` or one of a handful of named colors.
pub fn parse_color(input: &str) -> Result<Rgb<u8>, ColorError> {
    let trimmed = input.trim();
    let invalid = || ColorError::Invalid(input.to_owned());

    if let Some(hex) = trimmed.strip_prefix('#') {
        if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        return match hex.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
                Ok(Rgb([
                    channel(0).map_err(|_| invalid())?,
                    channel(2).map_err(|_| invalid())?,
                    channel(4).map_err(|_| invalid())?,
                ]))
            },
            3 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 0x11);
                Ok(Rgb([
                    channel(0).map_err(|_| invalid())?,
                    channel(1).map_err(|_| invalid())?,
                    channel(2).map_err(|_| invalid())?,
                ]))
            },
            _ => Err(invalid()),
        };
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "white" => Ok(Rgb([0xff, 0xff, 0xff])),
        "black" => Ok(Rgb([0x00, 0x00, 0x00])),
        "red" => Ok(Rgb([0xff, 0x00, 0x00])),
        "green" => Ok(Rgb([0x00, 0x80, 0x00])),
        "blue" => Ok(Rgb([0x00, 0x00, 0xff])),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_hex() {
        assert_eq!(parse_color("#2383e2"), Ok(Rgb([0x23, 0x83, 0xe2])));
        assert_eq!(parse_color("#2383E2"), Ok(Rgb([0x23, 0x83, 0xe2])));
    }

    #[test]
    fn parses_short_hex_and_names() {
        assert_eq!(parse_color("#f0a"), Ok(Rgb([0xff, 0x00, 0xaa])));
        assert_eq!(parse_color("White"), Ok(Rgb([0xff, 0xff, 0xff])));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#gggggg").is_err());
        assert!(parse_color("#ééé").is_err());
        assert!(parse_color("teal-ish").is_err());
    }
}
