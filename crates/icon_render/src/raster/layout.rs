use super::mask::TextBounds;

/// Origin that centers `bounds` in a `size` square. Division truncates toward zero.
pub fn centered_origin(size: u32, bounds: TextBounds) -> (i32, i32) {
    let size = size as i32;
    ((size - bounds.width()) / 2, (size - bounds.height()) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(width: i32, height: i32) -> TextBounds {
        TextBounds { left: 0, top: 0, right: width, bottom: height }
    }

    #[test]
    fn centers_with_truncation() {
        assert_eq!(centered_origin(16, bounds(5, 7)), (5, 4));
        assert_eq!(centered_origin(48, bounds(21, 20)), (13, 14));
    }

    #[test]
    fn oversized_label_truncates_toward_zero() {
        assert_eq!(centered_origin(4, bounds(7, 5)), (-1, 0));
    }

    #[test]
    fn only_extent_matters_not_offset() {
        let shifted = TextBounds { left: 1, top: 9, right: 6, bottom: 16 };
        assert_eq!(centered_origin(16, shifted), (5, 4));
    }
}
