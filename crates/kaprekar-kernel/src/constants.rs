//! Fixed points and stall values of the routine.
//!
//! Two widths have a single known constant: 495 for three digits and
//! 6174 for four. Every width also has a family of repeating-digit
//! numbers (`d` repeated `width` times, `d ∈ 1..=9`) for which the
//! descending and ascending arrangements coincide and the routine
//! stalls at zero.

/// Kaprekar's constant for three-digit numbers.
pub const KAPREKAR_CONSTANT_3: u64 = 495;

/// Kaprekar's constant for four-digit numbers.
pub const KAPREKAR_CONSTANT_4: u64 = 6174;

/// Widest arrangement the engine accepts.
///
/// An 18-digit arrangement plus its padding digit still fits in `u64`.
pub const MAX_WIDTH: u32 = 18;

/// The constant the routine converges to for `width`, if one is known.
pub fn kaprekar_constant(width: u32) -> Option<u64> {
    match width {
        3 => Some(KAPREKAR_CONSTANT_3),
        4 => Some(KAPREKAR_CONSTANT_4),
        _ => None,
    }
}

/// `digit` repeated `width` times, e.g. `repdigit(7, 3) == 777`.
///
/// Returns `None` for digits outside `1..=9`, a zero width, or a width
/// beyond [`MAX_WIDTH`].
pub fn repdigit(digit: u8, width: u32) -> Option<u64> {
    if !(1..=9).contains(&digit) || width == 0 || width > MAX_WIDTH {
        return None;
    }
    let ones = (10u64.pow(width) - 1) / 9;
    Some(ones * u64::from(digit))
}

/// The nine repeating-digit numbers of `width`, ascending.
pub fn repdigits(width: u32) -> impl Iterator<Item = u64> {
    (1..=9u8).filter_map(move |d| repdigit(d, width))
}

/// Whether `number` is one of the repeating-digit values of `width`.
pub fn is_repeating_digit(number: u64, width: u32) -> bool {
    repdigits(width).any(|r| r == number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_by_width() {
        assert_eq!(kaprekar_constant(3), Some(495));
        assert_eq!(kaprekar_constant(4), Some(6174));
        assert_eq!(kaprekar_constant(2), None);
        assert_eq!(kaprekar_constant(5), None);
    }

    #[test]
    fn repdigits_match_literal_sets() {
        let three: Vec<u64> = repdigits(3).collect();
        assert_eq!(three, vec![111, 222, 333, 444, 555, 666, 777, 888, 999]);
        let four: Vec<u64> = repdigits(4).collect();
        assert_eq!(
            four,
            vec![1111, 2222, 3333, 4444, 5555, 6666, 7777, 8888, 9999]
        );
    }

    #[test]
    fn repdigit_bounds() {
        assert_eq!(repdigit(0, 3), None);
        assert_eq!(repdigit(10, 3), None);
        assert_eq!(repdigit(5, 0), None);
        assert_eq!(repdigit(9, 1), Some(9));
        assert_eq!(repdigit(9, MAX_WIDTH), Some(999_999_999_999_999_999));
        assert_eq!(repdigit(9, MAX_WIDTH + 1), None);
    }

    #[test]
    fn repeating_digit_is_width_specific() {
        assert!(is_repeating_digit(999, 3));
        assert!(!is_repeating_digit(999, 4));
        assert!(is_repeating_digit(4444, 4));
        assert!(!is_repeating_digit(0, 3));
    }
}
