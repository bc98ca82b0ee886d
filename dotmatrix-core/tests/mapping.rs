//! Property tests for the pixel mapper and frame buffer

use dotmatrix_core::buffer::{pixel_address, FrameBuffer, COLUMNS, MAX_MODULES};
use proptest::prelude::*;

proptest! {
    #[test]
    fn address_matches_layout(modules in 1usize..=MAX_MODULES, x in 0u8..8, y_seed in any::<u16>()) {
        let y = y_seed % (modules as u16 * 8);
        let addr = pixel_address(x, y, modules).unwrap();

        prop_assert_eq!(addr.index, x as usize + 8 * (y as usize / 8));
        prop_assert_eq!(addr.mask, 1u8 << (7 - (y % 8)));
        prop_assert!(addr.index < modules * COLUMNS);
    }

    #[test]
    fn out_of_range_has_no_address(modules in 0usize..=MAX_MODULES, x in any::<u8>(), y in any::<u16>()) {
        let in_range = (x as usize) < COLUMNS && (y as usize) < modules * 8;
        prop_assert_eq!(pixel_address(x, y, modules).is_some(), in_range);
    }

    #[test]
    fn set_then_clear_restores_byte(
        seed in proptest::collection::vec(any::<(u8, u16, bool)>(), 0..64),
        x in 0u8..8,
        y in 0u16..32,
    ) {
        let mut buffer = FrameBuffer::new(4);
        for (sx, sy, on) in seed {
            buffer.set_pixel(sx % 8, sy % 32, on);
        }
        let before = buffer.as_bytes().to_vec();
        let was_on = buffer.pixel(x, y).unwrap();

        buffer.set_pixel(x, y, true);
        buffer.set_pixel(x, y, was_on);

        prop_assert_eq!(buffer.as_bytes(), &before[..]);
    }

    #[test]
    fn single_write_touches_one_bit(x in 0u8..8, y in 0u16..32) {
        let mut buffer = FrameBuffer::new(4);
        prop_assert!(buffer.set_pixel(x, y, true));

        let index = x as usize + 8 * (y as usize / 8);
        for (i, &byte) in buffer.as_bytes().iter().enumerate() {
            if i == index {
                prop_assert_eq!(byte, 1u8 << (7 - (y % 8)));
            } else {
                prop_assert_eq!(byte, 0);
            }
        }
    }
}

#[test]
fn every_pixel_of_four_modules() {
    for x in 0u8..8 {
        for y in 0u16..32 {
            let mut buffer = FrameBuffer::new(4);
            buffer.set_pixel(x, y, true);

            let index = x as usize + 8 * (y as usize / 8);
            let bit = 7 - (y % 8);
            assert_eq!(buffer.as_bytes()[index], 1 << bit, "pixel ({x}, {y})");
            assert_eq!(buffer.as_bytes().iter().filter(|&&b| b != 0).count(), 1);
        }
    }
}
