//! UTF-8 character width lookup.
//!
//! A single 256-entry table maps every possible leading byte to the number of
//! bytes its character occupies. Bytes that can never start a well-formed
//! UTF-8 sequence map to `0`:
//!
//! | Leading byte  | Width | Notes                                  |
//! |---------------|-------|----------------------------------------|
//! | `0x00..=0x7F` | 1     | ASCII                                  |
//! | `0x80..=0xBF` | 0     | continuation byte, never a lead        |
//! | `0xC0..=0xC1` | 0     | would only encode overlong ASCII       |
//! | `0xC2..=0xDF` | 2     |                                        |
//! | `0xE0..=0xEF` | 3     |                                        |
//! | `0xF0..=0xF4` | 4     |                                        |
//! | `0xF5..=0xFF` | 0     | would encode past U+10FFFF             |
//!
//! Only the leading byte is consulted. Continuation bytes are not validated
//! here; callers that need full UTF-8 validation must do it separately.

/// Leading byte to character width. `0` marks a byte that cannot lead.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static UTF8_WIDTH: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = match i as u8 {
            0x00..=0x7F => 1,
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => 0,
        };
        i += 1;
    }
    table
};

/// Returns the byte width of the UTF-8 character led by `byte`.
///
/// Returns `0` when `byte` is not a valid leading byte (a continuation byte,
/// `0xC0`/`0xC1`, or `0xF5..=0xFF`).
#[inline]
pub fn utf8_width(byte: u8) -> usize {
    usize::from(UTF8_WIDTH[usize::from(byte)])
}
