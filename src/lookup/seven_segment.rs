// Segment bits, most significant first: (unused) a b c d e f g.
// Indexed by the hex digit being displayed.
pub const SEGMENT_PATTERNS: [u8; 16] = [
    0x7E, // 0
    0x30, // 1
    0x6D, // 2
    0x79, // 3
    0x33, // 4
    0x5B, // 5
    0x5F, // 6
    0x70, // 7
    0x7F, // 8
    0x7B, // 9
    0x77, // A
    0x1F, // b
    0x4E, // C
    0x3D, // d
    0x4F, // E
    0x47, // F
];

/// The segments to light for `nibble`. Anything that isn't a hex digit lights nothing.
pub fn segment_pattern(nibble: u8) -> u8 {
    SEGMENT_PATTERNS.get(usize::from(nibble)).copied().unwrap_or(0)
}
