//! Serialized emote tables.
//!
//! Glyph art is drawn in the comments beside each row, `#` for a set pixel.

#[rustfmt::skip]
pub static SMILEYS: &[u8] = &[
    0x45, 0x4D, 0x4F, 0x54, // magic 'EMOT'
    0x00, 0x01,             // version 1
    0x00, 0x03,             // count 3
    0x10,                   // width 16
    0x10,                   // height 16
    0x06, 0x3A,             // U+263A  -> tag 0, offset 0x063A
    0x07, 0x64,             // U+2764  -> tag 0, offset 0x0764
    0x46, 0x00,             // U+1F600 -> tag 1, offset 0x0600
    // U+263A WHITE SMILING FACE
    0x00, 0x00,   // ................
    0x07, 0xE0,   // .....######.....
    0x18, 0x18,   // ...##......##...
    0x20, 0x04,   // ..#..........#..
    0x40, 0x02,   // .#............#.
    0x46, 0x62,   // .#...##..##...#.
    0x86, 0x61,   // #....##..##....#
    0x80, 0x01,   // #..............#
    0x80, 0x01,   // #..............#
    0x90, 0x09,   // #..#........#..#
    0x48, 0x12,   // .#..#......#..#.
    0x47, 0xE2,   // .#...######...#.
    0x20, 0x04,   // ..#..........#..
    0x18, 0x18,   // ...##......##...
    0x07, 0xE0,   // .....######.....
    0x00, 0x00,   // ................
    // U+2764 HEAVY BLACK HEART
    0x00, 0x00,   // ................
    0x00, 0x00,   // ................
    0x3C, 0x3C,   // ..####....####..
    0x7E, 0x7E,   // .######..######.
    0xFF, 0xFF,   // ################
    0xFF, 0xFF,   // ################
    0xFF, 0xFF,   // ################
    0xFF, 0xFF,   // ################
    0x7F, 0xFE,   // .##############.
    0x3F, 0xFC,   // ..############..
    0x1F, 0xF8,   // ...##########...
    0x0F, 0xF0,   // ....########....
    0x07, 0xE0,   // .....######.....
    0x03, 0xC0,   // ......####......
    0x01, 0x80,   // .......##.......
    0x00, 0x00,   // ................
    // U+1F600 GRINNING FACE
    0x07, 0xE0,   // .....######.....
    0x18, 0x18,   // ...##......##...
    0x20, 0x04,   // ..#..........#..
    0x44, 0x22,   // .#...#....#...#.
    0x4E, 0x72,   // .#..###..###..#.
    0x8A, 0x51,   // #...#.#..#.#...#
    0x80, 0x01,   // #..............#
    0xBF, 0xFD,   // #.############.#
    0xA4, 0x95,   // #.#..#..#..#.#.#
    0xBF, 0xFD,   // #.############.#
    0x52, 0x4A,   // .#.#..#..#..#.#.
    0x4F, 0xF2,   // .#..########..#.
    0x20, 0x04,   // ..#..........#..
    0x18, 0x18,   // ...##......##...
    0x07, 0xE0,   // .....######.....
    0x00, 0x00,   // ................
];

#[rustfmt::skip]
pub static ARROWS_8X8: &[u8] = &[
    0x45, 0x4D, 0x4F, 0x54, // magic 'EMOT'
    0x00, 0x01,             // version 1
    0x00, 0x02,             // count 2
    0x08,                   // width 8
    0x08,                   // height 8
    0x01, 0x91,             // U+2191
    0x01, 0x93,             // U+2193
    // U+2191 UPWARDS ARROW
    0x18,         // ...##...
    0x3C,         // ..####..
    0x7E,         // .######.
    0xFF,         // ########
    0x18,         // ...##...
    0x18,         // ...##...
    0x18,         // ...##...
    0x18,         // ...##...
    // U+2193 DOWNWARDS ARROW
    0x18,         // ...##...
    0x18,         // ...##...
    0x18,         // ...##...
    0x18,         // ...##...
    0xFF,         // ########
    0x7E,         // .######.
    0x3C,         // ..####..
    0x18,         // ...##...
];

/// A table whose glyph map is out of order.
#[rustfmt::skip]
pub static UNSORTED: &[u8] = &[
    0x45, 0x4D, 0x4F, 0x54, // magic 'EMOT'
    0x00, 0x01,             // version 1
    0x00, 0x02,             // count 2
    0x08,                   // width 8
    0x08,                   // height 8
    0x01, 0x93,             // U+2193
    0x01, 0x91,             // U+2191
    // U+2193 DOWNWARDS ARROW
    0x18,         // ...##...
    0x18,         // ...##...
    0x18,         // ...##...
    0x18,         // ...##...
    0xFF,         // ########
    0x7E,         // .######.
    0x3C,         // ..####..
    0x18,         // ...##...
    // U+2191 UPWARDS ARROW
    0x18,         // ...##...
    0x3C,         // ..####..
    0x7E,         // .######.
    0xFF,         // ########
    0x18,         // ...##...
    0x18,         // ...##...
    0x18,         // ...##...
    0x18,         // ...##...
];
