/// Output alphabet, indexed by digit value.
/// Parsing is case-sensitive only for radix > 36.
pub const DIGITS: [u8; 62] = *b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

pub const MIN_RADIX: u32 = 2;

pub const MAX_RADIX: u32 = 62;

/// `DIGITS_PER_INT[r]` is the largest `e` with `r^e <= 2^32`.
pub const DIGITS_PER_INT: [usize; 63] = [
    0, 0,
    32, 20, 16, 13, 12, 11, 10, 10, 9, 9, 8, 8, 8, 8, 8, 7, 7, 7, 7, 7,
    7, 7, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5
];

/// `INT_RADIX[r] == r^DIGITS_PER_INT[r]`. For radix 2, 4 and 16 this is
/// exactly `2^32`, one past a single limb.
pub const INT_RADIX: [u64; 63] = [
    0, 0,
    0x100000000, 0xcfd41b91, 0x100000000, 0x48c27395, 0x81bf1000,
    0x75db9c97,  0x40000000, 0xcfd41b91,  0x3b9aca00, 0x8c8b6d2b,
    0x19a10000,  0x309f1021, 0x57f6c100,  0x98c29b81, 0x100000000,
    0x18754571,  0x247dbc80, 0x3547667b,  0x4c4b4000, 0x6b5a6e1d,
    0x94ace180,  0xcaf18367, 0xb640000,   0xe8d4a51,  0x1269ae40,
    0x17179149,  0x1cb91000, 0x23744899,  0x2b73a840, 0x34e63b41,
    0x40000000,  0x4cfa3cc1, 0x5c13d840,  0x6d91b519, 0x81bf1000,
    0x98ede0c9,  0xb3773e40, 0xd1bbc4d1,  0xf4240000, 0x6e7d349,
    0x7ca30a0,   0x8c32bbb,  0x9d46c00,   0xaffacfd,  0xc46bee0,
    0xdab86ef,   0xf300000,  0x10d63af1,  0x12a05f20, 0x1490aae3,
    0x16a97400,  0x18ed2825, 0x1b5e4d60,  0x1dff8297, 0x20d38000,
    0x23dd1799,  0x271f35a0, 0x2a9ce10b,  0x2e593c00, 0x3257844d,
    0x369b13e0
];

/// Limb count of the larger factor above which multiplication splits.
/// Measurements put the break-even between 20 and 40 limbs.
pub const KARATSUBA_THRESHOLD: usize = 30;

pub const KARATSUBA_SQUARE_THRESHOLD: usize = 48;

/// Divisor limb count from which division goes through a Newton reciprocal
/// instead of Knuth's algorithm D.
pub const NEWTON_DIVISION_THRESHOLD: usize = 64;
