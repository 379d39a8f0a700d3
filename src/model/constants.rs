// Raw score reserved for "registered but did not present"
pub const NOT_PRESENTED_SENTINEL: i32 = 9999;

// Display markers
pub const ABSENT_MARKER: &str = "F";
pub const NOT_PRESENTED_MARKER: &str = "NP";

// Points table
pub const REQUIRED_TIERS: usize = 4;
pub const POSITIONS_PER_TIER: usize = 8;
pub const FIRST_TIER_DECREMENTS: [i32; POSITIONS_PER_TIER] = [0, 2, 4, 5, 6, 7, 8, 9];
pub const SECOND_TIER_DECREMENTS: [i32; POSITIONS_PER_TIER] = [0, 4, 8, 10, 12, 14, 16, 18];
pub const THIRD_TIER_DECREMENTS: [i32; POSITIONS_PER_TIER] = [0, 6, 12, 15, 18, 21, 24, 27];
pub const FOURTH_TIER_DECREMENTS: [i32; POSITIONS_PER_TIER] = [0, 3, 6, 7, 9, 10, 11, 13];

// Extras administration
pub const UNKNOWN_CATEGORY_NAME: &str = "N/A";
