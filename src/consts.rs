/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 0;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;
/// Maximum valid quarter
pub const MAX_QUARTER: u8 = 4;
/// Days in an ISO week
pub const DAYS_IN_WEEK: u8 = 7;

/// First day of any 1-based period (month, year, quarter, week)
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Weeks in a long ISO week-numbering year
pub const LONG_YEAR_WEEKS: u8 = 53;
/// Weeks in a short ISO week-numbering year
pub const SHORT_YEAR_WEEKS: u8 = 52;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in each quarter of a common year (index 0 is unused)
/// The leap day falls in Q1, which then has 91 days
pub const DAYS_IN_QUARTER: [u8; 5] = [0, 90, 91, 92, 92];

/// Days in the first quarter of a leap year
pub const FIRST_QUARTER_DAYS_LEAP: u8 = 91;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 extended format)
pub const DATE_SEPARATOR: u8 = b'-';
/// Optional sign in front of the year
pub const YEAR_SIGN: u8 = b'+';
/// Designator preceding the week number
pub const WEEK_DESIGNATOR: u8 = b'W';
/// Designator preceding the quarter number
pub const QUARTER_DESIGNATOR: u8 = b'Q';
