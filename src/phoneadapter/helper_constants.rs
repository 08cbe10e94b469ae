// The minimum and maximum length of the national significant number.
pub const MIN_LENGTH_FOR_NSN: usize = 2;
// The ITU says the maximum length should be 15, but we have found longer
// numbers in Germany.
pub const MAX_LENGTH_FOR_NSN: usize = 17;
/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;

pub const PLUS_SIGN: &'static str = "+";
pub const PLUS_SIGN_CHAR: char = '+';

pub const RFC3966_EXTN_PREFIX: &'static str = ";ext=";
pub const RFC3966_PREFIX: &'static str = "tel:";

// Separator characters accepted by the as-you-type formatter. Anything in
// this set is echoed literally and does not contribute to the national
// number.
pub const ACCEPTED_PUNCTUATION: &'static str = " -()";

// Pattern matching the separators a style-specific rendering may have
// inserted; RFC3966 output replaces runs of these with a single hyphen.
pub const SEPARATOR_PATTERN: &'static str = r"[\s\-().]+";

// Default extension prefix to use when formatting. This will be put in front
// of any extension component of the number, after the main national number is
// formatted.
pub const DEFAULT_EXTN_PREFIX: &'static str = " ext. ";
