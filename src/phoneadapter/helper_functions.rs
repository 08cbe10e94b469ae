use std::cmp::max;

use super::{
    helper_constants::{DEFAULT_EXTN_PREFIX, PLUS_SIGN, RFC3966_EXTN_PREFIX, RFC3966_PREFIX},
    PhoneNumber, PhoneNumberStyle,
};
use crate::interfaces::MatcherApi;

/// A helper function that is used by `format` and the validation path.
pub(super) fn prefix_number_with_country_calling_code(
    country_calling_code: i32,
    style: PhoneNumberStyle,
    formatted_number: &mut String,
) {
    if let PhoneNumberStyle::National = style {
        return;
    }
    let mut buf = itoa::Buffer::new();
    let country_calling_code_str = buf.format(country_calling_code);

    // we anyway allocate a new string in concatenation, so we'l do it once
    // with capacity of resulting string
    match style {
        PhoneNumberStyle::E164 => {
            let new_str =
                fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, &formatted_number);
            *formatted_number = new_str;
        }
        PhoneNumberStyle::International => {
            let new_str =
                fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, " ", &formatted_number);
            *formatted_number = new_str;
        }
        PhoneNumberStyle::Rfc3966 => {
            let new_str = fast_cat::concat_str!(
                RFC3966_PREFIX,
                PLUS_SIGN,
                country_calling_code_str,
                "-",
                &formatted_number
            );
            *formatted_number = new_str;
        }
        // here code is already returned
        PhoneNumberStyle::National => {}
    }
}

/// Reconstructs the national significant number as a string, including any
/// significant leading zeros.
pub(crate) fn get_national_significant_number(phone_number: &PhoneNumber) -> String {
    let zeros_start = if phone_number.italian_leading_zero() {
        "0".repeat(max(phone_number.number_of_leading_zeros() as usize, 1))
    } else {
        "".to_string()
    };

    let mut buf = itoa::Buffer::new();
    let national_number = buf.format(phone_number.national_number());

    return fast_cat::concat_str!(&zeros_start, national_number);
}

/// Returns the formatted extension of a phone number, if the phone number
/// had an extension specified else None. E164 never carries an extension.
pub(super) fn get_formatted_extension(
    phone_number: &PhoneNumber,
    style: PhoneNumberStyle,
) -> Option<String> {
    if !phone_number.has_extension() || phone_number.extension().is_empty() {
        return None;
    }
    if matches!(style, PhoneNumberStyle::E164) {
        return None;
    }

    let prefix = if matches!(style, PhoneNumberStyle::Rfc3966) {
        RFC3966_EXTN_PREFIX
    } else {
        DEFAULT_EXTN_PREFIX
    };
    Some(fast_cat::concat_str!(prefix, phone_number.extension()))
}

/// Determines whether the given number is a national number match for the
/// given pattern. Does not check against possible lengths!
pub(super) fn is_match(
    matcher_api: &Box<dyn MatcherApi>,
    number: &str,
    national_number_pattern: &str,
) -> bool {
    matcher_api.match_national_number(number, national_number_pattern, false)
}
