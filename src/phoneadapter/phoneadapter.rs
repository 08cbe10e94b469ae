// Copyright (C) 2025 The phoneadapter Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

use log::{trace, warn};

use super::{
    canonical::{CanonicalPhoneNumber, FieldValue, PhoneNumber},
    enums::PhoneNumberStyle,
    errors::{CanonicalPhoneError, FormatError, UnsupportedRegionError, ValidationError},
    helper_constants::{MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN, SEPARATOR_PATTERN},
    helper_functions::{
        get_formatted_extension, get_national_significant_number, is_match,
        prefix_number_with_country_calling_code,
    },
};
use crate::{
    asyoutype::AsYouTypeFormatter,
    i18n,
    interfaces::MatcherApi,
    macros::owned_from_cow_or,
    metadata::{MetadataTable, NumberFormat, RegionMetadata},
    regex_based_matcher::RegexBasedMatcher,
    regex_util::{RegexConsume, RegexFullMatch},
    regexp_cache::{InvalidRegexError, RegexCache},
};

pub struct PhoneAdapter {
    /// An API for validation checking.
    matcher_api: Box<dyn MatcherApi>,

    /// Cache for the compiled template and separator patterns.
    regexp_cache: RegexCache,

    /// The region metadata table. Loaded once at construction and read-only
    /// thereafter; formatters hold shared references into it.
    table: MetadataTable,
}

impl PhoneAdapter {
    pub fn new() -> Self {
        Self::new_for_metadata(MetadataTable::compiled())
    }

    pub fn new_for_metadata(table: MetadataTable) -> Self {
        Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            regexp_cache: RegexCache::with_capacity(64),
            table,
        }
    }

    pub fn supported_regions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.table.region_codes()
    }

    pub fn supported_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.table.country_calling_codes()
    }

    pub fn country_code_for_region(&self, region_code: &str) -> Option<i32> {
        self.table.region(region_code).map(|metadata| metadata.country_code)
    }

    /// Returns the region code that matches the specific country calling
    /// code. In the case of no region code being found, the unknown region
    /// code will be returned.
    pub fn region_code_for_country_code(&self, country_calling_code: i32) -> &'static str {
        self.table
            .region_code_for_country_code(country_calling_code)
            .unwrap_or(i18n::RegionCode::get_unknown())
    }

    /// Whether the main region of the given country calling code treats a
    /// leading zero as part of the national number.
    pub fn is_leading_zero_possible(&self, country_calling_code: i32) -> bool {
        self.table
            .metadata_for_country_code(country_calling_code)
            .map(|metadata| metadata.leading_zero_significant)
            .unwrap_or(false)
    }

    pub(crate) fn metadata_table(&self) -> &MetadataTable {
        &self.table
    }

    pub(crate) fn regexp_cache(&self) -> &RegexCache {
        &self.regexp_cache
    }

    /// Resolves a loosely typed canonical record into a [`PhoneNumber`],
    /// checking field well-formedness. A numeric-string national number
    /// starting with '0' keeps its leading zeros when the calling code's
    /// region treats them as significant.
    pub fn phone_number_from_canonical(
        &self,
        canonical: &CanonicalPhoneNumber,
    ) -> Result<PhoneNumber, CanonicalPhoneError> {
        let mut phone_number = PhoneNumber::default();

        let country_code = match &canonical.country_code {
            None => return Err(CanonicalPhoneError::MissingCountryCode),
            Some(FieldValue::Number(value)) => {
                i32::try_from(*value).map_err(|_| CanonicalPhoneError::InvalidCountryCode)?
            }
            Some(FieldValue::Text(value)) => value
                .parse::<i32>()
                .map_err(|_| CanonicalPhoneError::InvalidCountryCode)?,
        };
        phone_number.set_country_code(country_code);

        match &canonical.national_number {
            None => return Err(CanonicalPhoneError::MissingNationalNumber),
            Some(FieldValue::Number(value)) => phone_number.set_national_number(*value),
            Some(FieldValue::Text(value)) => {
                let national_number = value
                    .parse::<u64>()
                    .map_err(|_| CanonicalPhoneError::InvalidNationalNumber)?;
                if value.starts_with('0') && self.is_leading_zero_possible(country_code) {
                    phone_number.set_italian_leading_zero(true);
                    let leading_zeros = value.chars().take_while(|c| *c == '0').count();
                    phone_number
                        .set_number_of_leading_zeros(u8::try_from(leading_zeros).unwrap_or(u8::MAX));
                }
                phone_number.set_national_number(national_number);
            }
        }

        match &canonical.extension {
            None => {}
            Some(FieldValue::Text(value)) => phone_number.set_extension(value.clone()),
            Some(FieldValue::Number(value)) => {
                let mut buf = itoa::Buffer::new();
                phone_number.set_extension(buf.format(*value).to_owned());
            }
        }
        Ok(phone_number)
    }

    /// Formats a canonical record in the requested style.
    pub fn format_phone_number(
        &self,
        canonical: &CanonicalPhoneNumber,
        style: PhoneNumberStyle,
    ) -> Result<String, FormatError> {
        let phone_number = self.phone_number_from_canonical(canonical)?;
        self.format(&phone_number, style)
    }

    pub fn format(
        &self,
        phone_number: &PhoneNumber,
        style: PhoneNumberStyle,
    ) -> Result<String, FormatError> {
        let country_calling_code = phone_number.country_code();
        let national_significant_number = get_national_significant_number(phone_number);

        if matches!(style, PhoneNumberStyle::E164) {
            // Early exit for E164 case (even if the country calling code is
            // invalid) since no formatting of the national number needs to
            // be applied. Extensions are not formatted.
            let mut formatted_number = national_significant_number;
            prefix_number_with_country_calling_code(
                country_calling_code,
                PhoneNumberStyle::E164,
                &mut formatted_number,
            );
            return Ok(formatted_number);
        }

        let Some(metadata) = self.table.metadata_for_country_code(country_calling_code) else {
            warn!(
                "No metadata for country calling code {}, leaving the number as plain digits",
                country_calling_code
            );
            return Ok(national_significant_number);
        };

        // The national style formats the digits as dialed domestically,
        // which includes the region's national prefix when it has one.
        let dial_string = match (style, metadata.national_prefix) {
            (PhoneNumberStyle::National, Some(prefix)) => {
                fast_cat::concat_str!(prefix, &national_significant_number)
            }
            _ => national_significant_number,
        };
        let international = !matches!(style, PhoneNumberStyle::National);

        let mut formatted_number = owned_from_cow_or!(
            self.format_nsn(&dial_string, metadata, international)?,
            dial_string
        );

        if matches!(style, PhoneNumberStyle::Rfc3966) {
            let separator_pattern = self.regexp_cache.get_regex(SEPARATOR_PATTERN)?;
            // First consume any leading punctuation, if any was present.
            let stripped = separator_pattern
                .consume_start(&formatted_number)
                .map(|rest| rest.to_string());
            if let Some(stripped) = stripped {
                formatted_number = stripped;
            }
            // Then replace all separators with a "-".
            if let Cow::Owned(s) = separator_pattern.replace_all(&formatted_number, "-") {
                formatted_number = s;
            }
        }

        if let Some(formatted_extension) = get_formatted_extension(phone_number, style) {
            formatted_number.push_str(&formatted_extension);
        }
        prefix_number_with_country_calling_code(country_calling_code, style, &mut formatted_number);
        Ok(formatted_number)
    }

    fn format_nsn<'b>(
        &self,
        number: &'b str,
        metadata: &RegionMetadata,
        international: bool,
    ) -> Result<Cow<'b, str>, InvalidRegexError> {
        // When intl_number_formats exists, we use that to format the
        // national number for every style but the national one.
        let available_formats = metadata.formats_for(international);
        let formatting_pattern =
            self.choose_formatting_pattern_for_number(available_formats, number)?;
        if let Some(formatting_pattern) = formatting_pattern {
            let pattern_to_match = self.regexp_cache.get_regex(formatting_pattern.pattern)?;
            Ok(pattern_to_match.replace(number, formatting_pattern.format))
        } else {
            trace!("No formatting template matched '{}', leaving it as digits", number);
            Ok(Cow::Borrowed(number))
        }
    }

    fn choose_formatting_pattern_for_number<'b>(
        &self,
        available_formats: &'b [NumberFormat],
        national_number: &str,
    ) -> Result<Option<&'b NumberFormat>, InvalidRegexError> {
        for format in available_formats {
            if let Some(leading_digits) = format.leading_digits {
                let leading_digits_pattern = self.regexp_cache.get_regex(leading_digits)?;
                if !leading_digits_pattern.matches_start(national_number) {
                    continue;
                }
            }
            let pattern_to_match = self.regexp_cache.get_regex(format.pattern)?;
            if pattern_to_match.full_match(national_number) {
                return Ok(Some(format));
            }
        }
        Ok(None)
    }

    /// Validates a canonical record against international rules, or against
    /// a specific region when one is given.
    pub fn validate_phone_number(
        &self,
        canonical: &CanonicalPhoneNumber,
        region_code: Option<&str>,
    ) -> Result<(), ValidationError> {
        let phone_number = self.phone_number_from_canonical(canonical)?;
        let country_calling_code = phone_number.country_code();

        let for_region = region_code.is_some();
        let metadata = match region_code {
            Some(region_code) => {
                let Some(metadata) = self.table.region(region_code) else {
                    return Err(ValidationError::InvalidForRegion);
                };
                if metadata.country_code != country_calling_code {
                    trace!(
                        "Country calling code {} does not belong to region {}",
                        country_calling_code, region_code
                    );
                    return Err(ValidationError::InvalidForRegion);
                }
                metadata
            }
            None => self
                .table
                .metadata_for_country_code(country_calling_code)
                .ok_or(ValidationError::InvalidCountryCode)?,
        };

        let national_significant_number = get_national_significant_number(&phone_number);
        let length = national_significant_number.len();
        if length < MIN_LENGTH_FOR_NSN.max(metadata.min_nsn_length) {
            return Err(ValidationError::TooShort);
        }
        if length > MAX_LENGTH_FOR_NSN.min(metadata.max_nsn_length) {
            return Err(ValidationError::TooLong);
        }
        if !is_match(
            &self.matcher_api,
            &national_significant_number,
            metadata.national_number_pattern,
        ) {
            trace!(
                "Number '{}' does not match the national number pattern of {}",
                national_significant_number, metadata.id
            );
            return Err(if for_region {
                ValidationError::InvalidForRegion
            } else {
                ValidationError::NotANumber
            });
        }
        Ok(())
    }

    /// Returns a stateful as-you-type formatter bound to the given region.
    pub fn as_you_type_formatter(
        &self,
        region_code: &str,
    ) -> Result<AsYouTypeFormatter<'_>, UnsupportedRegionError> {
        let Some(metadata) = self.table.region(region_code) else {
            return Err(UnsupportedRegionError(region_code.to_owned()));
        };
        Ok(AsYouTypeFormatter::new(self, metadata))
    }

    /// Stateless as-you-type formatting: replays the whole input through a
    /// fresh formatter, character by character, and returns the final
    /// rendering. Byte-identical to feeding the same characters one at a
    /// time to a stateful formatter.
    pub fn format_as_typed(
        &self,
        region_code: &str,
        input: &str,
    ) -> Result<String, UnsupportedRegionError> {
        let mut formatter = self.as_you_type_formatter(region_code)?;
        let mut output = String::new();
        for ch in input.chars() {
            output = formatter.input_digit(ch);
        }
        Ok(output)
    }
}
