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

/// A loosely typed field of a canonical phone-number record: hosts pass
/// either a number or a numeric string, and numeric strings are where a
/// significant leading zero can be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    Number(u64),
    Text(String),
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// The canonical phone-number record consumed by the formatting and
/// validation operations: `{ countryCode, nationalNumber, extension? }`.
/// Field well-formedness is only checked when the record is resolved into a
/// [`PhoneNumber`], so an incomplete record can be built up freely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalPhoneNumber {
    pub country_code: Option<FieldValue>,
    pub national_number: Option<FieldValue>,
    pub extension: Option<FieldValue>,
}

impl CanonicalPhoneNumber {
    pub fn new(
        country_code: impl Into<FieldValue>,
        national_number: impl Into<FieldValue>,
    ) -> Self {
        Self {
            country_code: Some(country_code.into()),
            national_number: Some(national_number.into()),
            extension: None,
        }
    }

    pub fn with_extension(mut self, extension: impl Into<FieldValue>) -> Self {
        self.extension = Some(extension.into());
        self
    }
}

/// A resolved phone number: country calling code, national number and the
/// leading-zero bookkeeping needed to reconstruct the national significant
/// number exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    country_code: i32,
    national_number: u64,
    extension: Option<String>,
    italian_leading_zero: bool,
    number_of_leading_zeros: u8,
}

impl PhoneNumber {
    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn set_country_code(&mut self, country_code: i32) {
        self.country_code = country_code;
    }

    pub fn national_number(&self) -> u64 {
        self.national_number
    }

    pub fn set_national_number(&mut self, national_number: u64) {
        self.national_number = national_number;
    }

    pub fn extension(&self) -> &str {
        self.extension.as_deref().unwrap_or("")
    }

    pub fn has_extension(&self) -> bool {
        self.extension.is_some()
    }

    pub fn set_extension(&mut self, extension: String) {
        self.extension = Some(extension);
    }

    /// Whether the national number carries a significant leading zero, as in
    /// Italian fixed lines.
    pub fn italian_leading_zero(&self) -> bool {
        self.italian_leading_zero
    }

    pub fn set_italian_leading_zero(&mut self, italian_leading_zero: bool) {
        self.italian_leading_zero = italian_leading_zero;
    }

    pub fn number_of_leading_zeros(&self) -> u8 {
        self.number_of_leading_zeros
    }

    pub fn set_number_of_leading_zeros(&mut self, number_of_leading_zeros: u8) {
        self.number_of_leading_zeros = number_of_leading_zeros;
    }
}
