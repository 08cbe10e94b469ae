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

use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

/// Well-formedness errors of a [`CanonicalPhoneNumber`] record. Each variant
/// is a distinct failure cause a host can report separately.
///
/// [`CanonicalPhoneNumber`]: crate::CanonicalPhoneNumber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CanonicalPhoneError {
    #[error("The canonical record has no country code")]
    MissingCountryCode,
    #[error("The country code is not a number")]
    InvalidCountryCode,
    #[error("The canonical record has no national number")]
    MissingNationalNumber,
    #[error("The national number is not a number")]
    InvalidNationalNumber,
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("{0}")]
    Canonical(#[from] CanonicalPhoneError),
    #[error("{0}")]
    InvalidRegex(#[from] InvalidRegexError),
}

/// Possible outcomes when validating a canonical phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("{0}")]
    Canonical(#[from] CanonicalPhoneError),
    /// The number has an invalid country calling code.
    #[error("The number has an invalid country calling code")]
    InvalidCountryCode,
    /// The number does not belong to the region it was validated against.
    #[error("The number is not valid for the requested region")]
    InvalidForRegion,
    /// The number is shorter than all valid numbers for this region.
    #[error("The number is shorter than all valid numbers for this region")]
    TooShort,
    /// The number is longer than all valid numbers for this region.
    #[error("The number is longer than all valid numbers for this region")]
    TooLong,
    /// The number has a valid length but does not match the national number
    /// pattern of its region.
    #[error("The number does not match any valid number pattern")]
    NotANumber,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported region: {0}")]
pub struct UnsupportedRegionError(pub String);
