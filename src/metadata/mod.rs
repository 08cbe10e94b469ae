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

mod regions;

use std::collections::HashMap;

use log::warn;

/// A single formatting template for a region.
///
/// `pattern` is a regular expression with capturing groups that must match
/// the digit string to format in full. `format` is the output rule with `$n`
/// group references; it must not contain literal digits of its own, since
/// every digit in the rendered output has to correspond to an input digit.
#[derive(Debug)]
pub struct NumberFormat {
    pub pattern: &'static str,
    /// Pattern the leading digits must match for this template to apply.
    /// Tried before the full pattern, in metadata order.
    pub leading_digits: Option<&'static str>,
    pub format: &'static str,
}

/// Per-region formatting and validation metadata. Read-only to the rest of
/// the crate; the formatter and the adapter only ever hold shared references
/// into the [`MetadataTable`].
#[derive(Debug)]
pub struct RegionMetadata {
    /// CLDR two-letter region code, e.g. "US".
    pub id: &'static str,
    /// Country calling code in international dialing, 1-3 digits.
    pub country_code: i32,
    /// International Direct Dialing prefix used when dialing out of this
    /// region without a '+', e.g. "011" in the US and "00" in most of Europe.
    pub idd_prefix: &'static str,
    /// Digit(s) prepended to the national significant number when dialing
    /// domestically. None where the prefix is absent or is already part of
    /// the national number.
    pub national_prefix: Option<&'static str>,
    /// Whether a leading zero is part of the national number itself (as in
    /// Italy) rather than a dial prefix. Such a zero must survive formatting.
    pub leading_zero_significant: bool,
    /// Pattern a full national significant number must match to be valid.
    pub national_number_pattern: &'static str,
    /// Length bounds of the national significant number.
    pub min_nsn_length: usize,
    pub max_nsn_length: usize,
    /// Ordered formatting templates over the nationally dialed digit string.
    /// Order is a priority list: the first structural match wins.
    pub number_formats: &'static [NumberFormat],
    /// Templates over the national significant number as dialed after the
    /// country calling code. Empty means the national list applies.
    pub intl_number_formats: &'static [NumberFormat],
}

impl RegionMetadata {
    pub fn formats_for(&self, international: bool) -> &'static [NumberFormat] {
        if international && !self.intl_number_formats.is_empty() {
            self.intl_number_formats
        } else {
            self.number_formats
        }
    }
}

/// The region metadata table, loaded once and immutable thereafter.
pub struct MetadataTable {
    /// A mapping from a region code to the metadata for that region.
    region_to_metadata_map: HashMap<&'static str, &'static RegionMetadata>,

    /// A mapping from a country calling code to the region code it denotes.
    /// Implemented as a sorted vector to achieve better performance.
    country_calling_code_to_region_code_map: Vec<(i32, &'static str)>,
}

impl MetadataTable {
    /// Builds the table from the compiled-in region metadata.
    pub fn compiled() -> Self {
        Self::from_regions(regions::REGIONS)
    }

    /// Builds a table from externally supplied metadata. When several regions
    /// share a country calling code, the first one listed becomes the main
    /// region for that code.
    pub fn from_regions(regions: &'static [RegionMetadata]) -> Self {
        let mut region_to_metadata_map = HashMap::with_capacity(regions.len());
        let mut country_calling_code_to_region_code_map =
            Vec::<(i32, &'static str)>::with_capacity(regions.len());
        for metadata in regions {
            region_to_metadata_map.insert(metadata.id, metadata);
            let already_mapped = country_calling_code_to_region_code_map
                .iter()
                .any(|(code, _)| *code == metadata.country_code);
            if !already_mapped {
                country_calling_code_to_region_code_map.push((metadata.country_code, metadata.id));
            }
        }
        // Sort all the pairs in ascending order according to country calling
        // code, so lookups can binary search.
        country_calling_code_to_region_code_map.sort_by_key(|(code, _)| *code);
        Self {
            region_to_metadata_map,
            country_calling_code_to_region_code_map,
        }
    }

    pub fn region(&self, region_code: &str) -> Option<&'static RegionMetadata> {
        self.region_to_metadata_map.get(region_code).copied().or_else(|| {
            warn!("Invalid or unknown region code provided: {}", region_code);
            None
        })
    }

    pub fn region_codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.region_to_metadata_map.keys().copied()
    }

    pub fn country_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.country_calling_code_to_region_code_map
            .iter()
            .map(|(code, _)| *code)
    }

    pub fn region_code_for_country_code(&self, country_calling_code: i32) -> Option<&'static str> {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .ok()
            .map(|index| self.country_calling_code_to_region_code_map[index].1)
    }

    pub fn metadata_for_country_code(
        &self,
        country_calling_code: i32,
    ) -> Option<&'static RegionMetadata> {
        self.region_code_for_country_code(country_calling_code)
            .and_then(|region_code| self.region_to_metadata_map.get(region_code).copied())
    }
}
