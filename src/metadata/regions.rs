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

use super::{NumberFormat, RegionMetadata};

/// The compiled-in region table. Template order within a region is a
/// priority list and must not be reordered: for ambiguous-length numbers the
/// first structural match decides the rendering.
pub(super) static REGIONS: &[RegionMetadata] = &[
    RegionMetadata {
        id: "US",
        country_code: 1,
        idd_prefix: "011",
        national_prefix: None,
        leading_zero_significant: false,
        national_number_pattern: r"[2-9]\d{9}",
        min_nsn_length: 10,
        max_nsn_length: 10,
        number_formats: &[
            // A number typed with the leading country code, e.g.
            // "1 650-255-0100". Users frequently type US numbers this way.
            NumberFormat {
                pattern: r"(1)([2-9]\d{2})(\d{3})(\d{4})",
                leading_digits: Some("1"),
                format: "$1 $2-$3-$4",
            },
            NumberFormat {
                pattern: r"([2-9]\d{2})(\d{3})(\d{4})",
                leading_digits: Some("[2-9]"),
                format: "($1) $2-$3",
            },
        ],
        intl_number_formats: &[
            NumberFormat {
                pattern: r"([2-9]\d{2})(\d{3})(\d{4})",
                leading_digits: None,
                format: "$1-$2-$3",
            },
        ],
    },
    RegionMetadata {
        id: "GB",
        country_code: 44,
        idd_prefix: "00",
        national_prefix: Some("0"),
        leading_zero_significant: false,
        national_number_pattern: r"[1-9]\d{8,9}",
        min_nsn_length: 9,
        max_nsn_length: 10,
        number_formats: &[
            // London and other 02x areas: 020 xxxx xxxx.
            NumberFormat {
                pattern: r"(0\d{2})(\d{4})(\d{4})",
                leading_digits: Some("02"),
                format: "$1 $2 $3",
            },
            NumberFormat {
                pattern: r"(0\d{3})(\d{3})(\d{4})",
                leading_digits: Some("0[13]"),
                format: "$1 $2 $3",
            },
            // Mobiles: 07xxx xxxxxx.
            NumberFormat {
                pattern: r"(0\d{4})(\d{6})",
                leading_digits: Some("07"),
                format: "$1 $2",
            },
        ],
        intl_number_formats: &[
            NumberFormat {
                pattern: r"(\d{2})(\d{4})(\d{4})",
                leading_digits: Some("2"),
                format: "$1 $2 $3",
            },
            NumberFormat {
                pattern: r"(\d{3})(\d{3})(\d{4})",
                leading_digits: Some("[13]"),
                format: "$1 $2 $3",
            },
            NumberFormat {
                pattern: r"(\d{4})(\d{6})",
                leading_digits: Some("7"),
                format: "$1 $2",
            },
        ],
    },
    RegionMetadata {
        id: "FR",
        country_code: 33,
        idd_prefix: "00",
        national_prefix: Some("0"),
        leading_zero_significant: false,
        national_number_pattern: r"[1-9]\d{8}",
        min_nsn_length: 9,
        max_nsn_length: 9,
        number_formats: &[
            NumberFormat {
                pattern: r"(0\d)(\d{2})(\d{2})(\d{2})(\d{2})",
                leading_digits: None,
                format: "$1 $2 $3 $4 $5",
            },
        ],
        intl_number_formats: &[
            NumberFormat {
                pattern: r"(\d)(\d{2})(\d{2})(\d{2})(\d{2})",
                leading_digits: None,
                format: "$1 $2 $3 $4 $5",
            },
        ],
    },
    RegionMetadata {
        id: "IT",
        country_code: 39,
        idd_prefix: "00",
        // The leading zero of an Italian fixed line belongs to the national
        // number itself, so there is no separate dial prefix.
        national_prefix: None,
        leading_zero_significant: true,
        national_number_pattern: r"0\d{8,10}|3\d{8,9}",
        min_nsn_length: 9,
        max_nsn_length: 11,
        number_formats: &[
            NumberFormat {
                pattern: r"(0\d)(\d{4})(\d{4})",
                leading_digits: Some("0"),
                format: "$1 $2 $3",
            },
            NumberFormat {
                pattern: r"(3\d{2})(\d{3})(\d{4})",
                leading_digits: Some("3"),
                format: "$1 $2 $3",
            },
        ],
        intl_number_formats: &[],
    },
    RegionMetadata {
        id: "DE",
        country_code: 49,
        idd_prefix: "00",
        national_prefix: Some("0"),
        leading_zero_significant: false,
        national_number_pattern: r"[1-9]\d{5,10}",
        min_nsn_length: 6,
        max_nsn_length: 11,
        number_formats: &[
            NumberFormat {
                pattern: r"(030)(\d{3,8})",
                leading_digits: Some("030"),
                format: "$1 $2",
            },
            NumberFormat {
                pattern: r"(01\d{2})(\d{7,8})",
                leading_digits: Some("01"),
                format: "$1 $2",
            },
        ],
        intl_number_formats: &[
            NumberFormat {
                pattern: r"(30)(\d{3,8})",
                leading_digits: Some("30"),
                format: "$1 $2",
            },
            NumberFormat {
                pattern: r"(1\d{2})(\d{7,8})",
                leading_digits: Some("1"),
                format: "$1 $2",
            },
        ],
    },
];
