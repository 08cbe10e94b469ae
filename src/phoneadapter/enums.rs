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

use strum::{Display, EnumIter, EnumString};

/// Defines the various standardized formats for representing phone numbers.
///
/// `International` and `National` formats align with the ITU-T E.123
/// recommendation, but use local conventions like hyphens (-) instead of
/// spaces for separators.
///
/// Selectors parse from their lowercase wire names (`"e164"`,
/// `"international"`, `"national"`, `"rfc3966"`); an unknown selector is a
/// parse error at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PhoneNumberStyle {
    /// **E.164 format.**
    /// This is a standardized international format with no spaces or symbols,
    /// always starting with a `+` followed by the country code.
    /// Example: `+16502550100`.
    E164,
    /// **International format.**
    /// This format includes the country code and is formatted with
    /// separators for readability, as recommended for international display.
    /// Example: `+1 650-255-0100`.
    International,
    /// **National format.**
    /// This format is used for dialing within the number's own country.
    /// It may include a national prefix (like '0') and uses local formatting
    /// conventions. Example: `(650) 255-0100`.
    National,
    /// **RFC3966 format.**
    /// A technical format used in contexts like web links. It starts with
    /// "tel:", uses hyphens as separators, and can include extensions.
    /// Example: `tel:+1-650-255-0100`.
    Rfc3966,
}
