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

use dec_from_char::DecimalExtended;
use log::{error, trace};

use crate::{
    metadata::{NumberFormat, RegionMetadata},
    phoneadapter::{
        helper_constants::{
            ACCEPTED_PUNCTUATION, MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN, PLUS_SIGN_CHAR,
        },
        PhoneAdapter,
    },
    regex_util::RegexConsume,
};

/// Leading-digit template filters only apply once this many national digits
/// are available; below that every template is still a candidate.
const MIN_LEADING_DIGITS_LENGTH: usize = 3;

/// Filler digit used to probe a template's shape and capacity beyond the
/// digits typed so far. Must be inside every digit class the compiled-in
/// patterns use.
const TEMPLATE_FILLER_DIGIT: char = '9';

/// Where the formatter currently stands in recognizing an international
/// prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialState {
    /// No '+' or IDD prefix seen; digits are matched against the default
    /// region's national templates.
    National,
    /// A '+' or the default region's full IDD prefix was typed, but the
    /// digits after it do not resolve to a known calling code yet.
    InternationalPending,
    /// A calling code was recognized, fixing the active region and
    /// switching to its international templates.
    InternationalResolved { country_code: i32 },
}

/// Incremental phone-number formatter: consumes one character of user input
/// at a time and returns the best-guess formatted representation of the
/// number typed so far.
///
/// The rendering is re-derived from the accumulated input on every
/// keystroke, so replaying the same characters through a fresh instance
/// (see [`PhoneAdapter::format_as_typed`]) always yields the same output as
/// incremental feeding. The formatter never fails; input it cannot make
/// sense of degrades to a literal echo of the accepted characters.
pub struct AsYouTypeFormatter<'a> {
    adapter: &'a PhoneAdapter,
    default_region: &'static RegionMetadata,

    /// Raw accepted input characters in insertion order. It grows
    /// monotonically between [`clear`] calls and is the only state the
    /// output depends on.
    ///
    /// [`clear`]: AsYouTypeFormatter::clear
    accumulated_input: String,
    /// Digits identified as belonging to the national number, with calling
    /// code and IDD digits stripped once recognized.
    national_number_buffer: String,
    /// The formatting template currently believed to match, if any.
    candidate_template: Option<&'static NumberFormat>,
    dial_state: DialState,
}

impl<'a> AsYouTypeFormatter<'a> {
    pub(crate) fn new(adapter: &'a PhoneAdapter, default_region: &'static RegionMetadata) -> Self {
        Self {
            adapter,
            default_region,
            accumulated_input: String::new(),
            national_number_buffer: String::new(),
            candidate_template: None,
            dial_state: DialState::National,
        }
    }

    /// Resets all accumulated state; subsequent input starts a fresh match.
    pub fn clear(&mut self) {
        self.accumulated_input.clear();
        self.national_number_buffer.clear();
        self.candidate_template = None;
        self.dial_state = DialState::National;
    }

    /// The region whose templates are currently active: the region the
    /// formatter was built for, unless a typed calling code resolved to a
    /// different one.
    pub fn region_code(&self) -> &'static str {
        match self.dial_state {
            DialState::InternationalResolved { country_code }
                if country_code != self.default_region.country_code =>
            {
                self.adapter.region_code_for_country_code(country_code)
            }
            _ => self.default_region.id,
        }
    }

    /// Whether a leading '+' or IDD prefix has been observed.
    pub fn is_international(&self) -> bool {
        !matches!(self.dial_state, DialState::National)
    }

    /// Feeds one character of input and returns the full formatted string
    /// reflecting everything typed so far.
    ///
    /// Digits are always accepted (any Unicode decimal digit, normalized to
    /// ASCII), '+' only as the first character, and a small set of
    /// separators is passed through literally. Anything else is dropped.
    pub fn input_digit(&mut self, ch: char) -> String {
        self.accept_char(ch);
        self.derive_output()
    }

    fn accept_char(&mut self, ch: char) {
        if let Some(digit) = normalized_digit(ch) {
            self.accumulated_input.push(digit);
        } else if ch == PLUS_SIGN_CHAR && self.accumulated_input.is_empty() {
            self.accumulated_input.push(ch);
        } else if ACCEPTED_PUNCTUATION.contains(ch) {
            self.accumulated_input.push(ch);
        } else {
            trace!("Dropping unsupported input character {:?}", ch);
        }
    }

    /// Re-derives the rendering from `accumulated_input` alone.
    fn derive_output(&mut self) -> String {
        let has_user_punctuation = self
            .accumulated_input
            .chars()
            .any(|c| ACCEPTED_PUNCTUATION.contains(c));

        let (had_plus, typed) = match self.accumulated_input.strip_prefix(PLUS_SIGN_CHAR) {
            Some(rest) => (true, rest),
            None => (false, self.accumulated_input.as_str()),
        };
        let digits: String = typed.chars().filter(|c| c.is_ascii_digit()).collect();

        if has_user_punctuation {
            // The user is supplying their own grouping: pass the separators
            // through literally and stop imposing templates.
            if self.candidate_template.is_some() {
                trace!("User punctuation seen, falling back to literal echo");
            }
            self.set_candidate(None);
            self.national_number_buffer = digits;
            return self.accumulated_input.clone();
        }

        // '+' is only ever accepted as the first character, so a plus entry
        // and an IDD entry cannot both be present.
        let idd = self.default_region.idd_prefix;
        let international_rest: Option<(&str, bool)> = if had_plus {
            Some((digits.as_str(), true))
        } else if !idd.is_empty() && digits.starts_with(idd) {
            Some((&digits[idd.len()..], false))
        } else {
            None
        };

        let Some((rest, via_plus)) = international_rest else {
            self.set_dial_state(DialState::National);
            let attempt = self.attempt_format(&digits, self.default_region.formats_for(false));
            let (template, output) = match attempt {
                Some((template, rendered)) => (Some(template), rendered),
                None => (None, digits.clone()),
            };
            self.set_candidate(template);
            self.national_number_buffer = digits;
            return output;
        };

        match self.resolve_country_code(rest) {
            None => {
                self.set_dial_state(DialState::InternationalPending);
                self.set_candidate(None);
                self.national_number_buffer.clear();
                if via_plus {
                    fast_cat::concat_str!("+", rest)
                } else if rest.is_empty() {
                    idd.to_string()
                } else {
                    fast_cat::concat_str!(idd, " ", rest)
                }
            }
            Some((country_code, code_length)) => {
                self.set_dial_state(DialState::InternationalResolved { country_code });
                // The lookup cannot miss: resolve_country_code only reports
                // codes present in the table.
                let active_region = if country_code == self.default_region.country_code {
                    self.default_region
                } else {
                    self.adapter
                        .metadata_table()
                        .metadata_for_country_code(country_code)
                        .unwrap_or(self.default_region)
                };
                let buffer = &rest[code_length..];
                let attempt = self.attempt_format(buffer, active_region.formats_for(true));
                let (template, body) = match attempt {
                    Some((template, rendered)) => (Some(template), rendered),
                    None => (None, buffer.to_string()),
                };
                self.set_candidate(template);

                let mut buf = itoa::Buffer::new();
                let code_str = buf.format(country_code);
                let output = match (via_plus, body.is_empty()) {
                    (true, true) => fast_cat::concat_str!("+", code_str),
                    (true, false) => fast_cat::concat_str!("+", code_str, " ", &body),
                    (false, true) => fast_cat::concat_str!(idd, " ", code_str),
                    (false, false) => fast_cat::concat_str!(idd, " ", code_str, " ", &body),
                };
                self.national_number_buffer = buffer.to_string();
                output
            }
        }
    }

    /// Calling codes are prefix-free, so trying the shortest prefix first
    /// finds the only possible match.
    fn resolve_country_code(&self, digits: &str) -> Option<(i32, usize)> {
        // No calling code starts with 0; parsing would silently drop the
        // typed zero ("039" is not 39).
        if digits.starts_with('0') {
            return None;
        }
        let table = self.adapter.metadata_table();
        for length in 1..=MAX_LENGTH_COUNTRY_CODE.min(digits.len()) {
            let Ok(code) = digits[..length].parse::<i32>() else {
                return None;
            };
            if table.metadata_for_country_code(code).is_some() {
                trace!("Resolved country calling code {} from input", code);
                return Some((code, length));
            }
        }
        None
    }

    /// Tries the templates in metadata order and renders the buffer through
    /// the first one whose shape is prefix-compatible with it. Returns the
    /// winning template and the rendering cut right after the last typed
    /// digit.
    fn attempt_format(
        &self,
        buffer: &str,
        formats: &'static [NumberFormat],
    ) -> Option<(&'static NumberFormat, String)> {
        if buffer.is_empty() {
            return None;
        }
        let cache = self.adapter.regexp_cache();
        for format in formats {
            if buffer.len() >= MIN_LEADING_DIGITS_LENGTH {
                if let Some(leading_digits) = format.leading_digits {
                    match cache.get_regex(leading_digits) {
                        Ok(regex) => {
                            if !regex.matches_start(buffer) {
                                continue;
                            }
                        }
                        Err(err) => {
                            error!("Invalid leading digits pattern in metadata: {}", err);
                            continue;
                        }
                    }
                }
            }
            let regex = match cache.get_regex(format.pattern) {
                Ok(regex) => regex,
                Err(err) => {
                    error!("Invalid template pattern in metadata: {}", err);
                    continue;
                }
            };
            // Probe the template with the typed digits padded by filler
            // digits: if the pattern cannot match this digit prefix, or the
            // typed digits overflow its capacity, the template is out.
            let mut padded = String::with_capacity(buffer.len().max(MAX_LENGTH_FOR_NSN));
            padded.push_str(buffer);
            while padded.len() < MAX_LENGTH_FOR_NSN {
                padded.push(TEMPLATE_FILLER_DIGIT);
            }
            let Some(matched) = regex.find_start(&padded) else {
                continue;
            };
            if matched.end() < buffer.len() {
                continue;
            }
            let rendered_template = regex.replace(matched.as_str(), format.format);
            let output = cut_after_digits(&rendered_template, buffer.len());
            return Some((format, output));
        }
        None
    }

    fn set_dial_state(&mut self, state: DialState) {
        if self.dial_state != state {
            trace!("Dial state {:?} -> {:?}", self.dial_state, state);
            self.dial_state = state;
        }
    }

    fn set_candidate(&mut self, template: Option<&'static NumberFormat>) {
        let old = self.candidate_template.map(|t| t.pattern);
        let new = template.map(|t| t.pattern);
        if old != new {
            trace!("Formatting template changed: {:?} -> {:?}", old, new);
        }
        self.candidate_template = template;
    }
}

/// Normalizes any Unicode decimal digit to its ASCII form.
fn normalized_digit(ch: char) -> Option<char> {
    if ch.is_ascii_digit() {
        return Some(ch);
    }
    if !ch.is_decimal_utf8() {
        return None;
    }
    let mut buf = [0u8; 4];
    dec_from_char::normalize_decimals(ch.encode_utf8(&mut buf))
        .chars()
        .next()
}

/// Truncates a rendered template right after the `count`-th digit, dropping
/// the filler positions no typed digit has reached yet.
fn cut_after_digits(rendered: &str, count: usize) -> String {
    let mut seen = 0;
    for (index, ch) in rendered.char_indices() {
        if ch.is_ascii_digit() {
            seen += 1;
            if seen == count {
                return rendered[..index + ch.len_utf8()].to_string();
            }
        }
    }
    rendered.to_string()
}
