mod asyoutype;
mod interfaces;
mod metadata;
mod phoneadapter;
mod regex_based_matcher;
mod regexp_cache;
pub mod i18n;
pub(crate) mod regex_util;

/// I decided to create this module because there are many
/// boilerplate places in the code that can be replaced with macros,
/// the name of which will describe what is happening more
/// clearly than a few lines of code.
mod macros;

#[cfg(test)]
mod tests;

use std::sync::LazyLock;

pub use asyoutype::AsYouTypeFormatter;
pub use metadata::{MetadataTable, NumberFormat, RegionMetadata};
pub use phoneadapter::{
    errors::{CanonicalPhoneError, FormatError, UnsupportedRegionError, ValidationError},
    CanonicalPhoneNumber, FieldValue, PhoneAdapter, PhoneNumber, PhoneNumberStyle,
};
pub use regexp_cache::InvalidRegexError;

pub static PHONE_ADAPTER: LazyLock<PhoneAdapter> = LazyLock::new(|| {
    PhoneAdapter::new()
});
