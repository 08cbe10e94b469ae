mod canonical;
pub mod enums;
pub mod errors;
pub(crate) mod helper_constants;
mod helper_functions;
mod phoneadapter;

pub use canonical::{CanonicalPhoneNumber, FieldValue, PhoneNumber};
pub use enums::PhoneNumberStyle;
pub use phoneadapter::PhoneAdapter;
