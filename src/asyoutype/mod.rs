mod as_you_type_formatter;

pub use as_you_type_formatter::AsYouTypeFormatter;
