use crate::{
    CanonicalPhoneError, CanonicalPhoneNumber, FieldValue, FormatError, PhoneAdapter,
    PhoneNumberStyle, UnsupportedRegionError, ValidationError,
};

use super::region_code::RegionCode;

static ONCE: std::sync::Once = std::sync::Once::new();

#[cfg(test)]
fn get_adapter() -> PhoneAdapter {
    ONCE.call_once(|| {
        let _ = colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });

    PhoneAdapter::new()
}

#[test]
fn get_supported_regions() {
    let adapter = get_adapter();
    assert!(adapter.supported_regions().count() > 0);
    assert!(adapter.supported_regions().any(|r| r == RegionCode::us()));
    assert!(adapter.supported_regions().any(|r| r == RegionCode::it()));
}

#[test]
fn get_supported_calling_codes() {
    let adapter = get_adapter();
    let codes: Vec<i32> = adapter.supported_calling_codes().collect();
    assert!(codes.contains(&1));
    assert!(codes.contains(&44));
    assert!(codes.iter().all(|code| *code > 0));
}

#[test]
fn get_country_code_for_region() {
    let adapter = get_adapter();
    assert_eq!(Some(1), adapter.country_code_for_region(RegionCode::us()));
    assert_eq!(Some(44), adapter.country_code_for_region(RegionCode::gb()));
    assert_eq!(None, adapter.country_code_for_region(RegionCode::zz()));
}

#[test]
fn get_region_code_for_country_code() {
    let adapter = get_adapter();
    assert_eq!(RegionCode::us(), adapter.region_code_for_country_code(1));
    assert_eq!(RegionCode::gb(), adapter.region_code_for_country_code(44));
    assert_eq!(RegionCode::it(), adapter.region_code_for_country_code(39));
    assert_eq!(RegionCode::zz(), adapter.region_code_for_country_code(999));
}

#[test]
fn format_e164() {
    let adapter = get_adapter();

    let us_number = CanonicalPhoneNumber::new(1u64, 6502550100u64);
    assert_eq!(
        "+16502550100",
        adapter
            .format_phone_number(&us_number, PhoneNumberStyle::E164)
            .unwrap()
    );

    // E164 drops the extension entirely.
    let with_extension = us_number.clone().with_extension("1234");
    assert_eq!(
        "+16502550100",
        adapter
            .format_phone_number(&with_extension, PhoneNumberStyle::E164)
            .unwrap()
    );

    // The Italian leading zero survives the round-trip through a string
    // national number.
    let it_number = CanonicalPhoneNumber::new(39u64, "0612345678");
    assert_eq!(
        "+390612345678",
        adapter
            .format_phone_number(&it_number, PhoneNumberStyle::E164)
            .unwrap()
    );
}

#[test]
fn format_international() {
    let adapter = get_adapter();

    let us_number = CanonicalPhoneNumber::new(1u64, 6502550100u64);
    assert_eq!(
        "+1 650-255-0100",
        adapter
            .format_phone_number(&us_number, PhoneNumberStyle::International)
            .unwrap()
    );

    let gb_number = CanonicalPhoneNumber::new(44u64, 2070313000u64);
    assert_eq!(
        "+44 20 7031 3000",
        adapter
            .format_phone_number(&gb_number, PhoneNumberStyle::International)
            .unwrap()
    );

    let fr_number = CanonicalPhoneNumber::new(33u64, 612345678u64);
    assert_eq!(
        "+33 6 12 34 56 78",
        adapter
            .format_phone_number(&fr_number, PhoneNumberStyle::International)
            .unwrap()
    );

    // IT has no dedicated international formats so the national ones apply,
    // leading zero included.
    let it_number = CanonicalPhoneNumber::new(39u64, "0612345678");
    assert_eq!(
        "+39 06 1234 5678",
        adapter
            .format_phone_number(&it_number, PhoneNumberStyle::International)
            .unwrap()
    );
}

#[test]
fn format_national() {
    let adapter = get_adapter();

    let us_number = CanonicalPhoneNumber::new(1u64, 6502550100u64);
    assert_eq!(
        "(650) 255-0100",
        adapter
            .format_phone_number(&us_number, PhoneNumberStyle::National)
            .unwrap()
    );

    // The national style dials the GB trunk prefix.
    let gb_number = CanonicalPhoneNumber::new(44u64, 2070313000u64);
    assert_eq!(
        "020 7031 3000",
        adapter
            .format_phone_number(&gb_number, PhoneNumberStyle::National)
            .unwrap()
    );

    let fr_number = CanonicalPhoneNumber::new(33u64, 612345678u64);
    assert_eq!(
        "06 12 34 56 78",
        adapter
            .format_phone_number(&fr_number, PhoneNumberStyle::National)
            .unwrap()
    );

    let it_number = CanonicalPhoneNumber::new(39u64, "0612345678");
    assert_eq!(
        "06 1234 5678",
        adapter
            .format_phone_number(&it_number, PhoneNumberStyle::National)
            .unwrap()
    );

    let de_number = CanonicalPhoneNumber::new(49u64, 30123456u64);
    assert_eq!(
        "030 123456",
        adapter
            .format_phone_number(&de_number, PhoneNumberStyle::National)
            .unwrap()
    );
}

#[test]
fn format_rfc3966() {
    let adapter = get_adapter();

    let us_number = CanonicalPhoneNumber::new(1u64, 6502550100u64);
    assert_eq!(
        "tel:+1-650-255-0100",
        adapter
            .format_phone_number(&us_number, PhoneNumberStyle::Rfc3966)
            .unwrap()
    );

    let gb_number = CanonicalPhoneNumber::new(44u64, 2070313000u64);
    assert_eq!(
        "tel:+44-20-7031-3000",
        adapter
            .format_phone_number(&gb_number, PhoneNumberStyle::Rfc3966)
            .unwrap()
    );
}

#[test]
fn format_extension() {
    let adapter = get_adapter();

    let with_text_extension =
        CanonicalPhoneNumber::new(1u64, 6502550100u64).with_extension("4321");
    assert_eq!(
        "(650) 255-0100 ext. 4321",
        adapter
            .format_phone_number(&with_text_extension, PhoneNumberStyle::National)
            .unwrap()
    );
    assert_eq!(
        "+1 650-255-0100 ext. 4321",
        adapter
            .format_phone_number(&with_text_extension, PhoneNumberStyle::International)
            .unwrap()
    );
    assert_eq!(
        "tel:+1-650-255-0100;ext=4321",
        adapter
            .format_phone_number(&with_text_extension, PhoneNumberStyle::Rfc3966)
            .unwrap()
    );

    // A numeric extension renders the same as its decimal text.
    let with_numeric_extension =
        CanonicalPhoneNumber::new(1u64, 6502550100u64).with_extension(4321u64);
    assert_eq!(
        "(650) 255-0100 ext. 4321",
        adapter
            .format_phone_number(&with_numeric_extension, PhoneNumberStyle::National)
            .unwrap()
    );
}

#[test]
fn format_unknown_calling_code_keeps_digits() {
    let adapter = get_adapter();

    let unknown = CanonicalPhoneNumber::new(999u64, 123456u64);
    assert_eq!(
        "+999123456",
        adapter
            .format_phone_number(&unknown, PhoneNumberStyle::E164)
            .unwrap()
    );
    // No metadata, so the digits pass through unformatted.
    assert_eq!(
        "123456",
        adapter
            .format_phone_number(&unknown, PhoneNumberStyle::International)
            .unwrap()
    );
}

#[test]
fn style_selector_round_trip() {
    assert_eq!(Ok(PhoneNumberStyle::E164), "e164".parse());
    assert_eq!(Ok(PhoneNumberStyle::International), "international".parse());
    assert_eq!(Ok(PhoneNumberStyle::National), "national".parse());
    assert_eq!(Ok(PhoneNumberStyle::Rfc3966), "rfc3966".parse());
    assert!("INTERNATIONAL".parse::<PhoneNumberStyle>().is_err());
    assert!("bogus".parse::<PhoneNumberStyle>().is_err());

    assert_eq!("rfc3966", PhoneNumberStyle::Rfc3966.to_string());
}

#[test]
fn phone_number_from_canonical_field_errors() {
    let adapter = get_adapter();

    let empty = CanonicalPhoneNumber::default();
    assert_eq!(
        Err(CanonicalPhoneError::MissingCountryCode),
        adapter.phone_number_from_canonical(&empty)
    );

    let bad_country_code = CanonicalPhoneNumber::new("abc", 6502550100u64);
    assert_eq!(
        Err(CanonicalPhoneError::InvalidCountryCode),
        adapter.phone_number_from_canonical(&bad_country_code)
    );

    let no_national_number = CanonicalPhoneNumber {
        country_code: Some(FieldValue::Number(1)),
        national_number: None,
        extension: None,
    };
    assert_eq!(
        Err(CanonicalPhoneError::MissingNationalNumber),
        adapter.phone_number_from_canonical(&no_national_number)
    );

    let bad_national_number = CanonicalPhoneNumber::new(1u64, "65x0");
    assert_eq!(
        Err(CanonicalPhoneError::InvalidNationalNumber),
        adapter.phone_number_from_canonical(&bad_national_number)
    );
}

#[test]
fn phone_number_from_canonical_leading_zeros() {
    let adapter = get_adapter();

    let it_number = CanonicalPhoneNumber::new(39u64, "0612345678");
    let phone_number = adapter.phone_number_from_canonical(&it_number).unwrap();
    assert!(phone_number.italian_leading_zero());
    assert_eq!(1, phone_number.number_of_leading_zeros());
    assert_eq!(612345678, phone_number.national_number());

    // US numbers never carry a significant leading zero.
    let us_number = CanonicalPhoneNumber::new(1u64, "0612345678");
    let phone_number = adapter.phone_number_from_canonical(&us_number).unwrap();
    assert!(!phone_number.italian_leading_zero());
    assert_eq!(612345678, phone_number.national_number());

    // A pathological zero run saturates the counter instead of wrapping.
    let many_zeros = format!("{}61234", "0".repeat(300));
    let zero_heavy = CanonicalPhoneNumber::new(39u64, many_zeros.as_str());
    let phone_number = adapter.phone_number_from_canonical(&zero_heavy).unwrap();
    assert!(phone_number.italian_leading_zero());
    assert_eq!(u8::MAX, phone_number.number_of_leading_zeros());
    assert_eq!(61234, phone_number.national_number());

    // A country code and text country code resolve identically.
    let text_country_code = CanonicalPhoneNumber::new("39", "0612345678");
    assert_eq!(
        adapter.phone_number_from_canonical(&it_number).unwrap(),
        adapter.phone_number_from_canonical(&text_country_code).unwrap()
    );
}

#[test]
fn format_propagates_canonical_errors() {
    let adapter = get_adapter();

    let empty = CanonicalPhoneNumber::default();
    assert!(adapter
        .format_phone_number(&empty, PhoneNumberStyle::E164)
        .is_err_and(|err| matches!(
            err,
            FormatError::Canonical(CanonicalPhoneError::MissingCountryCode)
        )));
}

#[test]
fn validate_valid_numbers() {
    let adapter = get_adapter();

    let us_number = CanonicalPhoneNumber::new(1u64, 6502550100u64);
    assert_eq!(Ok(()), adapter.validate_phone_number(&us_number, None));
    assert_eq!(
        Ok(()),
        adapter.validate_phone_number(&us_number, Some(RegionCode::us()))
    );

    let gb_number = CanonicalPhoneNumber::new(44u64, 2070313000u64);
    assert_eq!(
        Ok(()),
        adapter.validate_phone_number(&gb_number, Some(RegionCode::gb()))
    );

    let it_number = CanonicalPhoneNumber::new(39u64, "0612345678");
    assert_eq!(
        Ok(()),
        adapter.validate_phone_number(&it_number, Some(RegionCode::it()))
    );
}

#[test]
fn validate_length_bounds() {
    let adapter = get_adapter();

    let too_short = CanonicalPhoneNumber::new(1u64, 650255010u64);
    assert_eq!(
        Err(ValidationError::TooShort),
        adapter.validate_phone_number(&too_short, Some(RegionCode::us()))
    );

    let too_long = CanonicalPhoneNumber::new(1u64, 65025501001u64);
    assert_eq!(
        Err(ValidationError::TooLong),
        adapter.validate_phone_number(&too_long, Some(RegionCode::us()))
    );
}

#[test]
fn validate_pattern_mismatch() {
    let adapter = get_adapter();

    // Ten digits but a US area code can never start with 1.
    let bad_area_code = CanonicalPhoneNumber::new(1u64, 1502550100u64);
    assert_eq!(
        Err(ValidationError::NotANumber),
        adapter.validate_phone_number(&bad_area_code, None)
    );
    assert_eq!(
        Err(ValidationError::InvalidForRegion),
        adapter.validate_phone_number(&bad_area_code, Some(RegionCode::us()))
    );
}

#[test]
fn validate_region_mismatch() {
    let adapter = get_adapter();

    let us_number = CanonicalPhoneNumber::new(1u64, 6502550100u64);
    assert_eq!(
        Err(ValidationError::InvalidForRegion),
        adapter.validate_phone_number(&us_number, Some(RegionCode::gb()))
    );
    assert_eq!(
        Err(ValidationError::InvalidForRegion),
        adapter.validate_phone_number(&us_number, Some(RegionCode::zz()))
    );
}

#[test]
fn validate_unknown_calling_code() {
    let adapter = get_adapter();

    let unknown = CanonicalPhoneNumber::new(999u64, 123456u64);
    assert_eq!(
        Err(ValidationError::InvalidCountryCode),
        adapter.validate_phone_number(&unknown, None)
    );
}

#[test]
fn validate_propagates_canonical_errors() {
    let adapter = get_adapter();

    let no_national_number = CanonicalPhoneNumber {
        country_code: Some(FieldValue::Number(1)),
        national_number: None,
        extension: None,
    };
    assert_eq!(
        Err(ValidationError::Canonical(
            CanonicalPhoneError::MissingNationalNumber
        )),
        adapter.validate_phone_number(&no_national_number, None)
    );
}

#[test]
fn as_you_type_formatter_unsupported_region() {
    let adapter = get_adapter();

    assert_eq!(
        Err(UnsupportedRegionError(RegionCode::zz().to_owned())),
        adapter
            .as_you_type_formatter(RegionCode::zz())
            .map(|_| ())
    );
}
