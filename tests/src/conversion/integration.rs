#![cfg(test)]
use isbn10_core::{CheckCharacter, ConversionError, check_character, convert};
use isbn10_integration_tests::{KNOWN_CONVERSIONS, product_id};

/*************************************************************
                    Tests for valid product IDs
**************************************************************/

#[test]
fn known_product_ids_convert() {
    for (input, expected) in KNOWN_CONVERSIONS {
        assert_eq!(convert(input).as_deref(), Ok(*expected), "converting {input}");
    }
}

#[test]
fn result_keeps_digits_after_prefix() {
    for partial in (0..1_000_000_000u32).step_by(9_999_991) {
        let input = product_id(partial);
        let isbn = convert(&input).unwrap();

        assert_eq!(isbn.len(), 10);
        assert_eq!(&isbn[..9], &input[3..]);
    }
}

#[test]
fn prefix_is_ignored() {
    assert_eq!(convert("979140007917"), convert("978140007917"));
    assert_eq!(convert("000140007917").as_deref(), Ok("1400079179"));
}

#[test]
fn conversion_is_deterministic() {
    let first = convert("978155192370");
    for _ in 0..10 {
        assert_eq!(convert("978155192370"), first);
    }
}

#[test]
fn conversion_from_many_threads() {
    let handles: Vec<_> = KNOWN_CONVERSIONS
        .iter()
        .map(|(input, expected)| {
            std::thread::spawn(move || {
                assert_eq!(convert(input).as_deref(), Ok(*expected));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn check_character_matches_last_result_character() {
    let check = check_character("007007013").unwrap();
    assert_eq!(check.as_char(), 'x');
    assert_eq!(check, CheckCharacter::new(10).unwrap());

    let check = check_character("037428158").unwrap();
    assert_eq!(check.to_string(), "0");
}

/*************************************************************
                   Tests for rejected product IDs
**************************************************************/

#[test]
fn non_numeric_input_is_invalid_type() {
    let inputs = [
        "na",
        "9781551.9237",
        "97815519237a",
        "+97815519237",
        "-97815519237",
        "978 55192370",
        "",
    ];
    for input in inputs {
        assert_eq!(convert(input), Err(ConversionError::InvalidType), "input {input:?}");
    }
}

#[test]
fn non_ascii_digits_are_invalid_type() {
    // Arabic-Indic digits
    assert_eq!(convert("٩٧٨١٥٥١٩٢٣٧٠"), Err(ConversionError::InvalidType));
}

#[test]
fn wrong_length_is_invalid_length() {
    assert_eq!(convert("9781551923709"), Err(ConversionError::InvalidLength));
    assert_eq!(convert("978155192"), Err(ConversionError::InvalidLength));

    for len in (1..=20).filter(|len| *len != 12) {
        let input = "7".repeat(len);
        assert_eq!(convert(&input), Err(ConversionError::InvalidLength), "length {len}");
    }
}

#[test]
fn check_character_rejects_non_digits() {
    assert_eq!(check_character("03742815a"), Err(ConversionError::InvalidType));
}
