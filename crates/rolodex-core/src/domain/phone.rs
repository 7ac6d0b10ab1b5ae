/// Renders a phone number in its canonical display form.
///
/// Every non-digit character is dropped first. Seven digits become
/// `DDD-DDDD`, ten digits become `DDD-DDD-DDDD`, and any other count is
/// rejected.
pub fn normalize_phone(value: &str) -> Option<String> {
    let digits: String = value.chars().filter(|ch| ch.is_ascii_digit()).collect();

    match digits.len() {
        7 => Some(format!("{}-{}", &digits[..3], &digits[3..])),
        10 => Some(format!(
            "{}-{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..]
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_phone;

    #[test]
    fn normalize_phone_formats_seven_digits() {
        assert_eq!(normalize_phone("5551234").as_deref(), Some("555-1234"));
    }

    #[test]
    fn normalize_phone_formats_ten_digits() {
        assert_eq!(
            normalize_phone("5551234567").as_deref(),
            Some("555-123-4567")
        );
    }

    #[test]
    fn normalize_phone_strips_formatting() {
        assert_eq!(
            normalize_phone("  (555) 123-4567 ").as_deref(),
            Some("555-123-4567")
        );
        assert_eq!(normalize_phone("555.1234").as_deref(), Some("555-1234"));
    }

    #[test]
    fn normalize_phone_is_idempotent_on_canonical_form() {
        let once = normalize_phone("555 123 4567").unwrap();
        assert_eq!(normalize_phone(&once), Some(once));
    }

    #[test]
    fn normalize_phone_rejects_other_lengths() {
        for len in (0..=15).filter(|len| *len != 7 && *len != 10) {
            let digits = "1".repeat(len);
            assert!(normalize_phone(&digits).is_none(), "length {len} accepted");
        }
    }

    #[test]
    fn normalize_phone_rejects_country_code_and_extensions() {
        assert!(normalize_phone("+1 555 123 4567").is_none());
        assert!(normalize_phone("555-1234 x12").is_none());
    }

    #[test]
    fn normalize_phone_ignores_non_ascii_digits() {
        assert!(normalize_phone("٥٥٥١٢٣٤").is_none());
    }
}
