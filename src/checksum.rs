use anyhow::{bail, Result};
use itertools::Itertools;

// Highest single-byte code the server accepts in a password
pub const MAX_CHAR_CODE: u8 = 127;

// Longest forged string we are willing to build
pub const MAX_FORGED_LEN: usize = 65_536;

pub fn compute_checksum(s: &str) -> i64 {
    s.chars().map(|c| i64::from(u32::from(c))).sum()
}

/// Builds the shortest string whose character codes sum to `target`.
///
/// Every character but the last is `MAX_CHAR_CODE`; the last carries the
/// remainder, so the length is `ceil(target / 127)`. Targets that would need
/// more than `MAX_FORGED_LEN` characters are rejected.
pub fn minimal_string_for_checksum(target: i64) -> Result<String> {
    if target < 0 {
        bail!("Cannot forge a string for negative checksum {}", target);
    }

    let max = i64::from(MAX_CHAR_CODE);
    let full = usize::try_from(target / max)?;
    let remainder = u8::try_from(target % max)?;
    let length = full + usize::from(remainder > 0);
    if length > MAX_FORGED_LEN {
        bail!(
            "Checksum {} needs {} characters, more than the limit of {}",
            target,
            length,
            MAX_FORGED_LEN
        );
    }

    let mut forged: String = itertools::repeat_n(char::from(MAX_CHAR_CODE), full).collect();
    if remainder > 0 {
        forged.push(char::from(remainder));
    }

    Ok(forged)
}

/// Renders the codes of `s` as `[127, 127, 1]` for log lines.
pub fn describe_codes(s: &str) -> String {
    format!("[{}]", s.chars().map(u32::from).join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn chr(code: u8) -> String {
        char::from(code).to_string()
    }

    #[test]
    fn checksum_of_ascii() {
        assert_eq!(compute_checksum(""), 0);
        assert_eq!(compute_checksum("a"), 97);
        assert_eq!(compute_checksum("abc"), 97 + 98 + 99);
    }

    #[test]
    fn checksum_counts_code_points() {
        assert_eq!(compute_checksum("é"), 0xe9);
    }

    #[test]
    fn known_targets() {
        assert_eq!(minimal_string_for_checksum(0).unwrap(), "");
        assert_eq!(minimal_string_for_checksum(1).unwrap(), chr(1));
        assert_eq!(minimal_string_for_checksum(127).unwrap(), chr(127));
        assert_eq!(
            minimal_string_for_checksum(128).unwrap(),
            chr(127) + &chr(1)
        );
        assert_eq!(
            minimal_string_for_checksum(254).unwrap(),
            chr(127) + &chr(127)
        );
    }

    #[test]
    fn negative_target_is_rejected() {
        let err = minimal_string_for_checksum(-5).unwrap_err();
        assert!(err.to_string().contains("-5"));
    }

    #[test]
    fn longest_allowed_target() {
        let max = i64::from(MAX_CHAR_CODE) * i64::try_from(MAX_FORGED_LEN).unwrap();
        let forged = minimal_string_for_checksum(max).unwrap();
        assert_eq!(forged.chars().count(), MAX_FORGED_LEN);
    }

    #[test]
    fn oversized_target_is_rejected() {
        let max = i64::from(MAX_CHAR_CODE) * i64::try_from(MAX_FORGED_LEN).unwrap();
        assert!(minimal_string_for_checksum(max + 1).is_err());
        let err = minimal_string_for_checksum(i64::MAX).unwrap_err();
        assert!(err.to_string().contains("limit"));
    }

    #[test]
    fn codes_are_described() {
        assert_eq!(describe_codes(&(chr(127) + &chr(1))), "[127, 1]");
        assert_eq!(describe_codes(""), "[]");
    }

    proptest! {
        #[test]
        fn forged_string_hits_target(target in 0_i64..1_000_000) {
            let forged = minimal_string_for_checksum(target).unwrap();
            prop_assert_eq!(compute_checksum(&forged), target);
        }

        #[test]
        fn forged_string_has_minimal_length(target in 1_i64..1_000_000) {
            let forged = minimal_string_for_checksum(target).unwrap();
            let max = i64::from(MAX_CHAR_CODE);
            let expected = usize::try_from((target + max - 1) / max).unwrap();
            prop_assert_eq!(forged.chars().count(), expected);
            prop_assert!(forged.is_ascii());
        }
    }
}
