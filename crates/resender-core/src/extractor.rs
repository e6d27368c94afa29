//! Transaction hash extraction from free-form text.

use regex::Regex;
use resender_types::{TransactionHash, HASH_HEX_LEN};
use std::sync::LazyLock;

// A run of 64 hex digits must be followed by a non-hex character or the end of
// the input. The trailing character is part of the match and is dropped later.
static HASH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i)[0-9a-f]{64}(?:[^0-9a-f]|$)").expect("hash pattern is a valid regex")
});

/// Extracts every transaction hash from `text`, in order of appearance.
///
/// Surrounding text, whitespace and separators are ignored. Duplicates are kept.
/// A `0x` prefix does not prevent a match since the `x` breaks the digit run
/// before the 64 digits that follow it. A run longer than 64 digits yields its
/// final 64 digits, because only the character after the run is checked.
pub fn extract_hashes(text: &str) -> Vec<TransactionHash> {
	HASH_PATTERN
		.find_iter(text)
		.filter_map(|found| found.as_str().get(..HASH_HEX_LEN))
		.filter_map(|digits| digits.parse().ok())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn hex(c: char) -> String {
		std::iter::repeat(c).take(64).collect()
	}

	fn rendered(text: &str) -> Vec<String> {
		extract_hashes(text).iter().map(|h| h.to_string()).collect()
	}

	#[test]
	fn test_empty_input_yields_nothing() {
		assert!(extract_hashes("").is_empty());
		assert!(extract_hashes("no hashes here, just words 0x1234").is_empty());
	}

	#[test]
	fn test_bare_hashes_in_order() {
		let text = format!("first {} then {}.", hex('a'), hex('b'));
		assert_eq!(
			rendered(&text),
			vec![format!("0x{}", hex('a')), format!("0x{}", hex('b'))]
		);
	}

	#[test]
	fn test_prefixed_hashes_match() {
		let text = format!("0x{} and some text 0x{}", hex('a'), hex('b'));
		let hashes = rendered(&text);
		assert_eq!(hashes.len(), 2);
		assert_eq!(hashes[0], format!("0x{}", hex('a')));
		assert_eq!(hashes[1], format!("0x{}", hex('b')));
	}

	#[test]
	fn test_uppercase_is_normalized() {
		let text = format!("0X{}", hex('C'));
		assert_eq!(rendered(&text), vec![format!("0x{}", hex('c'))]);
	}

	#[test]
	fn test_duplicates_are_kept() {
		let text = format!("{0}\n{0}\n", hex('d'));
		assert_eq!(extract_hashes(&text).len(), 2);
	}

	#[test]
	fn test_short_runs_do_not_match() {
		let text: String = std::iter::repeat('e').take(63).collect();
		assert!(extract_hashes(&text).is_empty());
	}

	#[test]
	fn test_longer_run_yields_trailing_digits() {
		let text = format!("12{}", hex('f'));
		assert_eq!(rendered(&text), vec![format!("0x{}", hex('f'))]);
	}

	#[test]
	fn test_every_hash_is_canonical() {
		let text = "
0x9cd1a111624f45993193fa5a4907ad73d43d0c809dcd751b7be95275ae364d53
0x1F66558BEB2F6D2371E6BD1409002A3DFA8EE88D0D1E6F26128C4179CDA0BE9E,\
672ba326e12c655f81894c6a78e995ea33be6f20b6f7b446fd739c6af7d979ec";
		let hashes = rendered(text);
		assert_eq!(hashes.len(), 3);
		for hash in &hashes {
			assert_eq!(hash.len(), 66);
			assert!(hash.starts_with("0x"));
			assert_eq!(hash, &hash.to_lowercase());
		}
		assert_eq!(
			hashes[1],
			"0x1f66558beb2f6d2371e6bd1409002a3dfa8ee88d0d1e6f26128c4179cda0be9e"
		);
	}

	#[test]
	fn test_separator_is_consumed_without_losing_next_hash() {
		let text = format!("{} {}", hex('1'), hex('2'));
		assert_eq!(extract_hashes(&text).len(), 2);
	}
}
