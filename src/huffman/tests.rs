#![cfg(test)]

use std::collections::BTreeMap;

use super::*;

#[test]
fn test_codes_are_deterministic() {
    let tree = HuffmanTree::from_text("abc").unwrap();
    let expected: BTreeMap<char, String> = [('a', "10"), ('b', "11"), ('c', "0")]
        .into_iter()
        .map(|(symbol, code)| (symbol, code.to_owned()))
        .collect();

    assert_eq!(tree.codes(), &expected, "The lightest pair should be merged first, left first.");
    assert_eq!(tree.encode("abc"), Ok(String::from("10110")));
    assert_eq!(tree.decode("10110"), Ok(String::from("abc")));
}

#[test]
fn test_frequent_symbols_get_short_codes() {
    let text = "мама мыла раму";
    let tree = HuffmanTree::from_text(text).unwrap();

    let frequencies = tree.frequencies();
    assert_eq!(frequencies[&'м'], 4);
    assert_eq!(frequencies[&'а'], 4);
    assert_eq!(frequencies[&' '], 2);
    assert_eq!(frequencies.values().sum::<usize>(), text.chars().count());

    let encoded = tree.encode(text).unwrap();
    assert_eq!(encoded.len(), 36);
    assert_eq!(tree.encoded_len(), 36);
    assert!(tree.code_of('м').unwrap().len() <= tree.code_of('у').unwrap().len());
    assert_eq!(tree.decode(&encoded).as_deref(), Ok(text));
}

#[test]
fn test_codes_are_prefix_free() {
    let tree = HuffmanTree::from_text("the quick brown fox jumps over the lazy dog").unwrap();
    let codes: Vec<_> = tree.codes().values().collect();
    for (i, a) in codes.iter().enumerate() {
        for b in codes.iter().skip(i + 1) {
            assert!(!a.starts_with(b.as_str()) && !b.starts_with(a.as_str()), "{a} and {b} share a prefix.");
        }
    }
}

#[test]
fn test_single_symbol() {
    let tree = HuffmanTree::from_text("aaaa").unwrap();
    assert_eq!(tree.code_of('a'), Some("0"));
    assert_eq!(tree.encode("aaaa"), Ok(String::from("0000")));
    assert_eq!(tree.decode("0000"), Ok(String::from("aaaa")));
    assert_eq!(tree.decode("01"), Err(InvalidCode { position: 1 }.into()));
}

#[test]
fn test_errors() {
    assert_eq!(HuffmanTree::from_text(""), Err(EmptyInput));

    let tree = HuffmanTree::from_text("abc").unwrap();
    assert_eq!(tree.encode("abd"), Err(UnknownSymbol { symbol: 'd' }));
    assert_eq!(tree.decode("1"), Err(InvalidCode { position: 0 }.into()));
    assert_eq!(tree.decode("01"), Err(InvalidCode { position: 1 }.into()), "Bits ending mid-code are incomplete.");
    assert_eq!(tree.decode("0x"), Err(InvalidBit { bit: 'x', position: 1 }.into()));
    assert!(tree.decode("2").is_err_and(|error| error.is_invalid_bit()));
}
