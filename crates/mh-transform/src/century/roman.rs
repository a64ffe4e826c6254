//! Roman numeral conversion.

const ROMAN_TABLE: &[(u32, &str)] = &[
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Encodes `n` with the greedy subtractive table (16 -> `XVI`).
///
/// Zero encodes as an empty string.
pub fn to_roman(n: u32) -> String {
    let mut out = String::new();
    let mut rest = n;
    for &(value, symbol) in ROMAN_TABLE {
        while rest >= value {
            out.push_str(symbol);
            rest -= value;
        }
    }
    out
}

fn letter_value(letter: char) -> Option<i64> {
    match letter.to_ascii_uppercase() {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Decodes a Roman numeral, case-insensitively.
///
/// Scans right to left: a letter worth less than the largest value seen so
/// far is subtracted, anything else is added. Returns `None` for empty input,
/// non-Roman letters, or a total that is not positive.
pub fn roman_to_int(numeral: &str) -> Option<u32> {
    let mut total: i64 = 0;
    let mut max_seen: i64 = 0;
    for letter in numeral.trim().chars().rev() {
        let value = letter_value(letter)?;
        if value < max_seen {
            total -= value;
        } else {
            total += value;
            max_seen = value;
        }
    }
    u32::try_from(total).ok().filter(|&n| n > 0)
}
