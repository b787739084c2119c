/*!
 * Cardinal number spelling.
 *
 * Produces American-style cardinals without "and": 1250 becomes
 * "one thousand two hundred fifty", 42 becomes "forty-two".
 */

/// Largest integer that can be spelled. Anything above is left as digits.
pub const MAX_SPELLABLE: u64 = 9_007_199_254_740_991;

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [(u64, &str); 5] = [
    (1_000_000_000_000_000, "quadrillion"),
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Spell an integer as cardinal words.
///
/// Returns `None` above [`MAX_SPELLABLE`].
pub fn integer_to_words(value: u64) -> Option<String> {
    if value > MAX_SPELLABLE {
        return None;
    }
    if value == 0 {
        return Some(ONES[0].to_string());
    }

    let mut parts: Vec<String> = Vec::new();
    let mut remainder = value;

    for (scale, name) in SCALES {
        if remainder >= scale {
            parts.push(format!("{} {}", below_thousand(remainder / scale), name));
            remainder %= scale;
        }
    }

    if remainder > 0 {
        parts.push(below_thousand(remainder));
    }

    Some(parts.join(" "))
}

fn below_thousand(value: u64) -> String {
    let hundreds = value / 100;
    let rest = value % 100;

    match (hundreds, rest) {
        (0, _) => below_hundred(rest),
        (h, 0) => format!("{} hundred", ONES[h as usize]),
        (h, r) => format!("{} hundred {}", ONES[h as usize], below_hundred(r)),
    }
}

fn below_hundred(value: u64) -> String {
    if value < 20 {
        return ONES[value as usize].to_string();
    }
    let tens = TENS[(value / 10) as usize];
    match value % 10 {
        0 => tens.to_string(),
        ones => format!("{}-{}", tens, ONES[ones as usize]),
    }
}

/// Spell a numeric literal such as `"10,000"`, `"3.25"` or `"7"`.
///
/// Thousands separators are ignored. A decimal is spoken as
/// `<whole> point <fraction>` where the fractional digits are read as one
/// integer, so `"3.25"` is "three point twenty-five". Returns `None` when a
/// part does not parse or exceeds [`MAX_SPELLABLE`].
pub fn spell_numeric_literal(literal: &str) -> Option<String> {
    let cleaned: String = literal.chars().filter(|c| *c != ',').collect();

    match cleaned.split_once('.') {
        Some((whole, fraction)) => {
            let whole_words = integer_to_words(parse_digits(whole)?)?;
            let fraction_words = integer_to_words(parse_digits(fraction)?)?;
            Some(format!("{} point {}", whole_words, fraction_words))
        }
        None => integer_to_words(parse_digits(&cleaned)?),
    }
}

fn parse_digits(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u64>().ok()
}

/// English month name for 1-12, cardinal words otherwise
pub fn month_name(month: u64) -> String {
    match month {
        1..=12 => MONTHS[(month - 1) as usize].to_string(),
        other => integer_to_words(other).unwrap_or_else(|| other.to_string()),
    }
}

/// Expand a two-digit year: 50-99 map to 19xx, 00-49 to 20xx
pub fn expand_two_digit_year(year: u64) -> u64 {
    if year >= 50 { 1900 + year } else { 2000 + year }
}
