//! Answer checking
//!
//! A submission is correct when it equals the stored digits verbatim, or when
//! it spells the stored number in English, ignoring case.

use crate::error::{QuizError, Result};
use tracing::debug;

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [(u64, &str); 6] = [
    (1_000_000_000_000_000_000, "quintillion"),
    (1_000_000_000_000_000, "quadrillion"),
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

/// Spell a number as lowercase English cardinal words, e.g. `two`,
/// `twenty-one`, `one thousand two hundred thirty-four`.
pub fn to_words(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }

    let mut parts = Vec::new();
    let mut rest = n;
    for (scale, name) in SCALES {
        let group = rest / scale;
        if group > 0 {
            parts.push(format!("{} {name}", below_thousand(group)));
            rest %= scale;
        }
    }
    if rest > 0 {
        parts.push(below_thousand(rest));
    }
    parts.join(" ")
}

fn below_thousand(n: u64) -> String {
    let hundreds = n / 100;
    let rest = n % 100;
    match (hundreds, rest) {
        (0, r) => below_hundred(r),
        (h, 0) => format!("{} hundred", ONES[h as usize]),
        (h, r) => format!("{} hundred {}", ONES[h as usize], below_hundred(r)),
    }
}

fn below_hundred(n: u64) -> String {
    let n = n as usize;
    if n < 20 {
        ONES[n].to_string()
    } else if n % 10 == 0 {
        TENS[n / 10].to_string()
    } else {
        format!("{}-{}", TENS[n / 10], ONES[n % 10])
    }
}

/// Whether `submitted` is an accepted answer for `stored`.
///
/// A stored answer that does not parse as a `u64` only accepts the verbatim
/// match.
pub fn is_correct(stored: &str, submitted: &str) -> bool {
    if submitted == stored {
        return true;
    }

    match stored.parse::<u64>() {
        Ok(value) => submitted.to_lowercase() == to_words(value),
        Err(e) => {
            debug!("Stored answer {stored:?} has no word form: {e}");
            false
        }
    }
}

/// Check a submission, failing with [`QuizError::IncorrectAnswer`] on mismatch
pub fn check_answer(stored: &str, submitted: &str) -> Result<()> {
    if is_correct(stored, submitted) {
        Ok(())
    } else {
        Err(QuizError::IncorrectAnswer)
    }
}
