//! The entered number and lattice multiplication.
//!
//! Multiplying by a single factor with the bones means laying the bones side
//! by side, reading the factor's row and adding along the diagonals: the
//! units of each bone meet the tens of the bone to its right. The product
//! here is computed the same way, so it works for numbers of any length.

use super::digit::Digit;
use std::fmt;

/// Ordered digits, most significant first. Leading zeros are kept so the
/// slot display matches what was pressed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnteredNumber {
    digits: Vec<Digit>,
}

impl EnteredNumber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, digit: Digit) {
        self.digits.push(digit);
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    pub fn truncate(&mut self, len: usize) {
        self.digits.truncate(len);
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// True when the value is 0 (no digits, or only zeros).
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|d| d.value() == 0)
    }

    /// Decimal value without leading zeros; `"0"` when zero.
    pub fn value_string(&self) -> String {
        let text: String = self
            .digits
            .iter()
            .skip_while(|d| d.value() == 0)
            .map(|d| d.as_char())
            .collect();
        if text.is_empty() {
            "0".to_string()
        } else {
            text
        }
    }

    /// Value as an integer, if it fits.
    pub fn to_u128(&self) -> Option<u128> {
        self.digits.iter().try_fold(0u128, |acc, d| {
            acc.checked_mul(10)?.checked_add(u128::from(d.value()))
        })
    }

    /// Product with `factor`, read off the bones' diagonals.
    pub fn times(&self, factor: Digit) -> String {
        lattice_product(&self.digits, factor)
    }
}

impl fmt::Display for EnteredNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value_string())
    }
}

impl FromIterator<Digit> for EnteredNumber {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        Self {
            digits: iter.into_iter().collect(),
        }
    }
}

/// Multiply a digit sequence by a single digit using the lattice method.
///
/// Each bone contributes `(tens, units)` of `digit × factor`. Result digit `k`
/// (from the right) is the sum along diagonal `k`: the units of bone `n-1-k`
/// plus the tens of bone `n-k`, plus the carry from diagonal `k-1`.
pub fn lattice_product(digits: &[Digit], factor: Digit) -> String {
    let f = factor.value();
    let cells: Vec<(u8, u8)> = digits
        .iter()
        .map(|d| {
            let p = d.value() * f;
            (p / 10, p % 10)
        })
        .collect();

    let mut reversed = Vec::with_capacity(cells.len() + 1);
    let mut carry = 0u8;
    let mut tens_from_right = 0u8;
    for &(tens, units) in cells.iter().rev() {
        let sum = units + tens_from_right + carry;
        reversed.push(sum % 10);
        carry = sum / 10;
        tens_from_right = tens;
    }
    let last = tens_from_right + carry;
    if last > 0 {
        reversed.push(last % 10);
        if last >= 10 {
            reversed.push(last / 10);
        }
    }

    let text: String = reversed
        .iter()
        .rev()
        .skip_while(|&&d| d == 0)
        .map(|&d| (b'0' + d) as char)
        .collect();
    if text.is_empty() {
        "0".to_string()
    } else {
        text
    }
}
