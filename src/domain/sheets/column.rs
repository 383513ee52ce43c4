use std::fmt::Formatter;

use super::range_address::AddressError;

/// 1-based spreadsheet column, rendered with bijective base-26 letters.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Column(u32);

impl Column {
    pub fn new(value: u32) -> Result<Self, AddressError> {
        if value == 0 {
            return Err(AddressError::ZeroColumn);
        }
        Ok(Column(value))
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", number_to_letters(self.0))
    }
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Column(u32: {}, letters: {})", self.0, self)
    }
}

/// Spreadsheet label for a 1-based column count: 1 -> A, 27 -> AA, 703 -> AAA.
pub fn column_name(number: u32) -> Result<String, AddressError> {
    Column::new(number).map(|column| column.to_string())
}

// There is no zero digit, so each step shifts down by one before the modulus.
fn number_to_letters(number: u32) -> String {
    let mut number = number;
    let mut result = Vec::new();
    while number > 0 {
        let remainder = (number - 1) % 26;
        result.push(b'A' + remainder as u8);
        number = (number - 1) / 26;
    }
    result.iter().rev().map(|&byte| byte as char).collect()
}
