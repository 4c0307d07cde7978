use crate::core::error::{NumeralError, Result};
use crate::core::types::{in_domain, Label, Value};

const TENS: [&str; 6] = ["", "X", "XX", "XXX", "XL", "L"];
const ONES: [&str; 10] = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];

/// Integer to Roman-numeral converter for the 1..=50 domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct RomanConverter;

impl RomanConverter {
    pub fn new() -> Self {
        Self
    }

    /// Converts a value to its Roman numeral.
    /// Splits into a tens part and a ones part and concatenates their table entries.
    pub fn convert(&self, value: Value) -> Result<String> {
        if !in_domain(value) {
            return Err(NumeralError::OutOfDomain(value));
        }

        let tens = TENS[(value / 10) as usize];
        let ones = ONES[(value % 10) as usize];

        let mut result = String::with_capacity(tens.len() + ones.len());
        result.push_str(tens);
        result.push_str(ones);
        Ok(result)
    }

    /// Every label of the domain, in ascending value order.
    /// Walks the tens/ones tables directly, so there is nothing to fail.
    pub fn all_labels(&self) -> impl Iterator<Item = (Value, Label)> {
        TENS.iter().enumerate().flat_map(|(t, tens)| {
            ONES.iter().enumerate().filter_map(move |(o, ones)| {
                let value = (t * 10 + o) as Value;
                in_domain(value).then(|| (value, Label::from(format!("{}{}", tens, ones))))
            })
        })
    }

    /// Same as `convert`, returning a shareable label.
    pub fn label(&self, value: Value) -> Result<Label> {
        self.convert(value).map(Label::from)
    }
}
