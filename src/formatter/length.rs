use derive_getters::Getters;

/// Number of characters in `s` that are not whitespace.
pub fn count_non_whitespace(s: &str) -> usize {
    s.chars().filter(|c| !c.is_whitespace()).count()
}

/// Compares how many visible characters went in and came out of the
/// formatter. A mismatch hints at lost code; equal counts prove nothing.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Getters)]
pub struct LengthCheck {
    input: usize,
    output: usize,
}

impl LengthCheck {
    pub fn new(input: &str, output: &str) -> Self {
        Self {
            input: count_non_whitespace(input),
            output: count_non_whitespace(output),
        }
    }

    pub fn is_preserved(&self) -> bool {
        self.input == self.output
    }
}
