const NUM_DIGITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gpa(pub f64);

impl std::fmt::Display for Gpa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.*}", NUM_DIGITS, self.0)
    }
}
