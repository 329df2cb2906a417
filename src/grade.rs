use crate::error::Error;

/// Letter grades and their quality value on the 4.0 scale.
pub const GRADE_TABLE: [(&str, f64); 10] = [
    ("A", 4.00),
    ("A-", 3.67),
    ("B+", 3.33),
    ("B", 3.00),
    ("B-", 2.67),
    ("C+", 2.33),
    ("C", 2.00),
    ("C-", 1.67),
    ("D", 1.00),
    ("F", 0.00),
];

/// Case-sensitive lookup of a grade label.
pub fn quality_value(label: &str) -> Option<f64> {
    GRADE_TABLE
        .iter()
        .find(|(grade, _)| *grade == label)
        .map(|(_, value)| *value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeRecord {
    pub grade: String,
    pub credits: u32,
}

impl GradeRecord {
    pub fn new(grade: impl Into<String>, credits: u32) -> GradeRecord {
        GradeRecord {
            grade: grade.into(),
            credits,
        }
    }

    pub fn quality_points(&self) -> Result<f64, Error> {
        quality_value(&self.grade)
            .map(|value| value * f64::from(self.credits))
            .ok_or_else(|| Error::UnknownGrade(self.grade.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        assert_eq!(quality_value("A"), Some(4.00));
        assert_eq!(quality_value("A-"), Some(3.67));
        assert_eq!(quality_value("C+"), Some(2.33));
        assert_eq!(quality_value("F"), Some(0.00));
        assert_eq!(quality_value("E"), None);
        assert_eq!(quality_value("a"), None);
        assert_eq!(quality_value("A+"), None);
        assert_eq!(quality_value(""), None);
    }

    #[test]
    fn table_is_ordered_and_bounded() {
        for pair in GRADE_TABLE.windows(2) {
            assert!(pair[0].1 > pair[1].1, "{} before {}", pair[0].0, pair[1].0);
        }
        assert!(GRADE_TABLE.iter().all(|(_, v)| (0.0..=4.0).contains(v)));
    }

    #[test]
    fn quality_points() {
        assert_eq!(GradeRecord::new("A", 3).quality_points().unwrap(), 12.0);
        assert_eq!(GradeRecord::new("B", 4).quality_points().unwrap(), 12.0);
        assert_eq!(GradeRecord::new("F", 5).quality_points().unwrap(), 0.0);
        assert_eq!(GradeRecord::new("D", 0).quality_points().unwrap(), 0.0);
    }

    #[test]
    fn unknown_grade() {
        match GradeRecord::new("E", 3).quality_points() {
            Err(Error::UnknownGrade(label)) => assert_eq!(label, "E"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
