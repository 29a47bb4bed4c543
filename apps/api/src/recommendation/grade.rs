//! Grade identifiers ("grade5", "grade10") and the education level they map to.

/// Education level label used in the generation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationLevel {
    Elementary,
    MiddleSchool,
    HighSchool,
}

impl EducationLevel {
    /// Fixed thresholds: ≤6 elementary, ≤9 middle school, everything else high school.
    /// A grade with no readable number lands in high school.
    pub fn for_grade(grade: Option<u32>) -> Self {
        match grade {
            Some(n) if n <= 6 => EducationLevel::Elementary,
            Some(n) if n <= 9 => EducationLevel::MiddleSchool,
            _ => EducationLevel::HighSchool,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::Elementary => "elementary",
            EducationLevel::MiddleSchool => "middle school",
            EducationLevel::HighSchool => "high school",
        }
    }
}

/// A grade identifier interpreted for prompt construction.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeLevel {
    pub identifier: String,
    pub number: Option<u32>,
    pub education_level: EducationLevel,
}

impl GradeLevel {
    pub fn from_identifier(identifier: &str) -> Self {
        let number = parse_grade_number(identifier);
        Self {
            identifier: identifier.to_string(),
            number,
            education_level: EducationLevel::for_grade(number),
        }
    }

    /// "5th grade" style text; falls back to the raw identifier when no number was found.
    pub fn display_name(&self) -> String {
        match self.number {
            Some(n) => format!("{}{} grade", n, ordinal_suffix(n)),
            None => self.identifier.clone(),
        }
    }
}

/// Reads the first run of digits after the non-numeric prefix ("grade10" → 10).
pub fn parse_grade_number(identifier: &str) -> Option<u32> {
    let rest = identifier.trim_start_matches(|c: char| !c.is_ascii_digit());
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}

fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_of(identifier: &str) -> &'static str {
        GradeLevel::from_identifier(identifier)
            .education_level
            .label()
    }

    #[test]
    fn test_parse_grade_number() {
        assert_eq!(parse_grade_number("grade5"), Some(5));
        assert_eq!(parse_grade_number("grade10"), Some(10));
        assert_eq!(parse_grade_number("Grade 12"), Some(12));
        assert_eq!(parse_grade_number("7"), Some(7));
        assert_eq!(parse_grade_number("kindergarten"), None);
        assert_eq!(parse_grade_number(""), None);
    }

    #[test]
    fn test_education_level_examples() {
        assert_eq!(level_of("grade5"), "elementary");
        assert_eq!(level_of("grade9"), "middle school");
        assert_eq!(level_of("grade10"), "high school");
    }

    #[test]
    fn test_education_level_boundaries() {
        assert_eq!(level_of("grade6"), "elementary");
        assert_eq!(level_of("grade7"), "middle school");
        assert_eq!(level_of("grade9"), "middle school");
        assert_eq!(level_of("grade1"), "elementary");
        assert_eq!(level_of("grade12"), "high school");
    }

    #[test]
    fn test_unreadable_grade_is_high_school() {
        let grade = GradeLevel::from_identifier("gradeK");
        assert_eq!(grade.number, None);
        assert_eq!(grade.education_level, EducationLevel::HighSchool);
        assert_eq!(grade.display_name(), "gradeK");
    }

    #[test]
    fn test_display_name_ordinals() {
        assert_eq!(GradeLevel::from_identifier("grade1").display_name(), "1st grade");
        assert_eq!(GradeLevel::from_identifier("grade2").display_name(), "2nd grade");
        assert_eq!(GradeLevel::from_identifier("grade3").display_name(), "3rd grade");
        assert_eq!(GradeLevel::from_identifier("grade5").display_name(), "5th grade");
        assert_eq!(GradeLevel::from_identifier("grade11").display_name(), "11th grade");
        assert_eq!(GradeLevel::from_identifier("grade12").display_name(), "12th grade");
    }
}
