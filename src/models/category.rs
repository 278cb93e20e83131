use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Student,
    Teacher,
    Staff,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Student, Category::Teacher, Category::Staff];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "student" => Some(Category::Student),
            "teacher" => Some(Category::Teacher),
            "staff" => Some(Category::Staff),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Category::Student => "student",
            Category::Teacher => "teacher",
            Category::Staff => "staff",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Student => "Student",
            Category::Teacher => "Teacher",
            Category::Staff => "Staff",
        }
    }
}

/// Display label for a raw category code. Unknown codes are echoed unchanged.
pub fn category_label(code: &str) -> String {
    match Category::from_code(code) {
        Some(category) => category.label().to_string(),
        None => code.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_codes_map_to_labels() {
        assert_eq!(category_label("student"), "Student");
        assert_eq!(category_label("teacher"), "Teacher");
        assert_eq!(category_label("staff"), "Staff");
    }

    #[test]
    fn codes_round_trip_through_enum() {
        for category in Category::ALL {
            assert_eq!(Category::from_code(category.code()), Some(category));
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(category_label("Student"), "Student");
        assert_eq!(Category::from_code("Student"), None);
        assert_eq!(category_label(" staff "), " staff ");
        assert_eq!(category_label(""), "");
    }

    proptest! {
        #[test]
        fn unknown_codes_are_echoed(code in "\\PC*") {
            prop_assume!(Category::from_code(&code).is_none());
            prop_assert_eq!(category_label(&code), code);
        }
    }
}
