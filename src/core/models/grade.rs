//! Letter grade scale

use std::fmt;
use std::str::FromStr;

/// A letter grade recorded for one course.
///
/// The grade-point scale and the passing subset are fixed university policy,
/// not configuration. Grades below C carry zero grade points; grades below
/// C+ other than C do not count toward requirement satisfaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    /// A (4.0)
    A,
    /// A- (3.75)
    AMinus,
    /// B+ (3.25)
    BPlus,
    /// B (3.0)
    B,
    /// B- (2.75)
    BMinus,
    /// C+ (2.25)
    CPlus,
    /// C (2.0)
    C,
    /// C- (0.0)
    CMinus,
    /// D+ (0.0)
    DPlus,
    /// D (0.0)
    D,
    /// D- (0.0)
    DMinus,
    /// F (0.0)
    F,
}

impl Grade {
    /// Grade-point value used for GPA computation.
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::A => 4.0,
            Self::AMinus => 3.75,
            Self::BPlus => 3.25,
            Self::B => 3.0,
            Self::BMinus => 2.75,
            Self::CPlus => 2.25,
            Self::C => 2.0,
            Self::CMinus | Self::DPlus | Self::D | Self::DMinus | Self::F => 0.0,
        }
    }

    /// Whether this grade counts toward degree-requirement satisfaction.
    ///
    /// The passing set is {A, A-, B+, B, B-, C+, C}; it is distinct from the
    /// grade-point scale (a C is passing at 2.0 points, a C- earns 0.0 and
    /// does not pass).
    #[must_use]
    pub const fn is_passing(self) -> bool {
        matches!(
            self,
            Self::A | Self::AMinus | Self::BPlus | Self::B | Self::BMinus | Self::CPlus | Self::C
        )
    }

    /// The transcript code for this grade (e.g., "A-").
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::DMinus => "D-",
            Self::F => "F",
        }
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "A-" => Ok(Self::AMinus),
            "B+" => Ok(Self::BPlus),
            "B" => Ok(Self::B),
            "B-" => Ok(Self::BMinus),
            "C+" => Ok(Self::CPlus),
            "C" => Ok(Self::C),
            "C-" => Ok(Self::CMinus),
            "D+" => Ok(Self::DPlus),
            "D" => Ok(Self::D),
            "D-" => Ok(Self::DMinus),
            "F" => Ok(Self::F),
            other => Err(format!("'{other}' is not a recognized letter grade")),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_codes() {
        for code in ["A", "A-", "B+", "B", "B-", "C+", "C", "C-", "D+", "D", "D-", "F"] {
            let grade: Grade = code.parse().expect("valid grade code");
            assert_eq!(grade.code(), code);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("A+".parse::<Grade>().is_err());
        assert!("E".parse::<Grade>().is_err());
        assert!("".parse::<Grade>().is_err());
        assert!("a".parse::<Grade>().is_err());
    }

    #[test]
    fn test_point_scale() {
        assert!((Grade::A.points() - 4.0).abs() < f64::EPSILON);
        assert!((Grade::AMinus.points() - 3.75).abs() < f64::EPSILON);
        assert!((Grade::BPlus.points() - 3.25).abs() < f64::EPSILON);
        assert!((Grade::B.points() - 3.0).abs() < f64::EPSILON);
        assert!((Grade::BMinus.points() - 2.75).abs() < f64::EPSILON);
        assert!((Grade::CPlus.points() - 2.25).abs() < f64::EPSILON);
        assert!((Grade::C.points() - 2.0).abs() < f64::EPSILON);
        assert!(Grade::CMinus.points().abs() < f64::EPSILON);
        assert!(Grade::F.points().abs() < f64::EPSILON);
    }

    #[test]
    fn test_passing_subset() {
        let passing = [
            Grade::A,
            Grade::AMinus,
            Grade::BPlus,
            Grade::B,
            Grade::BMinus,
            Grade::CPlus,
            Grade::C,
        ];
        for grade in passing {
            assert!(grade.is_passing(), "{grade} should pass");
        }

        let failing = [Grade::CMinus, Grade::DPlus, Grade::D, Grade::DMinus, Grade::F];
        for grade in failing {
            assert!(!grade.is_passing(), "{grade} should not pass");
        }
    }

    #[test]
    fn test_display_matches_code() {
        assert_eq!(Grade::AMinus.to_string(), "A-");
        assert_eq!(Grade::BPlus.to_string(), "B+");
        assert_eq!(Grade::F.to_string(), "F");
    }
}
