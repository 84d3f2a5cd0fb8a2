//! Letter grades and the grade-point scale

use std::fmt;

/// Letter grades recognized by the GPA scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterGrade {
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    CMinus,
    DPlus,
    D,
    DMinus,
    F,
}

impl LetterGrade {
    /// Parses a grade as written in the grades file. Unknown letters yield `None`.
    pub fn parse(letter: &str) -> Option<Self> {
        let grade = match letter {
            "A" => LetterGrade::A,
            "A-" => LetterGrade::AMinus,
            "B+" => LetterGrade::BPlus,
            "B" => LetterGrade::B,
            "B-" => LetterGrade::BMinus,
            "C+" => LetterGrade::CPlus,
            "C" => LetterGrade::C,
            "C-" => LetterGrade::CMinus,
            "D+" => LetterGrade::DPlus,
            "D" => LetterGrade::D,
            "D-" => LetterGrade::DMinus,
            "F" => LetterGrade::F,
            _ => return None,
        };
        Some(grade)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::AMinus => "A-",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::BMinus => "B-",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::CMinus => "C-",
            LetterGrade::DPlus => "D+",
            LetterGrade::D => "D",
            LetterGrade::DMinus => "D-",
            LetterGrade::F => "F",
        }
    }

    /// Grade points on the 4.00 scale; everything below C is 0.00
    pub fn points(&self) -> f64 {
        match self {
            LetterGrade::A => 4.00,
            LetterGrade::AMinus => 3.75,
            LetterGrade::BPlus => 3.25,
            LetterGrade::B => 3.00,
            LetterGrade::BMinus => 2.75,
            LetterGrade::CPlus => 2.25,
            LetterGrade::C => 2.00,
            LetterGrade::CMinus
            | LetterGrade::DPlus
            | LetterGrade::D
            | LetterGrade::DMinus
            | LetterGrade::F => 0.00,
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Running grade-point total
#[derive(Debug, Clone, Copy, Default)]
pub struct GpaAccumulator {
    total: f64,
    counted: usize,
}

impl GpaAccumulator {
    pub fn add(&mut self, grade: LetterGrade) {
        self.total += grade.points();
        self.counted += 1;
    }

    pub fn counted(&self) -> usize {
        self.counted
    }

    /// Mean grade points rounded to two decimals, or `None` with nothing counted
    pub fn gpa(&self) -> Option<f64> {
        if self.counted == 0 {
            return None;
        }
        let mean = self.total / self.counted as f64;
        Some((mean * 100.0).round() / 100.0)
    }
}
