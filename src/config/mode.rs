use std::str::FromStr;

/// Variant systems for the construction of an interpolant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum InterpolationMode {
    /// The asymmetric system of McMillan.
    ///
    /// The partial interpolant of a clause of *A* is the restriction of the clause to shared variables, and of a clause of *B* is true.
    /// Resolution on a variable local to *A* is interpolated by disjunction, and otherwise by conjunction.
    Asymmetric = 0,

    /// The symmetric system of Huang, Krajíček, and Pudlák.
    ///
    /// Not supported.
    Symmetric,
}

impl std::fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asymmetric => write!(f, "Asymmetric"),
            Self::Symmetric => write!(f, "Symmetric"),
        }
    }
}

impl InterpolationMode {
    /// The minimum InterpolationMode type.
    pub const MIN: InterpolationMode = InterpolationMode::Asymmetric;

    /// The maximum InterpolationMode type.
    pub const MAX: InterpolationMode = InterpolationMode::Symmetric;
}

impl FromStr for InterpolationMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Asymmetric" => Ok(Self::Asymmetric),

            "Symmetric" => Ok(Self::Symmetric),

            _unkown_string => Err(()),
        }
    }
}
