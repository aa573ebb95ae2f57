//! membership::number — a closed sum type over the supported shapes.
//!
//! [`FuzzyNumber`] lets callers mix triangular, Gaussian and Bell sets in
//! one basis (`Vec<FuzzyNumber>`) while the transform layer stays generic
//! over [`Membership`].
use crate::membership::{
    bell::Bell, gaussian::Gaussian, traits::Membership, triangular::Triangular,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FuzzyNumber {
    Triangular(Triangular),
    Gaussian(Gaussian),
    Bell(Bell),
}

impl Membership for FuzzyNumber {
    #[inline]
    fn degree(&self, x: f64) -> f64 {
        match self {
            FuzzyNumber::Triangular(t) => t.degree(x),
            FuzzyNumber::Gaussian(g) => g.degree(x),
            FuzzyNumber::Bell(b) => b.degree(x),
        }
    }

    fn center(&self) -> f64 {
        match self {
            FuzzyNumber::Triangular(t) => t.center(),
            FuzzyNumber::Gaussian(g) => g.center(),
            FuzzyNumber::Bell(b) => b.center(),
        }
    }

    fn support(&self) -> (f64, f64) {
        match self {
            FuzzyNumber::Triangular(t) => t.support(),
            FuzzyNumber::Gaussian(g) => g.support(),
            FuzzyNumber::Bell(b) => b.support(),
        }
    }

    fn family(&self) -> &'static str {
        match self {
            FuzzyNumber::Triangular(t) => t.family(),
            FuzzyNumber::Gaussian(g) => g.family(),
            FuzzyNumber::Bell(b) => b.family(),
        }
    }
}

impl From<Triangular> for FuzzyNumber {
    fn from(t: Triangular) -> Self {
        FuzzyNumber::Triangular(t)
    }
}

impl From<Gaussian> for FuzzyNumber {
    fn from(g: Gaussian) -> Self {
        FuzzyNumber::Gaussian(g)
    }
}

impl From<Bell> for FuzzyNumber {
    fn from(b: Bell) -> Self {
        FuzzyNumber::Bell(b)
    }
}
