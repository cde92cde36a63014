//! Kurven-Grad als validierter Startparameter.

use anyhow::{bail, Context};
use std::fmt;
use std::str::FromStr;

/// Grad der Bézier-Kurve (1 = linear, 2 = quadratisch, 3 = kubisch, ...).
///
/// Garantiert `grad >= 1` und damit mindestens zwei Kontrollpunkte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CurveDegree(usize);

impl CurveDegree {
    /// Linearer Grad (eine Strecke)
    pub const LINEAR: Self = Self(1);
    /// Quadratischer Grad (ein Steuerpunkt)
    pub const QUADRATIC: Self = Self(2);
    /// Kubischer Grad (zwei Steuerpunkte)
    pub const CUBIC: Self = Self(3);
    /// Höchster interaktiv sinnvoller Grad
    pub const MAX: Self = Self(64);

    /// Validiert einen Grad. Gültig ist `1..=MAX`.
    pub fn new(degree: i64) -> anyhow::Result<Self> {
        if degree < 1 {
            bail!("Grad muss mindestens 1 sein (eingegeben: {degree})");
        }
        if degree > Self::MAX.0 as i64 {
            bail!(
                "Grad darf höchstens {} sein (eingegeben: {degree})",
                Self::MAX.0
            );
        }
        let degree = usize::try_from(degree).context("Grad ist zu groß")?;
        Ok(Self(degree))
    }

    /// Der Grad als Zahl.
    pub fn get(self) -> usize {
        self.0
    }

    /// Anzahl der Kontrollpunkte (`grad + 1`).
    pub fn control_point_count(self) -> usize {
        self.0 + 1
    }

    /// Menschenlesbarer Name für Fenstertitel und Status-Bar.
    pub fn label(self) -> String {
        match self.0 {
            1 => "linear".to_string(),
            2 => "quadratic".to_string(),
            3 => "cubic".to_string(),
            n => format!("degree {n}"),
        }
    }
}

impl FromStr for CurveDegree {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<i64>()
            .with_context(|| format!("Grad ist keine ganze Zahl: '{trimmed}'"))?;
        Self::new(value)
    }
}

impl fmt::Display for CurveDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
