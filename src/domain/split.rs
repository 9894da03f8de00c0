// ============================================================
// Layer 3 - Split Domain Types
// ============================================================
// The three destination partitions and the ratios that size
// them.
//
//   Split           → train / validation / test
//   SplitRatios     → three fractions that must sum to 1
//   SplitAssignment → one class's files divided between splits
//
// Ratios are validated once, up front. Nothing downstream
// re-checks them.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use std::{
    ffi::{OsStr, OsString},
    fmt,
};

use crate::domain::error::SplitError;

/// Maximum allowed distance between the ratio sum and 1.0
pub const RATIO_TOLERANCE: f64 = 1e-5;

/// One of the three destination partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Train,
    Validation,
    Test,
}

impl Split {
    /// Every split, in the order directories are created
    pub const ALL: [Split; 3] = [Split::Train, Split::Validation, Split::Test];

    /// Directory name used under the target root
    pub fn dir_name(self) -> &'static str {
        match self {
            Split::Train      => "train",
            Split::Validation => "validation",
            Split::Test       => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

// ─── SplitRatios ──────────────────────────────────────────────────────────────
/// Validated train / validation / test fractions.
///
/// Fields are private so a SplitRatios can only exist
/// after passing `SplitRatios::new`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitRatios {
    train:      f64,
    validation: f64,
    test:       f64,
}

impl SplitRatios {
    /// Validate and build a ratio triple.
    ///
    /// Fails if any ratio is negative or not finite, or if
    /// `|train + validation + test - 1| >= 1e-5`.
    pub fn new(train: f64, validation: f64, test: f64) -> Result<Self, SplitError> {
        for (name, value) in [("train", train), ("validation", validation), ("test", test)] {
            if !value.is_finite() || value < 0.0 {
                return Err(SplitError::RatioOutOfRange { name, value });
            }
        }

        let sum = train + validation + test;
        if (sum - 1.0).abs() >= RATIO_TOLERANCE {
            return Err(SplitError::InvalidRatios { train, validation, test, sum });
        }

        Ok(Self { train, validation, test })
    }

    pub fn train(&self) -> f64 {
        self.train
    }

    pub fn validation(&self) -> f64 {
        self.validation
    }

    pub fn test(&self) -> f64 {
        self.test
    }

    /// Fraction of the (train + validation) remainder that goes
    /// to validation once the test files have been taken out.
    ///
    /// Rescaling keeps validation at `validation` of the WHOLE
    /// class rather than of the remainder.
    pub fn val_fraction_of_remainder(&self) -> f64 {
        let remainder = self.train + self.validation;
        if remainder <= 0.0 {
            0.0
        } else {
            self.validation / remainder
        }
    }
}

impl Default for SplitRatios {
    fn default() -> Self {
        Self { train: 0.7, validation: 0.15, test: 0.15 }
    }
}

// ─── SplitAssignment ──────────────────────────────────────────────────────────
/// One class's files, divided into three disjoint groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitAssignment {
    pub train:      Vec<OsString>,
    pub validation: Vec<OsString>,
    pub test:       Vec<OsString>,
}

impl SplitAssignment {
    /// Files assigned to one split
    pub fn files(&self, split: Split) -> &[OsString] {
        match split {
            Split::Train      => &self.train,
            Split::Validation => &self.validation,
            Split::Test       => &self.test,
        }
    }

    /// Total number of files across all three splits
    pub fn len(&self) -> usize {
        self.train.len() + self.validation.len() + self.test.len()
    }

    /// Every (split, file name) pair, train first
    pub fn iter(&self) -> impl Iterator<Item = (Split, &OsStr)> + '_ {
        Split::ALL.into_iter().flat_map(move |split| {
            self.files(split).iter().map(move |f| (split, f.as_os_str()))
        })
    }
}
