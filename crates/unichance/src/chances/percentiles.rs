//! Official-scale percentile tables for GRE and GMAT sections.

use serde::{Deserialize, Serialize};

use super::domain::{RawNumber, StandardizedTest, UserProfile};
use super::numeric::parse_number;

const EXACT_TOLERANCE: f64 = 1e-9;

/// Score-to-percentile rows, ascending by score.
#[derive(Debug)]
pub struct PercentileTable {
    pub section: &'static str,
    rows: &'static [(f64, u8)],
}

impl PercentileTable {
    pub fn rows(&self) -> &'static [(f64, u8)] {
        self.rows
    }
}

pub static GRE_VERBAL: PercentileTable = PercentileTable {
    section: "GRE Verbal",
    rows: &[
        (130.0, 0),
        (131.0, 0),
        (132.0, 1),
        (133.0, 1),
        (134.0, 2),
        (135.0, 3),
        (136.0, 4),
        (137.0, 6),
        (138.0, 7),
        (139.0, 9),
        (140.0, 12),
        (141.0, 14),
        (142.0, 17),
        (143.0, 20),
        (144.0, 24),
        (145.0, 27),
        (146.0, 31),
        (147.0, 35),
        (148.0, 40),
        (149.0, 44),
        (150.0, 48),
        (151.0, 52),
        (152.0, 57),
        (153.0, 61),
        (154.0, 66),
        (155.0, 70),
        (156.0, 73),
        (157.0, 77),
        (158.0, 81),
        (159.0, 84),
        (160.0, 86),
        (161.0, 89),
        (162.0, 91),
        (163.0, 93),
        (164.0, 94),
        (165.0, 96),
        (166.0, 97),
        (167.0, 98),
        (168.0, 98),
        (169.0, 99),
        (170.0, 99),
    ],
};

pub static GRE_QUANT: PercentileTable = PercentileTable {
    section: "GRE Quantitative",
    rows: &[
        (130.0, 0),
        (131.0, 0),
        (132.0, 0),
        (133.0, 0),
        (134.0, 1),
        (135.0, 1),
        (136.0, 1),
        (137.0, 2),
        (138.0, 3),
        (139.0, 5),
        (140.0, 7),
        (141.0, 9),
        (142.0, 11),
        (143.0, 14),
        (144.0, 18),
        (145.0, 21),
        (146.0, 25),
        (147.0, 29),
        (148.0, 33),
        (149.0, 37),
        (150.0, 41),
        (151.0, 45),
        (152.0, 49),
        (153.0, 52),
        (154.0, 56),
        (155.0, 60),
        (156.0, 63),
        (157.0, 66),
        (158.0, 68),
        (159.0, 71),
        (160.0, 73),
        (161.0, 76),
        (162.0, 78),
        (163.0, 80),
        (164.0, 82),
        (165.0, 84),
        (166.0, 86),
        (167.0, 89),
        (168.0, 91),
        (169.0, 93),
        (170.0, 96),
    ],
};

pub static GRE_WRITING: PercentileTable = PercentileTable {
    section: "GRE Analytical Writing",
    rows: &[
        (0.0, 0),
        (0.5, 0),
        (1.0, 0),
        (1.5, 1),
        (2.0, 2),
        (2.5, 6),
        (3.0, 15),
        (3.5, 38),
        (4.0, 54),
        (4.5, 81),
        (5.0, 92),
        (5.5, 98),
        (6.0, 99),
    ],
};

pub static GMAT_QUANT: PercentileTable = PercentileTable {
    section: "GMAT Quantitative",
    rows: &[
        (60.0, 2),
        (61.0, 4),
        (62.0, 7),
        (63.0, 10),
        (64.0, 13),
        (65.0, 16),
        (66.0, 19),
        (67.0, 22),
        (68.0, 25),
        (69.0, 29),
        (70.0, 33),
        (71.0, 37),
        (72.0, 41),
        (73.0, 46),
        (74.0, 50),
        (75.0, 55),
        (76.0, 59),
        (77.0, 64),
        (78.0, 69),
        (79.0, 74),
        (80.0, 78),
        (81.0, 81),
        (82.0, 85),
        (83.0, 88),
        (84.0, 91),
        (85.0, 93),
        (86.0, 95),
        (87.0, 97),
        (88.0, 98),
        (89.0, 99),
        (90.0, 100),
    ],
};

pub static GMAT_VERBAL: PercentileTable = PercentileTable {
    section: "GMAT Verbal",
    rows: &[
        (60.0, 0),
        (61.0, 1),
        (62.0, 1),
        (63.0, 2),
        (64.0, 3),
        (65.0, 4),
        (66.0, 6),
        (67.0, 8),
        (68.0, 11),
        (69.0, 14),
        (70.0, 17),
        (71.0, 21),
        (72.0, 25),
        (73.0, 30),
        (74.0, 36),
        (75.0, 42),
        (76.0, 48),
        (77.0, 55),
        (78.0, 62),
        (79.0, 69),
        (80.0, 75),
        (81.0, 81),
        (82.0, 86),
        (83.0, 90),
        (84.0, 93),
        (85.0, 96),
        (86.0, 98),
        (87.0, 99),
        (88.0, 99),
        (89.0, 100),
        (90.0, 100),
    ],
};

/// Percentile for a section score using the nearest tabulated score at or below the input.
///
/// Inputs below the table floor get the floor's percentile; nothing is extrapolated upward.
pub fn lookup(table: &PercentileTable, input: Option<&RawNumber>) -> Option<u8> {
    let score = parse_number(input)?;
    let rows = table.rows();

    if let Some((_, percentile)) = rows
        .iter()
        .find(|(tabulated, _)| (tabulated - score).abs() < EXACT_TOLERANCE)
    {
        return Some(*percentile);
    }

    rows.iter()
        .rev()
        .find(|(tabulated, _)| *tabulated <= score)
        .or_else(|| rows.first())
        .map(|(_, percentile)| *percentile)
}

/// Section percentiles for the exam the applicant declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "exam", rename_all = "snake_case")]
pub enum TestPercentiles {
    Gre {
        verbal: Option<u8>,
        quant: Option<u8>,
        writing: Option<u8>,
    },
    Gmat {
        quant: Option<u8>,
        verbal: Option<u8>,
    },
}

pub fn applicant_percentiles(profile: &UserProfile) -> Option<TestPercentiles> {
    match profile.standardized_test? {
        StandardizedTest::Gre => Some(TestPercentiles::Gre {
            verbal: lookup(&GRE_VERBAL, profile.gre.verbal.as_ref()),
            quant: lookup(&GRE_QUANT, profile.gre.quant.as_ref()),
            writing: lookup(&GRE_WRITING, profile.gre.writing.as_ref()),
        }),
        StandardizedTest::Gmat => Some(TestPercentiles::Gmat {
            quant: lookup(&GMAT_QUANT, profile.gmat.quant.as_ref()),
            verbal: lookup(&GMAT_VERBAL, profile.gmat.verbal.as_ref()),
        }),
    }
}
