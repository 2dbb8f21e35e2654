//! Location types.

use std::fmt;

/// The type of a node in the location graph.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocationKind {
    House,
    Work,
    School,
    /// A shop or service.  Customers of a public-facing business stay there
    /// after shopping; visitors to any other business return to where they
    /// came from.
    Business { public_facing: bool },
    CommunityGathering,
}

impl LocationKind {
    /// A business whose public-facing flag is derived from an industry code.
    pub fn business(industry_code: u32) -> Self {
        LocationKind::Business { public_facing: is_public_facing_industry(industry_code) }
    }

    #[inline]
    pub fn is_house(self) -> bool {
        matches!(self, LocationKind::House)
    }

    #[inline]
    pub fn is_business(self) -> bool {
        matches!(self, LocationKind::Business { .. })
    }

    #[inline]
    pub fn is_public_facing(self) -> bool {
        matches!(self, LocationKind::Business { public_facing: true })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LocationKind::House              => "house",
            LocationKind::Work               => "work",
            LocationKind::School             => "school",
            LocationKind::Business { .. }    => "business",
            LocationKind::CommunityGathering => "gathering",
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// NAICS sectors whose establishments serve walk-in customers.
///
/// | Sector | Description                          |
/// |--------|--------------------------------------|
/// | 44, 45 | Retail trade                         |
/// | 62     | Health care and social assistance    |
/// | 71     | Arts, entertainment, and recreation  |
/// | 72     | Accommodation and food services      |
/// | 81     | Other services (repair, personal)    |
const PUBLIC_FACING_SECTORS: [u32; 6] = [44, 45, 62, 71, 72, 81];

/// `true` if an industry code (NAICS, any length ≥ 2 digits) belongs to a
/// public-facing sector.  Only the leading two digits are considered.
pub fn is_public_facing_industry(code: u32) -> bool {
    let mut sector = code;
    while sector >= 100 {
        sector /= 10;
    }
    PUBLIC_FACING_SECTORS.contains(&sector)
}
