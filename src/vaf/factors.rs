//! The 14 General System Characteristics rated during technical
//! complexity assessment

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::core::errors::Error;

/// One of the 14 standard GSC factors, identified TF01 through TF14
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GscFactor {
    DataCommunications,
    DistributedProcessing,
    Performance,
    HeavilyUsedConfiguration,
    TransactionRate,
    OnlineDataEntry,
    EndUserEfficiency,
    OnlineUpdate,
    ComplexProcessing,
    Reusability,
    InstallationEase,
    OperationalEase,
    MultipleSites,
    FacilitateChange,
}

impl GscFactor {
    /// All 14 factors in TF01..TF14 order
    pub const ALL: [GscFactor; 14] = [
        GscFactor::DataCommunications,
        GscFactor::DistributedProcessing,
        GscFactor::Performance,
        GscFactor::HeavilyUsedConfiguration,
        GscFactor::TransactionRate,
        GscFactor::OnlineDataEntry,
        GscFactor::EndUserEfficiency,
        GscFactor::OnlineUpdate,
        GscFactor::ComplexProcessing,
        GscFactor::Reusability,
        GscFactor::InstallationEase,
        GscFactor::OperationalEase,
        GscFactor::MultipleSites,
        GscFactor::FacilitateChange,
    ];

    pub const COUNT: usize = 14;

    /// Standard identifier, `TF01`..`TF14`
    pub const fn id(self) -> &'static str {
        match self {
            GscFactor::DataCommunications => "TF01",
            GscFactor::DistributedProcessing => "TF02",
            GscFactor::Performance => "TF03",
            GscFactor::HeavilyUsedConfiguration => "TF04",
            GscFactor::TransactionRate => "TF05",
            GscFactor::OnlineDataEntry => "TF06",
            GscFactor::EndUserEfficiency => "TF07",
            GscFactor::OnlineUpdate => "TF08",
            GscFactor::ComplexProcessing => "TF09",
            GscFactor::Reusability => "TF10",
            GscFactor::InstallationEase => "TF11",
            GscFactor::OperationalEase => "TF12",
            GscFactor::MultipleSites => "TF13",
            GscFactor::FacilitateChange => "TF14",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            GscFactor::DataCommunications => "Data communications",
            GscFactor::DistributedProcessing => "Distributed data processing",
            GscFactor::Performance => "Performance",
            GscFactor::HeavilyUsedConfiguration => "Heavily used configuration",
            GscFactor::TransactionRate => "Transaction rate",
            GscFactor::OnlineDataEntry => "Online data entry",
            GscFactor::EndUserEfficiency => "End-user efficiency",
            GscFactor::OnlineUpdate => "Online update",
            GscFactor::ComplexProcessing => "Complex processing",
            GscFactor::Reusability => "Reusability",
            GscFactor::InstallationEase => "Installation ease",
            GscFactor::OperationalEase => "Operational ease",
            GscFactor::MultipleSites => "Multiple sites",
            GscFactor::FacilitateChange => "Facilitate change",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            GscFactor::DataCommunications => {
                "Data communication facilities required by the application"
            }
            GscFactor::DistributedProcessing => {
                "Distributed processing and data transfer between components"
            }
            GscFactor::Performance => "Response time and throughput requirements",
            GscFactor::HeavilyUsedConfiguration => {
                "Degree of utilization of the hosting computer resources"
            }
            GscFactor::TransactionRate => "Daily and peak transaction volumes",
            GscFactor::OnlineDataEntry => "Share of data entered through online transactions",
            GscFactor::EndUserEfficiency => "Usability demands placed by end users",
            GscFactor::OnlineUpdate => "Share of master files updated online",
            GscFactor::ComplexProcessing => "Internal logical or mathematical processing",
            GscFactor::Reusability => "Design for reuse of code and components",
            GscFactor::InstallationEase => "Complexity of installation and deployment",
            GscFactor::OperationalEase => "Complexity of day-to-day operation and maintenance",
            GscFactor::MultipleSites => "Installation and operation at multiple sites",
            GscFactor::FacilitateChange => "Ability to absorb business change",
        }
    }
}

impl std::fmt::Display for GscFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for GscFactor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        GscFactor::ALL
            .into_iter()
            .find(|factor| factor.id() == wanted)
            .ok_or_else(|| Error::UnknownGscFactor(s.trim().to_string()))
    }
}

impl Serialize for GscFactor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

/// One rated GSC factor.
///
/// The weight defaults to 1 and exists as an extension point; the
/// standard formula never varies it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GscScore {
    pub factor: GscFactor,
    pub score: u8,
    pub weight: Decimal,
}

impl GscScore {
    pub fn new(factor: GscFactor, score: u8) -> Self {
        Self {
            factor,
            score,
            weight: Decimal::ONE,
        }
    }

    pub fn weighted(factor: GscFactor, score: u8, weight: Decimal) -> Self {
        Self {
            factor,
            score,
            weight,
        }
    }

    /// Contribution to the total influence: score × weight
    pub fn contribution(&self) -> Decimal {
        Decimal::from(self.score) * self.weight
    }
}

/// A full score sheet with every factor at the same influence score
pub fn uniform_scores(score: u8) -> Vec<GscScore> {
    GscFactor::ALL
        .into_iter()
        .map(|factor| GscScore::new(factor, score))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn catalog_has_fourteen_distinct_ids() {
        let mut ids: Vec<&str> = GscFactor::ALL.iter().map(|f| f.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), GscFactor::COUNT);
        assert_eq!(GscFactor::ALL[0].id(), "TF01");
        assert_eq!(GscFactor::ALL[13].id(), "TF14");
    }

    #[test]
    fn factor_ids_round_trip_through_parsing() {
        for factor in GscFactor::ALL {
            assert_eq!(factor.id().parse::<GscFactor>().unwrap(), factor);
        }
        assert_eq!("tf10".parse::<GscFactor>().unwrap(), GscFactor::Reusability);
    }

    #[test]
    fn unknown_factor_id_is_rejected() {
        let err = "TF15".parse::<GscFactor>().unwrap_err();
        assert!(matches!(err, Error::UnknownGscFactor(id) if id == "TF15"));
    }

    #[test]
    fn contribution_is_score_times_weight() {
        let score = GscScore::new(GscFactor::Performance, 3);
        assert_eq!(score.contribution(), dec!(3));

        let weighted = GscScore::weighted(GscFactor::Performance, 3, dec!(0.5));
        assert_eq!(weighted.contribution(), dec!(1.5));
    }

    #[test]
    fn uniform_scores_cover_every_factor_once() {
        let scores = uniform_scores(3);
        assert_eq!(scores.len(), 14);
        for (score, factor) in scores.iter().zip(GscFactor::ALL) {
            assert_eq!(score.factor, factor);
            assert_eq!(score.score, 3);
            assert_eq!(score.weight, Decimal::ONE);
        }
    }
}
