use std::fmt;
use std::str::FromStr;

use super::{Component, PhaseEmission, PhaseId};
use crate::error::{ensure_non_negative, EngineError};
use crate::factors::{FactorCategory, FactorTable, FactorUnit};
use crate::units::kg_to_tonnes;

/// 유통 운송 모달.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransportModal {
    Road,
    Maritime,
    Rail,
}

impl TransportModal {
    pub const ALL: [TransportModal; 3] = [
        TransportModal::Road,
        TransportModal::Maritime,
        TransportModal::Rail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportModal::Road => "rodoviario",
            TransportModal::Maritime => "maritimo",
            TransportModal::Rail => "ferroviario",
        }
    }

    /// 입력 파일에서 받는 표기(소문자).
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            TransportModal::Road => &["rodoviario", "rodoviário", "road"],
            TransportModal::Maritime => &["maritimo", "marítimo", "maritime"],
            TransportModal::Rail => &["ferroviario", "ferroviário", "rail"],
        }
    }
}

impl fmt::Display for TransportModal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportModal {
    type Err = EngineError;

    /// 포르투갈어(악센트 유무 무관)와 영어 표기를 받는다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        TransportModal::ALL
            .into_iter()
            .find(|m| m.aliases().contains(&key.as_str()))
            .ok_or_else(|| EngineError::InvalidModal(s.to_string()))
    }
}

/// 유통 단계(공장 → 소비자) 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionInput {
    pub modal: TransportModal,
    /// 운송 거리 [km]
    pub distance_km: f64,
    /// 운송 화물량 [kg]. 실행 단위 바이오매스 수량과 같다.
    pub cargo_kg: f64,
}

impl DistributionInput {
    pub fn validate(&self) -> Result<(), EngineError> {
        ensure_non_negative("distance_km", self.distance_km)?;
        ensure_non_negative("cargo_kg", self.cargo_kg)?;
        Ok(())
    }
}

/// 거리 × 화물(t) × 모달별 계수(gCO₂/tkm).
pub fn calculate(
    input: &DistributionInput,
    factors: &FactorTable,
) -> Result<PhaseEmission, EngineError> {
    input.validate()?;

    let factor = factors.lookup(
        FactorCategory::Transport(input.modal),
        FactorUnit::TonneKilometer,
    )?;
    let tkm = input.distance_km * kg_to_tonnes(input.cargo_kg);

    Ok(PhaseEmission::from_components(
        PhaseId::Distribution,
        vec![Component::new("transporte", tkm * factor)],
    ))
}
