use std::fmt;
use std::str::FromStr;

use super::{Component, PhaseEmission, PhaseId};
use crate::error::{ensure_non_negative, EngineError};
use crate::factors::{FactorCategory, FactorTable, FactorUnit};

/// 바이오매스 1 kg 연소 시 생물기원 CO₂ [g]. 총량에는 넣지 않고 별도로 보고한다.
pub const BIOGENIC_CO2_G_PER_KG: f64 = 1840.0;

/// 연소 설비 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CombustionType {
    Boiler,
    Furnace,
    Other,
}

impl CombustionType {
    pub const ALL: [CombustionType; 3] = [
        CombustionType::Boiler,
        CombustionType::Furnace,
        CombustionType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CombustionType::Boiler => "caldeira",
            CombustionType::Furnace => "fornalha",
            CombustionType::Other => "outro",
        }
    }

    fn english(&self) -> &'static str {
        match self {
            CombustionType::Boiler => "boiler",
            CombustionType::Furnace => "furnace",
            CombustionType::Other => "other",
        }
    }
}

impl fmt::Display for CombustionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CombustionType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        CombustionType::ALL
            .into_iter()
            .find(|c| c.as_str() == key || c.english() == key)
            .ok_or_else(|| EngineError::InvalidCombustionType(s.to_string()))
    }
}

/// 사용(연소) 단계 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UseInput {
    pub combustion: CombustionType,
    /// 연소되는 바이오매스 [kg]. 생물기원 CO₂ 보고에만 쓴다.
    pub biomass_kg: f64,
}

impl UseInput {
    pub fn validate(&self) -> Result<(), EngineError> {
        ensure_non_negative("biomass_kg", self.biomass_kg)?;
        Ok(())
    }
}

/// 연소 방식별 고정 계수를 그대로 더한다. 기본 계수표는 모두 0(생물기원 CO₂ 중립).
///
/// 연소 방식이 이후 단계 효율을 바꾸는지에 대한 근거가 없어 직접 가산으로 처리한다.
pub fn calculate(input: &UseInput, factors: &FactorTable) -> Result<PhaseEmission, EngineError> {
    input.validate()?;

    let factor = factors.lookup(FactorCategory::Combustion(input.combustion), FactorUnit::Run)?;

    let mut emission =
        PhaseEmission::from_components(PhaseId::Use, vec![Component::new("combustao", factor)]);
    emission.biogenic_co2_g = input.biomass_kg * BIOGENIC_CO2_G_PER_KG;
    Ok(emission)
}
