use super::{Component, PhaseEmission, PhaseId};
use crate::error::{ensure_non_negative, EngineError};
use crate::factors::{FactorCategory, FactorTable, FactorUnit};

/// 산업 단계(건조, 분쇄, 펠릿/브리켓 성형) 입력.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IndustrialInput {
    /// 전력 [kWh]
    pub electricity_kwh: f64,
    /// 열에너지 [MJ]
    pub thermal_mj: f64,
    /// 용수 [m³]
    pub water_m3: f64,
}

impl IndustrialInput {
    pub fn validate(&self) -> Result<(), EngineError> {
        ensure_non_negative("electricity_kwh", self.electricity_kwh)?;
        ensure_non_negative("thermal_mj", self.thermal_mj)?;
        ensure_non_negative("water_m3", self.water_m3)?;
        Ok(())
    }
}

/// 전력 + 열에너지 + 용수 배출을 합산한다 [gCO₂e].
pub fn calculate(input: &IndustrialInput, factors: &FactorTable) -> Result<PhaseEmission, EngineError> {
    input.validate()?;

    let electricity = factors.lookup(FactorCategory::Electricity, FactorUnit::KilowattHour)?;
    let thermal = factors.lookup(FactorCategory::ThermalEnergy, FactorUnit::MegaJoule)?;
    let water = factors.lookup(FactorCategory::Water, FactorUnit::CubicMeter)?;

    Ok(PhaseEmission::from_components(
        PhaseId::Industrial,
        vec![
            Component::new("energia_eletrica", input.electricity_kwh * electricity),
            Component::new("energia_termica", input.thermal_mj * thermal),
            Component::new("agua", input.water_m3 * water),
        ],
    ))
}
