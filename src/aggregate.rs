//! 단계 배출량 합산, 탄소집약도, 단계별 비중 계산.

use crate::error::EngineError;
use crate::phases::PhaseEmission;
use crate::result::{PhaseResult, ResultNote};

/// 집계 결과. 결과 조립기에서 그대로 옮겨 담는다.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub phases: Vec<PhaseResult>,
    /// gCO₂e
    pub total_emissions_g: f64,
    /// 바이오매스 수량 × PCI [MJ]
    pub total_energy_mj: f64,
    /// gCO₂e/MJ
    pub carbon_intensity: f64,
    /// 생물기원 CO₂ 합계 [g], 총량 미포함
    pub biogenic_co2_g: f64,
    pub notes: Vec<ResultNote>,
}

/// 단계 배출량을 합산하고 탄소집약도를 계산한다.
///
/// 총 에너지가 0 이하면 `ZeroEnergy`로 실패한다. 총 배출이 0이면 모든 비중을 0으로 두고
/// [`ResultNote::ZeroTotalEmissions`]를 붙인다. 합계가 f64 범위를 넘으면 `InvalidInput`이다.
pub fn aggregate(
    emissions: &[PhaseEmission],
    biomass_kg: f64,
    pci_mj_per_kg: f64,
) -> Result<Aggregate, EngineError> {
    let total_energy_mj = biomass_kg * pci_mj_per_kg;
    // NaN도 여기서 걸러진다
    if !(total_energy_mj > 0.0) {
        return Err(EngineError::ZeroEnergy {
            energy_mj: total_energy_mj,
        });
    }

    let total_emissions_g: f64 = emissions.iter().map(|e| e.emissions_g).sum();
    let biogenic_co2_g: f64 = emissions.iter().map(|e| e.biogenic_co2_g).sum();
    let carbon_intensity = total_emissions_g / total_energy_mj;

    // 결과에는 inf/NaN이 들어가지 않는다
    ensure_finite("total_energy_mj", total_energy_mj)?;
    ensure_finite("total_emissions_g", total_emissions_g)?;
    ensure_finite("biogenic_co2_g", biogenic_co2_g)?;
    ensure_finite("carbon_intensity", carbon_intensity)?;

    let mut notes = Vec::new();
    if total_emissions_g == 0.0 {
        notes.push(ResultNote::ZeroTotalEmissions);
    }

    let phases = emissions
        .iter()
        .map(|e| PhaseResult {
            phase: e.phase,
            emissions_g: e.emissions_g,
            share_pct: share(e.emissions_g, total_emissions_g),
            components: e.components.clone(),
        })
        .collect();

    Ok(Aggregate {
        phases,
        total_emissions_g,
        total_energy_mj,
        carbon_intensity,
        biogenic_co2_g,
        notes,
    })
}

fn ensure_finite(field: &'static str, value: f64) -> Result<(), EngineError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EngineError::invalid(field, value))
    }
}

fn share(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        part / total * 100.0
    }
}
