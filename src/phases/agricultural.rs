use super::{Component, PhaseEmission, PhaseId, TransportModal};
use crate::error::{ensure_non_negative, EngineError};
use crate::factors::{FactorCategory, FactorTable, FactorUnit};
use crate::units::{convert_mass, kg_to_tonnes, MassUnit};

/// 농업 단계(재배/수확 및 산지 운송) 입력.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AgriculturalInput {
    /// 바이오매스 수량 [kg]
    pub biomass_kg: f64,
    /// 산지 → 공장 도로 운송 거리 [km]
    pub transport_distance_km: f64,
    /// 비료 사용량 [kg]
    pub fertilizer_kg: f64,
    /// 농약 사용량 [kg]
    pub pesticide_kg: f64,
    /// 토지이용변화(LUC/dLUC) 합산 배출 [kgCO₂]. 자료가 없으면 `None`.
    pub luc_kg_co2: Option<f64>,
}

impl AgriculturalInput {
    pub fn validate(&self) -> Result<(), EngineError> {
        ensure_non_negative("biomass_kg", self.biomass_kg)?;
        ensure_non_negative("transport_distance_km", self.transport_distance_km)?;
        ensure_non_negative("fertilizer_kg", self.fertilizer_kg)?;
        ensure_non_negative("pesticide_kg", self.pesticide_kg)?;
        if let Some(luc) = self.luc_kg_co2 {
            ensure_non_negative("luc_kg_co2", luc)?;
        }
        Ok(())
    }
}

/// 비료 + 농약 + 도로 운송(tkm) + LUC/dLUC 배출을 합산한다 [gCO₂e].
pub fn calculate(
    input: &AgriculturalInput,
    factors: &FactorTable,
) -> Result<PhaseEmission, EngineError> {
    input.validate()?;

    let fertilizer = factors.lookup(FactorCategory::Fertilizer, FactorUnit::Kilogram)?;
    let pesticide = factors.lookup(FactorCategory::Pesticide, FactorUnit::Kilogram)?;
    let road = factors.lookup(
        FactorCategory::Transport(TransportModal::Road),
        FactorUnit::TonneKilometer,
    )?;

    let tkm = input.transport_distance_km * kg_to_tonnes(input.biomass_kg);
    // LUC는 kgCO₂로 들어오므로 g으로 맞춘다
    let luc_g = input
        .luc_kg_co2
        .map(|kg| convert_mass(kg, MassUnit::Kilogram, MassUnit::Gram))
        .unwrap_or(0.0);

    Ok(PhaseEmission::from_components(
        PhaseId::Agricultural,
        vec![
            Component::new("fertilizantes", input.fertilizer_kg * fertilizer),
            Component::new("pesticidas", input.pesticide_kg * pesticide),
            Component::new("transporte", tkm * road),
            Component::new("luc_dluc", luc_g),
        ],
    ))
}
