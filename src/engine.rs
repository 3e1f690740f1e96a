//! 단일 계산 실행 파이프라인.
//!
//! 입력 검증 → 단계별 계산 → 집계 → 화석 기준 비교 → 결과 조립 순서로 진행하며,
//! 어느 단계에서든 오류가 나면 결과 없이 그 오류를 그대로 반환한다.

use crate::aggregate;
use crate::biomass::BiomassCatalog;
use crate::error::EngineError;
use crate::factors::{FactorRegistry, FactorTable};
use crate::phases::{
    self, AgriculturalInput, CombustionType, DistributionInput, IndustrialInput, PhaseEmission,
    PhaseInput, TransportModal, UseInput,
};
use crate::reference::{self, FossilReference};
use crate::result::{self, CalculationResult};

/// 유통 구간(모달 + 거리). 화물량은 실행 단위 바이오매스 수량을 쓴다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionLeg {
    pub modal: TransportModal,
    pub distance_km: f64,
}

/// 한 번의 계산에 필요한 불변 입력 묶음.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    pub biomass_id: String,
    pub factor_version: String,
    pub agricultural: AgriculturalInput,
    pub industrial: IndustrialInput,
    pub distribution: DistributionLeg,
    pub combustion: CombustionType,
}

impl CalculationRequest {
    /// 단계 순서대로 계산기 입력을 만든다.
    pub fn phase_inputs(&self) -> [PhaseInput; 4] {
        let biomass_kg = self.agricultural.biomass_kg;
        [
            PhaseInput::Agricultural(self.agricultural),
            PhaseInput::Industrial(self.industrial),
            PhaseInput::Distribution(DistributionInput {
                modal: self.distribution.modal,
                distance_km: self.distribution.distance_km,
                cargo_kg: biomass_kg,
            }),
            PhaseInput::Use(UseInput {
                combustion: self.combustion,
                biomass_kg,
            }),
        ]
    }
}

/// 계수표를 직접 받아 계산한다.
pub fn calculate(
    request: &CalculationRequest,
    factors: &FactorTable,
    catalog: &BiomassCatalog,
    reference: &FossilReference,
) -> Result<CalculationResult, EngineError> {
    if factors.version() != request.factor_version {
        return Err(EngineError::FactorVersionUnavailable {
            requested: request.factor_version.clone(),
            current: factors.version().to_string(),
        });
    }
    let biomass = catalog.find(&request.biomass_id)?;

    let inputs = request.phase_inputs();
    // 계수 조회 전에 모든 수치 입력을 먼저 확인한다
    for input in &inputs {
        input.validate()?;
    }

    let emissions = inputs
        .iter()
        .map(|input| phases::calculate(input, factors))
        .collect::<Result<Vec<PhaseEmission>, EngineError>>()?;

    let agg = aggregate::aggregate(
        &emissions,
        request.agricultural.biomass_kg,
        biomass.pci_mj_per_kg,
    )?;
    let neea = reference::neea(agg.carbon_intensity, reference.intensity_g_per_mj);
    let reduction = reference::reduction_pct(neea, reference.intensity_g_per_mj);

    Ok(result::assemble(
        biomass.clone(),
        factors.version().to_string(),
        agg,
        reference.clone(),
        neea,
        reduction,
    ))
}

/// 레지스트리와 바이오매스 목록, 화석 기준값을 주입받아 계산을 실행한다.
///
/// 여러 스레드에서 동시에 `calculate`를 호출해도 된다. 공유 상태는 읽기만 한다.
#[derive(Debug, Clone, Copy)]
pub struct Engine<'a> {
    registry: &'a FactorRegistry,
    catalog: &'a BiomassCatalog,
    reference: &'a FossilReference,
}

impl<'a> Engine<'a> {
    pub fn new(
        registry: &'a FactorRegistry,
        catalog: &'a BiomassCatalog,
        reference: &'a FossilReference,
    ) -> Self {
        Self {
            registry,
            catalog,
            reference,
        }
    }

    pub fn calculate(&self, request: &CalculationRequest) -> Result<CalculationResult, EngineError> {
        let table = self.registry.table_for(&request.factor_version)?;
        calculate(request, &table, self.catalog, self.reference)
    }
}
