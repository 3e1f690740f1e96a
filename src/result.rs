//! 계산 결과 구조와 결과 조립기.

use serde::Serialize;

use crate::aggregate::Aggregate;
use crate::biomass::BiomassProfile;
use crate::phases::{Component, PhaseId};
use crate::reference::FossilReference;

/// 결과에 붙는 참고 사항.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResultNote {
    /// 총 배출이 0이라 단계 비중을 모두 0으로 정의함
    ZeroTotalEmissions,
}

/// 단계별 결과. 생성 후 변경하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseResult {
    pub phase: PhaseId,
    /// gCO₂e
    pub emissions_g: f64,
    /// 총 배출 대비 비중 [%]
    pub share_pct: f64,
    pub components: Vec<Component>,
}

/// 한 번의 계산 실행 결과. 표시/내보내기 쪽에서 소비하는 단위.
///
/// 모든 값은 반올림하지 않은 전체 정밀도이다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub biomass: BiomassProfile,
    pub factor_version: String,
    /// 농업, 산업, 유통, 사용 순서의 4개 단계
    pub phases: Vec<PhaseResult>,
    /// gCO₂e
    pub total_emissions_g: f64,
    /// MJ
    pub total_energy_mj: f64,
    /// gCO₂e/MJ
    pub carbon_intensity: f64,
    /// gCO₂e/MJ
    pub neea: f64,
    /// 화석 대비 감축률 [%]
    pub reduction_pct: f64,
    pub reference: FossilReference,
    /// 총량 미포함 생물기원 CO₂ [g]
    pub biogenic_co2_g: f64,
    pub notes: Vec<ResultNote>,
}

impl CalculationResult {
    pub fn phase(&self, id: PhaseId) -> Option<&PhaseResult> {
        self.phases.iter().find(|p| p.phase == id)
    }
}

/// 이미 계산된 값들을 묶기만 한다. 재계산이나 I/O는 하지 않는다.
pub fn assemble(
    biomass: BiomassProfile,
    factor_version: String,
    aggregate: Aggregate,
    reference: FossilReference,
    neea: f64,
    reduction_pct: f64,
) -> CalculationResult {
    CalculationResult {
        biomass,
        factor_version,
        phases: aggregate.phases,
        total_emissions_g: aggregate.total_emissions_g,
        total_energy_mj: aggregate.total_energy_mj,
        carbon_intensity: aggregate.carbon_intensity,
        neea,
        reduction_pct,
        reference,
        biogenic_co2_g: aggregate.biogenic_co2_g,
        notes: aggregate.notes,
    }
}
