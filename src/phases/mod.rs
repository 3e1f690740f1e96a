//! 생애주기 4단계(농업, 산업, 유통, 사용)별 배출량 계산기 모음.
//!
//! 각 계산기는 자기 단계 입력과 계수표만 받는 순수 함수이며,
//! 계수 조회 전에 입력을 먼저 검증한다.

pub mod agricultural;
pub mod distribution;
pub mod industrial;
pub mod usage;

use serde::Serialize;

use crate::error::EngineError;
use crate::factors::FactorTable;

pub use agricultural::AgriculturalInput;
pub use distribution::{DistributionInput, TransportModal};
pub use industrial::IndustrialInput;
pub use usage::{CombustionType, UseInput, BIOGENIC_CO2_G_PER_KG};

/// 생애주기 단계. 선언 순서가 결과/CSV 출력 순서다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PhaseId {
    Agricultural,
    Industrial,
    Distribution,
    Use,
}

impl PhaseId {
    pub const ALL: [PhaseId; 4] = [
        PhaseId::Agricultural,
        PhaseId::Industrial,
        PhaseId::Distribution,
        PhaseId::Use,
    ];

    /// 내보내기에서 쓰는 고정 단계명. 버전이 바뀌어도 변경하지 않는다.
    pub fn name(&self) -> &'static str {
        match self {
            PhaseId::Agricultural => "agrícola",
            PhaseId::Industrial => "industrial",
            PhaseId::Distribution => "distribuição",
            PhaseId::Use => "uso",
        }
    }
}

/// 단계 배출량의 세부 항목.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    pub name: &'static str,
    /// gCO₂e
    pub emissions_g: f64,
}

impl Component {
    fn new(name: &'static str, emissions_g: f64) -> Self {
        Self { name, emissions_g }
    }
}

/// 한 단계 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseEmission {
    pub phase: PhaseId,
    /// gCO₂e
    pub emissions_g: f64,
    /// 합계가 `emissions_g`와 같은 세부 항목
    pub components: Vec<Component>,
    /// 총량에 포함하지 않고 따로 보고하는 생물기원 CO₂ [g]
    pub biogenic_co2_g: f64,
}

impl PhaseEmission {
    fn from_components(phase: PhaseId, components: Vec<Component>) -> Self {
        let emissions_g = components.iter().map(|c| c.emissions_g).sum();
        Self {
            phase,
            emissions_g,
            components,
            biogenic_co2_g: 0.0,
        }
    }
}

/// 단계별 입력. 각 변형은 자기 단계에 필요한 값만 가진다.
#[derive(Debug, Clone, PartialEq)]
pub enum PhaseInput {
    Agricultural(AgriculturalInput),
    Industrial(IndustrialInput),
    Distribution(DistributionInput),
    Use(UseInput),
}

impl PhaseInput {
    pub fn phase(&self) -> PhaseId {
        match self {
            PhaseInput::Agricultural(_) => PhaseId::Agricultural,
            PhaseInput::Industrial(_) => PhaseId::Industrial,
            PhaseInput::Distribution(_) => PhaseId::Distribution,
            PhaseInput::Use(_) => PhaseId::Use,
        }
    }

    /// 계수 조회 없이 수치 입력만 검사한다.
    pub fn validate(&self) -> Result<(), EngineError> {
        match self {
            PhaseInput::Agricultural(i) => i.validate(),
            PhaseInput::Industrial(i) => i.validate(),
            PhaseInput::Distribution(i) => i.validate(),
            PhaseInput::Use(i) => i.validate(),
        }
    }
}

/// 입력 변형에 맞는 계산기로 보낸다.
pub fn calculate(input: &PhaseInput, factors: &FactorTable) -> Result<PhaseEmission, EngineError> {
    match input {
        PhaseInput::Agricultural(i) => agricultural::calculate(i, factors),
        PhaseInput::Industrial(i) => industrial::calculate(i, factors),
        PhaseInput::Distribution(i) => distribution::calculate(i, factors),
        PhaseInput::Use(i) => usage::calculate(i, factors),
    }
}
