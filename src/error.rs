use thiserror::Error;

use crate::factors::{FactorCategory, FactorUnit};

/// 계산 엔진에서 발생 가능한 오류.
///
/// 모든 오류는 검출 지점에서 즉시 반환되며 부분 결과는 만들지 않는다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// 음수/비유한 수치 입력 또는 허용되지 않는 값
    #[error("entrada inválida em '{field}': {value}")]
    InvalidInput { field: &'static str, value: f64 },

    /// 요청한 버전의 계수표에 (카테고리, 단위) 쌍이 없음
    #[error("fator ausente: {category} [{unit}] na versão '{version}'")]
    MissingFactor {
        category: FactorCategory,
        unit: FactorUnit,
        version: String,
    },

    /// 레지스트리에 요청한 버전의 계수표가 없음
    #[error("versão de fatores '{requested}' indisponível (atual: '{current}')")]
    FactorVersionUnavailable { requested: String, current: String },

    /// 바이오매스 수량 × PCI 가 0 이하라서 나눌 수 없음
    #[error("energia total da biomassa não positiva: {energy_mj} MJ")]
    ZeroEnergy { energy_mj: f64 },

    /// 알 수 없는 운송 모달
    #[error("modal de transporte inválido: '{0}' (opções: rodoviario, maritimo, ferroviario)")]
    InvalidModal(String),

    /// 알 수 없는 연소 방식
    #[error("tipo de combustão inválido: '{0}' (opções: caldeira, fornalha, outro)")]
    InvalidCombustionType(String),

    /// 프리셋 목록에 없는 바이오매스
    #[error("biomassa '{0}' não encontrada")]
    UnknownBiomass(String),
}

impl EngineError {
    pub(crate) fn invalid(field: &'static str, value: f64) -> Self {
        EngineError::InvalidInput { field, value }
    }
}

/// 음수가 아니고 유한한 값인지 확인한다.
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64, EngineError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(EngineError::invalid(field, value))
    }
}
