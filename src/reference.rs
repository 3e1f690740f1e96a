//! 화석 기준연료와의 비교(NEEA).

use serde::{Deserialize, Serialize};

use crate::factors::DEFAULT_VERSION;

/// 외부에서 주입하는 화석 기준연료 탄소집약도. 실행 중에는 변경하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FossilReference {
    pub fuel: String,
    /// gCO₂e/MJ
    pub intensity_g_per_mj: f64,
    pub version: String,
}

impl Default for FossilReference {
    fn default() -> Self {
        Self {
            fuel: "combustível fóssil de referência".to_string(),
            intensity_g_per_mj: 85.0,
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

/// NEEA = CI_fóssil − CI_biocombustível. 양수면 바이오연료가 더 깨끗하다. 클램프하지 않는다.
pub fn neea(ci_biofuel: f64, ci_fossil: f64) -> f64 {
    ci_fossil - ci_biofuel
}

/// 화석 대비 감축률 [%]. 기준값이 0 이하면 0.
pub fn reduction_pct(neea: f64, ci_fossil: f64) -> f64 {
    if ci_fossil > 0.0 {
        neea / ci_fossil * 100.0
    } else {
        0.0
    }
}
