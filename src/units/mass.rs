use serde::{Deserialize, Serialize};

/// 질량 단위. 내부 기준은 kg이다.
///
/// 배출량(CO₂e 질량) 표시에도 같은 단위를 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    #[serde(rename = "g", alias = "gram")]
    Gram,
    #[serde(rename = "kg", alias = "kilogram")]
    Kilogram,
    #[serde(rename = "t", alias = "tonne")]
    Tonne,
}

impl MassUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            MassUnit::Gram => "g",
            MassUnit::Kilogram => "kg",
            MassUnit::Tonne => "t",
        }
    }
}

fn to_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Gram => value / 1000.0,
        MassUnit::Kilogram => value,
        MassUnit::Tonne => value * 1000.0,
    }
}

fn from_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Gram => value * 1000.0,
        MassUnit::Kilogram => value,
        MassUnit::Tonne => value / 1000.0,
    }
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    let base = to_kg(value, from);
    from_kg(base, to)
}

/// 운송 계수(gCO₂/tkm) 적용을 위한 kg → t 환산.
pub fn kg_to_tonnes(kg: f64) -> f64 {
    convert_mass(kg, MassUnit::Kilogram, MassUnit::Tonne)
}
