use serde::{Deserialize, Serialize};

/// 에너지 단위. 내부 기준은 MJ이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    #[serde(rename = "MJ", alias = "megajoule")]
    MegaJoule,
    #[serde(rename = "GJ", alias = "gigajoule")]
    GigaJoule,
    #[serde(rename = "kWh", alias = "kilowatthour")]
    KilowattHour,
}

impl EnergyUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            EnergyUnit::MegaJoule => "MJ",
            EnergyUnit::GigaJoule => "GJ",
            EnergyUnit::KilowattHour => "kWh",
        }
    }
}

fn to_mj(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::MegaJoule => value,
        EnergyUnit::GigaJoule => value * 1000.0,
        EnergyUnit::KilowattHour => value * 3.6,
    }
}

fn from_mj(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::MegaJoule => value,
        EnergyUnit::GigaJoule => value / 1000.0,
        EnergyUnit::KilowattHour => value / 3.6,
    }
}

/// 에너지를 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    let mj = to_mj(value, from);
    from_mj(mj, to)
}
