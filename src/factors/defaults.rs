//! 내장 배출계수 세트. 값은 참고용 문헌 평균치이며 IPCC GWP100 기준 CO₂e이다.

use super::table::{FactorCategory, FactorEntry, FactorKey, FactorTable, FactorUnit};
use crate::phases::{CombustionType, TransportModal};

/// 내장 계수표의 버전 태그.
pub const DEFAULT_VERSION: &str = "biocalc-2025.1";

/// 디젤 배출계수 [gCO₂/L]
const DIESEL_G_PER_L: f64 = 2680.0;
/// 디젤 발열량 [MJ/L]
const DIESEL_MJ_PER_L: f64 = 38.0;

struct DefaultFactor {
    category: FactorCategory,
    unit: FactorUnit,
    value: f64,
    source: &'static str,
}

const DEFAULTS: &[DefaultFactor] = &[
    DefaultFactor {
        category: FactorCategory::Electricity,
        unit: FactorUnit::KilowattHour,
        value: 95.0,
        source: "SIN Brasil, média anual (MCTI)",
    },
    DefaultFactor {
        category: FactorCategory::ThermalEnergy,
        unit: FactorUnit::MegaJoule,
        value: DIESEL_G_PER_L / DIESEL_MJ_PER_L,
        source: "diesel 2680 gCO2/L / 38 MJ/L",
    },
    DefaultFactor {
        category: FactorCategory::Water,
        unit: FactorUnit::CubicMeter,
        value: 0.36,
        source: "abastecimento público",
    },
    DefaultFactor {
        category: FactorCategory::Fertilizer,
        unit: FactorUnit::Kilogram,
        value: 6540.0,
        source: "fertilizante nitrogenado, produção + N2O (IPCC 2019)",
    },
    DefaultFactor {
        category: FactorCategory::Pesticide,
        unit: FactorUnit::Kilogram,
        value: 10000.0,
        source: "defensivos, média de princípio ativo",
    },
    DefaultFactor {
        category: FactorCategory::Transport(TransportModal::Road),
        unit: FactorUnit::TonneKilometer,
        value: 62.0,
        source: "caminhão diesel",
    },
    DefaultFactor {
        category: FactorCategory::Transport(TransportModal::Maritime),
        unit: FactorUnit::TonneKilometer,
        value: 8.5,
        source: "navio graneleiro",
    },
    DefaultFactor {
        category: FactorCategory::Transport(TransportModal::Rail),
        unit: FactorUnit::TonneKilometer,
        value: 22.0,
        source: "ferrovia diesel",
    },
    DefaultFactor {
        category: FactorCategory::Combustion(CombustionType::Boiler),
        unit: FactorUnit::Run,
        value: 0.0,
        source: "CO2 biogênico neutro",
    },
    DefaultFactor {
        category: FactorCategory::Combustion(CombustionType::Furnace),
        unit: FactorUnit::Run,
        value: 0.0,
        source: "CO2 biogênico neutro",
    },
    DefaultFactor {
        category: FactorCategory::Combustion(CombustionType::Other),
        unit: FactorUnit::Run,
        value: 0.0,
        source: "CO2 biogênico neutro",
    },
];

/// 내장 계수표를 만든다.
pub fn default_table() -> FactorTable {
    FactorTable::from_entries(
        DEFAULT_VERSION,
        DEFAULTS.iter().map(|d| {
            (
                FactorKey {
                    category: d.category,
                    unit: d.unit,
                },
                FactorEntry {
                    value: d.value,
                    source: Some(d.source.to_string()),
                },
            )
        }),
    )
}
