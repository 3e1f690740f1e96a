//! 통합 테스트 공용 픽스처.
#![allow(dead_code)]

use biocalc::biomass::BiomassCatalog;
use biocalc::engine::{CalculationRequest, DistributionLeg};
use biocalc::factors::{FactorCategory, FactorTable, FactorUnit};
use biocalc::phases::{AgriculturalInput, CombustionType, IndustrialInput, TransportModal};
use biocalc::reference::FossilReference;

pub const TEST_VERSION: &str = "teste-2025.1";

pub fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {tol})"
    );
}

/// 비료 1500 gCO₂/kg 등 손으로 검산하기 쉬운 계수표.
pub fn test_table() -> FactorTable {
    FactorTable::builder(TEST_VERSION)
        .factor(FactorCategory::Fertilizer, FactorUnit::Kilogram, 1500.0, None)
        .and_then(|b| b.factor(FactorCategory::Pesticide, FactorUnit::Kilogram, 10_000.0, None))
        .and_then(|b| {
            b.factor(
                FactorCategory::Transport(TransportModal::Road),
                FactorUnit::TonneKilometer,
                62.0,
                None,
            )
        })
        .and_then(|b| {
            b.factor(
                FactorCategory::Transport(TransportModal::Maritime),
                FactorUnit::TonneKilometer,
                8.5,
                None,
            )
        })
        .and_then(|b| {
            b.factor(
                FactorCategory::Transport(TransportModal::Rail),
                FactorUnit::TonneKilometer,
                22.0,
                None,
            )
        })
        .and_then(|b| b.factor(FactorCategory::Electricity, FactorUnit::KilowattHour, 95.0, None))
        .and_then(|b| b.factor(FactorCategory::ThermalEnergy, FactorUnit::MegaJoule, 70.0, None))
        .and_then(|b| b.factor(FactorCategory::Water, FactorUnit::CubicMeter, 0.36, None))
        .and_then(|b| {
            b.factor(
                FactorCategory::Combustion(CombustionType::Boiler),
                FactorUnit::Run,
                0.0,
                None,
            )
        })
        .and_then(|b| {
            b.factor(
                FactorCategory::Combustion(CombustionType::Furnace),
                FactorUnit::Run,
                0.0,
                None,
            )
        })
        .and_then(|b| {
            b.factor(
                FactorCategory::Combustion(CombustionType::Other),
                FactorUnit::Run,
                250.0,
                None,
            )
        })
        .expect("test factor table")
        .build()
}

pub fn reference() -> FossilReference {
    FossilReference {
        fuel: "óleo combustível".to_string(),
        intensity_g_per_mj: 85.0,
        version: TEST_VERSION.to_string(),
    }
}

pub fn catalog() -> BiomassCatalog {
    BiomassCatalog::presets()
}

/// 바이오매스 1000 kg, 나머지 활동량 0인 요청.
pub fn idle_request(biomass: &str) -> CalculationRequest {
    CalculationRequest {
        biomass_id: biomass.to_string(),
        factor_version: TEST_VERSION.to_string(),
        agricultural: AgriculturalInput {
            biomass_kg: 1000.0,
            ..AgriculturalInput::default()
        },
        industrial: IndustrialInput::default(),
        distribution: DistributionLeg {
            modal: TransportModal::Road,
            distance_km: 0.0,
        },
        combustion: CombustionType::Boiler,
    }
}

/// 모든 단계에 활동량이 있는 요청.
pub fn full_request(biomass: &str) -> CalculationRequest {
    CalculationRequest {
        biomass_id: biomass.to_string(),
        factor_version: TEST_VERSION.to_string(),
        agricultural: AgriculturalInput {
            biomass_kg: 1000.0,
            transport_distance_km: 50.0,
            fertilizer_kg: 100.0,
            pesticide_kg: 10.0,
            luc_kg_co2: None,
        },
        industrial: IndustrialInput {
            electricity_kwh: 500.0,
            thermal_mj: 2000.0,
            water_m3: 5.0,
        },
        distribution: DistributionLeg {
            modal: TransportModal::Road,
            distance_km: 200.0,
        },
        combustion: CombustionType::Boiler,
    }
}
