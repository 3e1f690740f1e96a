//! 단계별 계산기 회귀 테스트.
mod common;

use biocalc::factors::{FactorCategory, FactorTable, FactorUnit};
use biocalc::phases::{
    self, agricultural, distribution, industrial, usage, AgriculturalInput, CombustionType,
    DistributionInput, IndustrialInput, PhaseId, PhaseInput, TransportModal, UseInput,
};
use biocalc::EngineError;
use common::{assert_close, test_table};

#[test]
fn agricultural_sums_inputs_and_road_transport() {
    let input = AgriculturalInput {
        biomass_kg: 1000.0,
        transport_distance_km: 50.0,
        fertilizer_kg: 100.0,
        pesticide_kg: 10.0,
        luc_kg_co2: None,
    };
    let e = agricultural::calculate(&input, &test_table()).expect("agricultural");
    assert_eq!(e.phase, PhaseId::Agricultural);
    // 150 000 + 100 000 + 50 km × 1 t × 62
    assert_close("agricultural", e.emissions_g, 253_100.0, 1e-9);
    let parts: f64 = e.components.iter().map(|c| c.emissions_g).sum();
    assert_close("components", parts, e.emissions_g, 1e-9);
}

#[test]
fn agricultural_luc_is_converted_from_kg() {
    let base = AgriculturalInput {
        biomass_kg: 1000.0,
        ..AgriculturalInput::default()
    };
    let with_luc = AgriculturalInput {
        luc_kg_co2: Some(500.0),
        ..base
    };
    let table = test_table();
    let a = agricultural::calculate(&base, &table).expect("no luc");
    let b = agricultural::calculate(&with_luc, &table).expect("luc");
    assert_close("luc delta", b.emissions_g - a.emissions_g, 500_000.0, 1e-9);

    let zero_luc = AgriculturalInput {
        luc_kg_co2: Some(0.0),
        ..base
    };
    let c = agricultural::calculate(&zero_luc, &table).expect("zero luc");
    assert_eq!(a.emissions_g, c.emissions_g);
}

#[test]
fn fertilizer_only_matches_hand_calculation() {
    let input = AgriculturalInput {
        biomass_kg: 1000.0,
        fertilizer_kg: 50.0,
        ..AgriculturalInput::default()
    };
    let e = agricultural::calculate(&input, &test_table()).expect("agricultural");
    assert_close("fertilizer", e.emissions_g, 75_000.0, 1e-9);
}

#[test]
fn industrial_electricity_thermal_water() {
    let input = IndustrialInput {
        electricity_kwh: 500.0,
        thermal_mj: 2000.0,
        water_m3: 5.0,
    };
    let e = industrial::calculate(&input, &test_table()).expect("industrial");
    assert_close("industrial", e.emissions_g, 47_500.0 + 140_000.0 + 1.8, 1e-9);
    assert_eq!(e.components.len(), 3);
}

#[test]
fn distribution_uses_modal_factor() {
    let table = test_table();
    let expected = [
        (TransportModal::Road, 12_400.0),
        (TransportModal::Maritime, 1_700.0),
        (TransportModal::Rail, 4_400.0),
    ];
    for (modal, grams) in expected {
        let input = DistributionInput {
            modal,
            distance_km: 200.0,
            cargo_kg: 1000.0,
        };
        let e = distribution::calculate(&input, &table).expect("distribution");
        assert_close(modal.as_str(), e.emissions_g, grams, 1e-9);
    }
}

#[test]
fn modal_parsing_accepts_portuguese_and_english() {
    assert_eq!("rodoviário".parse::<TransportModal>(), Ok(TransportModal::Road));
    assert_eq!("Maritimo".parse::<TransportModal>(), Ok(TransportModal::Maritime));
    assert_eq!(" rail ".parse::<TransportModal>(), Ok(TransportModal::Rail));
    assert_eq!(
        "teleport".parse::<TransportModal>(),
        Err(EngineError::InvalidModal("teleport".to_string()))
    );
}

#[test]
fn use_phase_adds_combustion_factor_and_reports_biogenic() {
    let table = test_table();
    let boiler = usage::calculate(
        &UseInput {
            combustion: CombustionType::Boiler,
            biomass_kg: 1000.0,
        },
        &table,
    )
    .expect("boiler");
    assert_eq!(boiler.emissions_g, 0.0);
    assert_close("biogenic", boiler.biogenic_co2_g, 1_840_000.0, 1e-9);

    let other = usage::calculate(
        &UseInput {
            combustion: CombustionType::Other,
            biomass_kg: 1000.0,
        },
        &table,
    )
    .expect("other");
    assert_eq!(other.emissions_g, 250.0);
}

#[test]
fn combustion_type_parsing_rejects_unknown() {
    assert_eq!("caldeira".parse::<CombustionType>(), Ok(CombustionType::Boiler));
    assert_eq!("FURNACE".parse::<CombustionType>(), Ok(CombustionType::Furnace));
    assert!(matches!(
        "forno solar".parse::<CombustionType>(),
        Err(EngineError::InvalidCombustionType(_))
    ));
}

#[test]
fn every_modal_and_combustion_type_parses_from_its_own_name() {
    for modal in TransportModal::ALL {
        assert_eq!(modal.as_str().parse::<TransportModal>(), Ok(modal));
    }
    for combustion in CombustionType::ALL {
        assert_eq!(combustion.to_string().parse::<CombustionType>(), Ok(combustion));
    }
}

#[test]
fn negative_input_fails_before_factor_lookup() {
    // 빈 계수표: 조회가 먼저 일어났다면 MissingFactor가 나온다
    let empty = FactorTable::builder("vazio").build();
    let input = PhaseInput::Industrial(IndustrialInput {
        electricity_kwh: -1.0,
        ..IndustrialInput::default()
    });
    match phases::calculate(&input, &empty) {
        Err(EngineError::InvalidInput { field, value }) => {
            assert_eq!(field, "electricity_kwh");
            assert_eq!(value, -1.0);
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn non_finite_input_is_invalid() {
    let input = AgriculturalInput {
        biomass_kg: f64::NAN,
        ..AgriculturalInput::default()
    };
    assert!(matches!(
        agricultural::calculate(&input, &test_table()),
        Err(EngineError::InvalidInput { field: "biomass_kg", .. })
    ));
}

#[test]
fn missing_factor_is_an_error_not_zero() {
    let partial = FactorTable::builder("parcial")
        .factor(FactorCategory::Electricity, FactorUnit::KilowattHour, 95.0, None)
        .expect("factor")
        .build();
    let err = industrial::calculate(&IndustrialInput::default(), &partial).unwrap_err();
    assert_eq!(
        err,
        EngineError::MissingFactor {
            category: FactorCategory::ThermalEnergy,
            unit: FactorUnit::MegaJoule,
            version: "parcial".to_string(),
        }
    );
}

#[test]
fn dispatch_matches_input_variant() {
    let table = test_table();
    let inputs = [
        PhaseInput::Agricultural(AgriculturalInput::default()),
        PhaseInput::Industrial(IndustrialInput::default()),
        PhaseInput::Distribution(DistributionInput {
            modal: TransportModal::Rail,
            distance_km: 0.0,
            cargo_kg: 0.0,
        }),
        PhaseInput::Use(UseInput {
            combustion: CombustionType::Furnace,
            biomass_kg: 0.0,
        }),
    ];
    for (input, id) in inputs.iter().zip(PhaseId::ALL) {
        let e = phases::calculate(input, &table).expect("phase");
        assert_eq!(e.phase, id);
        assert_eq!(input.phase(), id);
    }
}
