//! 전체 계산 파이프라인 테스트.
mod common;

use biocalc::biomass::{BiomassCatalog, BiomassCategory, BiomassProfile};
use biocalc::factors::{self, FactorCategory, FactorRegistry, FactorUnit};
use biocalc::phases::{PhaseId, TransportModal};
use biocalc::result::ResultNote;
use biocalc::{calculate, Engine, EngineError};
use common::{assert_close, catalog, full_request, idle_request, reference, test_table, TEST_VERSION};

#[test]
fn eucalyptus_fertilizer_example() {
    let mut request = idle_request("eucalipto");
    request.agricultural.fertilizer_kg = 50.0;

    let result = calculate(&request, &test_table(), &catalog(), &reference()).expect("calc");

    let agri = result.phase(PhaseId::Agricultural).expect("agricultural");
    assert_close("agricultural", agri.emissions_g, 75_000.0, 1e-9);
    assert_close("total", result.total_emissions_g, 75_000.0, 1e-9);
    assert_close("energy", result.total_energy_mj, 18_200.0, 1e-9);
    assert_close("ci", result.carbon_intensity, 75_000.0 / 18_200.0, 1e-9);
    assert!((result.carbon_intensity - 4.12).abs() < 0.01);
    assert_close("agri share", agri.share_pct, 100.0, 1e-9);
}

#[test]
fn phases_are_ordered_and_named() {
    let result = calculate(&full_request("pinus"), &test_table(), &catalog(), &reference())
        .expect("calc");
    let names: Vec<&str> = result.phases.iter().map(|p| p.phase.name()).collect();
    assert_eq!(names, ["agrícola", "industrial", "distribuição", "uso"]);
}

#[test]
fn intensity_and_shares_are_consistent() {
    for biomass in ["amendoim", "pinus", "eucalipto"] {
        let request = full_request(biomass);
        let result = calculate(&request, &test_table(), &catalog(), &reference()).expect("calc");
        let pci = catalog().find(biomass).expect("preset").pci_mj_per_kg;

        let expected_ci = result.total_emissions_g / (request.agricultural.biomass_kg * pci);
        assert_close("ci", result.carbon_intensity, expected_ci, 1e-9);

        let shares: f64 = result.phases.iter().map(|p| p.share_pct).sum();
        assert_close("shares", shares, 100.0, 0.01);

        let phase_sum: f64 = result.phases.iter().map(|p| p.emissions_g).sum();
        assert_close("total", result.total_emissions_g, phase_sum, 1e-6);
        assert!(result.notes.is_empty());
    }
}

#[test]
fn full_scenario_totals() {
    let result = calculate(&full_request("pinus"), &test_table(), &catalog(), &reference())
        .expect("calc");
    // 농업 253 100 + 산업 187 501.8 + 유통 12 400 + 사용 0
    assert_close("total", result.total_emissions_g, 453_001.8, 1e-6);
    assert_close("energy", result.total_energy_mj, 18_500.0, 1e-9);
    assert_close("biogenic", result.biogenic_co2_g, 1_840_000.0, 1e-9);
    assert!(result.carbon_intensity < 85.0);
    assert!(result.neea > 0.0);
}

#[test]
fn neea_is_reference_minus_intensity_without_clamping() {
    let result = calculate(&full_request("eucalipto"), &test_table(), &catalog(), &reference())
        .expect("calc");
    assert_eq!(result.neea, 85.0 - result.carbon_intensity);
    assert_close("reduction", result.reduction_pct, result.neea / 85.0 * 100.0, 1e-9);

    // 기준보다 더러운 경우 NEEA는 음수로 남는다
    let mut dirty = full_request("eucalipto");
    dirty.agricultural.fertilizer_kg = 5_000.0;
    let result = calculate(&dirty, &test_table(), &catalog(), &reference()).expect("calc");
    assert!(result.carbon_intensity > 85.0);
    assert!(result.neea < 0.0);
    assert_eq!(result.neea, 85.0 - result.carbon_intensity);
}

#[test]
fn zero_activity_yields_zero_shares_and_note() {
    let result = calculate(&idle_request("pinus"), &test_table(), &catalog(), &reference())
        .expect("calc");
    assert_eq!(result.total_emissions_g, 0.0);
    assert_eq!(result.carbon_intensity, 0.0);
    for p in &result.phases {
        assert_eq!(p.share_pct, 0.0);
        assert!(!p.share_pct.is_nan());
    }
    assert_eq!(result.notes, vec![ResultNote::ZeroTotalEmissions]);
    assert_eq!(result.neea, 85.0);
}

#[test]
fn zero_biomass_is_zero_energy_error() {
    let mut request = idle_request("pinus");
    request.agricultural.biomass_kg = 0.0;
    request.agricultural.fertilizer_kg = 10.0;
    let err = calculate(&request, &test_table(), &catalog(), &reference()).unwrap_err();
    assert_eq!(err, EngineError::ZeroEnergy { energy_mj: 0.0 });
}

#[test]
fn overflowing_emissions_yield_no_result() {
    let mut request = full_request("pinus");
    request.agricultural.fertilizer_kg = 1e306;
    let err = calculate(&request, &test_table(), &catalog(), &reference()).unwrap_err();
    match err {
        EngineError::InvalidInput { field, value } => {
            assert_eq!(field, "total_emissions_g");
            assert!(value.is_infinite());
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn overflowing_biogenic_co2_yields_no_result() {
    let mut request = idle_request("pinus");
    request.agricultural.biomass_kg = 1e306;
    let err = calculate(&request, &test_table(), &catalog(), &reference()).unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidInput {
            field: "biogenic_co2_g",
            ..
        }
    ));
}

#[test]
fn catalog_rejects_zero_pci() {
    let bad = BiomassProfile {
        id: "serragem".to_string(),
        name: "Serragem".to_string(),
        pci_mj_per_kg: 0.0,
        density_kg_per_m3: 600.0,
        category: BiomassCategory::Forestry,
    };
    assert!(matches!(
        BiomassCatalog::new(vec![bad]),
        Err(EngineError::InvalidInput { field: "pci_mj_per_kg", .. })
    ));
}

#[test]
fn unknown_biomass_is_rejected() {
    let err = calculate(&idle_request("bambu"), &test_table(), &catalog(), &reference())
        .unwrap_err();
    assert_eq!(err, EngineError::UnknownBiomass("bambu".to_string()));
}

#[test]
fn negative_input_in_any_phase_yields_no_result() {
    let mut request = full_request("pinus");
    request.distribution.distance_km = -10.0;
    let err = calculate(&request, &test_table(), &catalog(), &reference()).unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidInput {
            field: "distance_km",
            value: -10.0
        }
    );
}

#[test]
fn identical_inputs_are_reproducible() {
    let request = full_request("amendoim");
    let a = calculate(&request, &test_table(), &catalog(), &reference()).expect("a");
    let b = calculate(&request, &test_table(), &catalog(), &reference()).expect("b");
    assert_eq!(a, b);
    assert_eq!(
        toml::to_string(&a).expect("serialize a"),
        toml::to_string(&b).expect("serialize b")
    );
    assert_eq!(a.factor_version, TEST_VERSION);
}

#[test]
fn registry_lookup_is_version_checked() {
    let registry = FactorRegistry::new(test_table());
    assert_eq!(registry.current_version(), TEST_VERSION);
    assert_eq!(
        registry.lookup(FactorCategory::Fertilizer, FactorUnit::Kilogram, TEST_VERSION),
        Ok(1500.0)
    );
    assert!(matches!(
        registry.lookup(FactorCategory::Fertilizer, FactorUnit::Kilogram, "outra"),
        Err(EngineError::MissingFactor { .. })
    ));
}

#[test]
fn engine_rejects_unavailable_version() {
    let registry = FactorRegistry::new(test_table());
    let catalog = catalog();
    let reference = reference();
    let engine = Engine::new(&registry, &catalog, &reference);

    let mut request = full_request("pinus");
    request.factor_version = "2019".to_string();
    assert_eq!(
        engine.calculate(&request).unwrap_err(),
        EngineError::FactorVersionUnavailable {
            requested: "2019".to_string(),
            current: TEST_VERSION.to_string(),
        }
    );
}

#[test]
fn reload_swaps_table_without_touching_held_snapshot() {
    let registry = FactorRegistry::new(test_table());
    let held = registry.snapshot();

    let previous = registry.reload(factors::default_table());
    assert_eq!(previous.version(), TEST_VERSION);
    assert_eq!(held.version(), TEST_VERSION);
    assert_eq!(registry.current_version(), factors::DEFAULT_VERSION);
    assert_eq!(
        held.lookup(FactorCategory::Fertilizer, FactorUnit::Kilogram),
        Ok(1500.0)
    );
}

#[test]
fn concurrent_runs_share_read_only_state() {
    let registry = FactorRegistry::new(test_table());
    let catalog = catalog();
    let reference = reference();
    let engine = Engine::new(&registry, &catalog, &reference);
    let expected = engine.calculate(&full_request("pinus")).expect("baseline");

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                s.spawn(move || {
                    let mut request = full_request("pinus");
                    if i % 2 == 1 {
                        request.distribution.modal = TransportModal::Rail;
                    }
                    engine.calculate(&request).expect("thread calc")
                })
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            let result = h.join().expect("join");
            if i % 2 == 0 {
                assert_eq!(result, expected);
            } else {
                assert!(result.total_emissions_g < expected.total_emissions_g);
            }
        }
    });
}

#[test]
fn default_table_runs_every_preset() {
    let registry = FactorRegistry::new(factors::default_table());
    let catalog = catalog();
    let reference = biocalc::reference::FossilReference::default();
    let engine = Engine::new(&registry, &catalog, &reference);
    for p in catalog.profiles() {
        let mut request = full_request(&p.id);
        request.factor_version = registry.current_version();
        let result = engine.calculate(&request).expect("default table");
        assert!(result.carbon_intensity > 0.0);
        assert!(result.neea > 0.0, "{} neea={}", p.id, result.neea);
    }
}
