//! 입력 타당성 점검. 범위를 크게 벗어난 값에 경고만 남기고 계산은 막지 않는다.

use crate::engine::CalculationRequest;

/// 상한을 넘은 입력 항목.
#[derive(Debug, Clone, PartialEq)]
pub struct Advisory {
    pub field: &'static str,
    pub value: f64,
    pub limit: f64,
}

struct SoftLimit {
    field: &'static str,
    limit: f64,
    value: fn(&CalculationRequest) -> f64,
}

const LIMITS: &[SoftLimit] = &[
    SoftLimit {
        field: "biomass_kg",
        limit: 1_000_000.0,
        value: |r| r.agricultural.biomass_kg,
    },
    SoftLimit {
        field: "transport_distance_km",
        limit: 1_000.0,
        value: |r| r.agricultural.transport_distance_km,
    },
    SoftLimit {
        field: "fertilizer_kg",
        limit: 100_000.0,
        value: |r| r.agricultural.fertilizer_kg,
    },
    SoftLimit {
        field: "pesticide_kg",
        limit: 10_000.0,
        value: |r| r.agricultural.pesticide_kg,
    },
    SoftLimit {
        field: "electricity_kwh",
        limit: 1_000_000.0,
        value: |r| r.industrial.electricity_kwh,
    },
    SoftLimit {
        field: "thermal_mj",
        limit: 10_000_000.0,
        value: |r| r.industrial.thermal_mj,
    },
    SoftLimit {
        field: "water_m3",
        limit: 100_000.0,
        value: |r| r.industrial.water_m3,
    },
    SoftLimit {
        field: "distance_km",
        limit: 50_000.0,
        value: |r| r.distribution.distance_km,
    },
];

/// 상한을 넘은 항목 목록을 반환한다.
pub fn advisories(request: &CalculationRequest) -> Vec<Advisory> {
    LIMITS
        .iter()
        .filter_map(|l| {
            let value = (l.value)(request);
            (value > l.limit).then_some(Advisory {
                field: l.field,
                value,
                limit: l.limit,
            })
        })
        .collect()
}
