use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;
use crate::phases::{CombustionType, TransportModal};

/// 배출계수 카테고리. 각 계산기가 어떤 활동량에 곱할 계수인지 구분한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FactorCategory {
    Electricity,
    ThermalEnergy,
    Water,
    Fertilizer,
    Pesticide,
    Transport(TransportModal),
    Combustion(CombustionType),
}

impl FactorCategory {
    /// 계수 파일에서 쓰는 식별자.
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorCategory::Electricity => "electricity",
            FactorCategory::ThermalEnergy => "thermal_energy",
            FactorCategory::Water => "water",
            FactorCategory::Fertilizer => "fertilizer",
            FactorCategory::Pesticide => "pesticide",
            FactorCategory::Transport(TransportModal::Road) => "transport_road",
            FactorCategory::Transport(TransportModal::Maritime) => "transport_maritime",
            FactorCategory::Transport(TransportModal::Rail) => "transport_rail",
            FactorCategory::Combustion(CombustionType::Boiler) => "combustion_boiler",
            FactorCategory::Combustion(CombustionType::Furnace) => "combustion_furnace",
            FactorCategory::Combustion(CombustionType::Other) => "combustion_other",
        }
    }
}

impl fmt::Display for FactorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FactorCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let c = s.trim().to_lowercase();
        let cat = match c.as_str() {
            "electricity" => FactorCategory::Electricity,
            "thermal_energy" => FactorCategory::ThermalEnergy,
            "water" => FactorCategory::Water,
            "fertilizer" => FactorCategory::Fertilizer,
            "pesticide" => FactorCategory::Pesticide,
            "transport_road" => FactorCategory::Transport(TransportModal::Road),
            "transport_maritime" => FactorCategory::Transport(TransportModal::Maritime),
            "transport_rail" => FactorCategory::Transport(TransportModal::Rail),
            "combustion_boiler" => FactorCategory::Combustion(CombustionType::Boiler),
            "combustion_furnace" => FactorCategory::Combustion(CombustionType::Furnace),
            "combustion_other" => FactorCategory::Combustion(CombustionType::Other),
            _ => return Err(s.to_string()),
        };
        Ok(cat)
    }
}

/// 계수의 분모 단위. 계수 값은 항상 gCO₂e / 단위 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FactorUnit {
    KilowattHour,
    MegaJoule,
    CubicMeter,
    Kilogram,
    Liter,
    TonneKilometer,
    /// 사용 단계처럼 활동량 없이 한 번 더해지는 고정값
    Run,
}

impl FactorUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            FactorUnit::KilowattHour => "kWh",
            FactorUnit::MegaJoule => "MJ",
            FactorUnit::CubicMeter => "m3",
            FactorUnit::Kilogram => "kg",
            FactorUnit::Liter => "L",
            FactorUnit::TonneKilometer => "tkm",
            FactorUnit::Run => "run",
        }
    }
}

impl fmt::Display for FactorUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for FactorUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim() {
            "kWh" | "kwh" => FactorUnit::KilowattHour,
            "MJ" | "mj" => FactorUnit::MegaJoule,
            "m3" | "m³" => FactorUnit::CubicMeter,
            "kg" => FactorUnit::Kilogram,
            "L" | "l" => FactorUnit::Liter,
            "tkm" => FactorUnit::TonneKilometer,
            "run" => FactorUnit::Run,
            _ => return Err(s.to_string()),
        };
        Ok(unit)
    }
}

/// 계수표 키.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FactorKey {
    pub category: FactorCategory,
    pub unit: FactorUnit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FactorEntry {
    /// gCO₂e / unit
    pub value: f64,
    /// 출처(문헌, 데이터베이스 등)
    pub source: Option<String>,
}

/// 버전 태그가 붙은 불변 배출계수 테이블.
///
/// 구성이 끝난 뒤에는 수정 API가 없다. 새 계수가 필요하면 새 테이블을 만든다.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorTable {
    version: String,
    entries: BTreeMap<FactorKey, FactorEntry>,
}

impl FactorTable {
    /// 빈 테이블에서 시작하는 빌더를 반환한다.
    pub fn builder(version: impl Into<String>) -> FactorTableBuilder {
        FactorTableBuilder {
            version: version.into(),
            entries: BTreeMap::new(),
        }
    }

    /// 검증된 상수 목록에서 바로 만든다(내장 기본값 전용).
    pub(crate) fn from_entries(
        version: impl Into<String>,
        entries: impl IntoIterator<Item = (FactorKey, FactorEntry)>,
    ) -> Self {
        Self {
            version: version.into(),
            entries: entries.into_iter().collect(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (카테고리, 단위)에 해당하는 계수를 찾는다. 없으면 0으로 대체하지 않고 실패한다.
    pub fn lookup(&self, category: FactorCategory, unit: FactorUnit) -> Result<f64, EngineError> {
        self.entries
            .get(&FactorKey { category, unit })
            .map(|e| e.value)
            .ok_or_else(|| EngineError::MissingFactor {
                category,
                unit,
                version: self.version.clone(),
            })
    }

    pub fn entry(&self, category: FactorCategory, unit: FactorUnit) -> Option<&FactorEntry> {
        self.entries.get(&FactorKey { category, unit })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FactorKey, &FactorEntry)> {
        self.entries.iter()
    }
}

/// [`FactorTable`] 구성용 빌더.
#[derive(Debug)]
pub struct FactorTableBuilder {
    version: String,
    entries: BTreeMap<FactorKey, FactorEntry>,
}

impl FactorTableBuilder {
    /// 계수를 추가한다. 같은 키가 있으면 덮어쓴다. 유한하지 않은 값은 거부한다.
    pub fn factor(
        mut self,
        category: FactorCategory,
        unit: FactorUnit,
        value: f64,
        source: Option<&str>,
    ) -> Result<Self, EngineError> {
        if !value.is_finite() {
            return Err(EngineError::invalid("factor", value));
        }
        self.entries.insert(
            FactorKey { category, unit },
            FactorEntry {
                value,
                source: source.map(str::to_string),
            },
        );
        Ok(self)
    }

    pub fn build(self) -> FactorTable {
        FactorTable {
            version: self.version,
            entries: self.entries,
        }
    }
}
