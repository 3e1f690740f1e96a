//! 시나리오/계수표 TOML 파일을 엔진 입력 구조로 변환한다.
//!
//! 엔진은 파일을 읽지 않는다. 파일 읽기와 문자열 → 열거형 변환은 여기서 끝낸다.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::engine::{CalculationRequest, DistributionLeg};
use crate::error::EngineError;
use crate::factors::{FactorCategory, FactorTable, FactorUnit};
use crate::phases::{AgriculturalInput, IndustrialInput};

/// 파일 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum LoadError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 파싱 오류
    Parse(toml::de::Error),
    /// 계수 파일의 알 수 없는 카테고리/단위
    UnknownFactorKey(String),
    /// 엔진 입력 검증 오류
    Engine(EngineError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "erro de leitura: {e}"),
            LoadError::Parse(e) => write!(f, "erro de sintaxe TOML: {e}"),
            LoadError::UnknownFactorKey(k) => write!(f, "chave de fator desconhecida: {k}"),
            LoadError::Engine(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(value: std::io::Error) -> Self {
        LoadError::Io(value)
    }
}

impl From<toml::de::Error> for LoadError {
    fn from(value: toml::de::Error) -> Self {
        LoadError::Parse(value)
    }
}

impl From<EngineError> for LoadError {
    fn from(value: EngineError) -> Self {
        LoadError::Engine(value)
    }
}

/// 시나리오 파일 형식. 생략한 수치는 0, 모달/연소 방식은 rodoviario/caldeira가 기본이다.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub biomass: String,
    /// 생략하면 현재 레지스트리 버전을 사용한다
    #[serde(default)]
    pub factor_version: Option<String>,
    #[serde(default)]
    pub agricultural: AgriculturalSection,
    #[serde(default)]
    pub industrial: IndustrialSection,
    #[serde(default)]
    pub distribution: DistributionSection,
    #[serde(default)]
    pub usage: UsageSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AgriculturalSection {
    pub biomass_kg: f64,
    pub transport_distance_km: f64,
    pub fertilizer_kg: f64,
    pub pesticide_kg: f64,
    pub luc_kg_co2: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IndustrialSection {
    pub electricity_kwh: f64,
    pub thermal_mj: f64,
    pub water_m3: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DistributionSection {
    pub modal: String,
    pub distance_km: f64,
}

impl Default for DistributionSection {
    fn default() -> Self {
        Self {
            modal: "rodoviario".to_string(),
            distance_km: 0.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UsageSection {
    pub combustion: String,
}

impl Default for UsageSection {
    fn default() -> Self {
        Self {
            combustion: "caldeira".to_string(),
        }
    }
}

impl Scenario {
    /// 엔진 요청으로 변환한다. 모달/연소 방식 문자열은 여기서 검증된다.
    pub fn into_request(self, current_version: &str) -> Result<CalculationRequest, EngineError> {
        let modal = self.distribution.modal.parse()?;
        let combustion = self.usage.combustion.parse()?;
        Ok(CalculationRequest {
            biomass_id: self.biomass,
            factor_version: self
                .factor_version
                .unwrap_or_else(|| current_version.to_string()),
            agricultural: AgriculturalInput {
                biomass_kg: self.agricultural.biomass_kg,
                transport_distance_km: self.agricultural.transport_distance_km,
                fertilizer_kg: self.agricultural.fertilizer_kg,
                pesticide_kg: self.agricultural.pesticide_kg,
                luc_kg_co2: self.agricultural.luc_kg_co2,
            },
            industrial: IndustrialInput {
                electricity_kwh: self.industrial.electricity_kwh,
                thermal_mj: self.industrial.thermal_mj,
                water_m3: self.industrial.water_m3,
            },
            distribution: DistributionLeg {
                modal,
                distance_km: self.distribution.distance_km,
            },
            combustion,
        })
    }
}

pub fn parse_scenario(src: &str) -> Result<Scenario, LoadError> {
    Ok(toml::from_str(src)?)
}

pub fn load_scenario(path: &Path) -> Result<Scenario, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_scenario(&content)
}

#[derive(Debug, Deserialize)]
struct FactorFile {
    version: String,
    #[serde(rename = "factor", default)]
    factors: Vec<FactorRow>,
}

#[derive(Debug, Deserialize)]
struct FactorRow {
    category: String,
    unit: String,
    value: f64,
    source: Option<String>,
}

/// 계수 파일을 파싱한다.
///
/// ```toml
/// version = "meu-inventario-2025"
/// [[factor]]
/// category = "electricity"
/// unit = "kWh"
/// value = 95.0
/// source = "SIN"
/// ```
pub fn parse_factor_table(src: &str) -> Result<FactorTable, LoadError> {
    let file: FactorFile = toml::from_str(src)?;
    let mut builder = FactorTable::builder(file.version);
    for row in file.factors {
        let category: FactorCategory = row.category.parse().map_err(LoadError::UnknownFactorKey)?;
        let unit: FactorUnit = row.unit.parse().map_err(LoadError::UnknownFactorKey)?;
        builder = builder.factor(category, unit, row.value, row.source.as_deref())?;
    }
    Ok(builder.build())
}

pub fn load_factor_table(path: &Path) -> Result<FactorTable, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_factor_table(&content)
}
