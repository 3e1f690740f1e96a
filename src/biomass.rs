//! 바이오매스 프리셋(PCI, 밀도, 분류)과 조회 기능.
//! 프리셋 값은 참고용이며 실제 적용 시 분석 성적서 값으로 교체해야 한다.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// 바이오매스 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiomassCategory {
    /// 농업 잔재(껍질, 짚 등)
    AgriculturalResidue,
    /// 조림 목재
    Forestry,
}

/// 한 번의 계산에서 선택되는 바이오매스 물성.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiomassProfile {
    pub id: String,
    pub name: String,
    /// 저위발열량 PCI [MJ/kg]
    pub pci_mj_per_kg: f64,
    /// 펠릿/브리켓 겉보기 밀도 [kg/m³]
    pub density_kg_per_m3: f64,
    pub category: BiomassCategory,
}

impl BiomassProfile {
    /// PCI와 밀도가 양수인지 확인한다.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.pci_mj_per_kg.is_finite() && self.pci_mj_per_kg > 0.0) {
            return Err(EngineError::invalid("pci_mj_per_kg", self.pci_mj_per_kg));
        }
        if !(self.density_kg_per_m3.is_finite() && self.density_kg_per_m3 > 0.0) {
            return Err(EngineError::invalid(
                "density_kg_per_m3",
                self.density_kg_per_m3,
            ));
        }
        Ok(())
    }
}

/// 읽기 전용 바이오매스 목록. 시작 시 한 번 구성하고 이후 변경하지 않는다.
#[derive(Debug, Clone)]
pub struct BiomassCatalog {
    profiles: Vec<BiomassProfile>,
}

impl BiomassCatalog {
    /// 프로파일 목록으로 카탈로그를 만든다. 물성이 잘못된 항목이 있으면 실패한다.
    pub fn new(profiles: Vec<BiomassProfile>) -> Result<Self, EngineError> {
        for p in &profiles {
            p.validate()?;
        }
        Ok(Self { profiles })
    }

    /// 내장 프리셋(amendoim, pinus, eucalipto)으로 구성한다.
    pub fn presets() -> Self {
        let profiles = PRESETS
            .iter()
            .map(|p| BiomassProfile {
                id: p.id.to_string(),
                name: p.name.to_string(),
                pci_mj_per_kg: p.pci_mj_per_kg,
                density_kg_per_m3: p.density_kg_per_m3,
                category: p.category,
            })
            .collect();
        Self { profiles }
    }

    pub fn profiles(&self) -> &[BiomassProfile] {
        &self.profiles
    }

    /// id 또는 이름으로 찾는다(대소문자 무시).
    pub fn find(&self, id: &str) -> Result<&BiomassProfile, EngineError> {
        let key = id.trim();
        self.profiles
            .iter()
            .find(|p| p.id.eq_ignore_ascii_case(key) || p.name.eq_ignore_ascii_case(key))
            .ok_or_else(|| EngineError::UnknownBiomass(key.to_string()))
    }
}

struct PresetData {
    id: &'static str,
    name: &'static str,
    pci_mj_per_kg: f64,
    density_kg_per_m3: f64,
    category: BiomassCategory,
}

const PRESETS: &[PresetData] = &[
    PresetData {
        id: "amendoim",
        name: "Casca de amendoim",
        pci_mj_per_kg: 15.9,
        density_kg_per_m3: 620.0,
        category: BiomassCategory::AgriculturalResidue,
    },
    PresetData {
        id: "pinus",
        name: "Pinus",
        pci_mj_per_kg: 18.5,
        density_kg_per_m3: 650.0,
        category: BiomassCategory::Forestry,
    },
    PresetData {
        id: "eucalipto",
        name: "Eucalipto",
        pci_mj_per_kg: 18.2,
        density_kg_per_m3: 700.0,
        category: BiomassCategory::Forestry,
    },
];
