use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::reference::FossilReference;
use crate::units::{EnergyUnit, MassUnit};

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// auto / pt / en
    pub language: String,
    /// 언어팩 디렉터리(없으면 내장 문자열)
    pub language_pack_dir: Option<String>,
    /// 계수표 TOML 경로(없으면 내장 계수표)
    pub factors_path: Option<String>,
    /// 화석 기준연료
    pub reference: FossilReference,
    /// 요약 출력 시 배출량 단위. 엔진 값은 항상 gCO₂e이다.
    pub display_emission_unit: MassUnit,
    /// 요약 출력 시 에너지 단위
    pub display_energy_unit: EnergyUnit,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            factors_path: None,
            reference: FossilReference::default(),
            display_emission_unit: MassUnit::Kilogram,
            display_energy_unit: EnergyUnit::MegaJoule,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "erro de entrada/saída: {e}"),
            ConfigError::Serde(e) => write!(f, "erro ao ler configuração: {e}"),
            ConfigError::Serialize(e) => write!(f, "erro ao gravar configuração: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

const CONFIG_FILE: &str = "config.toml";

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_create(Path::new(CONFIG_FILE))
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본값을 저장한 뒤 반환한다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self, Path::new(CONFIG_FILE))
    }
}
