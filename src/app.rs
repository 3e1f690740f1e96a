use std::path::Path;

use crate::biomass::BiomassCatalog;
use crate::config::Config;
use crate::engine::Engine;
use crate::error::EngineError;
use crate::export;
use crate::factors::{self, FactorRegistry, FactorTable};
use crate::i18n::{keys, Translator};
use crate::loader::{self, LoadError};
use crate::ui_cli::{self, Cli, Command};
use crate::validation;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 시나리오/계수 파일 오류
    Load(LoadError),
    /// 계산 오류
    Engine(EngineError),
    /// 결과 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "erro de entrada/saída: {e}"),
            AppError::Config(e) => write!(f, "erro de configuração: {e}"),
            AppError::Load(e) => write!(f, "erro ao carregar arquivo: {e}"),
            AppError::Engine(e) => write!(f, "erro de cálculo: {e}"),
            AppError::Serialize(e) => write!(f, "erro de serialização: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<LoadError> for AppError {
    fn from(value: LoadError) -> Self {
        AppError::Load(value)
    }
}

impl From<EngineError> for AppError {
    fn from(value: EngineError) -> Self {
        AppError::Engine(value)
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(value: toml::ser::Error) -> Self {
        AppError::Serialize(value)
    }
}

/// CLI 플래그 → config.toml → 내장 계수표 순으로 계수표를 고른다.
fn active_factor_table(cli: &Cli, config: &Config) -> Result<FactorTable, AppError> {
    let path = cli
        .factors
        .as_deref()
        .or(config.factors_path.as_deref().map(Path::new));
    match path {
        Some(p) => Ok(loader::load_factor_table(p)?),
        None => Ok(factors::default_table()),
    }
}

/// 하위 명령을 실행한다.
pub fn run(cli: &Cli, config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    match &cli.command {
        Command::Calc {
            scenario,
            csv,
            detailed,
            toml,
        } => {
            let registry = FactorRegistry::new(active_factor_table(cli, config)?);
            let catalog = BiomassCatalog::presets();
            let engine = Engine::new(&registry, &catalog, &config.reference);

            let request = loader::load_scenario(scenario)?
                .into_request(&registry.current_version())?;
            ui_cli::print_advisories(tr, &validation::advisories(&request));

            let result = engine.calculate(&request)?;
            if *toml {
                println!("{}", ::toml::to_string_pretty(&result)?);
            } else {
                ui_cli::print_result(tr, config, &result);
            }

            if let Some(path) = csv {
                let content = if *detailed {
                    export::to_csv_detailed(&result)
                } else {
                    export::to_csv(&result)
                };
                export::write_csv(path, &content)?;
                println!("{} {}", tr.t(keys::CSV_WRITTEN), path.display());
            }
        }
        Command::Biomass => ui_cli::print_biomass(tr, &BiomassCatalog::presets()),
        Command::Factors => ui_cli::print_factors(tr, &active_factor_table(cli, config)?),
        Command::Settings {
            language,
            factors_path,
            reference,
        } => {
            if let Some(lang) = language {
                config.language = lang.clone();
            }
            if let Some(path) = factors_path {
                config.factors_path = Some(path.clone());
            }
            if let Some(ci) = reference {
                config.reference.intensity_g_per_mj = *ci;
            }
            config.save()?;
            println!("{}", tr.t(keys::SETTINGS_SAVED));
        }
    }
    Ok(())
}
