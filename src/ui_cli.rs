use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::biomass::BiomassCatalog;
use crate::config::Config;
use crate::factors::FactorTable;
use crate::i18n::{keys, Translator};
use crate::result::{CalculationResult, ResultNote};
use crate::units::{convert_energy, convert_mass, EnergyUnit, MassUnit};
use crate::validation::Advisory;

/// 명령행 인자.
#[derive(Debug, Parser)]
#[command(
    name = "biocalc",
    version,
    about = "Intensidade de carbono e NEEA de biocombustíveis sólidos"
)]
pub struct Cli {
    /// auto / pt / en
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    pub lang: String,
    /// Tabela de fatores (TOML). Substitui factors_path do config.toml.
    #[arg(long, global = true)]
    pub factors: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Calcula um cenário descrito em TOML
    Calc {
        scenario: PathBuf,
        /// Exporta o resultado para CSV
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Inclui o detalhamento por componente no CSV
        #[arg(long)]
        detailed: bool,
        /// Imprime o resultado completo em TOML
        #[arg(long)]
        toml: bool,
    },
    /// Lista as biomassas disponíveis
    Biomass,
    /// Mostra a tabela de fatores ativa
    Factors,
    /// Altera e salva o config.toml
    Settings {
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        factors_path: Option<String>,
        /// Intensidade do fóssil de referência [gCO2e/MJ]
        #[arg(long)]
        reference: Option<f64>,
    },
}

/// 계산 결과 요약을 출력한다. 반올림은 표시용이다.
pub fn print_result(tr: &Translator, cfg: &Config, result: &CalculationResult) {
    let mass_unit = cfg.display_emission_unit;
    let emission = |g: f64| convert_mass(g, MassUnit::Gram, mass_unit);

    println!("{}", tr.t(keys::RESULT_HEADING));
    println!("{} {}", tr.t(keys::RESULT_BIOMASS), result.biomass.name);
    println!("{} {}", tr.t(keys::RESULT_PCI), result.biomass.pci_mj_per_kg);
    println!("{} {}", tr.t(keys::RESULT_FACTOR_VERSION), result.factor_version);

    println!("{}", tr.t(keys::RESULT_PHASES_HEADING));
    for p in &result.phases {
        println!(
            "{:15} {:>14.2} {}CO2e ({:5.1}%)",
            tr.phase(p.phase),
            emission(p.emissions_g),
            mass_unit.symbol(),
            p.share_pct
        );
    }
    println!();
    println!(
        "{} {:.2} {}CO2e",
        tr.t(keys::RESULT_TOTAL_EMISSIONS),
        emission(result.total_emissions_g),
        mass_unit.symbol()
    );
    println!(
        "{} {:.2} {}",
        tr.t(keys::RESULT_TOTAL_ENERGY),
        convert_energy(
            result.total_energy_mj,
            EnergyUnit::MegaJoule,
            cfg.display_energy_unit
        ),
        cfg.display_energy_unit.symbol()
    );
    println!(
        "{} {:.2}",
        tr.t(keys::RESULT_CARBON_INTENSITY),
        result.carbon_intensity
    );
    println!(
        "{} {:.2} ({})",
        tr.t(keys::RESULT_FOSSIL_REFERENCE),
        result.reference.intensity_g_per_mj,
        result.reference.fuel
    );
    println!("{} {:.2}", tr.t(keys::RESULT_NEEA), result.neea);
    println!("{} {:.1}", tr.t(keys::RESULT_REDUCTION), result.reduction_pct);
    println!(
        "{} {:.2} {}CO2",
        tr.t(keys::RESULT_BIOGENIC),
        emission(result.biogenic_co2_g),
        mass_unit.symbol()
    );
    for note in &result.notes {
        match note {
            ResultNote::ZeroTotalEmissions => println!("* {}", tr.t(keys::NOTE_ZERO_TOTAL)),
        }
    }
}

/// 범위 경고는 stderr로 보낸다.
pub fn print_advisories(tr: &Translator, advisories: &[Advisory]) {
    for a in advisories {
        eprintln!(
            "{}: {} = {} ({} {})",
            tr.t(keys::WARNING_PREFIX),
            a.field,
            a.value,
            tr.t(keys::ADVISORY_ABOVE_LIMIT),
            a.limit
        );
    }
}

pub fn print_biomass(tr: &Translator, catalog: &BiomassCatalog) {
    println!("{}", tr.t(keys::BIOMASS_HEADING));
    for p in catalog.profiles() {
        println!(
            "{:12} {:20} PCI {:5.1} MJ/kg  {:6.0} kg/m3  {:?}",
            p.id, p.name, p.pci_mj_per_kg, p.density_kg_per_m3, p.category
        );
    }
}

pub fn print_factors(tr: &Translator, table: &FactorTable) {
    println!("{} [{}]", tr.t(keys::FACTORS_HEADING), table.version());
    for (key, entry) in table.iter() {
        println!(
            "{:20} {:>12.4} gCO2e/{:4} {}",
            key.category.as_str(),
            entry.value,
            key.unit.symbol(),
            entry.source.as_deref().unwrap_or("")
        );
    }
}
