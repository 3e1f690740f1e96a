use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::phases::PhaseId;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const WARNING_PREFIX: &str = "general.warning_prefix";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_BIOMASS: &str = "result.biomass";
    pub const RESULT_PCI: &str = "result.pci";
    pub const RESULT_FACTOR_VERSION: &str = "result.factor_version";
    pub const RESULT_PHASES_HEADING: &str = "result.phases_heading";
    pub const RESULT_TOTAL_EMISSIONS: &str = "result.total_emissions";
    pub const RESULT_TOTAL_ENERGY: &str = "result.total_energy";
    pub const RESULT_CARBON_INTENSITY: &str = "result.carbon_intensity";
    pub const RESULT_FOSSIL_REFERENCE: &str = "result.fossil_reference";
    pub const RESULT_NEEA: &str = "result.neea";
    pub const RESULT_REDUCTION: &str = "result.reduction";
    pub const RESULT_BIOGENIC: &str = "result.biogenic";
    pub const NOTE_ZERO_TOTAL: &str = "note.zero_total";

    pub const PHASE_AGRICULTURAL: &str = "phase.agricultural";
    pub const PHASE_INDUSTRIAL: &str = "phase.industrial";
    pub const PHASE_DISTRIBUTION: &str = "phase.distribution";
    pub const PHASE_USE: &str = "phase.use";

    pub const ADVISORY_ABOVE_LIMIT: &str = "advisory.above_limit";
    pub const CSV_WRITTEN: &str = "export.csv_written";

    pub const BIOMASS_HEADING: &str = "biomass.heading";
    pub const FACTORS_HEADING: &str = "factors.heading";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Pt,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Pt
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(pt/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 pt로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 내장 영어/포르투갈어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| pt(key)),
            Language::Pt => pt(key),
        }
    }

    /// 화면 표시용 단계명.
    pub fn phase(&self, id: PhaseId) -> &str {
        self.t(match id {
            PhaseId::Agricultural => keys::PHASE_AGRICULTURAL,
            PhaseId::Industrial => keys::PHASE_INDUSTRIAL,
            PhaseId::Distribution => keys::PHASE_DISTRIBUTION,
            PhaseId::Use => keys::PHASE_USE,
        })
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "pt-br".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("pt") => Some("pt-br".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "pt" => Some("pt-br".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., pt-br)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., pt)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn pt(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Erro",
        WARNING_PREFIX => "Aviso",
        RESULT_HEADING => "\n=== Resultado BioCalc ===",
        RESULT_BIOMASS => "Biomassa:",
        RESULT_PCI => "PCI [MJ/kg]:",
        RESULT_FACTOR_VERSION => "Versão dos fatores:",
        RESULT_PHASES_HEADING => "\n-- Emissões por fase --",
        RESULT_TOTAL_EMISSIONS => "Emissões totais:",
        RESULT_TOTAL_ENERGY => "Energia total:",
        RESULT_CARBON_INTENSITY => "Intensidade de carbono [gCO2e/MJ]:",
        RESULT_FOSSIL_REFERENCE => "Referência fóssil [gCO2e/MJ]:",
        RESULT_NEEA => "NEEA [gCO2e/MJ]:",
        RESULT_REDUCTION => "Redução vs. fóssil [%]:",
        RESULT_BIOGENIC => "CO2 biogênico (não contabilizado):",
        NOTE_ZERO_TOTAL => "Emissões totais nulas: participações definidas como 0.",
        PHASE_AGRICULTURAL => "Agrícola",
        PHASE_INDUSTRIAL => "Industrial",
        PHASE_DISTRIBUTION => "Distribuição",
        PHASE_USE => "Uso",
        ADVISORY_ABOVE_LIMIT => "valor acima do limite razoável",
        CSV_WRITTEN => "CSV gravado em",
        BIOMASS_HEADING => "\n-- Biomassas disponíveis --",
        FACTORS_HEADING => "\n-- Fatores de emissão --",
        SETTINGS_SAVED => "Configuração salva.",
        _ => "???",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        WARNING_PREFIX => "Warning",
        RESULT_HEADING => "\n=== BioCalc result ===",
        RESULT_BIOMASS => "Biomass:",
        RESULT_PCI => "LHV [MJ/kg]:",
        RESULT_FACTOR_VERSION => "Factor version:",
        RESULT_PHASES_HEADING => "\n-- Emissions by phase --",
        RESULT_TOTAL_EMISSIONS => "Total emissions:",
        RESULT_TOTAL_ENERGY => "Total energy:",
        RESULT_CARBON_INTENSITY => "Carbon intensity [gCO2e/MJ]:",
        RESULT_FOSSIL_REFERENCE => "Fossil reference [gCO2e/MJ]:",
        RESULT_NEEA => "NEEA [gCO2e/MJ]:",
        RESULT_REDUCTION => "Reduction vs. fossil [%]:",
        RESULT_BIOGENIC => "Biogenic CO2 (not counted):",
        NOTE_ZERO_TOTAL => "Total emissions are zero: all shares set to 0.",
        PHASE_AGRICULTURAL => "Agricultural",
        PHASE_INDUSTRIAL => "Industrial",
        PHASE_DISTRIBUTION => "Distribution",
        PHASE_USE => "Use",
        ADVISORY_ABOVE_LIMIT => "value above plausible limit",
        CSV_WRITTEN => "CSV written to",
        BIOMASS_HEADING => "\n-- Available biomasses --",
        FACTORS_HEADING => "\n-- Emission factors --",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    })
}
