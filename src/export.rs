//! 계산 결과 CSV 내보내기. 열 순서와 단계명은 재현성을 위해 고정한다.

use std::fs;
use std::path::Path;

use crate::result::CalculationResult;

pub const HEADER: &str = "fase,emissoes_gco2e,participacao_pct";

/// 요약 CSV: 4개 단계 행 + 총량/탄소집약도/NEEA 요약 행.
pub fn to_csv(result: &CalculationResult) -> String {
    let mut out = format!("{HEADER}\n");
    for p in &result.phases {
        out.push_str(&row(p.phase.name(), p.emissions_g, p.share_pct));
    }
    push_summary(&mut out, result);
    out
}

/// 상세 CSV: 요약 뒤에 단계별 세부 항목을 덧붙인다.
pub fn to_csv_detailed(result: &CalculationResult) -> String {
    let mut out = to_csv(result);
    out.push_str("\nfase,componente,emissoes_gco2e\n");
    for p in &result.phases {
        for c in &p.components {
            out.push_str(&format!("{},{},{}\n", p.phase.name(), c.name, c.emissions_g));
        }
    }
    out
}

fn row(label: &str, value: impl std::fmt::Display, share: impl std::fmt::Display) -> String {
    format!("{label},{value},{share}\n")
}

fn push_summary(out: &mut String, result: &CalculationResult) {
    let total_share = if result.total_emissions_g > 0.0 { 100.0 } else { 0.0 };
    out.push_str(&row("total", result.total_emissions_g, total_share));
    let rows = [
        ("intensidade_carbono_gco2e_mj", result.carbon_intensity),
        ("neea_gco2e_mj", result.neea),
        (
            "ci_fossil_referencia_gco2e_mj",
            result.reference.intensity_g_per_mj,
        ),
        ("reducao_pct", result.reduction_pct),
        ("energia_total_mj", result.total_energy_mj),
        ("co2_biogenico_g", result.biogenic_co2_g),
    ];
    for (label, value) in rows {
        out.push_str(&row(label, value, ""));
    }
    out.push_str(&row("versao_fatores", quote(&result.factor_version), ""));
}

/// 쉼표/따옴표/줄바꿈이 있으면 큰따옴표로 감싼다.
fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub fn write_csv(path: &Path, content: &str) -> std::io::Result<()> {
    fs::write(path, content)
}
