use clap::Parser;
use biocalc::{app, config, i18n, ui_cli::Cli};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령을 실행한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(&cli) {
        let tr = i18n::Translator::new(&i18n::resolve_language(&cli.lang, None));
        eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    app::run(cli, &mut cfg, &tr)?;
    Ok(())
}
