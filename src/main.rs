use anyhow::Context;
use skirmishkit::{export_parts, init_logging, Config, BUILD_DATE, VERSION};
use std::path::{Path, PathBuf};
use tracing::info;

const USAGE: &str = "usage: skirmishkit [CONFIG.toml|CONFIG.json]\n       skirmishkit --init PATH";

fn load_config(arg: Option<&str>) -> anyhow::Result<Config> {
    if let Some(path) = arg {
        return Config::load_from_file(Path::new(path))
            .with_context(|| format!("Failed to load {path}"));
    }
    let default = Config::default_path()?;
    if default.exists() {
        info!("Using config {}", default.display());
        Ok(Config::load_from_file(&default)?)
    } else {
        info!("No config file; using built-in defaults");
        Ok(Config::default())
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!("SkirmishKit {} (built {})", VERSION, BUILD_DATE);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [flag] if flag == "-h" || flag == "--help" => {
            println!("{USAGE}");
            Ok(())
        }
        [flag, path] if flag == "--init" => {
            let path = PathBuf::from(path);
            Config::default().save_to_file(&path)?;
            info!("Wrote default config to {}", path.display());
            Ok(())
        }
        [] | [_] => {
            let config = load_config(args.first().map(String::as_str))?;
            let written = export_parts(&config)?;
            info!("Exported {} part(s)", written.len());
            Ok(())
        }
        _ => anyhow::bail!("{USAGE}"),
    }
}
