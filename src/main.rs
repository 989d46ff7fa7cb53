use anyhow::Result;
use clap::Parser;

use release_config::config;
use release_config::domain::TagFormat;
use release_config::git::Git2Remote;
use release_config::release::ReleaseConfig;
use release_config::ui;

#[derive(clap::Parser)]
#[command(
    name = "release-config",
    about = "Resolve release branches and emit the release pipeline configuration"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, default_value = ".", help = "Path to the git repository")]
    repo: String,

    #[arg(long, help = "Show the resolved branch list and exit")]
    list: bool,

    #[arg(short, long, help = "Write the rendered configuration to a file")]
    output: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("release-config {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = TagFormat::new(config.tag_format.as_str()).validate() {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    // A missing repository degrades to the minimal branch list, the same
    // as a failed listing inside an open repository.
    let (release, warning) = match Git2Remote::open(&args.repo) {
        Ok(remote) => ReleaseConfig::resolve(&remote, &config),
        Err(e) => ReleaseConfig::degraded(&config, e.to_string()),
    };

    if let Some(warning) = &warning {
        ui::display_warning(&warning.to_string());
    }

    if args.list {
        ui::display_branches(&release.branches);
        return Ok(());
    }

    let rendered = release.to_json()?;

    match args.output.as_deref() {
        Some(path) => {
            std::fs::write(path, rendered)?;
            ui::display_success(&format!("Wrote release configuration to {}", path));
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
