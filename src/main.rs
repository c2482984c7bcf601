//! Napier's Bones - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Napier's Bones - multiply by reading the diagonals of calculating rods
#[derive(Parser, Debug)]
#[command(name = "napier")]
#[command(version)]
#[command(about = "Terminal applet for multiplying with Napier's bones")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where the entered number is saved on exit and restored from
    #[arg(long)]
    pub state_file: Option<PathBuf>,

    /// Start with empty slots instead of the saved number
    #[arg(long)]
    pub no_restore: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Write bone-0.svg .. bone-9.svg into DIR and exit
    #[arg(long, value_name = "DIR")]
    pub export_bones: Option<PathBuf>,

    /// Scale for exported bones (1.0 = 101x1001 units)
    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = napier::config::load_config_with_precedence(args.config.clone())?;
        let merged = napier::config::merge_config(config_file);
        let with_env = napier::config::apply_env_overrides(merged);

        // Flags only override when set
        let restore_override = if args.no_restore { Some(false) } else { None };
        let no_color_override = if args.no_color { Some(true) } else { None };

        napier::config::apply_cli_overrides(
            with_env,
            args.state_file.clone(),
            restore_override,
            no_color_override,
        )
    };

    napier::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    if let Some(dir) = &args.export_bones {
        let written = napier::export::export_bones(dir, args.scale)?;
        for path in written {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let cli_args =
        napier::view::CliArgs::new(config.state_file, config.restore_state, config.no_color);
    napier::view::run(cli_args)?;

    Ok(())
}
