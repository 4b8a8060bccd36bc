//! Pixelgrid CLI - replay editing sessions headlessly and export the artwork.

mod error;
mod script;
mod settings;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use pixelgrid_core::{SeedPattern, Session};
use pixelgrid_export::{DirectorySink, Exporter};
use script::Script;
use settings::CliConfig;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pixelgrid")]
#[command(about = "Pixel-art grid editor: replay pointer scripts and export PNG/SVG")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the artwork and write pixel-art.zip
    Export {
        #[command(flatten)]
        session: SessionArgs,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },

    /// Build the artwork and print its active cells as a seed pattern
    Pattern {
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Print the default configuration as TOML
    Config,
}

#[derive(Args)]
struct SessionArgs {
    /// Seed pattern (JSON array of [x, y] pairs)
    #[arg(short, long)]
    pattern: Option<PathBuf>,

    /// Seed the built-in flourish artwork
    #[arg(long, conflicts_with = "pattern")]
    flourish: bool,

    /// Seed by tracing the light pixels of an image onto the grid
    #[arg(long, conflicts_with_all = ["pattern", "flourish"])]
    image: Option<PathBuf>,

    /// Pointer script to replay (JSON array of steps)
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Configuration file with [editor] and [export] tables
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli.command) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Export { session, out } => export(&session, &out),
        Commands::Pattern { session } => print_pattern(&session),
        Commands::Config => {
            print!("{}", CliConfig::default().to_toml_string()?);
            Ok(())
        }
    }
}

fn export(args: &SessionArgs, out: &Path) -> Result<(), CliError> {
    let config = CliConfig::load(args.config.as_deref())?;
    let exporter = Exporter::new(config.export.clone())?;
    let session = build_session(args, &config)?;

    let sink = DirectorySink::new(out);
    let path = exporter
        .export_and_deliver(&session.snapshot(), &sink)
        .ok_or(CliError::Delivery)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn print_pattern(args: &SessionArgs) -> Result<(), CliError> {
    let config = CliConfig::load(args.config.as_deref())?;
    let session = build_session(args, &config)?;
    println!("{}", SeedPattern::from_grid(session.grid()).to_json()?);
    Ok(())
}

fn build_session(args: &SessionArgs, config: &CliConfig) -> Result<Session, CliError> {
    let pattern = if args.flourish {
        SeedPattern::flourish()
    } else if let Some(path) = &args.pattern {
        SeedPattern::from_file(path)?
    } else if let Some(path) = &args.image {
        let grid = &config.editor.grid;
        SeedPattern::from_image_file(path, grid.width, grid.height)?
    } else {
        SeedPattern::default()
    };
    let mut session = Session::with_pattern(config.editor.clone(), &pattern);
    log::info!(
        "session {}x{} seeded with {} cells",
        session.grid().width(),
        session.grid().height(),
        session.grid().active_count()
    );

    if let Some(path) = &args.script {
        let script = Script::from_file(path)?;
        let changed = script.replay(&mut session);
        log::info!("replayed {} steps ({changed} edits)", script.len());
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn args(script: Option<PathBuf>) -> SessionArgs {
        SessionArgs {
            pattern: None,
            flourish: false,
            image: None,
            script,
            config: None,
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_export() {
        let cli = Cli::parse_from(["pixelgrid", "export", "--flourish", "--out", "dist"]);
        match cli.command {
            Commands::Export { session, out } => {
                assert!(session.flourish);
                assert_eq!(out, PathBuf::from("dist"));
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_flourish_conflicts_with_pattern() {
        let result =
            Cli::try_parse_from(["pixelgrid", "pattern", "--flourish", "--pattern", "p.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_export_writes_archive() {
        let tmp = tempfile::tempdir().unwrap();
        let script = tmp.path().join("script.json");
        std::fs::write(&script, r#"[{"down": [1, 1]}, {"move": [30, 1]}, "up"]"#).unwrap();
        let config = tmp.path().join("config.toml");
        std::fs::write(&config, "[editor.grid]\nwidth = 8\nheight = 8\n\n[export]\nscale = 1\n")
            .unwrap();

        let session = SessionArgs {
            config: Some(config),
            ..args(Some(script))
        };
        let out = tmp.path().join("out");
        export(&session, &out).unwrap();
        assert!(out.join("pixel-art.zip").is_file());
    }

    #[test]
    fn test_build_session_seeds_then_replays() {
        let tmp = tempfile::tempdir().unwrap();
        let pattern = tmp.path().join("pattern.json");
        std::fs::write(&pattern, "[[0,0],[1,0]]").unwrap();
        let script = tmp.path().join("script.json");
        std::fs::write(&script, r#"[{"tool": "erase"}, {"down": [1, 1]}, "up"]"#).unwrap();

        let session_args = SessionArgs {
            pattern: Some(pattern),
            ..args(Some(script))
        };
        let session = build_session(&session_args, &CliConfig::default()).unwrap();
        assert_eq!(session.grid().active_count(), 1);
        assert!(session.grid().get(1, 0).is_active());
    }

    #[test]
    fn test_build_session_traces_image() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("trace.png");
        let mut source = image::RgbaImage::new(96, 64);
        source.put_pixel(5, 6, image::Rgba([250, 250, 250, 255]));
        source.put_pixel(7, 6, image::Rgba([40, 250, 250, 255]));
        source.save(&path).unwrap();

        let session_args = SessionArgs {
            image: Some(path),
            ..args(None)
        };
        let session = build_session(&session_args, &CliConfig::default()).unwrap();
        assert_eq!(session.grid().active_count(), 1);
        assert!(session.grid().get(5, 6).is_active());
    }

    #[test]
    fn test_image_conflicts_with_flourish() {
        let result =
            Cli::try_parse_from(["pixelgrid", "pattern", "--flourish", "--image", "a.png"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_pattern_is_error() {
        let session_args = SessionArgs {
            pattern: Some(PathBuf::from("/nonexistent/pattern.json")),
            ..args(None)
        };
        assert!(matches!(
            build_session(&session_args, &CliConfig::default()),
            Err(CliError::Pattern(_))
        ));
    }
}
