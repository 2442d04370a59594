use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use sketchpad::config::Config;
use sketchpad::input::Tool;
use sketchpad::script::Script;
use sketchpad::{backend, export, util};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(version, about = "Interactive line and rectangle sketching surface")]
struct Cli {
    /// Pointer event script to replay (tool/down/move/up/resize commands)
    #[arg(long, short = 's', value_name = "PATH")]
    script: Option<PathBuf>,

    /// Write the final frame as PNG to this path
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Write the final frame as PNG into the configured export directory
    #[arg(long, short = 'e', action = ArgAction::SetTrue, conflicts_with = "output")]
    export: bool,

    /// Config file to use instead of ~/.config/sketchpad/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Canvas size, e.g. 800x600 (overrides config)
    #[arg(long, value_name = "WxH", value_parser = parse_size_arg)]
    size: Option<(u32, u32)>,

    /// Initially selected tool: none, selection, line or rectangle (overrides config)
    #[arg(long, short = 't', value_name = "TOOL")]
    tool: Option<Tool>,

    /// Print the final shapes as JSON to stdout
    #[arg(long, action = ArgAction::SetTrue)]
    dump_shapes: bool,
}

fn parse_size_arg(value: &str) -> Result<(u32, u32), String> {
    util::parse_size(value).ok_or_else(|| format!("invalid size '{value}', expected WxH"))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script.as_deref() else {
        // No script: show usage
        println!("sketchpad: Interactive line and rectangle sketching surface");
        println!();
        println!("Usage:");
        println!("  sketchpad --script events.txt --output sketch.png");
        println!("  sketchpad --script events.txt --dump-shapes");
        println!("  sketchpad --help      Show help");
        println!();
        println!("Script commands (one per line, # starts a comment):");
        println!("  tool <none|selection|line|rectangle>");
        println!("  down <x> <y>   move <x> <y>   up [<x> <y>]");
        println!("  resize <width> <height>");
        return Ok(());
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some((width, height)) = cli.size {
        config.canvas.width = width;
        config.canvas.height = height;
    }
    if let Some(tool) = cli.tool {
        config.drawing.default_tool = tool;
    }

    let source = fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read script {}", script_path.display()))?;
    let script: Script = source
        .parse()
        .with_context(|| format!("Invalid script {}", script_path.display()))?;

    log::info!(
        "Replaying {} ({} commands)",
        script_path.display(),
        script.commands.len()
    );
    let session = backend::run_script(&config, &script)?;

    if let Some(path) = &cli.output {
        let saved = export::save_png(&session.surface, path)?;
        log::info!("Sketch saved to {}", saved.display());
    } else if cli.export {
        let saved = export::save_png_to_directory(&session.surface, &config.export)?;
        log::info!("Sketch saved to {}", saved.display());
    }

    if cli.dump_shapes {
        println!("{}", export::shapes_to_json(session.input.store.all())?);
    }

    Ok(())
}
