use clap::Parser;
use ui_hierarchy::cli::commands::{cmd_extract, cmd_find, cmd_save, cmd_tree};
use ui_hierarchy::cli::config::{
    Cli, Commands, build_capture_options, load_config, log_level, resolve_screen_arg,
};
use ui_hierarchy::trace::logger::TraceLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose))
        .parse_default_env()
        .init();

    let config = load_config(cli.config.as_deref());
    let options = build_capture_options(&config);

    // Resolve trace path: CLI > config > disabled
    let tracer = match cli.trace.as_deref().or(config.trace.path.as_deref()) {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    match cli.command {
        Commands::Extract {
            input,
            screen,
            format,
        } => {
            let screen = resolve_screen_arg(screen.as_deref(), &config)?;
            cmd_extract(&input, screen, &format, &options, &tracer)?;
        }
        Commands::Tree { input, screen, raw } => {
            let screen = resolve_screen_arg(screen.as_deref(), &config)?;
            cmd_tree(&input, screen, raw, &options)?;
        }
        Commands::Find {
            input,
            text,
            screen,
        } => {
            let screen = resolve_screen_arg(screen.as_deref(), &config)?;
            if !cmd_find(&input, &text, screen, &options, &tracer)? {
                std::process::exit(1);
            }
        }
        Commands::Save {
            input,
            index,
            name,
            store,
            screen,
        } => {
            let screen = resolve_screen_arg(screen.as_deref(), &config)?;
            cmd_save(&input, index, &name, &store, screen, &options, &tracer)?;
        }
    }

    Ok(())
}
