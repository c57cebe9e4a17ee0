// Skillcheck CLI Entry Point

use clap::{CommandFactory, Parser};
use skillcheck_cli::cli::DEFAULT_SKILLS_DIR;
use skillcheck_cli::{logging, runner, Cli, CliError, CliResult, OutputStyle};
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let style = OutputStyle::default();

    match run(&cli, &style) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}", style.error(&e.user_message()));
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli, style: &OutputStyle) -> CliResult<bool> {
    if cli.all {
        runner::validate_all_skills(Path::new(DEFAULT_SKILLS_DIR), style)
    } else if let Some(skill_path) = &cli.skill_path {
        Ok(runner::validate_skill(skill_path, style))
    } else {
        // Invoked without arguments: show usage and fail
        Cli::command().print_help()?;
        println!();
        Err(CliError::MissingSkillPath)
    }
}
