//! ginforge CLI - scaffolding for Gin + MongoDB web services

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use scaffold_core::{generator, ModuleSpec, ProductConfig, ProjectSpec};
use std::path::Path;

/// ginforge product configuration
#[derive(Clone)]
pub struct GinforgeConfig;

impl ProductConfig for GinforgeConfig {
    fn name(&self) -> &'static str {
        "ginforge"
    }

    fn display_name(&self) -> &'static str {
        "ginforge"
    }

    fn module_prefix(&self) -> &'static str {
        "github.com/yourusername"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding Gin + MongoDB web services"
    }

    fn next_steps(&self, dir: &Path) -> Vec<String> {
        vec![
            format!("cd {}", dir.display()),
            "go mod tidy".to_string(),
            "go run main.go".to_string(),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "ginforge")]
#[command(about = "CLI for scaffolding Gin + MongoDB web services")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a new Gin + MongoDB project
    Init {
        /// Name of the project directory to create
        project_name: String,
    },
    /// Generate a CRUD module inside an existing project
    Generate {
        /// Name of the module (e.g. user, user-profile)
        module_name: String,
    },
}

fn main() {
    let args = Args::parse();
    let config = GinforgeConfig;

    let result = match args.command {
        Command::Init { project_name } => init(&config, &project_name),
        Command::Generate { module_name } => generate(&module_name),
    };

    if let Err(err) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn init(config: &GinforgeConfig, project_name: &str) -> anyhow::Result<()> {
    let spec = ProjectSpec::new(project_name, config.module_prefix())?;

    println!(
        "{}",
        format!("Creating project: {}", spec.name).cyan().bold()
    );

    let report = generator::generate_project(Path::new("."), &spec)
        .with_context(|| format!("could not scaffold '{}'", project_name))?;

    for file in &report.files {
        println!("  {} {}", "->".blue(), file.display());
    }

    println!();
    println!(
        "{} Project {} created",
        "Done.".green().bold(),
        spec.name.bold()
    );
    println!();
    println!("Next steps:");
    for step in config.next_steps(&report.root) {
        println!("  {}", step);
    }

    Ok(())
}

fn generate(module_name: &str) -> anyhow::Result<()> {
    let spec = ModuleSpec::new(module_name)?;

    println!(
        "{}",
        format!("Generating module: {}", spec.name).cyan().bold()
    );

    let report = generator::generate_module(Path::new("."), &spec)
        .with_context(|| format!("could not generate module '{}'", module_name))?;

    for file in &report.files {
        println!("  {} {}", "->".blue(), file.display());
    }

    println!();
    println!(
        "{} Module {} generated",
        "Done.".green().bold(),
        spec.name.bold()
    );
    println!(
        "Wire it up in routes/routes.go: Register{}Routes(api, cfg)",
        spec.pascal
    );

    Ok(())
}
