use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{load_config, resolve_config, Config};
use crate::core::changeset::collect_changed_packages;
use crate::core::classify::Classifier;
use crate::core::package::{Layer, PackageInfo, PackageSet};
use crate::error::Result;
use crate::graph::builder::build_import_graph;
use crate::graph::ops::expand_dependencies;
use crate::graph::rules;
use crate::loader::GoListLoader;
use crate::util::output;

#[derive(Parser, Debug)]
#[command(name = "depcheck")]
#[command(about = "Monorepo layering and change impact checks", long_about = None)]
pub struct Cli {
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub debug: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect changed packages from a git diff on stdin
    ChangedPackages(ChangedArgs),
    /// Detect changed services from a git diff on stdin
    ChangedServices(ChangedArgs),
    /// Validate the layering of every import in the module
    Validate(ValidateArgs),
}

#[derive(Args, Debug)]
pub struct ChangedArgs {
    /// Read changed file paths from a file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Package selector passed to the loader
    #[arg(long, default_value = "./...")]
    pub selector: String,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Package selector passed to the loader
    #[arg(long, default_value = "./...")]
    pub selector: String,
}

pub fn run() {
    let cli = Cli::parse();
    output::set_debug(cli.debug);
    if let Err(err) = dispatch(cli) {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    let config = load_project_config(cli.config)?;
    match cli.command {
        Commands::ChangedPackages(args) => handle_changed_packages(args, &config),
        Commands::ChangedServices(args) => handle_changed_services(args, &config),
        Commands::Validate(args) => handle_validate(args, &config),
    }
}

fn load_project_config(config_path: Option<PathBuf>) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    let path = resolve_config(cwd, config_path)?;
    Ok(load_config(&path)?)
}

fn changed_input(args: &ChangedArgs) -> Result<Box<dyn BufRead>> {
    match args.input.as_ref() {
        Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

fn handle_changed_packages(args: ChangedArgs, config: &Config) -> Result<()> {
    let classifier = Classifier::from_config(config);
    let mut changed = collect_changed_packages(changed_input(&args)?, &classifier)?;

    if changed.contains(&PackageInfo::root()) {
        println!("{}", PackageInfo::root().selector());
        return Ok(());
    }

    expand_changed_set(&args, &classifier, &mut changed)?;

    for pkg in &changed {
        println!("{}", pkg.selector());
    }

    Ok(())
}

fn handle_changed_services(args: ChangedArgs, config: &Config) -> Result<()> {
    let classifier = Classifier::from_config(config);
    let mut changed = collect_changed_packages(changed_input(&args)?, &classifier)?;

    if changed.contains(&PackageInfo::root()) {
        output::info("change detected in root package");
    }

    expand_changed_set(&args, &classifier, &mut changed)?;

    let services: Vec<&str> = changed
        .iter()
        .filter(|pkg| pkg.layer() == Layer::Service)
        .map(|pkg| pkg.name())
        .collect();

    output::info(&format!("changes detected for services {services:?}"));
    println!("{}", services.join(" "));

    Ok(())
}

fn expand_changed_set(
    args: &ChangedArgs,
    classifier: &Classifier,
    changed: &mut PackageSet,
) -> Result<()> {
    let loader = GoListLoader::new();
    let imports = build_import_graph(&loader, &args.selector, classifier)?;
    let dependencies = imports.to_dependency_graph();
    expand_dependencies(&dependencies, changed);
    Ok(())
}

fn handle_validate(args: ValidateArgs, config: &Config) -> Result<()> {
    let classifier = Classifier::from_config(config);
    let loader = GoListLoader::new();
    let imports = build_import_graph(&loader, &args.selector, &classifier)?;

    if output::debug_enabled() {
        output::debug(&imports.render());
    }

    let violations = rules::validate(&imports);
    for violation in &violations {
        output::error(&format!(
            "package {} cannot import package {}: {}",
            violation.importer,
            violation.imported,
            violation.reason()
        ));
    }

    if !violations.is_empty() {
        return Err(crate::error::DepcheckError::Other(anyhow::anyhow!(
            "invalid imports detected, check error log for more details"
        )));
    }

    Ok(())
}
