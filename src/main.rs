use aarprep::config::Config;
use aarprep::merge::ManifestMerger;
use aarprep::migrate::IncludeGradleMigrator;
use aarprep::parser::gradle::{compile_dependency_scopes, extract_scope};
use aarprep::project::{default_package_name, BuildProjectStager, PluginSource};
use aarprep::report::{ReportFormat, Reporter};
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, WrapErr};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// aarprep - Android library staging for native mobile plugins
#[derive(Parser, Debug)]
#[command(name = "aarprep")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Merge a plugin manifest so that it declares a package
    Manifest {
        /// Existing AndroidManifest.xml (a minimal manifest is generated without it)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Default package identifier
        #[arg(short, long, required_unless_present = "plugin_name", conflicts_with = "plugin_name")]
        package: Option<String>,

        /// Derive the default package from this plugin name
        #[arg(long)]
        plugin_name: Option<String>,

        /// Prefix for packages derived from --plugin-name
        #[arg(long)]
        package_prefix: Option<String>,

        /// Write the manifest here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a brace-balanced block from a build script
    Scope {
        /// Build script to search
        file: PathBuf,

        /// Block name, e.g. dependencies
        name: String,
    },

    /// Print the repositories and dependencies blocks of an include.gradle
    Dependencies {
        /// include.gradle to read
        file: PathBuf,
    },

    /// Remove legacy blocks (productFlavors) from an include.gradle
    Migrate {
        /// include.gradle to migrate
        file: PathBuf,

        /// Show what would be removed without writing
        #[arg(long)]
        dry_run: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (for json format)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Stage a Gradle library module for a plugin's platforms/android directory
    Prepare {
        /// The plugin's platforms/android directory
        android_dir: PathBuf,

        /// Plugin package name, e.g. @scope/my-plugin
        #[arg(long)]
        plugin_name: String,

        /// Directory to stage the library module into
        #[arg(long)]
        out: PathBuf,

        /// Prefix for the default package identifier
        #[arg(long)]
        package_prefix: Option<String>,

        /// Show what would be staged without writing
        #[arg(long)]
        dry_run: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (for json format)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => ReportFormat::Terminal,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.quiet);

    debug!("aarprep v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;

    match cli.command {
        Command::Manifest {
            input,
            package,
            plugin_name,
            package_prefix,
            output,
        } => {
            let prefix = package_prefix.unwrap_or(config.package_prefix);
            let default_package = match (package, plugin_name) {
                (Some(package), _) => package,
                (None, Some(plugin_name)) => default_package_name(&prefix, &plugin_name),
                (None, None) => return Err(miette::miette!("Either --package or --plugin-name is required")),
            };
            run_manifest(input.as_deref(), &default_package, output.as_deref())
        }
        Command::Scope { file, name } => run_scope(&file, &name),
        Command::Dependencies { file } => run_dependencies(&file),
        Command::Migrate {
            file,
            dry_run,
            format,
            output,
        } => {
            let outcome = IncludeGradleMigrator::new(&config.migrate).migrate_file(&file, dry_run)?;
            Reporter::new(format.into(), output).report_migration(&outcome)
        }
        Command::Prepare {
            android_dir,
            plugin_name,
            out,
            package_prefix,
            dry_run,
            format,
            output,
        } => {
            let mut config = config;
            if let Some(prefix) = package_prefix {
                config.package_prefix = prefix;
            }
            let plugin = PluginSource::new(plugin_name, android_dir);
            let report = BuildProjectStager::new(&config).stage(&plugin, &out, dry_run)?;
            Reporter::new(format.into(), output).report_stage(&report)
        }
    }
}

fn run_manifest(input: Option<&Path>, default_package: &str, output: Option<&Path>) -> Result<()> {
    let existing = input
        .map(|path| {
            std::fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to read manifest: {}", path.display()))
        })
        .transpose()?;

    let manifest = ManifestMerger::new().merge(existing.as_deref(), default_package)?;

    if let Some(path) = output {
        std::fs::write(path, &manifest)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to write manifest: {}", path.display()))?;
        info!("Manifest written to: {}", path.display());
    } else {
        print!("{}", manifest);
    }

    Ok(())
}

fn run_scope(file: &Path, name: &str) -> Result<()> {
    let text = read_script(file)?;
    match extract_scope(&text, name) {
        Some(span) => {
            println!("{}", span.text(&text));
            Ok(())
        }
        None => Err(miette::miette!(
            "No '{}' block found in {}",
            name,
            file.display()
        )),
    }
}

fn run_dependencies(file: &Path) -> Result<()> {
    let text = read_script(file)?;
    let scopes = compile_dependency_scopes(&text);
    if scopes.is_empty() {
        info!("No dependencies block in {}", file.display());
    }
    for scope in scopes {
        println!("{}", scope);
    }
    Ok(())
}

fn read_script(file: &Path) -> Result<String> {
    std::fs::read_to_string(file)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read build script: {}", file.display()))
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(config_path) = &cli.config {
        Config::from_file(config_path)
    } else {
        // Try to load from default locations
        Config::from_default_locations(Path::new("."))
    }
}
