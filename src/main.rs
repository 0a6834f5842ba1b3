use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use nutriscore::config::{self, ProductInput, Settings};
use nutriscore::nutrition::{
    energy_from_kilocalories, Category, FibreGram, FruitPercent, NutrientProfile, ProteinGram,
    SaturatedFatGram, SodiumMg, SugarGram,
};
use nutriscore::output;
use nutriscore::scoring::{score_from_profile, validate_profile};

const EXIT_SUCCESS: i32 = 0;
const EXIT_OUTPUT: i32 = 1;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a product (default if no subcommand)
    Score(ScoreArgs),
    /// Score the built-in reference product
    Example,
    /// Write a default settings file
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

// Nutrient values are per 100g (or 100ml for beverages).
#[derive(Args, Debug)]
struct ScoreArgs {
    /// Product category
    #[arg(long, value_enum)]
    category: Option<Category>,

    /// Energy in kilojoules
    #[arg(long, value_name = "KJ", conflicts_with = "energy_kcal")]
    energy_kj: Option<f64>,

    /// Energy in kilocalories (converted to kJ)
    #[arg(long, value_name = "KCAL")]
    energy_kcal: Option<f64>,

    /// Sugars in grams
    #[arg(long, value_name = "G")]
    sugar: Option<f64>,

    /// Saturated fatty acids in grams
    #[arg(long, value_name = "G")]
    saturated_fat: Option<f64>,

    /// Sodium in milligrams
    #[arg(long, value_name = "MG", conflicts_with = "salt")]
    sodium: Option<f64>,

    /// Salt in milligrams (converted to sodium)
    #[arg(long, value_name = "MG")]
    salt: Option<f64>,

    /// Fruit, vegetable and legume content in percent
    #[arg(long, value_name = "PERCENT")]
    fruit: Option<f64>,

    /// Fibre in grams
    #[arg(long, value_name = "G")]
    fibre: Option<f64>,

    /// Protein in grams
    #[arg(long, value_name = "G")]
    protein: Option<f64>,

    /// Read the product from a YAML file; flags override its values
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Show the points awarded per nutrient
    #[arg(long)]
    explain: bool,

    /// Reject implausible nutrient values instead of warning
    #[arg(long)]
    strict: bool,
}

impl ScoreArgs {
    /// True when no product option was given
    fn is_empty(&self) -> bool {
        self.to_input() == ProductInput::default()
            && self.file.is_none()
            && !self.json
            && !self.explain
            && !self.strict
    }

    fn to_input(&self) -> ProductInput {
        ProductInput {
            name: None,
            category: self.category,
            energy_kj: self.energy_kj,
            energy_kcal: self.energy_kcal,
            sugar: self.sugar,
            saturated_fat: self.saturated_fat,
            sodium_mg: self.sodium,
            salt_mg: self.salt,
            fruit_percent: self.fruit,
            fibre: self.fibre,
            protein: self.protein,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "nutriscore")]
#[command(about = "Compute the Nutri-Score of a food or beverage", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to settings file (defaults to ~/.config/nutriscore/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(flatten)]
    score: ScoreArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Pick the command to run. Product options at the top level mean `score`;
/// they cannot be combined with another subcommand.
fn resolve_command(command: Option<Commands>, score: ScoreArgs) -> Result<Commands, clap::Error> {
    match command {
        None => Ok(Commands::Score(score)),
        Some(command) if score.is_empty() => Ok(command),
        Some(_) => Err(Cli::command().error(
            ErrorKind::ArgumentConflict,
            "product options must follow `score` when a subcommand is given",
        )),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("nutriscore=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nutriscore=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Reference product: 100 kcal, 10 g sugar, 2 g saturated fat, 500 mg
/// sodium, 60 % fruit, 4 g fibre, 2 g protein.
fn example_profile() -> NutrientProfile {
    NutrientProfile {
        energy: energy_from_kilocalories(100.0),
        sugar: SugarGram(10.0),
        saturated_fat: SaturatedFatGram(2.0),
        sodium: SodiumMg(500.0),
        fruit: FruitPercent(60.0),
        fibre: FibreGram(4.0),
        protein: ProteinGram(2.0),
    }
}

fn print_result(
    profile: &NutrientProfile,
    category: Category,
    name: Option<&str>,
    json: bool,
    explain: bool,
) -> anyhow::Result<()> {
    let result = score_from_profile(profile, category);
    debug!(value = result.value, grade = %result.grade(), "scored product");

    if json {
        println!("{}", output::format_json(&result, name)?);
        return Ok(());
    }

    let use_colors = output::should_use_colors();
    if let Some(name) = name {
        println!("{}", name);
    }
    if explain {
        println!("{}", output::format_breakdown(&result, use_colors));
    }
    println!("{}", output::format_result(&result, use_colors));
    Ok(())
}

fn run_score(args: ScoreArgs, settings: &Settings) -> i32 {
    let mut input = ProductInput::default();
    if let Some(ref path) = args.file {
        input = match config::load_product(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Product error: {:#}", e);
                return EXIT_INPUT;
            }
        };
        debug!(path = %path.display(), "loaded product file");
    }
    let input = input.overlay(args.to_input());

    let profile = match input.to_profile() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Product error: {}", e);
            return EXIT_INPUT;
        }
    };

    let category = input
        .category
        .unwrap_or_else(|| settings.default_category());

    if let Err(errors) = check_profile(&profile, category) {
        if args.strict || settings.is_strict() {
            eprintln!("Invalid nutrient values:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            return EXIT_INPUT;
        }
        for error in errors {
            warn!("{}", error);
        }
    }

    debug!(%category, ?profile, "scoring");
    output_exit_code(print_result(
        &profile,
        category,
        input.name.as_deref(),
        args.json,
        args.explain,
    ))
}

/// Water is graded A whatever its nutrients, so they are not validated.
fn check_profile(profile: &NutrientProfile, category: Category) -> Result<(), Vec<String>> {
    match category {
        Category::Water => Ok(()),
        Category::Food | Category::Beverage | Category::Cheese => validate_profile(profile),
    }
}

fn output_exit_code(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Output error: {}", e);
            EXIT_OUTPUT
        }
    }
}

fn run_init(config_path: Option<PathBuf>, force: bool) -> i32 {
    let Some(path) = config_path.or_else(config::get_config_path) else {
        eprintln!("Config error: could not determine home directory; pass --config");
        return EXIT_CONFIG;
    };
    if let Err(e) = config::write_default_settings(&path, force) {
        eprintln!("Config error: {:#}", e);
        return EXIT_CONFIG;
    }
    println!("Config written to {}", path.display());
    EXIT_SUCCESS
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);
    let command = match resolve_command(cli.command, cli.score) {
        Ok(c) => c,
        Err(e) => e.exit(),
    };

    let code = match command {
        Commands::Init { force } => run_init(config_path, force),
        Commands::Example => output_exit_code(print_result(
            &example_profile(),
            Category::Food,
            None,
            false,
            false,
        )),
        Commands::Score(args) => match config::load_settings(config_path) {
            Ok(settings) => {
                debug!(?settings, "loaded settings");
                run_score(args, &settings)
            }
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                EXIT_CONFIG
            }
        },
    };

    std::process::exit(code);
}
