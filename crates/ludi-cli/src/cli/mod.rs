use clap::{Parser, Subcommand, ValueEnum};

pub mod global;

pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `ludi` binary.
#[derive(Debug, Parser)]
#[command(name = "ludi", version, about = "LudiTools content inspector")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Content API base URL (overrides configuration)
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            base_url: self.base_url.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the store catalog
    Games,
    /// Show one store item with its display price
    Game {
        /// Item id (numeric id or document id)
        id: String,
    },
    /// List facilitators
    Facilitators,
    /// List the camp programme
    Schedule,
    /// List testimonials
    Testimonials,
    /// Fetch everything the landing page renders, concurrently
    Landing,
    /// Compute a display price
    Price {
        /// Base price
        amount: f64,
        /// Discount percentage
        #[arg(short, long)]
        discount: Option<f64>,
    },
    /// Print the JSON Schema of a normalized entity
    Schema {
        #[arg(value_enum)]
        entity: SchemaEntity,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaEntity {
    Game,
    Facilitator,
    Schedule,
    Testimonial,
    Price,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat, SchemaEntity};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "ludi",
            "--format",
            "raw",
            "--base-url",
            "https://cms.example.com",
            "--verbose",
            "games",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        assert_eq!(cli.global_flags().base_url.as_deref(), Some("https://cms.example.com"));
        assert!(matches!(cli.command, Commands::Games));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["ludi", "landing", "--quiet"]).expect("cli should parse");
        assert!(cli.quiet);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Landing));
    }

    #[test]
    fn price_takes_optional_discount() {
        let cli = Cli::try_parse_from(["ludi", "price", "1499", "--discount", "20"])
            .expect("cli should parse");
        match cli.command {
            Commands::Price { amount, discount } => {
                assert!((amount - 1499.0).abs() < f64::EPSILON);
                assert_eq!(discount, Some(20.0));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn game_requires_id() {
        assert!(Cli::try_parse_from(["ludi", "game"]).is_err());
        let cli = Cli::try_parse_from(["ludi", "game", "q8x2m1"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Game { id } if id == "q8x2m1"));
    }

    #[test]
    fn schema_entity_values() {
        let cli = Cli::try_parse_from(["ludi", "schema", "facilitator"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Schema {
                entity: SchemaEntity::Facilitator
            }
        ));
        assert!(Cli::try_parse_from(["ludi", "schema", "order"]).is_err());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["ludi", "--format", "xml", "games"]).is_err());
    }
}
