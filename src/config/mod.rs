pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use self::command::{BuildArgs, CliConfig, Command, LookupArgs, OutputFormat, SnapshotArgs};

#[cfg(feature = "cli")]
mod command {
    use crate::config::toml_config::ProgramConfig;
    use crate::core::Edition;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, validate_positive_number, validate_range, Validate};
    use clap::{Args, Parser, Subcommand, ValueEnum};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "program-builder")]
    #[command(about = "Assigns festival performances to concert slots and prints the program")]
    pub struct CliConfig {
        #[arg(long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Emit logs as JSON lines")]
        pub json_logs: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Build the program for one edition
        Build(BuildArgs),
        /// Show the schedule behind a public lottery code
        Lookup(LookupArgs),
        /// Print the public code for a lottery number
        Encode { number: u64 },
        /// Print the lottery number behind a public code
        Decode { code: String },
        /// Validate a configuration file and print the resolved series rules
        CheckConfig {
            #[arg(long, default_value = "program.toml")]
            config: String,
        },
    }

    #[derive(Debug, Clone, Args)]
    pub struct SnapshotArgs {
        #[arg(long, default_value = "snapshot.json")]
        pub snapshot: String,

        #[arg(long)]
        pub year: i32,

        #[arg(long, help = "TOML file with capacity and series rules")]
        pub config: Option<String>,
    }

    impl SnapshotArgs {
        pub fn edition(&self) -> Edition {
            Edition::new(self.year)
        }

        pub fn program_config(&self) -> Result<ProgramConfig> {
            let config = match &self.config {
                Some(path) => ProgramConfig::from_file(path)?,
                None => ProgramConfig::default(),
            };
            config.validate()?;
            Ok(config)
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
    pub enum OutputFormat {
        Text,
        Csv,
        Json,
    }

    #[derive(Debug, Clone, Args)]
    pub struct BuildArgs {
        #[command(flatten)]
        pub source: SnapshotArgs,

        #[arg(long, help = "Seat limit for every limited series in this build")]
        pub capacity: Option<u32>,

        #[arg(long, value_enum, default_value = "text")]
        pub format: OutputFormat,

        #[arg(long, help = "Write the program to this file instead of stdout")]
        pub output: Option<String>,
    }

    #[derive(Debug, Clone, Args)]
    pub struct LookupArgs {
        #[command(flatten)]
        pub source: SnapshotArgs,

        pub code: String,
    }

    fn validate_source(source: &SnapshotArgs) -> Result<()> {
        validate_path("snapshot", &source.snapshot)?;
        validate_range("year", source.year, 1900, 9999)?;
        if let Some(config) = &source.config {
            validate_path("config", config)?;
        }
        Ok(())
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            match &self.command {
                Command::Build(args) => {
                    validate_source(&args.source)?;
                    if let Some(capacity) = args.capacity {
                        validate_positive_number("capacity", capacity, 1)?;
                    }
                    if let Some(output) = &args.output {
                        validate_path("output", output)?;
                    }
                    Ok(())
                }
                Command::Lookup(args) => validate_source(&args.source),
                Command::CheckConfig { config } => validate_path("config", config),
                Command::Encode { .. } | Command::Decode { .. } => Ok(()),
            }
        }
    }

}
