mod tracing_args;

use std::path::PathBuf;
use std::process::ExitCode;

use blotkarz::core::RankPool;
use blotkarz::simulation::{
    Simulation, SimulationBuilder, SimulationConfig, SimulationError, exact_odds,
};
use clap::Parser;
use tracing::error;

use crate::tracing_args::TracingArgs;

#[derive(Parser, Debug)]
#[command(
    name = "blotkarz",
    about = "Estimate how often Blotkarz beats Figurant",
    long_about = "Deal one five card hand from the Blotkarz ranks and one from the Figurant ranks,\n\
                  score both, and report how often Blotkarz scores strictly higher.\n\
                  Each side draws from its own deck of its ranks in all four suits."
)]
struct Args {
    /// Tracing/logging options
    #[command(flatten)]
    tracing: TracingArgs,

    /// JSON file with a base configuration; flags override it
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Number of rounds to simulate [default: 1000]
    #[arg(short = 'n', long)]
    rounds: Option<u64>,

    /// Blotkarz ranks, e.g. "2-10" or "2,3,4" [default: 2-10]
    #[arg(short = 'b', long)]
    blotkarz: Option<RankPool>,

    /// Figurant ranks, e.g. "11-14" or "J-A" [default: 11-14]
    #[arg(short = 'f', long)]
    figurant: Option<RankPool>,

    /// Random seed for a reproducible run
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Independent random streams to split the rounds across [default: 1]
    #[arg(short = 'w', long)]
    workers: Option<usize>,

    /// Enumerate every hand for the exact chance instead of sampling
    #[arg(long, conflicts_with_all = ["markdown", "rounds", "seed", "workers"])]
    exact: bool,

    /// Print the full result as JSON
    #[arg(long, conflicts_with = "markdown")]
    json: bool,

    /// Print the full result as a Markdown report
    #[arg(long)]
    markdown: bool,
}

impl Args {
    /// Merge the config file (if any) with the flags. Only the merged config
    /// is validated, when the simulation is built.
    fn simulation_config(&self) -> Result<SimulationConfig, SimulationError> {
        let base = match &self.config {
            Some(path) => SimulationConfig::from_json_file_unchecked(path)?,
            None => SimulationConfig::default(),
        };

        let mut builder = SimulationBuilder::from_config(base);
        if let Some(rounds) = self.rounds {
            builder = builder.num_rounds(rounds);
        }
        if let Some(pool) = &self.blotkarz {
            builder = builder.blotkarz_pool(pool);
        }
        if let Some(pool) = &self.figurant {
            builder = builder.figurant_pool(pool);
        }
        if let Some(seed) = self.seed {
            builder = builder.seed(seed);
        }
        if let Some(workers) = self.workers {
            builder = builder.workers(workers);
        }
        Ok(builder.config())
    }
}

fn run(args: &Args) -> Result<(), SimulationError> {
    let config = args.simulation_config()?;

    if args.exact {
        let odds = exact_odds(&config)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&odds)?);
        } else {
            println!("{odds}");
        }
        return Ok(());
    }

    let result = Simulation::new(config)?.run();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if args.markdown {
        println!("{}", result.to_markdown());
    } else {
        println!("{result}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.tracing.init_tracing();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "blotkarz failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("blotkarz").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_flags_is_default_config() {
        let args = parse(&[]);
        assert_eq!(
            SimulationConfig::default(),
            args.simulation_config().unwrap()
        );
    }

    #[test]
    fn test_flags_override() {
        let args = parse(&[
            "-n", "250", "--blotkarz", "2,3,4", "--figurant", "J-A", "--seed", "9", "-w", "3",
        ]);
        let config = args.simulation_config().unwrap();
        assert_eq!(250, config.num_rounds);
        assert_eq!(vec![2, 3, 4], config.blotkarz_ranks);
        assert_eq!(vec![11, 12, 13, 14], config.figurant_ranks);
        assert_eq!(Some(9), config.seed);
        assert_eq!(3, config.workers);
    }

    #[test]
    fn test_bad_pool_is_rejected_by_parser() {
        let parsed = Args::try_parse_from(["blotkarz", "--blotkarz", "1-10"]);
        assert!(parsed.is_err());
        let parsed = Args::try_parse_from(["blotkarz", "--figurant", ""]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_zero_rounds_fails_run() {
        let args = parse(&["-n", "0"]);
        assert!(matches!(
            run(&args),
            Err(SimulationError::InvalidRoundCount)
        ));
    }

    #[test]
    fn test_negative_rounds_rejected() {
        assert!(Args::try_parse_from(["blotkarz", "-n", "-5"]).is_err());
    }

    #[test]
    fn test_json_and_markdown_conflict() {
        assert!(Args::try_parse_from(["blotkarz", "--json", "--markdown"]).is_err());
    }

    #[test]
    fn test_run_succeeds() {
        let args = parse(&["-n", "20", "--seed", "1"]);
        assert!(run(&args).is_ok());
    }

    #[test]
    fn test_json_run_succeeds() {
        let args = parse(&["-n", "20", "--seed", "1", "--json"]);
        assert!(run(&args).is_ok());
    }

    #[test]
    fn test_exact_run_succeeds() {
        let args = parse(&["--exact", "-b", "2-4", "-f", "J-A"]);
        assert!(run(&args).is_ok());
        let args = parse(&["--exact", "--json", "-b", "2-4", "-f", "J-A"]);
        assert!(run(&args).is_ok());
    }

    #[test]
    fn test_exact_conflicts_with_sampling_flags() {
        for flag in [
            &["--markdown"][..],
            &["-n", "10"],
            &["--seed", "3"],
            &["-w", "2"],
        ] {
            let argv = ["blotkarz", "--exact"].into_iter().chain(flag.iter().copied());
            assert!(Args::try_parse_from(argv).is_err(), "{flag:?}");
        }
    }

    #[test]
    fn test_flags_override_config_file() {
        let path = std::env::temp_dir().join(format!(
            "blotkarz-cli-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"workers": 0, "num_rounds": 50}"#).unwrap();
        let path_arg = path.display().to_string();

        let args = parse(&["-c", &path_arg, "-w", "2"]);
        let config = args.simulation_config().unwrap();
        assert_eq!(2, config.workers);
        assert_eq!(50, config.num_rounds);
        assert!(run(&args).is_ok());

        let args = parse(&["-c", &path_arg]);
        assert!(matches!(
            run(&args),
            Err(SimulationError::InvalidWorkerCount)
        ));
        std::fs::remove_file(&path).unwrap();
    }
}
