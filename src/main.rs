use clap::{Parser, Subcommand};
use eight_puzzle::{
    ranking::{self, ComparisonTable, Contender, RankingConfig},
    search::{
        validate, HeuristicName, PathStyle, Randomizer, SearchEngineName, SearchLimits,
        SearchResult, State, Task, Verbosity,
    },
};
use std::{path::PathBuf, process::ExitCode, time::Duration};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(version)]
/// Solve and compare 8-puzzle instances with blind and heuristic search.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal,
        global = true
    )]
    verbosity: Verbosity,
    #[arg(
        help = "Whether to use coloured output",
        short = 'c',
        long = "colour",
        global = true
    )]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a single instance. Without an engine, breadth-first, greedy
    /// best-first and A* search are run side by side and compared.
    Solve {
        #[arg(
            help = "The initial state, e.g. 1234567-8. A random instance is \
            generated when absent.",
            short = 's',
            long = "state",
            id = "STATE"
        )]
        state: Option<State>,
        #[arg(
            help = "Number of random moves used to scramble the random instance",
            long = "scramble",
            id = "SCRAMBLE",
            default_value_t = 100
        )]
        scramble_moves: usize,
        #[arg(help = "Seed for the random instance", long = "seed", id = "SEED")]
        seed: Option<u64>,
        #[arg(
            value_enum,
            help = "The search engine to use",
            short = 'e',
            long = "engine",
            id = "ENGINE"
        )]
        search_engine_name: Option<SearchEngineName>,
        #[arg(
            value_enum,
            help = "The heuristic evaluator to use",
            long = "heuristic",
            id = "HEURISTIC",
            default_value_t = HeuristicName::ManhattanDistance
        )]
        heuristic_name: HeuristicName,
        #[arg(
            value_enum,
            help = "How to print the solution path",
            short = 'p',
            long = "path",
            id = "PATH",
            default_value_t = PathStyle::Summary
        )]
        path_style: PathStyle,
        #[arg(
            help = "Time limit of a search, e.g. 10s",
            long = "time-limit",
            id = "TIME_LIMIT",
            value_parser = humantime::parse_duration
        )]
        time_limit: Option<Duration>,
        #[arg(
            help = "Maximum number of nodes a search may expand",
            long = "expansion-limit",
            id = "EXPANSION_LIMIT"
        )]
        expansion_limit: Option<usize>,
        #[arg(
            help = "Resident memory in MiB above which a search is abandoned",
            long = "memory-limit",
            id = "MEMORY_LIMIT"
        )]
        memory_limit_mb: Option<usize>,
    },
    /// Run every contender on a batch of random instances and report the
    /// averages.
    Rank {
        #[arg(
            help = "A TOML file with the ranking settings",
            long = "config",
            id = "CONFIG"
        )]
        config: Option<PathBuf>,
        #[arg(help = "Number of random instances", long = "trials", id = "TRIALS")]
        trials: Option<usize>,
        #[arg(
            help = "Number of random moves used to scramble each instance",
            long = "scramble",
            id = "SCRAMBLE"
        )]
        scramble_moves: Option<usize>,
        #[arg(help = "Seed for the random instances", long = "seed", id = "SEED")]
        seed: Option<u64>,
        #[arg(
            value_enum,
            help = "Contenders to compare, all of them when absent",
            long = "contender",
            id = "CONTENDER"
        )]
        contenders: Vec<Contender>,
        #[arg(
            help = "Resident memory in MiB above which a search is abandoned",
            long = "memory-limit",
            id = "MEMORY_LIMIT"
        )]
        memory_limit_mb: Option<usize>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match cli.command {
        Commands::Solve {
            state,
            scramble_moves,
            seed,
            search_engine_name,
            heuristic_name,
            path_style,
            time_limit,
            expansion_limit,
            memory_limit_mb,
        } => {
            let initial_state = match state {
                Some(state) => state,
                None => Randomizer::new(seed).scramble(&State::goal(), scramble_moves),
            };
            let task = Task::from_initial_state(initial_state);
            info!(initial_state = %task.initial_state, goal = %task.goal);
            if !task.is_solvable() {
                warn!("initial state has the wrong parity, the search will exhaust the state space");
            }
            let limits = SearchLimits::unlimited()
                .with_time_limit(time_limit)
                .with_expansion_limit(expansion_limit)
                .with_memory_limit_mb(memory_limit_mb);

            match search_engine_name {
                Some(search_engine_name) => solve(
                    &task,
                    search_engine_name,
                    heuristic_name,
                    limits,
                    path_style,
                ),
                None => {
                    let contenders = match heuristic_name {
                        HeuristicName::NumDisplaced => [
                            Contender::AStarNumDisplaced,
                            Contender::GreedyNumDisplaced,
                            Contender::BreadthFirst,
                        ],
                        _ => [
                            Contender::AStarManhattan,
                            Contender::GreedyManhattan,
                            Contender::BreadthFirst,
                        ],
                    };
                    println!("Initial state:\n{}", task.initial_state.grid());
                    let trials = ranking::compare(&contenders, &task, limits);
                    print!("{}", ComparisonTable::new(&trials));
                    ExitCode::SUCCESS
                }
            }
        }
        Commands::Rank {
            config,
            trials,
            scramble_moves,
            seed,
            contenders,
            memory_limit_mb,
        } => {
            let mut config = match config {
                Some(path) => match RankingConfig::from_path(&path) {
                    Ok(config) => config,
                    Err(e) => {
                        error!("{}", e);
                        return ExitCode::FAILURE;
                    }
                },
                None => RankingConfig::default(),
            };
            config.trials = trials.unwrap_or(config.trials);
            config.scramble_moves = scramble_moves.unwrap_or(config.scramble_moves);
            config.seed = seed.or(config.seed);
            config.memory_limit_mb = memory_limit_mb.or(config.memory_limit_mb);
            if !contenders.is_empty() {
                config.contenders = contenders;
            }
            if let Err(e) = config.validate() {
                error!("{}", e);
                return ExitCode::FAILURE;
            }

            print!("{}", ranking::rank(&config));
            ExitCode::SUCCESS
        }
    }
}

fn solve(
    task: &Task,
    search_engine_name: SearchEngineName,
    heuristic_name: HeuristicName,
    limits: SearchLimits,
    path_style: PathStyle,
) -> ExitCode {
    let mut engine = search_engine_name.create(limits);
    let mut heuristic = heuristic_name.create();
    let (result, statistics) = engine.search(task, heuristic.as_mut());

    match result {
        SearchResult::Success(solution) => {
            info!("validating solution");
            if let Err(e) = validate(&solution.moves(), task) {
                error!("solution is invalid: {}", e);
                return ExitCode::FAILURE;
            }
            info!(
                path_length = solution.path_length(),
                visited_states = solution.visited_states(),
                expanded_nodes = statistics.expanded_nodes(),
            );

            println!("{}", solution.render(path_style));
            println!("Num visited: {}", solution.visited_states());
            println!("Solution length: {}", solution.path_length());
            ExitCode::SUCCESS
        }
        result => {
            info!("no solution found");
            println!("No solution found: {:?}", result);
            ExitCode::FAILURE
        }
    }
}
