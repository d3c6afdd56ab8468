use std::io::Write;

use clap::Parser;
use color_eyre::eyre::{bail, eyre};
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use cap_rs::exclusion::ExclusionProfile;
use cap_rs::search::{search, SearchConfig};
use cap_rs::types::Dim;

/// Search for a complete cap in GF(2)^dim whose maximum exclusion multiplicity is k.
#[derive(Debug, Parser)]
#[command(author, version, allow_negative_numbers = true)]
struct Cli {
    /// Dimension of the space.
    #[arg(value_name = "DIM")]
    dim: i64,

    /// Target maximum exclusion multiplicity.
    #[arg(value_name = "K")]
    k: i64,

    /// Random seed (drawn from the OS entropy source if absent).
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,

    /// Give up after this many attempts (search forever if absent).
    #[arg(long, value_name = "INT")]
    max_attempts: Option<u64>,

    /// Re-check the cap invariant and completeness of the result.
    #[arg(long)]
    verify: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

/// Usage errors exit with 1, help and version with 0.
fn exit_code(e: &clap::Error) -> i32 {
    if e.use_stderr() {
        1
    } else {
        0
    }
}

/// Validates the positional arguments.
fn parameters(args: &Cli) -> color_eyre::Result<(Dim, u64)> {
    if args.dim <= 0 || args.k <= 0 {
        bail!("dim and k must be positive integers");
    }
    let dim = Dim::checked(args.dim).ok_or_else(|| eyre!("dim must be in the range 1..={}", Dim::MAX))?;
    Ok((dim, args.k as u64))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            e.print()?;
            std::process::exit(exit_code(&e));
        }
    };

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    debug!("args = {:?}", args);

    let (dim, k) = parameters(&args)?;

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!("Searching {} for k = {} (seed = {})", dim, k, seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut config = SearchConfig::new(dim, k);
    if let Some(max_attempts) = args.max_attempts {
        config = config.with_max_attempts(max_attempts);
    }

    let Some(outcome) = search(&config, &mut rng) else {
        bail!(
            "no complete cap with max exclusion multiplicity {} found in {} attempts",
            k,
            config.max_attempts.unwrap_or_default()
        );
    };

    if args.verify {
        if !outcome.cap.is_cap() {
            bail!("result violates the cap invariant: {}", outcome.cap);
        }
        if !outcome.cap.is_complete() {
            bail!("result is not a complete cap: {}", outcome.cap);
        }
        info!("Verified: cap of size {} is complete", outcome.cap.len());
    }
    let profile = ExclusionProfile::new(&outcome.cap, dim);
    debug!("multiplicity histogram = {:?}", profile.histogram());
    debug!("points with multiplicity {} = {:?}", profile.max(), profile.argmax());

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", outcome.cap)?;
    stdout.flush()?;

    Ok(())
}
