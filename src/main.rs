use anyhow::Result;
use clap::Parser;
use progeny_core::config::AppConfig;
use progeny_lib::app::App;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Override the RNG seed (implies deterministic mode)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Override the generated population size
    #[arg(short, long)]
    population: Option<usize>,

    /// Maximum number of breeding rounds to run
    #[arg(short, long, default_value_t = 32)]
    rounds: usize,

    /// Dump roster and offspring as JSON instead of a text summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .finish(),
    )
    .ok();

    let args = Args::parse();
    let mut config = AppConfig::load(&args.config);
    if let Some(seed) = args.seed {
        config.population.seed = Some(seed);
        config.population.deterministic = true;
    }
    if let Some(size) = args.population {
        config.population.size = size;
    }

    let mut app = App::new(config);
    let births = app.run_breeding(args.rounds);

    if args.json {
        let roster: Vec<_> = app.session.roster().map(|(_, candidate)| candidate).collect();
        let dump = serde_json::json!({
            "roster": roster,
            "offspring": app.session.offspring(),
        });
        println!("{}", serde_json::to_string_pretty(&dump)?);
    } else {
        println!("{births} offspring from {} breeding rounds:", args.rounds);
        for child in app.session.offspring() {
            let sex = if child.sex { "male" } else { "female" };
            println!(
                "  {} {sex} hp {:.0} atk {:.1} spd {:.1} fertility {:.2}",
                child.id, child.hp_max, child.atk_dmg, child.spd, child.fertility
            );
        }
    }
    Ok(())
}
