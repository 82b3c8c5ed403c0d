use bsp_roguelike::game::Key;
use bsp_roguelike::{Game, GameConfig};
use log::info;
use std::path::PathBuf;

const USAGE: &str = "usage: bsp-roguelike [--profile] [--seed N] [--steps N] [config.json]";

struct Args {
    profile: bool,
    seed: Option<u64>,
    steps: u32,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Args, Box<dyn std::error::Error>> {
    let mut args = Args {
        profile: false,
        seed: None,
        steps: 0,
        config: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--profile" => args.profile = true,
            "--seed" => {
                let value = iter.next().ok_or(USAGE)?;
                args.seed = Some(value.parse()?);
            }
            "--steps" => {
                let value = iter.next().ok_or(USAGE)?;
                args.steps = value.parse()?;
            }
            "-h" | "--help" => return Err(USAGE.into()),
            path => args.config = Some(PathBuf::from(path)),
        }
    }
    Ok(args)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = parse_args()?;
    puffin::set_scopes_on(args.profile);

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut game = Game::new(config)?;
    info!(
        "Seed {}: {} rooms, {} corridors, {} doors",
        game.seed,
        game.dungeon.rooms.len(),
        game.dungeon.corridors.len(),
        game.dungeon.door_positions().len()
    );

    // Walk the player in a square so the update pipeline can be profiled headless
    let legs = [Key::Right, Key::Up, Key::Left, Key::Down];
    for step in 0..args.steps {
        let key = legs[(step / 30) as usize % legs.len()];
        for k in legs {
            game.set_key(k, k == key);
        }
        let report = game.update();
        for hit in &report.attacks {
            info!("Hit {:?} for {}", hit.target, hit.damage);
        }
        puffin::GlobalProfiler::lock().new_frame();
    }
    if args.steps > 0 {
        info!("Player ended at {:?}", game.player_position());
    }

    print!("{}", game.grid().to_ascii());
    Ok(())
}
