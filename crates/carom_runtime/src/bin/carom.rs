//! Carom CLI entry point.
//!
//! Runs a bouncing-ball simulation for a fixed number of frames and prints
//! the final ball positions. Snapshots can be saved and resumed.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use carom_runtime::{SimConfig, SimSnapshot, Simulation, load_from_file, save_to_file};

/// CLI configuration parsed from arguments.
struct CliConfig {
    sim: SimConfig,
    frames: u64,
    trace: bool,
    save: Option<PathBuf>,
    load: Option<PathBuf>,
    show_help: bool,
    show_version: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            frames: 100,
            trace: false,
            save: None,
            load: None,
            show_help: false,
            show_version: false,
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    fn value(args: &[String], i: &mut usize, flag: &str) -> Result<String, String> {
        *i += 1;
        args.get(*i)
            .cloned()
            .ok_or_else(|| format!("{flag} requires a value"))
    }

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-t" | "--trace" => config.trace = true,
            "--balls" => {
                let v = value(&args, &mut i, "--balls")?;
                config.sim.ball_count = v.parse().map_err(|_| format!("invalid --balls value: {v}"))?;
            }
            "--capacity" => {
                let v = value(&args, &mut i, "--capacity")?;
                config.sim.capacity = v.parse().map_err(|_| format!("invalid --capacity value: {v}"))?;
            }
            "--frames" => {
                let v = value(&args, &mut i, "--frames")?;
                config.frames = v.parse().map_err(|_| format!("invalid --frames value: {v}"))?;
            }
            "--extent" => {
                let v = value(&args, &mut i, "--extent")?;
                let extent: f32 = v.parse().map_err(|_| format!("invalid --extent value: {v}"))?;
                if extent <= 0.0 {
                    return Err(format!("--extent must be positive, got {extent}").into());
                }
                config.sim.extent = extent;
            }
            "--dt" => {
                let v = value(&args, &mut i, "--dt")?;
                config.sim.delta_time = v.parse().map_err(|_| format!("invalid --dt value: {v}"))?;
            }
            "--seed" => {
                let v = value(&args, &mut i, "--seed")?;
                config.sim.seed = v.parse().map_err(|_| format!("invalid --seed value: {v}"))?;
            }
            "--save" => {
                config.save = Some(PathBuf::from(value(&args, &mut i, "--save")?));
            }
            "--load" => {
                config.load = Some(PathBuf::from(value(&args, &mut i, "--load")?));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            arg => {
                return Err(format!("unexpected argument: {arg}").into());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("carom - bouncing balls in a box");
    println!();
    println!("Usage: carom [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --balls N        Number of balls to spawn (default 32)");
    println!("  --capacity N     Entity capacity of the store (default 128)");
    println!("  --frames N       Frames to simulate (default 100)");
    println!("  --extent F       Full edge length of the box (default 20)");
    println!("  --dt F           Seconds per frame (default 0.1)");
    println!("  --seed N         Spawn rng seed (default 42)");
    println!("  --save PATH      Write a snapshot after the run");
    println!("  --load PATH      Resume from a snapshot instead of spawning");
    println!("  -t, --trace      Print ball 0's position every frame");
    println!("  -h, --help       Show this help");
    println!("  -V, --version    Show version");
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }
    if config.show_version {
        println!("carom {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut sim = match &config.load {
        Some(path) => load_from_file(path)?.restore()?,
        None => Simulation::new(&config.sim)?,
    };

    for _ in 0..config.frames {
        sim.step();

        if config.trace {
            if let Some(&first) = sim.entities().first() {
                let p = sim.position(first).value;
                println!(
                    "frame {:>5}: {} at ({:8.3}, {:8.3}, {:8.3})",
                    sim.frame(),
                    first,
                    p.x,
                    p.y,
                    p.z
                );
            }
        }
    }

    println!("after {} frames:", sim.frame());
    for &entity in sim.entities() {
        let p = sim.position(entity).value;
        let m = sim.motion(entity);
        println!(
            "  {entity}: pos ({:8.3}, {:8.3}, {:8.3})  speed {:6.2}",
            p.x, p.y, p.z, m.speed
        );
    }

    if let Some(path) = &config.save {
        save_to_file(&SimSnapshot::capture(&sim), path)?;
        println!("snapshot written to {}", path.display());
    }

    Ok(())
}
