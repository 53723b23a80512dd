//! surprise-runner: headless host for the birthday surprise.
//!
//! Drives the countdown with a simulated clock, then prints the plans
//! for every scene. Stands in for the UI when checking a config.
//!
//! Usage:
//!   surprise-runner --now 2025-09-20T23:59:55 --ticks 10
//!   surprise-runner --config event.json --seed 7 --json

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone};
use std::env;
use std::io::{self, Write};
use surprise_core::{
    clock::{Clock, CountdownTicker, ManualClock, SystemClock, TICK_INTERVAL_MS},
    config::EventConfig,
    countdown::clock_label,
    scene::ScenePlan,
    types::Viewport,
};

#[derive(serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RunnerOutput<'a> {
    Tick {
        tick: u64,
        now: String,
        display_text: &'a str,
        is_target_day: bool,
        celebration_active: bool,
    },
    Scene {
        plan: &'a ScenePlan,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ticks = parse_arg(&args, "--ticks", 5u64)?;
    let width = parse_arg(&args, "--width", 390.0f64)?;
    let height = parse_arg(&args, "--height", 844.0f64)?;
    let json = args.iter().any(|a| a == "--json");

    let mut config = match find_arg(&args, "--config") {
        Some(path) => EventConfig::load(path).with_context(|| format!("loading config {path}"))?,
        None => EventConfig::default(),
    };
    config.seed = parse_arg(&args, "--seed", config.seed)?;

    let start = match find_arg(&args, "--now") {
        Some(raw) => parse_local(raw)?,
        None => SystemClock.now(),
    };
    let viewport = Viewport::new(width, height);

    if !json {
        println!("Birthday surprise: surprise-runner");
        println!("  target:    {:02}-{:02} {:02}:{:02}",
            config.target.month(), config.target.day(),
            config.target.hour(), config.target.minute());
        println!("  start:     {start}");
        println!("  ticks:     {ticks}");
        println!("  seed:      {}", config.seed);
        println!();
    }

    let clock = ManualClock::new(start);
    let mut ticker = CountdownTicker::new(&clock, config.clone());
    let mut stdout = io::stdout();

    for _ in 0..ticks {
        let Some(state) = ticker.tick() else { break };
        let now = clock.now();
        if json {
            let line = RunnerOutput::Tick {
                tick: ticker.ticks(),
                now: now.to_rfc3339(),
                display_text: &state.display_text,
                is_target_day: state.is_target_day,
                celebration_active: state.celebration_active,
            };
            writeln!(stdout, "{}", serde_json::to_string(&line)?)?;
        } else {
            let flag = if state.start_unlocked() { "  [tap to start]" } else { "" };
            writeln!(stdout, "{}  {}{flag}", clock_label(&now), state.display_text)?;
        }
        clock.advance(Duration::milliseconds(TICK_INTERVAL_MS as i64));
    }
    ticker.stop();

    let plan = ScenePlan::build(&config, &viewport)?;
    if json {
        writeln!(stdout, "{}", serde_json::to_string(&RunnerOutput::Scene { plan: &plan })?)?;
    } else {
        print_scenes(&plan, &config)?;
    }
    stdout.flush()?;
    Ok(())
}

fn print_scenes(plan: &ScenePlan, config: &EventConfig) -> Result<()> {
    let game = plan.new_game(config)?;
    println!();
    println!("=== POP GAME ===");
    println!("  {}", game.header_text());
    for lane in &plan.bubbles {
        println!("  bubble {:>2}: x={:>6.1} rise={}ms", lane.id, lane.x, lane.rise_ms);
    }

    println!();
    println!("=== MEMORIES ===");
    for m in &plan.memories {
        println!("  #{} {} \"{}\"", m.id, m.image, m.caption);
    }

    println!();
    println!("=== FINALE: {} ===", config.recipient_name);
    let timeline = plan.formation.reveal_timeline();
    println!("  particles:    {}", plan.formation.flights.len());
    println!("  heart formed: {}ms", timeline.heart_formed);
    println!("  name shown:   {}ms", timeline.name_shown);
    println!("  button shown: {}ms", timeline.button_shown);
    println!("  confetti at:  {}ms", timeline.confetti_at);
    Ok(())
}

fn parse_local(raw: &str) -> Result<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .with_context(|| format!("bad --now {raw}, expected YYYY-MM-DDTHH:MM:SS"))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .with_context(|| format!("{raw} does not exist in the local time zone"))
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

/// `default` when the flag is absent; an error when its value is malformed.
fn parse_arg<T>(args: &[String], flag: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match find_arg(args, flag) {
        Some(raw) => raw.parse().with_context(|| format!("bad {flag} {raw}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn absent_flag_takes_default() {
        let a = args(&["surprise-runner"]);
        assert_eq!(parse_arg(&a, "--ticks", 5u64).unwrap(), 5);
    }

    #[test]
    fn well_formed_values_parse() {
        let a = args(&["surprise-runner", "--ticks", "12", "--width", "320.5", "--seed", "9"]);
        assert_eq!(parse_arg(&a, "--ticks", 5u64).unwrap(), 12);
        assert_eq!(parse_arg(&a, "--width", 390.0f64).unwrap(), 320.5);
        assert_eq!(parse_arg(&a, "--seed", 42u64).unwrap(), 9);
    }

    #[test]
    fn malformed_values_are_errors() {
        let a = args(&["surprise-runner", "--ticks", "ten", "--height", "tall", "--seed", "x"]);
        let err = parse_arg(&a, "--ticks", 5u64).unwrap_err();
        assert!(err.to_string().contains("bad --ticks ten"), "{err}");
        assert!(parse_arg(&a, "--height", 844.0f64).is_err());
        assert!(parse_arg(&a, "--seed", 42u64).is_err());
    }

    #[test]
    fn parse_local_rejects_garbage() {
        assert!(parse_local("2025-09-20T23:59:55").is_ok());
        assert!(parse_local("yesterday").is_err());
    }
}
