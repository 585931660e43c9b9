// Opt-in runtime harness. Run with: cargo bench --bench runtime
use std::hint::black_box;
use std::time::Duration;

use leaderboard::orchestrator::rank_players;
use leaderboard::player::Player;
use leaderboard::rank::Algorithm;

fn main() {
    let iterations = env_u64("LEADERBOARD_RUNTIME_ITERS", 20);
    let population = env_u64("LEADERBOARD_RUNTIME_POPULATION", 100_000) as usize;
    let interval = env_u64("LEADERBOARD_RUNTIME_INTERVAL", 50) as usize;
    let budget_ms = env_f64("LEADERBOARD_RUNTIME_BUDGET_MS");

    println!("leaderboard runtime harness");
    println!("iterations={iterations} population={population} interval={interval}");
    if let Some(budget) = budget_ms {
        println!("budget_ms={budget}");
    }

    let players = synthetic_players(population, 0x5EED);

    let mut failed = false;
    for algorithm in Algorithm::ALL {
        let avg_ms = run_case(algorithm, &players, interval, iterations);
        if let Some(budget) = budget_ms
            && avg_ms > budget
        {
            eprintln!(
                "budget exceeded for {}: avg_ms={:.3} budget_ms={:.3}",
                algorithm, avg_ms, budget
            );
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }
}

/// Sums the engine-reported `elapsed`, so input cloning and stream fetches
/// are not part of the figure.
fn run_case(algorithm: Algorithm, players: &[Player], interval: usize, iterations: u64) -> f64 {
    let mut total = Duration::ZERO;
    for _ in 0..iterations {
        let mut input = players.to_vec();
        let result = rank_players(algorithm, &mut input, interval).expect("ranking failed");
        total += result.elapsed;
        black_box(result);
    }

    let total_ms = total.as_secs_f64() * 1000.0;
    let avg_ms = if iterations == 0 {
        0.0
    } else {
        total_ms / iterations as f64
    };

    println!(
        "case {}: avg_ms={:.3} total_ms={:.3}",
        algorithm, avg_ms, total_ms
    );

    avg_ms
}

/// Deterministic xorshift levels in 0..10_000.
fn synthetic_players(count: usize, seed: u64) -> Vec<Player> {
    let mut state = seed;
    (0..count)
        .map(|idx| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            Player::new(format!("P{idx:07}"), state % 10_000)
        })
        .collect()
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_f64(name: &str) -> Option<f64> {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| *value > 0.0)
}
