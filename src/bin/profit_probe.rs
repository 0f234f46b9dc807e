//! Scaling run over growing random-walk price series.
//!
//! Prints one row per scenario and size: the strategy the dispatcher picked,
//! the profit, wall time, RSS growth, and whether the profit matches a full
//! `days × buys × stance` table (only for series up to `--verify-limit`).

use std::env;
use std::process;
use std::time::Instant;

use sysinfo::{get_current_pid, ProcessRefreshKind, System};
use trade_dp::{compute_max_profit, Price, Profit, Strategy, TradeConfig};

const SIZES: &[usize] = &[256, 1024, 4096, 16384, 65536, 262_144, 1_048_576];

/// One constraint set, run over every size.
struct Scenario {
    name: &'static str,
    max_transactions: Option<i64>,
    cooldown_days: u32,
    fee: i64,
}

const SCENARIOS: &[Scenario] = &[
    Scenario { name: "unbounded", max_transactions: None, cooldown_days: 0, fee: 0 },
    Scenario { name: "k2", max_transactions: Some(2), cooldown_days: 0, fee: 0 },
    Scenario { name: "k32", max_transactions: Some(32), cooldown_days: 0, fee: 0 },
    Scenario { name: "cooldown", max_transactions: None, cooldown_days: 1, fee: 0 },
    Scenario { name: "fee3", max_transactions: None, cooldown_days: 0, fee: 3 },
    Scenario { name: "k8_cooldown_fee2", max_transactions: Some(8), cooldown_days: 1, fee: 2 },
];

fn main() {
    let verify_limit = match parse_verify_limit(env::args().skip(1)) {
        Ok(limit) => limit,
        Err(err) => {
            eprintln!("profit_probe: {err}");
            eprintln!("usage: profit_probe [--verify-limit <days>]   (default 512)");
            process::exit(2);
        }
    };

    #[cfg(feature = "tracing")]
    init_tracing();

    let mut sys = System::new();
    let mut mismatches = 0usize;

    println!(
        "{:<18} {:>9} {:<9} {:>14} {:>9} {:>10}  check",
        "scenario", "days", "strategy", "profit", "wall_s", "rss_kib"
    );
    for scenario in SCENARIOS {
        let config = match TradeConfig::new(
            scenario.max_transactions,
            scenario.cooldown_days,
            scenario.fee,
        ) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{}: skipped ({err})", scenario.name);
                continue;
            }
        };

        for &days in SIZES {
            let prices = deterministic_prices(days, 0x5eed ^ days as u64);
            let strategy = Strategy::select(days, &config);

            let rss_before = rss_kib(&mut sys);
            let start = Instant::now();
            let profit = compute_max_profit(&prices, &config);
            let wall = start.elapsed().as_secs_f64();
            let rss_delta = rss_kib(&mut sys).saturating_sub(rss_before);

            let check = if days > verify_limit {
                "-".to_string()
            } else {
                let baseline = full_table_profit(
                    &prices,
                    scenario.max_transactions.map(|k| k as usize),
                    scenario.cooldown_days == 1,
                    scenario.fee,
                );
                if baseline == profit {
                    "ok".to_string()
                } else {
                    mismatches += 1;
                    format!("MISMATCH (table {baseline})")
                }
            };

            println!(
                "{:<18} {:>9} {:<9} {:>14} {:>9.3} {:>10}  {}",
                scenario.name,
                days,
                strategy.label(),
                profit,
                wall,
                rss_delta,
                check
            );
        }
    }

    if mismatches > 0 {
        eprintln!("profit_probe: {mismatches} run(s) disagreed with the full table");
        process::exit(1);
    }
}

fn parse_verify_limit<I: Iterator<Item = String>>(mut args: I) -> Result<usize, String> {
    let mut limit = 512;
    while let Some(arg) = args.next() {
        let value = match arg.strip_prefix("--verify-limit=") {
            Some(value) => value.to_string(),
            None if arg == "--verify-limit" => args
                .next()
                .ok_or_else(|| "missing value after --verify-limit".to_string())?,
            None => return Err(format!("unrecognized argument '{arg}'")),
        };
        limit = value
            .parse()
            .map_err(|_| format!("verify limit must be a day count, got '{value}'"))?;
    }
    Ok(limit)
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or(0, |process| process.memory() / 1024)
}

/// Random-walk prices from a small xorshift generator, so runs are
/// reproducible without pulling `rand` into the binary.
fn deterministic_prices(len: usize, seed: u64) -> Vec<Price> {
    let mut state = seed | 1;
    let mut price: Price = 1_000;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            price += (state % 21) as Price - 10;
            price
        })
        .collect()
}

/// Full `days × buys × stance` table, independent of the engine.
fn full_table_profit(prices: &[Price], budget: Option<usize>, cooldown: bool, fee: i64) -> Profit {
    const NEG: Profit = Profit::MIN / 4;
    const FLAT: usize = 0;
    const HOLD: usize = 1;
    const COOL: usize = 2;

    let n = prices.len();
    let cap = n / 2 + 1;
    let k = budget.unwrap_or(cap).min(cap);
    // table[day][buys used][stance]
    let mut table = vec![vec![[NEG; 3]; k + 1]; n + 1];
    table[0][0][FLAT] = 0;

    for day in 0..n {
        let p = Profit::from(prices[day]);
        let f = Profit::from(fee);
        for j in 0..=k {
            let prev = table[day][j];
            let mut next = [NEG; 3];
            next[FLAT] = prev[FLAT];
            if prev[HOLD] > NEG {
                if cooldown {
                    next[COOL] = prev[HOLD] + p;
                } else {
                    next[FLAT] = next[FLAT].max(prev[HOLD] + p);
                }
            }
            if cooldown {
                next[FLAT] = next[FLAT].max(prev[COOL]);
            }
            next[HOLD] = prev[HOLD];
            if j > 0 && table[day][j - 1][FLAT] > NEG {
                next[HOLD] = next[HOLD].max(table[day][j - 1][FLAT] - p - f);
            }
            table[day + 1][j] = next;
        }
    }

    table[n]
        .iter()
        .map(|cells| cells[FLAT].max(cells[COOL]))
        .max()
        .unwrap_or(0)
        .max(0)
}
