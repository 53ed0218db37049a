//! Thin external driver over the `skew_sa` library: subcommand dispatch,
//! input parsing, pretty-printing, benchmarking, and oracle validation.
//! None of this is part of the core's contract — it only calls the
//! library's public entry points.

use std::io::Read;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand, ValueEnum};
use rand::Rng;

#[derive(Parser)]
#[command(name = "skewsa")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the suffix array and LCP array of a file (or stdin).
    Sa {
        file: Option<PathBuf>,
        /// Treat the input as raw bytes instead of newline-separated integers.
        #[arg(long)]
        bytes: bool,
    },
    /// Print the Longest Previous Factor array of a file (or stdin).
    Lpf {
        file: Option<PathBuf>,
        #[arg(long)]
        bytes: bool,
    },
    /// Time construction over randomly generated inputs.
    Bench {
        #[arg(value_enum)]
        target: Target,
        #[arg(long, default_value_t = 100_000)]
        n: usize,
        #[arg(long, default_value_t = 5)]
        trials: usize,
        #[arg(long, default_value_t = 26)]
        alphabet: u32,
        /// Render a timing-vs-n line chart here instead of a single n.
        #[arg(long)]
        chart: Option<PathBuf>,
    },
    /// Cross-check construction against the naive oracle on random inputs.
    Validate {
        #[arg(value_enum)]
        target: Target,
        #[arg(long, default_value_t = 2_000)]
        n: usize,
        #[arg(long, default_value_t = 20)]
        trials: usize,
        #[arg(long, default_value_t = 26)]
        alphabet: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Target {
    Sa,
    Lpf,
}

fn main() {
    let cli = Cli::parse();
    let code = match cli.command {
        Command::Sa { file, bytes } => run_sa(file, bytes),
        Command::Lpf { file, bytes } => run_lpf(file, bytes),
        Command::Bench {
            target,
            n,
            trials,
            alphabet,
            chart,
        } => run_bench(target, n, trials, alphabet, chart),
        Command::Validate {
            target,
            n,
            trials,
            alphabet,
        } => run_validate(target, n, trials, alphabet),
    };
    std::process::exit(code);
}

fn read_symbols(file: Option<PathBuf>, bytes: bool) -> Result<Vec<u32>, String> {
    let mut raw = Vec::new();
    match file {
        Some(path) => {
            std::fs::File::open(&path)
                .and_then(|mut f| f.read_to_end(&mut raw))
                .map_err(|e| format!("reading {}: {e}", path.display()))?;
        }
        None => {
            std::io::stdin()
                .read_to_end(&mut raw)
                .map_err(|e| format!("reading stdin: {e}"))?;
        }
    }

    if bytes {
        return Ok(raw.into_iter().map(|b| b as u32).collect());
    }

    String::from_utf8(raw)
        .map_err(|e| format!("input is not valid UTF-8 and --bytes was not passed: {e}"))?
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.trim()
                .parse::<u32>()
                .map_err(|e| format!("parsing symbol {line:?}: {e}"))
        })
        .collect()
}

fn run_sa(file: Option<PathBuf>, bytes: bool) -> i32 {
    let s = match read_symbols(file, bytes) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };
    let sa = match skew_sa::try_suffix_array(&s) {
        Ok(sa) => sa,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };
    let sar = skew_sa::reverse_sa(&sa);
    let lcp = skew_sa::lcp_array(&s, &sa, &sar);
    println!("SA:  {sa:?}");
    println!("LCP: {lcp:?}");
    0
}

fn run_lpf(file: Option<PathBuf>, bytes: bool) -> i32 {
    let s = match read_symbols(file, bytes) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };
    match skew_sa::try_lpf_array(&s) {
        Ok(lpf) => {
            println!("LPF: {lpf:?}");
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}

fn random_symbols(n: usize, alphabet: u32) -> Vec<u32> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(1..=alphabet)).collect()
}

fn run_bench(target: Target, n: usize, trials: usize, alphabet: u32, chart: Option<PathBuf>) -> i32 {
    // With --chart, sweep a geometric series of sizes up to n instead of
    // timing a single n, so there's a curve to plot.
    let sizes: Vec<usize> = match &chart {
        Some(_) => [100, 1_000, 10_000, 100_000, 1_000_000]
            .into_iter()
            .filter(|&sz| sz <= n)
            .chain(std::iter::once(n))
            .collect(),
        None => vec![n],
    };

    println!("n,alphabet,trial,micros");
    let mut points = Vec::new();
    for &size in &sizes {
        let mut total = Duration::ZERO;
        for trial in 0..trials {
            let s = random_symbols(size, alphabet);
            let start = Instant::now();
            match target {
                Target::Sa => {
                    skew_sa::suffix_array(&s);
                }
                Target::Lpf => {
                    skew_sa::lpf_array(&s);
                }
            }
            let elapsed = start.elapsed();
            total += elapsed;
            println!("{size},{alphabet},{trial},{}", elapsed.as_micros());
        }
        points.push((size, total / trials.max(1) as u32));
    }

    if let Some(path) = chart {
        if let Err(e) = render_chart(&path, &points) {
            eprintln!("error rendering chart: {e}");
            return 1;
        }
    }
    0
}

fn render_chart(path: &PathBuf, points: &[(usize, Duration)]) -> Result<(), Box<dyn std::error::Error>> {
    use plotters::prelude::*;

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let max_n = points.iter().map(|(n, _)| *n as f64).fold(1.0, f64::max);
    let max_us = points
        .iter()
        .map(|(_, d)| d.as_micros() as f64)
        .fold(1.0, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("construction time vs n", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..max_n, 0f64..max_us)?;

    chart.configure_mesh().draw()?;
    chart.draw_series(LineSeries::new(
        points.iter().map(|(n, d)| (*n as f64, d.as_micros() as f64)),
        &RED,
    ))?;
    root.present()?;
    Ok(())
}

fn run_validate(target: Target, n: usize, trials: usize, alphabet: u32) -> i32 {
    for trial in 0..trials {
        let s = random_symbols(n, alphabet);
        let ok = match target {
            Target::Sa => skew_sa::suffix_array(&s) == naive_suffix_array(&s),
            Target::Lpf => skew_sa::lpf_array(&s) == naive_lpf(&s),
        };
        if !ok {
            eprintln!("validation failed on trial {trial} with input {s:?}");
            return 1;
        }
    }
    println!("validated {trials} trials of n={n}, alphabet={alphabet}: ok");
    0
}

fn naive_suffix_array(s: &[u32]) -> Vec<u32> {
    let mut sa: Vec<u32> = (0..s.len() as u32).collect();
    sa.sort_by(|&a, &b| s[a as usize..].cmp(&s[b as usize..]));
    sa
}

fn naive_lpf(s: &[u32]) -> Vec<u32> {
    let n = s.len();
    let mut lpf = vec![0u32; n];
    for i in 0..n {
        let mut best = 0usize;
        for j in 0..i {
            let len = s[j..].iter().zip(&s[i..]).take_while(|(a, b)| a == b).count();
            best = best.max(len);
        }
        lpf[i] = best as u32;
    }
    lpf
}
