mod input;
mod output;
mod provenance;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rotorbal::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "rotorbal")]
#[command(about = "Single-plane rotor balancing runner")]
struct Cmd {
    /// Optional ticket id; propagated to outputs and logs
    #[arg(long, global = true)]
    ticket: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Balance discs read from CSV (disc_id, disc_magnitude, disc_angle)
    Balance {
        #[arg(long)]
        discs: PathBuf,
        #[arg(long)]
        shaft_magnitude: f64,
        #[arg(long, allow_hyphen_values = true)]
        shaft_angle: f64,
        /// Interpret every angle (shaft and CSV) as degrees
        #[arg(long)]
        degrees: bool,
        /// Write the JSON result here (plus a provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Balance the built-in reference rotor
    Sample {
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Command-line overrides for every `BalanceCfg` field.
#[derive(Args, Clone, Debug, Serialize)]
struct SearchArgs {
    #[arg(long, default_value_t = BalanceCfg::default().iteration_budget)]
    iterations: usize,
    #[arg(long, default_value_t = BalanceCfg::default().restart_count)]
    restarts: usize,
    #[arg(long, default_value_t = BalanceCfg::default().noise_initial)]
    noise: f64,
    #[arg(long, default_value_t = BalanceCfg::default().noise_decay)]
    noise_decay: f64,
    #[arg(long, default_value_t = BalanceCfg::default().convergence_epsilon)]
    epsilon: f64,
    #[arg(long, default_value_t = BalanceCfg::default().patience)]
    patience: usize,
    #[arg(long, default_value_t = BalanceCfg::default().accept_tolerance)]
    accept_tolerance: f64,
    #[arg(long)]
    seed: Option<u64>,
    /// Run restarts on all cores
    #[arg(long)]
    parallel: bool,
    /// Cancel the search after this many milliseconds and keep the best so far
    #[arg(long)]
    timeout_ms: Option<u64>,
}

impl SearchArgs {
    fn to_cfg(&self) -> BalanceCfg {
        BalanceCfg {
            iteration_budget: self.iterations,
            restart_count: self.restarts,
            noise_initial: self.noise,
            noise_decay: self.noise_decay,
            convergence_epsilon: self.epsilon,
            patience: self.patience,
            accept_tolerance: self.accept_tolerance,
            random_seed: self.seed,
            parallel: self.parallel,
            record_trace: false,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Balance {
            discs,
            shaft_magnitude,
            shaft_angle,
            degrees,
            out,
            search,
        } => {
            let rows = input::read_disc_rows(&discs, degrees)?;
            let shaft_angle = if degrees {
                shaft_angle.to_radians()
            } else {
                shaft_angle
            };
            let set = build(shaft_magnitude, shaft_angle, rows)
                .with_context(|| format!("building rotor from {}", discs.display()))?;
            run(&set, &search, out.as_deref(), cmd.ticket)
        }
        Action::Sample { out, search } => {
            run(&sample_rotor(), &search, out.as_deref(), cmd.ticket)
        }
        Action::Report => report(cmd.ticket),
    }
}

fn run(
    set: &UnbalanceSet,
    search: &SearchArgs,
    out: Option<&Path>,
    ticket: Option<String>,
) -> Result<()> {
    tracing::info!(discs = set.len(), ticket = ?ticket, "balance");
    let cfg = search.to_cfg();
    let cancel = CancelToken::new();
    if let Some(ms) = search.timeout_ms {
        let timer = cancel.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(ms));
            timer.cancel();
        });
    }
    let res = optimize_with_cancel(set, &cfg, &cancel)?;

    println!("Optimal Angles (radians): {:?}", res.angles);
    println!("Final Mass Balance: {}", res.residual);
    println!(
        "initial={} converged={} cancelled={} iterations={} seed={}",
        res.initial_residual, res.converged, res.cancelled, res.iterations, res.seed
    );
    for row in polar_rows(&res.optimal) {
        println!(
            "  {:<10} {:>9.3} deg  {:.6}",
            row.label,
            row.angle_deg(),
            row.magnitude
        );
    }
    if !res.converged {
        tracing::warn!(
            iterations = res.iterations,
            "search stopped before convergence; result may not be optimal"
        );
    }

    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let doc = output::ResultDoc::new(set, &res);
        std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let mut params = serde_json::to_value(search)?;
        params["resolved_seed"] = serde_json::json!(res.seed);
        let sidecar = provenance::write_sidecar(out, provenance::RunRecord::new(params, ticket))?;
        tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "result_written");
    }
    Ok(())
}

fn report(ticket: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "rotorbal_version": rotorbal::VERSION,
        "ticket": ticket,
        "params": BalanceDefaults::from(BalanceCfg::default()),
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// Serializable view of the library defaults.
#[derive(Serialize)]
struct BalanceDefaults {
    iteration_budget: usize,
    restart_count: usize,
    noise_initial: f64,
    noise_decay: f64,
    convergence_epsilon: f64,
    patience: usize,
    accept_tolerance: f64,
}

impl From<BalanceCfg> for BalanceDefaults {
    fn from(c: BalanceCfg) -> Self {
        Self {
            iteration_budget: c.iteration_budget,
            restart_count: c.restart_count,
            noise_initial: c.noise_initial,
            noise_decay: c.noise_decay,
            convergence_epsilon: c.convergence_epsilon,
            patience: c.patience,
            accept_tolerance: c.accept_tolerance,
        }
    }
}
