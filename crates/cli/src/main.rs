use clap::{Parser, Subcommand};
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cse_core::{Scenario, ThreadJitter};
use cse_types::{ClauseOption, ContractType, InflationTier};

#[derive(Parser)]
#[command(name = "cse")]
#[command(about = "Contract scenario explorer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the contracts in the catalog
    Contracts,
    /// Show a contract's levers and negotiable clauses
    Show {
        /// Contract type (hospital, anesthesia, home_health)
        contract: String,
    },
    /// Run a what-if simulation and print the 12-month projection
    Simulate {
        /// Contract type (hospital, anesthesia, home_health)
        contract: String,
        /// Lever overrides as id=value (e.g. base=4.5), repeatable
        #[arg(long = "lever")]
        levers: Vec<String>,
        /// Inflation tier (low, med, high)
        #[arg(long)]
        inflation: Option<String>,
        /// Clause decisions as clause=option (e.g. implant=balanced), repeatable
        #[arg(long = "decide")]
        decisions: Vec<String>,
        /// Draw fresh benchmark jitter instead of the input-seeded default
        #[arg(long)]
        thread_jitter: bool,
        /// Emit the full outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render the contract document with applied clause decisions
    Document {
        /// Contract type (hospital, anesthesia, home_health)
        contract: String,
        /// Clause decisions as clause=option, repeatable
        #[arg(long = "decide")]
        decisions: Vec<String>,
        /// Publish the decisions before rendering
        #[arg(long)]
        apply: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("cse=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Contracts) => {
            for spec in cse_catalog::catalog() {
                println!(
                    "{:<12} {} ({})",
                    spec.contract_type, spec.display.name, spec.display.category
                );
            }
        }
        Some(Commands::Show { contract }) => {
            let contract_type = ContractType::from_str(&contract)?;
            show_contract(contract_type);
        }
        Some(Commands::Simulate {
            contract,
            levers,
            inflation,
            decisions,
            thread_jitter,
            json,
        }) => {
            let contract_type = ContractType::from_str(&contract)?;
            let mut scenario = Scenario::new(contract_type);

            for pair in &levers {
                let (id, value) = split_pair(pair)?;
                let index = scenario
                    .spec()
                    .lever_index(id)
                    .ok_or_else(|| format!("unknown lever id '{id}'"))?;
                scenario.set_lever(index, value.parse()?)?;
            }
            if let Some(tier) = inflation {
                scenario.set_inflation(InflationTier::from_str(&tier)?);
            }
            for pair in &decisions {
                let (clause, option) = split_pair(pair)?;
                scenario.set_decision(clause, ClauseOption::from_str(option)?)?;
            }

            let outcome = if thread_jitter {
                scenario.evaluate_with(&mut ThreadJitter)
            } else {
                scenario.evaluate()
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                print_outcome(&scenario, &outcome);
            }
        }
        Some(Commands::Document {
            contract,
            decisions,
            apply,
        }) => {
            let contract_type = ContractType::from_str(&contract)?;
            let mut scenario = Scenario::new(contract_type);
            for pair in &decisions {
                let (clause, option) = split_pair(pair)?;
                scenario.set_decision(clause, ClauseOption::from_str(option)?)?;
            }
            if apply {
                scenario.apply();
            }
            print_document(&scenario);
        }
        None => {
            println!("cse: run with --help to see available commands");
        }
    }

    Ok(())
}

/// Splits a `key=value` argument into its two halves.
fn split_pair(pair: &str) -> Result<(&str, &str), String> {
    pair.split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{pair}'"))
}

fn show_contract(contract_type: ContractType) {
    let spec = cse_catalog::contract(contract_type);
    println!("{} ({})", spec.display.name, spec.display.category);
    println!("  Baseline: ${}k/month", spec.baseline_monthly_k);

    println!("  Levers:");
    for lever in &spec.levers {
        println!(
            "    {:<10} {} [{}..{} step {}, default {}{}]",
            lever.id, lever.label, lever.min, lever.max, lever.step, lever.default_value, lever.unit
        );
    }

    println!("  Clauses:");
    for clause in &spec.clauses {
        println!(
            "    {:<12} {} [{}] — currently: {}",
            clause.id, clause.title, clause.risk_tier, clause.current_summary
        );
        println!("      Market: {}", clause.market_note);
        for option in &clause.options {
            let annual = cse_core::annual_impact(spec, clause, option.option);
            println!(
                "      {:<14} {:<20} {:<12} ${:.0}/yr",
                option.option, option.label, option.impact_note, annual
            );
        }
    }
}

fn print_outcome(scenario: &Scenario, outcome: &cse_core::Outcome) {
    let spec = scenario.spec();
    println!("{} — 12-month projection", spec.display.name);
    println!(
        "  Levers: {:?}  Inflation: {}",
        scenario.lever_values(),
        scenario.inflation()
    );
    println!();
    println!("  {:<5} {:>12} {:>12}", "Month", "Proposed $k", "Market $k");
    for point in &outcome.projection {
        println!(
            "  {:<5} {:>12} {:>12}",
            point.month, point.proposed_k, point.market_k
        );
    }
    println!();
    println!("  Total proposed: ${}k", outcome.total_proposed_k);
    println!("  Total market:   ${}k", outcome.total_market_k);
    println!("  Variance:       ${}k", outcome.variance_k);
    println!("  Risk level:     {}", outcome.risk);
    println!("  Clause impacts (annualized):");
    for (clause_id, impact) in &outcome.clause_impacts {
        println!("    {:<12} ${:.0}", clause_id, impact);
    }
}

fn print_document(scenario: &Scenario) {
    let spec = scenario.spec();
    println!("SERVICE AGREEMENT — {}", spec.display.name);
    println!(
        "  Status: {}",
        if scenario.is_published() {
            "amended"
        } else {
            "original"
        }
    );
    for rendering in scenario.document_view() {
        println!();
        if rendering.changed {
            println!("  {} [MODIFIED]", rendering.title);
            println!("    (was) {}", rendering.original_text);
            println!("    (now) {}", rendering.applied_text);
        } else {
            println!("  {}", rendering.title);
            println!("    {}", rendering.applied_text);
        }
    }
}
