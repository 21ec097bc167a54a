//! Interactive health risk assessment session
//!
//! Trains the model on synthetic data at startup, prompts for five
//! health metrics, and prints a risk summary plus advice for any
//! high-risk condition. One report per run, no retries.

use std::io::{self, BufRead, Write};

use health_risk::data::profile::InvalidInput;
use health_risk::{HealthProfile, PredictionMode, RiskModel};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("\n🔍 Ultra-Optimized Health Risk Assessor\n");

    info!("training risk model on synthetic data");
    let model = RiskModel::train(&mut rand::thread_rng(), PredictionMode::default())?;

    let profile = match read_profile() {
        Ok(profile) => profile,
        Err(InvalidInput) => {
            println!("❌ Invalid input!");
            return Ok(());
        }
    };

    let report = model.predict_risks(&profile)?;

    println!("\n📊 Risk Summary:");
    println!("{}", report.summary_lines().join("\n"));

    println!("\n📌 Top Advice:");
    let advice = report.advice_lines();
    if advice.is_empty() {
        println!("✅ All risks low!");
    } else {
        println!("{}", advice.join("\n"));
    }

    Ok(())
}

/// Prompt for the five metrics in order and validate them together.
///
/// A non-integer answer aborts before the next prompt; range checks run
/// once all five values are in. Read errors count as invalid input.
fn read_profile() -> Result<HealthProfile, InvalidInput> {
    let age = prompt("Enter Age (18-120): ")?;
    let bmi = prompt("Enter BMI (10-50): ")?;
    let glucose = prompt("Enter Glucose (70-300): ")?;
    let smoker = prompt("Smoker? (1=Yes, 0=No): ")?;
    let family = prompt("Family History? (1=Yes, 0=No): ")?;

    HealthProfile::new(age, bmi, glucose, smoker, family)
}

/// Print a prompt and parse one line of stdin as an integer
fn prompt(label: &str) -> Result<i64, InvalidInput> {
    print!("{label}");
    io::stdout().flush().map_err(|_| InvalidInput)?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|_| InvalidInput)?;
    if read == 0 {
        return Err(InvalidInput);
    }

    line.trim().parse().map_err(|_| InvalidInput)
}
