use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;
use varbvs_rs::prelude::*;

const TOLERANCE: f64 = 1e-10;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationCase {
    name: String,
    notes: String,
    input: CaseInput,
    expected: CaseOutput,
}

#[derive(Debug, Deserialize, Serialize)]
struct CaseInput {
    x: Vec<f64>,
    d: Vec<f64>,
    xy: f64,
    xd: Option<f64>,
    xdx: f64,
    sa: f64,
    logodds: f64,
    alpha: f64,
    mu: f64,
    xr: Vec<f64>,
    #[serde(default)]
    dzr: Option<Vec<f64>>,
    #[serde(default)]
    ncov: usize,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
struct CaseOutput {
    alpha: f64,
    mu: f64,
    xr: Vec<f64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let input_dir = Path::new("cases");
    if !input_dir.exists() {
        eprintln!("Case directory {:?} does not exist.", input_dir);
        return Ok(());
    }

    let mut failures = 0;
    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            if !process_file(&path)? {
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} validation case(s) failed", failures).into());
    }
    Ok(())
}

fn process_file(path: &Path) -> Result<bool, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    let case: ValidationCase = serde_json::from_str(&content)?;
    let got = run_case(&case.input);

    let ok = close(got.alpha, case.expected.alpha)
        && close(got.mu, case.expected.mu)
        && got.xr.len() == case.expected.xr.len()
        && got
            .xr
            .iter()
            .zip(&case.expected.xr)
            .all(|(&a, &b)| close(a, b));

    if ok {
        println!("PASS {} ({})", case.name, case.notes);
    } else {
        println!(
            "FAIL {}\n  expected: {}\n  got:      {}",
            case.name,
            serde_json::to_string(&case.expected)?,
            serde_json::to_string(&got)?
        );
    }
    Ok(ok)
}

fn run_case(input: &CaseInput) -> CaseOutput {
    let mut alpha = input.alpha;
    let mut mu = input.mu;
    let mut xr = input.xr.clone();

    match &input.dzr {
        None => update(
            &input.x,
            input.xy,
            input.xd.unwrap_or(0.0),
            input.xdx,
            &input.d,
            input.sa,
            input.logodds,
            &mut alpha,
            &mut mu,
            &mut xr,
        ),
        Some(dzr) => {
            let mut buffer = UpdateBuffer::new(input.ncov);
            let (a, b) = buffer.split_mut();
            update_with_covariates(
                &input.x,
                input.xy,
                input.xdx,
                &input.d,
                dzr,
                input.sa,
                input.logodds,
                &mut alpha,
                &mut mu,
                &mut xr,
                a,
                b,
            );
        }
    }

    CaseOutput { alpha, mu, xr }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE * (1.0 + b.abs())
}
