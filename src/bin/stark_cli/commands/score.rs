// ABOUTME: Scoring command for stark-cli
// ABOUTME: Reads one user or an array of users as JSON and prints their scoring results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use serde_json::{json, Value};
use stark_fitness::config::EngineConfig;
use stark_fitness::errors::{AppError, AppResult};
use stark_fitness::models::UserMetrics;
use std::fs;
use std::io::{self, Read};
use tracing::info;

/// Score the users in `input` (a path, or `-` for stdin)
pub fn run(config: &EngineConfig, input: &str, pretty: bool) -> AppResult<()> {
    let engine = config.build_engine()?;
    let payload = read_input(input)?;

    match serde_json::from_str::<Value>(&payload)? {
        Value::Array(items) => {
            let users = items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<Vec<UserMetrics>, _>>()?;
            info!(users = users.len(), "Scoring batch");
            print_json(&engine.calculate_batch(&users), pretty)
        }
        value @ Value::Object(_) => {
            let user: UserMetrics = serde_json::from_value(value)?;
            print_json(&engine.calculate_fitness_index(&user), pretty)
        }
        _ => Err(AppError::invalid_input(
            "expected a UserMetrics object or an array of them",
        )),
    }
}

fn read_input(input: &str) -> AppResult<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }

    fs::read_to_string(input).map_err(|e| {
        let error = if e.kind() == io::ErrorKind::NotFound {
            AppError::not_found(format!("input file {input}"))
        } else {
            AppError::storage(format!("cannot read input file {input}"))
        };
        error.with_details(json!({ "path": input })).with_source(e)
    })
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
