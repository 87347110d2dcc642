// ABOUTME: Normative table commands for stark-cli
// ABOUTME: Validates a table and prints a summary, or prints the effective table as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use stark_fitness::config::EngineConfig;
use stark_fitness::errors::AppResult;
use stark_fitness::normative::NormativeData;
use tracing::info;

/// Load and validate the configured table, then print a summary
pub fn validate(config: &EngineConfig) -> AppResult<()> {
    let data = config.load_normative_data()?;
    info!("Normative table is valid");
    display_summary(config, &data);
    Ok(())
}

/// Print the configured table in the asset format
pub fn show(config: &EngineConfig) -> AppResult<()> {
    let data = config.load_normative_data()?;
    println!("{}", serde_json::to_string_pretty(&data.to_json_value())?);
    Ok(())
}

fn display_summary(config: &EngineConfig, data: &NormativeData) {
    let metadata = data.metadata();
    let source = config
        .normative_data_path
        .as_ref()
        .map_or_else(|| "built-in".to_owned(), |path| path.display().to_string());

    println!("Normative table OK ({source})");
    println!("  Version:      {}", metadata.version);
    println!("  Source:       {}", metadata.source);
    println!("  Last updated: {}", metadata.last_updated);

    let balanced = data.weights_balanced(config.weight_sum_tolerance);
    println!(
        "  Weights:      {} domains, sum {:.3}{}",
        data.domain_weights().len(),
        data.weight_sum(),
        if balanced { "" } else { " (not 1.0, index renormalizes)" }
    );
    for (domain, weight) in data.domain_weights() {
        let stats = data
            .stats_for(*domain)
            .map_or_else(String::new, |s| format!("  mean {:.1} / std {:.1}", s.mean, s.std));
        println!("    {:<10} {weight:.2}{stats}", domain.as_str());
    }

    for gender in data.genders() {
        let groups = data.norms_for(gender).unwrap_or_default();
        println!("  VO2max norms: {gender} ({} age groups)", groups.len());
        for group in groups {
            let label = group.age_range.to_string();
            println!(
                "    {label:<6} mean {:.1} / std {:.1}",
                group.mean, group.std_dev
            );
        }
    }
}
