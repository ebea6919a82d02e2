// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use tracing_subscriber::EnvFilter;

use the_sifter::config::{load_config_file, BuilderOptions};
use the_sifter::engine::{BuildContext, ExecutionMode, Services, TypeRegistry};
use the_sifter::observability::TracingHookContext;
use the_sifter::traits::HookContext;
use the_sifter::Object;

/// Demo: load a sifter document, build its filter and processor, and run
/// every input through both.
/// Usage: cargo run --example yaml_sifter_demo [config_file] [inputs...]
/// Set RUST_LOG=debug to see every evaluation.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = env::args().skip(1);
    let config_file = args.next().unwrap_or_else(|| "configs/text-sifter.yaml".to_string());
    let mut inputs: Vec<String> = args.collect();
    if inputs.is_empty() {
        inputs = ["#shout", "wow!", "hello world", "xyz marks the spot"]
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    println!("=== YAML-Configured Sifter Demo ===\n");
    println!("Loading configuration from {}...", config_file);
    let root = load_config_file(&config_file, "Sifter")
        .with_context(|| format!("Failed to load configuration '{}'", config_file))?;

    let options = match root.get("Options") {
        Some(section) => BuilderOptions::from_section(&section)?,
        None => BuilderOptions::default(),
    };
    let mut ctx = BuildContext::new(Arc::new(TypeRegistry::with_builtins())).with_options(options);

    let filter = root.get("Filter").and_then(|section| ctx.build_predicate(&section));
    let processor = root.get("Processor").and_then(|section| ctx.build_processor(&section));

    for diagnostic in ctx.diagnostics().entries() {
        println!("- {}", diagnostic);
    }
    if ctx.diagnostics().has_errors() {
        return Err(anyhow!("{} build error(s)", ctx.diagnostics().error_count()));
    }

    let hooks: Arc<dyn HookContext> = Arc::new(TracingHookContext::new());
    for mode in [ExecutionMode::Hybrid, ExecutionMode::ForceAsync] {
        let services = Services::new().with_execution_mode(mode);
        let filter = filter.as_ref().and_then(|f| f.create_hook(&hooks, &services));
        let processor = processor.as_ref().and_then(|p| p.create_hook(&hooks, &services));

        println!("\n=== {:?} ===", mode);
        if let Some(filter) = &filter {
            println!("Filter runs {}", if filter.is_sync() { "synchronously" } else { "asynchronously" });
        }

        for input in &inputs {
            let object = Object::from(input.as_str());
            let passed = match &filter {
                Some(filter) => filter.evaluate(&object).await,
                None => true,
            };
            let output = match &processor {
                Some(processor) => processor.process(object).await,
                None => None,
            };
            let output = output
                .as_ref()
                .and_then(Object::as_text)
                .map(|text| format!("'{}'", text))
                .unwrap_or_else(|| "void".to_string());
            println!("- '{}': filter {} -> {}", input, if passed { "passes" } else { "rejects" }, output);
        }
    }

    Ok(())
}
