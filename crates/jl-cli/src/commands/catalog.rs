//! `jl filters` and `jl examples`: print the catalogs the service exposes

use anyhow::{Context, Result};
use jl_jinja::{example_catalog, filter_catalog, get_filter_by_name, Example, FilterDescriptor};

use crate::cli::{CatalogOutput, ExamplesArgs, FiltersArgs, GlobalArgs};
use crate::commands::common::init_logging;

/// Execute the filters command
pub async fn execute_filters(args: &FiltersArgs, global: &GlobalArgs) -> Result<()> {
    init_logging(global.verbose);

    if let Some(name) = &args.name {
        let Some(descriptor) = get_filter_by_name(name) else {
            anyhow::bail!("Unknown filter '{}'. Run `jl filters` to list them.", name);
        };
        return match args.output {
            CatalogOutput::Json => print_json(descriptor),
            CatalogOutput::Text => {
                print_filter(descriptor);
                Ok(())
            }
        };
    }

    match args.output {
        CatalogOutput::Json => print_json(filter_catalog()),
        CatalogOutput::Text => {
            let catalog = filter_catalog();
            for (category, filters) in catalog {
                println!("{}", category);
                println!("{}", "-".repeat(category.len()));
                for filter in filters {
                    print_filter(filter);
                }
            }
            let count: usize = catalog.values().map(Vec::len).sum();
            println!("{} filters in {} categories", count, catalog.len());
            Ok(())
        }
    }
}

/// Execute the examples command
pub async fn execute_examples(args: &ExamplesArgs, global: &GlobalArgs) -> Result<()> {
    init_logging(global.verbose);

    let examples = example_catalog();
    match args.output {
        CatalogOutput::Json => print_json(examples),
        CatalogOutput::Text => {
            for example in examples {
                print_example(example);
            }
            println!("{} examples", examples.len());
            Ok(())
        }
    }
}

fn print_filter(filter: &FilterDescriptor) {
    println!("  {}", filter.name);
    println!("      {}", filter.description);
    let name_width = filter
        .inputs
        .iter()
        .map(|i| i.name.len())
        .max()
        .unwrap_or(0);
    for input in &filter.inputs {
        println!(
            "      {:<name_width$}  {:<5}  {}",
            input.name,
            input.input_type,
            input.description,
            name_width = name_width
        );
    }
    println!();
}

fn print_example(example: &Example) {
    println!("{} [{}]", example.name, example.mode);
    for line in example.template.lines() {
        println!("  | {}", line);
    }
    println!();
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
    println!("{}", json);
    Ok(())
}
