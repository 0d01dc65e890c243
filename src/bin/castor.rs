// src/bin/castor.rs

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use castor::cli::{Cli, Commands};
use castor::{BestOverload, RatingOrder, TypeContext, TypesysError};

fn main() -> ExitCode {
    // Initialize tracing if CASTOR_LOG is set
    if let Ok(filter) = EnvFilter::try_from_env("CASTOR_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Cast { from, to } => run_cast(&from, &to),
        Commands::Coerce { types } => run_coerce(&types),
        Commands::Resolve {
            sig,
            overloads,
            best,
            lexicographic,
        } => run_resolve(&sig, &overloads, best, lexicographic),
        Commands::Demo => run_demo(),
    }
}

fn report(err: TypesysError) -> ExitCode {
    eprintln!("{:?}", miette::Report::new(err));
    ExitCode::FAILURE
}

fn run_cast(from: &str, to: &str) -> ExitCode {
    let mut ctx = TypeContext::seeded();
    println!("{}", ctx.explain_cast_names(from, to));
    ExitCode::SUCCESS
}

fn run_coerce(names: &[String]) -> ExitCode {
    let mut ctx = TypeContext::seeded();
    let typeset: Vec<_> = names.iter().map(|n| ctx.get_type(n)).collect();
    match ctx.coerce(&typeset) {
        Ok(outcome) => {
            println!("{}", ctx.explain_coerce(outcome));
            ExitCode::SUCCESS
        }
        Err(err) => report(err),
    }
}

fn run_resolve(sig: &[String], versions: &[String], best: bool, lexicographic: bool) -> ExitCode {
    let mut ctx = TypeContext::seeded();
    if lexicographic {
        ctx.set_rating_order(RatingOrder::Lexicographic);
    }

    let sig: Vec<_> = sig.iter().map(|n| ctx.get_type(n)).collect();
    let overloads: Vec<_> = versions
        .iter()
        .flat_map(|row| row.split(','))
        .map(|n| ctx.get_type(n.trim()))
        .collect();

    if best {
        match ctx.select_best_overload(&sig, &overloads) {
            Ok(BestOverload::Unique(i)) => println!("best {i}"),
            Ok(BestOverload::Ambiguous(n)) => println!("best ambiguous ({n} tied)"),
            Ok(BestOverload::NoMatch) => println!("best none"),
            Err(err) => return report(err),
        }
    } else {
        match ctx.select_overload(&sig, &overloads) {
            Ok(selected) => {
                println!("selected {}", selected.len());
                for (i, v) in selected.iter().enumerate() {
                    println!("i = {i} | {v}");
                }
            }
            Err(err) => return report(err),
        }
    }
    ExitCode::SUCCESS
}

/// Smoke walkthrough: a handful of cast verdicts, one coerce, and an
/// overload resolution over the seeded lattice.
fn run_demo() -> ExitCode {
    let mut ctx = TypeContext::seeded();

    for (from, to) in [
        ("int32", "float32"),
        ("int32", "int32"),
        ("int32", "int64"),
        ("int64", "int16"),
        ("uint32", "uint64"),
        ("uint32", "int64"),
        ("int64", "uint16"),
    ] {
        println!("{}", ctx.explain_cast_names(from, to));
    }

    let typeset = [
        ctx.get_type("int32"),
        ctx.get_type("int64"),
        ctx.get_type("boolean"),
    ];
    match ctx.coerce(&typeset) {
        Ok(outcome) => println!("{}", ctx.explain_coerce(outcome)),
        Err(err) => return report(err),
    }

    let sig = [ctx.get_type("int32"), ctx.get_type("float32")];
    let overloads = [
        ctx.get_type("float32"),
        ctx.get_type("float32"),
        ctx.get_type("int32"),
        ctx.get_type("int32"),
        ctx.get_type("complex64"),
        ctx.get_type("complex64"),
    ];

    match ctx.select_overload(&sig, &overloads) {
        Ok(selected) => {
            println!("selected {}", selected.len());
            for (i, v) in selected.iter().enumerate() {
                println!("i = {i} | {v}");
            }
        }
        Err(err) => return report(err),
    }

    match ctx.select_best_overload(&sig, &overloads) {
        Ok(BestOverload::Unique(i)) => println!("best {i}"),
        Ok(BestOverload::Ambiguous(n)) => println!("best ambiguous ({n} tied)"),
        Ok(BestOverload::NoMatch) => println!("best none"),
        Err(err) => return report(err),
    }

    ExitCode::SUCCESS
}
