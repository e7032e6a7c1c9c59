//! Tag mutations: add, remove, set, clear, raw string, auto.

use anyhow::{Context, Result};
use colored::Colorize;

use wstag_detector::Classifier;
use wstag_ipc::I3Directory;
use wstag_mutator::{MutationOutcome, Operation, TagMutator, Target};

use super::Settings;

pub fn run(settings: &Settings, target: Target, op: Operation, dry_run: bool) -> Result<()> {
    let registry = settings.registry();
    // Reject unknown tags before looking for the window manager at all.
    registry.resolve_all(op.tag_names())?;

    let classifier = Classifier::with_specs(&settings.config.rules)
        .context("invalid classification rule in config")?;
    let directory = I3Directory::from_config(&settings.config)
        .context("failed to reach the window manager")?;

    let outcome = TagMutator::new(&directory, &registry, &classifier, settings.codec())
        .dry_run(dry_run)
        .run(target, &op)?;

    report(&outcome);
    Ok(())
}

fn report(outcome: &MutationOutcome) {
    if outcome.renamed {
        println!(
            "{} '{}' → '{}'",
            "renamed".green(),
            outcome.old_name,
            outcome.new_name
        );
    } else {
        println!(
            "{} would rename '{}' → '{}'",
            "[dry-run]".yellow(),
            outcome.old_name,
            outcome.new_name
        );
    }
}
