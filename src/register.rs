//! Registration orchestration.
//!
//! Sequences the one-shot flow for a single file:
//! extract → validate → duplicate lookup → conditional insert → report.
//! Errors never escape unexplained: input problems and validation failures
//! are reported and exit cleanly, extraction and store failures propagate
//! as fatal. The store handle is closed on every path once connected.

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::extract;
use crate::store::RegistryStore;
use crate::validate;

pub async fn run_register(config: &Config, path: &Path) -> Result<()> {
    // Only real files are supported; no registry contact for bad input.
    if !path.exists() {
        println!("{} does not exist.", path.display());
        return Ok(());
    }
    if path.is_dir() {
        println!(
            "{} is a directory. Only one file is processed per invocation.",
            path.display()
        );
        return Ok(());
    }

    // The file can vanish between the check above and here; extraction
    // failure is fatal and nothing has been persisted.
    let record = extract::extract(config, path)?;

    let validation = validate::validate(&record);
    if !validation.ok {
        println!(
            "Cannot register {}; problem(s) found:",
            record.full_path().display()
        );
        for diagnostic in &validation.diagnostics {
            println!(" - {}", diagnostic);
        }
        return Ok(());
    }
    if !validation.diagnostics.is_empty() {
        println!("Warnings:");
        for diagnostic in &validation.diagnostics {
            println!(" - {}", diagnostic);
        }
    }

    let store = RegistryStore::connect(config).await?;

    let copies = match store.find_by_identity(record.size, &record.sha256).await {
        Ok(copies) => copies,
        Err(e) => {
            store.close().await;
            return Err(e.into());
        }
    };

    if !copies.is_empty() {
        println!("Identical content is already registered:");
        for copy in &copies {
            println!("on {} : {}", copy.host, copy.full_path().display());
        }
        store.close().await;
        return Ok(());
    }

    let inserted = store.insert(&record).await;
    store.close().await;

    match inserted {
        Ok(()) => {
            println!("{} is unique and has been added to the registry.", record.name);
            Ok(())
        }
        Err(e) => {
            println!("{} was not added.", record.name);
            Err(e.into())
        }
    }
}
