//! Services command implementation.
//!
//! This module lists the services the client knows how to quote.

use anyhow::Result;
use correios_lib::prelude::*;
use serde::Serialize;

#[derive(Serialize)]
struct ServiceEntry {
    code: &'static str,
    name: &'static str,
    description: &'static str,
}

/// List every supported service with its wire code.
pub(crate) fn list_services(json: bool) -> Result<()> {
    let entries: Vec<ServiceEntry> = ServiceCode::all()
        .iter()
        .map(|service| ServiceEntry {
            code: service.as_str(),
            name: service.name(),
            description: service.description(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{:<8} {:<28} {}", "CODE", "NAME", "DESCRIPTION");
    println!("{}", "-".repeat(66));
    for entry in &entries {
        println!("{:<8} {:<28} {}", entry.code, entry.name, entry.description);
    }

    println!("\nTotal: {} services", entries.len());
    Ok(())
}
