use std::path::Path;

use chrono::Utc;
use ordext_engine::{parse_email, parse_order, VendorRegistry};
use ordext_pipeline::read_message;

pub(crate) fn run(registry: &VendorRegistry, file: &Path, enrich: bool) -> anyhow::Result<()> {
    let message = read_message(file)?;

    if enrich {
        let parsed = parse_email(registry, &message, Utc::now());
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    let outcome = parse_order(registry, &message.from, &message.subject, &message.body);
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
