use crate::source;
use anyhow::Result;
use interlang_engine::{build_catalog, filter_catalog};
use std::path::Path;

pub fn run(query: &str, links: &Path) -> Result<()> {
    let payload = source::load_payload(links)?;
    let build = build_catalog(&payload.languages, &payload.variants);
    let state = filter_catalog(&build.catalog, query);

    println!(
        "{} of {} records match {:?}",
        state.visible_count(),
        build.catalog.total_records(),
        query
    );

    for (group, vis) in build.catalog.groups.iter().zip(&state.groups) {
        if vis.base {
            println!("  {} — {}", group.record.code, group.record.autonym);
        }
        for (variant, &visible) in group.variants.iter().zip(&vis.variants) {
            if visible {
                println!("    {} — {}", variant.code, variant.autonym);
            }
        }
    }
    Ok(())
}
