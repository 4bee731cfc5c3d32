use super::AppContext;
use anyhow::{Context, Result};
use fastpath_core::models::{Road, RoadRequest};
use std::path::Path;

pub fn handle_road_add(ctx: &AppContext, from: &str, to: &str, minutes: i64) -> Result<()> {
    let road = ctx.store.upsert_road(&RoadRequest::new(from, to, minutes))?;
    println!("{}", describe(&road));
    Ok(())
}

pub fn handle_road_import(ctx: &AppContext, file: &Path) -> Result<()> {
    let requests = read_requests(file)?;
    let saved = ctx.store.upsert_roads(&requests)?;
    for road in &saved {
        println!("{}", describe(road));
    }
    println!("Saved {} road(s).", saved.len());
    Ok(())
}

pub fn handle_road_list(ctx: &AppContext, json: bool) -> Result<()> {
    let roads = ctx.store.list_roads()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&roads)?);
        return Ok(());
    }
    if roads.is_empty() {
        println!("No roads stored.");
        return Ok(());
    }
    for road in &roads {
        println!("{}", describe(road));
    }
    Ok(())
}

fn read_requests(file: &Path) -> Result<Vec<RoadRequest>> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array of road requests", file.display()))
}

fn describe(road: &Road) -> String {
    format!(
        "#{} {} -> {} ({} min)",
        road.id, road.from_city, road.to_city, road.travel_time_minutes
    )
}
