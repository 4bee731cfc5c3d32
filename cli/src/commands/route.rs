use super::AppContext;
use anyhow::Result;
use fastpath_core::models::Route;

pub fn handle_route(ctx: AppContext, source: &str, destination: &str, json: bool) -> Result<()> {
    let planner = ctx.into_planner();
    let route = planner.find_fastest_path(source, destination)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&route)?);
    } else {
        print!("{}", render(&route));
    }
    Ok(())
}

fn render(route: &Route) -> String {
    let mut out = format!("{}\n", route.path.join(" -> "));
    for edge in &route.edges {
        out.push_str(&format!(
            "  {} -> {}: {} min\n",
            edge.from, edge.to, edge.weight
        ));
    }
    out.push_str(&format!(
        "Total: {} min over {} road(s)\n",
        route.total_weight,
        route.hops()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastpath_core::models::RoadEdge;

    #[test]
    fn renders_each_leg_and_total() {
        let route = Route {
            path: vec!["TBILISI".into(), "BATUMI".into(), "GONIO".into()],
            edges: vec![
                RoadEdge::new("TBILISI", "BATUMI", 360),
                RoadEdge::new("BATUMI", "GONIO", 45),
            ],
            total_weight: 405,
        };
        assert_eq!(
            render(&route),
            "TBILISI -> BATUMI -> GONIO\n  TBILISI -> BATUMI: 360 min\n  BATUMI -> GONIO: 45 min\nTotal: 405 min over 2 road(s)\n"
        );
    }

    #[test]
    fn renders_stationary_route() {
        assert_eq!(
            render(&Route::stationary("GONIO")),
            "GONIO\nTotal: 0 min over 0 road(s)\n"
        );
    }
}
