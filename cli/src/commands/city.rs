use super::AppContext;
use anyhow::Result;

pub fn handle_city_list(ctx: &AppContext) -> Result<()> {
    let cities = ctx.store.list_cities()?;
    if cities.is_empty() {
        println!("No cities stored.");
    }
    for city in cities {
        println!("#{} {}", city.id, city.name);
    }
    Ok(())
}
