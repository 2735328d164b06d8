use log::{debug, info};
use std::env;

use recipe_catalog::{CatalogConfig, CatalogError, SortOption, ViewStatus};

const USAGE: &str = "Usage: recipe-catalog [--search TEXT] [--cuisine NAME] [--sort a-z|z-a|random]";

#[derive(Debug, Default)]
struct Options {
    search: Option<String>,
    cuisine: Option<String>,
    sort: Option<SortOption>,
}

fn parse_args(args: &[String]) -> Result<Options, CatalogError> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(flag) = iter.next() {
        let value = iter
            .next()
            .ok_or_else(|| CatalogError::Usage(format!("Missing value for {}\n{}", flag, USAGE)))?;

        match flag.as_str() {
            "--search" => options.search = Some(value.clone()),
            "--cuisine" => options.cuisine = Some(value.clone()),
            "--sort" => options.sort = Some(value.parse().map_err(CatalogError::Usage)?),
            other => {
                return Err(CatalogError::Usage(format!(
                    "Unknown argument: {}\n{}",
                    other, USAGE
                )))
            }
        }
    }

    Ok(options)
}

#[tokio::main]
async fn main() -> Result<(), CatalogError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;

    let config = CatalogConfig::load()?;
    debug!("{:#?}", config);
    info!("Loading recipes from {}", config.endpoint);

    let mut vm = recipe_catalog::view_model(&config)?;
    if let Some(search) = options.search {
        vm.set_search_text(search);
    }
    if let Some(cuisine) = options.cuisine {
        vm.set_selected_cuisine(cuisine);
    }
    if let Some(sort) = options.sort {
        vm.set_sort_option(sort);
    }

    vm.fetch_recipes().await;

    match vm.status() {
        ViewStatus::Loading => println!("Still loading..."),
        ViewStatus::Error(message) => println!("{}", message),
        ViewStatus::NoResults => println!("{}", recipe_catalog::viewmodel::NO_RESULTS_MESSAGE),
        ViewStatus::Content => {
            println!("Cuisines: {}", vm.available_cuisines().join(", "));
            println!("Sorted {}", vm.sort_option());
            for recipe in vm.visible_recipes() {
                println!("{:<45} {}", recipe.name(), recipe.cuisine());
            }
        }
    }

    Ok(())
}
