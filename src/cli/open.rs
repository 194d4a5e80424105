//! Open command: run a navigation through the route guard

use colored::Colorize;
use serde::Serialize;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::error::Result;
use crate::output::json::format_json_value;
use crate::router::{Router, find_route};

/// Outcome of opening a page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Landing {
    pub requested: String,
    pub path: &'static str,
    pub name: &'static str,
    pub redirected: bool,
}

/// Navigate `router` to `path` and describe where it ended up.
pub fn open_page(router: &mut Router, path: &str) -> Result<Landing> {
    let route = router.navigate(path)?;
    Ok(Landing {
        requested: path.to_string(),
        path: route.path,
        name: route.name,
        redirected: find_route(path).map(|r| r.path) != Some(route.path),
    })
}

/// Run the open command
pub fn run(opts: &GlobalOptions, path: &str) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;
    let landing = open_page(&mut ctx.router, path)?;

    match ctx.format {
        OutputFormat::Table => {
            if landing.redirected {
                println!(
                    "{} {} redirected to {} ({})",
                    "→".yellow(),
                    landing.requested,
                    landing.path.bold(),
                    landing.name
                );
            } else {
                println!("{} {} ({})", "✓".green(), landing.path.bold(), landing.name);
            }
        }
        OutputFormat::Json => println!("{}", format_json_value(&landing)?),
    }
    Ok(())
}
