//! Build the route table

use anyhow::Result;
use std::path::Path;

use crate::Site;

/// Build routes for every content type; write them to `output`, or to
/// stdout when no output is given
pub fn run(site: &Site, output: Option<&Path>) -> Result<()> {
    let start = std::time::Instant::now();
    let table = site.routes()?;

    match output {
        Some(path) => {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                site.base_dir.join(path)
            };
            table.write(&path)?;
            println!("Wrote {} routes to {:?}", table.len(), path);
        }
        None => println!("{}", table.to_json()?),
    }

    tracing::info!("Routes built in {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}
