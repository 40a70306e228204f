mod renderer;

use std::io::Write;

use anyhow::{Result, bail};
use demo_state_core::{DemoSession, MemoryLocation};

const USAGE: &str = "Usage: demo-state [URL | /path?query | query]";

/// Build the starting address from a command-line argument. Accepts a full
/// URL, a path with query, or a bare query string.
fn location_from_arg(arg: &str) -> MemoryLocation {
    let href = match arg.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("/", |i| &rest[i..]),
        None => arg,
    };
    if href.starts_with('/') {
        MemoryLocation::from_href(href)
    } else {
        MemoryLocation::from_href(&format!("/?{}", href.trim_start_matches('?')))
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let location = match args.as_slice() {
        [] => MemoryLocation::new("/", ""),
        [flag] if flag == "-h" || flag == "--help" => {
            eprintln!("{USAGE}");
            return Ok(());
        }
        [arg] => location_from_arg(arg),
        _ => bail!("{USAGE}"),
    };

    let mut session = DemoSession::new(location);
    renderer::run_tui(&mut session)?;

    writeln!(std::io::stdout(), "{}", session.location().href())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use demo_state_core::Location;

    use super::*;

    #[test]
    fn accepts_full_urls() {
        let loc = location_from_arg("https://demo.example.com/support?role=support#top");
        assert_eq!(loc.path(), "/support");
        assert_eq!(loc.query(), "role=support");

        let bare_host = location_from_arg("http://localhost:3000");
        assert_eq!(bare_host.href(), "/");
    }

    #[test]
    fn accepts_bare_queries() {
        assert_eq!(location_from_arg("?theme=dark").href(), "/?theme=dark");
        assert_eq!(location_from_arg("client=cvs").href(), "/?client=cvs");
        assert_eq!(
            location_from_arg("/demos/cvs/tickets").href(),
            "/demos/cvs/tickets"
        );
    }
}
