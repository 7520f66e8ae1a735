use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use preflight::config::ProjectLayout;
use preflight::reporter;

fn main() {
    // Parse --root-dir argument if provided, otherwise validate the cwd.
    let args: Vec<String> = std::env::args().collect();
    let mut root_dir: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        if args[i] == "--root-dir" {
            if i + 1 < args.len() {
                root_dir = Some(PathBuf::from(&args[i + 1]));
                i += 2;
                continue;
            }
        }
        i += 1;
    }

    let layout = match root_dir {
        Some(dir) => ProjectLayout::from_root(&dir),
        None => match ProjectLayout::current() {
            Ok(layout) => layout,
            Err(err) => {
                eprintln!("Error: could not determine current directory: {err}");
                process::exit(1);
            }
        },
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let code = match validate(&mut out, &layout) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    };

    process::exit(code);
}

fn validate(writer: &mut dyn Write, layout: &ProjectLayout) -> io::Result<i32> {
    reporter::print_header(writer)?;
    let report = preflight::run(writer, layout)?;
    reporter::print_summary(writer, &report)?;
    Ok(report.exit_code())
}
