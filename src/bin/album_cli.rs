//! Interactive front end for the album catalog.
//!
//! Prints the full shelf, then a numbered search menu (artist, title, genre),
//! reads one choice and one term from stdin, and renders the matching albums
//! as a fixed-width table. The binary stays line-oriented so scripts and the
//! test suite can drive it through piped stdin.

use albumrack::{Album, CatalogService, CatalogStore, render_album_table, resolve_albums_path};
use anyhow::{Context, Result};
use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse()?;
    let albums_path = resolve_albums_path(cli.data_path.as_deref())?;
    let store = CatalogStore::load(&albums_path)?;
    let service = CatalogService::new(store);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print_table(service.albums().iter())?;

    println!();
    println!("****************************************************************");
    println!("Search albums by:");
    println!("1. Artist");
    println!("2. Title");
    println!("3. Genre");
    println!("****************************************************************");

    match read_line(&mut lines)?.as_deref() {
        Some("1") => {
            println!("Enter artist name:");
            let artist = read_line(&mut lines)?.unwrap_or_default();
            print_table(service.search_by_artist(&artist))?;
        }
        Some("2") => {
            println!("Enter title:");
            let title = read_line(&mut lines)?.unwrap_or_default();
            print_table(service.search_by_title(&title))?;
        }
        Some("3") => {
            println!("Enter genre:");
            let genre = read_line(&mut lines)?.unwrap_or_default();
            print_table(service.search_by_genre(&genre))?;
        }
        _ => println!("Invalid option"),
    }

    Ok(())
}

struct Cli {
    data_path: Option<PathBuf>,
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut args = env::args_os();
        let _program = args.next();

        let mut data_path = None;
        while let Some(arg) = args.next() {
            let arg_str = arg.to_str().context("Invalid UTF-8 in argument")?;
            match arg_str {
                "--data" | "-d" => {
                    let value = args.next().unwrap_or_else(|| usage(1));
                    data_path = Some(PathBuf::from(value));
                }
                "--help" | "-h" => usage(0),
                _ => usage(1),
            }
        }

        Ok(Self { data_path })
    }
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: albumrack [--data <albums.json>]\n\nLoads the album shelf, prints it, then answers one search (artist, title,\nor genre) read from stdin.\n\nOptions:\n  --data, -d <path>   Albums file to load instead of the resolved data/albums.json.\n  --help, -h          Show this message."
    );
    std::process::exit(code);
}

/// One line from stdin, with the trailing newline stripped; `None` on EOF.
fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line.context("reading from stdin")?)),
        None => Ok(None),
    }
}

fn print_table<'a, I>(albums: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Album>,
{
    let mut output = String::new();
    render_album_table(albums, &mut output)?;
    print!("{output}");
    Ok(())
}
