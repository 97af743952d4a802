//! Fixed-width table rendering for album listings.
//!
//! This stays text-only and writes into any `fmt::Write` so the interactive
//! binary and the test suite share one renderer. Cell values longer than
//! their column are cut with a `…` marker rather than breaking the frame.

use crate::catalog::Album;
use std::fmt;

const ID_WIDTH: usize = 6;
const TITLE_WIDTH: usize = 26;
const ARTIST_WIDTH: usize = 20;
const GENRE_WIDTH: usize = 12;

// Four cells, three inner separators, two outer pipes, eight pad spaces.
const TABLE_WIDTH: usize = ID_WIDTH + TITLE_WIDTH + ARTIST_WIDTH + GENRE_WIDTH + 13;

/// Render `albums` as a framed table with ID, Title, Artist, and Genre
/// columns. An empty shelf still renders the frame and header.
pub fn render_album_table<'a, I>(albums: I, writer: &mut impl fmt::Write) -> fmt::Result
where
    I: IntoIterator<Item = &'a Album>,
{
    let rule = "-".repeat(TABLE_WIDTH);
    writeln!(writer, "{rule}")?;
    writeln!(
        writer,
        "| {:<id$} | {:<title$} | {:<artist$} | {:<genre$} |",
        "ID",
        "Title",
        "Artist",
        "Genre",
        id = ID_WIDTH,
        title = TITLE_WIDTH,
        artist = ARTIST_WIDTH,
        genre = GENRE_WIDTH,
    )?;
    writeln!(writer, "{rule}")?;
    for album in albums {
        writeln!(
            writer,
            "| {:<id$} | {:<title$} | {:<artist$} | {:<genre$} |",
            truncate_cell(&album.id.to_string(), ID_WIDTH),
            truncate_cell(&album.title, TITLE_WIDTH),
            truncate_cell(&album.artist, ARTIST_WIDTH),
            truncate_cell(&album.genre.name, GENRE_WIDTH),
            id = ID_WIDTH,
            title = TITLE_WIDTH,
            artist = ARTIST_WIDTH,
            genre = GENRE_WIDTH,
        )?;
    }
    writeln!(writer, "{rule}")?;
    Ok(())
}

fn truncate_cell(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut shortened = String::with_capacity(width + 1);
    for (idx, ch) in value.chars().enumerate() {
        if idx >= width - 1 {
            shortened.push('…');
            break;
        }
        shortened.push(ch);
    }
    shortened
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AlbumId, Genre, GenreId};
    use chrono::NaiveDate;

    fn album(id: u32, title: &str, artist: &str, genre_name: &str) -> Album {
        Album {
            id: AlbumId(id),
            title: title.to_string(),
            artist: artist.to_string(),
            release_date: NaiveDate::from_ymd_opt(1982, 11, 30).unwrap(),
            genre: Genre {
                id: GenreId(2),
                name: genre_name.to_string(),
            },
        }
    }

    #[test]
    fn renders_header_and_rows() {
        let shelf = [album(1, "Thriller", "Michael Jackson", "Pop")];
        let mut output = String::new();
        render_album_table(shelf.iter(), &mut output).unwrap();

        assert!(output.contains("| ID"));
        assert!(output.contains("| Title"));
        assert!(output.contains("Thriller"));
        assert!(output.contains("Michael Jackson"));
        assert!(output.contains("Pop"));
    }

    #[test]
    fn every_line_spans_the_full_frame() {
        let shelf = [album(1, "Thriller", "Michael Jackson", "Pop")];
        let mut output = String::new();
        render_album_table(shelf.iter(), &mut output).unwrap();
        for line in output.lines() {
            assert_eq!(line.chars().count(), TABLE_WIDTH, "uneven line: {line:?}");
        }
    }

    #[test]
    fn empty_shelf_renders_frame_only() {
        let mut output = String::new();
        render_album_table(std::iter::empty(), &mut output).unwrap();
        assert_eq!(output.lines().count(), 4);
        assert!(output.contains("| ID"));
    }

    #[test]
    fn overlong_cells_are_cut_with_a_marker() {
        let shelf = [album(
            1,
            "The Rise and Fall of Ziggy Stardust and the Spiders from Mars",
            "David Bowie",
            "Glam Rock",
        )];
        let mut output = String::new();
        render_album_table(shelf.iter(), &mut output).unwrap();
        assert!(output.contains('…'));
        assert!(!output.contains("Spiders from Mars"));
        for line in output.lines() {
            assert_eq!(line.chars().count(), TABLE_WIDTH);
        }
    }

    #[test]
    fn truncate_cell_keeps_short_values_intact() {
        assert_eq!(truncate_cell("Pop", 12), "Pop");
        assert_eq!(truncate_cell("exactly_12__", 12), "exactly_12__");
        assert_eq!(truncate_cell("thirteen_char", 12), "thirteen_ch…");
    }
}
