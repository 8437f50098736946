//! File I/O for Game of Life boards

use super::{Board, LINE_SEPARATOR};
use anyhow::{Context, Result};
use std::path::Path;

/// Load a board from a text file.
///
/// The file holds the board's text encoding; a single trailing newline is ignored.
pub fn load_board_from_file<P: AsRef<Path>>(path: P) -> Result<Board> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read board file: {}", path.as_ref().display()))?;

    parse_board_file_contents(&content)
        .with_context(|| format!("Failed to parse board from file: {}", path.as_ref().display()))
}

fn parse_board_file_contents(content: &str) -> Result<Board> {
    let text = content.strip_suffix(LINE_SEPARATOR).unwrap_or(content);
    Ok(Board::load_from_text(text)?)
}

/// Save a board to a text file, followed by a single newline
pub fn save_board_to_file<P: AsRef<Path>>(board: &Board, path: P) -> Result<()> {
    let mut content = board.to_text();
    content.push(LINE_SEPARATOR);

    // Create parent directories if they don't exist
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write board to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Load every `.txt` board in a directory, sorted by file stem.
/// Files that fail to parse are skipped with a warning.
pub fn load_boards_from_directory<P: AsRef<Path>>(dir_path: P) -> Result<Vec<(String, Board)>> {
    let dir = std::fs::read_dir(&dir_path)
        .with_context(|| format!("Failed to read directory: {}", dir_path.as_ref().display()))?;

    let mut boards = Vec::new();

    for entry in dir {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        if !path.is_file() || path.extension().map_or(true, |ext| ext != "txt") {
            continue;
        }

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();

        match load_board_from_file(&path) {
            Ok(board) => boards.push((name, board)),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping board file"),
        }
    }

    boards.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(boards)
}

/// Well-known starting patterns written by [`create_example_patterns`]
pub const EXAMPLE_PATTERNS: [(&str, &str); 4] = [
    ("glider", ".*...\n..*..\n***..\n.....\n....."),
    ("blinker", ".....\n.....\n.***.\n.....\n....."),
    ("block", "....\n.**.\n.**.\n...."),
    ("beacon", "**....\n**....\n..**..\n..**..\n......"),
];

/// Write the example patterns into `output_dir`
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for (name, text) in EXAMPLE_PATTERNS {
        let board = Board::load_from_text(text)
            .with_context(|| format!("Invalid example pattern: {}", name))?;
        save_board_to_file(&board, dir.join(format!("{}.txt", name)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, LifeError};
    use tempfile::tempdir;

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/board.txt");

        let board = Board::load_from_text("*.*\n.*.").unwrap();
        save_board_to_file(&board, &file_path).unwrap();

        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "*.*\n.*.\n");
        assert_eq!(load_board_from_file(&file_path).unwrap(), board);
    }

    #[test]
    fn test_file_without_trailing_newline() {
        let board = parse_board_file_contents("**\n**").unwrap();
        assert_eq!((board.height(), board.width()), (2, 2));
    }

    #[test]
    fn test_invalid_file_keeps_error_kind() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("bad.txt");
        std::fs::write(&file_path, "*.*\n.o.\n").unwrap();

        let err = load_board_from_file(&file_path).unwrap_err();
        let cause = err
            .chain()
            .find_map(|e| e.downcast_ref::<LifeError>())
            .unwrap();
        assert_eq!(cause.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempdir().unwrap();
        assert!(load_board_from_file(temp_dir.path().join("absent.txt")).is_err());
    }

    #[test]
    fn test_create_example_patterns() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();
        std::fs::write(temp_dir.path().join("broken.txt"), "**\n*\n").unwrap();
        std::fs::write(temp_dir.path().join("notes.md"), "not a board").unwrap();

        let boards = load_boards_from_directory(temp_dir.path()).unwrap();
        let names: Vec<&str> = boards.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["beacon", "blinker", "block", "glider"]);

        let glider = &boards[3].1;
        assert_eq!((glider.height(), glider.width()), (5, 5));
        assert_eq!(glider.living_count(), 5);
    }
}
