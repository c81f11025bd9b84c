//! Collection import/export service (CSV files)
//!
//! Files hold one spellbook per line as four unquoted comma-separated fields:
//! `serial,title,inventor,type`. Fields are never escaped, so a line with an
//! embedded comma simply has the wrong field count and is skipped.

use std::fs;
use std::path::Path;

use csv::{ByteRecord, QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};

use crate::{
    error::{AppError, AppResult},
    models::Spellbook,
    repository::Repository,
};

/// One well-formed line of a collection file
#[derive(Debug)]
struct Row {
    serial: i32,
    title: String,
    inventor: String,
    kind: String,
}

impl Row {
    /// Parse a record with exactly four fields and an integer serial
    fn parse(record: &ByteRecord) -> Option<Self> {
        if record.len() != 4 {
            return None;
        }
        let field = |i: usize| String::from_utf8_lossy(&record[i]).trim().to_string();
        let serial = field(0).parse().ok()?;
        Some(Self {
            serial,
            title: field(1),
            inventor: field(2),
            kind: field(3),
        })
    }

    fn has_blank_field(&self) -> bool {
        self.title.is_empty() || self.inventor.is_empty() || self.kind.is_empty()
    }

    fn into_spellbook(self) -> Spellbook {
        Spellbook::new(self.serial, self.title, self.inventor, self.kind)
    }
}

/// Well-formed rows of `data`; with `has_header` the first record is dropped
fn rows(data: &[u8], has_header: bool) -> impl Iterator<Item = Row> + '_ {
    ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .quoting(false)
        .from_reader(data)
        .into_byte_records()
        .filter_map(Result::ok)
        .filter_map(|record| Row::parse(&record))
}

pub struct CollectionService<'a> {
    repository: &'a mut Repository,
}

impl<'a> CollectionService<'a> {
    pub fn new(repository: &'a mut Repository) -> Self {
        Self { repository }
    }

    /// Import the first line of `path` whose serial is `serial`
    pub fn add_spellbook(&mut self, path: &Path, serial: i32) -> AppResult<&Spellbook> {
        if self.repository.spellbooks.contains(serial) {
            return Err(AppError::SpellbookExists);
        }

        let data = fs::read(path).map_err(|e| {
            tracing::warn!("Cannot read spellbook file {}: {}", path.display(), e);
            AppError::NoSuchFile
        })?;

        let row = rows(&data, false)
            .find(|row| row.serial == serial)
            .ok_or(AppError::NotInFile)?;
        if row.has_blank_field() {
            return Err(AppError::NotInFile);
        }

        self.repository.spellbooks.insert(row.into_spellbook());
        tracing::info!("Imported spellbook {} from {}", serial, path.display());
        self.repository.spellbooks.find(serial)
    }

    /// Import every new spellbook of a collection file, skipping its header line.
    /// Returns the number of spellbooks added.
    pub fn add_collection(&mut self, path: &Path) -> AppResult<usize> {
        let data = fs::read(path).map_err(|e| {
            tracing::warn!("Cannot read collection {}: {}", path.display(), e);
            AppError::NoSuchCollection
        })?;

        let mut added = 0;
        for row in rows(&data, true) {
            if self.repository.spellbooks.insert(row.into_spellbook()) {
                added += 1;
            }
        }

        tracing::info!("Imported {} spellbooks from {}", added, path.display());
        Ok(added)
    }

    /// Write the whole catalog to `path`, ascending by serial
    pub fn save_collection(&self, path: &Path, header: &str) -> AppResult<()> {
        let books = self.repository.spellbooks.sorted_by_serial();
        if books.is_empty() {
            return Err(AppError::NoSpellbooks);
        }

        let file_error = |e: csv::Error| {
            tracing::warn!("Cannot write collection {}: {}", path.display(), e);
            AppError::NoSuchFile
        };

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_path(path)
            .map_err(file_error)?;

        writer.write_record(header.split(',')).map_err(file_error)?;
        for book in &books {
            writer
                .write_record([
                    book.serial().to_string().as_str(),
                    book.title(),
                    book.inventor(),
                    book.kind(),
                ])
                .map_err(file_error)?;
        }
        writer.flush().map_err(|e| file_error(e.into()))?;

        tracing::info!("Saved {} spellbooks to {}", books.len(), path.display());
        Ok(())
    }
}
