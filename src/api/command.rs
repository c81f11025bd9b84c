//! Command line parser
//!
//! Keywords match case-insensitively at the start of the trimmed line, in a
//! fixed precedence order (`SPELLBOOK HISTORY` before `SPELLBOOK`, and so on).
//! A line that names no command, or whose arguments are malformed, parses to
//! `None` and produces no output at all.

use std::collections::HashSet;

/// Student ids given to `COMMON`, validated as far as parsing allows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommonIds {
    Ids(Vec<i32>),
    /// The same id was listed twice
    Duplicate,
    /// At least one argument is not an integer
    Unparseable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Commands,
    AddStudent { name: String },
    AddSpellbook { file: String, serial: i32 },
    AddCollection { file: String },
    SaveCollection { file: String },
    ListAll { long: bool },
    ListAvailable { long: bool },
    ListTypes,
    ListInventors,
    NumberCopies,
    Type { kind: String },
    Inventor { inventor: String },
    Spellbook { serial: i32, long: bool },
    SpellbookHistory { serial: i32 },
    Student { id: i32 },
    StudentSpellbooks { id: i32 },
    StudentHistory { id: i32 },
    Rent { student_id: i32, serial: i32 },
    Relinquish { student_id: i32, serial: i32 },
    RelinquishAll { student_id: i32 },
    Common(CommonIds),
}

/// The rest of `line` after `keyword`, if the line starts with it (ASCII case-insensitive)
fn after<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let head = line.get(..keyword.len())?;
    if head.eq_ignore_ascii_case(keyword) {
        Some(&line[keyword.len()..])
    } else {
        None
    }
}

fn ends_with_long(line: &str) -> bool {
    const SUFFIX: &str = " LONG";
    line.len() >= SUFFIX.len()
        && line
            .get(line.len() - SUFFIX.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(SUFFIX))
}

fn int(s: &str) -> Option<i32> {
    s.trim().parse().ok()
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Exactly two whitespace-separated arguments
fn pair(rest: &str) -> Option<(&str, &str)> {
    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) => Some((a, b)),
        _ => None,
    }
}

fn int_pair(rest: &str) -> Option<(i32, i32)> {
    let (a, b) = pair(rest)?;
    Some((int(a)?, int(b)?))
}

fn common_ids(rest: &str) -> Option<CommonIds> {
    let parts: Vec<&str> = rest.split_whitespace().collect();
    if parts.len() < 2 {
        return None;
    }

    let mut seen = HashSet::new();
    let mut ids = Vec::with_capacity(parts.len());
    let mut unparseable = false;
    for part in parts {
        match part.parse::<i32>() {
            Ok(id) => {
                if !seen.insert(id) {
                    return Some(CommonIds::Duplicate);
                }
                ids.push(id);
            }
            Err(_) => unparseable = true,
        }
    }

    Some(if unparseable {
        CommonIds::Unparseable
    } else {
        CommonIds::Ids(ids)
    })
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        if line.eq_ignore_ascii_case("EXIT") {
            return Some(Command::Exit);
        }
        if line.eq_ignore_ascii_case("COMMANDS") {
            return Some(Command::Commands);
        }
        if let Some(rest) = after(line, "ADD STUDENT ") {
            return non_empty(rest).map(|name| Command::AddStudent { name });
        }
        if let Some(rest) = after(line, "ADD SPELLBOOK ") {
            let (file, serial) = pair(rest)?;
            return Some(Command::AddSpellbook {
                file: file.to_string(),
                serial: int(serial)?,
            });
        }
        if let Some(rest) = after(line, "ADD COLLECTION ") {
            return non_empty(rest).map(|file| Command::AddCollection { file });
        }
        if let Some(rest) = after(line, "SAVE COLLECTION ") {
            return non_empty(rest).map(|file| Command::SaveCollection { file });
        }
        if after(line, "LIST ALL").is_some() {
            return Some(Command::ListAll {
                long: ends_with_long(line),
            });
        }
        if after(line, "LIST AVAILABLE").is_some() {
            return Some(Command::ListAvailable {
                long: ends_with_long(line),
            });
        }
        if line.eq_ignore_ascii_case("LIST TYPES") {
            return Some(Command::ListTypes);
        }
        if line.eq_ignore_ascii_case("LIST INVENTORS") {
            return Some(Command::ListInventors);
        }
        if line.eq_ignore_ascii_case("NUMBER COPIES") {
            return Some(Command::NumberCopies);
        }
        if let Some(rest) = after(line, "TYPE ") {
            return Some(Command::Type {
                kind: rest.trim().to_string(),
            });
        }
        if let Some(rest) = after(line, "INVENTOR ") {
            return Some(Command::Inventor {
                inventor: rest.trim().to_string(),
            });
        }
        if let Some(rest) = after(line, "SPELLBOOK HISTORY ") {
            return Some(Command::SpellbookHistory { serial: int(rest)? });
        }
        if let Some(rest) = after(line, "SPELLBOOK ") {
            let mut parts = rest.split_whitespace();
            let serial = int(parts.next()?)?;
            let long = parts.next().is_some_and(|p| p.eq_ignore_ascii_case("LONG"));
            return Some(Command::Spellbook { serial, long });
        }
        if let Some(rest) = after(line, "STUDENT HISTORY ") {
            return Some(Command::StudentHistory { id: int(rest)? });
        }
        if let Some(rest) = after(line, "STUDENT SPELLBOOKS ") {
            return Some(Command::StudentSpellbooks { id: int(rest)? });
        }
        if let Some(rest) = after(line, "STUDENT ") {
            return Some(Command::Student { id: int(rest)? });
        }
        if let Some(rest) = after(line, "RENT ") {
            let (student_id, serial) = int_pair(rest)?;
            return Some(Command::Rent { student_id, serial });
        }
        if let Some(rest) = after(line, "RELINQUISH ALL ") {
            return Some(Command::RelinquishAll {
                student_id: int(rest)?,
            });
        }
        if let Some(rest) = after(line, "RELINQUISH ") {
            let (student_id, serial) = int_pair(rest)?;
            return Some(Command::Relinquish { student_id, serial });
        }
        if let Some(rest) = after(line, "COMMON ") {
            return common_ids(rest).map(Command::Common);
        }

        None
    }
}
