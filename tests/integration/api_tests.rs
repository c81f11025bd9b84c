//! End-to-end tests driving the archive through its text protocol

use std::fs;
use std::path::Path;

use spellbook_archive::Archive;
use tempfile::TempDir;

const HEADER: &str = "serialNumber,title,inventor,type";

/// Run a script against an archive and return everything it printed
fn run(archive: &mut Archive, script: &str) -> String {
    let mut out = Vec::new();
    archive
        .run(script.as_bytes(), &mut out)
        .expect("Failed to run script");
    String::from_utf8(out).expect("Output is not UTF-8")
}

/// Split output into block bodies with the tag removed
fn blocks(output: &str) -> Vec<String> {
    output
        .trim_start_matches('\n')
        .split("\n\nuser: ")
        .map(|block| {
            block
                .strip_prefix("user: ")
                .unwrap_or(block)
                .trim_end_matches('\n')
                .to_string()
        })
        .collect()
}

fn write_collection(dir: &TempDir, name: &str, rows: &[&str]) -> String {
    let path = dir.path().join(name);
    let mut contents = String::from(HEADER);
    for row in rows {
        contents.push('\n');
        contents.push_str(row);
    }
    contents.push('\n');
    fs::write(&path, contents).expect("Failed to write collection");
    path_str(&path)
}

fn path_str(path: &Path) -> String {
    path.to_str().expect("Temp path is not UTF-8").to_string()
}

fn library(dir: &TempDir) -> String {
    write_collection(
        dir,
        "library.csv",
        &[
            "1,Basic Charms,Miranda Goshawk,Charm",
            "2,Basic Curses,Miranda Goshawk,Curse",
            "3,basic charms,miranda goshawk,Charm",
            "4,Advanced Potion-Making,Libatius Borage,Potion",
        ],
    )
}

#[test]
fn test_add_student_and_lookup() {
    let mut archive = Archive::default();
    let output = run(
        &mut archive,
        "ADD STUDENT Hermione Granger\nSTUDENT 100000\nADD STUDENT Ron Weasley\nSTUDENT 100001\n",
    );
    assert_eq!(
        blocks(&output),
        vec![
            "Success.",
            "100000: Hermione Granger",
            "Success.",
            "100001: Ron Weasley"
        ]
    );
}

#[test]
fn test_block_layout() {
    let mut archive = Archive::default();
    let output = run(&mut archive, "LIST ALL\nSTUDENT 5\n");
    assert_eq!(
        output,
        "user: No spellbooks in system.\n\nuser: No students in system.\n"
    );
}

#[test]
fn test_list_types_after_collection() {
    let dir = TempDir::new().unwrap();
    let file = write_collection(
        &dir,
        "charms.csv",
        &[
            "1,Basic Charms,Miranda Goshawk,Charm",
            "2,Basic Curses,Miranda Goshawk,Curse",
        ],
    );

    let mut archive = Archive::default();
    let output = run(
        &mut archive,
        &format!("ADD COLLECTION {}\nLIST TYPES\n", file),
    );
    assert_eq!(
        blocks(&output),
        vec!["2 spellbooks successfully added.", "Charm\nCurse"]
    );
}

#[test]
fn test_add_collection_counts() {
    let dir = TempDir::new().unwrap();
    let file = library(&dir);
    let single = write_collection(&dir, "single.csv", &["9,Moste Potente Potions,Unknown,Potion"]);

    let mut archive = Archive::default();
    let output = run(
        &mut archive,
        &format!(
            "ADD COLLECTION {f}\nADD COLLECTION {f}\nADD COLLECTION {s}\nADD COLLECTION {d}\n",
            f = file,
            s = single,
            d = path_str(&dir.path().join("missing.csv")),
        ),
    );
    assert_eq!(
        blocks(&output),
        vec![
            "4 spellbooks successfully added.",
            "No spellbooks have been added to the system.",
            "1 spellbook successfully added.",
            "No such collection."
        ]
    );
}

#[test]
fn test_add_single_spellbook() {
    let dir = TempDir::new().unwrap();
    let file = library(&dir);
    let blank = write_collection(&dir, "blank.csv", &["7, ,Someone,Charm"]);

    let mut archive = Archive::default();
    let output = run(
        &mut archive,
        &format!(
            "ADD SPELLBOOK {f} 2\nADD SPELLBOOK {f} 2\nADD SPELLBOOK {f} 42\nADD SPELLBOOK {b} 7\nADD SPELLBOOK {m} 1\n",
            f = file,
            b = blank,
            m = path_str(&dir.path().join("missing.csv")),
        ),
    );
    assert_eq!(
        blocks(&output),
        vec![
            "Successfully added: Basic Curses (Miranda Goshawk).",
            "Spellbook already exists in system.",
            "No such spellbook in file.",
            "No such spellbook in file.",
            "No such file."
        ]
    );
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = TempDir::new().unwrap();
    let file = library(&dir);
    let saved = path_str(&dir.path().join("saved.csv"));

    let mut archive = Archive::default();
    let output = run(
        &mut archive,
        &format!("ADD COLLECTION {}\nSAVE COLLECTION {}\n", file, saved),
    );
    assert_eq!(blocks(&output)[1], "Success.");

    let contents = fs::read_to_string(&saved).unwrap();
    assert_eq!(
        contents,
        "serialNumber,title,inventor,type\n\
         1,Basic Charms,Miranda Goshawk,Charm\n\
         2,Basic Curses,Miranda Goshawk,Curse\n\
         3,basic charms,miranda goshawk,Charm\n\
         4,Advanced Potion-Making,Libatius Borage,Potion\n"
    );

    let mut reloaded = Archive::default();
    let first = run(&mut archive, "LIST ALL LONG\n");
    run(&mut reloaded, &format!("ADD COLLECTION {}\n", saved));
    let second = run(&mut reloaded, "LIST ALL LONG\n");
    assert_eq!(blocks(&first), blocks(&second));
}

#[test]
fn test_save_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let saved = dir.path().join("saved.csv");

    let mut archive = Archive::default();
    let output = run(&mut archive, &format!("SAVE COLLECTION {}\n", path_str(&saved)));
    assert_eq!(blocks(&output), vec!["No spellbooks in system."]);
    assert!(!saved.exists());
}

#[test]
fn test_rent_and_relinquish_updates_logs() {
    let dir = TempDir::new().unwrap();
    let file = library(&dir);

    let mut archive = Archive::default();
    let script = format!(
        "ADD COLLECTION {}\n\
         ADD STUDENT Hermione Granger\n\
         RENT 100000 1\n\
         SPELLBOOK 1 LONG\n\
         STUDENT SPELLBOOKS 100000\n\
         RELINQUISH 100000 1\n\
         SPELLBOOK 1 LONG\n\
         SPELLBOOK HISTORY 1\n\
         STUDENT HISTORY 100000\n\
         STUDENT SPELLBOOKS 100000\n",
        file
    );
    let output = run(&mut archive, &script);
    assert_eq!(
        blocks(&output)[1..],
        [
            "Success.",
            "Success.",
            "1: Basic Charms (Miranda Goshawk, Charm)\nRented by: 100000.",
            "Basic Charms (Miranda Goshawk)",
            "Success.",
            "1: Basic Charms (Miranda Goshawk, Charm)\nCurrently available.",
            "100000",
            "Basic Charms (Miranda Goshawk)",
            "Student not currently renting."
        ]
    );
}

#[test]
fn test_rent_held_spellbook_fails() {
    let dir = TempDir::new().unwrap();
    let file = library(&dir);

    let mut archive = Archive::default();
    let script = format!(
        "ADD COLLECTION {}\n\
         ADD STUDENT Harry Potter\n\
         ADD STUDENT Ron Weasley\n\
         RENT 100000 2\n\
         RENT 100001 2\n\
         RENT 100000 2\n\
         STUDENT SPELLBOOKS 100001\n\
         SPELLBOOK 2 LONG\n",
        file
    );
    let output = run(&mut archive, &script);
    assert_eq!(
        blocks(&output)[4..],
        [
            "Spellbook is currently unavailable.",
            "Spellbook is currently unavailable.",
            "Student not currently renting.",
            "2: Basic Curses (Miranda Goshawk, Curse)\nRented by: 100000."
        ]
    );
}

#[test]
fn test_relinquish_unrented_spellbook() {
    let dir = TempDir::new().unwrap();
    let file = library(&dir);

    let mut archive = Archive::default();
    let script = format!(
        "ADD COLLECTION {}\n\
         ADD STUDENT Hermione Granger\n\
         RENT 100000 1\n\
         RELINQUISH 100000 2\n\
         SPELLBOOK HISTORY 2\n\
         STUDENT SPELLBOOKS 100000\n",
        file
    );
    let output = run(&mut archive, &script);
    assert_eq!(
        blocks(&output)[3..],
        [
            "Unable to return spellbook.",
            "No rental history.",
            "Basic Charms (Miranda Goshawk)"
        ]
    );
}

#[test]
fn test_relinquish_all() {
    let dir = TempDir::new().unwrap();
    let file = library(&dir);

    let mut archive = Archive::default();
    let script = format!(
        "ADD COLLECTION {}\n\
         ADD STUDENT Hermione Granger\n\
         RENT 100000 4\n\
         RENT 100000 2\n\
         RELINQUISH ALL 100000\n\
         LIST AVAILABLE\n\
         STUDENT HISTORY 100000\n\
         RELINQUISH ALL 100000\n",
        file
    );
    let output = run(&mut archive, &script);
    assert_eq!(
        blocks(&output)[4..],
        [
            "Success.",
            "Basic Charms (Miranda Goshawk)\n\
             Basic Curses (Miranda Goshawk)\n\
             basic charms (miranda goshawk)\n\
             Advanced Potion-Making (Libatius Borage)",
            "Basic Curses (Miranda Goshawk)\nAdvanced Potion-Making (Libatius Borage)",
            "Success."
        ]
    );
}

#[test]
fn test_number_copies_groups_case_insensitively() {
    let dir = TempDir::new().unwrap();
    let file = library(&dir);

    let mut archive = Archive::default();
    let output = run(&mut archive, &format!("ADD COLLECTION {}\nNUMBER COPIES\n", file));
    assert_eq!(
        blocks(&output)[1],
        "Advanced Potion-Making (Libatius Borage): 1\n\
         Basic Charms (Miranda Goshawk): 2\n\
         Basic Curses (Miranda Goshawk): 1"
    );
}

#[test]
fn test_type_and_inventor_queries() {
    let dir = TempDir::new().unwrap();
    let file = library(&dir);

    let mut archive = Archive::default();
    let script = format!(
        "ADD COLLECTION {}\n\
         TYPE charm\n\
         INVENTOR MIRANDA GOSHAWK\n\
         TYPE Hex\n\
         INVENTOR Nobody\n\
         LIST INVENTORS\n",
        file
    );
    let output = run(&mut archive, &script);
    assert_eq!(
        blocks(&output)[1..],
        [
            "Basic Charms (Miranda Goshawk)\nbasic charms (miranda goshawk)",
            "Basic Charms (Miranda Goshawk)\n\
             basic charms (miranda goshawk)\n\
             Basic Curses (Miranda Goshawk)",
            "No spellbooks with type Hex.",
            "No spellbooks by Nobody.",
            "Libatius Borage\nMiranda Goshawk"
        ]
    );
}

#[test]
fn test_common_is_symmetric() {
    let dir = TempDir::new().unwrap();
    let file = library(&dir);

    let mut archive = Archive::default();
    let script = format!(
        "ADD COLLECTION {}\n\
         ADD STUDENT Harry Potter\n\
         ADD STUDENT Ron Weasley\n\
         RENT 100000 1\n\
         RELINQUISH 100000 1\n\
         RENT 100000 4\n\
         RELINQUISH 100000 4\n\
         RENT 100001 3\n\
         RELINQUISH 100001 3\n\
         RENT 100001 4\n\
         RELINQUISH 100001 4\n",
        file
    );
    run(&mut archive, &script);

    let forward = run(&mut archive, "COMMON 100000 100001\n");
    let backward = run(&mut archive, "COMMON 100001 100000\n");
    assert_eq!(blocks(&forward), blocks(&backward));
    assert_eq!(
        blocks(&forward),
        vec!["Advanced Potion-Making (Libatius Borage)\nBasic Charms (Miranda Goshawk)"]
    );
}

#[test]
fn test_common_errors() {
    let dir = TempDir::new().unwrap();
    let file = library(&dir);

    let mut archive = Archive::default();
    let before_students = run(&mut archive, "COMMON 1 2\n");
    let script = format!(
        "ADD STUDENT Harry Potter\n\
         ADD STUDENT Ron Weasley\n\
         COMMON 100000 100001\n\
         ADD COLLECTION {}\n\
         COMMON 100000 100000\n\
         COMMON 100000 abc\n\
         COMMON 100000 5\n\
         COMMON 100000 100001\n",
        file
    );
    let output = run(&mut archive, &script);

    assert_eq!(blocks(&before_students), vec!["No students in system."]);
    assert_eq!(
        blocks(&output)[2..],
        [
            "No spellbooks in system.",
            "4 spellbooks successfully added.",
            "Duplicate students provided.",
            "No such student in system.",
            "No such student in system.",
            "No common spellbooks."
        ]
    );
}

#[test]
fn test_exit_stops_processing() {
    let mut archive = Archive::default();
    let output = run(&mut archive, "ADD STUDENT Neville Longbottom\nExit\nSTUDENT 100000\n");
    assert_eq!(blocks(&output), vec!["Success.", "Ending Archive process."]);
}

#[test]
fn test_commands_prints_help() {
    let mut archive = Archive::default();
    let output = run(&mut archive, "COMMANDS\n");
    assert!(output.starts_with("user: EXIT ends the archive process\n"));
    assert!(output.contains("\n\nLIST ALL [LONG]"));
}

#[test]
fn test_malformed_lines_are_silent() {
    let mut archive = Archive::default();
    let output = run(
        &mut archive,
        "\n\
         FLY BROOMSTICK\n\
         STUDENT\n\
         STUDENT abc\n\
         RENT 100000\n\
         RENT x y\n\
         SPELLBOOK one\n\
         ADD STUDENT   \n",
    );
    assert_eq!(output, "");
}

#[test]
fn test_invalid_utf8_line_is_not_fatal() {
    let mut archive = Archive::default();
    let mut out = Vec::new();
    archive
        .run(
            &b"ADD STUDENT Harry\nADD STUDENT H\xffrry\nSTUDENT 100000\n"[..],
            &mut out,
        )
        .expect("Failed to run script");
    let output = String::from_utf8(out).expect("Output is not UTF-8");
    assert_eq!(
        blocks(&output),
        vec!["Success.", "Success.", "100000: Harry"]
    );
}

#[test]
fn test_list_available_until_all_rented() {
    let dir = TempDir::new().unwrap();
    let file = write_collection(
        &dir,
        "pair.csv",
        &[
            "1,Basic Charms,Miranda Goshawk,Charm",
            "2,Basic Curses,Miranda Goshawk,Curse",
        ],
    );

    let mut archive = Archive::default();
    let script = format!(
        "ADD COLLECTION {}\n\
         ADD STUDENT Hermione Granger\n\
         LIST AVAILABLE LONG\n\
         RENT 100000 1\n\
         LIST AVAILABLE LONG\n\
         RENT 100000 2\n\
         LIST AVAILABLE\n\
         LIST AVAILABLE LONG\n",
        file
    );
    let output = run(&mut archive, &script);
    assert_eq!(
        blocks(&output)[2..],
        [
            "1: Basic Charms (Miranda Goshawk, Charm)\nCurrently available.\n\n\
             2: Basic Curses (Miranda Goshawk, Curse)\nCurrently available.",
            "Success.",
            "2: Basic Curses (Miranda Goshawk, Curse)\nCurrently available.",
            "Success.",
            "No spellbooks available.",
            "No spellbooks available."
        ]
    );
}
