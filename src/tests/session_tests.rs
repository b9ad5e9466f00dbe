// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tests for the command session.

use test_case::test_case;

use crate::config::OutputFormat;
use crate::data_structures::LauTrie;
use crate::error::SessionError;
use crate::session::{Session, SessionCommand};

fn run_script(trie: LauTrie, script: &str, format: OutputFormat) -> (String, LauTrie) {
    let mut out = Vec::new();
    let trie = {
        let mut session = Session::new(trie, &mut out, format);
        session.run(script.as_bytes()).unwrap();
        session.into_trie()
    };
    (String::from_utf8(out).unwrap(), trie)
}

#[test_case("insert anna", SessionCommand::Insert("anna".into()) ; "insert")]
#[test_case("exists tea", SessionCommand::Exists("tea".into()) ; "exists")]
#[test_case("search te", SessionCommand::Search("te".into()) ; "search")]
#[test_case("delete an", SessionCommand::Delete("an".into()) ; "delete")]
#[test_case("  SEARCH   te  ", SessionCommand::Search("te".into()) ; "case and padding")]
#[test_case("insert ice cream", SessionCommand::Insert("ice cream".into()) ; "argument with spaces")]
#[test_case("len", SessionCommand::Len ; "len")]
#[test_case("dump", SessionCommand::Dump ; "dump")]
#[test_case("clear", SessionCommand::Clear ; "clear")]
#[test_case("help", SessionCommand::Help ; "help")]
#[test_case("exit", SessionCommand::Quit ; "exit alias")]
fn test_parse_command(line: &str, expected: SessionCommand) {
    assert_eq!(line.parse::<SessionCommand>(), Ok(expected));
}

#[test_case("insert", SessionError::MissingArgument { command: "insert" } ; "missing word")]
#[test_case("search   ", SessionError::MissingArgument { command: "search" } ; "blank prefix")]
#[test_case("dump all", SessionError::UnexpectedArgument { command: "dump", argument: "all".into() } ; "extra argument")]
#[test_case("find an", SessionError::UnknownCommand("find".into()) ; "unknown")]
fn test_parse_command_errors(line: &str, expected: SessionError) {
    assert_eq!(line.parse::<SessionCommand>(), Err(expected));
}

#[test]
fn test_plain_output() {
    let script = "\
insert tea
insert teapot
insert teavana
search te
exists teapot
delete tea
delete tea
search te
len
";
    let (output, trie) = run_script(LauTrie::new(), script, OutputFormat::Plain);
    assert_eq!(
        output,
        "tea\nteapot\nteavana\ntrue\ntrue\nfalse\nteapot\nteavana\n2\n"
    );
    assert_eq!(trie.len(), 2);
}

#[test]
fn test_json_output() {
    let trie: LauTrie = ["an", "anna", "annabelle"].into_iter().collect();
    let script = "search an\nsearch zebra\nexists ann\nlen\nbogus\n";
    let (output, _) = run_script(trie, script, OutputFormat::Json);
    assert_eq!(
        output,
        "[\"an\",\"anna\",\"annabelle\"]\n[]\nfalse\n3\n{\"error\":\"Unknown command: bogus\"}\n"
    );
}

#[test]
fn test_dump_and_clear() {
    let trie: LauTrie = ["an", "to"].into_iter().collect();
    let (output, trie) = run_script(trie, "dump\nclear\nlen\n", OutputFormat::Plain);
    assert_eq!(output, "a() t() \nn(*) o(*) \n0\n");
    assert_eq!(trie.node_count(), 1);

    let (output, _) = run_script(
        ["an"].into_iter().collect(),
        "dump\n",
        OutputFormat::Json,
    );
    assert_eq!(output, "\"a() \\nn(*) \"\n");
}

#[test]
fn test_execute_quit_breaks() {
    let mut out = Vec::new();
    let mut session = Session::new(LauTrie::new(), &mut out, OutputFormat::Plain);
    assert!(session.execute(SessionCommand::Quit).unwrap().is_break());
    assert!(session
        .execute(SessionCommand::Insert("an".into()))
        .unwrap()
        .is_continue());
    assert!(session.trie().exists("an"));
}
