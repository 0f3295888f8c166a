//! Whole-grammar tests for the note parser.
//!
//! Concrete note bodies are pinned with inline `insta` debug snapshots;
//! `properties` covers termination, coverage and prefix composition with
//! `proptest`.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{Block, ParseError, parse_note};

#[test]
fn tag_at_start_then_prose() {
    assert_eq!(
        parse_note("#project some text"),
        Ok(vec![Block::Tag("#project"), Block::Text(" some text")])
    );
}

#[test]
fn fenced_code_then_prose() {
    assert_eq!(
        parse_note("```python\ncode\n```\nmore"),
        Ok(vec![
            Block::FencedCode {
                language: "python",
                text: "code\n",
            },
            Block::Text("more"),
        ])
    );
}

#[test]
fn note_link_inside_prose() {
    assert_eq!(
        parse_note("See [[Other Note]] for details"),
        Ok(vec![
            Block::Text("See "),
            Block::NoteLink("Other Note"),
            Block::Text(" for details"),
        ])
    );
}

#[test]
fn empty_input_has_no_blocks() {
    assert_eq!(parse_note(""), Ok(vec![]));
}

#[test]
fn tag_inside_inline_code_is_opaque() {
    assert_eq!(parse_note("`#tag`"), Ok(vec![Block::InlineCode("#tag")]));
}

#[test]
fn dangling_bracket_falls_back() {
    assert_eq!(
        parse_note("[dangling"),
        Ok(vec![Block::FallbackText("["), Block::Text("dangling")])
    );
    assert_eq!(
        parse_note("[\nmore text"),
        Ok(vec![Block::FallbackText("["), Block::Text("\nmore text")])
    );
}

#[rstest]
#[case("[[Title]]", "Title")]
#[case("[[Other Note]]", "Other Note")]
#[case("[[ ]]", " ")]
#[case("[[a/b: c]]", "a/b: c")]
fn double_brackets_are_one_note_link(#[case] input: &str, #[case] title: &str) {
    assert_eq!(parse_note(input), Ok(vec![Block::NoteLink(title)]));
}

#[test]
fn tag_after_prose_on_same_line() {
    assert_eq!(
        parse_note("some text and a #tag"),
        Ok(vec![Block::Text("some text and a "), Block::Tag("#tag")])
    );
}

#[test]
fn short_hash_tokens_are_not_tags() {
    assert_eq!(
        parse_note("#a b"),
        Ok(vec![Block::FallbackText("#"), Block::Text("a b")])
    );
    assert_eq!(
        parse_note("##tag"),
        Ok(vec![Block::FallbackText("#"), Block::Tag("#tag")])
    );
}

#[test]
fn single_character_link_text_reads_as_task() {
    assert_eq!(
        parse_note("[a](b)"),
        Ok(vec![Block::Task("(b)")])
    );
}

#[test]
fn lone_bracket_after_heading() {
    let markdown = " # Note\n [\n\nwith a bracket\n    ";
    insta::assert_debug_snapshot!(parse_note(markdown).unwrap(), @r###"
    [
        Text(
            " ",
        ),
        Heading(
            "Note",
        ),
        Text(
            "\n ",
        ),
        FallbackText(
            "[",
        ),
        Text(
            "\n\nwith a bracket\n    ",
        ),
    ]
    "###);
}

#[test]
fn mixed_note_body() {
    let markdown = "# Weekly review\n#work/planning\n[x] send report\nSee [[Roadmap]] and [the docs](https://example.com).\n```\nraw #not-a-tag\n```\nDone [1]";
    insta::assert_debug_snapshot!(parse_note(markdown).unwrap(), @r###"
    [
        Heading(
            "Weekly review",
        ),
        Text(
            "\n",
        ),
        Tag(
            "#work/planning",
        ),
        Text(
            "\n",
        ),
        Task(
            " send report",
        ),
        Text(
            "\nSee ",
        ),
        NoteLink(
            "Roadmap",
        ),
        Text(
            " and ",
        ),
        Link {
            text: "the docs",
            destination: "https://example.com",
        },
        Text(
            ".\n",
        ),
        BareFencedCode(
            "raw #not-a-tag\n",
        ),
        Text(
            "Done ",
        ),
        BracketFallback(
            "1",
        ),
    ]
    "###);
}

#[test]
fn unterminated_fence_degrades_to_fallbacks() {
    assert_eq!(
        parse_note("```oh crap\n"),
        Ok(vec![
            Block::FallbackText("`"),
            Block::FallbackText("`"),
            Block::FallbackText("`"),
            Block::Text("oh crap\n"),
        ])
    );
}

#[test]
fn only_specials_still_parse() {
    assert_eq!(
        parse_note("`#[]`#["),
        Ok(vec![
            Block::InlineCode("#[]"),
            Block::FallbackText("#"),
            Block::FallbackText("["),
        ])
    );
}

#[test]
fn parse_error_is_comparable() {
    let err = ParseError::NoMatch {
        remaining: "x".to_string(),
    };
    assert_eq!(err.remaining(), "x");
}
