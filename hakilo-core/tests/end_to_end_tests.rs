//! End-to-end tests for sentence splitting

use hakilo_core::{process, split_text, Input};
use std::io::Cursor;

#[test]
fn test_single_sentence() {
    assert_eq!(split_text("Hello world."), vec!["Hello world."]);
}

#[test]
fn test_honorific_does_not_split() {
    assert_eq!(
        split_text("Dr. Smith went home. He was tired."),
        vec!["Dr. Smith went home.", "He was tired."]
    );
}

#[test]
fn test_quoted_exclamation_then_capital() {
    assert_eq!(
        split_text("She said, \"Stop!\" Then left."),
        vec!["She said, \"Stop!\"", "Then left."]
    );
}

#[test]
fn test_initials_do_not_split() {
    assert_eq!(
        split_text("J. K. Rowling wrote it."),
        vec!["J. K. Rowling wrote it."]
    );
}

#[test]
fn test_empty_input() {
    assert!(split_text("").is_empty());
}

#[test]
fn test_question_and_exclamation() {
    assert_eq!(
        split_text("Is it raining? Yes! Take an umbrella."),
        vec!["Is it raining?", "Yes!", "Take an umbrella."]
    );
}

#[test]
fn test_glued_abbreviation() {
    // Inner periods are glued to letters; the final "A." reads as an initial
    assert_eq!(
        split_text("He moved to the U.S.A. Then he left."),
        vec!["He moved to the U.S.A. Then he left."]
    );
    assert_eq!(
        split_text("He moved to the U.S.A.\nThen he left."),
        vec!["He moved to the U.S.A.", "Then he left."]
    );
}

#[test]
fn test_military_ranks() {
    assert_eq!(
        split_text("Capt. Miller and Sgt. Horvath landed. Cpl. Upham stayed."),
        vec![
            "Capt. Miller and Sgt. Horvath landed.",
            "Cpl. Upham stayed."
        ]
    );
}

#[test]
fn test_lowercase_after_period_continues() {
    assert_eq!(
        split_text("It cost 5 dollars. or so they said."),
        vec!["It cost 5 dollars. or so they said."]
    );
}

#[test]
fn test_ellipsis_inside_sentence() {
    assert_eq!(
        split_text("I think... perhaps not. Fine."),
        vec!["I think... perhaps not.", "Fine."]
    );
}

#[test]
fn test_punctuation_before_line_break() {
    assert_eq!(
        split_text("first line ends here.\nsecond line starts lower."),
        vec!["first line ends here.", "second line starts lower."]
    );
}

#[test]
fn test_single_newline_does_not_split() {
    assert_eq!(
        split_text("a sentence that wraps\nonto the next line."),
        vec!["a sentence that wraps\nonto the next line."]
    );
}

#[test]
fn test_blank_line_splits_unpunctuated_heading() {
    assert_eq!(
        split_text("Chapter One\n\nIt was a dark night."),
        vec!["Chapter One", "It was a dark night."]
    );
    assert_eq!(
        split_text("Title\r\n\r\nBody text."),
        vec!["Title", "Body text."]
    );
}

#[test]
fn test_form_feed_splits() {
    assert_eq!(
        split_text("page one\u{000C}page two"),
        vec!["page one", "page two"]
    );
}

#[test]
fn test_closing_bracket_then_capital() {
    assert_eq!(
        split_text("He agreed (mostly.) Then we ate."),
        vec!["He agreed (mostly.)", "Then we ate."]
    );
}

#[test]
fn test_closing_quote_then_lowercase() {
    assert_eq!(
        split_text("\"Go!\" he shouted. We went."),
        vec!["\"Go!\" he shouted.", "We went."]
    );
}

#[test]
fn test_guillemets() {
    assert_eq!(
        split_text("\u{00AB}Kie vi estas?\u{00BB} Li respondis."),
        vec!["\u{00AB}Kie vi estas?\u{00BB}", "Li respondis."]
    );
}

#[test]
fn test_non_latin_capitals() {
    assert_eq!(
        split_text("Он пришёл. Она ушла."),
        vec!["Он пришёл.", "Она ушла."]
    );
}

#[test]
fn test_number_only_fragments_are_dropped() {
    assert_eq!(split_text("1.\n\n2.\n\nReal text."), vec!["Real text."]);
}

#[test]
fn test_dotted_abbreviation_before_capital_splits() {
    // Only the undotted spellings are caught at the final period
    assert_eq!(
        split_text("Bring fruit, e.g. Apples."),
        vec!["Bring fruit, e.g.", "Apples."]
    );
    assert_eq!(
        split_text("Bring fruit, eg. Apples."),
        vec!["Bring fruit, eg. Apples."]
    );
}

#[test]
fn test_rejoined_sentences_do_not_multiply() {
    let texts = [
        "Dr. Smith went home. He was tired.",
        "Chapter One\n\nIt was a dark night. The wind howled!",
        "She said, \"Stop!\" Then left. Nobody followed.",
        "J. K. Rowling wrote it. Many read it.",
    ];
    for text in texts {
        let first = split_text(text);
        let rejoined = split_text(&first.join(" "));
        assert!(
            rejoined.len() <= first.len(),
            "{text:?}: {first:?} became {rejoined:?}"
        );
    }
}

#[test]
fn test_process_reader_input() {
    let data = b"First sentence. Second sentence! Third sentence?".to_vec();
    let output = process(Input::from_reader(Cursor::new(data))).unwrap();
    assert_eq!(output.metadata.sentence_count, 3);
    assert_eq!(output.metadata.total_chars, 48);
}
