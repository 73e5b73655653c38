//! Tag command walkthrough
//!
//! Runs every command against a small JSX snippet and prints the document after each step.
//! Set `RUST_LOG=debug` to see the scanner diagnostics.

use tagsurf_core::{Command, CommandExecutor, Position, Selection, TagConfig};
use tagsurf_lang::MarkupDialect;

const SOURCE: &str = "\
<main>
  <section>
    <h1>Title</h1>
    <p>Some (nested) text</p>
  </section>
</main>";

fn show(step: &str, executor: &CommandExecutor) {
    println!("--- {step}");
    println!("{}", executor.document().get_text());
    println!("selections: {:?}\n", executor.selections());
}

fn main() {
    env_logger::init();

    let config = TagConfig::from_json_str(r#"{"defaultInlineTag":"em","autoRename":true}"#)
        .unwrap_or_else(|err| panic!("invalid demo config: {err}"));
    let mut executor =
        CommandExecutor::with_config(SOURCE, MarkupDialect::from_path("App.tsx"), config);
    show("initial", &executor);

    // 1. Jump from inside <h1> to </h1>.
    executor.set_selections(vec![Selection::caret(Position::new(2, 6))]);
    let result = executor.execute(Command::JumpToMatchingPair).unwrap();
    println!("jump: {result:?}");
    show("after jump", &executor);

    // 2. Wrap "nested" in the default inline tag.
    executor.set_selections(vec![Selection::new(
        Position::new(3, 13),
        Position::new(3, 19),
    )]);
    let result = executor
        .execute(Command::SurroundWithTag { tag_name: None })
        .unwrap();
    println!("surround: {result:?}");
    show("after surround", &executor);

    // 3. Give <p> a class attribute.
    executor.set_selections(vec![Selection::caret(Position::new(3, 8))]);
    let result = executor.execute(Command::FocusClassName).unwrap();
    println!("focus class: {result:?}");
    show("after focus class", &executor);

    // 4. Unwrap the <section>; its lines disappear, the content stays.
    executor.set_selections(vec![Selection::caret(Position::new(1, 5))]);
    let result = executor.execute(Command::DeleteSurroundingTagPair).unwrap();
    println!("delete pair: {result:?}");
    show("after delete pair", &executor);

    // 5. Select the opening <main> line; </main> goes with it.
    executor.set_selections(vec![Selection::new(
        Position::new(0, 0),
        Position::new(0, 6),
    )]);
    let result = executor.execute(Command::DeleteSelectionWithPairs).unwrap();
    println!("delete with pairs: {result:?}");
    show("after delete with pairs", &executor);
}
