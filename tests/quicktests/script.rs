use dendrology::order::OrderCode;
use dendrology::script::{parse, Command, Interpreter};

#[quickcheck]
fn interpreter_size_matches_distinct_words(words: Vec<String>) -> bool {
    let words: Vec<_> = words
        .into_iter()
        .filter(|word| !word.is_empty() && !word.contains(char::is_whitespace))
        .collect();
    let commands: Vec<_> = words.iter().cloned().map(Command::Insert).collect();

    let mut interpreter = Interpreter::new(OrderCode::Lexicographic);
    let mut sink = std::io::sink();
    interpreter.run(&commands, &mut sink).unwrap();

    let mut distinct = words;
    distinct.sort();
    distinct.dedup();
    interpreter.tree().iter().eq(distinct.iter())
}

#[quickcheck]
fn rendered_commands_parse_back(words: Vec<String>) -> bool {
    let commands: Vec<_> = words
        .into_iter()
        .filter(|word| !word.is_empty() && !word.contains(char::is_whitespace))
        .enumerate()
        .map(|(i, word)| match i % 5 {
            0 => Command::Insert(word),
            1 => Command::Delete(word),
            2 => Command::Stats,
            3 => Command::Traverse,
            _ => Command::Paths,
        })
        .collect();

    let script = commands
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    parse(&script) == Ok(commands)
}
