// tests/process_key_properties.rs

use proptest::prelude::*;

use hookshell::command::{resolve, CommandSpec};

fn token() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9._/-]{1,12}"
}

proptest! {
    #[test]
    fn key_without_args_is_the_program(program in token()) {
        let cmd = resolve(&CommandSpec::structured(program.clone(), Vec::<String>::new()), &[]).unwrap();
        let key = cmd.key();
        prop_assert_eq!(key.as_str(), program.as_str());
    }

    #[test]
    fn key_with_args_joins_with_single_spaces(
        program in token(),
        args in proptest::collection::vec(token(), 1..6),
    ) {
        let cmd = resolve(&CommandSpec::structured(program.clone(), args.clone()), &[]).unwrap();
        let expected = format!("{} {}", program, args.join(" "));
        let key = cmd.key();
        prop_assert_eq!(key.as_str(), expected.as_str());
    }

    #[test]
    fn literal_and_structured_agree_on_whitespace_free_tokens(
        program in token(),
        args in proptest::collection::vec(token(), 0..6),
    ) {
        let line = std::iter::once(program.clone())
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");
        let literal = resolve(&CommandSpec::literal(line.clone()), &[]).unwrap();
        let structured = resolve(&CommandSpec::structured(program, args), &[]).unwrap();
        prop_assert_eq!(&literal, &structured);
        let key = literal.key();
        prop_assert_eq!(key.as_str(), line.as_str());
    }
}
