//! Exploration scenarios driven through in-memory input and output

use std::collections::BTreeSet;
use std::io::Cursor;

use rstest::rstest;

use mansao::builder;
use mansao::navigator::{MSG_COMPLETED, MSG_INVALID_OPTION, MSG_INVALID_PATH, MSG_NO_MANSION};
use mansao::util::testing;
use mansao::{explore, Exploration, MansionArena, Navigator, Step};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn run(input: &[u8]) -> (Exploration, String) {
    let mansion = builder::build().unwrap();
    let mut out = Vec::new();
    let result = explore(&mansion, Cursor::new(input.to_vec()), &mut out).unwrap();
    (result, String::from_utf8(out).unwrap())
}

fn visited(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter_map(|line| line.strip_prefix("Voce esta em: "))
        .collect()
}

fn trail(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn given_left_left_left_when_exploring_then_ends_in_jardim() {
    let (result, output) = run(b"E\nE\nE\n");

    assert_eq!(
        visited(&output),
        vec!["Hall de Entrada", "Sala de Estar", "Cozinha", "Jardim"]
    );
    assert!(output.contains(MSG_COMPLETED));
    assert!(output.contains("Voce chegou a um comodo que nao possui saidas (No-Folha): Jardim"));
    assert_eq!(
        result,
        Exploration::Completed {
            leaf: "Jardim".to_string(),
            trail: trail(&["Hall de Entrada", "Sala de Estar", "Cozinha", "Jardim"]),
        }
    );
}

#[test]
fn given_right_right_when_exploring_then_ends_in_quarto_principal() {
    let (result, output) = run(b"D\nD\n");

    assert_eq!(
        visited(&output),
        vec!["Hall de Entrada", "Escritorio", "Quarto Principal"]
    );
    assert!(output.contains("Caminho percorrido: Hall de Entrada -> Escritorio -> Quarto Principal"));
    assert!(matches!(result, Exploration::Completed { leaf, .. } if leaf == "Quarto Principal"));
}

#[test]
fn given_left_right_left_when_exploring_then_ends_in_varanda() {
    let (result, output) = run(b"E\nD\nE\n");

    assert_eq!(
        visited(&output),
        vec!["Hall de Entrada", "Sala de Estar", "Biblioteca", "Varanda"]
    );
    assert!(matches!(result, Exploration::Completed { leaf, .. } if leaf == "Varanda"));
}

#[rstest]
#[case(b"e\ne\ne\n".as_slice(), "Jardim")]
#[case(b"E\nE\nD\nE\n".as_slice(), "Porao")]
#[case(b"e\nd\ne\n".as_slice(), "Varanda")]
#[case(b"d\nd\n".as_slice(), "Quarto Principal")]
#[case(b"EEDE\n".as_slice(), "Porao")]
#[case(b"  d   \n\n\td   \n".as_slice(), "Quarto Principal")]
fn given_choice_sequence_when_exploring_then_reaches_expected_leaf(
    #[case] input: &[u8],
    #[case] leaf: &str,
) {
    let (result, _) = run(input);
    assert!(matches!(result, Exploration::Completed { leaf: reached, .. } if reached == leaf));
}

#[test]
fn given_missing_exit_when_choosing_it_then_stays_in_escritorio() {
    let (result, output) = run(b"D\nE\nD\n");

    assert_eq!(
        visited(&output),
        vec!["Hall de Entrada", "Escritorio", "Escritorio", "Quarto Principal"]
    );
    assert_eq!(output.matches(MSG_INVALID_PATH).count(), 1);
    assert!(!output.contains(MSG_INVALID_OPTION));
    assert!(matches!(result, Exploration::Completed { leaf, .. } if leaf == "Quarto Principal"));
}

#[rstest]
#[case(b"".as_slice(), "Hall de Entrada")]
#[case(b"E\n".as_slice(), "Sala de Estar")]
#[case(b"D\n".as_slice(), "Escritorio")]
#[case(b"E\nE\n".as_slice(), "Cozinha")]
#[case(b"E\nD\n".as_slice(), "Biblioteca")]
#[case(b"E\nE\nD\n".as_slice(), "Dispensa")]
fn given_unknown_key_at_room_when_choosing_then_state_is_unchanged(
    #[case] prefix: &[u8],
    #[case] room: &str,
) {
    let mut input = prefix.to_vec();
    input.extend_from_slice(b"x\n");

    let (result, output) = run(&input);

    let rooms = visited(&output);
    assert_eq!(output.matches(MSG_INVALID_OPTION).count(), 1);
    assert!(!output.contains(MSG_INVALID_PATH));
    assert_eq!(rooms.iter().filter(|&&r| r == room).count(), 2);
    assert_eq!(rooms.last(), Some(&room));
    assert!(matches!(result, Exploration::InputClosed { room: stopped, .. } if stopped == room));
}

#[test]
fn given_unknown_key_then_valid_choices_when_exploring_then_continues_from_same_room() {
    let (result, output) = run(b"x\nE\nD\nE\n");

    assert_eq!(
        visited(&output),
        vec![
            "Hall de Entrada",
            "Hall de Entrada",
            "Sala de Estar",
            "Biblioteca",
            "Varanda"
        ]
    );
    assert_eq!(output.matches(MSG_INVALID_OPTION).count(), 1);
    assert!(matches!(result, Exploration::Completed { leaf, .. } if leaf == "Varanda"));
}

#[test]
fn given_exits_when_prompting_then_lists_only_present_ones() {
    let (_, output) = run(b"D\nD\n");

    let sections: Vec<&str> = output.split("Voce esta em: ").collect();
    let hall = sections[1];
    let escritorio = sections[2];

    assert!(hall.contains("[E] Esquerda (para Sala de Estar)"));
    assert!(hall.contains("[D] Direita (para Escritorio)"));
    assert!(!escritorio.contains("[E]"));
    assert!(escritorio.contains("[D] Direita (para Quarto Principal)"));
    assert!(escritorio.contains("Escolha (e/d):"));
}

#[test]
fn given_vertical_tab_before_choice_when_reading_then_skips_it() {
    let (result, output) = run(b"\x0bD\nD\n");

    assert!(!output.contains(MSG_INVALID_OPTION));
    assert!(matches!(result, Exploration::Completed { leaf, .. } if leaf == "Quarto Principal"));
}

#[test]
fn given_invalid_utf8_when_reading_then_discards_rest_of_line() {
    let (result, output) = run(b"\xff xyz\nD\nD\n");

    assert_eq!(output.matches(MSG_INVALID_OPTION).count(), 1);
    assert_eq!(
        visited(&output),
        vec!["Hall de Entrada", "Hall de Entrada", "Escritorio", "Quarto Principal"]
    );
    assert!(matches!(result, Exploration::Completed { leaf, .. } if leaf == "Quarto Principal"));
}

#[test]
fn given_input_ends_early_when_exploring_then_stops_with_input_closed() {
    let (result, output) = run(b"E\n");

    assert_eq!(
        result,
        Exploration::InputClosed {
            room: "Sala de Estar".to_string(),
            trail: trail(&["Hall de Entrada", "Sala de Estar"]),
        }
    );
    assert!(output.contains("Entrada encerrada. Exploracao interrompida em: Sala de Estar"));
    assert!(!output.contains(MSG_COMPLETED));
}

#[test]
fn given_no_input_when_exploring_then_stops_at_entrance() {
    let (result, _) = run(b"");
    assert!(matches!(result, Exploration::InputClosed { room, .. } if room == "Hall de Entrada"));
}

#[test]
fn given_input_after_leaf_when_exploring_then_it_is_ignored() {
    let (result, output) = run(b"D\nD\nE\nE\nx\n");

    assert_eq!(output.matches("Voce esta em: ").count(), 3);
    assert!(!output.contains(MSG_INVALID_OPTION));
    assert!(matches!(result, Exploration::Completed { leaf, .. } if leaf == "Quarto Principal"));
}

#[test]
fn given_empty_mansion_when_exploring_then_reports_it_and_succeeds() {
    let mansion = MansionArena::new();
    let mut out = Vec::new();

    let result = explore(&mansion, Cursor::new(b"E\n".to_vec()), &mut out).unwrap();

    assert_eq!(result, Exploration::NoMansion);
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains(MSG_NO_MANSION));
    assert!(!output.contains("Voce esta em: "));
}

/// Follows every available exit from the entrance and records where each walk stops.
fn walk_all(navigator: &Navigator<'_>, ends: &mut Vec<(String, usize)>) {
    if navigator.is_finished() {
        let moves = navigator.trail().len() - 1;
        ends.push((navigator.current_room().name().to_string(), moves));
        return;
    }
    for (direction, _) in navigator.available() {
        let mut next = navigator.clone();
        assert!(matches!(next.step(direction).unwrap(), Step::Moved(_)));
        walk_all(&next, ends);
    }
}

#[test]
fn given_any_valid_choices_when_walking_then_ends_at_a_leaf_within_four_moves() {
    let mansion = builder::build().unwrap();
    let navigator = Navigator::new(&mansion).unwrap();

    let mut ends = Vec::new();
    walk_all(&navigator, &mut ends);

    let leaves: BTreeSet<&str> = ends.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(
        leaves,
        BTreeSet::from(["Jardim", "Porao", "Quarto Principal", "Varanda"])
    );
    assert_eq!(ends.len(), 4);
    assert!(ends.iter().all(|(_, moves)| *moves <= 4));
    assert!(ends.contains(&("Quarto Principal".to_string(), 2)));
    assert!(ends.contains(&("Porao".to_string(), 4)));
}
