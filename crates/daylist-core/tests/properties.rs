//! Property tests for the task board.
//!
//! 1. Any sequence of non-blank adds yields one task per add, in order, with unique ids.
//! 2. Blank text never changes the board.
//! 3. Toggling twice is the identity; unknown ids are ignored.
//! 4. Deleting removes exactly the matching task and is idempotent.

use std::collections::HashSet;

use daylist_core::{TaskBoard, TaskId};
use proptest::prelude::*;

/// Task text with at least one visible character.
fn arb_text() -> impl Strategy<Value = String> {
    "[ ]{0,3}[a-zA-Z0-9<>&\"'][a-zA-Z0-9 <>&\"']{0,40}"
}

fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t\n]{0,8}"
}

/// Non-decreasing clock readings, including repeats within a millisecond.
fn arb_texts_with_clock() -> impl Strategy<Value = Vec<(String, i64)>> {
    prop::collection::vec((arb_text(), 0_i64..3), 1..40).prop_map(|steps| {
        let mut clock = 1_741_000_000_000_i64;
        steps
            .into_iter()
            .map(|(text, advance)| {
                clock += advance;
                (text, clock)
            })
            .collect()
    })
}

fn build(steps: &[(String, i64)]) -> TaskBoard {
    let mut board = TaskBoard::new();
    for (text, clock) in steps {
        board.add(text, *clock, "12:00 PM").expect("non-blank text is accepted");
    }
    board
}

proptest! {
    #[test]
    fn adds_preserve_count_order_and_unique_ids(steps in arb_texts_with_clock()) {
        let board = build(&steps);

        prop_assert_eq!(board.len(), steps.len());
        for (task, (text, _)) in board.tasks().iter().zip(&steps) {
            prop_assert_eq!(&task.text, text.trim());
        }

        let ids: HashSet<TaskId> = board.tasks().iter().map(|task| task.id).collect();
        prop_assert_eq!(ids.len(), steps.len());
        prop_assert!(board.tasks().windows(2).all(|pair| pair[0].id < pair[1].id));
    }

    #[test]
    fn blank_text_is_rejected(steps in arb_texts_with_clock(), blank in arb_blank()) {
        let mut board = build(&steps);
        let before = board.clone();
        prop_assert!(board.add(&blank, 1_741_100_000_000, "12:00 PM").is_err());
        prop_assert_eq!(board, before);
    }

    #[test]
    fn toggle_is_an_involution(steps in arb_texts_with_clock(), pick in any::<prop::sample::Index>()) {
        let mut board = build(&steps);
        let before = board.clone();
        let id = board.tasks()[pick.index(board.len())].id;

        prop_assert!(board.toggle_completed(id));
        prop_assert!(board.toggle_completed(id));
        prop_assert_eq!(board.tasks(), before.tasks());

        prop_assert!(!board.toggle_completed(TaskId::from_millis(1)));
        prop_assert_eq!(board.tasks(), before.tasks());
    }

    #[test]
    fn delete_removes_exactly_one_task(steps in arb_texts_with_clock(), pick in any::<prop::sample::Index>()) {
        let mut board = build(&steps);
        let victim = pick.index(board.len());
        let id = board.tasks()[victim].id;
        let mut expected = board.tasks().to_vec();
        expected.remove(victim);

        prop_assert!(board.delete(id));
        prop_assert_eq!(board.tasks(), expected.as_slice());

        prop_assert!(!board.delete(id));
        prop_assert_eq!(board.tasks(), expected.as_slice());
    }
}
