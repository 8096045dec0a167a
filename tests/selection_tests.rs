use courtside::error::CourtsideError;
use courtside::selection::{
    Notifier, Position, RosterSelector, Side, DUPLICATE_PLAYER_MESSAGE,
};

#[derive(Default)]
struct RecordingNotifier {
    errors: Vec<(String, String)>,
}

impl Notifier for RecordingNotifier {
    fn error(&mut self, title: &str, message: &str) {
        self.errors.push((title.to_string(), message.to_string()));
    }
}

#[test]
fn test_duplicate_reverts_second_slot_and_keeps_first() {
    let mut sel = RosterSelector::new();
    let mut n = RecordingNotifier::default();

    sel.set_slot(Side::Ours, Position::PointGuard, "Ann", &mut n)
        .unwrap();
    let err = sel
        .set_slot(Side::Ours, Position::Center, "Ann", &mut n)
        .unwrap_err();

    assert!(matches!(
        err,
        CourtsideError::DuplicateSelection {
            taken: Position::PointGuard,
            ..
        }
    ));
    assert_eq!(sel.slot(Side::Ours, Position::PointGuard), Some("Ann"));
    assert_eq!(sel.slot(Side::Ours, Position::Center), None);
    assert_eq!(n.errors.len(), 1);
    assert_eq!(n.errors[0].0, "Error");
    assert_eq!(n.errors[0].1, DUPLICATE_PLAYER_MESSAGE);
}

#[test]
fn test_duplicate_overwrites_previous_value_with_empty() {
    let mut sel = RosterSelector::new();
    let mut n = RecordingNotifier::default();

    sel.set_slot(Side::Opponent, Position::ShootingGuard, "Bo", &mut n)
        .unwrap();
    sel.set_slot(Side::Opponent, Position::Center, "Cy", &mut n)
        .unwrap();
    // Changing C from Cy to Bo is rejected; Cy is gone too.
    assert!(sel
        .set_slot(Side::Opponent, Position::Center, "Bo", &mut n)
        .is_err());
    assert_eq!(sel.slot(Side::Opponent, Position::Center), None);
    assert_eq!(sel.get_selected(Side::Opponent), ["Bo"]);
}

#[test]
fn test_get_selected_follows_position_order_and_skips_empty() {
    let mut sel = RosterSelector::new();
    let mut n = RecordingNotifier::default();

    sel.set_slot(Side::Ours, Position::Center, "E", &mut n).unwrap();
    sel.set_slot(Side::Ours, Position::PointGuard, "A", &mut n)
        .unwrap();
    sel.set_slot(Side::Ours, Position::SmallForward, "C", &mut n)
        .unwrap();

    assert_eq!(sel.get_selected(Side::Ours), ["A", "C", "E"]);
    assert!(!sel.is_complete(Side::Ours));
    assert!(n.errors.is_empty());
}

#[test]
fn test_empty_write_clears_slot() {
    let mut sel = RosterSelector::new();
    let mut n = RecordingNotifier::default();

    sel.set_slot(Side::Ours, Position::PowerForward, "D", &mut n)
        .unwrap();
    sel.set_slot(Side::Ours, Position::PowerForward, "", &mut n)
        .unwrap();
    assert_eq!(sel.slot(Side::Ours, Position::PowerForward), None);

    // Freed name can now go elsewhere.
    sel.set_slot(Side::Ours, Position::Center, "D", &mut n)
        .unwrap();
    assert!(n.errors.is_empty());
}

#[test]
fn test_sides_are_independent() {
    let mut sel = RosterSelector::new();
    let mut n = RecordingNotifier::default();

    for (i, b) in RosterSelector::bindings(Side::Ours).enumerate() {
        b.write(&mut sel, &format!("P{}", i), &mut n).unwrap();
    }
    assert!(sel.is_complete(Side::Ours));
    assert!(sel.get_selected(Side::Opponent).is_empty());
    assert_eq!(sel.selection(Side::Ours).filled(), 5);
}

#[test]
fn test_each_duplicate_attempt_notifies_once() {
    let mut sel = RosterSelector::new();
    let mut n = RecordingNotifier::default();

    sel.set_slot(Side::Ours, Position::PointGuard, "Ann", &mut n)
        .unwrap();
    for p in [Position::ShootingGuard, Position::SmallForward, Position::Center] {
        let _ = sel.set_slot(Side::Ours, p, "Ann", &mut n);
    }
    assert_eq!(n.errors.len(), 3);
    assert_eq!(sel.get_selected(Side::Ours), ["Ann"]);
}
