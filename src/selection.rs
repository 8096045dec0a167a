use crate::error::{CourtsideError, CsResult};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, error};

pub const DUPLICATE_PLAYER_MESSAGE: &str = "Player already selected in another position!";

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum Position {
    #[strum(to_string = "PG")]
    PointGuard,
    #[strum(to_string = "SG")]
    ShootingGuard,
    #[strum(to_string = "SF")]
    SmallForward,
    #[strum(to_string = "PF")]
    PowerForward,
    #[strum(to_string = "C")]
    Center,
}

impl Position {
    pub const COUNT: usize = 5;

    /// Slot index in lineup order (PG = 0 .. C = 4).
    pub fn index(self) -> usize {
        match self {
            Self::PointGuard => 0,
            Self::ShootingGuard => 1,
            Self::SmallForward => 2,
            Self::PowerForward => 3,
            Self::Center => 4,
        }
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::iter().nth(idx)
    }
}

#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, clap::ValueEnum,
)]
#[strum(ascii_case_insensitive)]
pub enum Side {
    #[strum(to_string = "Your Team", serialize = "ours")]
    Ours,
    #[strum(to_string = "Opponent's Team", serialize = "opponent")]
    Opponent,
}

impl Side {
    fn index(self) -> usize {
        match self {
            Self::Ours => 0,
            Self::Opponent => 1,
        }
    }
}

/// Where duplicate-selection errors are surfaced to the user.
pub trait Notifier {
    fn error(&mut self, title: &str, message: &str);
}

/// Reports errors through the tracing subscriber.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn error(&mut self, title: &str, message: &str) {
        error!("❌ {}: {}", title, message);
    }
}

/// One side's five position slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    slots: [Option<String>; Position::COUNT],
}

impl Selection {
    pub fn get(&self, position: Position) -> Option<&str> {
        self.slots[position.index()].as_deref()
    }

    /// Position currently holding `name`, ignoring `except`.
    fn holder_of(&self, name: &str, except: Position) -> Option<Position> {
        Position::iter()
            .filter(|&p| p != except)
            .find(|&p| self.get(p) == Some(name))
    }

    fn set(&mut self, position: Position, name: Option<String>) {
        self.slots[position.index()] = name;
    }

    /// Chosen names in PG..C order, empty slots skipped.
    pub fn selected(&self) -> Vec<String> {
        self.slots.iter().flatten().cloned().collect()
    }

    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

/// Slot table indexed by (side, position).
#[derive(Debug, Clone, Default)]
pub struct RosterSelector {
    table: [Selection; 2],
}

impl RosterSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrained write. A name already held by another position on the same
    /// side is rejected: the slot is cleared and the notifier fires once.
    pub fn set_slot(
        &mut self,
        side: Side,
        position: Position,
        player_name: &str,
        notifier: &mut dyn Notifier,
    ) -> CsResult<()> {
        let name = player_name.trim();
        let selection = &mut self.table[side.index()];

        if name.is_empty() {
            selection.set(position, None);
            return Ok(());
        }

        if let Some(taken) = selection.holder_of(name, position) {
            selection.set(position, None);
            notifier.error("Error", DUPLICATE_PLAYER_MESSAGE);
            return Err(CourtsideError::DuplicateSelection {
                side,
                name: name.to_string(),
                taken,
            });
        }

        debug!("{} {} <- {}", side, position, name);
        selection.set(position, Some(name.to_string()));
        Ok(())
    }

    pub fn slot(&self, side: Side, position: Position) -> Option<&str> {
        self.table[side.index()].get(position)
    }

    pub fn get_selected(&self, side: Side) -> Vec<String> {
        self.table[side.index()].selected()
    }

    pub fn selection(&self, side: Side) -> &Selection {
        &self.table[side.index()]
    }

    pub fn is_complete(&self, side: Side) -> bool {
        self.table[side.index()].filled() == Position::COUNT
    }

    pub fn clear(&mut self, side: Side) {
        self.table[side.index()] = Selection::default();
    }

    /// Write handles for every slot of `side`, in position order.
    pub fn bindings(side: Side) -> impl Iterator<Item = SlotBinding> {
        Position::iter().map(move |position| SlotBinding { side, position })
    }
}

/// Splits a comma separated lineup given in PG..C order. Blank entries
/// leave their slot empty.
pub fn parse_lineup(spec: &str) -> CsResult<Vec<String>> {
    let names: Vec<String> = spec.split(',').map(|s| s.trim().to_string()).collect();
    if names.len() > Position::COUNT {
        return Err(CourtsideError::Config(format!(
            "A lineup has at most {} players, got {}",
            Position::COUNT,
            names.len()
        )));
    }
    Ok(names)
}

/// A slot's identity, fixed when the handle is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotBinding {
    pub side: Side,
    pub position: Position,
}

impl SlotBinding {
    pub fn write(
        &self,
        selector: &mut RosterSelector,
        player_name: &str,
        notifier: &mut dyn Notifier,
    ) -> CsResult<()> {
        selector.set_slot(self.side, self.position, player_name, notifier)
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.side, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Notifier for Recorder {
        fn error(&mut self, _title: &str, message: &str) {
            self.0.push(message.to_string());
        }
    }

    #[test]
    fn test_position_order_and_labels() {
        let labels: Vec<String> = Position::iter().map(|p| p.to_string()).collect();
        assert_eq!(labels, ["PG", "SG", "SF", "PF", "C"]);
        for (i, p) in Position::iter().enumerate() {
            assert_eq!(p.index(), i);
            assert_eq!(Position::from_index(i), Some(p));
        }
        assert_eq!(Position::from_index(5), None);
        assert_eq!(Position::from_str("pf").unwrap(), Position::PowerForward);
    }

    #[test]
    fn test_parse_lineup() {
        assert_eq!(parse_lineup("A, B,,D ,E").unwrap(), ["A", "B", "", "D", "E"]);
        assert_eq!(parse_lineup("A").unwrap(), ["A"]);
        assert!(parse_lineup("A,B,C,D,E,F").is_err());
    }

    #[test]
    fn test_side_labels() {
        assert_eq!(Side::Ours.to_string(), "Your Team");
        assert_eq!(Side::Opponent.to_string(), "Opponent's Team");
        assert_eq!(Side::from_str("opponent").unwrap(), Side::Opponent);
    }

    #[test]
    fn test_duplicate_on_other_side_is_allowed() {
        let mut sel = RosterSelector::new();
        let mut rec = Recorder::default();
        sel.set_slot(Side::Ours, Position::Center, "Ann", &mut rec)
            .unwrap();
        sel.set_slot(Side::Opponent, Position::Center, "Ann", &mut rec)
            .unwrap();
        assert!(rec.0.is_empty());
    }

    #[test]
    fn test_rewrite_same_slot_is_accepted() {
        let mut sel = RosterSelector::new();
        let mut rec = Recorder::default();
        sel.set_slot(Side::Ours, Position::PointGuard, "Ann", &mut rec)
            .unwrap();
        sel.set_slot(Side::Ours, Position::PointGuard, "Ann", &mut rec)
            .unwrap();
        assert_eq!(sel.slot(Side::Ours, Position::PointGuard), Some("Ann"));
        assert!(rec.0.is_empty());
    }

    #[test]
    fn test_bindings_capture_their_own_slot() {
        let mut sel = RosterSelector::new();
        let mut rec = Recorder::default();
        let bindings: Vec<SlotBinding> = RosterSelector::bindings(Side::Opponent).collect();
        for (b, name) in bindings.iter().zip(["A", "B", "C", "D", "E"]) {
            b.write(&mut sel, name, &mut rec).unwrap();
        }
        assert_eq!(bindings[2].label(), "Opponent's Team SF");
        assert_eq!(sel.slot(Side::Opponent, Position::SmallForward), Some("C"));
        assert!(sel.is_complete(Side::Opponent));
        assert!(!sel.is_complete(Side::Ours));

        sel.clear(Side::Opponent);
        assert!(sel.get_selected(Side::Opponent).is_empty());
    }
}
