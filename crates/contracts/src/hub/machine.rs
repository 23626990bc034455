//! Input handling for the Knowledge Hub as an explicit state machine.
//!
//! The browser side only forwards events and executes the returned command;
//! timers are identified by generation so a late timer can never apply an
//! outdated query.

use super::card::CardMeta;
use super::category::Category;
use super::filter::{evaluate, FilterQuery, Visibility};
use super::pagination::PageWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HubPhase {
    #[default]
    Idle,
    /// Waiting for the debounce timer tagged `generation`.
    Filtering { generation: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HubEvent {
    /// The search box changed.
    Input(String),
    /// A debounce timer fired.
    DebounceElapsed(u64),
    /// A filter button was clicked.
    SelectCategory(Category),
    LoadMore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubCommand {
    /// Start a timer and feed `DebounceElapsed(generation)` back when done.
    Schedule { generation: u64, delay_ms: u32 },
    /// Visibility changed, re-apply it to the page.
    Render,
}

#[derive(Debug, Clone)]
pub struct HubMachine {
    cards: Vec<CardMeta>,
    filter: FilterQuery,
    /// Latest raw input not yet committed to `filter`.
    pending: Option<String>,
    window: Option<PageWindow>,
    debounce_ms: u32,
    phase: HubPhase,
    generation: u64,
}

impl HubMachine {
    /// `debounce_ms == 0` applies input immediately.
    pub fn new(cards: Vec<CardMeta>, debounce_ms: u32, window: Option<PageWindow>) -> Self {
        Self {
            cards,
            filter: FilterQuery::default(),
            pending: None,
            window,
            debounce_ms,
            phase: HubPhase::Idle,
            generation: 0,
        }
    }

    pub fn phase(&self) -> HubPhase {
        self.phase
    }

    pub fn filter(&self) -> &FilterQuery {
        &self.filter
    }

    pub fn visibility(&self) -> Visibility {
        evaluate(&self.cards, &self.filter, self.window.map(|w| w.limit))
    }

    pub fn handle(&mut self, event: HubEvent) -> Option<HubCommand> {
        match event {
            HubEvent::Input(raw) => {
                if self.debounce_ms == 0 {
                    self.commit(Some(raw));
                    return Some(HubCommand::Render);
                }
                self.generation += 1;
                self.pending = Some(raw);
                self.phase = HubPhase::Filtering {
                    generation: self.generation,
                };
                Some(HubCommand::Schedule {
                    generation: self.generation,
                    delay_ms: self.debounce_ms,
                })
            }
            HubEvent::DebounceElapsed(generation) => match self.phase {
                HubPhase::Filtering { generation: current } if current == generation => {
                    let pending = self.pending.take();
                    self.commit(pending);
                    Some(HubCommand::Render)
                }
                _ => None,
            },
            HubEvent::SelectCategory(category) => {
                // A click also flushes whatever was typed, so the grid never
                // shows a category combined with a stale query.
                let pending = self.pending.take();
                self.filter.category = category;
                self.commit(pending);
                Some(HubCommand::Render)
            }
            HubEvent::LoadMore => {
                let window = self.window.as_mut()?;
                window.load_more();
                Some(HubCommand::Render)
            }
        }
    }

    fn commit(&mut self, raw: Option<String>) {
        if let Some(raw) = raw {
            self.filter.set_query(&raw);
        }
        if let Some(window) = self.window.as_mut() {
            window.reset();
        }
        self.phase = HubPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(n: usize) -> Vec<CardMeta> {
        (0..n)
            .map(|i| {
                let category = if i % 2 == 0 { Category::Report } else { Category::Brief };
                CardMeta::new(category, [format!("Budget item {i}").as_str()])
            })
            .collect()
    }

    #[test]
    fn test_initial_render_shows_all() {
        let machine = HubMachine::new(cards(4), 70, None);
        assert_eq!(machine.visibility().shown, 4);
        assert_eq!(machine.phase(), HubPhase::Idle);
    }

    #[test]
    fn test_only_latest_input_is_applied() {
        let mut machine = HubMachine::new(cards(4), 70, None);

        let first = machine.handle(HubEvent::Input("item 1".into()));
        let second = machine.handle(HubEvent::Input("item 2".into()));
        assert_eq!(first, Some(HubCommand::Schedule { generation: 1, delay_ms: 70 }));
        assert_eq!(second, Some(HubCommand::Schedule { generation: 2, delay_ms: 70 }));
        assert_eq!(machine.phase(), HubPhase::Filtering { generation: 2 });

        // Stale timer does nothing.
        assert_eq!(machine.handle(HubEvent::DebounceElapsed(1)), None);
        assert_eq!(machine.filter().query(), "");

        assert_eq!(machine.handle(HubEvent::DebounceElapsed(2)), Some(HubCommand::Render));
        assert_eq!(machine.filter().query(), "item 2");
        assert_eq!(machine.visibility().visible, vec![false, false, true, false]);
        assert_eq!(machine.phase(), HubPhase::Idle);

        // Timer firing twice is ignored.
        assert_eq!(machine.handle(HubEvent::DebounceElapsed(2)), None);
    }

    #[test]
    fn test_immediate_variant() {
        let mut machine = HubMachine::new(cards(4), 0, None);
        assert_eq!(machine.handle(HubEvent::Input(" ITEM 3 ".into())), Some(HubCommand::Render));
        assert_eq!(machine.visibility().shown, 1);
    }

    #[test]
    fn test_category_click_flushes_pending_input() {
        let mut machine = HubMachine::new(cards(6), 70, None);
        machine.handle(HubEvent::Input("item".into()));
        assert_eq!(
            machine.handle(HubEvent::SelectCategory(Category::Brief)),
            Some(HubCommand::Render)
        );
        assert_eq!(machine.phase(), HubPhase::Idle);
        assert_eq!(machine.filter().query(), "item");
        assert_eq!(machine.visibility().shown, 3);
        // The old timer is now stale.
        assert_eq!(machine.handle(HubEvent::DebounceElapsed(1)), None);
    }

    #[test]
    fn test_load_more_shows_all_ten() {
        let mut machine = HubMachine::new(cards(10), 70, Some(PageWindow::new(6, 6)));
        let v = machine.visibility();
        assert_eq!((v.matched, v.shown, v.has_more), (10, 6, true));

        assert_eq!(machine.handle(HubEvent::LoadMore), Some(HubCommand::Render));
        let v = machine.visibility();
        assert_eq!((v.matched, v.shown, v.has_more), (10, 10, false));
        assert!(v.visible.iter().all(|on| *on));
    }

    #[test]
    fn test_filter_change_resets_window() {
        let mut machine = HubMachine::new(cards(20), 0, Some(PageWindow::new(6, 6)));
        machine.handle(HubEvent::LoadMore);
        assert_eq!(machine.visibility().shown, 12);
        machine.handle(HubEvent::SelectCategory(Category::Report));
        let v = machine.visibility();
        assert_eq!((v.matched, v.shown, v.has_more), (10, 6, true));
    }

    #[test]
    fn test_load_more_without_window_is_ignored() {
        let mut machine = HubMachine::new(cards(3), 70, None);
        assert_eq!(machine.handle(HubEvent::LoadMore), None);
    }

    #[test]
    fn test_no_match_hides_load_more() {
        let mut machine = HubMachine::new(cards(10), 0, Some(PageWindow::new(6, 6)));
        machine.handle(HubEvent::Input("nothing".into()));
        let v = machine.visibility();
        assert_eq!((v.matched, v.has_more), (0, false));
    }
}
