use std::fmt;

use super::Section;
use crate::catalog::CategorySelection;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Cart,
    Category,
    Section,
}

/// What changed in the storefront state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreChange {
    CartChanged {
        total_item_count: u64,
        total_amount: u64,
    },
    CategorySelected(CategorySelection),
    SectionChanged(Section),
}

impl StoreChange {
    pub fn kind(&self) -> ChangeKind {
        match self {
            StoreChange::CartChanged { .. } => ChangeKind::Cart,
            StoreChange::CategorySelected(_) => ChangeKind::Category,
            StoreChange::SectionChanged(_) => ChangeKind::Section,
        }
    }
}

type Listener = Box<dyn Fn(&StoreChange)>;

/// Synchronous listener registry.
///
/// Listeners run on the caller's thread, in registration order, before
/// `emit` returns.
#[derive(Default)]
pub struct ChangeNotifier {
    // `None` subscribes to every kind.
    listeners: Vec<(Option<ChangeKind>, Listener)>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        ChangeNotifier::default()
    }

    pub fn on<F>(&mut self, kind: ChangeKind, listener: F)
    where
        F: Fn(&StoreChange) + 'static,
    {
        self.listeners.push((Some(kind), Box::new(listener)));
    }

    pub fn on_any<F>(&mut self, listener: F)
    where
        F: Fn(&StoreChange) + 'static,
    {
        self.listeners.push((None, Box::new(listener)));
    }

    pub fn emit(&self, change: &StoreChange) {
        let kind = change.kind();
        for (filter, listener) in &self.listeners {
            if filter.map_or(true, |wanted| wanted == kind) {
                listener(change);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
