//! # Filtered Person View
//!
//! Frontends never read the athlete directory directly; they read the
//! *filtered person list*, an ordered view of the directory under a
//! [`PersonFilter`]. The view is recomputed after every model mutation and
//! each structural change is pushed to subscribed listeners.
//!
//! ## Change Events
//!
//! A refresh compares the old view with the new one and emits exactly one
//! [`PersonListChange`] when they differ:
//!
//! - one athlete inserted somewhere → `Added`
//! - one athlete removed → `Removed`
//! - one position holds a different athlete → `Replaced`
//! - anything else (sort, filter change, clear, undo) → `Reset`
//!
//! Events carry a monotonically increasing `version`, are delivered in the
//! order the mutations happened, and are never coalesced. Versions only
//! advance when an event is emitted, so consecutive events differ by one.

use super::person::Person;
use std::fmt;

/// Predicate selecting which athletes appear in the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonFilter {
    #[default]
    All,
    /// Any of the keywords equals one of the words of the name, ignoring case.
    NameContainsKeywords(Vec<String>),
}

impl PersonFilter {
    pub fn name_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PersonFilter::NameContainsKeywords(keywords.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, person: &Person) -> bool {
        match self {
            PersonFilter::All => true,
            PersonFilter::NameContainsKeywords(keywords) => {
                person.name.as_str().split_whitespace().any(|word| {
                    keywords
                        .iter()
                        .any(|keyword| word.eq_ignore_ascii_case(keyword.trim()))
                })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    Added { index: usize, person: Person },
    Removed { index: usize, person: Person },
    Replaced { index: usize, old: Person, new: Person },
    Reset { len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonListChange {
    pub version: u64,
    pub kind: ChangeKind,
}

/// Handle returned by [`FilteredPersonList::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type PersonListListener = Box<dyn FnMut(&PersonListChange)>;

#[derive(Default)]
pub struct FilteredPersonList {
    filter: PersonFilter,
    items: Vec<Person>,
    version: u64,
    listeners: Vec<(ListenerId, PersonListListener)>,
    next_listener: u64,
}

impl FilteredPersonList {
    pub fn new(source: &[Person]) -> Self {
        Self {
            items: source.to_vec(),
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[Person] {
        &self.items
    }

    pub fn filter(&self) -> &PersonFilter {
        &self.filter
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn subscribe(&mut self, listener: PersonListListener) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn set_filter(&mut self, filter: PersonFilter, source: &[Person]) {
        self.filter = filter;
        self.refresh(source);
    }

    /// Recomputes the view from `source` and notifies listeners if it changed.
    pub fn refresh(&mut self, source: &[Person]) {
        let next: Vec<Person> = source
            .iter()
            .filter(|p| self.filter.matches(p))
            .cloned()
            .collect();
        let Some(kind) = diff(&self.items, &next) else {
            return;
        };
        self.items = next;
        self.version += 1;
        let change = PersonListChange {
            version: self.version,
            kind,
        };
        log::debug!("filtered person list v{}: {:?}", change.version, change.kind);
        for (_, listener) in &mut self.listeners {
            listener(&change);
        }
    }
}

impl fmt::Debug for FilteredPersonList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredPersonList")
            .field("filter", &self.filter)
            .field("items", &self.items)
            .field("version", &self.version)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn diff(old: &[Person], new: &[Person]) -> Option<ChangeKind> {
    if old == new {
        return None;
    }
    let prefix = old.iter().zip(new).take_while(|(a, b)| a == b).count();
    let kind = if new.len() == old.len() + 1 && old[prefix..] == new[prefix + 1..] {
        ChangeKind::Added {
            index: prefix,
            person: new[prefix].clone(),
        }
    } else if old.len() == new.len() + 1 && old[prefix + 1..] == new[prefix..] {
        ChangeKind::Removed {
            index: prefix,
            person: old[prefix].clone(),
        }
    } else if old.len() == new.len() && old[prefix + 1..] == new[prefix + 1..] {
        ChangeKind::Replaced {
            index: prefix,
            old: old[prefix].clone(),
            new: new[prefix].clone(),
        }
    } else {
        ChangeKind::Reset { len: new.len() }
    };
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{alice, benson, carl, PersonBuilder};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(list: &mut FilteredPersonList) -> Rc<RefCell<Vec<PersonListChange>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        list.subscribe(Box::new(move |change| sink.borrow_mut().push(change.clone())));
        seen
    }

    #[test]
    fn keyword_filter_matches_whole_words_ignoring_case() {
        let filter = PersonFilter::name_keywords(["alice"]);
        assert!(filter.matches(&alice()));
        assert!(!filter.matches(&benson()));
        assert!(!PersonFilter::name_keywords(["Ali"]).matches(&alice()));
        assert!(PersonFilter::All.matches(&carl()));
    }

    #[test]
    fn emits_added_removed_replaced() {
        let mut list = FilteredPersonList::new(&[alice(), carl()]);
        let seen = recorder(&mut list);

        list.refresh(&[alice(), benson(), carl()]);
        list.refresh(&[alice(), carl()]);
        let edited = PersonBuilder::new("Carl Kurz").address("Moved").build();
        list.refresh(&[alice(), edited.clone()]);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(
            seen[0].kind,
            ChangeKind::Added {
                index: 1,
                person: benson()
            }
        );
        assert_eq!(
            seen[1].kind,
            ChangeKind::Removed {
                index: 1,
                person: benson()
            }
        );
        assert_eq!(
            seen[2].kind,
            ChangeKind::Replaced {
                index: 1,
                old: carl(),
                new: edited
            }
        );
        let versions: Vec<u64> = seen.iter().map(|c| c.version).collect();
        assert_eq!(versions, vec![1, 2, 3]);
    }

    #[test]
    fn unchanged_view_emits_nothing() {
        let mut list = FilteredPersonList::new(&[alice()]);
        let seen = recorder(&mut list);
        list.refresh(&[alice()]);
        assert!(seen.borrow().is_empty());
        assert_eq!(list.version(), 0);
    }

    #[test]
    fn reorder_emits_reset() {
        let mut list = FilteredPersonList::new(&[carl(), alice(), benson()]);
        let seen = recorder(&mut list);
        list.refresh(&[alice(), benson(), carl()]);
        assert_eq!(seen.borrow()[0].kind, ChangeKind::Reset { len: 3 });
    }

    #[test]
    fn filter_change_applies_to_view() {
        let source = [alice(), benson(), carl()];
        let mut list = FilteredPersonList::new(&source);
        list.set_filter(PersonFilter::name_keywords(["benson", "carl"]), &source);
        assert_eq!(list.items(), &[benson(), carl()]);
        list.set_filter(PersonFilter::All, &source);
        assert_eq!(list.items().len(), 3);
    }

    #[test]
    fn unsubscribed_listener_is_silent() {
        let mut list = FilteredPersonList::new(&[]);
        let seen = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&seen);
        let id = list.subscribe(Box::new(move |_| *sink.borrow_mut() += 1));
        list.refresh(&[alice()]);
        assert!(list.unsubscribe(id));
        list.refresh(&[]);
        assert_eq!(*seen.borrow(), 1);
        assert!(!list.unsubscribe(id));
    }
}
