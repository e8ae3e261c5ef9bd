//! Property tests driving `Links` with random operation sequences and checking every list against
//! a `VecDeque` model after each step.

use std::collections::VecDeque;

use proptest::prelude::*;
use support_lib::collections::linked::{EntryId, LinkError, Links, ListId};

const ENTRIES: usize = 8;
const LISTS: usize = 3;

#[derive(Debug, Clone)]
enum Op {
    AddHead(usize, usize),
    AddTail(usize, usize),
    Del(usize),
    MoveHead(usize, usize),
    MoveTail(usize, usize),
    Replace(usize, usize),
    Join(usize, usize),
}

fn op() -> impl Strategy<Value = Op> {
    let entry = 0..ENTRIES;
    let list = 0..LISTS;
    prop_oneof![
        (entry.clone(), list.clone()).prop_map(|(e, l)| Op::AddHead(e, l)),
        (entry.clone(), list.clone()).prop_map(|(e, l)| Op::AddTail(e, l)),
        entry.clone().prop_map(Op::Del),
        (entry.clone(), list.clone()).prop_map(|(e, l)| Op::MoveHead(e, l)),
        (entry.clone(), list.clone()).prop_map(|(e, l)| Op::MoveTail(e, l)),
        (entry.clone(), entry).prop_map(|(old, new)| Op::Replace(old, new)),
        (list.clone(), list).prop_map(|(dst, src)| Op::Join(dst, src)),
    ]
}

/// The lists as plain queues of entry numbers.
struct Model {
    lists: Vec<VecDeque<usize>>,
}

impl Model {
    fn owner(&self, entry: usize) -> Option<usize> {
        self.lists.iter().position(|l| l.contains(&entry))
    }

    fn unlink(&mut self, entry: usize) {
        for list in &mut self.lists {
            list.retain(|e| *e != entry);
        }
    }

    fn apply(&mut self, op: &Op) -> Result<(), LinkError> {
        match *op {
            Op::AddHead(e, l) | Op::AddTail(e, l) => {
                if self.owner(e).is_some() {
                    return Err(LinkError::AlreadyLinked);
                }
                match op {
                    Op::AddHead(..) => self.lists[l].push_front(e),
                    _ => self.lists[l].push_back(e),
                }
            },
            Op::Del(e) => self.unlink(e),
            Op::MoveHead(e, l) => {
                self.unlink(e);
                self.lists[l].push_front(e);
            },
            Op::MoveTail(e, l) => {
                self.unlink(e);
                self.lists[l].push_back(e);
            },
            Op::Replace(old, new) => {
                let Some(l) = self.owner(old) else {
                    return Err(LinkError::NotLinked);
                };
                if self.owner(new).is_some() {
                    return Err(LinkError::AlreadyLinked);
                }
                for slot in self.lists[l].iter_mut().filter(|e| **e == old) {
                    *slot = new;
                }
            },
            Op::Join(dst, src) => {
                if dst == src {
                    return Err(LinkError::SelfJoin);
                }
                let moved = std::mem::take(&mut self.lists[src]);
                self.lists[dst].extend(moved);
            },
        }
        Ok(())
    }
}

fn apply(links: &mut Links<usize>, entries: &[EntryId], lists: &[ListId], op: &Op) -> Result<(), LinkError> {
    match *op {
        Op::AddHead(e, l) => links.try_add_head(entries[e], lists[l]),
        Op::AddTail(e, l) => links.try_add_tail(entries[e], lists[l]),
        Op::Del(e) => links.try_del(entries[e]),
        Op::MoveHead(e, l) => links.try_move_head(entries[e], lists[l]),
        Op::MoveTail(e, l) => links.try_move_tail(entries[e], lists[l]),
        Op::Replace(old, new) => links.try_replace(entries[old], entries[new]),
        Op::Join(dst, src) => links.try_join(lists[dst], lists[src]),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    #[test]
    fn lists_match_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut links = Links::new();
        let entries: Vec<EntryId> = (0..ENTRIES).map(|n| links.insert(n)).collect();
        let lists: Vec<ListId> = (0..LISTS).map(|_| links.new_list()).collect();
        let mut model = Model { lists: vec![VecDeque::new(); LISTS] };

        for op in &ops {
            let expected = model.apply(op);
            prop_assert_eq!(apply(&mut links, &entries, &lists, op), expected, "{:?}", op);

            for (list, queue) in lists.iter().zip(&model.lists) {
                let forward: Vec<usize> = links.iter(*list).copied().collect();
                let backward: Vec<usize> = links.iter(*list).rev().copied().collect();
                prop_assert_eq!(&forward, &queue.iter().copied().collect::<Vec<_>>());
                prop_assert_eq!(backward, queue.iter().rev().copied().collect::<Vec<_>>());
                prop_assert_eq!(links.len(*list), queue.len());
                prop_assert_eq!(links.head(*list), queue.front());
                prop_assert_eq!(links.tail(*list), queue.back());
            }
            for (n, entry) in entries.iter().enumerate() {
                prop_assert_eq!(links.is_linked(*entry), model.owner(n).is_some());
            }
        }
    }

    #[test]
    fn cursor_survives_moving_everything(count in 0..ENTRIES) {
        let mut links = Links::new();
        let from = links.new_list();
        let to = links.new_list();
        for n in 0..count {
            let entry = links.insert(n);
            links.add_tail(entry, from);
        }

        let mut cursor = links.cursor(from);
        while let Some(entry) = cursor.advance(&links) {
            links.move_head(entry, to);
        }

        prop_assert!(links.is_empty(from));
        prop_assert_eq!(links.iter(to).copied().collect::<Vec<_>>(), (0..count).rev().collect::<Vec<_>>());
    }
}
