//! Intrusive circular doubly-linked free-list nodes.
//!
//! A size-class slot is either empty (`None`) or points at one arbitrary
//! member of a circular list — the *entrance* — which is not a sentinel:
//! any member of the list may serve as the entrance at any time.

use core::ptr::NonNull;

/// A node occupying the first two words of a free chunk's body.
#[repr(C)]
pub struct Node {
    pub prev: NonNull<Node>,
    pub next: NonNull<Node>,
}

impl Node {
    /// Splices `node` into the list at `slot`, making it the new entrance.
    ///
    /// # Safety
    /// `node` must point to writable memory large enough for a `Node`, and
    /// must not already be linked into any list.
    pub unsafe fn insert_at_entrance(slot: &mut Option<NonNull<Node>>, mut node: NonNull<Node>) {
        match *slot {
            None => {
                node.as_mut().prev = node;
                node.as_mut().next = node;
            }
            Some(mut entrance) => {
                let mut prev = entrance.as_ref().prev;
                node.as_mut().next = entrance;
                node.as_mut().prev = prev;
                prev.as_mut().next = node;
                entrance.as_mut().prev = node;
            }
        }
        *slot = Some(node);
    }

    /// Removes `node` from the list rooted at `slot`.
    ///
    /// If `node` was the slot's entrance, the entrance advances to a
    /// surviving neighbour rather than being nulled out from under the
    /// list's other members.
    ///
    /// # Safety
    /// `node` must currently be a member of the list at `slot`.
    pub unsafe fn unlink(slot: &mut Option<NonNull<Node>>, node: NonNull<Node>) {
        let mut next = node.as_ref().next;
        let mut prev = node.as_ref().prev;

        if next == node {
            debug_assert_eq!(*slot, Some(node));
            *slot = None;
            return;
        }

        next.as_mut().prev = prev;
        prev.as_mut().next = next;

        if *slot == Some(node) {
            *slot = Some(next);
        }
    }

    /// Walks the circular list starting at `entrance`, visiting every
    /// member exactly once.
    ///
    /// # Safety
    /// `entrance`'s list must remain stable for the duration of iteration
    /// (no insertions/removals from under the iterator).
    pub unsafe fn iter(entrance: NonNull<Node>) -> Iter {
        Iter { next: Some(entrance), entrance }
    }
}

/// Iterator over one full circuit of a free-list, produced by [`Node::iter`].
pub struct Iter {
    next: Option<NonNull<Node>>,
    entrance: NonNull<Node>,
}

impl Iterator for Iter {
    type Item = NonNull<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let following = unsafe { current.as_ref().next };
        self.next = if following == self.entrance { None } else { Some(following) };
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::MaybeUninit;

    unsafe fn raw_node() -> NonNull<Node> {
        let b = Box::into_raw(Box::new(MaybeUninit::<Node>::uninit())).cast::<Node>();
        NonNull::new_unchecked(b)
    }

    #[test]
    fn solo_insert_self_links() {
        unsafe {
            let a = raw_node();
            let mut slot = None;
            Node::insert_at_entrance(&mut slot, a);
            assert_eq!(slot, Some(a));
            assert_eq!(a.as_ref().next, a);
            assert_eq!(a.as_ref().prev, a);
            drop(Box::from_raw(a.as_ptr()));
        }
    }

    #[test]
    fn insert_and_iterate_three() {
        unsafe {
            let a = raw_node();
            let mut slot = None;
            Node::insert_at_entrance(&mut slot, a);

            let b = raw_node();
            Node::insert_at_entrance(&mut slot, b);

            let c = raw_node();
            Node::insert_at_entrance(&mut slot, c);

            // entrance is always the most recently inserted node.
            assert_eq!(slot, Some(c));
            let visited: Vec<_> = Node::iter(slot.unwrap()).collect();
            assert_eq!(visited.len(), 3);
            assert!(visited.contains(&a));
            assert!(visited.contains(&b));
            assert!(visited.contains(&c));

            drop(Box::from_raw(a.as_ptr()));
            drop(Box::from_raw(b.as_ptr()));
            drop(Box::from_raw(c.as_ptr()));
        }
    }

    #[test]
    fn unlinking_entrance_advances_to_survivor() {
        unsafe {
            let a = raw_node();
            let mut slot = None;
            Node::insert_at_entrance(&mut slot, a);
            let b = raw_node();
            Node::insert_at_entrance(&mut slot, b);

            // `b` is the entrance; unlink it and confirm the slot advances
            // to `a` rather than going null while `a` still lives.
            Node::unlink(&mut slot, b);
            assert_eq!(slot, Some(a));
            assert_eq!(a.as_ref().next, a);
            assert_eq!(a.as_ref().prev, a);

            Node::unlink(&mut slot, a);
            assert_eq!(slot, None);

            drop(Box::from_raw(a.as_ptr()));
            drop(Box::from_raw(b.as_ptr()));
        }
    }
}
