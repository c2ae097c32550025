use std::{collections::HashMap, hash::Hash};

use super::{
    coordinator::{Mode, Renderer, ViewCoordinator},
    provider::BlockDataProvider,
};

/// Logical inputs understood by the block browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowseAction {
    ScrollDown,
    ScrollUp,
    SeekBack1,
    SeekForward1,
    SeekBack1000,
    SeekForward1000,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ScrollDown,
    ScrollUp,
    Seek(i64),
}

impl BrowseAction {
    pub fn command(self) -> Command {
        match self {
            Self::ScrollDown => Command::ScrollDown,
            Self::ScrollUp => Command::ScrollUp,
            Self::SeekBack1 => Command::Seek(-1),
            Self::SeekForward1 => Command::Seek(1),
            Self::SeekBack1000 => Command::Seek(-1000),
            Self::SeekForward1000 => Command::Seek(1000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    NotHandled,
}

#[derive(Debug, Clone)]
pub struct Keymap<K> {
    bindings: HashMap<K, BrowseAction>,
}

impl<K: Eq + Hash> Default for Keymap<K> {
    fn default() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> Keymap<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, key: K, action: BrowseAction) -> Self {
        self.bindings.insert(key, action);
        self
    }

    pub fn lookup(&self, key: &K) -> Option<BrowseAction> {
        self.bindings.get(key).copied()
    }
}

pub struct InputDispatcher<K> {
    keymap: Keymap<K>,
}

impl<K: Eq + Hash> InputDispatcher<K> {
    pub fn new(keymap: Keymap<K>) -> Self {
        Self { keymap }
    }

    pub fn keymap(&self) -> &Keymap<K> {
        &self.keymap
    }

    /// Runs the command bound to `key`. Keys are ignored unless the browser
    /// owns focus, so other views can share the same input surface.
    pub fn dispatch<P, R>(
        &self,
        mode: Mode,
        key: &K,
        coordinator: &mut ViewCoordinator<P>,
        renderer: &mut R,
    ) -> Dispatch
    where
        P: BlockDataProvider,
        R: Renderer,
    {
        if mode != Mode::Block {
            return Dispatch::NotHandled;
        }

        match self.keymap.lookup(key) {
            Some(action) => {
                coordinator.execute(action.command(), renderer);
                Dispatch::Handled
            }
            None => Dispatch::NotHandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_actions_share_one_command() {
        assert_eq!(BrowseAction::SeekBack1.command(), Command::Seek(-1));
        assert_eq!(BrowseAction::SeekForward1000.command(), Command::Seek(1000));
        assert_eq!(BrowseAction::ScrollUp.command(), Command::ScrollUp);
    }

    #[test]
    fn test_keymap_lookup() {
        let keymap = Keymap::new()
            .bind('j', BrowseAction::SeekBack1)
            .bind('J', BrowseAction::SeekBack1)
            .bind('k', BrowseAction::SeekForward1);

        assert_eq!(keymap.lookup(&'J'), Some(BrowseAction::SeekBack1));
        assert_eq!(keymap.lookup(&'x'), None);
    }
}
