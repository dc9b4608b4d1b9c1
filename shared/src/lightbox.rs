/// Keyboard commands understood by overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Previous,
    Next,
    Close,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            "Escape" | "Esc" => Some(Self::Close),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

/// Cyclic photo navigator over the currently filtered list.
///
/// The navigator only tracks the list length; callers resolve the index
/// against their own slice with [`Lightbox::current_item`]. Whenever the
/// lightbox is open, `index < list_len` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lightbox {
    state: LightboxState,
    list_len: usize,
}

impl Lightbox {
    pub fn new(list_len: usize) -> Self {
        Self {
            state: LightboxState::Closed,
            list_len,
        }
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn list_len(&self) -> usize {
        self.list_len
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    pub fn index(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open { index } => Some(index),
            LightboxState::Closed => None,
        }
    }

    /// Open at `index`. Out-of-range requests are refused and leave the state untouched.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.list_len {
            return false;
        }
        self.state = LightboxState::Open { index };
        true
    }

    pub fn next(&mut self) {
        if let LightboxState::Open { index } = self.state
            && self.list_len > 0
        {
            self.state = LightboxState::Open {
                index: (index + 1) % self.list_len,
            };
        }
    }

    pub fn previous(&mut self) {
        if let LightboxState::Open { index } = self.state
            && self.list_len > 0
        {
            self.state = LightboxState::Open {
                index: (index + self.list_len - 1) % self.list_len,
            };
        }
    }

    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }

    /// React to the filtered list changing underneath an open lightbox:
    /// clamp the index to the new last item, or close on an empty list.
    pub fn sync_len(&mut self, list_len: usize) {
        self.list_len = list_len;
        if let LightboxState::Open { index } = self.state {
            if list_len == 0 {
                self.state = LightboxState::Closed;
            } else if index >= list_len {
                self.state = LightboxState::Open {
                    index: list_len - 1,
                };
            }
        }
    }

    /// Apply a keyboard command. Returns whether the key was consumed;
    /// nothing is consumed while closed.
    pub fn handle_key(&mut self, key: NavKey) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            NavKey::Previous => self.previous(),
            NavKey::Next => self.next(),
            NavKey::Close => self.close(),
        }
        true
    }

    pub fn current_item<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        self.index().and_then(|index| items.get(index))
    }

    /// "3 / 6" style position label, 1-based.
    pub fn position_label(&self) -> Option<String> {
        self.index()
            .map(|index| format!("{} / {}", index + 1, self.list_len))
    }
}
