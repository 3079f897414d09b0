//! Small page-chrome state machines: the hero copy highlight cycle and the
//! FAQ accordion.

use crate::constants::HIGHLIGHT_INTERVAL_SEC;

/// Which hero word is currently emphasized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Highlight {
    #[default]
    None,
    Lifespan,
    Healthspan,
}

impl Highlight {
    pub fn next(self) -> Self {
        match self {
            Highlight::None => Highlight::Lifespan,
            Highlight::Lifespan => Highlight::Healthspan,
            Highlight::Healthspan => Highlight::None,
        }
    }

    /// The `data-highlight` attribute value this state emphasizes, if any.
    pub fn target(self) -> Option<&'static str> {
        match self {
            Highlight::None => None,
            Highlight::Lifespan => Some("lifespan"),
            Highlight::Healthspan => Some("healthspan"),
        }
    }
}

/// Advances the highlight once per fixed interval of accumulated frame time.
#[derive(Clone, Debug, Default)]
pub struct HighlightCycle {
    current: Highlight,
    elapsed_sec: f32,
}

impl HighlightCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Highlight {
        self.current
    }

    /// Accumulate frame time; returns the new state when it changed.
    ///
    /// A tick spanning several intervals steps several times, so the cycle
    /// order is preserved even across a stalled tab.
    pub fn advance(&mut self, dt_sec: f32) -> Option<Highlight> {
        if !(dt_sec > 0.0) {
            return None;
        }
        self.elapsed_sec += dt_sec;
        let mut changed = false;
        while self.elapsed_sec >= HIGHLIGHT_INTERVAL_SEC {
            self.elapsed_sec -= HIGHLIGHT_INTERVAL_SEC;
            self.current = self.current.next();
            changed = true;
        }
        changed.then_some(self.current)
    }
}

/// FAQ open-question state: at most one panel open at a time.
#[derive(Clone, Debug, Default)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Toggle a panel; returns the index now open, if any.
    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        self.open
    }
}
