use super::Length;

/// Which of the two root layouts is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Global state is still initializing
    Loading,
    /// Cart data is available
    Ready,
}

/// A top-level child of the root `<main>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    LoadingIndicator,
    NavigationBar,
    CartContainer,
}

/// Inline top margin for the loading indicator.
///
/// The legacy markup set `marginTop: "Green"`, which is not a length and was
/// discarded by browsers. `None` keeps that rendered result: no inline margin.
pub const LOADING_MARGIN_TOP: Option<Length> = None;

impl Phase {
    pub const fn from_loading(loading: bool) -> Self {
        if loading {
            Self::Loading
        } else {
            Self::Ready
        }
    }

    /// Children of the root container, in render order.
    pub const fn sections(self) -> &'static [Section] {
        match self {
            Self::Loading => &[Section::LoadingIndicator],
            Self::Ready => &[Section::NavigationBar, Section::CartContainer],
        }
    }
}
