use super::grid::Grid;

/// Decides whether the words laid out on a grid are acceptable.
pub trait WordValidator {
    fn validate(&self, grid: &Grid) -> bool;
}

/// Accepts any layout. There is no dictionary check.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl WordValidator for AcceptAll {
    fn validate(&self, _grid: &Grid) -> bool { true }
}

impl<F> WordValidator for F
where
    F: Fn(&Grid) -> bool,
{
    fn validate(&self, grid: &Grid) -> bool { self(grid) }
}
