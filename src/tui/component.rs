use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive everything they draw as props (struct fields,
/// usually borrowed from the `ViewModel`) and render to a `Frame` within
/// a given `Rect`. They hold no state of their own; selection and
/// scrolling arrive through the props.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
