use std::io;

use ratatui::DefaultTerminal;

use crate::core::controller::Surface;
use crate::core::view::{TerminalSize, ViewModel};
use crate::tui::ui;

/// Draws view models onto the real terminal.
pub struct TerminalSurface {
    terminal: DefaultTerminal,
}

impl TerminalSurface {
    pub fn new(terminal: DefaultTerminal) -> Self {
        Self { terminal }
    }
}

impl Surface for TerminalSurface {
    fn size(&self) -> io::Result<TerminalSize> {
        let size = self.terminal.size()?;
        Ok(TerminalSize::new(size.width, size.height))
    }

    fn render(&mut self, view: &ViewModel) -> io::Result<()> {
        // draw() resizes the buffer first if the terminal changed size.
        self.terminal.draw(|frame| ui::draw_ui(frame, view))?;
        Ok(())
    }
}
