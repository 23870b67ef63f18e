use crate::chat::{Block, RenderSink};

/// Trạng thái cục bộ của UI.
pub struct AppState {
    pub blocks: Vec<Block>,
    pub input_text: String,
    /// Cuộn xuống cuối ở lần vẽ tiếp theo.
    pub scroll_pending: bool,
    pub alert: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            input_text: String::new(),
            scroll_pending: false,
            alert: None,
        }
    }

    /// Returns whether a scroll was requested since the last call.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}

impl RenderSink for AppState {
    fn append(&mut self, block: Block) {
        self.blocks.push(block);
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_pending = true;
    }

    fn alert(&mut self, text: String) {
        self.alert = Some(text);
    }
}
