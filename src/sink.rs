use crate::OutputSink;

/// Element id the browser build renders into.
pub const OUTPUT_ELEMENT_ID: &str = "txtout";

/// Prints each rendering to stdout; the terminal is the display surface.
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn set_text(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Keeps the last rendering in memory, for headless hosts and tests.
#[derive(Default)]
pub struct BufferSink {
    text: String,
}

impl BufferSink {
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl OutputSink for BufferSink {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

/// Replaces the text content of a DOM element.
#[cfg(target_arch = "wasm32")]
pub struct ElementSink {
    element: web_sys::HtmlElement,
}

#[cfg(target_arch = "wasm32")]
impl ElementSink {
    pub fn from_element_id(id: &str) -> Option<Self> {
        use wasm_bindgen::JsCast;

        let element = web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;
        Some(ElementSink { element })
    }
}

#[cfg(target_arch = "wasm32")]
impl OutputSink for ElementSink {
    fn set_text(&mut self, text: &str) {
        self.element.set_inner_text(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_sink_replaces_content() {
        let mut sink = BufferSink::default();
        assert_eq!(sink.text(), "");
        sink.set_text("first");
        sink.set_text("second");
        assert_eq!(sink.text(), "second");
    }
}
