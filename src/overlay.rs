use crate::constants::*;
use crate::dom;
use anyhow::anyhow;
use backdrop_core::BootState;
use web_sys as web;

/// DOM side of the boot splash: one element per revealed line, a percent
/// label and an optional progress bar.
pub struct BootOverlay {
    document: web::Document,
    container: web::Element,
    lines_host: web::Element,
    rendered_lines: usize,
    shown_percent: Option<u32>,
}

impl BootOverlay {
    pub fn new(container_id: &str) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
        let container = dom::element_by_id(container_id)?;
        let lines_host = document
            .get_element_by_id(BOOT_LINES_ID)
            .unwrap_or_else(|| container.clone());
        _ = container.class_list().remove_1(BOOT_COMPLETE_CLASS);
        Ok(Self {
            document,
            container,
            lines_host,
            rendered_lines: 0,
            shown_percent: None,
        })
    }

    /// Append newly revealed lines and refresh the counter.
    pub fn render(&mut self, state: &BootState) {
        for line in state.revealed_lines.iter().skip(self.rendered_lines) {
            match self.document.create_element("div") {
                Ok(el) => {
                    _ = el.class_list().add_1(BOOT_LINE_CLASS);
                    el.set_text_content(Some(&format!("{BOOT_LINE_PREFIX}{line}")));
                    _ = self.lines_host.append_child(&el);
                }
                Err(e) => log::warn!("[overlay] could not create line: {:?}", e),
            }
        }
        self.rendered_lines = state.revealed_lines.len();

        if self.shown_percent != Some(state.progress_percent) {
            let pct = state.progress_percent;
            dom::set_text(&self.document, BOOT_PERCENT_ID, &format!("{pct}%"));
            if let Some(bar) = self.document.get_element_by_id(BOOT_BAR_ID) {
                dom::set_style(&bar, "width", &format!("{pct}%"));
            }
            self.shown_percent = Some(pct);
        }
    }

    /// Start the exit animation.
    pub fn mark_complete(&self) {
        _ = self.container.class_list().add_1(BOOT_COMPLETE_CLASS);
    }
}
