//! Row dump of the built-in shapes, for poking at the data from a console.

use tinsel_shapes::TreeSize;

/// Destination for debug lines.
pub trait LogSink {
    fn write_line(&mut self, line: &str);
}

/// Writes through the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl LogSink for LogFacade {
    fn write_line(&mut self, line: &str) {
        log::info!(target: "tinsel", "{line}");
    }
}

impl LogSink for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Write every row of the selected shape, top to bottom. `"large"` picks the
/// large tree, anything else the small one.
pub fn log_tree(selector: &str, sink: &mut impl LogSink) {
    for row in TreeSize::from_selector(selector).rows() {
        sink.write_line(row);
    }
}
