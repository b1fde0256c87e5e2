/// Sink for the lines a program shows to its user.
pub trait Console {
    fn print(&self, line: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn print(&self, line: &str) {
        println!("{line}");
    }
}
