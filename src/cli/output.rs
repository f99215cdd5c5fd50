//! Terminal output formatting

pub struct Output;

impl Output {
    const RESET: &'static str = "\x1b[0m";
    const DIM: &'static str = "\x1b[2m";
    const RED: &'static str = "\x1b[31m";
    const GREEN: &'static str = "\x1b[32m";

    pub fn success(msg: &str) {
        println!("{}✓{} {}", Self::GREEN, Self::RESET, msg);
    }

    pub fn error(msg: &str) {
        eprintln!("{}✗{} {}", Self::RED, Self::RESET, msg);
    }

    pub fn item(label: &str, value: &str) {
        println!("  {}{:>6}{} {}", Self::DIM, label, Self::RESET, value);
    }
}
