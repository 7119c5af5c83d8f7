pub mod sparkline;

pub use sparkline::{bar_text, sparkline_text, MiniSparkline};
