mod item_calculator;
mod item_formatter;

pub use item_calculator::ItemCalculator;
pub use item_formatter::ItemFormatter;
