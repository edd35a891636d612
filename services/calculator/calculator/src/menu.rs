use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Menu entries, keyed by the text the user types to select them
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter, EnumString)]
pub enum MenuOption {
    #[strum(serialize = "1")]
    Sum,
    #[strum(serialize = "2")]
    Difference,
    #[strum(serialize = "3")]
    Product,
    #[strum(serialize = "4")]
    Quotient,
    #[strum(serialize = "5")]
    Power,
    #[strum(serialize = "6")]
    SquareRoot,
    #[strum(serialize = "7")]
    ShowHistory,
    #[strum(serialize = "8")]
    ClearHistory,
    #[strum(serialize = "9")]
    LastResult,
    #[strum(serialize = "0")]
    Exit,
}

impl MenuOption {
    pub fn label(self) -> &'static str {
        match self {
            Self::Sum => "Sum",
            Self::Difference => "Difference",
            Self::Product => "Product",
            Self::Quotient => "Quotient",
            Self::Power => "Power",
            Self::SquareRoot => "Square Root",
            Self::ShowHistory => "Show History",
            Self::ClearHistory => "Clear History",
            Self::LastResult => "Last Result",
            Self::Exit => "Exit",
        }
    }
}

pub fn render(width: usize) -> String {
    let rule = "=".repeat(width);
    let mut menu = format!("\n{}\nCALCULATOR\n{}\n", rule, rule);
    for option in MenuOption::iter() {
        menu.push_str(&format!("{}. {}\n", option.as_ref(), option.label()));
    }
    menu.push_str(&rule);
    menu.push('\n');
    menu
}
