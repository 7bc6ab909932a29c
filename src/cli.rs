use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "lazygrid", version, about = "Terminal admin dashboard built on a data grid")]
pub struct Args {
    /// Screen to open first
    #[arg(short, long, value_enum)]
    pub screen: Option<ScreenArg>,

    /// Theme name (e.g., "Catppuccin Latte")
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Initial page size for every grid
    #[arg(short, long)]
    pub page_size: Option<usize>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenArg {
    Users,
    Products,
    Categories,
    Orders,
}

impl ScreenArg {
    pub const fn tab_index(self) -> usize {
        match self {
            Self::Users => 0,
            Self::Products => 1,
            Self::Categories => 2,
            Self::Orders => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_overrides() {
        let args = Args::parse_from(["lazygrid", "--screen", "orders", "--page-size", "20"]);
        assert_eq!(args.screen, Some(ScreenArg::Orders));
        assert_eq!(args.page_size, Some(20));
        assert_eq!(args.theme, None);
    }
}
