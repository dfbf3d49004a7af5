//! Dashboard Sections
//!
//! The seven finance areas, their routes and the shape of their loading
//! placeholders.

use crate::components::skeleton::SkeletonLayout;

/// A top-level dashboard section
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Accounts,
    Budgets,
    Categories,
    Cycles,
    Savings,
    Templates,
    Transactions,
}

impl Section {
    /// All sections in navigation order
    pub const ALL: [Section; 7] = [
        Section::Accounts,
        Section::Budgets,
        Section::Categories,
        Section::Cycles,
        Section::Savings,
        Section::Templates,
        Section::Transactions,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Section::Accounts => "/accounts",
            Section::Budgets => "/budgets",
            Section::Categories => "/categories",
            Section::Cycles => "/cycles",
            Section::Savings => "/savings",
            Section::Templates => "/templates",
            Section::Transactions => "/transactions",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Accounts => "Accounts",
            Section::Budgets => "Budgets",
            Section::Categories => "Categories",
            Section::Cycles => "Billing Cycles",
            Section::Savings => "Savings",
            Section::Templates => "Templates",
            Section::Transactions => "Transactions",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Section::Accounts => "Bank accounts, cards and wallets",
            Section::Budgets => "Spending limits per cycle",
            Section::Categories => "How your money is grouped",
            Section::Cycles => "Billing periods and their totals",
            Section::Savings => "Savings funds and goals",
            Section::Templates => "Reusable recurring transactions",
            Section::Transactions => "Every income and expense",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Accounts => "🏦",
            Section::Budgets => "📊",
            Section::Categories => "🏷️",
            Section::Cycles => "🔁",
            Section::Savings => "🐷",
            Section::Templates => "📋",
            Section::Transactions => "💸",
        }
    }

    /// Whether the loading view reserves a summary block above the content
    pub fn show_summary(&self) -> bool {
        matches!(
            self,
            Section::Accounts | Section::Budgets | Section::Savings | Section::Transactions
        )
    }

    pub fn layout(&self) -> SkeletonLayout {
        match self {
            Section::Cycles | Section::Transactions => SkeletonLayout::Table,
            _ => SkeletonLayout::List,
        }
    }

    /// Asset folder for entity images, if entities in this section carry one
    pub fn image_folder(&self) -> Option<&'static str> {
        match self {
            Section::Accounts => Some("accounts"),
            Section::Categories => Some("categories"),
            Section::Savings => Some("savings"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = Section::ALL.iter().map(|s| s.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 7);
    }

    #[test]
    fn test_table_sections() {
        let tables: Vec<_> = Section::ALL
            .into_iter()
            .filter(|s| s.layout() == SkeletonLayout::Table)
            .collect();
        assert_eq!(tables, vec![Section::Cycles, Section::Transactions]);
    }

    #[test]
    fn test_image_folders() {
        assert_eq!(Section::Accounts.image_folder(), Some("accounts"));
        assert_eq!(Section::Transactions.image_folder(), None);
    }
}
