//! Statement layouts.
//!
//! A layout is a tree of section definitions. Leaves claim an account-code
//! range; groups only collect children. Layouts are plain data and can be
//! deserialized from configuration, so any chart of accounts can be plugged
//! in. The built-in layouts follow the Spanish *Plan General de Contabilidad*
//! at two-digit group granularity.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::error::ChartError;
use super::range::AccountCodeRange;

/// Well-known section codes.
///
/// Statement builders and ratio inputs look sections up by these codes.
/// Custom layouts should reuse them for the sections they represent;
/// a missing section reads as zero.
pub mod codes {
    /// Non-current assets group.
    pub const NON_CURRENT_ASSETS: &str = "non_current_assets";
    /// Current assets group.
    pub const CURRENT_ASSETS: &str = "current_assets";
    /// Inventories.
    pub const INVENTORIES: &str = "inventories";
    /// Trade receivables.
    pub const TRADE_RECEIVABLES: &str = "trade_receivables";
    /// Cash and cash equivalents.
    pub const CASH: &str = "cash";
    /// Equity group.
    pub const EQUITY: &str = "equity";
    /// Result of the period, derived from revenue and expense accounts.
    pub const PERIOD_RESULT: &str = "period_result";
    /// Non-current liabilities group.
    pub const NON_CURRENT_LIABILITIES: &str = "non_current_liabilities";
    /// Current liabilities group.
    pub const CURRENT_LIABILITIES: &str = "current_liabilities";
    /// Trade payables.
    pub const TRADE_PAYABLES: &str = "trade_payables";
    /// Operating income group.
    pub const OPERATING_INCOME: &str = "operating_income";
    /// Net sales.
    pub const NET_SALES: &str = "net_sales";
    /// Operating expenses group.
    pub const OPERATING_EXPENSES: &str = "operating_expenses";
    /// Supplies (cost of sales).
    pub const SUPPLIES: &str = "supplies";
    /// Financial income group.
    pub const FINANCIAL_INCOME: &str = "financial_income";
    /// Financial expenses group.
    pub const FINANCIAL_EXPENSES: &str = "financial_expenses";
    /// Income tax group.
    pub const INCOME_TAX: &str = "income_tax";
}

/// Definition of one statement section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDef {
    /// Section code, unique within a layout.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Account range (leaves only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<AccountCodeRange>,
    /// Child sections (groups only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SectionDef>,
}

impl SectionDef {
    /// Creates a leaf section over `[start, end)`.
    pub fn leaf(
        code: impl Into<String>,
        name: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            range: Some(AccountCodeRange {
                start: start.into(),
                end: end.into(),
            }),
            children: Vec::new(),
        }
    }

    /// Creates a group section.
    pub fn group(code: impl Into<String>, name: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            range: None,
            children,
        }
    }

    /// Returns true if the section has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn collect<'a>(&'a self, all: &mut Vec<&'a Self>) {
        all.push(self);
        for child in &self.children {
            child.collect(all);
        }
    }
}

/// An ordered list of top-level sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLayout {
    /// Top-level sections in display order.
    pub sections: Vec<SectionDef>,
}

impl StatementLayout {
    /// Creates a layout from top-level sections.
    #[must_use]
    pub fn new(sections: Vec<SectionDef>) -> Self {
        Self { sections }
    }

    /// Returns every section, depth first.
    #[must_use]
    pub fn all_sections(&self) -> Vec<&SectionDef> {
        let mut all = Vec::new();
        for section in &self.sections {
            section.collect(&mut all);
        }
        all
    }

    /// Validates the layout on its own.
    ///
    /// # Errors
    ///
    /// Rejects duplicate section codes, leaves without a valid range, groups
    /// with a range, and overlapping leaf ranges.
    pub fn validate(&self) -> Result<(), ChartError> {
        validate_sections(&self.all_sections())
    }

    /// The built-in PGC income statement.
    ///
    /// Group 63 (taxes) is reported entirely as income tax at this
    /// granularity.
    #[must_use]
    pub fn pgc_income_statement() -> Self {
        Self::new(vec![
            SectionDef::group(
                codes::OPERATING_INCOME,
                "Ingresos de explotación",
                vec![
                    SectionDef::leaf(codes::NET_SALES, "Importe neto de la cifra de negocios", "70", "71"),
                    SectionDef::leaf("inventory_change", "Variación de existencias", "71", "72"),
                    SectionDef::leaf("own_work_capitalized", "Trabajos realizados para la empresa", "73", "74"),
                    SectionDef::leaf("operating_grants", "Subvenciones de explotación", "74", "75"),
                    SectionDef::leaf("other_operating_income", "Otros ingresos de gestión", "75", "76"),
                    SectionDef::leaf("disposal_gains", "Beneficios procedentes de activos no corrientes", "77", "78"),
                    SectionDef::leaf("provision_reversals", "Excesos y aplicaciones de provisiones", "79", "80"),
                ],
            ),
            SectionDef::group(
                codes::OPERATING_EXPENSES,
                "Gastos de explotación",
                vec![
                    SectionDef::leaf(codes::SUPPLIES, "Aprovisionamientos", "60", "62"),
                    SectionDef::leaf("external_services", "Servicios exteriores", "62", "63"),
                    SectionDef::leaf("personnel_expenses", "Gastos de personal", "64", "65"),
                    SectionDef::leaf("other_operating_expenses", "Otros gastos de gestión", "65", "66"),
                    SectionDef::leaf("disposal_losses", "Pérdidas procedentes de activos no corrientes", "67", "68"),
                    SectionDef::leaf("depreciation", "Amortización del inmovilizado", "68", "69"),
                    SectionDef::leaf("impairment_losses", "Pérdidas por deterioro y otras dotaciones", "69", "70"),
                ],
            ),
            SectionDef::group(
                codes::FINANCIAL_INCOME,
                "Ingresos financieros",
                vec![SectionDef::leaf("financial_income_accounts", "Ingresos financieros", "76", "77")],
            ),
            SectionDef::group(
                codes::FINANCIAL_EXPENSES,
                "Gastos financieros",
                vec![SectionDef::leaf("financial_expense_accounts", "Gastos financieros", "66", "67")],
            ),
            SectionDef::group(
                codes::INCOME_TAX,
                "Impuestos",
                vec![SectionDef::leaf("taxes", "Impuesto sobre beneficios y tributos", "63", "64")],
            ),
        ])
    }
}

/// Balance sheet layout: the assets side and the equity-and-liabilities side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetLayout {
    /// Assets side.
    pub assets: StatementLayout,
    /// Equity and liabilities side.
    pub equity_and_liabilities: StatementLayout,
}

impl BalanceSheetLayout {
    /// Validates both sides together, so no code range is claimed twice.
    ///
    /// # Errors
    ///
    /// See [`StatementLayout::validate`].
    pub fn validate(&self) -> Result<(), ChartError> {
        let mut all = self.assets.all_sections();
        all.extend(self.equity_and_liabilities.all_sections());
        validate_sections(&all)
    }

    /// The built-in PGC balance sheet.
    ///
    /// Group 46 (staff) and group 47 (public administrations) are reported
    /// as current liabilities at this granularity.
    #[must_use]
    pub fn pgc() -> Self {
        let assets = StatementLayout::new(vec![
            SectionDef::group(
                codes::NON_CURRENT_ASSETS,
                "Activo no corriente",
                vec![
                    SectionDef::leaf("intangible_assets", "Inmovilizado intangible", "20", "21"),
                    SectionDef::leaf("tangible_assets", "Inmovilizado material", "21", "24"),
                    SectionDef::leaf("long_term_investments", "Inversiones financieras a largo plazo", "24", "28"),
                    SectionDef::leaf("accumulated_depreciation", "Amortización acumulada y deterioro", "28", "30"),
                ],
            ),
            SectionDef::group(
                codes::CURRENT_ASSETS,
                "Activo corriente",
                vec![
                    SectionDef::leaf(codes::INVENTORIES, "Existencias", "30", "40"),
                    SectionDef::leaf(codes::TRADE_RECEIVABLES, "Deudores comerciales", "43", "45"),
                    SectionDef::leaf("prepayments", "Periodificaciones a corto plazo", "48", "49"),
                    SectionDef::leaf("receivable_impairment", "Deterioro de créditos comerciales", "49", "50"),
                    SectionDef::leaf("short_term_investments", "Inversiones financieras a corto plazo", "53", "57"),
                    SectionDef::leaf(codes::CASH, "Efectivo y otros activos líquidos", "57", "58"),
                ],
            ),
        ]);

        let equity_and_liabilities = StatementLayout::new(vec![
            SectionDef::group(
                codes::EQUITY,
                "Patrimonio neto",
                vec![
                    SectionDef::leaf("share_capital", "Capital", "10", "11"),
                    SectionDef::leaf("reserves", "Reservas", "11", "12"),
                    SectionDef::leaf("retained_earnings", "Resultados pendientes de aplicación", "12", "13"),
                    SectionDef::leaf("capital_grants", "Subvenciones, donaciones y legados", "13", "14"),
                ],
            ),
            SectionDef::group(
                codes::NON_CURRENT_LIABILITIES,
                "Pasivo no corriente",
                vec![
                    SectionDef::leaf("long_term_provisions", "Provisiones a largo plazo", "14", "15"),
                    SectionDef::leaf("long_term_debt", "Deudas a largo plazo", "15", "19"),
                ],
            ),
            SectionDef::group(
                codes::CURRENT_LIABILITIES,
                "Pasivo corriente",
                vec![
                    SectionDef::leaf(codes::TRADE_PAYABLES, "Proveedores y acreedores", "40", "42"),
                    SectionDef::leaf("staff_payables", "Personal", "46", "47"),
                    SectionDef::leaf("public_administrations", "Administraciones públicas", "47", "48"),
                    SectionDef::leaf("short_term_debt", "Deudas a corto plazo", "50", "53"),
                ],
            ),
        ]);

        Self {
            assets,
            equity_and_liabilities,
        }
    }
}

fn validate_sections(all: &[&SectionDef]) -> Result<(), ChartError> {
    let mut seen_codes = HashSet::with_capacity(all.len());
    let mut leaves: Vec<(&str, &AccountCodeRange)> = Vec::new();

    for section in all {
        if !seen_codes.insert(section.code.as_str()) {
            return Err(ChartError::DuplicateSectionCode(section.code.clone()));
        }

        match (&section.range, section.is_leaf()) {
            (Some(range), true) => {
                range.validate()?;
                leaves.push((section.code.as_str(), range));
            }
            (None, true) => return Err(ChartError::LeafWithoutRange(section.code.clone())),
            (Some(_), false) => return Err(ChartError::GroupWithRange(section.code.clone())),
            (None, false) => {}
        }
    }

    for (i, (first, first_range)) in leaves.iter().enumerate() {
        for (second, second_range) in &leaves[i + 1..] {
            if first_range.overlaps(second_range) {
                return Err(ChartError::OverlappingRanges {
                    first: (*first).to_string(),
                    second: (*second).to_string(),
                });
            }
        }
    }

    Ok(())
}
